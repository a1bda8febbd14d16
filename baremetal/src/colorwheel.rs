//! Tick-driven color wheel for the three PWM-driven LED channels.
//!
//! The per-tick transition is a pure function of the tick count and the
//! channel states; the firmware loop in `pwm_test` only forwards the
//! returned compare values to the PWM blocks. That split keeps the state
//! machine testable on the host without hardware or an infinite loop.

/// Upper bound for a channel's compare value. Stops short of the PWM's
/// full 8-bit range so the LEDs never reach max brightness.
pub const CHANNEL_MAX: i32 = 0x1F;

/// A bounded ping-pong counter: climbs to [`CHANNEL_MAX`], reverses, falls
/// to zero, reverses again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    value: i32,
    dir: i32,
}

impl Channel {
    pub const fn new(value: i32, dir: i32) -> Channel {
        Channel { value, dir }
    }

    pub fn value(&self) -> u32 {
        self.value as u32
    }

    pub fn ascending(&self) -> bool {
        self.dir > 0
    }

    /// Advance one step and return the new compare value.
    ///
    /// The bound check runs after the step, so the counter sits exactly on
    /// a bound for one update window before reversing. The hardware demo
    /// has always behaved this way; don't "fix" it to check first.
    pub fn step(&mut self) -> u32 {
        self.value += self.dir;
        if self.value == CHANNEL_MAX || self.value == 0 {
            self.dir = -self.dir;
        }
        self.value as u32
    }
}

/// Rate gate for the color transitions.
///
/// Updates fire only when the low byte of the tick counter rolls over
/// while bit 8 is set, i.e. once at the entry of every other 256-tick
/// window. The result is a periodic burst pattern rather than a flat
/// modulus, and since only low-order bits are tested, counter wrap-around
/// never desynchronizes it.
pub fn tick_gate(tick: u32) -> bool {
    (tick & 0xFF) == 0 && (tick & 0x100) != 0
}

/// The three channel states, deliberately started out of phase so the
/// colors drift against each other instead of pulsing in lockstep.
#[derive(Debug, Clone, Copy)]
pub struct ColorWheel {
    green: Channel,
    blue: Channel,
    red: Channel,
}

impl ColorWheel {
    pub const fn new() -> ColorWheel {
        ColorWheel {
            green: Channel::new(0, 1),
            blue: Channel::new(10, -1),
            red: Channel::new(20, 1),
        }
    }

    pub fn channels(&self) -> [Channel; 3] {
        [self.green, self.blue, self.red]
    }

    /// One loop iteration's worth of work: `None` while the gate is
    /// closed; otherwise the new `[green, blue, red]` compare values for
    /// PWM units 1-3.
    pub fn update(&mut self, tick: u32) -> Option<[u32; 3]> {
        if !tick_gate(tick) {
            return None;
        }
        Some([self.green.step(), self.blue.step(), self.red.step()])
    }
}
