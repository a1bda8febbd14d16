//! Toggle gating for the LED blink demo.
//!
//! Each LED follows one bit of a free-running counter: while the bit is
//! set the LED toggles on every loop iteration, while it is clear the LED
//! holds. Higher bits give longer hold windows, so the three LEDs blink
//! at staggered multi-second periods.

/// Whether `counter` is inside the toggle window selected by `bit`.
pub fn toggle_gate(counter: u32, bit: u32) -> bool {
    (counter >> bit) & 1 == 1
}
