//! Static pin bindings for the SG48 package.
//!
//! Each I/O-capable pin maps to exactly one 2-bit field in the GPIO bank
//! and one 4-bit field in the pin multiplexer. The positions are not
//! derivable from the pin number alone (the package skips pads, and low-
//! and high-numbered pins alias across the two register numbering schemes),
//! so the whole table is spelled out here and nowhere else.

use crate::upra::{gpio, iomux};
use crate::{Field, CSR};

/// Function codes accepted by a pin's multiplexer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PinFunction {
    /// Pin is driven by the GPIO bank (reset default).
    Gpio = 0x0,
    /// Pin is driven by PWM compare unit #1.
    Pwm1 = 0x1,
    /// Pin is driven by PWM compare unit #2.
    Pwm2 = 0x2,
    /// Pin is driven by PWM compare unit #3.
    Pwm3 = 0x3,
}

/// GPIO direction values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PinMode {
    Input = 0,
    Output = 1,
}

/// One pin's worth of the offset tables: where its value, direction and
/// function-code bits live, and which function codes it accepts.
#[derive(Debug, Clone, Copy)]
pub struct PinBinding {
    pub pin: u8,
    /// Pin value bit in the GPIO bank (writes only stick in output mode).
    pub value: Field,
    /// Pin direction bit in the GPIO bank.
    pub dir: Field,
    /// Function-code field in the pin multiplexer.
    pub mux: Field,
    funcs: &'static [PinFunction],
}

const ALL_FUNCS: &[PinFunction] =
    &[PinFunction::Gpio, PinFunction::Pwm1, PinFunction::Pwm2, PinFunction::Pwm3];

impl PinBinding {
    const fn new(
        pin: u8,
        gpio_reg: crate::Register,
        gpio_off: usize,
        mux_reg: crate::Register,
        mux_off: usize,
    ) -> PinBinding {
        PinBinding {
            pin,
            value: Field::new(1, gpio_off, gpio_reg),
            dir: Field::new(1, gpio_off + 1, gpio_reg),
            mux: Field::new(4, mux_off, mux_reg),
            funcs: ALL_FUNCS,
        }
    }

    /// Whether `func` is a valid code for this pin.
    pub fn supports(&self, func: PinFunction) -> bool {
        self.funcs.iter().any(|&f| f == func)
    }
}

pub const PIN2: PinBinding = PinBinding::new(2, gpio::P1, 4, iomux::CFG1, 8);
pub const PIN3: PinBinding = PinBinding::new(3, gpio::P1, 6, iomux::CFG1, 12);
pub const PIN4: PinBinding = PinBinding::new(4, gpio::P1, 8, iomux::CFG1, 16);
pub const PIN9: PinBinding = PinBinding::new(9, gpio::P1, 18, iomux::CFG2, 4);
pub const PIN11: PinBinding = PinBinding::new(11, gpio::P1, 22, iomux::CFG2, 12);
pub const PIN12: PinBinding = PinBinding::new(12, gpio::P1, 24, iomux::CFG2, 16);
pub const PIN13: PinBinding = PinBinding::new(13, gpio::P1, 26, iomux::CFG2, 20);
pub const PIN18: PinBinding = PinBinding::new(18, gpio::P2, 4, iomux::CFG3, 8);
pub const PIN19: PinBinding = PinBinding::new(19, gpio::P2, 6, iomux::CFG3, 12);
pub const PIN21: PinBinding = PinBinding::new(21, gpio::P2, 10, iomux::CFG3, 20);
pub const PIN23: PinBinding = PinBinding::new(23, gpio::P2, 14, iomux::CFG3, 28);
pub const PIN25: PinBinding = PinBinding::new(25, gpio::P2, 18, iomux::CFG4, 4);
pub const PIN26: PinBinding = PinBinding::new(26, gpio::P2, 20, iomux::CFG4, 8);
pub const PIN27: PinBinding = PinBinding::new(27, gpio::P2, 22, iomux::CFG4, 12);
pub const PIN31: PinBinding = PinBinding::new(31, gpio::P2, 30, iomux::CFG4, 28);
pub const PIN32: PinBinding = PinBinding::new(32, gpio::P3, 0, iomux::CFG5, 0);
pub const PIN33: PinBinding = PinBinding::new(33, gpio::P3, 2, iomux::CFG5, 4);
pub const PIN34: PinBinding = PinBinding::new(34, gpio::P3, 4, iomux::CFG5, 8);
pub const PIN35: PinBinding = PinBinding::new(35, gpio::P3, 6, iomux::CFG5, 12);
pub const PIN36: PinBinding = PinBinding::new(36, gpio::P3, 8, iomux::CFG5, 16);
pub const PIN37: PinBinding = PinBinding::new(37, gpio::P3, 10, iomux::CFG5, 20);
pub const PIN38: PinBinding = PinBinding::new(38, gpio::P3, 12, iomux::CFG5, 24);
pub const PIN39: PinBinding = PinBinding::new(39, gpio::P3, 14, iomux::CFG5, 28);
pub const PIN40: PinBinding = PinBinding::new(40, gpio::P3, 16, iomux::CFG6, 0);
pub const PIN41: PinBinding = PinBinding::new(41, gpio::P3, 18, iomux::CFG6, 4);
pub const PIN42: PinBinding = PinBinding::new(42, gpio::P3, 20, iomux::CFG6, 8);
pub const PIN43: PinBinding = PinBinding::new(43, gpio::P3, 22, iomux::CFG6, 12);
pub const PIN44: PinBinding = PinBinding::new(44, gpio::P3, 24, iomux::CFG6, 16);
pub const PIN45: PinBinding = PinBinding::new(45, gpio::P3, 26, iomux::CFG6, 20);
pub const PIN46: PinBinding = PinBinding::new(46, gpio::P3, 28, iomux::CFG6, 24);
pub const PIN47: PinBinding = PinBinding::new(47, gpio::P3, 30, iomux::CFG6, 28);
pub const PIN48: PinBinding = PinBinding::new(48, gpio::P4, 0, iomux::CFG7, 0);

/// All bound pins, in package order. Pins missing from this table (1, 5-8,
/// 10, 14-17, 20, 22, 24, 28-30) have no I/O pad and accept no function.
pub const PIN_BINDINGS: &[PinBinding] = &[
    PIN2, PIN3, PIN4, PIN9, PIN11, PIN12, PIN13, PIN18, PIN19, PIN21, PIN23, PIN25, PIN26, PIN27,
    PIN31, PIN32, PIN33, PIN34, PIN35, PIN36, PIN37, PIN38, PIN39, PIN40, PIN41, PIN42, PIN43,
    PIN44, PIN45, PIN46, PIN47, PIN48,
];

/// Look up the binding for a logical pin number.
pub fn binding(pin: u8) -> Option<&'static PinBinding> {
    PIN_BINDINGS.iter().find(|b| b.pin == pin)
}

/// Select which peripheral drives a pin.
///
/// Read-modify-write of the pin's multiplexer field only; sibling pins in
/// the same CFG word are left untouched. `func` must be one of the pin's
/// valid codes; that is a design-time contract, so the release build writes
/// unconditionally and only debug builds check it.
pub fn route_pin<T>(iomux: &mut CSR<T>, pin: &PinBinding, func: PinFunction)
where
    T: core::convert::TryFrom<usize> + core::convert::TryInto<usize> + core::default::Default,
{
    debug_assert!(pin.supports(func));
    iomux.rmwf(pin.mux, T::try_from(func as usize).unwrap_or_default());
}

/// Set a pin's GPIO direction, leaving its value bit and every other pin's
/// bits in the same register alone.
pub fn set_pin_mode<T>(gpio: &mut CSR<T>, pin: &PinBinding, mode: PinMode)
where
    T: core::convert::TryFrom<usize> + core::convert::TryInto<usize> + core::default::Default,
{
    gpio.rmwf(pin.dir, T::try_from(mode as usize).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upra;

    // The offset table is safety-critical data; spot-check it against the
    // device documentation at both ends of each numbering run.
    #[test]
    fn binding_table_matches_device() {
        assert_eq!(PIN2.value.register().offset(), 0);
        assert_eq!(PIN2.value.offset(), 4);
        assert_eq!(PIN2.dir.offset(), 5);
        assert_eq!(PIN2.mux.register().offset(), 0);
        assert_eq!(PIN2.mux.offset(), 8);

        assert_eq!(PIN13.value.offset(), 26);
        assert_eq!(PIN13.mux.register().offset(), 1);
        assert_eq!(PIN13.mux.offset(), 20);

        assert_eq!(PIN18.value.register().offset(), 1);
        assert_eq!(PIN18.value.offset(), 4);
        assert_eq!(PIN31.value.offset(), 30);
        assert_eq!(PIN31.mux.register().offset(), 3);
        assert_eq!(PIN31.mux.offset(), 28);

        // The numbering wraps across register boundaries: 39 is the last
        // field of CFG5, 40 the first of CFG6.
        assert_eq!(PIN39.mux.register().offset(), 4);
        assert_eq!(PIN39.mux.offset(), 28);
        assert_eq!(PIN40.mux.register().offset(), 5);
        assert_eq!(PIN40.mux.offset(), 0);
        assert_eq!(PIN40.value.register().offset(), 2);
        assert_eq!(PIN40.value.offset(), 16);

        assert_eq!(PIN48.value.register().offset(), 3);
        assert_eq!(PIN48.value.offset(), 0);
        assert_eq!(PIN48.mux.register().offset(), 6);
        assert_eq!(PIN48.mux.offset(), 0);
    }

    #[test]
    fn unbound_pins_have_no_binding() {
        for pin in [0u8, 1, 5, 6, 7, 8, 10, 20, 30, 49, 255] {
            assert!(binding(pin).is_none(), "pin {} should be unbound", pin);
        }
        assert_eq!(binding(39).unwrap().pin, 39);
    }

    #[test]
    fn every_binding_sits_in_hardware_backed_bits() {
        for b in PIN_BINDINGS {
            let greg = b.value.register();
            let gmask = 0b11 << b.value.offset();
            assert_eq!(greg.mask() & gmask, gmask, "pin {} gpio bits unbacked", b.pin);
            assert_eq!(b.dir.offset(), b.value.offset() + 1);

            let mreg = b.mux.register();
            let mmask = 0xF << b.mux.offset();
            assert_eq!(mreg.mask() & mmask, mmask, "pin {} mux bits unbacked", b.pin);
        }
    }

    // The CSR accessor strides in machine words, so host-side stand-in
    // blocks are [usize; N]; on the 32-bit target usize is the register
    // width and the same code runs against the real blocks.
    #[test]
    fn route_pin_leaves_sibling_fields_alone() {
        let mut block = [0usize; upra::iomux::IOMUX_NUMREGS];
        // Pre-seed CFG5 with a known pattern so a blind overwrite or an
        // OR-style write would be caught.
        block[4] = 0x7234_5671;
        block[5] = 0xCAFE_F00D;
        let mut iomux = CSR::new(block.as_mut_ptr());

        route_pin(&mut iomux, &PIN39, PinFunction::Pwm1);

        assert_eq!(block[4], 0x1234_5671, "only the pin 39 field may change");
        assert_eq!(block[5], 0xCAFE_F00D, "sibling register must be untouched");
    }

    #[test]
    fn startup_routing_is_idempotent() {
        let mut block = [0usize; upra::iomux::IOMUX_NUMREGS];
        let mut iomux = CSR::new(block.as_mut_ptr());

        let route_all = |iomux: &mut CSR<usize>| {
            route_pin(iomux, &PIN39, PinFunction::Pwm1);
            route_pin(iomux, &PIN40, PinFunction::Pwm2);
            route_pin(iomux, &PIN41, PinFunction::Pwm3);
        };

        route_all(&mut iomux);
        let once = block;

        let mut iomux = CSR::new(block.as_mut_ptr());
        route_all(&mut iomux);
        assert_eq!(block, once);
    }

    #[test]
    fn set_pin_mode_touches_only_the_direction_bit() {
        let mut block = [0usize; upra::gpio::GPIO_NUMREGS];
        block[2] = 0x0000_4001; // pins 32 (value) and 39 (value) already set
        let mut gpio = CSR::new(block.as_mut_ptr());

        set_pin_mode(&mut gpio, &PIN39, PinMode::Output);
        assert_eq!(block[2], 0x0000_C001);

        set_pin_mode(&mut gpio, &PIN39, PinMode::Input);
        assert_eq!(block[2], 0x0000_4001);
    }
}
