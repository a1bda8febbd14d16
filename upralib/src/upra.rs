//! Register catalog for the UPduino SoC peripherals.
//!
//! Bit-exact contract with the hardware: block base addresses, register
//! order, and the per-register masks of hardware-backed bits. The masks
//! are sparse because only the I/O-capable pins of the SG48 package are
//! wired up; see [`crate::pins`] for the per-pin bit positions.

// Physical base addresses of registers
pub const HW_GPIO_BASE: usize = 0x4000_0000;
pub const HW_IOMUX_BASE: usize = 0x4001_0000;
pub const HW_PWM1_BASE: usize = 0x4002_0000;
pub const HW_PWM2_BASE: usize = 0x4002_0100;
pub const HW_PWM3_BASE: usize = 0x4002_0200;

/// GPIO bank: 16 pins per register, 2 bits per pin.
/// Bit 0 of each pair is the pin value, bit 1 the direction
/// (0 = input, 1 = output).
pub mod gpio {
    pub const GPIO_NUMREGS: usize = 4;

    /// Pins 0-15
    pub const P1: crate::Register = crate::Register::new(0, 0x0FCC_03F0);
    /// Pins 16-31
    pub const P2: crate::Register = crate::Register::new(1, 0xC0FC_CCF0);
    /// Pins 32-47
    pub const P3: crate::Register = crate::Register::new(2, 0xFFFF_FFFF);
    /// Pins 48-63 (only pin 48 exists)
    pub const P4: crate::Register = crate::Register::new(3, 0x0000_0003);

    pub const HW_GPIO_BASE: usize = 0x4000_0000;
}

/// Pin multiplexer: 8 pins per register, 4 bits per pin. Each field holds
/// the function code selecting which peripheral drives the pin.
pub mod iomux {
    pub const IOMUX_NUMREGS: usize = 7;

    /// Pins 0-7
    pub const CFG1: crate::Register = crate::Register::new(0, 0x000F_FF00);
    /// Pins 8-15
    pub const CFG2: crate::Register = crate::Register::new(1, 0x00FF_F0F0);
    /// Pins 16-23
    pub const CFG3: crate::Register = crate::Register::new(2, 0xF0F0_FF00);
    /// Pins 24-31
    pub const CFG4: crate::Register = crate::Register::new(3, 0xF000_FFF0);
    /// Pins 32-39
    pub const CFG5: crate::Register = crate::Register::new(4, 0xFFFF_FFFF);
    /// Pins 40-47
    pub const CFG6: crate::Register = crate::Register::new(5, 0xFFFF_FFFF);
    /// Pins 48-55 (only pin 48 exists)
    pub const CFG7: crate::Register = crate::Register::new(6, 0x0000_000F);

    pub const HW_IOMUX_BASE: usize = 0x4001_0000;
}

/// PWM compare unit #1. A single control register; `CR_CMP` is compared
/// against the unit's free-running 8-bit counter to set the duty cycle.
pub mod pwm1 {
    pub const PWM1_NUMREGS: usize = 1;

    pub const CR: crate::Register = crate::Register::new(0, 0xFF);
    pub const CR_CMP: crate::Field = crate::Field::new(8, 0, CR);

    pub const HW_PWM1_BASE: usize = 0x4002_0000;
}

/// PWM compare unit #2.
pub mod pwm2 {
    pub const PWM2_NUMREGS: usize = 1;

    pub const CR: crate::Register = crate::Register::new(0, 0xFF);
    pub const CR_CMP: crate::Field = crate::Field::new(8, 0, CR);

    pub const HW_PWM2_BASE: usize = 0x4002_0100;
}

/// PWM compare unit #3.
pub mod pwm3 {
    pub const PWM3_NUMREGS: usize = 1;

    pub const CR: crate::Register = crate::Register::new(0, 0xFF);
    pub const CR_CMP: crate::Field = crate::Field::new(8, 0, CR);

    pub const HW_PWM3_BASE: usize = 0x4002_0200;
}
