#![cfg_attr(not(test), no_std)]

//! UPRA: thin register abstraction for the UPduino RV32I SoC.
//!
//! The SoC exposes three peripheral kinds as memory-mapped blocks of 32-bit
//! registers: a GPIO bank, a pin multiplexer, and three PWM compare units.
//! This crate is the bit-exact catalog of those blocks (`upra`), the static
//! pin-binding tables (`pins`), and the typed accessors that all firmware
//! uses to touch them. Higher layers never see raw addresses; they see a
//! [`CSR`] handle plus `Register`/`Field` descriptors, which also makes the
//! whole stack testable against a plain in-memory word array standing in
//! for the hardware.

use core::convert::TryInto;

pub mod pins;
pub mod upra;

pub use upra::{HW_GPIO_BASE, HW_IOMUX_BASE, HW_PWM1_BASE, HW_PWM2_BASE, HW_PWM3_BASE};

#[derive(Debug, Copy, Clone)]
pub struct Register {
    /// Offset of this register within its block, in 32-bit words.
    offset: usize,
    /// Mask of the bits actually backed by hardware in this register.
    mask: usize,
}
impl Register {
    pub const fn new(offset: usize, mask: usize) -> Register {
        Register { offset, mask }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn mask(&self) -> usize {
        self.mask
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Field {
    /// A bitmask we use to AND to the value, unshifted.
    /// E.g. for a width of `3` bits, this mask would be 0b111.
    mask: usize,
    /// Offset of the first bit in this field
    offset: usize,
    /// A copy of the register address that this field
    /// is a member of. Ideally this is optimized out by the
    /// compiler.
    register: Register,
}
impl Field {
    /// Define a new field with the given width at a specified
    /// offset from the start of the register.
    pub const fn new(width: usize, offset: usize, register: Register) -> Field {
        let mask = if width < 32 { (1 << width) - 1 } else { 0xFFFF_FFFF };
        Field { mask, offset, register }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn mask(&self) -> usize {
        self.mask
    }

    pub const fn register(&self) -> Register {
        self.register
    }
}

/// Accessor for one peripheral register block.
///
/// Wraps the block's base pointer; all accesses are volatile and bracketed
/// with compiler fences so the stores reach the bus in program order. The
/// base can just as well point at a `[u32; N]` on the host, which is how the
/// register-map tests run without hardware.
#[derive(Debug, Copy, Clone)]
pub struct CSR<T> {
    base: *mut T,
}
impl<T> CSR<T>
where
    T: core::convert::TryFrom<usize> + core::convert::TryInto<usize> + core::default::Default,
{
    pub fn new(base: *mut T) -> Self {
        CSR { base }
    }

    /// Retrieve the raw pointer used as the base of the CSR. This is unsafe because the copied
    /// value can be used to do all kinds of awful shared mutable operations (like creating
    /// another CSR accessor owned by another thread). However, sometimes this is unavoidable
    /// because hardware is in fact shared mutable state.
    pub unsafe fn base(&self) -> *mut T {
        self.base
    }

    /// Read the contents of this register
    pub fn r(&self, reg: Register) -> T {
        // prevent re-ordering
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);

        let usize_base: *mut usize = unsafe { core::mem::transmute(self.base) };
        unsafe { usize_base.add(reg.offset).read_volatile() }.try_into().unwrap_or_default()
    }

    /// Read a field from this CSR
    pub fn rf(&self, field: Field) -> T {
        // prevent re-ordering
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);

        let usize_base: *mut usize = unsafe { core::mem::transmute(self.base) };
        ((unsafe { usize_base.add(field.register.offset).read_volatile() } >> field.offset)
            & field.mask)
            .try_into()
            .unwrap_or_default()
    }

    /// Read-modify-write a given field in this CSR. Mandatory for any
    /// register that packs more than one logical field into a word: a blind
    /// overwrite would corrupt the sibling fields.
    pub fn rmwf(&mut self, field: Field, value: T) {
        let usize_base: *mut usize = unsafe { core::mem::transmute(self.base) };
        let value_as_usize: usize = value.try_into().unwrap_or_default() << field.offset;
        let previous = unsafe { usize_base.add(field.register.offset).read_volatile() }
            & !(field.mask << field.offset);
        unsafe { usize_base.add(field.register.offset).write_volatile(previous | value_as_usize) };
        // prevent re-ordering
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }

    /// Write a given field without reading it first
    pub fn wfo(&mut self, field: Field, value: T) {
        let usize_base: *mut usize = unsafe { core::mem::transmute(self.base) };
        let value_as_usize: usize = (value.try_into().unwrap_or_default() & field.mask) << field.offset;
        unsafe { usize_base.add(field.register.offset).write_volatile(value_as_usize) };
        // Ensure the compiler doesn't re-order the write.
        // We use `SeqCst`, because `Acquire` only prevents later accesses from being reordered before
        // *reads*, but this method only *writes* to the locations.
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }

    /// Write the entire contents of a register without reading it first.
    /// Only appropriate for registers holding exactly one logical value,
    /// such as a PWM compare register.
    pub fn wo(&mut self, reg: Register, value: T) {
        let usize_base: *mut usize = unsafe { core::mem::transmute(self.base) };
        let value_as_usize: usize = value.try_into().unwrap_or_default();
        unsafe { usize_base.add(reg.offset).write_volatile(value_as_usize) };
        // Ensure the compiler doesn't re-order the write.
        // We use `SeqCst`, because `Acquire` only prevents later accesses from being reordered before
        // *reads*, but this method only *writes* to the locations.
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }

    /// Zero a field from a provided value
    pub fn zf(&self, field: Field, value: T) -> T {
        let value_as_usize: usize = value.try_into().unwrap_or_default();
        (value_as_usize & !(field.mask << field.offset)).try_into().unwrap_or_default()
    }

    /// Shift & mask a value to its final field position
    pub fn ms(&self, field: Field, value: T) -> T {
        let value_as_usize: usize = value.try_into().unwrap_or_default();
        ((value_as_usize & field.mask) << field.offset).try_into().unwrap_or_default()
    }
}
