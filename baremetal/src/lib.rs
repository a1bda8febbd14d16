#![cfg_attr(not(test), no_std)]

//! Shared support for the UPduino SoC hardware test programs.
//!
//! The boot stage owns `_start`, the stack, and data/bss initialization;
//! each program only exports a `rust_entry` that is called once memory is
//! ready and that never returns.

pub mod blink;
pub mod colorwheel;

// Install a panic handler when running on the target. There is no UART or
// other output peripheral on this SoC, so all we can do is park the hart.
// Each bin must reference this crate for the handler to be linked in.
#[cfg(all(target_arch = "riscv32", not(test)))]
mod panic_handler {
    use core::panic::PanicInfo;
    #[panic_handler]
    fn handle_panic(_arg: &PanicInfo) -> ! {
        loop {
            riscv::asm::nop();
        }
    }
}
