//! Raw Linux x86-64 system call entry.
//!
//! The kernel is entered through the `syscall` instruction with the
//! selector in `rax` and arguments in `rdi`/`rsi`/`rdx`; `rcx` and `r11`
//! are clobbered by the instruction itself.

use core::arch::asm;
use core::hint::unreachable_unchecked;

use crate::syscall_numbers::*;

#[inline(always)]
pub unsafe fn syscall_invoke(num: u64, arg0: u64, arg1: u64, arg2: u64) -> i64 {
    let ret: i64;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") arg0,
            in("rsi") arg1,
            in("rdx") arg2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
fn invoke(num: u64, arg0: u64, arg1: u64, arg2: u64) -> i64 {
    unsafe { syscall_invoke(num, arg0, arg1, arg2) }
}

/// Terminate the process with the given exit status. Does not return.
pub extern "C" fn sys_exit(status: i32) -> ! {
    invoke(SYSCALL_EXIT, status as u64, 0, 0);
    unsafe { unreachable_unchecked() }
}
