#![no_std]

pub mod syscall_numbers;
pub mod user_syscall;
