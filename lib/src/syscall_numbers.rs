// Linux x86-64 syscall numbers (rax on entry)
pub const SYSCALL_GETPID: u64 = 39;
pub const SYSCALL_EXIT: u64 = 60;
