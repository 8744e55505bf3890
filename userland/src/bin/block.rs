#![no_std]
#![no_main]

use block_lib::user_syscall::sys_exit;
use block_userland::block::block_main;

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    block_main();
    sys_exit(0);
}
