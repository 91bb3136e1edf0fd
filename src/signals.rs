use nix::libc;
use nix::sys::signal::{self, SigHandler, Signal};

/// Printed when the user interrupts a session.
pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";

/// Make Ctrl-C report the cancellation and exit with status 0.
///
/// Directories and files written so far are left in place.
pub fn install_interrupt_handler() -> nix::Result<()> {
    // SAFETY: the handler only calls async-signal-safe functions.
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_interrupt))?;
    }

    Ok(())
}

extern "C" fn handle_interrupt(_: i32) {
    write_stdout(b"\n");
    write_stdout(CANCELLED_MESSAGE.as_bytes());
    write_stdout(b"\n");

    // SAFETY: _exit is async-signal-safe and skips atexit handlers and stdio buffers.
    unsafe { libc::_exit(0) };
}

fn write_stdout(bytes: &[u8]) {
    // SAFETY: writing a valid buffer to fd 1; short writes are acceptable here.
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            bytes.as_ptr() as *const libc::c_void,
            bytes.len(),
        );
    }
}
