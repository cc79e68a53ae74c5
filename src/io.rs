/*
 * io.rs
 *
 * stderr output for the fatal path.
 * direct writes via libc::write, no std::io buffering or locking.
 *
 * the process is about to exit, so there is nothing to flush later and
 * nobody to report a write error to. EINTR is retried, everything else
 * drops the rest of the message.
 */

use core::fmt::{self, Write};

/// Write bytes to stderr, looping over partial writes.
#[cfg(unix)]
pub fn write_stderr(mut buf: &[u8]) {
    while !buf.is_empty() {
        // SAFETY: buf is a valid byte slice for buf.len() bytes and
        // STDERR_FILENO is always a valid descriptor number.
        let n = unsafe { libc::write(libc::STDERR_FILENO, buf.as_ptr().cast(), buf.len()) };
        if n < 0 {
            if std::io::Error::last_os_error().kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return;
        }
        if n == 0 {
            return;
        }
        #[allow(clippy::cast_sign_loss)]
        let written = n as usize;
        buf = &buf[written.min(buf.len())..];
    }
}

/* no raw fd outside unix; unlocked std handle is the closest thing */
#[cfg(not(unix))]
pub fn write_stderr(buf: &[u8]) {
    use std::io::Write as _;
    let _ = std::io::stderr().write_all(buf);
}

/// A writer that outputs to stderr via direct syscall.
/// Implements core::fmt::Write for use with write!/writeln! macros.
pub struct StderrWriter;

impl Write for StderrWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_stderr(s.as_bytes());
        Ok(())
    }
}

/// Write one formatted line to stderr.
///
/// Formats into a single buffer first so the line goes out in one
/// write(2) where possible and doesn't interleave with other threads.
pub fn eprint_line(args: fmt::Arguments<'_>) {
    let mut line = String::new();
    let _ = line.write_fmt(args);
    line.push('\n');
    write_stderr(line.as_bytes());
}
