/*
 * process.rs
 *
 * The termination capability. Everything that ends the process goes
 * through a Process value handed in by the caller; nothing here is global.
 *
 * Real implementations never return from terminate() or fatal_log().
 * Test doubles do, which is the point: callers of the helpers must not
 * rely on the call diverging (see testing.rs).
 */

use core::fmt;

use crate::error::exit_codes;
use crate::io;

/// Process-ending operations the fatal helpers need.
pub trait Process {
    /// End the process with exit status `code`.
    fn terminate(&self, code: i32);

    /// Print `args` as one line, then end the process with status 1.
    fn fatal_log(&self, args: &[&dyn fmt::Display]);
}

impl<P: Process + ?Sized> Process for &P {
    fn terminate(&self, code: i32) {
        (**self).terminate(code);
    }

    fn fatal_log(&self, args: &[&dyn fmt::Display]) {
        (**self).fatal_log(args);
    }
}

/// Space-separated display of a fatal argument list.
///
/// Formats lazily; `to_string()` it when an owned line is needed.
pub struct Rendered<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

/// Render `args` the way every real [`Process`] prints them.
#[must_use]
pub fn render(args: &[&dyn fmt::Display]) -> String {
    Rendered(args).to_string()
}

/// The operating system: stderr, then `exit(2)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OsProcess;

impl Process for OsProcess {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }

    fn fatal_log(&self, args: &[&dyn fmt::Display]) {
        io::eprint_line(format_args!("{}", Rendered(args)));
        self.terminate(exit_codes::FAILURE);
    }
}

/// Like [`OsProcess`], but the message goes through the `log` facade.
///
/// Logged at error level, then the installed logger is flushed before
/// exiting. If no logger would accept an error record (none installed,
/// or the max level is `Off`) the line goes to stderr instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogProcess;

impl Process for LogProcess {
    fn terminate(&self, code: i32) {
        log::logger().flush();
        std::process::exit(code);
    }

    fn fatal_log(&self, args: &[&dyn fmt::Display]) {
        if log::log_enabled!(log::Level::Error) {
            log::error!("{}", Rendered(args));
        } else {
            io::eprint_line(format_args!("{}", Rendered(args)));
        }
        self.terminate(exit_codes::FAILURE);
    }
}
