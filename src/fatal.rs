/*
 * fatal.rs
 *
 * Ending the process when a top-level operation fails.
 *
 * Two exits, picked by which function you call, not by a flag:
 *   exit_on_error        - status 1, prints nothing
 *   log_fatal_on_error*  - prints the error (optionally qualified), status 1
 *
 * The numbered log_fatal_on_errorN forms pass values through on success.
 * The unnumbered form takes context strings and appends ':' to the last one,
 * so ("loading config") reads "loading config: <err>".
 *
 * Against a real Process none of the failure branches return. Against a
 * test double they do, and the numbered forms hand back their inputs.
 */

use core::fmt;
use std::borrow::Cow;

use crate::error::exit_codes;
use crate::process::{OsProcess, Process};

/// The fatal helpers, bound to a [`Process`].
///
/// ```no_run
/// use runtimex::Fatal;
///
/// fn load() -> (String, Option<std::io::Error>) {
///     (String::new(), None)
/// }
///
/// let fatal = Fatal::os();
/// let (cfg, err) = load();
/// fatal.log_fatal_on_error(err, &["loading config"]);
/// # let _ = cfg;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Fatal<P = OsProcess> {
    process: P,
}

impl Fatal<OsProcess> {
    /// Helpers that really exit.
    #[must_use]
    pub const fn os() -> Self {
        Self { process: OsProcess }
    }
}

impl<P: Process> Fatal<P> {
    /// Helpers that end the process through `process`.
    #[must_use]
    pub const fn new(process: P) -> Self {
        Self { process }
    }

    /// The bound capability.
    pub fn process(&self) -> &P {
        &self.process
    }

    /// Exit with status 1 if an error is present. Prints nothing.
    ///
    /// Report the error yourself first if anyone should see it.
    pub fn exit_on_error<E>(&self, err: Option<E>) {
        if err.is_some() {
            self.process.terminate(exit_codes::FAILURE);
        }
    }

    /// Log `err` and exit if present.
    pub fn log_fatal_on_error0<E: fmt::Display>(&self, err: Option<E>) {
        if let Some(err) = err {
            self.process.fatal_log(&[&err]);
        }
    }

    /// Log `err` and exit if present, otherwise return `v1`.
    pub fn log_fatal_on_error1<T1, E: fmt::Display>(&self, v1: T1, err: Option<E>) -> T1 {
        self.log_fatal_on_error0(err);
        v1
    }

    /// Two-value form of [`log_fatal_on_error1`](Self::log_fatal_on_error1).
    pub fn log_fatal_on_error2<T1, T2, E: fmt::Display>(
        &self,
        v1: T1,
        v2: T2,
        err: Option<E>,
    ) -> (T1, T2) {
        self.log_fatal_on_error0(err);
        (v1, v2)
    }

    /// Three-value form of [`log_fatal_on_error1`](Self::log_fatal_on_error1).
    pub fn log_fatal_on_error3<T1, T2, T3, E: fmt::Display>(
        &self,
        v1: T1,
        v2: T2,
        v3: T3,
        err: Option<E>,
    ) -> (T1, T2, T3) {
        self.log_fatal_on_error0(err);
        (v1, v2, v3)
    }

    /// Log `err`, prefixed by `msgs`, and exit if present.
    ///
    /// The last message gets a trailing `:`. The error goes last:
    /// `(err, &["fatal:", "cannot open", "config file"])` logs
    /// `["fatal:", "cannot open", "config file:", err]`.
    /// With no messages only the error is logged.
    pub fn log_fatal_on_error<E: fmt::Display>(&self, err: Option<E>, msgs: &[&str]) {
        let Some(err) = err else {
            return;
        };
        let qualified = qualify(msgs);
        let mut args: Vec<&dyn fmt::Display> = Vec::with_capacity(qualified.len() + 1);
        args.extend(qualified.iter().map(|m| m as &dyn fmt::Display));
        args.push(&err);
        self.process.fatal_log(&args);
    }
}

/// Append `:` to the last message, leave the others alone.
#[must_use]
pub fn qualify<'a>(msgs: &[&'a str]) -> Vec<Cow<'a, str>> {
    let mut out: Vec<Cow<'a, str>> = msgs.iter().map(|m| Cow::Borrowed(*m)).collect();
    if let Some(last) = out.last_mut() {
        last.to_mut().push(':');
    }
    out
}

/* free functions: same helpers against the real process */

/// [`Fatal::exit_on_error`] against the OS.
pub fn exit_on_error<E>(err: Option<E>) {
    Fatal::os().exit_on_error(err);
}

/// [`Fatal::log_fatal_on_error0`] against the OS.
pub fn log_fatal_on_error0<E: fmt::Display>(err: Option<E>) {
    Fatal::os().log_fatal_on_error0(err);
}

/// [`Fatal::log_fatal_on_error1`] against the OS.
pub fn log_fatal_on_error1<T1, E: fmt::Display>(v1: T1, err: Option<E>) -> T1 {
    Fatal::os().log_fatal_on_error1(v1, err)
}

/// [`Fatal::log_fatal_on_error2`] against the OS.
pub fn log_fatal_on_error2<T1, T2, E: fmt::Display>(v1: T1, v2: T2, err: Option<E>) -> (T1, T2) {
    Fatal::os().log_fatal_on_error2(v1, v2, err)
}

/// [`Fatal::log_fatal_on_error3`] against the OS.
pub fn log_fatal_on_error3<T1, T2, T3, E: fmt::Display>(
    v1: T1,
    v2: T2,
    v3: T3,
    err: Option<E>,
) -> (T1, T2, T3) {
    Fatal::os().log_fatal_on_error3(v1, v2, v3, err)
}

/// [`Fatal::log_fatal_on_error`] against the OS.
pub fn log_fatal_on_error<E: fmt::Display>(err: Option<E>, msgs: &[&str]) {
    Fatal::os().log_fatal_on_error(err, msgs);
}
