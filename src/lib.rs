/*
 * lib.rs
 *
 * Helpers for code that must not fail. Two families:
 *   assert.rs - panic when an invariant breaks or an impossible error shows up
 *   fatal.rs  - exit the process when a top-level operation fails
 *
 * No globals. Whatever ends the process is a Process value you pass in.
 */

//! # runtimex
//!
//! Helpers for code paths that are not expected to fail, where failure
//! means a programmer error or an unrecoverable condition.
//!
//! ## When to use what
//!
//! - [`assert_true`]: enforce an invariant in library code. Write the
//!   invariant and its justification in a comment above the call.
//! - [`unwrap1`] and friends: consume `(value, error)` pairs where the error
//!   cannot happen in correct use. The panic payload is the error itself.
//! - [`log_fatal_on_error`] and friends: in `main`, when a failure should
//!   print and exit with status 1. [`exit_on_error`] exits without printing.
//!
//! ## Quick Start
//!
//! ```rust
//! use runtimex::testing::RecordingProcess;
//! use runtimex::{Fatal, unwrap2};
//!
//! // impossible error: both halves come from a literal
//! let (head, tail) = unwrap2("key", "value", None::<std::io::Error>);
//! assert_eq!((head, tail), ("key", "value"));
//!
//! // observe the fatal path without exiting
//! let rec = RecordingProcess::new();
//! Fatal::new(&rec).log_fatal_on_error(Some("disk full"), &["saving state"]);
//! assert_eq!(rec.fatal_logs(), vec![vec!["saving state:", "disk full"]]);
//! ```

pub mod assert;
pub mod error;
pub mod fatal;
pub mod io;
pub mod process;
pub mod testing;

pub use assert::{assert_not_error, assert_true, unwrap0, unwrap1, unwrap2, unwrap3};
pub use error::{ASSERTION_FAILED, exit_codes};
pub use fatal::{
    Fatal, exit_on_error, log_fatal_on_error, log_fatal_on_error0, log_fatal_on_error1,
    log_fatal_on_error2, log_fatal_on_error3, qualify,
};
pub use process::{LogProcess, OsProcess, Process, render};
