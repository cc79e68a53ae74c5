/*
 * error.rs
 *
 * Exit codes and abort payloads. Small on purpose: every failure this
 * crate produces is terminal, so there is no error enum to return.
 *
 * 1 is the generic failure status. Silent and logged exits both use it.
 */

/// exit codes used by the termination helpers. don't change these.
pub mod exit_codes {
    /// Normal termination
    pub const SUCCESS: i32 = 0;
    /// Any fatal operational error, logged or silent
    pub const FAILURE: i32 = 1;
}

/// Payload of the panic raised by [`assert_true`](crate::assert_true).
///
/// Constant across call sites. The panic location identifies the caller.
pub const ASSERTION_FAILED: &str = "assertion failed";
