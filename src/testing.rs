/*
 * testing.rs
 *
 * A Process that writes down what it was asked to do instead of doing it.
 * Lets tests drive the fatal helpers in-process and check call counts and
 * arguments.
 *
 * Arguments are rendered to strings at record time since the borrowed
 * Display values don't outlive the call.
 */

use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::process::Process;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `terminate(code)`
    Terminate(i32),
    /// `fatal_log(args)`, each argument rendered with `Display`
    FatalLog(Vec<String>),
}

/// Records calls, never terminates. `Sync`, so it can be shared across threads.
#[derive(Debug, Default)]
pub struct RecordingProcess {
    calls: Mutex<Vec<Call>>,
}

impl RecordingProcess {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.lock().clone()
    }

    /// Codes passed to `terminate`, in order.
    #[must_use]
    pub fn terminations(&self) -> Vec<i32> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Call::Terminate(code) => Some(*code),
                Call::FatalLog(_) => None,
            })
            .collect()
    }

    /// Argument lists passed to `fatal_log`, in order.
    #[must_use]
    pub fn fatal_logs(&self) -> Vec<Vec<String>> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Call::FatalLog(args) => Some(args.clone()),
                Call::Terminate(_) => None,
            })
            .collect()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /* a panicking test thread must not hide the calls from the others */
    fn lock(&self) -> MutexGuard<'_, Vec<Call>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Process for RecordingProcess {
    fn terminate(&self, code: i32) {
        self.lock().push(Call::Terminate(code));
    }

    fn fatal_log(&self, args: &[&dyn fmt::Display]) {
        let args = args.iter().map(ToString::to_string).collect();
        self.lock().push(Call::FatalLog(args));
    }
}
