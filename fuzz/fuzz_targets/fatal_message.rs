/*
 * fuzz_targets/fatal_message.rs
 *
 * fuzz target for fatal message composition. input is split on NUL into
 * context messages; qualify + render must never panic and must keep the
 * layout: earlier messages untouched, ':' only on the last.
 *
 * edge cases: no messages, empty messages, messages already ending in ':'
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use runtimex::testing::RecordingProcess;
use runtimex::{Fatal, qualify, render};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = core::str::from_utf8(data) else {
        return;
    };
    let msgs: Vec<&str> = if s.is_empty() { Vec::new() } else { s.split('\0').collect() };

    let q = qualify(&msgs);
    assert_eq!(q.len(), msgs.len());
    if let Some((last, init)) = q.split_last() {
        for (got, want) in init.iter().zip(&msgs) {
            assert_eq!(&**got, *want);
        }
        assert_eq!(last.strip_suffix(':'), msgs.last().copied());
    }

    let rec = RecordingProcess::new();
    Fatal::new(&rec).log_fatal_on_error(Some("err"), &msgs);
    let logged = rec.fatal_logs();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].len(), msgs.len() + 1);

    let args: Vec<&dyn core::fmt::Display> = logged[0].iter().map(|a| a as &dyn core::fmt::Display).collect();
    let _ = render(&args);
});
