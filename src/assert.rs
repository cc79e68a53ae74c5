/*
 * assert.rs
 *
 * Invariant checks and unwrap-or-abort.
 *
 * Abort means panic. The boolean check panics with a constant message;
 * the error checks panic with the caller's error as the payload, untouched,
 * so whoever catches the unwind can downcast and get it back.
 *
 * Use these where failure is a programmer error, and say why the path is
 * unreachable in a comment at the call site.
 */

use core::any::Any;
use std::panic::panic_any;

use crate::error::ASSERTION_FAILED;

/// Panic if `value` is false.
///
/// The payload is the constant [`ASSERTION_FAILED`] string, whatever the
/// call site. Document the invariant above the call:
///
/// ```
/// // Invariant: the buffer is never empty after a successful fill.
/// let buf = vec![0u8; 4];
/// runtimex::assert_true(!buf.is_empty());
/// ```
#[track_caller]
#[inline]
pub fn assert_true(value: bool) {
    if !value {
        panic_any(ASSERTION_FAILED);
    }
}

/// Panic with `err` as the payload if an error is present.
///
/// The payload is `err` itself, not its message. Catch the unwind and
/// `downcast::<E>()` to recover it.
#[track_caller]
#[inline]
pub fn assert_not_error<E: Any + Send>(err: Option<E>) {
    if let Some(err) = err {
        panic_any(err);
    }
}

/// Same as [`assert_not_error`], for operations that return nothing else.
///
/// ```
/// fn flush() -> Option<std::io::Error> { None }
///
/// runtimex::unwrap0(flush());
/// ```
#[track_caller]
#[inline]
pub fn unwrap0<E: Any + Send>(err: Option<E>) {
    assert_not_error(err);
}

/// Return `v1` if no error is present, otherwise panic with `err`.
///
/// Equivalent to branching on the error and panicking, but fits inline
/// where the value is consumed.
#[track_caller]
#[inline]
pub fn unwrap1<T1, E: Any + Send>(v1: T1, err: Option<E>) -> T1 {
    assert_not_error(err);
    v1
}

/// Two-value form of [`unwrap1`].
#[track_caller]
#[inline]
pub fn unwrap2<T1, T2, E: Any + Send>(v1: T1, v2: T2, err: Option<E>) -> (T1, T2) {
    assert_not_error(err);
    (v1, v2)
}

/// Three-value form of [`unwrap1`].
#[track_caller]
#[inline]
pub fn unwrap3<T1, T2, T3, E: Any + Send>(
    v1: T1,
    v2: T2,
    v3: T3,
    err: Option<E>,
) -> (T1, T2, T3) {
    assert_not_error(err);
    (v1, v2, v3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestError(&'static str);

    /* run f, expect a panic, hand back the payload */
    fn payload_of<R>(f: impl FnOnce() -> R + std::panic::UnwindSafe) -> Box<dyn Any + Send> {
        match catch_unwind(f) {
            Ok(_) => panic!("expected a panic"),
            Err(payload) => payload,
        }
    }

    #[test]
    fn test_assert_true_passes() {
        assert_true(true);
    }

    #[test]
    fn test_assert_true_panics_with_constant() {
        let payload = payload_of(|| assert_true(false));
        let msg = payload.downcast_ref::<&str>().expect("&str payload");
        assert_eq!(*msg, ASSERTION_FAILED);
    }

    #[test]
    fn test_assert_not_error_none() {
        assert_not_error::<TestError>(None);
    }

    #[test]
    fn test_assert_not_error_carries_err() {
        let payload = payload_of(|| assert_not_error(Some(TestError("boom"))));
        let err = payload.downcast::<TestError>().expect("payload is the error");
        assert_eq!(*err, TestError("boom"));
    }

    #[test]
    fn test_payload_is_not_stringified() {
        let payload = payload_of(|| unwrap0(Some(TestError("raw"))));
        assert!(payload.downcast_ref::<String>().is_none());
        assert!(payload.downcast_ref::<&str>().is_none());
        assert!(payload.is::<TestError>());
    }

    #[test]
    fn test_unwrap1_returns_value() {
        assert_eq!(unwrap1("test value", None::<TestError>), "test value");
    }

    #[test]
    fn test_unwrap1_moves_value() {
        let v = vec![1, 2, 3];
        let ptr = v.as_ptr();
        let out = unwrap1(v, None::<TestError>);
        /* moved, not copied */
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_unwrap2_returns_values() {
        let (a, b) = unwrap2("first", 42, None::<TestError>);
        assert_eq!(a, "first");
        assert_eq!(b, 42);
    }

    #[test]
    fn test_unwrap3_returns_values() {
        let (a, b, c) = unwrap3("first", 42, true, None::<TestError>);
        assert_eq!(a, "first");
        assert_eq!(b, 42);
        assert!(c);
    }

    #[test]
    fn test_unwrap_n_panics_with_err() {
        let p1 = payload_of(|| unwrap1("value", Some(TestError("one"))));
        let p2 = payload_of(|| unwrap2("value1", "value2", Some(TestError("two"))));
        let p3 = payload_of(|| unwrap3("value1", "value2", "value3", Some(TestError("three"))));

        assert_eq!(*p1.downcast::<TestError>().unwrap(), TestError("one"));
        assert_eq!(*p2.downcast::<TestError>().unwrap(), TestError("two"));
        assert_eq!(*p3.downcast::<TestError>().unwrap(), TestError("three"));
    }

    #[test]
    fn test_io_error_payload_keeps_kind() {
        let payload = payload_of(|| {
            unwrap1(
                0u8,
                Some(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            )
        });
        let err = payload.downcast::<std::io::Error>().unwrap();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "gone");
    }
}
