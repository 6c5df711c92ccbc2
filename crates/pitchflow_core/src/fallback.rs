//! Explicit fallback for persistence reads.
//!
//! Callers decide what a failed read degrades to; this helper only logs the
//! substitution so it never happens silently.

use std::fmt::Display;

/// Returns the `Ok` value, or logs the error and returns `fallback()`.
pub fn or_fallback<T, E: Display>(
    result: Result<T, E>,
    event: &'static str,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::warn!("event={event} module=fallback status=fallback error={err}");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::or_fallback;

    #[test]
    fn ok_value_passes_through() {
        let value: Result<u32, String> = Ok(7);
        assert_eq!(or_fallback(value, "test.read", || 0), 7);
    }

    #[test]
    fn error_uses_fallback() {
        let value: Result<Vec<u32>, String> = Err("db locked".to_string());
        assert!(or_fallback(value, "test.read", Vec::new).is_empty());
    }
}
