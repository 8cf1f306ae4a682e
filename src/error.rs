//! Failure kinds raised and caught during the demo run.

use thiserror::Error;

/// The two demo failure signals.
///
/// Each carries only its fixed message. A handler matches the exact kind it
/// expects; anything else falls through to a wider handler.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DemoFailure {
    #[error("Custom Exception 1")]
    First,
    #[error("Custom Exception 2")]
    Second,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(DemoFailure::First.to_string(), "Custom Exception 1");
        assert_eq!(DemoFailure::Second.to_string(), "Custom Exception 2");
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(DemoFailure::First, DemoFailure::Second);
    }

    #[test]
    fn test_each_kind_matches_only_its_own_arm() {
        let caught = match Err::<(), _>(DemoFailure::First) {
            Err(DemoFailure::First) => "first",
            Err(DemoFailure::Second) => "second",
            Ok(()) => "none",
        };
        assert_eq!(caught, "first");

        let caught = match Err::<(), _>(DemoFailure::Second) {
            Err(DemoFailure::First) => "first",
            Err(DemoFailure::Second) => "second",
            Ok(()) => "none",
        };
        assert_eq!(caught, "second");
    }

    #[test]
    fn test_failure_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<DemoFailure>();
        assert_sync::<DemoFailure>();
    }
}
