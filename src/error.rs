use thiserror::Error;

/// Returned by the strict constructors, naming the offending slot.
///
/// Slots are checked in positional order, so a constructor given several
/// null values reports the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NullValue {
    #[error("first value is null")]
    First,
    #[error("second value is null")]
    Second,
    #[error("third value is null")]
    Third,
}
