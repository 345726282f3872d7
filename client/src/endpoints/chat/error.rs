use std::fmt;

use thiserror::Error;

/// Reasons a chat completion request is rejected before it is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("You may use only one, frequency_penalty or presence_penalty. Not both.")]
    MutuallyExclusivePenalties,
    #[error("{field} must be between {allowed} included, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        allowed: AllowedRange,
    },
}

/// Inclusive bound of a numeric generation parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllowedRange {
    pub min: f64,
    pub max: f64,
}

impl AllowedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for AllowedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} and {:?}", self.min, self.max)
    }
}
