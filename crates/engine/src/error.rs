//! Errors raised by engine mutators.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The minimum-rating threshold only takes whole values 0 through 4
    #[error("Minimum rating must be between 0 and {max}, got {value}")]
    RatingOutOfRange { value: u8, max: u8 },
}
