//! Errors reported by packed boolean arrays.
use thiserror::Error;

/// A specialized [`Result`](std::result::Result) for operations on packed arrays.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type of [`PackedBoolArray`](crate::PackedBoolArray) operations.
///
/// Every variant carries the inputs that triggered it, so callers can inspect
/// the failing index or value without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A single bit index outside `[0, len)`, negative indices included.
    #[error("pos must be in 0..{len}, but got {pos}.")]
    OutOfRange {
        /// The rejected index.
        pos: i128,
        /// Number of bits of the array.
        len: usize,
    },

    /// A value to be written that is not a genuine `bool`.
    #[error("value written at {pos} must be a bool, but got {value}.")]
    InvalidValueType {
        /// Target index of the rejected write.
        pos: i128,
        /// Debug rendering of the rejected value.
        value: String,
    },

    /// Construction parameters that cannot describe a packed array.
    #[error("{0}")]
    Construction(String),

    /// A slice whose step is zero.
    #[error("slice step cannot be zero.")]
    ZeroStep,
}
