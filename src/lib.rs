//! # `boolpack`: Packed boolean arrays in Rust
//!
//! `boolpack` stores a fixed-length sequence of booleans in an array of unsigned words,
//! one bit per boolean, taking 8 times less space than `Vec<bool>`.
//!
//! ## Data structures
//!
//! - [`PackedBoolArray`]
//!   - Fixed-length boolean array with constant-time single-bit reads and writes and
//!     sequence-style slices. The word type (`u8` to `u128`) is a type parameter,
//!     `u32` by default.
//! - [`AddressTranslator`](address::AddressTranslator)
//!   - Constants mapping a bit position to a word index and an in-word offset.
//!
//! ## Errors
//!
//! Single-index accesses reject positions outside `[0, len)`, negative ones included,
//! with [`Error::OutOfRange`]. Writes accept genuine booleans only and report anything
//! else with [`Error::InvalidValueType`]. Slices clamp their endpoints instead.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use boolpack::{Error, PackedBoolArray, SliceSpec};
//!
//! let mut pa = PackedBoolArray::<u8>::new(10);
//! pa.set_range(SliceSpec::default().step_by(2), [true; 5])?;
//! assert_eq!(pa.count_ones(), 5);
//! assert_eq!(pa.words(), &[0b0101_0101, 0b01]);
//!
//! assert_eq!(pa.get(10), Err(Error::OutOfRange { pos: 10, len: 10 }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Arrays carry no internal synchronization. A write touches exactly one word, so
//! callers sharing an array across threads can guard it with one lock, or partition
//! it by word index.
#![deny(missing_docs)]

pub mod address;
pub mod error;
pub mod packed_bool_array;
pub mod serial;
pub mod slice_spec;
mod utils;
pub mod value;
pub mod word;

pub use address::AddressTranslator;
pub use error::{Error, Result};
pub use packed_bool_array::PackedBoolArray;
pub use serial::Serializable;
pub use slice_spec::{SliceIndices, SliceSpec};
pub use value::BitValue;
pub use word::Word;

/// An interface for accessing elements on bit arrays.
pub trait Access {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<bool>;
}
