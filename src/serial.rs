//! Utilities for serialization.
pub mod primitive;

use std::io::{Read, Write};

use anyhow::Result;

/// Trait to serialize/deserialize packed arrays and their words.
///
/// Words and lengths are written in little-endian order, so serialized arrays are
/// portable across targets even though the in-memory words are native.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use boolpack::{PackedBoolArray, Serializable};
///
/// let pa = PackedBoolArray::<u16>::from_bits([true, false, false, true]);
///
/// let mut bytes = vec![];
/// let size = pa.serialize_into(&mut bytes)?;
/// let other = PackedBoolArray::<u16>::deserialize_from(&bytes[..])?;
///
/// assert_eq!(pa, other);
/// assert_eq!(size, bytes.len());
/// assert_eq!(size, pa.size_in_bytes());
/// # Ok(())
/// # }
/// ```
pub trait Serializable: Sized {
    /// Serializes the data structure into the writer,
    /// returning the number of serialized bytes.
    ///
    /// # Arguments
    ///
    /// - `writer`: [`Write`] variable.
    fn serialize_into<W: Write>(&self, writer: W) -> Result<usize>;

    /// Deserializes the data structure from the reader.
    ///
    /// # Arguments
    ///
    /// - `reader`: [`Read`] variable.
    fn deserialize_from<R: Read>(reader: R) -> Result<Self>;

    /// Returns the number of bytes to serialize the data structure.
    fn size_in_bytes(&self) -> usize;

    /// Returns the size of a primitive type in bytes (if the type is so).
    fn size_of() -> Option<usize> {
        None
    }
}

/// Upper bound of elements reserved up front when decoding a vector.
const MAX_PREALLOC: usize = 1 << 12;

impl<S> Serializable for Vec<S>
where
    S: Serializable,
{
    fn serialize_into<W: Write>(&self, mut writer: W) -> Result<usize> {
        let mut mem = self.len().serialize_into(&mut writer)?;
        for x in self {
            mem += x.serialize_into(&mut writer)?;
        }
        Ok(mem)
    }

    fn deserialize_from<R: Read>(mut reader: R) -> Result<Self> {
        let len = usize::deserialize_from(&mut reader)?;
        // The count comes from the stream; grow as elements actually arrive.
        let mut vec = Self::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            vec.push(S::deserialize_from(&mut reader)?);
        }
        Ok(vec)
    }

    fn size_in_bytes(&self) -> usize {
        let header = usize::size_of().unwrap();
        S::size_of().map_or_else(
            || header + self.iter().fold(0, |acc, x| acc + x.size_in_bytes()),
            |m| header + m * self.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec() {
        let words: Vec<u16> = vec![0x0102, 0xff00, 7];
        let mut bytes = vec![];
        let size = words.serialize_into(&mut bytes).unwrap();
        assert_eq!(size, bytes.len());
        assert_eq!(size, words.size_in_bytes());
        let header = usize::size_of().unwrap();
        assert_eq!(&bytes[header..header + 2], &[0x02, 0x01]);
        let other = Vec::<u16>::deserialize_from(&bytes[..]).unwrap();
        assert_eq!(words, other);
    }

    #[test]
    fn test_oversized_count() {
        let mut bytes = vec![];
        (usize::MAX / 2).serialize_into(&mut bytes).unwrap();
        7u64.serialize_into(&mut bytes).unwrap();
        assert!(Vec::<u64>::deserialize_from(&bytes[..]).is_err());
    }

    #[test]
    fn test_truncated() {
        let words: Vec<u32> = vec![1, 2, 3];
        let mut bytes = vec![];
        words.serialize_into(&mut bytes).unwrap();
        bytes.pop();
        assert!(Vec::<u32>::deserialize_from(&bytes[..]).is_err());
    }
}
