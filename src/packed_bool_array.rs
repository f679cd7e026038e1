//! Fixed-length boolean array packed into unsigned words.
pub mod iter;

use std::io::{Read, Write};

use anyhow::anyhow;
use num_traits::{NumCast, PrimInt};

use crate::address::AddressTranslator;
use crate::error::{Error, Result};
use crate::slice_spec::SliceSpec;
use crate::utils::BitRows;
use crate::value::BitValue;
use crate::word::Word;
use crate::{Access, Serializable};
use iter::Iter;

/// Fixed-length boolean array packed into words of type `W`.
///
/// Bit `i` lives at `(words[i / W::BITS] >> (i % W::BITS)) & 1`. The length is fixed at
/// construction; only the values of existing bits can change. Bits of the last word past
/// the length are never reachable and stay zero.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use boolpack::{Error, PackedBoolArray};
///
/// let mut pa: PackedBoolArray = PackedBoolArray::new(66);
/// assert_eq!(pa.len(), 66);
/// assert_eq!(pa.num_words(), 3);
/// assert_eq!(pa.get(5)?, false);
///
/// pa.set(7, true)?;
/// pa.set(9, true)?;
/// assert_eq!(pa.get_range(6..12)?, vec![false, true, false, true, false, false]);
///
/// assert!(matches!(pa.set(17, 2), Err(Error::InvalidValueType { .. })));
/// assert!(matches!(pa.set(99, true), Err(Error::OutOfRange { .. })));
/// assert!(matches!(pa.set(-9, true), Err(Error::OutOfRange { .. })));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PackedBoolArray<W: Word = u32> {
    words: Vec<W>,
    len: usize,
    translator: AddressTranslator,
    word_mask: W,
}

impl<W: Word> PackedBoolArray<W> {
    /// Creates a new array of `len` bits, all unset.
    ///
    /// # Arguments
    ///
    ///  - `len`: Number of bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::PackedBoolArray;
    ///
    /// let pa = PackedBoolArray::<u8>::new(20);
    /// assert_eq!(pa.len(), 20);
    /// assert_eq!(pa.num_words(), 3);
    /// assert_eq!(pa.get(19), Ok(false));
    /// ```
    pub fn new(len: usize) -> Self {
        Self::with_word_width(len, W::BITS).expect("the width of a Word is a power of two")
    }

    /// Creates a new array of `len` bits over words of `word_width` bits, all unset.
    ///
    /// # Arguments
    ///
    ///  - `len`: Number of bits.
    ///  - `word_width`: Number of bits per word, which must equal `W::BITS`.
    ///
    /// # Errors
    ///
    /// An error is returned if `word_width` is not a power of two or differs from `W::BITS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::PackedBoolArray;
    ///
    /// assert!(PackedBoolArray::<u16>::with_word_width(10, 16).is_ok());
    /// assert!(PackedBoolArray::<u16>::with_word_width(10, 12).is_err());
    /// assert!(PackedBoolArray::<u16>::with_word_width(10, 32).is_err());
    /// ```
    pub fn with_word_width(len: usize, word_width: usize) -> Result<Self> {
        let translator = AddressTranslator::new(word_width)?;
        if word_width != W::BITS {
            return Err(Error::Construction(format!(
                "word_width must be {} for {}, but got {word_width}.",
                W::BITS,
                std::any::type_name::<W>()
            )));
        }
        let word_mask = <W as NumCast>::from(translator.word_mask()).ok_or_else(|| {
            Error::Construction(format!(
                "word mask of {word_width} bits does not fit in {}.",
                std::any::type_name::<W>()
            ))
        })?;
        Ok(Self {
            words: vec![W::zero(); translator.num_words(len)],
            len,
            translator,
            word_mask,
        })
    }

    /// Creates a new array from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    ///  - `bits`: Bit stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::PackedBoolArray;
    ///
    /// let pa = PackedBoolArray::<u32>::from_bits([false, true, false]);
    /// assert_eq!(pa.len(), 3);
    /// assert_eq!(pa.get(1), Ok(true));
    /// ```
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let bits: Vec<bool> = bits.into_iter().collect();
        let mut this = Self::new(bits.len());
        for (pos, &bit) in bits.iter().enumerate() {
            if bit {
                let (word, shift) = this.translator.split(pos);
                this.words[word] = this.words[word] | (W::one() << shift);
            }
        }
        this
    }

    /// Maps `pos` to `(word_index, bit_offset)`.
    ///
    /// Positions are primitive integers; fractional positions do not type-check.
    ///
    /// ```compile_fail
    /// use boolpack::PackedBoolArray;
    ///
    /// let pa = PackedBoolArray::<u8>::new(4);
    /// let _ = pa.get(-0.5);
    /// ```
    ///
    /// ```compile_fail
    /// use boolpack::PackedBoolArray;
    ///
    /// let mut pa = PackedBoolArray::<u8>::new(4);
    /// let _ = pa.set(-0.9, false);
    /// ```
    ///
    /// # Errors
    ///
    /// An error is returned if `pos` is negative or no less than `self.len()`.
    #[inline(always)]
    pub fn translate<P: PrimInt>(&self, pos: P) -> Result<(usize, usize)> {
        match pos.to_usize() {
            Some(i) if i < self.len => Ok(self.translator.split(i)),
            _ => Err(Error::OutOfRange {
                pos: signed_pos(&pos),
                len: self.len,
            }),
        }
    }

    /// Returns the `pos`-th bit.
    ///
    /// # Arguments
    ///
    ///  - `pos`: Bit position.
    ///
    /// # Errors
    ///
    /// An error is returned if `pos` is negative or no less than `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::{Error, PackedBoolArray};
    ///
    /// let pa = PackedBoolArray::<u8>::from_bits([true, false]);
    /// assert_eq!(pa.get(0), Ok(true));
    /// assert_eq!(pa.get(1), Ok(false));
    /// assert_eq!(pa.get(2), Err(Error::OutOfRange { pos: 2, len: 2 }));
    /// assert_eq!(pa.get(-1), Err(Error::OutOfRange { pos: -1, len: 2 }));
    /// ```
    #[inline(always)]
    pub fn get<P: PrimInt>(&self, pos: P) -> Result<bool> {
        let (word, shift) = self.translate(pos)?;
        Ok(self.words[word] & (W::one() << shift) != W::zero())
    }

    /// Updates the `pos`-th bit to `bit`.
    ///
    /// Only genuine booleans are written; the array is left unchanged on failure.
    ///
    /// # Arguments
    ///
    ///  - `pos`: Bit position.
    ///  - `bit`: Bit value set.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - `bit` is not a `bool`, or
    ///  - `pos` is negative or no less than `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use boolpack::PackedBoolArray;
    ///
    /// let mut pa = PackedBoolArray::<u8>::new(3);
    /// pa.set(1, true)?;
    /// assert_eq!(pa.get(1)?, true);
    /// pa.set(1, false)?;
    /// assert_eq!(pa.get(1)?, false);
    /// assert!(pa.set(1, 1).is_err());
    /// # Ok(())
    /// # }
    /// ```
    #[inline(always)]
    pub fn set<P, V>(&mut self, pos: P, bit: V) -> Result<()>
    where
        P: PrimInt,
        V: BitValue,
    {
        let bit = bit.as_bit().ok_or_else(|| Error::InvalidValueType {
            pos: signed_pos(&pos),
            value: format!("{bit:?}"),
        })?;
        let (word, shift) = self.translate(pos)?;
        if bit {
            self.words[word] = self.words[word] | (W::one() << shift);
        } else {
            self.words[word] = self.words[word] & (!(W::one() << shift) & self.word_mask);
        }
        Ok(())
    }

    /// Returns the bits selected by `spec`, in slice order.
    ///
    /// Slice endpoints are clamped to the array rather than rejected.
    ///
    /// # Arguments
    ///
    ///  - `spec`: Range or [`SliceSpec`].
    ///
    /// # Errors
    ///
    /// An error is returned if the slice step is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use boolpack::{PackedBoolArray, SliceSpec};
    ///
    /// let pa = PackedBoolArray::<u8>::from_bits([true, true, false, false, true]);
    /// assert_eq!(pa.get_range(3..100)?, vec![false, true]);
    /// assert_eq!(pa.get_range(SliceSpec::default().step_by(-2))?, vec![true, false, true]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_range<S: Into<SliceSpec>>(&self, spec: S) -> Result<Vec<bool>> {
        spec.into()
            .indices(self.len)?
            .map(|pos| self.get(pos))
            .collect()
    }

    /// Writes `values` into the bits selected by `spec`, pairing them positionally.
    ///
    /// Writing stops at the shorter of the two sequences, and the number of bits
    /// written is returned. A value that is not a `bool` stops the writes with an error;
    /// bits written before it keep their new values.
    ///
    /// # Arguments
    ///
    ///  - `spec`: Range or [`SliceSpec`].
    ///  - `values`: Bit values set.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the slice step is zero, or
    ///  - an element of `values` is not a `bool`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use boolpack::PackedBoolArray;
    ///
    /// let mut pa = PackedBoolArray::<u8>::new(6);
    /// assert_eq!(pa.set_range(1..5, [true, true])?, 2);
    /// assert_eq!(pa.get_range(..)?, vec![false, true, true, false, false, false]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_range<S, I>(&mut self, spec: S, values: I) -> Result<usize>
    where
        S: Into<SliceSpec>,
        I: IntoIterator,
        I::Item: BitValue,
    {
        let mut written = 0;
        for (pos, bit) in spec.into().indices(self.len)?.zip(values) {
            self.set(pos, bit)?;
            written += 1;
        }
        Ok(written)
    }

    /// Creates an iterator for enumerating bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::PackedBoolArray;
    ///
    /// let pa = PackedBoolArray::<u16>::from_bits([false, true, false]);
    /// let mut it = pa.iter();
    /// assert_eq!(it.next(), Some(false));
    /// assert_eq!(it.next(), Some(true));
    /// assert_eq!(it.next(), Some(false));
    /// assert_eq!(it.next(), None);
    /// ```
    pub const fn iter(&self) -> Iter<W> {
        Iter::new(self)
    }

    /// Returns the number of bits set, counted word by word.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the number of bits unset.
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Returns the number of bits stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the array is empty.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the number of words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of bits per word.
    pub const fn word_width(&self) -> usize {
        self.translator.word_width()
    }

    /// Returns the address translator in use.
    pub const fn translator(&self) -> &AddressTranslator {
        &self.translator
    }

    /// Gets the slice of raw words.
    ///
    /// Bit `i` is `(words[i / W::BITS] >> (i % W::BITS)) & 1`; the bytes of each word
    /// are in native order.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Converts into the vector of raw words.
    pub fn into_words(self) -> Vec<W> {
        self.words
    }
}

impl<W: Word> Access for PackedBoolArray<W> {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolpack::{Access, PackedBoolArray};
    ///
    /// let pa = PackedBoolArray::<u8>::from_bits([true, false]);
    /// assert_eq!(pa.access(0), Some(true));
    /// assert_eq!(pa.access(2), None);
    /// ```
    fn access(&self, pos: usize) -> Option<bool> {
        self.get(pos).ok()
    }
}

impl<W: Word> std::fmt::Debug for PackedBoolArray<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: Vec<bool> = self.iter().collect();
        f.debug_struct("PackedBoolArray")
            .field("bits", &BitRows::new(&bits, 16))
            .field("len", &self.len)
            .field("word_width", &self.word_width())
            .finish()
    }
}

impl<W: Word> Serializable for PackedBoolArray<W> {
    fn serialize_into<T: Write>(&self, mut writer: T) -> anyhow::Result<usize> {
        let mut mem = self.word_width().serialize_into(&mut writer)?;
        mem += self.len.serialize_into(&mut writer)?;
        mem += self.words.serialize_into(&mut writer)?;
        Ok(mem)
    }

    fn deserialize_from<R: Read>(mut reader: R) -> anyhow::Result<Self> {
        let word_width = usize::deserialize_from(&mut reader)?;
        let len = usize::deserialize_from(&mut reader)?;
        let mut this = Self::with_word_width(0, word_width)?;
        let num_words = this.translator.num_words(len);
        let count = usize::deserialize_from(&mut reader)?;
        if count != num_words {
            return Err(anyhow!(
                "words.len() must be {num_words} for len={len}, but got {count}."
            ));
        }
        let words = (0..count)
            .map(|_| W::deserialize_from(&mut reader))
            .collect::<anyhow::Result<Vec<W>>>()?;
        let (last, shift) = this.translator.split(len.wrapping_sub(1));
        if len != 0 && shift + 1 < word_width && words[last] >> (shift + 1) != W::zero() {
            return Err(anyhow!("bits past len={len} must be unset."));
        }
        this.words = words;
        this.len = len;
        Ok(this)
    }

    fn size_in_bytes(&self) -> usize {
        usize::size_of().unwrap() * 2 + self.words.size_in_bytes()
    }
}

fn signed_pos<P: PrimInt>(pos: &P) -> i128 {
    pos.to_i128().unwrap_or(i128::MAX)
}
