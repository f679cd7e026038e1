//! Translation of bit positions into word positions.
use crate::error::{Error, Result};

/// Constants splitting a bit position into a word index and an in-word offset.
///
/// They are derived once from the word width and reused by every access.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use boolpack::address::AddressTranslator;
///
/// let tr = AddressTranslator::new(32)?;
/// assert_eq!(tr.addr_bits(), 5);
/// assert_eq!(tr.addr_mask(), 0b11111);
/// assert_eq!(tr.split(70), (2, 6));
/// assert_eq!(tr.num_words(66), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressTranslator {
    word_width: usize,
    addr_bits: usize,
    addr_mask: usize,
    word_mask: u128,
}

impl AddressTranslator {
    /// Creates the translator for words of `word_width` bits.
    ///
    /// # Arguments
    ///
    ///  - `word_width`: Number of bits per word.
    ///
    /// # Errors
    ///
    /// An error is returned if `word_width` is not a power of two, or is wider than 128.
    pub fn new(word_width: usize) -> Result<Self> {
        let (addr_bits, addr_mask, word_mask) = derive_constants(word_width)?;
        Ok(Self {
            word_width,
            addr_bits,
            addr_mask,
            word_mask,
        })
    }

    /// Splits `pos` into `(word_index, bit_offset)` without bounds checking.
    #[inline(always)]
    pub const fn split(&self, pos: usize) -> (usize, usize) {
        (pos >> self.addr_bits, pos & self.addr_mask)
    }

    /// Returns the number of words covering `len` bits, i.e., `ceil(len / word_width)`.
    ///
    /// The count is taken from the address of the last valid bit, so exact multiples of
    /// the word width get no spare word.
    pub const fn num_words(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let (last_word, _) = self.split(len - 1);
        last_word + 1
    }

    /// Returns the number of bits per word.
    pub const fn word_width(&self) -> usize {
        self.word_width
    }

    /// Returns `log2(word_width)`.
    pub const fn addr_bits(&self) -> usize {
        self.addr_bits
    }

    /// Returns `word_width - 1`.
    pub const fn addr_mask(&self) -> usize {
        self.addr_mask
    }

    /// Returns `(1 << word_width) - 1`, the pattern with every bit of one word set.
    pub const fn word_mask(&self) -> u128 {
        self.word_mask
    }
}

/// Derives `(addr_bits, addr_mask, word_mask)` from `word_width` by shifting a copy of it
/// down to one.
fn derive_constants(word_width: usize) -> Result<(usize, usize, u128)> {
    if word_width == 0 {
        return Err(Error::Construction(
            "word_width must be a power of two, but got 0.".to_string(),
        ));
    }
    if word_width > u128::BITS as usize {
        return Err(Error::Construction(format!(
            "word_width must be no greater than {}, but got {word_width}.",
            u128::BITS
        )));
    }
    let mut w = word_width;
    let mut addr_bits = 0;
    while w & 1 == 0 {
        w >>= 1;
        addr_bits += 1;
    }
    if w != 1 {
        return Err(Error::Construction(format!(
            "word_width must be a power of two, but got {word_width}."
        )));
    }
    let word_mask = 1u128
        .checked_shl(word_width as u32)
        .map_or(u128::MAX, |x| x - 1);
    Ok((addr_bits, word_width - 1, word_mask))
}
