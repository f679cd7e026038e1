//! Unsigned integer types usable as backing words.
use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::Serializable;

/// Unsigned integer type storing packed bits, one bit per position.
///
/// Words are opaque: only individual bits are read and written, and bit `i` of
/// a word is always `(word >> i) & 1` regardless of the byte order of the target.
pub trait Word: PrimInt + Unsigned + Serializable + Debug + Default {
    /// Number of bits in this word, always a power of two.
    const BITS: usize;
}

macro_rules! word_def {
    ($int:ident) => {
        impl Word for $int {
            const BITS: usize = $int::BITS as usize;
        }
    };
}

word_def!(u8);
word_def!(u16);
word_def!(u32);
word_def!(u64);
word_def!(u128);
word_def!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<u128 as Word>::BITS, 128);
        assert_eq!(<usize as Word>::BITS, usize::BITS as usize);
    }
}
