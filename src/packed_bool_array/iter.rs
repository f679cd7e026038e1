//! Iterator on packed boolean arrays.
use crate::packed_bool_array::PackedBoolArray;
use crate::word::Word;
use crate::Access;

/// Iterator for enumerating bits, created by [`PackedBoolArray::iter()`].
pub struct Iter<'a, W: Word> {
    pa: &'a PackedBoolArray<W>,
    pos: usize,
}

impl<'a, W: Word> Iter<'a, W> {
    /// Creates a new iterator.
    pub const fn new(pa: &'a PackedBoolArray<W>) -> Self {
        Self { pa, pos: 0 }
    }
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = bool;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.pa.access(self.pos)?;
        self.pos += 1;
        Some(x)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.pa.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<W: Word> ExactSizeIterator for Iter<'_, W> {}
