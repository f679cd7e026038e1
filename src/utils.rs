//! Utilities in boolpack.

/// A debug view printing bits as rows of `0`/`1` characters, each row prefixed by the
/// position of its first bit.
pub(crate) struct BitRows<'a> {
    bits: &'a [bool],
    cols: usize,
}

impl<'a> BitRows<'a> {
    /// Creates a new view of `bits` with `cols` bits per row.
    pub fn new(bits: &'a [bool], cols: usize) -> Self {
        assert!(cols > 0, "Number of columns must be greater than zero.");
        Self { bits, cols }
    }
}

impl std::fmt::Debug for BitRows<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The pretty flag '#' prints every row, the compact one only a summary.
        if f.alternate() {
            writeln!(f, "[")?;
            for (i, row) in self.bits.chunks(self.cols).enumerate() {
                write!(f, "    {}: ", i * self.cols)?;
                for &bit in row {
                    f.write_str(if bit { "1" } else { "0" })?;
                }
                writeln!(f, ",")?;
            }
            write!(f, "]")
        } else {
            let ones = self.bits.iter().filter(|&&b| b).count();
            write!(f, "[{} bits, {ones} ones]", self.bits.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        let bits = [false, true, true];
        assert_eq!(format!("{:?}", BitRows::new(&bits, 2)), "[3 bits, 2 ones]");
    }

    #[test]
    fn test_pretty() {
        let bits = [false, true, true];
        assert_eq!(
            format!("{:#?}", BitRows::new(&bits, 2)),
            "[\n    0: 01,\n    2: 1,\n]"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(format!("{:#?}", BitRows::new(&[], 4)), "[\n]");
    }
}
