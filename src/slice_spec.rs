//! Normalization of slice ranges against a length.
//!
//! Slices follow the usual sequence conventions: omitted endpoints cover the whole
//! sequence, negative endpoints count from the end, endpoints past either end are clamped,
//! and a negative step walks backwards. This leniency applies to slices only;
//! single-index accesses reject anything outside `[0, len)`.
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{Error, Result};

/// Start, stop and step of a slice, each optional.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use boolpack::SliceSpec;
///
/// let idx: Vec<usize> = SliceSpec::from(2..5).indices(10)?.collect();
/// assert_eq!(idx, vec![2, 3, 4]);
///
/// let idx: Vec<usize> = SliceSpec::new(None, None, Some(-3)).indices(10)?.collect();
/// assert_eq!(idx, vec![9, 6, 3, 0]);
///
/// let idx: Vec<usize> = SliceSpec::new(Some(-4), Some(100), None).indices(10)?.collect();
/// assert_eq!(idx, vec![6, 7, 8, 9]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    /// First position, or [`None`] for the natural start.
    pub start: Option<isize>,
    /// Position to stop before, or [`None`] for the natural end.
    pub stop: Option<isize>,
    /// Stride, or [`None`] for one.
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Creates a new slice from its endpoints and step.
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Returns the same slice with `step` as its stride.
    pub const fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// # Errors
    ///
    /// An error is returned if the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1) as i128;
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        let len = len as i128;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: Option<isize>, default: i128| {
            bound.map_or(default, |b| {
                let b = b as i128;
                let b = if b < 0 { b + len } else { b };
                b.clamp(lower, upper)
            })
        };
        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };

        let remaining = if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else if step < 0 && start > stop {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        Ok(SliceIndices {
            next: start,
            step,
            remaining: remaining as usize,
        })
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

impl From<Range<usize>> for SliceSpec {
    fn from(r: Range<usize>) -> Self {
        Self::new(Some(to_isize(r.start)), Some(to_isize(r.end)), None)
    }
}

impl From<RangeFrom<usize>> for SliceSpec {
    fn from(r: RangeFrom<usize>) -> Self {
        Self::new(Some(to_isize(r.start)), None, None)
    }
}

impl From<RangeTo<usize>> for SliceSpec {
    fn from(r: RangeTo<usize>) -> Self {
        Self::new(None, Some(to_isize(r.end)), None)
    }
}

impl From<RangeInclusive<usize>> for SliceSpec {
    fn from(r: RangeInclusive<usize>) -> Self {
        let (start, end) = r.into_inner();
        Self::new(Some(to_isize(start)), Some(to_isize(end).saturating_add(1)), None)
    }
}

impl From<RangeToInclusive<usize>> for SliceSpec {
    fn from(r: RangeToInclusive<usize>) -> Self {
        Self::new(None, Some(to_isize(r.end).saturating_add(1)), None)
    }
}

// Endpoints beyond isize::MAX are clamped anyway.
fn to_isize(x: usize) -> isize {
    isize::try_from(x).unwrap_or(isize::MAX)
}

/// Iterator over the positions selected by a slice, created by [`SliceSpec::indices()`].
///
/// It is cheap to clone, so the same resolution can be walked several times.
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: i128,
    step: i128,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.next as usize;
        self.next += self.step;
        self.remaining -= 1;
        Some(pos)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: Into<SliceSpec>>(spec: S, len: usize) -> Vec<usize> {
        spec.into().indices(len).unwrap().collect()
    }

    #[test]
    fn test_full() {
        assert_eq!(collect(.., 4), vec![0, 1, 2, 3]);
        assert_eq!(collect(.., 0), Vec::<usize>::new());
    }

    #[test]
    fn test_ranges() {
        assert_eq!(collect(6..12, 66), vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(collect(3.., 5), vec![3, 4]);
        assert_eq!(collect(..2, 5), vec![0, 1]);
        assert_eq!(collect(1..=3, 5), vec![1, 2, 3]);
        assert_eq!(collect(..=1, 5), vec![0, 1]);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(collect(3..100, 5), vec![3, 4]);
        assert_eq!(collect(10..20, 5), Vec::<usize>::new());
        assert_eq!(collect(4..2, 5), Vec::<usize>::new());
        assert_eq!(
            collect(SliceSpec::new(Some(-100), Some(2), None), 5),
            vec![0, 1]
        );
    }

    #[test]
    fn test_negative_endpoints() {
        assert_eq!(collect(SliceSpec::new(Some(-2), None, None), 5), vec![3, 4]);
        assert_eq!(
            collect(SliceSpec::new(None, Some(-3), None), 5),
            vec![0, 1]
        );
    }

    #[test]
    fn test_negative_step() {
        assert_eq!(collect(SliceSpec::default().step_by(-1), 4), vec![3, 2, 1, 0]);
        assert_eq!(
            collect(SliceSpec::new(Some(100), Some(1), Some(-2)), 6),
            vec![5, 3]
        );
        assert_eq!(
            collect(SliceSpec::new(Some(2), Some(-100), Some(-1)), 6),
            vec![2, 1, 0]
        );
        assert_eq!(collect(SliceSpec::default().step_by(-1), 0), Vec::<usize>::new());
    }

    #[test]
    fn test_positive_step() {
        assert_eq!(collect(SliceSpec::default().step_by(3), 10), vec![0, 3, 6, 9]);
        assert_eq!(
            collect(SliceSpec::from(1..9).step_by(4), 10),
            vec![1, 5]
        );
    }

    #[test]
    fn test_zero_step() {
        let e = SliceSpec::default().step_by(0).indices(5);
        assert_eq!(e.err(), Some(Error::ZeroStep));
    }

    #[test]
    fn test_restartable() {
        let it = SliceSpec::from(1..4).indices(10).unwrap();
        assert_eq!(it.len(), 3);
        let first: Vec<usize> = it.clone().collect();
        let second: Vec<usize> = it.collect();
        assert_eq!(first, second);
    }
}
