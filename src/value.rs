//! Values accepted by bit writes.
use std::fmt::Debug;

/// A value that may be written into a packed array.
///
/// Only genuine booleans are written. Numbers implement this trait so that writes of
/// truthy values such as `2` are reported as
/// [`Error::InvalidValueType`](crate::Error::InvalidValueType) instead of being coerced.
///
/// # Examples
///
/// ```
/// use boolpack::BitValue;
///
/// assert_eq!(true.as_bit(), Some(true));
/// assert_eq!(2i32.as_bit(), None);
/// assert_eq!(1u8.as_bit(), None);
/// ```
pub trait BitValue: Debug {
    /// Returns the boolean carried by `self`, or [`None`] if it is not a genuine `bool`.
    fn as_bit(&self) -> Option<bool>;
}

impl BitValue for bool {
    #[inline(always)]
    fn as_bit(&self) -> Option<bool> {
        Some(*self)
    }
}

impl<T> BitValue for &T
where
    T: BitValue + ?Sized,
{
    #[inline(always)]
    fn as_bit(&self) -> Option<bool> {
        (**self).as_bit()
    }
}

macro_rules! not_a_bit {
    ($($ty:ident),*) => {
        $(
            impl BitValue for $ty {
                #[inline(always)]
                fn as_bit(&self) -> Option<bool> {
                    None
                }
            }
        )*
    };
}

not_a_bit!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
