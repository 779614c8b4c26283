//! Types for use as [crate::Read::Cfg].

use crate::Error;
use core::ops::{Bound, RangeBounds};

/// Configuration for limiting the range of a value.
///
/// This is used to bound the lengths of variable-length values read from untrusted input, so
/// that a hostile length prefix is rejected before anything is allocated for it.
///
/// # Examples
///
/// ```
/// use peerwire_codec::RangeCfg;
///
/// // Limit lengths to 0..=111 (type inferred as usize)
/// let cfg = RangeCfg::new(0..=111);
/// assert!(cfg.contains(&100));
/// assert!(!cfg.contains(&112));
///
/// // Allow any length >= 1
/// let cfg_min = RangeCfg::from(1..);
/// assert!(cfg_min.contains(&1));
/// assert!(!cfg_min.contains(&0));
///
/// // Works with other integer types
/// let cfg_u32 = RangeCfg::new(31402u32..=70016u32);
/// assert!(cfg_u32.contains(&70002));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd> {
    /// The lower bound of the range.
    start: Bound<T>,

    /// The upper bound of the range.
    end: Bound<T>,
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl<T: Copy + PartialOrd> From<$range> for RangeCfg<T> {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<T>,
    core::ops::RangeInclusive<T>,
    core::ops::RangeFrom<T>,
    core::ops::RangeTo<T>,
    core::ops::RangeToInclusive<T>
);

impl<T: Copy + PartialOrd> From<core::ops::RangeFull> for RangeCfg<T> {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        RangeCfg {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        match &self.start {
            Bound::Included(s) if value < s => return false,
            Bound::Excluded(s) if value <= s => return false,
            _ => {}
        }
        match &self.end {
            Bound::Included(e) if value > e => return false,
            Bound::Excluded(e) if value >= e => return false,
            _ => {}
        }
        true
    }
}

impl RangeCfg<usize> {
    /// Returns `len` if it is allowed by this range, [Error::InvalidLength] otherwise.
    #[inline]
    pub fn check(&self, len: usize) -> Result<usize, Error> {
        if !self.contains(&len) {
            return Err(Error::InvalidLength(len));
        }
        Ok(len)
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}
