//! Sentinel-based slot indices.
//!
//! Both queues track positions with plain `usize` and reserve `usize::MAX`
//! as the "no position" marker instead of wrapping every link in `Option`.
//! A circular queue whose `front` is [`Index::NONE`] is empty; a linked node
//! whose `next` is [`Index::NONE`] is the rear.

/// A position with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use dsaweb_queue::Index;
///
/// assert!(usize::NONE.is_none());
/// assert_eq!(usize::NONE.get(), None);
/// assert_eq!(5usize.get(), Some(5));
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no position".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Converts to `Option<usize>`, mapping the sentinel to `None`.
    fn get(self) -> Option<usize>;
}

impl Index for usize {
    const NONE: Self = Self::MAX;

    #[inline]
    fn get(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_max() {
        assert_eq!(usize::NONE, usize::MAX);
        assert!(usize::NONE.is_none());
        assert!(!0usize.is_none());
        assert!(!(usize::MAX - 1).is_none());
    }

    #[test]
    fn get_maps_sentinel_to_none() {
        assert_eq!(usize::NONE.get(), None);
        assert_eq!(0usize.get(), Some(0));
        assert_eq!((usize::MAX - 1).get(), Some(usize::MAX - 1));
    }
}
