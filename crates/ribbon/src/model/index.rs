//! Index paths for addressing rows in a sectioned list.
//!
//! An `IndexPath` is the (row, section) coordinate the adapter and the host
//! widget exchange. Like `ModelIndex` in a tree model, an index path is a
//! position, not an identity: inserting or removing rows earlier in the same
//! section shifts the path of every row after it. Hold an
//! [`ItemHandle`](super::ItemHandle) when you need to find the same item again.

use std::fmt;

/// Represents the position of a row within a sectioned list.
///
/// Index paths order section-major: every row of section 0 sorts before any
/// row of section 1.
///
/// # Example
///
/// ```
/// use ribbon::model::IndexPath;
///
/// let path = IndexPath::new(3, 0);
/// assert_eq!(path.row(), 3);
/// assert_eq!(path.section(), 0);
/// assert_eq!(path.offset_rows(2), IndexPath::new(5, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    // Field order matters for the derived `Ord`.
    section: usize,
    row: usize,
}

impl IndexPath {
    /// Creates an index path for `row` within `section`.
    #[inline]
    pub const fn new(row: usize, section: usize) -> Self {
        Self { section, row }
    }

    /// Returns the row within the section.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the section index.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the path of a different row in the same section.
    #[inline]
    pub const fn with_row(&self, row: usize) -> Self {
        Self::new(row, self.section)
    }

    /// Returns the path `count` rows further down the same section.
    #[inline]
    pub const fn offset_rows(&self, count: usize) -> Self {
        Self::new(self.row + count, self.section)
    }

    /// Builds the contiguous run of paths `first..first + count` in `section`.
    ///
    /// This is the shape of every batched insert the adapter issues.
    pub fn contiguous(first: usize, count: usize, section: usize) -> Vec<Self> {
        (first..first + count).map(|row| Self::new(row, section)).collect()
    }
}

impl fmt::Debug for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexPath({}, {})", self.section, self.row)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}
