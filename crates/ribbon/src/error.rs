//! Error types for the list adapter.

use crate::model::{IndexPath, ItemHandle};

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur when mutating or querying a list adapter.
///
/// Conditions the adapter treats as "nothing to do" (empty inputs,
/// unresolvable reuse identifiers) are not errors; they are logged and
/// skipped. These variants cover lookups that cannot be satisfied.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The section index does not exist.
    #[error("Section {section} out of bounds (section count: {count})")]
    SectionOutOfBounds { section: usize, count: usize },

    /// The row does not exist in its section.
    #[error("Row {} out of bounds in section {} (row count: {count})", .path.row(), .path.section())]
    RowOutOfBounds { path: IndexPath, count: usize },

    /// The insertion point lies past the end of the section.
    #[error("Cannot insert at row {} of section {} (row count: {count})", .path.row(), .path.section())]
    InsertOutOfBounds { path: IndexPath, count: usize },

    /// The handle does not refer to a row held by the adapter.
    #[error("Item {0:?} not found")]
    ItemNotFound(ItemHandle),

    /// The row offers no action at the given index.
    #[error("Row {path} has no action at index {index}")]
    NoSuchRowAction { path: IndexPath, index: usize },

    /// The reuse identifier is not a `Bundle.ViewName` token.
    #[error("Invalid reuse identifier '{0}': expected 'Bundle.ViewName'")]
    InvalidReuseIdentifier(String),

    /// The configuration could not be parsed.
    #[error("Invalid adapter configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl AdapterError {
    /// Create a section bounds error.
    pub fn section_out_of_bounds(section: usize, count: usize) -> Self {
        Self::SectionOutOfBounds { section, count }
    }

    /// Create a row bounds error.
    pub fn row_out_of_bounds(path: IndexPath, count: usize) -> Self {
        Self::RowOutOfBounds { path, count }
    }
}
