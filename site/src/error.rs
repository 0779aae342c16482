//! Error types for catalog construction and variant parsing.

use thiserror::Error;

/// A feature list that cannot back the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Titles double as list keys and must be distinct.
    #[error("duplicate feature title: {title:?}")]
    DuplicateTitle { title: String },

    #[error("feature at index {index} has a blank title")]
    BlankTitle { index: usize },

    /// The title has no ASCII letters or digits to build a slug from.
    #[error("feature {title:?} has an empty slug")]
    EmptySlug { title: String },

    /// Slugs name element ids and output directories.
    #[error("feature {title:?} reuses slug {slug:?}")]
    DuplicateSlug { slug: String, title: String },
}

/// Unknown `--variant` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page variant {0:?} (expected \"landing\" or \"classic\")")]
pub struct ParseVariantError(pub String);
