//! # petchain-site
//!
//! The PetChain landing page as Leptos components, plus a static renderer.
//!
//! The same component tree runs in two places:
//!
//! - in the browser, mounted by `petchain-landing` (client-side rendering);
//! - natively, through [`render_document`] / [`render_page`], which use
//!   Leptos 0.8's `RenderHtml::to_html` to produce static HTML snapshots.
//!   These need the `ssr` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use petchain_site::{Catalog, PageVariant, Selection, render_document};
//!
//! let catalog = Catalog::builtin();
//! let html = render_document(&catalog, PageVariant::Landing, Selection::Closed);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - the static feature list
//! - [`selection`] - overlay state and its transition table
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

pub mod catalog;
pub mod components;
pub mod error;
#[cfg(feature = "ssr")]
mod render;
pub mod selection;
pub mod styles;

pub use catalog::{Catalog, FEATURES, FeatureEntry};
pub use error::{CatalogError, ParseVariantError};
#[cfg(feature = "ssr")]
pub use render::{render_document, render_page};
pub use selection::{ClickOrigin, DismissPolicy, PageVariant, Selection, SelectionEvent};
