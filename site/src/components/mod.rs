//! Leptos components for the PetChain page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (prerender only)
//! └── Page
//!     ├── Nav | ClassicHeader
//!     ├── Hero
//!     ├── FeatureGrid
//!     │   └── FeatureCard (per catalog entry)
//!     ├── Steps
//!     ├── TechStack
//!     ├── CallToAction
//!     ├── Footer
//!     └── FeatureModal (while a feature is selected)
//! ```
//!
//! Cards and the overlay never touch the selection signal directly. They emit
//! [`SelectionEvent`](crate::selection::SelectionEvent)s through a
//! `Callback`, and [`Page`] folds those into its signal.

mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod image;
mod modal;
mod nav;
mod page;
mod steps;
mod tech;

pub use cta::CallToAction;
pub use document::SiteDocument;
pub use features::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use hero::Hero;
pub use image::Image;
pub use modal::{FeatureModal, click_origin};
pub use nav::{ClassicHeader, Nav};
pub use page::Page;
pub use steps::Steps;
pub use tech::TechStack;

/// Logo and hero artwork.
/// Root-relative so feature pages under `features/<slug>/` resolve it too.
pub const LOGO_SRC: &str = "/assets/petchain.jpeg";

pub const FRONTEND_REPO_URL: &str = "https://github.com/DogStark/petChain-Frontend";
pub const BACKEND_REPO_URL: &str = "https://github.com/DogStark/petchain_api";
pub const CONTRACTS_REPO_URL: &str = "https://github.com/DogStark/PetMedTracka-Contracts";
pub const ISSUES_URL: &str = "https://github.com/DogStark/pet-medical-tracka/issues";
pub const COMMUNITY_URL: &str = "https://t.me/+Jw8HkvUhinw2YjE0";
