//! Static HTML rendering through Leptos' `RenderHtml`.

use crate::catalog::Catalog;
use crate::components::{Page, SiteDocument};
use crate::selection::{PageVariant, Selection};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

/// Render a complete HTML document, `<!DOCTYPE html>` included.
///
/// `selection` is the overlay state baked into the snapshot.
pub fn render_document(catalog: &Catalog, variant: PageVariant, selection: Selection) -> String {
    let catalog = catalog.clone();
    let html = Owner::new().with(|| {
        view! { <SiteDocument catalog=catalog variant=variant initial=selection /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render just the page body markup, without `<html>`/`<head>`.
pub fn render_page(catalog: &Catalog, variant: PageVariant, selection: Selection) -> String {
    let catalog = catalog.clone();
    Owner::new().with(|| {
        view! { <Page catalog=catalog variant=variant initial=selection /> }.to_html()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FEATURES;

    #[test]
    fn renders_closed_document() {
        let html = render_document(&Catalog::builtin(), PageVariant::Landing, Selection::Closed);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("PetChain"));
        assert!(html.contains(".modal-backdrop"), "stylesheet is inlined");
        assert!(!html.contains(r#"class="modal-backdrop""#));
    }

    #[test]
    fn document_title_names_open_feature() {
        let html = render_document(
            &Catalog::builtin(),
            PageVariant::Landing,
            Selection::open(FEATURES[3]),
        );
        assert!(html.contains("Smart Notifications | PetChain"));
    }

    #[test]
    fn page_has_every_section() {
        let html = render_page(&Catalog::builtin(), PageVariant::Landing, Selection::Closed);
        for marker in [
            r#"id="features""#,
            r#"id="how-it-works""#,
            "Built with Modern Technology",
            "Join the decentralized pet health revolution",
            "MIT License.",
        ] {
            assert!(html.contains(marker), "missing {marker}");
        }
        assert!(!html.contains("<html"));
    }
}
