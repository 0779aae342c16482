//! Full HTML document wrapper for prerendered pages.

use super::Page;
use crate::catalog::Catalog;
use crate::selection::{PageVariant, Selection};
use crate::styles::SITE_CSS;
use leptos::prelude::*;

pub const PAGE_TITLE: &str = "PetChain - Decentralized Pet Health Records";
pub const PAGE_DESCRIPTION: &str = "Secure, decentralized health tracking for pets. Scan a QR tag for instant access to medical history.";

#[component]
pub fn SiteDocument(
    catalog: Catalog,
    #[prop(optional)] variant: PageVariant,
    #[prop(optional)] initial: Selection,
) -> impl IntoView {
    let title = match initial.selected() {
        Some(entry) => format!("{} | PetChain", entry.title),
        None => PAGE_TITLE.to_string(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Page catalog=catalog variant=variant initial=initial />
            </body>
        </html>
    }
}
