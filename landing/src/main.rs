// PetChain landing page — Leptos 0.8, client-side rendered
// Build with `trunk build` from this directory.

mod console;

use leptos::prelude::*;
use petchain_site::components::Page;
use petchain_site::styles::SITE_CSS;
use petchain_site::{Catalog, PageVariant};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    Effect::new(move || console::print_banner());

    view! {
        <style>{SITE_CSS}</style>
        <Page catalog=Catalog::builtin() variant=PageVariant::Landing />
    }
}
