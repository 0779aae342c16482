use crate::catalog::{Catalog, FeatureEntry};
use crate::selection::SelectionEvent;
use leptos::prelude::*;

/// The `#features` section: one card per catalog entry, in catalog order.
#[component]
pub fn FeatureGrid(catalog: Catalog, on_event: Callback<SelectionEvent>) -> impl IntoView {
    let entries = catalog.entries().to_vec();

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Everything You Need"</h2>
                    <p class="section-description">
                        "Built for pet owners, vets, and emergency responders"
                    </p>
                </div>
                <div class="features-grid">
                    <For
                        each=move || entries.clone()
                        key=|entry: &FeatureEntry| entry.title
                        children=move |entry| view! { <FeatureCard entry=entry on_event=on_event /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(entry: FeatureEntry, on_event: Callback<SelectionEvent>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="feature-card"
            id=format!("feature-{}", entry.slug())
            data-feature=entry.slug()
            on:click=move |_| on_event.run(SelectionEvent::Activate(entry))
        >
            <div class="feature-icon">{entry.icon}</div>
            <h3 class="feature-title">{entry.title}</h3>
            <p class="feature-description">{entry.short_description}</p>
            <span class="feature-more">"Learn more →"</span>
        </button>
    }
}
