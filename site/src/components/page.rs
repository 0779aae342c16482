use super::{
    CallToAction, ClassicHeader, FeatureGrid, FeatureModal, Footer, Hero, Nav, Steps, TechStack,
};
use crate::catalog::Catalog;
use crate::selection::{PageVariant, Selection, SelectionEvent};
use leptos::prelude::*;

/// The whole page. Owns the overlay state for as long as it is mounted.
#[component]
pub fn Page(
    catalog: Catalog,
    #[prop(optional)] variant: PageVariant,
    /// Overlay state at mount; prerendered feature pages start open.
    #[prop(optional)]
    initial: Selection,
) -> impl IntoView {
    let selection = RwSignal::new(initial);
    let policy = variant.dismiss_policy();
    let on_event = Callback::new(move |event: SelectionEvent| {
        selection.update(|state| *state = state.apply(event, policy));
    });

    let header = match variant {
        PageVariant::Landing => view! { <Nav /> }.into_any(),
        PageVariant::Classic => view! { <ClassicHeader /> }.into_any(),
    };

    view! {
        <div class="page" data-variant=variant.as_str()>
            {header}
            <main>
                <Hero />
                <FeatureGrid catalog=catalog on_event=on_event />
                <Steps />
                <TechStack />
                <CallToAction />
            </main>
            <Footer />
            {move || {
                selection
                    .get()
                    .selected()
                    .copied()
                    .map(|entry| view! { <FeatureModal entry=entry policy=policy on_event=on_event /> })
            }}
        </div>
    }
}
