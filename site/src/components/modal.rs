use crate::catalog::FeatureEntry;
use crate::selection::{ClickOrigin, DismissPolicy, SelectionEvent};
use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{Event, EventTarget};

/// Classify a click received by the overlay container.
///
/// Only a click whose target is the backdrop element itself counts as a
/// backdrop click; anything that bubbled up from the panel does not.
pub fn click_origin(ev: &Event, backdrop: Option<&EventTarget>) -> ClickOrigin {
    match (ev.target(), backdrop) {
        (Some(target), Some(backdrop)) if &target == backdrop => ClickOrigin::Backdrop,
        _ => ClickOrigin::Panel,
    }
}

/// Detail overlay for one feature, rendered above the page.
#[component]
pub fn FeatureModal(
    entry: FeatureEntry,
    policy: DismissPolicy,
    on_event: Callback<SelectionEvent>,
) -> impl IntoView {
    let dismiss = if policy.closes_on_backdrop() {
        "backdrop"
    } else {
        "control"
    };
    let backdrop = NodeRef::<Div>::new();

    view! {
        <div
            class="modal-backdrop"
            data-dismiss=dismiss
            node_ref=backdrop
            on:click=move |ev: MouseEvent| {
                let element = backdrop.get_untracked();
                let origin = click_origin(&ev, element.as_ref().map(AsRef::<EventTarget>::as_ref));
                on_event.run(SelectionEvent::Backdrop(origin));
            }
        >
            <div class="modal-panel" data-feature=entry.slug()>
                <button
                    class="modal-close-x"
                    aria-label="Close modal"
                    on:click=move |_| on_event.run(SelectionEvent::Close)
                >
                    "×"
                </button>
                <div class="modal-body">
                    <div class="modal-heading">
                        <span class="modal-icon">{entry.icon}</span>
                        <h3 class="modal-title">{entry.title}</h3>
                    </div>
                    <p class="modal-detail">{entry.detail}</p>
                    <button
                        class="btn btn-primary modal-close"
                        on:click=move |_| on_event.run(SelectionEvent::Close)
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
