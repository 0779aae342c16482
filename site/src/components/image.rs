use leptos::prelude::*;

/// `<img>` with intrinsic dimensions so the layout doesn't shift while loading.
///
/// Images are lazy unless `priority` is set (above-the-fold artwork).
#[component]
pub fn Image(
    src: &'static str,
    alt: &'static str,
    width: u32,
    height: u32,
    #[prop(optional)] class: Option<&'static str>,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            class=class.unwrap_or_default()
            loading=if priority { "eager" } else { "lazy" }
            decoding="async"
        />
    }
}
