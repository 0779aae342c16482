use leptos::prelude::*;

const STEPS: [(&str, &str); 3] = [
    (
        "Register Your Pet",
        "Create a profile and receive a unique QR tag linked to their medical records",
    ),
    (
        "Scan & Access",
        "Vets and responders scan the tag to instantly view medical history",
    ),
    (
        "Stay Updated",
        "Get smart reminders and control who accesses your pet's information",
    ),
];

/// The `#how-it-works` explainer.
#[component]
pub fn Steps() -> impl IntoView {
    view! {
        <section id="how-it-works" class="steps">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How It Works"</h2>
                    <p class="section-description">
                        "Three simple steps to secure your pet's health data"
                    </p>
                </div>
                <ol class="steps-grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, text))| {
                            view! {
                                <li class="step">
                                    <div class="step-number">{i + 1}</div>
                                    <h3 class="step-title">{*title}</h3>
                                    <p class="step-text">{*text}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
