use super::{COMMUNITY_URL, FRONTEND_REPO_URL};
use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container cta-inner">
                <h2 class="cta-title">"Ready to Secure Your Pet's Health Data?"</h2>
                <p class="cta-description">"Join the decentralized pet health revolution"</p>
                <div class="cta-actions">
                    <a href=FRONTEND_REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-light">
                        "View on GitHub"
                    </a>
                    <a href=COMMUNITY_URL target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        "Join Community"
                    </a>
                </div>
            </div>
        </section>
    }
}
