use leptos::prelude::*;

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section class="tech">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Built with Modern Technology"</h2>
                    <p class="section-description">"Secure, scalable, and privacy-focused"</p>
                </div>
                <div class="tech-grid">
                    <TechCard
                        title="Stellar Blockchain"
                        text="Tamper-proof records that are permanent and universally accessible"
                    />
                    <TechCard
                        title="Zero-Knowledge Proofs"
                        text="Advanced cryptography keeps sensitive data private—even on-chain"
                    />
                    <TechCard
                        title="Offline Access"
                        text="View critical information even without an internet connection"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <article class="tech-card">
            <h3 class="tech-title">{title}</h3>
            <p class="tech-text">{text}</p>
        </article>
    }
}
