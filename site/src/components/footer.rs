use super::{
    BACKEND_REPO_URL, COMMUNITY_URL, CONTRACTS_REPO_URL, FRONTEND_REPO_URL, ISSUES_URL, Image,
    LOGO_SRC,
};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Image src=LOGO_SRC alt="PetChain" width=32 height=32 class="footer-logo" />
                            <span class="footer-title">"PetChain"</span>
                        </div>
                        <p class="footer-tagline">"Decentralized pet health records on Stellar"</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Product"</h4>
                        <ul class="footer-links">
                            <li><a href="#features" class="footer-link">"Features"</a></li>
                            <li><a href="#how-it-works" class="footer-link">"How It Works"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Developers"</h4>
                        <ul class="footer-links">
                            <li><ExternalLink href=FRONTEND_REPO_URL label="Frontend" /></li>
                            <li><ExternalLink href=BACKEND_REPO_URL label="Backend" /></li>
                            <li><ExternalLink href=CONTRACTS_REPO_URL label="Smart Contracts" /></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Community"</h4>
                        <ul class="footer-links">
                            <li><ExternalLink href=COMMUNITY_URL label="Telegram" /></li>
                            <li><ExternalLink href=ISSUES_URL label="Report Issues" /></li>
                        </ul>
                    </div>
                </div>
                <p class="footer-copyright">"© 2024 PetChain. MIT License."</p>
            </div>
        </footer>
    }
}

#[component]
fn ExternalLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="footer-link">{label}</a>
    }
}
