use super::{FRONTEND_REPO_URL, Image, LOGO_SRC};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">"Powered by Stellar Blockchain"</div>
                        <h1 class="hero-title">
                            "Your Pet's Medical Records,"
                            <span class="hero-title-accent">" Always Accessible"</span>
                        </h1>
                        <p class="hero-description">
                            "Secure, decentralized health tracking for pets. "
                            "Scan a QR tag for instant access to medical history—anytime, anywhere."
                        </p>
                        <div class="hero-actions">
                            <a href=FRONTEND_REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                "Get Started"
                            </a>
                            <a href="#features" class="btn btn-secondary">
                                "Learn More"
                            </a>
                        </div>
                    </div>
                    <div class="hero-art">
                        <Image src=LOGO_SRC alt="PetChain Platform" width=500 height=500 class="hero-image" priority=true />
                    </div>
                </div>
            </div>
        </section>
    }
}
