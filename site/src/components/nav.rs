use super::{FRONTEND_REPO_URL, Image, LOGO_SRC};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <Image src=LOGO_SRC alt="PetChain" width=40 height=40 class="nav-logo" priority=true />
                    <span class="nav-title">"PetChain"</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#how-it-works" class="nav-link">"How It Works"</a>
                    <a href=FRONTEND_REPO_URL target="_blank" rel="noopener noreferrer" class="nav-cta">
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}

/// Plain header bar used by the classic layout.
#[component]
pub fn ClassicHeader() -> impl IntoView {
    view! {
        <header class="classic-header">
            <div class="container classic-header-inner">
                <h1 class="classic-title">"PetChain"</h1>
                <nav>
                    <ul class="classic-links">
                        <li><a href="#" class="classic-link">"Home"</a></li>
                        <li><a href="#" class="classic-link">"About"</a></li>
                        <li><a href="#" class="classic-link">"Contact"</a></li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
