use crate::shared::components::homepage_features::HomepageFeatures;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <h1 class="hero__title">"fastllm"</h1>
                <p class="hero__subtitle">"Run language models anywhere, from one API."</p>
            </div>
        </header>
        <main>
            <HomepageFeatures />
        </main>
    }
}
