use crate::pages::home::HomePage;
use crate::pages::quickstart::QuickstartPage;
use crate::shared::code_tabs::{DocsContext, TabSyncContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config and language registry, built once for the page.
    provide_context(DocsContext::load());

    // Selected tab per synchronization group, shared by every CodeTabs.
    provide_context(TabSyncContext::new());

    view! {
        <HomePage />
        <QuickstartPage />
    }
}
