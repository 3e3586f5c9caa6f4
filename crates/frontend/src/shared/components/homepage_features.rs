//! Marketing feature grid shown on the landing page.

use crate::shared::icons::{icon, FeatureIcon};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub icon: FeatureIcon,
    pub description: &'static str,
}

pub const FEATURE_LIST: [FeatureItem; 3] = [
    FeatureItem {
        title: "🚀 Simple by Design",
        icon: FeatureIcon::Mountain,
        description: "Run your first LLM with just a few lines of code, with no boilerplate and no complex setup.",
    },
    FeatureItem {
        title: "☁️ Cloud or On-Device",
        icon: FeatureIcon::Cloud,
        description: "Use the same API to run large models in the cloud or optimized ones directly on-device. \
            That flexibility keeps you in full control of your stack.",
    },
    FeatureItem {
        title: "💻 Cross-Platform & Multi-Language",
        icon: FeatureIcon::Devices,
        description: "Supports Windows, Linux, and macOS, with clean APIs for Python and JavaScript.",
    },
];

#[component]
fn Feature(item: FeatureItem) -> impl IntoView {
    view! {
        <div class="col col--4">
            <div class="text--center">{icon(item.icon)}</div>
            <div class="text--center padding-horiz--md">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn HomepageFeatures(
    /// Defaults to [`FEATURE_LIST`]
    #[prop(optional)]
    items: Option<Vec<FeatureItem>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(|| FEATURE_LIST.to_vec());

    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {items.into_iter().map(|item| view! { <Feature item=item /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
