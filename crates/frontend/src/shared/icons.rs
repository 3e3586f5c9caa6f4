use leptos::prelude::*;

/// Feature illustrations for the homepage grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Mountain,
    Cloud,
    Devices,
}

pub fn icon(name: FeatureIcon) -> AnyView {
    match name {
        FeatureIcon::Mountain => view! {
            <svg class="feature-svg" width="120" height="120" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" role="img" aria-hidden="true">
                <path d="M3 20l6-10 4 6 3-4 5 8z"/>
                <circle cx="17" cy="6" r="2"/>
            </svg>
        }.into_any(),
        FeatureIcon::Cloud => view! {
            <svg class="feature-svg" width="120" height="120" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" role="img" aria-hidden="true">
                <path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"/>
            </svg>
        }.into_any(),
        FeatureIcon::Devices => view! {
            <svg class="feature-svg" width="120" height="120" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" role="img" aria-hidden="true">
                <rect x="2" y="4" width="14" height="10" rx="1"/>
                <path d="M6 18h6"/>
                <rect x="17" y="8" width="5" height="12" rx="1"/>
            </svg>
        }.into_any(),
    }
}
