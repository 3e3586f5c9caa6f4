//! CodeTabs: a group of code samples, one tab per language.
//!
//! ```ignore
//! <CodeTabs nodes=vec![
//!     TabNode::tab("python", "pip install fastllm"),
//!     TabNode::tab("node", "npm install fastllm"),
//! ] />
//! ```
//!
//! All groups on a page share the configured synchronization group, so
//! picking "Python" in one group switches every other group that has a
//! "Python" tab.

use super::code_block::CodeBlock;
use super::context::{use_docs, use_tab_sync};
use contracts::shared::code_tabs::{build_group, TabNode, TabbedView};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CodeTabs(
    /// Children of the group; only tab carriers become tabs
    #[prop(into)]
    nodes: Vec<TabNode>,
    /// Overrides the configured synchronization group
    #[prop(optional, into)]
    group_id: Option<String>,
) -> impl IntoView {
    let docs = use_docs();
    let group_id = group_id.unwrap_or_else(|| docs.code_tabs.group_id.clone());

    let built = build_group(&nodes, &docs.registry, &group_id, docs.code_tabs.duplicate_labels);
    for err in &built.errors {
        log::error!("Code tab group '{}': {}", group_id, err);
    }
    let notices: Vec<String> = built.errors.iter().map(ToString::to_string).collect();
    let has_notices = !notices.is_empty();

    view! {
        <div class="code-tabs" class:code-tabs--error=has_notices data-group=group_id>
            {notices
                .into_iter()
                .map(|notice| view! { <div class="code-tabs__error">{notice}</div> })
                .collect_view()}
            {(!built.view.is_empty()).then(|| view! { <TabbedCode tabbed=built.view /> })}
        </div>
    }
}

#[component]
fn TabbedCode(tabbed: TabbedView) -> impl IntoView {
    let sync = use_tab_sync();
    let tabbed = StoredValue::new(tabbed);

    let initial = sync.store.with_untracked(|store| {
        tabbed.with_value(|t| t.active_label(store).unwrap_or_default().to_string())
    });
    let selected = RwSignal::new(initial);
    // Label last set from the store, so it is not published back as a pick
    let followed = StoredValue::new(None::<String>);

    // Follow selections made in other groups; stay put if we lack the label
    Effect::new(move |_| {
        let current = selected.get_untracked();
        let next = sync
            .store
            .with(|store| tabbed.with_value(|t| t.follow(store, &current)));
        if let Some(next) = next {
            followed.set_value(Some(next.clone()));
            selected.set(next);
        }
    });

    // Publish user selections; the first run is the initial value, not a pick
    Effect::new(move |prev: Option<String>| {
        let current = selected.get();
        let from_store = followed.with_value(|f| f.as_deref() == Some(current.as_str()));
        followed.set_value(None);
        if prev.is_some() && !from_store {
            tabbed.with_value(|t| sync.select(&t.group_id, &current));
        }
        current
    });

    let headers = tabbed.with_value(|t| t.tabs.clone());

    view! {
        <TabList selected_value=selected>
            {headers
                .into_iter()
                .map(|tab| {
                    view! { <Tab value=tab.label.clone()>{tab.label}</Tab> }
                })
                .collect_view()}
        </TabList>
        <div class="code-tabs__panel">
            {move || {
                let label = selected.get();
                tabbed
                    .with_value(|t| {
                        t.tabs.iter().find(|tab| tab.label == label).or(t.tabs.first()).cloned()
                    })
                    .map(|tab| {
                        view! {
                            <CodeBlock language=tab.code.language content=tab.code.content />
                        }
                    })
            }}
        </div>
    }
}
