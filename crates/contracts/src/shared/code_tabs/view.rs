use super::error::CodeTabsError;
use super::filter::{partition_tabs, TabEntry};
use super::node::TabNode;
use super::registry::LanguageRegistry;
use super::selection::SelectionStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do when two entries of one group resolve to the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the group with [`CodeTabsError::DuplicateLabel`].
    #[default]
    Reject,
    /// Keep the first entry with a label, drop later ones.
    KeepFirst,
}

/// Arguments handed to the code display widget, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockSpec {
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub label: String,
    pub code: CodeBlockSpec,
}

/// Output of [`render`]: one tab per entry, all tagged with the same
/// synchronization group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabbedView {
    pub group_id: String,
    pub tabs: Vec<TabView>,
}

impl TabbedView {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.label.as_str())
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels().any(|l| l == label)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Label shown when the group first mounts, given the page-wide store.
    ///
    /// The stored label for this group wins when this view has a tab with that
    /// label; otherwise the first tab is shown. `None` for a tab-less view.
    pub fn active_label<'a>(&'a self, store: &SelectionStore) -> Option<&'a str> {
        store
            .selected(&self.group_id)
            .and_then(|stored| self.labels().find(|label| *label == stored))
            .or_else(|| self.labels().next())
    }

    /// Tab to switch to after the store changed, if any.
    ///
    /// `None` when `current` already matches the stored label, or when this
    /// view has no tab with the stored label; the view then stays on
    /// `current`.
    pub fn follow(&self, store: &SelectionStore, current: &str) -> Option<String> {
        store
            .selected(&self.group_id)
            .filter(|stored| *stored != current && self.has_label(stored))
            .map(str::to_string)
    }
}

/// A rendered group together with the problems found while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltGroup {
    pub view: TabbedView,
    pub errors: Vec<CodeTabsError>,
}

/// Builds the tabbed view for `entries`, in input order.
pub fn render(
    entries: Vec<TabEntry>,
    group_id: &str,
    policy: DuplicatePolicy,
) -> Result<TabbedView, CodeTabsError> {
    let (view, mut errors) = render_partial(entries, group_id, policy);
    if errors.is_empty() {
        Ok(view)
    } else {
        Err(errors.remove(0))
    }
}

/// Best-effort build of a whole group from its child nodes.
///
/// Carriers with non-text bodies and, under [`DuplicatePolicy::Reject`],
/// repeated labels are reported in [`BuiltGroup::errors`]; every other entry
/// is still rendered, first occurrence of a label winning.
pub fn build_group(
    nodes: &[TabNode],
    registry: &LanguageRegistry,
    group_id: &str,
    policy: DuplicatePolicy,
) -> BuiltGroup {
    let (entries, mut errors) = partition_tabs(nodes, registry);
    let (view, duplicates) = render_partial(entries, group_id, policy);
    errors.extend(duplicates);
    BuiltGroup { view, errors }
}

fn render_partial(
    entries: Vec<TabEntry>,
    group_id: &str,
    policy: DuplicatePolicy,
) -> (TabbedView, Vec<CodeTabsError>) {
    let mut seen = HashSet::new();
    let mut tabs = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for entry in entries {
        if !seen.insert(entry.label.clone()) {
            match policy {
                DuplicatePolicy::Reject => errors.push(CodeTabsError::DuplicateLabel(entry.label)),
                DuplicatePolicy::KeepFirst => {
                    log::debug!("Dropping duplicate tab '{}' in group '{}'", entry.label, group_id);
                }
            }
            continue;
        }

        tabs.push(TabView {
            label: entry.label,
            code: CodeBlockSpec {
                language: entry.language,
                content: entry.content,
            },
        });
    }

    let view = TabbedView {
        group_id: group_id.to_string(),
        tabs,
    };
    (view, errors)
}
