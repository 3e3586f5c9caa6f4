use std::collections::HashMap;

/// Last selected tab label per synchronization group, for one page session.
///
/// Every tab group on the page reads from the same store and writes to it
/// when the user picks a tab, so groups sharing a group id follow each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashMap<String, String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, group_id: &str) -> Option<&str> {
        self.selected.get(group_id).map(String::as_str)
    }

    /// Records `label` for `group_id`. Returns `true` if the stored value changed.
    pub fn select(&mut self, group_id: &str, label: &str) -> bool {
        if self.selected(group_id) == Some(label) {
            return false;
        }
        log::debug!("Tab group '{}' selected '{}'", group_id, label);
        self.selected
            .insert(group_id.to_string(), label.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::code_tabs::{render, DuplicatePolicy, TabEntry, TabbedView};

    fn group(group_id: &str, content: &str) -> TabbedView {
        render(
            vec![
                TabEntry::new("Python", "python", content),
                TabEntry::new("JavaScript (Node)", "javascript", content),
            ],
            group_id,
            DuplicatePolicy::Reject,
        )
        .unwrap()
    }

    #[test]
    fn test_selection_follows_across_groups() {
        let install = group("code-language", "install");
        let usage = group("code-language", "usage");
        let mut store = SelectionStore::new();

        assert!(store.select(&install.group_id, "JavaScript (Node)"));

        assert_eq!(install.active_label(&store), Some("JavaScript (Node)"));
        assert_eq!(usage.active_label(&store), Some("JavaScript (Node)"));
    }

    #[test]
    fn test_groups_with_other_ids_are_independent() {
        let synced = group("code-language", "a");
        let separate = group("os", "b");
        let mut store = SelectionStore::new();

        store.select("code-language", "JavaScript (Node)");

        assert_eq!(synced.active_label(&store), Some("JavaScript (Node)"));
        assert_eq!(separate.active_label(&store), Some("Python"));
    }

    /// One group on the page: its view and the tab it currently shows.
    struct MountedGroup {
        view: TabbedView,
        shown: String,
    }

    impl MountedGroup {
        fn mount(view: TabbedView, store: &SelectionStore) -> Self {
            let shown = view.active_label(store).unwrap_or_default().to_string();
            Self { view, shown }
        }

        fn pick(&mut self, store: &mut SelectionStore, label: &str) {
            self.shown = label.to_string();
            store.select(&self.view.group_id, label);
        }

        /// Applies a store change; a followed tab is not published back.
        fn follow(&mut self, store: &SelectionStore) {
            if let Some(next) = self.view.follow(store, &self.shown) {
                self.shown = next;
            }
        }
    }

    #[test]
    fn test_group_without_picked_label_keeps_its_tab() {
        let mut store = SelectionStore::new();
        let mut a = MountedGroup::mount(group("code-language", "a"), &store);
        let mut b = MountedGroup::mount(group("code-language", "b"), &store);
        let rust_view = render(
            vec![
                TabEntry::new("Python", "python", "c"),
                TabEntry::new("Rust", "rust", "c"),
            ],
            "code-language",
            DuplicatePolicy::Reject,
        )
        .unwrap();
        let mut c = MountedGroup::mount(rust_view, &store);

        c.pick(&mut store, "Rust");
        a.follow(&store);
        b.follow(&store);
        assert_eq!((a.shown.as_str(), b.shown.as_str()), ("Python", "Python"));

        a.pick(&mut store, "JavaScript (Node)");
        b.follow(&store);
        c.follow(&store);

        assert_eq!(c.shown, "Rust");
        assert_eq!(b.shown, "JavaScript (Node)");
        assert_eq!(store.selected("code-language"), Some("JavaScript (Node)"));

        // A later mount of C still opens on its first tab
        let c2 = MountedGroup::mount(c.view.clone(), &store);
        assert_eq!(c2.shown, "Python");
    }

    #[test]
    fn test_follow_is_noop_when_already_shown() {
        let view = group("code-language", "x");
        let mut store = SelectionStore::new();
        store.select("code-language", "Python");

        assert_eq!(view.follow(&store, "Python"), None);
        assert_eq!(view.follow(&store, "JavaScript (Node)"), Some("Python".to_string()));
    }

    #[test]
    fn test_select_reports_change() {
        let mut store = SelectionStore::new();
        assert!(store.select("g", "Python"));
        assert!(!store.select("g", "Python"));
        assert!(store.select("g", "JavaScript (Node)"));
        assert_eq!(store.selected("g"), Some("JavaScript (Node)"));
        assert_eq!(store.selected("other"), None);
    }
}
