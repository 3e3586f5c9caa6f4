//! Page-level contexts for code tab groups.
//!
//! [`DocsContext`] carries the site config and the language registry, built
//! once in `App`. [`TabSyncContext`] carries the selection store shared by
//! every tab group on the page.

use contracts::shared::code_tabs::{LanguageRegistry, SelectionStore};
use contracts::shared::config::{load_config, CodeTabsConfig, SiteConfig};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct DocsContext {
    pub registry: Arc<LanguageRegistry>,
    pub code_tabs: CodeTabsConfig,
}

impl DocsContext {
    pub fn new(config: &SiteConfig, registry: LanguageRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            code_tabs: config.code_tabs.clone(),
        }
    }

    /// Loads the embedded site config. Falls back to the built-in languages
    /// and default tab settings if the config cannot be used.
    pub fn load() -> Self {
        let config = match load_config(None) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load site config: {:#}", err);
                return Self {
                    registry: Arc::new(LanguageRegistry::builtin()),
                    code_tabs: CodeTabsConfig::default(),
                };
            }
        };

        match config.build_registry() {
            Ok(registry) => {
                log::info!("Registered {} code tab languages", registry.len());
                Self::new(&config, registry)
            }
            Err(err) => {
                log::error!("Invalid language registry: {}", err);
                Self::new(&config, LanguageRegistry::builtin())
            }
        }
    }
}

/// Selected tab label per synchronization group, shared across the page.
#[derive(Clone, Copy)]
pub struct TabSyncContext {
    pub store: RwSignal<SelectionStore>,
}

impl TabSyncContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(SelectionStore::new()),
        }
    }

    /// Records a user selection. Only notifies subscribers when it changed.
    pub fn select(&self, group_id: &str, label: &str) {
        self.store.maybe_update(|store| store.select(group_id, label));
    }
}

impl Default for TabSyncContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_docs() -> DocsContext {
    use_context::<DocsContext>().expect("DocsContext not found. Provide it in App.")
}

pub fn use_tab_sync() -> TabSyncContext {
    use_context::<TabSyncContext>().expect("TabSyncContext not found. Provide it in App.")
}
