use crate::shared::code_tabs::{CodeTabsError, DuplicatePolicy, LanguageRegistry, LanguageSpec};
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub code_tabs: CodeTabsConfig,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CodeTabsConfig {
    /// Shared id that keeps all code tab groups on a page in step
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default)]
    pub duplicate_labels: DuplicatePolicy,
}

impl Default for CodeTabsConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            duplicate_labels: DuplicatePolicy::default(),
        }
    }
}

fn default_group_id() -> String {
    "code-language".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LanguageEntry {
    pub id: String,
    pub label: String,
    pub language: String,
}

/// Default configuration embedded in the bundle.
///
/// `python` and `node` are always registered; `[[languages]]` entries add to them.
pub const DEFAULT_CONFIG: &str = r#"
[code_tabs]
group_id = "code-language"
duplicate_labels = "reject"
"#;

/// Load site configuration
///
/// Uses `override_toml` when given, otherwise the embedded default.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<SiteConfig> {
    let (source, text) = match override_toml {
        Some(text) => ("override", text),
        None => ("embedded default", DEFAULT_CONFIG),
    };
    log::info!("Loading site config from {}", source);
    let config: SiteConfig =
        toml::from_str(text).with_context(|| format!("parse {} site config", source))?;
    Ok(config)
}

impl SiteConfig {
    /// Builds the language registry: the built-in entries, then the
    /// configured ones in declaration order.
    pub fn build_registry(&self) -> Result<LanguageRegistry, CodeTabsError> {
        self.languages
            .iter()
            .try_fold(LanguageRegistry::builtin(), |registry, entry| {
                registry.register(
                    entry.id.clone(),
                    LanguageSpec::new(entry.label.clone(), entry.language.clone()),
                )
            })
    }
}
