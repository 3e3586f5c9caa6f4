use super::error::CodeTabsError;
use serde::{Deserialize, Serialize};

/// Display label and highlighter tag registered for a shorthand identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub label: String,
    pub language: String,
}

impl LanguageSpec {
    pub fn new(label: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
        }
    }
}

/// Immutable lookup table from shorthand identifier ("python", "node") to
/// its [`LanguageSpec`].
///
/// Built once at startup (see `SiteConfig::build_registry`) from the
/// [`builtin`](Self::builtin) entries plus the configured ones, and shared by
/// reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    entries: Vec<(String, LanguageSpec)>,
}

impl LanguageRegistry {
    /// Registers `identifier`. Registration is append-only: an identifier
    /// that is already present is rejected.
    pub fn register(
        mut self,
        identifier: impl Into<String>,
        spec: LanguageSpec,
    ) -> Result<Self, CodeTabsError> {
        let identifier = identifier.into();
        if self.entries.iter().any(|(id, _)| *id == identifier) {
            return Err(CodeTabsError::DuplicateIdentifier(identifier));
        }
        self.entries.push((identifier, spec));
        Ok(self)
    }

    pub fn lookup(&self, identifier: &str) -> Result<&LanguageSpec, CodeTabsError> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, spec)| spec)
            .ok_or_else(|| CodeTabsError::UnknownIdentifier(identifier.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The two languages every site ships with.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ("python".to_string(), LanguageSpec::new("Python", "python")),
                (
                    "node".to_string(),
                    LanguageSpec::new("JavaScript (Node)", "javascript"),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(
            registry.lookup("python"),
            Ok(&LanguageSpec::new("Python", "python"))
        );
        assert_eq!(
            registry.lookup("node"),
            Ok(&LanguageSpec::new("JavaScript (Node)", "javascript"))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_identifier() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(
            registry.lookup("cobol"),
            Err(CodeTabsError::UnknownIdentifier("cobol".to_string()))
        );
    }

    #[test]
    fn test_register_is_append_only() {
        let registry = LanguageRegistry::builtin()
            .register("rust", LanguageSpec::new("Rust", "rust"))
            .unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("rust").unwrap().label, "Rust");

        let err = registry
            .clone()
            .register("rust", LanguageSpec::new("Rust 2", "rust"))
            .unwrap_err();
        assert_eq!(err, CodeTabsError::DuplicateIdentifier("rust".to_string()));

        let err = registry
            .register("python", LanguageSpec::new("Py", "python"))
            .unwrap_err();
        assert_eq!(err, CodeTabsError::DuplicateIdentifier("python".to_string()));
    }
}
