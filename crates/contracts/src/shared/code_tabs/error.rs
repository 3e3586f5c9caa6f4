use thiserror::Error;

/// Ошибки построения группы вкладок с кодом
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeTabsError {
    #[error("Unknown language identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Tab '{label}' has non-text content")]
    InvalidContent { label: String },

    #[error("Duplicate tab label in group: {0}")]
    DuplicateLabel(String),

    #[error("Language identifier registered twice: {0}")]
    DuplicateIdentifier(String),
}
