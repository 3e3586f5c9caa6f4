use super::error::CodeTabsError;
use super::node::{TabBody, TabCarrier, TabNode};
use super::registry::LanguageRegistry;
use serde::{Deserialize, Serialize};

/// Language tag used when neither the carrier nor the registry supplies one.
pub const PLAINTEXT: &str = "plaintext";

/// A resolved tab: header label, highlighter tag and raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub label: String,
    pub language: String,
    pub content: String,
}

impl TabEntry {
    pub fn new(
        label: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            content: content.into(),
        }
    }
}

/// Keeps the tab carriers of `nodes`, in order, and resolves each into a
/// [`TabEntry`].
///
/// Non-carrier nodes are skipped silently. A carrier whose body is not plain
/// text fails the whole call with [`CodeTabsError::InvalidContent`]. An
/// identifier missing from the registry is not an error: the identifier
/// becomes the label and the language falls back to [`PLAINTEXT`].
pub fn filter_tabs(
    nodes: &[TabNode],
    registry: &LanguageRegistry,
) -> Result<Vec<TabEntry>, CodeTabsError> {
    let (entries, mut errors) = partition_tabs(nodes, registry);
    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors.remove(0))
    }
}

/// Like [`filter_tabs`], but never fails: carriers that cannot be shown are
/// left out and reported next to the entries that can.
pub fn partition_tabs(
    nodes: &[TabNode],
    registry: &LanguageRegistry,
) -> (Vec<TabEntry>, Vec<CodeTabsError>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    let carriers = nodes.iter().filter_map(|node| match node {
        TabNode::Carrier(carrier) => Some(carrier),
        TabNode::Other { .. } => None,
    });
    for (position, carrier) in carriers.enumerate() {
        match resolve_carrier(carrier, position, registry) {
            Ok(entry) => entries.push(entry),
            Err(err) => errors.push(err),
        }
    }

    (entries, errors)
}

fn resolve_carrier(
    carrier: &TabCarrier,
    position: usize,
    registry: &LanguageRegistry,
) -> Result<TabEntry, CodeTabsError> {
    let registered = carrier
        .identifier
        .as_deref()
        .and_then(|id| match registry.lookup(id) {
            Ok(spec) => Some(spec),
            Err(err) => {
                log::warn!("{}, falling back to {}", err, PLAINTEXT);
                None
            }
        });

    let label = carrier
        .label
        .clone()
        .or_else(|| registered.map(|spec| spec.label.clone()))
        .or_else(|| carrier.identifier.clone())
        .unwrap_or_else(|| format!("Tab {}", position + 1));

    let language = carrier
        .language
        .clone()
        .or_else(|| registered.map(|spec| spec.language.clone()))
        .unwrap_or_else(|| PLAINTEXT.to_string());

    let content = match &carrier.body {
        TabBody::Text(text) => text.clone(),
        TabBody::Nodes(_) => return Err(CodeTabsError::InvalidContent { label }),
    };

    Ok(TabEntry {
        label,
        language,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_carriers_in_order() {
        let nodes = vec![
            TabNode::other("\n"),
            TabNode::tab("node", "console.log(1)"),
            TabNode::other("<hr/>"),
            TabNode::tab("python", "print(1)"),
        ];
        let entries = filter_tabs(&nodes, &LanguageRegistry::builtin()).unwrap();

        assert_eq!(
            entries,
            vec![
                TabEntry::new("JavaScript (Node)", "javascript", "console.log(1)"),
                TabEntry::new("Python", "python", "print(1)"),
            ]
        );
    }

    #[test]
    fn test_no_carriers_is_empty_not_error() {
        let nodes = vec![TabNode::other("text"), TabNode::other("")];
        assert_eq!(filter_tabs(&nodes, &LanguageRegistry::builtin()), Ok(vec![]));
        assert_eq!(filter_tabs(&[], &LanguageRegistry::builtin()), Ok(vec![]));
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_plaintext() {
        let nodes = vec![TabNode::tab("cobol", "DISPLAY 'HI'.")];
        let entries = filter_tabs(&nodes, &LanguageRegistry::builtin()).unwrap();

        assert_eq!(entries, vec![TabEntry::new("cobol", PLAINTEXT, "DISPLAY 'HI'.")]);
    }

    #[test]
    fn test_explicit_metadata_overrides_registry() {
        let nodes = vec![TabNode::Carrier(TabCarrier {
            identifier: Some("python".to_string()),
            label: Some("Python 3".to_string()),
            language: None,
            body: TabBody::Text("print(1)".to_string()),
        })];
        let entries = filter_tabs(&nodes, &LanguageRegistry::builtin()).unwrap();

        assert_eq!(entries, vec![TabEntry::new("Python 3", "python", "print(1)")]);
    }

    #[test]
    fn test_positional_label_without_metadata() {
        let bare = |content: &str| {
            TabNode::Carrier(TabCarrier {
                identifier: None,
                label: None,
                language: None,
                body: TabBody::Text(content.to_string()),
            })
        };
        let nodes = vec![bare("a"), TabNode::other("x"), bare("b")];
        let entries = filter_tabs(&nodes, &LanguageRegistry::builtin()).unwrap();

        assert_eq!(
            entries,
            vec![
                TabEntry::new("Tab 1", PLAINTEXT, "a"),
                TabEntry::new("Tab 2", PLAINTEXT, "b"),
            ]
        );
    }

    #[test]
    fn test_non_text_body_is_invalid_content() {
        let nodes = vec![
            TabNode::tab("python", "print(1)"),
            TabNode::Carrier(TabCarrier {
                identifier: Some("node".to_string()),
                label: None,
                language: None,
                body: TabBody::Nodes(vec![TabNode::other("<b>bold</b>")]),
            }),
        ];
        let err = filter_tabs(&nodes, &LanguageRegistry::builtin()).unwrap_err();

        assert_eq!(
            err,
            CodeTabsError::InvalidContent {
                label: "JavaScript (Node)".to_string()
            }
        );
    }

    #[test]
    fn test_partition_keeps_valid_entries() {
        let nodes = vec![
            TabNode::tab("python", "print(1)"),
            TabNode::Carrier(TabCarrier {
                identifier: Some("node".to_string()),
                label: None,
                language: None,
                body: TabBody::Nodes(vec![]),
            }),
            TabNode::labeled("Shell", "bash", "ls"),
        ];
        let (entries, errors) = partition_tabs(&nodes, &LanguageRegistry::builtin());

        assert_eq!(
            entries,
            vec![
                TabEntry::new("Python", "python", "print(1)"),
                TabEntry::new("Shell", "bash", "ls"),
            ]
        );
        assert_eq!(
            errors,
            vec![CodeTabsError::InvalidContent {
                label: "JavaScript (Node)".to_string()
            }]
        );
    }
}
