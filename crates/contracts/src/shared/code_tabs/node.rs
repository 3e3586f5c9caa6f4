use serde::{Deserialize, Serialize};

/// One child of a code tab group as written by the page author.
///
/// Only [`TabNode::Carrier`] contributes a tab. Everything else (headings,
/// whitespace, notes between tabs) is carried as [`TabNode::Other`] and
/// skipped by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabNode {
    Carrier(TabCarrier),
    Other { markup: String },
}

/// A node marked as a code tab.
///
/// `label` and `language` override whatever the registry says for
/// `identifier`. All three are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCarrier {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub body: TabBody,
}

/// Body of a tab carrier. Only [`TabBody::Text`] can be shown in a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TabBody {
    Text(String),
    Nodes(Vec<TabNode>),
}

impl TabNode {
    /// Shorthand carrier resolved through the registry, e.g. `TabNode::tab("python", "print(1)")`.
    pub fn tab(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        TabNode::Carrier(TabCarrier {
            identifier: Some(identifier.into()),
            label: None,
            language: None,
            body: TabBody::Text(content.into()),
        })
    }

    /// Carrier with explicit label and language, no registry involved.
    pub fn labeled(
        label: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        TabNode::Carrier(TabCarrier {
            identifier: None,
            label: Some(label.into()),
            language: Some(language.into()),
            body: TabBody::Text(content.into()),
        })
    }

    pub fn other(markup: impl Into<String>) -> Self {
        TabNode::Other {
            markup: markup.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_children() {
        let json = r#"[
            {"kind": "other", "markup": "<p>Install first</p>"},
            {"kind": "carrier", "identifier": "python", "body": {"type": "text", "value": "pip install x"}},
            {"kind": "carrier", "label": "Shell", "language": "bash", "body": {"type": "text", "value": "ls"}}
        ]"#;
        let nodes: Vec<TabNode> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], TabNode::other("<p>Install first</p>"));
        assert_eq!(nodes[1], TabNode::tab("python", "pip install x"));
        assert_eq!(nodes[2], TabNode::labeled("Shell", "bash", "ls"));
    }
}
