//! Renderer-independent document object model.
//!
//! The narrative layer produces a Markdown subset; exporters work with this
//! model instead, so the crate never depends on a specific word-processor or
//! PDF library.

use serde::{Deserialize, Serialize};

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One block-level element of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocNode {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    Bullet { spans: Vec<Span> },
    BlockQuote { spans: Vec<Span> },
}

impl DocNode {
    /// Concatenated plain text of the node, styling dropped.
    pub fn text(&self) -> String {
        let spans = match self {
            DocNode::Heading { spans, .. }
            | DocNode::Paragraph { spans }
            | DocNode::Bullet { spans }
            | DocNode::BlockQuote { spans } => spans,
        };
        spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A complete document: a title plus its body nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub nodes: Vec<DocNode>,
}

impl Document {
    pub fn new(title: impl Into<String>, nodes: Vec<DocNode>) -> Self {
        Self {
            title: title.into(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_text_concatenates_spans() {
        let node = DocNode::Paragraph {
            spans: vec![Span::plain("prazo "), Span::bold("rigoroso")],
        };
        assert_eq!(node.text(), "prazo rigoroso");
    }

    #[test]
    fn test_span_constructors() {
        assert!(!Span::plain("a").bold);
        assert!(Span::bold("a").bold);
    }

    #[test]
    fn test_docnode_serde_tagging() {
        let node = DocNode::Heading {
            level: 1,
            spans: vec![Span::plain("Enquadramento")],
        };
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"heading\""));
        let back: DocNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
