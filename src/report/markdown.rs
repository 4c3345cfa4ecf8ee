//! Markdown-subset to document-node conversion.
//!
//! The narrative service emits a constrained Markdown dialect: `##`/`###`
//! headings, `-`/`*` bullets, `>` blockquotes and `**bold**` runs. This
//! module translates it line by line into [`DocNode`]s; anything else becomes
//! a plain paragraph. Blank lines are skipped.

use crate::report::document::{DocNode, Span};

/// Convert narrative text into document nodes.
pub fn parse_markdown(text: &str) -> Vec<DocNode> {
    let mut nodes = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let node = if let Some(rest) = line.strip_prefix("## ") {
            DocNode::Heading {
                level: 1,
                spans: parse_spans(rest),
            }
        } else if let Some(rest) = line.strip_prefix("### ") {
            DocNode::Heading {
                level: 2,
                spans: parse_spans(rest),
            }
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            DocNode::Bullet {
                spans: parse_spans(rest),
            }
        } else if let Some(rest) = line.strip_prefix("> ") {
            DocNode::BlockQuote {
                spans: parse_spans(rest),
            }
        } else {
            DocNode::Paragraph {
                spans: parse_spans(line),
            }
        };
        nodes.push(node);
    }
    nodes
}

/// Split a line into plain/bold spans on `**` markers.
///
/// An unterminated marker is kept as literal text rather than styling the
/// rest of the line.
fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let (before, after_open) = rest.split_at(open);
        let after_open = &after_open[2..];
        match after_open.find("**") {
            Some(close) => {
                if !before.is_empty() {
                    spans.push(Span::plain(before));
                }
                let (bold_text, after_close) = after_open.split_at(close);
                if !bold_text.is_empty() {
                    spans.push(Span::bold(bold_text));
                }
                rest = &after_close[2..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        spans.push(Span::plain(rest));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let nodes = parse_markdown("## Resumo\n### Detalhe");
        assert_eq!(
            nodes[0],
            DocNode::Heading {
                level: 1,
                spans: vec![Span::plain("Resumo")]
            }
        );
        assert_eq!(
            nodes[1],
            DocNode::Heading {
                level: 2,
                spans: vec![Span::plain("Detalhe")]
            }
        );
    }

    #[test]
    fn test_bullets_both_markers() {
        let nodes = parse_markdown("- primeiro\n* segundo");
        assert!(matches!(nodes[0], DocNode::Bullet { .. }));
        assert!(matches!(nodes[1], DocNode::Bullet { .. }));
    }

    #[test]
    fn test_blockquote() {
        let nodes = parse_markdown("> citação legal");
        assert_eq!(
            nodes[0],
            DocNode::BlockQuote {
                spans: vec![Span::plain("citação legal")]
            }
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let nodes = parse_markdown("primeiro\n\n\nsegundo");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_bold_run_inside_paragraph() {
        let nodes = parse_markdown("prazo **rigoroso** aplicável");
        assert_eq!(
            nodes[0],
            DocNode::Paragraph {
                spans: vec![
                    Span::plain("prazo "),
                    Span::bold("rigoroso"),
                    Span::plain(" aplicável"),
                ]
            }
        );
    }

    #[test]
    fn test_multiple_bold_runs() {
        let nodes = parse_markdown("**a** e **b**");
        assert_eq!(
            nodes[0],
            DocNode::Paragraph {
                spans: vec![Span::bold("a"), Span::plain(" e "), Span::bold("b")]
            }
        );
    }

    #[test]
    fn test_unterminated_bold_is_literal() {
        let nodes = parse_markdown("prazo **rigoroso");
        assert_eq!(
            nodes[0],
            DocNode::Paragraph {
                spans: vec![Span::plain("prazo **rigoroso")]
            }
        );
    }

    #[test]
    fn test_bold_inside_bullet() {
        let nodes = parse_markdown("- item **crítico**");
        assert_eq!(
            nodes[0],
            DocNode::Bullet {
                spans: vec![Span::plain("item "), Span::bold("crítico")]
            }
        );
    }

    #[test]
    fn test_whole_line_bold() {
        let nodes = parse_markdown("**tudo**");
        assert_eq!(
            nodes[0],
            DocNode::Paragraph {
                spans: vec![Span::bold("tudo")]
            }
        );
    }
}
