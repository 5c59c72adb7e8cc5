//! Atlassian Document Format (ADF) representation.
//!
//! [`AdfDocument`] is the JSON shape Jira expects for rich-text fields
//! (issue descriptions, comments, worklog comments). It serializes from a
//! converted [`Document`] and also deserializes what Jira sends back, so
//! descriptions can be shown as plain text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::document::{Block, CellKind, Document, Inline, ListItem, Mark, Table};

/// ADF format version.
const ADF_VERSION: u32 = 1;

/// ADF root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfDocument {
    /// Always `"doc"`.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Format version.
    pub version: u32,
    /// Top-level nodes.
    #[serde(default)]
    pub content: Vec<AdfNode>,
}

/// ADF node.
///
/// Kept untyped so documents from Jira with node types this crate never
/// produces (mentions, panels, media) still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    /// Node type, e.g. `paragraph` or `text`.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Node attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<AdfNode>>,
    /// Text of a `text` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Marks of a `text` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<AdfMark>>,
}

/// ADF text mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfMark {
    /// Mark type, e.g. `strong` or `link`.
    #[serde(rename = "type")]
    pub mark_type: String,
    /// Mark attributes (`href` for links).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl AdfNode {
    fn new(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_owned(),
            attrs: None,
            content: None,
            text: None,
            marks: None,
        }
    }

    fn with_content(mut self, content: Vec<AdfNode>) -> Self {
        self.content = Some(content);
        self
    }

    fn with_attrs(mut self, attrs: Value) -> Self {
        if let Value::Object(map) = attrs {
            self.attrs = Some(map);
        }
        self
    }

    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            ..Self::new("text")
        }
    }

    fn paragraph(content: &[Inline]) -> Self {
        Self::new("paragraph").with_content(content.iter().map(Self::from).collect())
    }

    /// Node text plus the text of all descendants, without separators.
    fn inline_text(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        if self.node_type == "hardBreak" {
            out.push('\n');
        }
        for child in self.content.iter().flatten() {
            out.push_str(&child.inline_text());
        }
        out
    }

    /// Append this node as plain text lines.
    fn write_lines(&self, lines: &mut Vec<String>) {
        let children = self.content.as_deref().unwrap_or_default();
        match self.node_type.as_str() {
            "bulletList" | "orderedList" => {
                for item in children {
                    lines.push(format!("- {}", item.inline_text()));
                }
            }
            "table" => {
                for row in children {
                    let cells: Vec<String> = row
                        .content
                        .iter()
                        .flatten()
                        .map(|cell| cell.inline_text().trim().to_owned())
                        .collect();
                    lines.push(cells.join(" | "));
                }
            }
            "blockquote" | "panel" | "expand" | "layoutSection" | "layoutColumn" => {
                for child in children {
                    child.write_lines(lines);
                }
            }
            "rule" => lines.push("---".to_owned()),
            _ => lines.push(self.inline_text()),
        }
    }
}

impl AdfDocument {
    /// Flatten the document to readable text, one line per block.
    ///
    /// ```
    /// use md2adf_converter::convert;
    ///
    /// let adf = convert("# Plan\n- **one**\n- two").to_adf();
    /// assert_eq!(adf.plain_text(), "Plan\n- one\n- two");
    /// ```
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for node in &self.content {
            node.write_lines(&mut lines);
        }
        lines.join("\n")
    }
}

impl Document {
    /// Convert to Atlassian Document Format.
    pub fn to_adf(&self) -> AdfDocument {
        AdfDocument::from(self)
    }

    /// Convert to an ADF JSON value, ready to embed in a request payload.
    pub fn to_adf_value(&self) -> Value {
        // A struct of strings, maps and vectors always serializes.
        serde_json::to_value(self.to_adf()).unwrap_or(Value::Null)
    }
}

impl From<&Document> for AdfDocument {
    fn from(document: &Document) -> Self {
        Self {
            node_type: "doc".to_owned(),
            version: ADF_VERSION,
            content: document.blocks.iter().map(AdfNode::from).collect(),
        }
    }
}

impl From<&Block> for AdfNode {
    fn from(block: &Block) -> Self {
        match block {
            Block::Heading { level, content } => Self::new("heading")
                .with_attrs(json!({ "level": level }))
                .with_content(content.iter().map(Self::from).collect()),
            Block::Paragraph(content) => Self::paragraph(content),
            Block::BulletList(items) => Self::new("bulletList").with_content(list_items(items)),
            Block::OrderedList(items) => Self::new("orderedList").with_content(list_items(items)),
            Block::CodeBlock { language, text } => {
                let mut node = Self::new("codeBlock");
                if let Some(language) = language {
                    node = node.with_attrs(json!({ "language": language }));
                }
                // ADF rejects empty text nodes.
                if !text.is_empty() {
                    node = node.with_content(vec![Self::text(text)]);
                }
                node
            }
            Block::Table(table) => table_node(table),
        }
    }
}

impl From<&Inline> for AdfNode {
    fn from(inline: &Inline) -> Self {
        let mut node = Self::text(&inline.text);
        node.marks = inline.mark.as_ref().map(|mark| vec![AdfMark::from(mark)]);
        node
    }
}

impl From<&Mark> for AdfMark {
    fn from(mark: &Mark) -> Self {
        let (mark_type, attrs) = match mark {
            Mark::Bold => ("strong", None),
            Mark::Italic => ("em", None),
            Mark::Code => ("code", None),
            Mark::Link { href } => {
                let mut attrs = Map::new();
                attrs.insert("href".to_owned(), Value::String(href.clone()));
                ("link", Some(attrs))
            }
        };
        Self {
            mark_type: mark_type.to_owned(),
            attrs,
        }
    }
}

fn list_items(items: &[ListItem]) -> Vec<AdfNode> {
    items
        .iter()
        .map(|item| AdfNode::new("listItem").with_content(vec![AdfNode::paragraph(&item.content)]))
        .collect()
}

fn table_node(table: &Table) -> AdfNode {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    let cell_type = match cell.kind {
                        CellKind::Header => "tableHeader",
                        CellKind::Body => "tableCell",
                    };
                    AdfNode::new(cell_type)
                        .with_attrs(json!({}))
                        .with_content(vec![AdfNode::paragraph(&cell.content)])
                })
                .collect();
            AdfNode::new("tableRow").with_content(cells)
        })
        .collect();

    AdfNode::new("table")
        .with_attrs(json!({ "isNumberColumnEnabled": false, "layout": "default" }))
        .with_content(rows)
}
