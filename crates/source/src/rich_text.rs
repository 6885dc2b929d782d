//! Wire-format parsing for rich-text documents.
//!
//! The delivery format is a tree of `{nodeType, content, value, marks, data}`
//! objects with camelCase field names. The tree is walked as loose JSON
//! rather than deserialized strictly: only a root that is not a document
//! node is an error, every inner surprise degrades to a skip.

use crate::error::SourceError;
use quill_document::{AssetFile, AssetRef, EntryRef, Marks, Node, RichTextDocument};
use serde_json::Value;

/// Parses a rich-text document from raw JSON text.
pub fn document_from_str(source: &str) -> Result<RichTextDocument, SourceError> {
    let value: Value = serde_json::from_str(source)?;
    document_from_value(&value)
}

/// Parses a rich-text document from an already-parsed JSON value, as found
/// in an article's body field.
pub fn document_from_value(value: &Value) -> Result<RichTextDocument, SourceError> {
    let node_type = node_type(value);
    if node_type != "document" {
        return Err(SourceError::NotADocument(node_type.to_string()));
    }
    Ok(RichTextDocument {
        content: child_nodes(value),
    })
}

fn node_type(value: &Value) -> &str {
    value
        .get("nodeType")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn child_nodes(value: &Value) -> Vec<Node> {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(node_from_value).collect())
        .unwrap_or_default()
}

fn node_from_value(value: &Value) -> Option<Node> {
    let node_type = node_type(value);
    let node = match node_type {
        "paragraph" => Node::Paragraph {
            children: child_nodes(value),
        },
        "unordered-list" => Node::UnorderedList {
            children: child_nodes(value),
        },
        "ordered-list" => Node::OrderedList {
            children: child_nodes(value),
        },
        "list-item" => Node::ListItem {
            children: child_nodes(value),
        },
        "blockquote" => Node::Blockquote {
            children: child_nodes(value),
        },
        "hr" => Node::ThematicBreak,
        "text" => Node::Text {
            value: value
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            marks: marks(value),
        },
        "hyperlink" => Node::Hyperlink {
            uri: str_at(value, &["data", "uri"]).unwrap_or_default().to_string(),
            children: child_nodes(value),
        },
        "embedded-asset-block" => Node::EmbeddedAsset(asset_ref(target(value))),
        "embedded-entry-block" => Node::EmbeddedEntry(entry_ref(target(value))),
        other => {
            if let Some(level) = heading_level(other) {
                Node::Heading {
                    level,
                    children: child_nodes(value),
                }
            } else {
                log::debug!("skipping unsupported rich-text node type {other:?}");
                return None;
            }
        }
    };
    Some(node)
}

fn heading_level(node_type: &str) -> Option<u8> {
    let level = node_type.strip_prefix("heading-")?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn marks(value: &Value) -> Marks {
    let mut marks = Marks::default();
    let Some(items) = value.get("marks").and_then(Value::as_array) else {
        return marks;
    };
    for item in items {
        match item.get("type").and_then(Value::as_str) {
            Some("bold") => marks.bold = true,
            Some("italic") => marks.italic = true,
            Some("underline") => marks.underline = true,
            _ => {}
        }
    }
    marks
}

fn target(value: &Value) -> Option<&Value> {
    value.get("data").and_then(|data| data.get("target"))
}

fn asset_ref(target: Option<&Value>) -> AssetRef {
    let Some(target) = target else {
        return AssetRef::default();
    };
    AssetRef {
        id: owned_str_at(target, &["sys", "id"]),
        title: owned_str_at(target, &["fields", "title"]),
        file: str_at(target, &["fields", "file", "url"]).map(|url| AssetFile {
            url: url.to_string(),
            file_name: owned_str_at(target, &["fields", "file", "fileName"]),
            content_type: owned_str_at(target, &["fields", "file", "contentType"]),
        }),
    }
}

fn entry_ref(target: Option<&Value>) -> EntryRef {
    let Some(target) = target else {
        return EntryRef::default();
    };
    EntryRef {
        id: owned_str_at(target, &["sys", "id"]),
        content_type_id: owned_str_at(target, &["sys", "contentType", "sys", "id"]),
        fields: target
            .get("fields")
            .and_then(Value::as_object)
            .cloned(),
    }
}

/// Follows a chain of object keys, short-circuiting on the first missing
/// link, and returns the final value only if it is a string.
fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(*key)?;
    }
    current.as_str()
}

fn owned_str_at(value: &Value, path: &[&str]) -> Option<String> {
    str_at(value, path).map(str::to_string)
}
