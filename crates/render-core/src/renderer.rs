//! Recursive document walk and embedded-entry dispatch.

use crate::types::{RenderOptions, RenderedBlock, RenderedInline};
use crate::{image, video};
use quill_document::{AssetRef, EmbeddedEntry, EntryDefect, EntryRef, Node, RichTextDocument};

/// Renders a document into a sequence of markup blocks.
///
/// Pure and deterministic: the same document and options always produce
/// structurally identical output. Malformed nodes render nothing and leave
/// a diagnostic log entry; no error reaches the caller.
pub fn render(document: &RichTextDocument, options: &RenderOptions) -> Vec<RenderedBlock> {
    render_blocks(&document.content, options, 0)
}

fn render_blocks(nodes: &[Node], options: &RenderOptions, depth: usize) -> Vec<RenderedBlock> {
    if depth >= options.max_depth {
        log::warn!(
            "document nesting exceeds {} levels, skipping subtree",
            options.max_depth
        );
        return Vec::new();
    }
    nodes
        .iter()
        .filter_map(|node| render_block(node, options, depth))
        .collect()
}

fn render_block(node: &Node, options: &RenderOptions, depth: usize) -> Option<RenderedBlock> {
    match node {
        Node::Paragraph { children } => Some(RenderedBlock::Paragraph {
            children: render_inlines(children, options, depth + 1),
        }),
        Node::Heading { level, children } => Some(RenderedBlock::Heading {
            level: *level,
            children: render_inlines(children, options, depth + 1),
        }),
        Node::UnorderedList { children } => Some(RenderedBlock::List {
            ordered: false,
            children: render_blocks(children, options, depth + 1),
        }),
        Node::OrderedList { children } => Some(RenderedBlock::List {
            ordered: true,
            children: render_blocks(children, options, depth + 1),
        }),
        Node::ListItem { children } => Some(RenderedBlock::ListItem {
            children: render_blocks(children, options, depth + 1),
        }),
        Node::Blockquote { children } => Some(RenderedBlock::Quote {
            children: render_blocks(children, options, depth + 1),
        }),
        Node::ThematicBreak => Some(RenderedBlock::ThematicBreak),
        Node::EmbeddedAsset(asset) => render_asset(asset, options),
        Node::EmbeddedEntry(entry) => render_entry(entry, options),
        Node::Text { .. } | Node::Hyperlink { .. } => {
            log::debug!("{} node in block position, skipping", node.kind());
            None
        }
    }
}

fn render_inlines(nodes: &[Node], options: &RenderOptions, depth: usize) -> Vec<RenderedInline> {
    if depth >= options.max_depth {
        log::warn!(
            "document nesting exceeds {} levels, skipping subtree",
            options.max_depth
        );
        return Vec::new();
    }
    nodes
        .iter()
        .filter_map(|node| render_inline(node, options, depth))
        .collect()
}

fn render_inline(node: &Node, options: &RenderOptions, depth: usize) -> Option<RenderedInline> {
    match node {
        Node::Text { value, marks } => {
            let mut inline = RenderedInline::Text(value.clone());
            if marks.underline {
                inline = RenderedInline::Underline(vec![inline]);
            }
            if marks.italic {
                inline = RenderedInline::Emphasis(vec![inline]);
            }
            if marks.bold {
                inline = RenderedInline::Strong(vec![inline]);
            }
            Some(inline)
        }
        Node::Hyperlink { uri, children } => Some(RenderedInline::Link {
            href: uri.clone(),
            children: render_inlines(children, options, depth + 1),
        }),
        other => {
            log::debug!("{} node in inline position, skipping", other.kind());
            None
        }
    }
}

/// An asset whose file did not resolve produces nothing; this is a silent
/// skip, not an error. Otherwise the figure carries the `https:`-prefixed
/// URL, the title as alt text (or the generic fallback), and the title as
/// an optional caption line.
fn render_asset(asset: &AssetRef, options: &RenderOptions) -> Option<RenderedBlock> {
    let file = asset.file.as_ref()?;
    Some(RenderedBlock::Figure {
        src: format!("https:{}", file.url),
        alt: asset
            .title
            .clone()
            .unwrap_or_else(|| options.fallback_alt.clone()),
        caption: asset.title.clone(),
    })
}

fn render_entry(entry: &EntryRef, options: &RenderOptions) -> Option<RenderedBlock> {
    let id = entry.id.as_deref().unwrap_or("<no id>");
    match entry.classify() {
        Ok(EmbeddedEntry::Video(embed)) => Some(video::resolve(&embed)),
        Ok(EmbeddedEntry::Image(image_entry)) => Some(image::resolve(&image_entry, options)),
        Ok(EmbeddedEntry::Unrecognized { content_type }) => {
            log::warn!(
                "embedded entry {id}: unrecognized content type {:?}, skipping",
                content_type.unwrap_or("<none>")
            );
            None
        }
        Err(EntryDefect::MissingFields) => {
            log::warn!("embedded entry {id}: reference did not resolve, skipping");
            None
        }
        Err(EntryDefect::MissingField(field)) => {
            log::warn!("embedded entry {id}: missing {field}, skipping");
            None
        }
    }
}
