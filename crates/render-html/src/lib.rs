//! HTML backend for rendered rich-text blocks.
//!
//! Serializes a [`RenderedBlock`] sequence into semantic markup. Styling is
//! left to the page; the only classes emitted are the layout-intent tags of
//! positioned figures and hooks for the video and error blocks.

pub mod escape;

pub use escape::{escape_attr, escape_text};

use quill_render_core::{RenderedBlock, RenderedInline};

/// Serializes a block sequence into an HTML fragment.
pub fn blocks_to_html(blocks: &[RenderedBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &RenderedBlock) {
    match block {
        RenderedBlock::Paragraph { children } => {
            out.push_str("<p>");
            write_inlines(out, children);
            out.push_str("</p>\n");
        }
        RenderedBlock::Heading { level, children } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>"));
            write_inlines(out, children);
            out.push_str(&format!("</h{level}>\n"));
        }
        RenderedBlock::List { ordered, children } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>\n"));
            for child in children {
                write_block(out, child);
            }
            out.push_str(&format!("</{tag}>\n"));
        }
        RenderedBlock::ListItem { children } => {
            out.push_str("<li>");
            for child in children {
                write_block(out, child);
            }
            out.push_str("</li>\n");
        }
        RenderedBlock::Quote { children } => {
            out.push_str("<blockquote>\n");
            for child in children {
                write_block(out, child);
            }
            out.push_str("</blockquote>\n");
        }
        RenderedBlock::ThematicBreak => out.push_str("<hr>\n"),
        RenderedBlock::Figure { src, alt, caption } => {
            out.push_str("<figure>");
            write_img(out, src, alt);
            write_caption(out, caption.as_deref());
            out.push_str("</figure>\n");
        }
        RenderedBlock::PositionedFigure {
            src,
            alt,
            caption,
            placement,
        } => {
            out.push_str(&format!(
                "<figure class=\"{} {}\">",
                placement.float.as_str(),
                placement.clear.as_str()
            ));
            write_img(out, src, alt);
            write_caption(out, caption.as_deref());
            out.push_str("</figure>\n");
        }
        RenderedBlock::Video {
            embed_url,
            title,
            description,
        } => {
            out.push_str("<div class=\"video-embed\">");
            out.push_str(&format!(
                "<iframe src=\"{}\" title=\"{}\" allowfullscreen></iframe>",
                escape_attr(embed_url),
                escape_attr(title.as_deref().unwrap_or("YouTube video")),
            ));
            if let Some(title) = title {
                out.push_str(&format!("<h3>{}</h3>", escape_text(title)));
            }
            if let Some(description) = description {
                out.push_str(&format!("<p>{}</p>", escape_text(description)));
            }
            out.push_str("</div>\n");
        }
        RenderedBlock::VideoError { url } => {
            out.push_str("<div class=\"video-error\">");
            out.push_str("<p>Invalid YouTube URL. Please check the video link.</p>");
            out.push_str(&format!("<p>URL: {}</p>", escape_text(url)));
            out.push_str("</div>\n");
        }
    }
}

fn write_img(out: &mut String, src: &str, alt: &str) {
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_attr(src),
        escape_attr(alt)
    ));
}

fn write_caption(out: &mut String, caption: Option<&str>) {
    if let Some(caption) = caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", escape_text(caption)));
    }
}

fn write_inlines(out: &mut String, inlines: &[RenderedInline]) {
    for inline in inlines {
        write_inline(out, inline);
    }
}

fn write_inline(out: &mut String, inline: &RenderedInline) {
    match inline {
        RenderedInline::Text(value) => out.push_str(&escape_text(value)),
        RenderedInline::Strong(children) => wrap_inlines(out, "strong", children),
        RenderedInline::Emphasis(children) => wrap_inlines(out, "em", children),
        RenderedInline::Underline(children) => wrap_inlines(out, "u", children),
        RenderedInline::Link { href, children } => {
            out.push_str(&format!("<a href=\"{}\">", escape_attr(href)));
            write_inlines(out, children);
            out.push_str("</a>");
        }
    }
}

fn wrap_inlines(out: &mut String, tag: &str, children: &[RenderedInline]) {
    out.push_str(&format!("<{tag}>"));
    write_inlines(out, children);
    out.push_str(&format!("</{tag}>"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_render_core::{ClearMode, FloatMode, Placement};

    #[test]
    fn test_paragraph_with_strong_run() {
        let blocks = vec![RenderedBlock::Paragraph {
            children: vec![
                RenderedInline::Text("a life of ".to_string()),
                RenderedInline::Strong(vec![RenderedInline::Text("faith".to_string())]),
            ],
        }];
        assert_eq!(
            blocks_to_html(&blocks),
            "<p>a life of <strong>faith</strong></p>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let blocks = vec![RenderedBlock::Paragraph {
            children: vec![RenderedInline::Text("<script> & co".to_string())],
        }];
        assert_eq!(
            blocks_to_html(&blocks),
            "<p>&lt;script&gt; &amp; co</p>\n"
        );
    }

    #[test]
    fn test_nested_list_markup() {
        let blocks = vec![RenderedBlock::List {
            ordered: true,
            children: vec![RenderedBlock::ListItem {
                children: vec![RenderedBlock::Paragraph {
                    children: vec![RenderedInline::Text("first".to_string())],
                }],
            }],
        }];
        assert_eq!(
            blocks_to_html(&blocks),
            "<ol>\n<li><p>first</p>\n</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_positioned_figure_carries_layout_classes() {
        let blocks = vec![RenderedBlock::PositionedFigure {
            src: "https://images.ctfassets.net/x.jpg".to_string(),
            alt: "Courtyard".to_string(),
            caption: Some("At dawn".to_string()),
            placement: Placement {
                float: FloatMode::Left,
                clear: ClearMode::None,
            },
        }];
        let html = blocks_to_html(&blocks);
        assert!(html.contains("<figure class=\"float-left clear-none\">"));
        assert!(html.contains("<img src=\"https://images.ctfassets.net/x.jpg\" alt=\"Courtyard\">"));
        assert!(html.contains("<figcaption>At dawn</figcaption>"));
    }

    #[test]
    fn test_video_block_markup() {
        let blocks = vec![RenderedBlock::Video {
            embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
            title: None,
            description: None,
        }];
        assert_eq!(
            blocks_to_html(&blocks),
            "<div class=\"video-embed\"><iframe src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\" \
             title=\"YouTube video\" allowfullscreen></iframe></div>\n"
        );
    }

    #[test]
    fn test_video_error_names_the_url() {
        let blocks = vec![RenderedBlock::VideoError {
            url: "nope <wrong>".to_string(),
        }];
        let html = blocks_to_html(&blocks);
        assert!(html.contains("Invalid YouTube URL"));
        assert!(html.contains("URL: nope &lt;wrong&gt;"));
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let blocks = vec![RenderedBlock::Heading {
            level: 9,
            children: vec![RenderedInline::Text("deep".to_string())],
        }];
        assert_eq!(blocks_to_html(&blocks), "<h6>deep</h6>\n");
    }
}
