//! # quill
//!
//! Rich-text rendering engine for headless CMS content.
//!
//! This crate is the integration layer over the workspace:
//! - **document**: the in-memory rich-text tree model and embedded-entry
//!   classification
//! - **source**: lenient parsing of CMS delivery payloads (rich-text
//!   documents, articles, categories) and pure selection helpers
//! - **render**: the document walk producing markup blocks, with the video
//!   and positioned-image resolvers
//! - **html**: serialization of rendered blocks into escaped markup
//!
//! ## Failure policy
//!
//! Rendering never fails on malformed content: a defective node renders
//! nothing and leaves a diagnostic log entry, so a single bad embedded
//! entry cannot abort the rest of an article. Errors surface only at the
//! input boundary (unparseable JSON, a body that is not a document).
//!
//! ## Example
//!
//! ```ignore
//! use quill::{PipelineError, RenderOptions};
//!
//! let articles = quill::source::articles_from_str(&payload)?;
//! let article = quill::source::article_by_slug(&articles, "five-pillars")
//!     .ok_or_else(|| /* not found */)?;
//! let html = quill::article_html(article, &RenderOptions::default())?;
//! # Ok::<(), PipelineError>(())
//! ```

// Re-export member crates
pub use quill_document as document;
pub use quill_render_core as render;
pub use quill_render_html as html;
pub use quill_source as source;

// Re-export commonly used types
pub use quill_document::{Alignment, EntryRef, Node, RichTextDocument};
pub use quill_render_core::{RenderOptions, RenderedBlock, RenderedInline};
pub use quill_source::{Article, SourceError};

use thiserror::Error;

/// Errors from the payload-to-markup pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// Renders a raw rich-text document payload into markup blocks.
pub fn document_blocks(
    json: &str,
    options: &RenderOptions,
) -> Result<Vec<RenderedBlock>, PipelineError> {
    let document = quill_source::document_from_str(json)?;
    Ok(quill_render_core::render(&document, options))
}

/// Renders a raw rich-text document payload into an HTML fragment.
pub fn document_html(json: &str, options: &RenderOptions) -> Result<String, PipelineError> {
    Ok(quill_render_html::blocks_to_html(&document_blocks(
        json, options,
    )?))
}

/// Renders an article's body into an HTML fragment.
pub fn article_html(article: &Article, options: &RenderOptions) -> Result<String, PipelineError> {
    let body = article.body()?;
    let blocks = quill_render_core::render(&body, options);
    Ok(quill_render_html::blocks_to_html(&blocks))
}
