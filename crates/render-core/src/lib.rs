//! Core rendering of rich-text documents into markup blocks.
//!
//! [`render`] walks a [`quill_document::RichTextDocument`] and produces a
//! sequence of [`RenderedBlock`]s for a markup backend. Rendering is
//! deterministic and infallible: malformed content degrades to "no block
//! for this node" plus a diagnostic log entry, so one bad embedded entry
//! never aborts the rest of the document.

pub mod error;
pub mod image;
pub mod renderer;
pub mod types;
pub mod video;

pub use error::VideoUrlError;
pub use image::placement_for;
pub use renderer::render;
pub use types::{ClearMode, FloatMode, Placement, RenderOptions, RenderedBlock, RenderedInline};
pub use video::video_id;
