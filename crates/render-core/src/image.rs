//! Positioned image resolution.

use crate::types::{ClearMode, FloatMode, Placement, RenderOptions, RenderedBlock};
use quill_document::{Alignment, ImageEntry};

/// Maps a normalized alignment onto its fixed pair of layout-intent tags.
///
/// Total over the three-valued enum; alignment is normalized upstream, so
/// no default arm is needed.
pub fn placement_for(alignment: Alignment) -> Placement {
    match alignment {
        Alignment::Left => Placement {
            float: FloatMode::Left,
            clear: ClearMode::None,
        },
        Alignment::Right => Placement {
            float: FloatMode::Right,
            clear: ClearMode::None,
        },
        Alignment::Center => Placement {
            float: FloatMode::Centered,
            clear: ClearMode::Both,
        },
    }
}

/// Resolves a classified image entry into a positioned figure block.
///
/// The file URL arrives protocol-relative and leaves with the `https:`
/// scheme. Alt text falls back from title to caption to the configured
/// generic label.
pub(crate) fn resolve(image: &ImageEntry<'_>, options: &RenderOptions) -> RenderedBlock {
    RenderedBlock::PositionedFigure {
        src: format!("https:{}", image.url),
        alt: image
            .title
            .or(image.caption)
            .map(str::to_owned)
            .unwrap_or_else(|| options.fallback_alt.clone()),
        caption: image.caption.map(str::to_owned),
        placement: placement_for(image.alignment),
    }
}
