//! Video embed resolution.

use crate::error::VideoUrlError;
use crate::types::RenderedBlock;
use quill_document::VideoEmbed;
use regex::Regex;
use std::sync::LazyLock;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Watch-URL, short-URL, and embed-URL forms; the identifier runs up to the
/// next `&`, `?`, `#`, newline, or end of string.
static URL_FORMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
        .expect("video URL pattern compiles")
});

/// A bare 11-character identifier with no URL wrapper.
static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("video id pattern compiles"));

/// Extracts the platform video identifier from a URL or bare identifier.
///
/// Matchers are tried in order; arbitrary input never panics.
pub fn video_id(url: &str) -> Result<&str, VideoUrlError> {
    if let Some(captures) = URL_FORMS.captures(url) {
        if let Some(id) = captures.get(1) {
            return Ok(id.as_str());
        }
    }
    if BARE_ID.is_match(url) {
        return Ok(url);
    }
    Err(VideoUrlError::Unrecognized {
        url: url.to_string(),
    })
}

/// Resolves a classified video embed into a playable block, or a visible
/// error block naming the offending URL.
pub(crate) fn resolve(embed: &VideoEmbed<'_>) -> RenderedBlock {
    match video_id(embed.youtube_url) {
        Ok(id) => RenderedBlock::Video {
            embed_url: format!("{EMBED_BASE}{id}"),
            title: embed.title.map(str::to_owned),
            description: embed.description.map(str::to_owned),
        },
        Err(err) => {
            log::warn!("{err}");
            RenderedBlock::VideoError {
                url: embed.youtube_url.to_string(),
            }
        }
    }
}
