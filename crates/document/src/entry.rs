//! Embedded-entry references and their classification.
//!
//! Entries arrive from the content source as a discriminator plus a
//! duck-typed field map. [`EntryRef::classify`] turns that shape into a
//! closed tagged variant in a single step at the boundary, so callers can
//! match exhaustively instead of scattering string comparisons.

use serde_json::{Map, Value};

/// Content-type discriminator for video embeds.
pub const VIDEO_EMBED_TYPE: &str = "videoEmbed";
/// Content-type discriminator for positioned images.
pub const IMAGE_ENTRY_TYPE: &str = "imageEntry";

/// A reference to an embedded entry, as delivered.
///
/// All parts are optional: the content source resolves cross-referenced
/// entries only to a bounded depth, so a reference may arrive with no
/// fields at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryRef {
    pub id: Option<String>,
    pub content_type_id: Option<String>,
    pub fields: Option<Map<String, Value>>,
}

/// Horizontal placement of a positioned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

impl Alignment {
    /// Normalizes a raw alignment value into one of the three literals.
    ///
    /// The editor widget may deliver the value as a single string or as a
    /// one-element collection; a collection contributes its first element.
    /// The value is stringified, lowercased, and trimmed before matching.
    /// Total: any unrecognized or absent value resolves to `Center`.
    pub fn normalize(raw: Option<&Value>) -> Self {
        let Some(raw) = raw else {
            return Alignment::Center;
        };
        let raw = match raw {
            Value::Array(items) => match items.first() {
                Some(first) => first,
                None => return Alignment::Center,
            },
            other => other,
        };
        let text = match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match text.to_lowercase().trim() {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }
}

/// A video embed with a validated, non-empty source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEmbed<'a> {
    pub title: Option<&'a str>,
    pub youtube_url: &'a str,
    pub description: Option<&'a str>,
}

/// A positioned image whose file URL resolved through the full link chain.
///
/// `url` is still protocol-relative; the renderer prepends `https:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEntry<'a> {
    pub title: Option<&'a str>,
    pub url: &'a str,
    pub caption: Option<&'a str>,
    pub alignment: Alignment,
}

/// The closed set of recognized entry shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedEntry<'a> {
    Video(VideoEmbed<'a>),
    Image(ImageEntry<'a>),
    /// Any other discriminator, carried raw for diagnostics. `None` when the
    /// entry arrived without a discriminator at all.
    Unrecognized { content_type: Option<&'a str> },
}

/// Why a reference could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDefect {
    /// The entry arrived with no resolved fields (shallow include depth).
    MissingFields,
    /// A required field, or a link in its chain, is absent or empty.
    MissingField(&'static str),
}

impl EntryRef {
    /// Classifies the reference into a recognized shape.
    ///
    /// Field-presence requirements are enforced here so that downstream
    /// resolvers work with validated data: `videoEmbed` requires a non-empty
    /// `youtubeUrl`; `imageEntry` requires the whole
    /// `image.fields.file.url` chain to resolve to a non-empty string.
    pub fn classify(&self) -> Result<EmbeddedEntry<'_>, EntryDefect> {
        let Some(fields) = self.fields.as_ref() else {
            return Err(EntryDefect::MissingFields);
        };
        match self.content_type_id.as_deref() {
            Some(VIDEO_EMBED_TYPE) => {
                let youtube_url = field_str(fields, &["youtubeUrl"])
                    .filter(|url| !url.is_empty())
                    .ok_or(EntryDefect::MissingField("youtubeUrl"))?;
                Ok(EmbeddedEntry::Video(VideoEmbed {
                    title: field_str(fields, &["title"]),
                    youtube_url,
                    description: field_str(fields, &["description"]),
                }))
            }
            Some(IMAGE_ENTRY_TYPE) => {
                let url = field_str(fields, &["image", "fields", "file", "url"])
                    .filter(|url| !url.is_empty())
                    .ok_or(EntryDefect::MissingField("image.fields.file.url"))?;
                Ok(EmbeddedEntry::Image(ImageEntry {
                    title: field_str(fields, &["title"]),
                    url,
                    caption: field_str(fields, &["caption"]),
                    alignment: Alignment::normalize(fields.get("alignment")),
                }))
            }
            other => Ok(EmbeddedEntry::Unrecognized {
                content_type: other,
            }),
        }
    }
}

/// Follows a chain of object keys, short-circuiting on the first missing
/// link, and returns the final value only if it is a string.
fn field_str<'a>(fields: &'a Map<String, Value>, path: &[&str]) -> Option<&'a str> {
    let (first, rest) = path.split_first()?;
    let mut current = fields.get(*first)?;
    for key in rest {
        current = current.get(*key)?;
    }
    current.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_alignment_accepts_case_and_whitespace_variants() {
        assert_eq!(Alignment::normalize(Some(&json!("Left"))), Alignment::Left);
        assert_eq!(
            Alignment::normalize(Some(&json!(" RIGHT "))),
            Alignment::Right
        );
        assert_eq!(
            Alignment::normalize(Some(&json!(["center"]))),
            Alignment::Center
        );
    }

    #[test]
    fn test_alignment_collection_takes_first_element() {
        assert_eq!(
            Alignment::normalize(Some(&json!(["left", "right"]))),
            Alignment::Left
        );
    }

    #[test]
    fn test_alignment_defaults_to_center() {
        assert_eq!(Alignment::normalize(None), Alignment::Center);
        assert_eq!(
            Alignment::normalize(Some(&json!("diagonal"))),
            Alignment::Center
        );
        assert_eq!(Alignment::normalize(Some(&json!(null))), Alignment::Center);
        assert_eq!(Alignment::normalize(Some(&json!([]))), Alignment::Center);
        assert_eq!(Alignment::normalize(Some(&json!(42))), Alignment::Center);
    }

    #[test]
    fn test_classify_video_embed() {
        let entry = EntryRef {
            id: Some("e1".into()),
            content_type_id: Some(VIDEO_EMBED_TYPE.into()),
            fields: Some(fields(json!({
                "title": "Friday sermon",
                "youtubeUrl": "https://youtu.be/dQw4w9WgXcQ",
            }))),
        };
        match entry.classify() {
            Ok(EmbeddedEntry::Video(video)) => {
                assert_eq!(video.title, Some("Friday sermon"));
                assert_eq!(video.youtube_url, "https://youtu.be/dQw4w9WgXcQ");
                assert_eq!(video.description, None);
            }
            other => panic!("expected video, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_video_requires_nonempty_url() {
        let entry = EntryRef {
            id: None,
            content_type_id: Some(VIDEO_EMBED_TYPE.into()),
            fields: Some(fields(json!({ "title": "No link", "youtubeUrl": "" }))),
        };
        assert_eq!(
            entry.classify(),
            Err(EntryDefect::MissingField("youtubeUrl"))
        );
    }

    #[test]
    fn test_classify_image_entry_resolves_full_chain() {
        let entry = EntryRef {
            id: None,
            content_type_id: Some(IMAGE_ENTRY_TYPE.into()),
            fields: Some(fields(json!({
                "title": "Mosque courtyard",
                "caption": "At dawn",
                "alignment": ["Right"],
                "image": {
                    "fields": { "file": { "url": "//images.ctfassets.net/a/b.jpg" } }
                },
            }))),
        };
        match entry.classify() {
            Ok(EmbeddedEntry::Image(image)) => {
                assert_eq!(image.url, "//images.ctfassets.net/a/b.jpg");
                assert_eq!(image.caption, Some("At dawn"));
                assert_eq!(image.alignment, Alignment::Right);
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_image_entry_with_broken_chain() {
        let entry = EntryRef {
            id: None,
            content_type_id: Some(IMAGE_ENTRY_TYPE.into()),
            fields: Some(fields(json!({
                "title": "Broken",
                "image": { "fields": {} },
            }))),
        };
        assert_eq!(
            entry.classify(),
            Err(EntryDefect::MissingField("image.fields.file.url"))
        );
    }

    #[test]
    fn test_classify_unresolved_reference() {
        let entry = EntryRef::default();
        assert_eq!(entry.classify(), Err(EntryDefect::MissingFields));
    }

    #[test]
    fn test_classify_unrecognized_discriminator() {
        let entry = EntryRef {
            id: None,
            content_type_id: Some("quizWidget".into()),
            fields: Some(fields(json!({ "question": "?" }))),
        };
        assert_eq!(
            entry.classify(),
            Ok(EmbeddedEntry::Unrecognized {
                content_type: Some("quizWidget")
            })
        );
    }
}
