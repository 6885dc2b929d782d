//! Article and category content model, plus pure selection helpers over
//! parsed collections.
//!
//! Entry-level parsing uses strict serde derives per item; a malformed item
//! is dropped with a diagnostic rather than failing the whole collection.
//! Cross-referenced links (thumbnail, categories) tolerate unresolved
//! references by leaving their `fields` empty.

use crate::error::SourceError;
use crate::rich_text;
use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use quill_document::RichTextDocument;
use serde::Deserialize;
use serde_json::Value;

const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Sys {
    #[serde(default)]
    pub id: String,
}

/// A fully-resolved entry of some content type.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry<F> {
    #[serde(default)]
    pub sys: Sys,
    pub fields: F,
}

pub type Article = Entry<ArticleFields>;
pub type Category = Entry<CategoryFields>;

/// A link to an asset that may or may not have been resolved by the
/// delivery include depth.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetLink {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: Option<AssetFields>,
}

impl AssetLink {
    /// The protocol-relative file URL, when the link resolved.
    pub fn url(&self) -> Option<&str> {
        let file = self.fields.as_ref()?.file.as_ref()?;
        Some(file.url.as_str())
    }

    /// The file URL with the `https:` scheme prepended.
    pub fn https_url(&self) -> Option<String> {
        self.url().map(|url| format!("https:{url}"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFileFields>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFileFields {
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A link to a category entry, tolerant of shallow resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryLink {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: Option<CategoryFields>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFields {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub catimage: Option<AssetLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFields {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub thumbnail: Option<AssetLink>,
    #[serde(default)]
    pub body_content: Option<Value>,
    #[serde(default)]
    pub category: Vec<CategoryLink>,
    #[serde(deserialize_with = "deserialize_publish_date")]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub featured_on_homepage: bool,
    #[serde(default)]
    pub show_in_quran_dropdown: bool,
}

impl Article {
    /// Parses the article's rich-text body.
    pub fn body(&self) -> Result<RichTextDocument, SourceError> {
        match &self.fields.body_content {
            Some(value) => rich_text::document_from_value(value),
            None => Err(SourceError::MissingBody(self.fields.slug.clone())),
        }
    }

    /// Title of the first linked category, or "Uncategorized" when no
    /// category link resolved.
    pub fn category_title(&self) -> &str {
        self.fields
            .category
            .first()
            .and_then(|link| link.fields.as_ref())
            .map(|fields| fields.title.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Thumbnail URL with the `https:` scheme prepended.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.fields.thumbnail.as_ref()?.https_url()
    }
}

/// The date field arrives either as a full RFC 3339 timestamp or as a bare
/// calendar date, depending on how the field was configured.
fn deserialize_publish_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_publish_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized publish date {raw:?}")))
}

fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }
    let date = raw.parse::<NaiveDate>().ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Parses an entries collection (`{items: [...]}`) from raw JSON text.
pub fn articles_from_str(source: &str) -> Result<Vec<Article>, SourceError> {
    let value: Value = serde_json::from_str(source)?;
    Ok(articles_from_value(&value))
}

/// Parses an entries collection, dropping malformed items with a warning.
pub fn articles_from_value(value: &Value) -> Vec<Article> {
    let Some(items) = value.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(article) => Some(article),
            Err(err) => {
                log::warn!("skipping malformed article entry: {err}");
                None
            }
        })
        .collect()
}

/// Finds an article by its URL slug.
pub fn article_by_slug<'a>(articles: &'a [Article], slug: &str) -> Option<&'a Article> {
    articles.iter().find(|article| article.fields.slug == slug)
}

/// Articles flagged for the homepage, newest first.
pub fn featured_articles(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.fields.featured_on_homepage)
        .sorted_by_key(|article| std::cmp::Reverse(article.fields.publish_date))
        .collect()
}

/// Articles flagged for the section dropdown, in title order.
pub fn section_menu_articles(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.fields.show_in_quran_dropdown)
        .sorted_by(|a, b| a.fields.title.cmp(&b.fields.title))
        .collect()
}

/// Articles sharing the subject's primary category, excluding the subject
/// itself, capped at `limit`.
pub fn related_articles<'a>(
    articles: &'a [Article],
    subject: &Article,
    limit: usize,
) -> Vec<&'a Article> {
    let category = subject.category_title();
    articles
        .iter()
        .filter(|candidate| {
            candidate.sys.id != subject.sys.id && candidate.category_title() == category
        })
        .take(limit)
        .collect()
}
