//! CMS delivery-payload parsing.
//!
//! This crate is the input boundary of the pipeline: it turns delivery
//! payloads from the content source into the document model and the
//! article/category content model. Parsing is lenient: the source resolves
//! cross-referenced entries only to a bounded depth, so unknown node types
//! and unresolved links degrade to skips with diagnostics rather than
//! errors.

pub mod article;
pub mod error;
pub mod rich_text;

pub use article::{
    Article, ArticleFields, Category, CategoryFields, article_by_slug, articles_from_str,
    articles_from_value, featured_articles, related_articles, section_menu_articles,
};
pub use error::SourceError;
pub use rich_text::{document_from_str, document_from_value};
