use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("not a rich-text document: root node type is {0:?}")]
    NotADocument(String),

    #[error("article {0:?} has no body content")]
    MissingBody(String),
}
