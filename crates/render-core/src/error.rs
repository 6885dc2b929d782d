use thiserror::Error;

/// Errors from video reference resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VideoUrlError {
    #[error("no video identifier found in {url:?}")]
    Unrecognized { url: String },
}
