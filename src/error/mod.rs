use thiserror::Error;

/// Errors surfaced by the explicit URL-verification path.
///
/// Field setters never return these: invalid setter input is dropped
/// silently, leaving the field at its previous value. `OgError` exists for
/// callers who invoke [`crate::validate::url::verify`] directly and want to
/// know why a URL was rejected.
#[derive(Error, Debug)]
pub enum OgError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("URL verification failed: {0}")]
    Verification(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type OgResult<T> = Result<T, OgError>;
