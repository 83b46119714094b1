use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalverError {
    /// The format has fewer than three dot-separated tokens.
    #[error("invalid format: {format}")]
    InvalidFormat { format: String },

    #[error("unknown token `{token}` in format: {format}")]
    UnknownToken { token: String, format: String },

    /// Formatting the date layout or filling a placeholder failed.
    #[error("render error: {0}")]
    Render(String),
}
