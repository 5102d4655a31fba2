//! Error types for pagegen.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A header was given a level other than 0 or 1.
    #[error("Header \"{header}\" has level {level}, expected 0 or 1")]
    InvalidHeaderLevel {
        /// Text of the offending header
        header: String,
        /// The level it was given
        level: u8,
    },

    /// The same anchor id is defined by more than one header.
    #[error("Duplicate anchor id: {0}")]
    DuplicateAnchor(String),

    /// The template file does not exist.
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The template failed to compile or render.
    #[error("Template error: {0}")]
    Template(String),

    /// The content tree could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        // Tera keeps the useful detail (undefined variable, line number) in the source chain.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Error::Template(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidHeaderLevel {
            header: "Overview".to_string(),
            level: 3,
        };
        assert_eq!(
            err.to_string(),
            "Header \"Overview\" has level 3, expected 0 or 1"
        );

        let err = Error::DuplicateAnchor("intro".to_string());
        assert_eq!(err.to_string(), "Duplicate anchor id: intro");

        let err = Error::TemplateNotFound(PathBuf::from("_templates/index.html"));
        assert_eq!(err.to_string(), "Template not found: _templates/index.html");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
