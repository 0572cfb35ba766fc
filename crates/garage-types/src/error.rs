//! Error types for garage

use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// A stored line that could not be decoded into a vehicle
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Record line is empty")]
    Empty,

    #[error("Invalid {category} record: expected {expected} fields, found {found}. Line: {line}")]
    FieldCount {
        category: Category,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("Invalid integer in field '{field}': {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid decimal in field '{field}': {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Field '{field}' cannot be stored as is: {value:?}")]
    Unencodable { field: &'static str, value: String },
}

/// File store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed record: {0}")]
    Format(#[from] FormatError),

    #[error("Failed to {action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{}", render_violations(.0))]
    Validation(Vec<String>),

    #[error("A {category} with ID {id} already exists")]
    DuplicateId { category: Category, id: i32 },

    #[error("No {category} found with ID {id}")]
    NotFound { category: Category, id: i32 },

    #[error("No free {category} ID left")]
    IdsExhausted { category: Category },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Every violation message carried by a validation error
    pub fn violations(&self) -> &[String] {
        match self {
            Error::Validation(messages) => messages,
            _ => &[],
        }
    }
}

fn render_violations(messages: &[String]) -> String {
    if messages.is_empty() {
        return "Validation failed".to_string();
    }
    let mut out = String::from("Validation failed:");
    for (i, message) in messages.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, message));
    }
    out
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_every_message() {
        let err = Error::Validation(vec!["first".to_string(), "second".to_string()]);
        let text = err.to_string();
        assert!(text.contains("1. first"));
        assert!(text.contains("2. second"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_store_error_names_path() {
        let err = StoreError::io(
            "data/autos.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("data/autos.csv"));
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound {
            category: Category::Truck,
            id: 7,
        };
        assert_eq!(err.to_string(), "No truck found with ID 7");
    }

    #[test]
    fn test_format_error_converts() {
        let err: Error = FormatError::Unencodable {
            field: "model",
            value: "Clase C, AMG".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Format(FormatError::Unencodable { field: "model", .. })));
        assert!(err.to_string().contains("model"));
    }
}
