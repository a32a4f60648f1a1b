//! Error types for the client.
//!
//! Parse failures are recovered at the [`ResponseParser`](crate::parser::ResponseParser)
//! boundary (logged, surfaced as "no root"); the schema-mismatch variants
//! propagate out of dispatch, since they indicate a bug in schema maintenance
//! rather than bad input.

use thiserror::Error;

/// Main error type for the client library.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or unjoinable URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Response body is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A node's tag has no entry in the active schema.
    #[error("Unknown node with tag <{tag}>")]
    UnknownNode { tag: String },

    /// A discriminator attribute value has no entry in the type mapping.
    #[error("Unknown node type \"{value}\" for <{tag}>")]
    UnknownNodeType { tag: String, value: String },

    /// A schema entry names a descriptor that is not registered.
    #[error("No descriptor registered under name \"{name}\"")]
    UnknownDescriptor { name: String },

    /// No stock schema is known for the requested API path.
    #[error("No schema known for path \"{path}\"")]
    UnknownPath { path: String },
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_display() {
        let err = ClientError::UnknownNode {
            tag: "Widget".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown node with tag <Widget>");
    }

    #[test]
    fn test_unknown_node_type_display() {
        let err = ClientError::UnknownNodeType {
            tag: "Directory".to_string(),
            value: "podcast".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown node type \"podcast\" for <Directory>"
        );
    }

    #[test]
    fn test_unknown_descriptor_display() {
        let err = ClientError::UnknownDescriptor {
            name: "Missing".to_string(),
        };
        assert!(err.to_string().contains("Missing"));
        assert!(err.to_string().contains("descriptor"));
    }
}
