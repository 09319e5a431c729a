//! Error types shared across the prism crates
//!
//! Store mutators never fail; errors only come from the edges (reading
//! configuration, parsing selector names).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML or has the wrong shape
    #[error("Config parsing failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Config serialization failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration parsed but violates a store invariant
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A name did not match any variant of a selector enum
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for prism operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownName {
            kind: "easing",
            value: "bouncy".into(),
        };
        assert_eq!(err.to_string(), "unknown easing 'bouncy'");

        let err = Error::InvalidConfig("need at least two stops".into());
        assert_eq!(err.to_string(), "Invalid config: need at least two stops");

        let err = Error::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("I/O error on missing.toml"));
    }
}
