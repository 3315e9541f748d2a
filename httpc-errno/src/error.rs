//! Error types for manifest loading and registry construction
//!
//! Lookups never fail. These errors only surface from
//! [`RegistryBuilder::build`](crate::RegistryBuilder::build) when a caller
//! supplies its own manifests.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest parsing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// TOML could not be deserialized
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        /// Which manifest failed (e.g. "catalog" or "linux")
        source_name: String,
        /// Deserializer message
        message: String,
    },

    /// Platform manifest declares a different platform than requested
    #[error("platform manifest mismatch: expected {expected}, got {found}")]
    PlatformMismatch {
        /// The platform the manifest was loaded for
        expected: String,
        /// The platform named in the manifest metadata
        found: String,
    },

    /// Platform manifest assigns a code to a symbol missing from the catalogue
    #[error("{platform} manifest defines unknown symbol {symbol}")]
    UnknownSymbol {
        /// Platform name from the manifest metadata
        platform: String,
        /// Symbol not present in the catalogue
        symbol: String,
    },

    /// Catalogue lists the same symbol twice
    #[error("duplicate symbol {0} in catalogue")]
    DuplicateSymbol(String),

    /// Catalogue contains a symbol with an empty name
    #[error("catalogue contains a symbol with an empty name")]
    EmptySymbolName,

    /// Code 0 is reserved for the "no error" sentinel
    #[error("symbol {symbol} uses reserved code 0")]
    ReservedCode {
        /// Offending symbol
        symbol: String,
    },
}

/// Registry construction errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A manifest failed to parse or validate
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A manifest file could not be read
    #[error("failed to read manifest {path}: {source}")]
    Io {
        /// The manifest file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for registry construction
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_display() {
        let err = ManifestError::UnknownSymbol {
            platform: "linux".into(),
            symbol: "EFOO".into(),
        };
        assert_eq!(err.to_string(), "linux manifest defines unknown symbol EFOO");

        let err = ManifestError::ReservedCode {
            symbol: "EPERM".into(),
        };
        assert_eq!(err.to_string(), "symbol EPERM uses reserved code 0");
    }

    #[test]
    fn test_registry_error_from_manifest() {
        let err: RegistryError = ManifestError::DuplicateSymbol("EIO".into()).into();
        assert!(matches!(err, RegistryError::Manifest(_)));
        assert_eq!(
            err.to_string(),
            "manifest error: duplicate symbol EIO in catalogue"
        );
    }
}
