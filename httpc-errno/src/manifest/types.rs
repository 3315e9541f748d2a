//! Manifest schema and validation

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::error::ManifestError;

/// Ordered catalogue of candidate error symbols
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    #[serde(default)]
    pub symbols: Vec<SymbolSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One candidate symbol and its description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolSpec {
    pub name: String,
    pub message: String,
}

/// Symbol-to-code map for one platform
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformManifest {
    pub metadata: PlatformMetadata,
    #[serde(default)]
    pub codes: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformMetadata {
    pub platform: String,
}

impl Catalog {
    /// Validate catalogue
    pub(crate) fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if symbol.name.is_empty() {
                return Err(ManifestError::EmptySymbolName);
            }
            if !seen.insert(symbol.name.as_str()) {
                return Err(ManifestError::DuplicateSymbol(symbol.name.clone()));
            }
        }
        Ok(())
    }

    /// Whether the catalogue lists `name`
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|symbol| symbol.name == name)
    }
}

impl PlatformManifest {
    /// Validate against the catalogue it will be joined with
    pub(crate) fn validate(&self, catalog: &Catalog) -> Result<(), ManifestError> {
        for (symbol, &code) in &self.codes {
            if !catalog.contains(symbol) {
                return Err(ManifestError::UnknownSymbol {
                    platform: self.metadata.platform.clone(),
                    symbol: symbol.clone(),
                });
            }
            if code == 0 {
                return Err(ManifestError::ReservedCode {
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(())
    }
}
