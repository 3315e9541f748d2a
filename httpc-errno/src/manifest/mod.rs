//! Error manifests
//!
//! Table population is data-driven. A single catalogue lists every candidate
//! symbol with its message, in registration order. Each platform manifest
//! maps the symbols that platform defines to their integer codes. Joining
//! the two yields the entries for one target.

pub mod loader;
pub mod types;

pub use loader::{
    embedded_catalog, embedded_platform, embedded_platform_toml, parse_catalog,
    parse_platform, CATALOG_TOML,
};
pub use types::{Catalog, CatalogMetadata, PlatformManifest, PlatformMetadata, SymbolSpec};

use crate::entry::Entry;

/// Entries for every catalogue symbol the platform defines, in catalogue order
pub fn resolve_entries(catalog: &Catalog, platform: &PlatformManifest) -> Vec<Entry> {
    catalog
        .symbols
        .iter()
        .filter_map(|symbol| {
            platform
                .codes
                .get(&symbol.name)
                .map(|&code| Entry::new(code, symbol.name.as_str(), symbol.message.as_str()))
        })
        .collect()
}
