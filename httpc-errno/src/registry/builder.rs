//! Registry construction

use std::path::PathBuf;

use crate::entry::Entry;
use crate::error::{RegistryError, Result};
use crate::manifest::{self, loader::check_platform, PlatformManifest};
use crate::platform::Platform;
use crate::table::ErrorTable;

use super::ErrorRegistry;

#[derive(Debug)]
enum PlatformSource {
    Toml(String),
    File(PathBuf),
}

/// Fluent builder for [`ErrorRegistry`]
///
/// Defaults to the embedded catalogue and the manifest of the current build
/// target. Registration order is: sentinel, catalogue symbols defined by the
/// platform manifest, then any extra entries. Each code keeps the first
/// entry registered for it.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    platform: Option<Platform>,
    catalog_toml: Option<String>,
    platform_source: Option<PlatformSource>,
    extra: Vec<Entry>,
}

impl RegistryBuilder {
    /// Create a new registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the platform manifest (defaults to [`Platform::current`])
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Replace the embedded catalogue
    pub fn catalog_toml(mut self, toml_str: impl Into<String>) -> Self {
        self.catalog_toml = Some(toml_str.into());
        self
    }

    /// Replace the embedded platform manifest
    pub fn platform_toml(mut self, toml_str: impl Into<String>) -> Self {
        self.platform_source = Some(PlatformSource::Toml(toml_str.into()));
        self
    }

    /// Read the platform manifest from a file at build time
    pub fn platform_manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.platform_source = Some(PlatformSource::File(path.into()));
        self
    }

    /// Register an additional entry after the platform entries
    pub fn entry(mut self, code: i32, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.extra.push(Entry::new(code, name, message));
        self
    }

    /// Build the registry
    pub fn build(self) -> Result<ErrorRegistry> {
        let platform = self.platform.unwrap_or_else(Platform::current);

        let catalog = match self.catalog_toml {
            Some(toml_str) => manifest::parse_catalog("catalog", &toml_str)?,
            None => manifest::embedded_catalog()?,
        };

        let platform_manifest = match self.platform_source {
            Some(source) => Some(load_platform_source(source, platform)?),
            None => manifest::embedded_platform(platform)?,
        };

        let mut table = ErrorTable::with_sentinel();

        if let Some(platform_manifest) = platform_manifest {
            platform_manifest.validate(&catalog)?;
            for entry in manifest::resolve_entries(&catalog, &platform_manifest) {
                table.insert_if_absent(entry);
            }
        }

        for entry in self.extra {
            table.insert_if_absent(entry);
        }

        tracing::debug!(
            platform = %platform,
            entries = table.len(),
            "built error registry"
        );

        Ok(ErrorRegistry::from_table(platform, table))
    }
}

fn load_platform_source(source: PlatformSource, platform: Platform) -> Result<PlatformManifest> {
    let manifest = match source {
        PlatformSource::Toml(toml_str) => manifest::parse_platform(platform.name(), &toml_str)?,
        PlatformSource::File(path) => {
            let toml_str = std::fs::read_to_string(&path).map_err(|source| RegistryError::Io {
                path: path.clone(),
                source,
            })?;
            manifest::parse_platform(&path.display().to_string(), &toml_str)?
        }
    };

    check_platform(&manifest, platform)?;
    Ok(manifest)
}
