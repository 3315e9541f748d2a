//! Embedded manifest loading
//!
//! The catalogue and every platform manifest are compiled into the crate so
//! the process-wide registry never touches the filesystem.

use crate::error::ManifestError;
use crate::platform::Platform;

use super::types::{Catalog, PlatformManifest};

macro_rules! embed_platform_manifest {
    ($platform:expr, $path:expr) => {
        ($platform, include_str!($path))
    };
}

/// Embedded catalogue source
pub const CATALOG_TOML: &str = include_str!("../../configs/errno/catalog.toml");

const PLATFORM_MANIFESTS: [(Platform, &str); 4] = [
    embed_platform_manifest!(Platform::Linux, "../../configs/errno/platforms/linux.toml"),
    embed_platform_manifest!(Platform::Apple, "../../configs/errno/platforms/apple.toml"),
    embed_platform_manifest!(Platform::FreeBsd, "../../configs/errno/platforms/freebsd.toml"),
    embed_platform_manifest!(Platform::Windows, "../../configs/errno/platforms/windows.toml"),
];

/// Parse and validate a catalogue
pub fn parse_catalog(source_name: &str, toml_str: &str) -> Result<Catalog, ManifestError> {
    let catalog: Catalog = toml::from_str(toml_str).map_err(|e| ManifestError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;
    catalog.validate()?;
    Ok(catalog)
}

/// Parse a platform manifest
///
/// Symbols are checked later, against whichever catalogue the manifest is
/// joined with.
pub fn parse_platform(source_name: &str, toml_str: &str) -> Result<PlatformManifest, ManifestError> {
    toml::from_str(toml_str).map_err(|e| ManifestError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Load the embedded catalogue
pub fn embedded_catalog() -> Result<Catalog, ManifestError> {
    parse_catalog("catalog", CATALOG_TOML)
}

/// Raw embedded manifest for `platform`, `None` for [`Platform::Other`]
pub fn embedded_platform_toml(platform: Platform) -> Option<&'static str> {
    PLATFORM_MANIFESTS
        .iter()
        .find(|(candidate, _)| *candidate == platform)
        .map(|(_, toml_str)| *toml_str)
}

/// Load the embedded manifest for `platform`
pub fn embedded_platform(platform: Platform) -> Result<Option<PlatformManifest>, ManifestError> {
    let Some(toml_str) = embedded_platform_toml(platform) else {
        return Ok(None);
    };

    let manifest = parse_platform(platform.name(), toml_str)?;
    check_platform(&manifest, platform)?;
    Ok(Some(manifest))
}

/// Ensure manifest metadata names `expected`
pub(crate) fn check_platform(
    manifest: &PlatformManifest,
    expected: Platform,
) -> Result<(), ManifestError> {
    if manifest.metadata.platform != expected.name() {
        return Err(ManifestError::PlatformMismatch {
            expected: expected.name().to_string(),
            found: manifest.metadata.platform.clone(),
        });
    }
    Ok(())
}
