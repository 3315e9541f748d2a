//! Process-wide registry
//!
//! Built once from the embedded manifests for the current target, on first
//! use. `OnceLock` makes concurrent first callers wait for a single build,
//! so no thread can observe a partially populated table.

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::platform::Platform;

use super::ErrorRegistry;

static REGISTRY: OnceLock<ErrorRegistry> = OnceLock::new();

/// The process-wide registry
pub fn registry() -> &'static ErrorRegistry {
    REGISTRY.get_or_init(build_process_registry)
}

/// Build the process-wide registry now instead of on first lookup.
///
/// Calling this more than once is harmless; later calls return the
/// registry built by the first.
pub fn init() -> &'static ErrorRegistry {
    registry()
}

fn build_process_registry() -> ErrorRegistry {
    let platform = Platform::current();
    match ErrorRegistry::for_platform(platform) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(
                platform = %platform,
                error = %e,
                "failed to load embedded error manifests, only the sentinel is registered"
            );
            ErrorRegistry::sentinel_only(platform)
        }
    }
}

/// Symbolic name for `code` from the process-wide registry
pub fn name_of(code: i32) -> Cow<'static, str> {
    registry().name_of(code)
}

/// Description for `code` from the process-wide registry
pub fn message_of(code: i32) -> Cow<'static, str> {
    registry().message_of(code)
}

/// Alias of [`message_of`], for call sites that read better as "describe"
pub fn describe(code: i32) -> Cow<'static, str> {
    registry().describe(code)
}
