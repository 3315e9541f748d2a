//! Build target detection
//!
//! Each platform selects one embedded code manifest. The choice is made from
//! `target_os` at compile time, so the table only ever contains symbols the
//! target actually defines.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Operating-system family whose errno numbering the registry uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux and Android on architectures using the asm-generic numbering.
    ///
    /// MIPS, SPARC, Alpha and PowerPC renumber part of errno and resolve to
    /// [`Platform::Other`] instead.
    Linux,
    /// macOS, iOS and other Darwin targets
    Apple,
    /// FreeBSD and DragonFly BSD
    FreeBsd,
    /// Windows (Microsoft CRT)
    Windows,
    /// Any target without a code manifest; only the sentinel is registered
    Other,
}

/// Unrecognized platform name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct ParsePlatformError(pub String);

impl Platform {
    /// All platforms, in declaration order
    pub const ALL: [Platform; 5] = [
        Platform::Linux,
        Platform::Apple,
        Platform::FreeBsd,
        Platform::Windows,
        Platform::Other,
    ];

    /// Platform of the current build target
    pub const fn current() -> Self {
        if cfg!(all(
            any(target_os = "linux", target_os = "android"),
            not(any(
                target_arch = "mips",
                target_arch = "mips64",
                target_arch = "sparc",
                target_arch = "sparc64",
                target_arch = "alpha",
                target_arch = "powerpc",
                target_arch = "powerpc64"
            ))
        )) {
            Platform::Linux
        } else if cfg!(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "visionos"
        )) {
            Platform::Apple
        } else if cfg!(any(target_os = "freebsd", target_os = "dragonfly")) {
            Platform::FreeBsd
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Name used in manifest metadata
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Apple => "apple",
            Platform::FreeBsd => "freebsd",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" | "android" => Ok(Platform::Linux),
            "apple" | "macos" | "darwin" | "ios" => Ok(Platform::Apple),
            "freebsd" | "dragonfly" => Ok(Platform::FreeBsd),
            "windows" | "win32" => Ok(Platform::Windows),
            "other" => Ok(Platform::Other),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!("macOS".parse::<Platform>().unwrap(), Platform::Apple);
        assert_eq!("darwin".parse::<Platform>().unwrap(), Platform::Apple);
        assert_eq!("FreeBSD".parse::<Platform>().unwrap(), Platform::FreeBsd);
        assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("other".parse::<Platform>().unwrap(), Platform::Other);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "plan9".parse::<Platform>().unwrap_err();
        assert_eq!(err, ParsePlatformError("plan9".into()));
        assert_eq!(err.to_string(), "unknown platform: plan9");
    }

    #[test]
    fn test_name_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(platform.name().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    #[cfg(all(
        target_os = "linux",
        any(
            target_arch = "x86_64",
            target_arch = "x86",
            target_arch = "aarch64",
            target_arch = "arm",
            target_arch = "riscv64"
        )
    ))]
    fn test_current_linux() {
        assert_eq!(Platform::current(), Platform::Linux);
    }

    #[test]
    #[cfg(all(
        target_os = "linux",
        any(
            target_arch = "mips",
            target_arch = "mips64",
            target_arch = "sparc",
            target_arch = "sparc64",
            target_arch = "alpha",
            target_arch = "powerpc",
            target_arch = "powerpc64"
        )
    ))]
    fn test_current_linux_renumbered_arch() {
        assert_eq!(Platform::current(), Platform::Other);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_current_macos() {
        assert_eq!(Platform::current(), Platform::Apple);
    }

    #[test]
    #[cfg(target_os = "windows")]
    fn test_current_windows() {
        assert_eq!(Platform::current(), Platform::Windows);
    }
}
