//! Platform error-code registry for libhttpclient
//!
//! Translates a native integer error code (an `errno` value reported by a
//! failed system call) into its symbolic name and a human-readable
//! description. The HTTP client uses these strings when building its own
//! error values and log lines.
//!
//! # Table population
//!
//! The table is built from two embedded manifests:
//! - an ordered catalogue of candidate symbols with their messages
//! - a per-target map from symbol to code, chosen from `target_os`
//!
//! Only symbols the target defines are registered. When two symbols share a
//! code, the one listed first in the catalogue keeps it (`EWOULDBLOCK` over
//! `EAGAIN`, `EDEADLK` over `EDEADLOCK`). Code `0` is always registered with
//! an empty name and message.
//!
//! # Lookups never fail
//!
//! Unknown codes fall back to the decimal code for the name and to
//! `"Unknown error (code N)"` for the message.
//!
//! # Example
//!
//! ```rust
//! use httpc_errno::{message_of, name_of, ErrorRegistry, Platform};
//!
//! // Process-wide registry for the current target
//! assert_eq!(name_of(999999), "999999");
//! assert_eq!(message_of(999999), "Unknown error (code 999999)");
//! assert_eq!(message_of(0), "");
//!
//! // A registry for a specific platform
//! let linux = ErrorRegistry::for_platform(Platform::Linux).unwrap();
//! assert_eq!(linux.name_of(2), "ENOENT");
//! assert_eq!(linux.message_of(2), "No such file or directory");
//! ```

pub mod entry;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod registry;
pub mod table;

pub use entry::Entry;
pub use error::{ManifestError, RegistryError, Result};
pub use platform::{ParsePlatformError, Platform};
pub use registry::{describe, init, message_of, name_of, registry, ErrorRegistry, RegistryBuilder};
pub use table::ErrorTable;
