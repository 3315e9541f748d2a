//! A single row of the error table

use std::fmt;

/// Symbolic name and description registered for one error code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    code: i32,
    name: String,
    message: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(code: i32, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            message: message.into(),
        }
    }

    /// The "no error" entry for code 0
    pub fn sentinel() -> Self {
        Self::new(0, "", "")
    }

    /// Platform error code
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Symbolic name (e.g. `ENOENT`), empty for the sentinel
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, empty for the sentinel
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is the reserved code-0 entry
    pub fn is_sentinel(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return write!(f, "0");
        }
        write!(f, "{} ({}): {}", self.name, self.code, self.message)
    }
}
