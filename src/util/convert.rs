//! Path-separator conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target path-separator convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathConvention {
    /// Forward slashes.
    Posix,
    /// Backslashes.
    Win32,
}

impl PathConvention {
    /// The separator character for this convention.
    pub fn separator(self) -> char {
        match self {
            PathConvention::Posix => '/',
            PathConvention::Win32 => '\\',
        }
    }
}

impl fmt::Display for PathConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathConvention::Posix => write!(f, "posix"),
            PathConvention::Win32 => write!(f, "win32"),
        }
    }
}

impl FromStr for PathConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posix" => Ok(PathConvention::Posix),
            "win32" => Ok(PathConvention::Win32),
            other => Err(format!(
                "unknown path convention `{other}` (expected `posix` or `win32`)"
            )),
        }
    }
}

/// Rewrite the separator characters of `path` to `convention`, leaving every
/// other character untouched.
pub fn convert_path(path: &str, convention: PathConvention) -> String {
    match convention {
        PathConvention::Posix => path.replace('\\', "/"),
        PathConvention::Win32 => path.replace('/', "\\"),
    }
}
