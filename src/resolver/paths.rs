//! Manifest-relative path resolution.
//!
//! A path string is considered manifest-relative only when it begins with an
//! explicit `./` or `../` marker, in either separator style. Everything else
//! passes through byte-identical: it is either already absolute or
//! intentionally relative to some convention outside this resolver's
//! knowledge.

use std::path::{Component, Path, PathBuf};

/// Check whether a path string begins with an explicit relative marker
/// (`./`, `.\`, `../`, or `..\`), independent of the host OS.
pub fn has_relative_marker(value: &str) -> bool {
    let bytes = value.as_bytes();
    let rest = if bytes.starts_with(b"..") {
        &bytes[2..]
    } else if bytes.starts_with(b".") {
        &bytes[1..]
    } else {
        return false;
    };
    matches!(rest.first(), Some(b'/') | Some(b'\\'))
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. No filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut out = if let Some(component @ Component::Prefix(..)) = components.peek().copied() {
        components.next();
        PathBuf::from(component.as_os_str())
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) => unreachable!(),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Resolve a manifest path string against `basedir`.
///
/// Marker-prefixed values are joined to `basedir` component by component
/// (accepting either separator style) and normalized; all other values are
/// returned unchanged. Pure; no I/O.
pub fn resolve_path(basedir: &Path, value: &str) -> String {
    if !has_relative_marker(value) {
        return value.to_string();
    }

    let mut joined = basedir.to_path_buf();
    for part in value.split(['/', '\\']) {
        if !part.is_empty() {
            joined.push(part);
        }
    }
    normalize(&joined).to_string_lossy().into_owned()
}
