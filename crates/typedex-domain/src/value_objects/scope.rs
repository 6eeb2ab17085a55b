//! Search scopes
//!
//! A search scope is the directory whose modules bound a discovery query.
//! Scopes double as cache keys, so two spellings of the same directory must
//! produce the same [`ScopeKey`]: keys are absolute, lexically normalized,
//! lowercased, and carry no trailing separator.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::constants::SCOPE_KEY_SEPARATOR;
use crate::error::{Error, Result};

/// Normalized cache key of a search scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScopeKey(String);

impl ScopeKey {
    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory searched for modules
#[derive(Debug, Clone)]
pub struct SearchScope {
    root: PathBuf,
    key: ScopeKey,
}

impl SearchScope {
    /// Parse a user supplied scope string
    ///
    /// Empty strings and strings containing NUL are rejected; callers that
    /// accept an optional scope should go through [`SearchScope::or_default`].
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::invalid_argument("search scope cannot be empty"));
        }
        if raw.contains('\0') {
            return Err(Error::invalid_argument(format!(
                "search scope contains a NUL byte: {raw:?}"
            )));
        }
        Self::from_path(raw.trim())
    }

    /// Build a scope from a path, making it absolute against the current directory
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let root = std::path::absolute(path).map_err(|e| {
            Error::io_with_source(
                format!("Failed to resolve search scope {}", path.display()),
                e,
            )
        })?;
        let key = ScopeKey(normalize_key(&root));
        Ok(Self { root, key })
    }

    /// Directory holding the running executable
    pub fn process() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| Error::io_with_source("Failed to locate the running executable", e))?;
        let dir = exe
            .parent()
            .ok_or_else(|| Error::io(format!("Executable {} has no parent", exe.display())))?;
        Self::from_path(dir)
    }

    /// Resolve an optional scope string, falling back to `default` when absent or blank
    pub fn or_default(raw: Option<&str>, default: &SearchScope) -> Result<Self> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Ok(default.clone()),
        }
    }

    /// Directory walked for module files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Normalized cache key
    pub fn key(&self) -> &ScopeKey {
        &self.key
    }
}

impl PartialEq for SearchScope {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for SearchScope {}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.display())
    }
}

/// Lexically normalize a path into a case and separator insensitive key
fn normalize_key(path: &Path) -> String {
    let mut prefix = String::new();
    let mut rooted = false;
    let mut parts: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..".to_string());
                }
            }
            Component::Normal(part) => parts.extend(
                part.to_string_lossy()
                    .split('\\')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            ),
        }
    }

    let separator = SCOPE_KEY_SEPARATOR.to_string();
    let mut key = prefix.replace('\\', &separator);
    if rooted {
        key.push(SCOPE_KEY_SEPARATOR);
    }
    key.push_str(&parts.join(&separator));
    key.to_lowercase()
}
