// Path Utilities
// Case-insensitive lookups and reference joining

use std::path::{Component, Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use tracing::debug;

/// Join a forward-slash texture reference onto a base directory
///
/// Empty segments are dropped, so a leading `/` never turns the reference
/// into an absolute path.
pub fn join_reference(base: &Path, reference: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in reference.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

/// Find every existing path that matches `path` when letter case is ignored
///
/// Each letter of every file name component becomes a `[xX]` class, so the
/// glob crate lists directories instead of testing literal names. Matches come
/// back sorted by name within each directory. Unreadable or missing
/// directories contribute no matches.
pub fn glob_insensitive(path: &Path) -> Vec<PathBuf> {
    let Some(pattern) = insensitive_pattern(path) else {
        // Not expressible as a glob pattern; fall back to the exact name
        return if path.exists() {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        };
    };

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    match glob_with(&pattern, options) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            debug!("Invalid glob pattern {}: {}", pattern, e);
            Vec::new()
        }
    }
}

/// Glob pattern for `path` with every letter expanded to both cases
///
/// Returns `None` for paths that are not valid UTF-8.
fn insensitive_pattern(path: &Path) -> Option<String> {
    let mut pattern = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(name) => pattern.push(case_classes(name.to_str()?)),
            other => pattern.push(Pattern::escape(other.as_os_str().to_str()?)),
        }
    }

    pattern.to_str().map(String::from)
}

/// `Rock.dds` -> `[rR][oO][cC][kK].[dD][dD][sS]`
fn case_classes(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 4);
    for c in name.chars() {
        if c.is_ascii_alphabetic() {
            out.push('[');
            out.push(c.to_ascii_lowercase());
            out.push(c.to_ascii_uppercase());
            out.push(']');
        } else {
            out.push_str(&Pattern::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    out
}

/// Get the final path component as a displayable string
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
