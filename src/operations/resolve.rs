// Cross-Directory Resolution
// Looks up texture references in the configured source directories

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::utilities::{glob_insensitive, join_reference};

/// Texture reference -> first matching file, or `None` when no source has it
///
/// Keys keep the order in which references were given.
pub type Resolution = IndexMap<String, Option<PathBuf>>;

/// Resolve every reference against the source directories, in order
///
/// Every reference gets an entry. Missing or unreadable source directories
/// simply never match.
pub fn resolve_textures<R, D>(references: &[R], source_dirs: &[D]) -> Resolution
where
    R: AsRef<str>,
    D: AsRef<Path>,
{
    references
        .iter()
        .map(|reference| {
            let reference = reference.as_ref();
            (reference.to_string(), find_in_sources(reference, source_dirs))
        })
        .collect()
}

/// Find the first source directory providing `reference`
pub fn find_in_sources<D: AsRef<Path>>(reference: &str, source_dirs: &[D]) -> Option<PathBuf> {
    for source in source_dirs {
        let candidate = join_reference(source.as_ref(), reference);
        if let Some(found) = glob_insensitive(&candidate).into_iter().next() {
            debug!("Resolved {} -> {}", reference, found.display());
            return Some(found);
        }
    }

    debug!("Unresolved texture reference {}", reference);
    None
}
