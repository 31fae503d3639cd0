// Archive Discovery
// Finds package directories (and their base resources) below a root directory

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::error::{Error, Result};
use crate::utilities::ArchiveMatcher;

type EntryFilter = fn(&DirEntry) -> bool;

/// Find archive directories below `root` using the compiled-in suffixes
pub fn find_archives(root: impl AsRef<Path>) -> ArchiveWalker {
    find_archives_with(root, ArchiveMatcher::default())
}

/// Find archive directories below `root` using a custom matcher
pub fn find_archives_with(root: impl AsRef<Path>, matcher: ArchiveMatcher) -> ArchiveWalker {
    ArchiveWalker::new(root.as_ref(), matcher)
}

/// Lazy depth-first walk yielding archive directories
///
/// Every archive is followed by its immediate `base.*` child directories.
/// The walk never descends into an archive. Symlinked directories are
/// followed; a symlink cycle surfaces as an error item.
pub struct ArchiveWalker {
    walker: Option<FilterEntry<walkdir::IntoIter, EntryFilter>>,
    matcher: ArchiveMatcher,
    pending: VecDeque<PathBuf>,
}

impl ArchiveWalker {
    fn new(root: &Path, matcher: ArchiveMatcher) -> Self {
        // Anything but a directory yields nothing
        let walker = if root.is_dir() {
            let filter: EntryFilter = |e| e.depth() == 0 || !is_hidden(e);
            Some(
                WalkDir::new(root)
                    .min_depth(1)
                    .follow_links(true)
                    .into_iter()
                    .filter_entry(filter),
            )
        } else {
            debug!("Archive root is not a directory: {}", root.display());
            None
        };

        Self {
            walker,
            matcher,
            pending: VecDeque::new(),
        }
    }

    /// Run the walk to completion, stopping at the first error
    pub fn collect_all(self) -> Result<Vec<PathBuf>> {
        self.collect()
    }
}

impl Iterator for ArchiveWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(path) = self.pending.pop_front() {
            return Some(Ok(path));
        }

        let walker = self.walker.as_mut()?;

        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(e) if is_dangling_link(&e) => {
                    debug!("Skipping dangling symlink: {}", e);
                    continue;
                }
                Err(e) => return Some(Err(Error::from(e))),
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.matcher.is_archive(&name) {
                continue;
            }

            walker.skip_current_dir();

            match base_resources(entry.path(), &self.matcher) {
                Ok(children) => self.pending.extend(children),
                Err(e) => return Some(Err(e)),
            }

            debug!("Found archive {}", entry.path().display());
            return Some(Ok(entry.into_path()));
        }
    }
}

/// Immediate child directories of an archive named `base.*`
fn base_resources(archive: &Path, matcher: &ArchiveMatcher) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(archive).map_err(|e| Error::io(archive, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(archive, e))?;
        let path = entry.path();
        let name = entry.file_name();
        if matcher.is_base(&name.to_string_lossy()) && path.is_dir() {
            children.push(path);
        }
    }

    Ok(children)
}

/// A followed symlink whose target is gone is a non-directory, not a failure
fn is_dangling_link(error: &walkdir::Error) -> bool {
    if error.loop_ancestor().is_some() || error.io_error().is_none() {
        return false;
    }
    error.path().is_some_and(|path| {
        fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
            && fs::metadata(path).is_err()
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
