// Texture Path Extraction
// Greps null-terminated texture paths out of a model file's raw bytes

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::bytes::Regex;
use tracing::debug;

use crate::constants::TEXTURE_PATTERN;
use crate::error::{Error, Result};

/// Pattern for `[\w/]+.dds` followed by a NUL byte, ASCII only, any case
///
/// `TEXTURE_PATTERN` is generated by build.rs with the extension escaped, so
/// it is a fixed string and compiling it cannot fail.
fn texture_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TEXTURE_PATTERN).expect("compiled-in texture pattern"))
}

/// Read a model file and list the texture references embedded in it
///
/// The whole file is read into memory. The file structure is not parsed;
/// any byte run matching the texture pattern counts.
pub fn texture_references(model: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(model).map_err(|e| Error::io(model, e))?;
    let references = extract_texture_references(&bytes);
    debug!(
        "Extracted {} texture references from {} ({} bytes)",
        references.len(),
        model.display(),
        bytes.len()
    );
    Ok(references)
}

/// List the unique texture references found in a byte buffer
///
/// The result is deduplicated; its order carries no meaning.
pub fn extract_texture_references(bytes: &[u8]) -> Vec<String> {
    let unique: BTreeSet<String> = texture_pattern()
        .captures_iter(bytes)
        .filter_map(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .collect();

    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEXTURE_EXTENSION;

    #[test]
    fn test_compiled_pattern() {
        assert!(Regex::new(TEXTURE_PATTERN).is_ok());
        assert_eq!(TEXTURE_PATTERN, r"(?i-u)([\w/]+\.dds)\x00");
    }

    #[test]
    fn test_single_reference() {
        let found = extract_texture_references(b"xx Assets/Textures/rock.dds\x00yy");
        assert_eq!(found, vec!["Assets/Textures/rock.dds".to_string()]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let bytes = b"\x01a/b.dds\x00\x02a/b.dds\x00\xffc/d.DDS\x00";
        let found = extract_texture_references(bytes);
        assert_eq!(found, vec!["a/b.dds".to_string(), "c/d.DDS".to_string()]);
    }

    #[test]
    fn test_requires_null_terminator() {
        assert!(extract_texture_references(b"Assets/rock.dds yy").is_empty());
        assert!(extract_texture_references(b"Assets/rock.ddsx\x00").is_empty());
        assert!(extract_texture_references(b"").is_empty());
    }

    #[test]
    fn test_only_ascii_word_characters() {
        // Dots and non-ASCII bytes split the path; the tail still matches
        let found = extract_texture_references(b"dir.v2/tex.dds\x00\xc3\xa9t\xc3\xa9/x.dds\x00");
        assert_eq!(found, vec!["/x.dds".to_string(), "v2/tex.dds".to_string()]);
    }

    #[test]
    fn test_results_end_with_extension() {
        let bytes = b"m/a.dds\x00junk\x00b_2.Dds\x00c/d/e.dDs\x00\x00\x00";
        let found = extract_texture_references(bytes);
        assert_eq!(found.len(), 3);
        for reference in &found {
            assert!(reference.to_ascii_lowercase().ends_with(TEXTURE_EXTENSION));
            assert!(!reference.contains('\0'));
        }
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("unit.m3");
        fs::write(&model, b"MD34\x00\x00Units/Marine/marine_diff.dds\x00\x10\x00").unwrap();

        assert_eq!(
            texture_references(&model).unwrap(),
            vec!["Units/Marine/marine_diff.dds".to_string()]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = texture_references(&dir.path().join("missing.m3")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
