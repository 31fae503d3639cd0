// Pattern Matching Utilities
// Name matching for archive discovery and dropped model files

use crate::constants::{ARCHIVE_BASE_PREFIX, ARCHIVE_SUFFIXES, MODEL_EXTENSION};

/// Check if `name` ends with `suffix`, ignoring ASCII case
pub fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Check if `name` starts with `prefix`, ignoring ASCII case
fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Check if a dropped path names a model file
///
/// This is a plain suffix test on the whole path, case-sensitive.
pub fn is_model_path(path: &str) -> bool {
    path.ends_with(MODEL_EXTENSION)
}

/// Split pasted text into individual paths
///
/// Terminals deliver dropped files as text: one path per line, or several
/// paths on one line separated by spaces and possibly quoted. `file://`
/// URLs are turned back into local paths.
pub fn parse_dropped_paths(text: &str) -> Vec<String> {
    let mut paths = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for token in split_quoted(line) {
            let token = match token.strip_prefix("file://") {
                Some(url) => local_file_path(url),
                None => token,
            };
            if !token.is_empty() {
                paths.push(token);
            }
        }
    }

    paths
}

/// Turn the rest of a `file://` URL into a local path
///
/// Drops an explicit `localhost` host and decodes `%XX` escapes. Malformed
/// escapes are kept as written.
fn local_file_path(url: &str) -> String {
    let url = url.strip_prefix("localhost").unwrap_or(url);
    let bytes = url.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(byte) = hex_byte(bytes[i + 1], bytes[i + 2]) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    let path = String::from_utf8_lossy(&decoded).into_owned();

    // file:///C:/Models/unit.m3 names a drive path on Windows
    if cfg!(windows) && path.len() > 2 && path.starts_with('/') && path.as_bytes()[2] == b':' {
        return path[1..].to_string();
    }
    path
}

fn hex_byte(high: u8, low: u8) -> Option<u8> {
    let digit = |b: u8| (b as char).to_digit(16);
    Some((digit(high)? * 16 + digit(low)?) as u8)
}

/// Split on unquoted whitespace, honouring quotes and (outside Windows) backslash escapes
fn split_quoted(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') if !cfg!(windows) => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (None, c) => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Recognizes archive directories and the base resources inside them
#[derive(Debug, Clone)]
pub struct ArchiveMatcher {
    suffixes: Vec<String>,
    base_prefix: String,
}

impl ArchiveMatcher {
    /// Create a matcher with custom suffixes and base prefix
    pub fn new(suffixes: Vec<String>, base_prefix: impl Into<String>) -> Self {
        Self {
            suffixes,
            base_prefix: base_prefix.into(),
        }
    }

    /// Check if a directory name marks an archive
    pub fn is_archive(&self, name: &str) -> bool {
        self.suffixes.iter().any(|s| ends_with_ignore_case(name, s))
    }

    /// Check if an archive child is one of its base resources (`base.*`)
    pub fn is_base(&self, name: &str) -> bool {
        starts_with_ignore_case(name, &self.base_prefix)
    }
}

impl Default for ArchiveMatcher {
    fn default() -> Self {
        Self::new(
            ARCHIVE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            ARCHIVE_BASE_PREFIX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_ignores_case() {
        assert!(ends_with_ignore_case("SC2Mod1.SC2Mod", "sc2mod"));
        assert!(ends_with_ignore_case("campaign.SC2Campaign", "sc2campaign"));
        assert!(!ends_with_ignore_case("mod", "sc2mod"));
    }

    #[test]
    fn test_archive_matcher() {
        let matcher = ArchiveMatcher::default();

        assert!(matcher.is_archive("Liberty.SC2Mod"));
        assert!(matcher.is_archive("Core.STORMMOD"));
        assert!(matcher.is_archive("Map.sc2map"));
        assert!(!matcher.is_archive("Textures"));

        assert!(matcher.is_base("base.StarCraftII"));
        assert!(matcher.is_base("Base.SC2Data"));
        assert!(!matcher.is_base("enUS.SC2Data"));
        assert!(!matcher.is_base("base"));
    }

    #[test]
    fn test_model_path_filter() {
        assert!(is_model_path("/models/marine.m3"));
        assert!(!is_model_path("/models/marine.M3"));
        assert!(!is_model_path("/models/marine.dds"));
    }

    #[test]
    fn test_parse_dropped_paths() {
        let pasted = "'/home/me/My Models/unit.m3' /tmp/other.m3\nfile:///srv/third.m3\n\n";
        assert_eq!(
            parse_dropped_paths(pasted),
            vec![
                "/home/me/My Models/unit.m3".to_string(),
                "/tmp/other.m3".to_string(),
                "/srv/third.m3".to_string(),
            ]
        );
        if !cfg!(windows) {
            assert_eq!(parse_dropped_paths("/a/b\\ c.m3"), vec!["/a/b c.m3".to_string()]);
        }
    }

    #[test]
    fn test_file_urls_are_decoded() {
        assert_eq!(
            parse_dropped_paths("file:///My%20Models/unit%2Bv2.m3"),
            vec!["/My Models/unit+v2.m3".to_string()]
        );
        assert_eq!(
            parse_dropped_paths("file://localhost/srv/caf%C3%A9.m3"),
            vec!["/srv/café.m3".to_string()]
        );
        // Broken escapes stay literal
        assert_eq!(
            parse_dropped_paths("file:///tmp/100%.m3 file:///tmp/%zz.m3 file:///tmp/a%2"),
            vec!["/tmp/100%.m3".to_string(), "/tmp/%zz.m3".to_string(), "/tmp/a%2".to_string()]
        );
        // Plain paths are never decoded
        assert_eq!(parse_dropped_paths("/tmp/a%20b.m3"), vec!["/tmp/a%20b.m3".to_string()]);
    }
}
