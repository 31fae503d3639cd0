// Application Configuration
// Persisted settings: the ordered list of texture source directories

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{CONFIG_FILE_NAME, HOME_CONFIG_FILE_NAME, LEGACY_CONFIG_EXTENSION};
use crate::error::{Error, Result};

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directories searched, in order, for referenced textures
    #[serde(default)]
    pub source_dirs: Vec<String>,
}

impl AppConfig {
    /// Replace the source directories from dialog text, one per line
    pub fn set_source_dirs_from_text(&mut self, text: &str) {
        self.source_dirs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
    }

    /// Source directories as dialog text, one per line
    pub fn source_dirs_text(&self) -> String {
        self.source_dirs.join("\n")
    }
}

/// Locates, loads and saves the configuration file
///
/// Candidates are tried in order; the first existing one is used. When none
/// exists the first candidate becomes the place to save to. A TOML file left
/// by an earlier release is read, and the next save writes YAML beside it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    candidates: Vec<PathBuf>,
    location: Option<PathBuf>,
}

impl ConfigStore {
    /// Store searching `./config.yaml`, then `~/.m3helper.yaml`, each followed
    /// by its `.toml` predecessor
    pub fn new() -> Self {
        Self::with_candidates(Self::default_search_path())
    }

    /// Store searching only the given files
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            location: None,
        }
    }

    /// Store bound to one explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::with_candidates(vec![path.into()])
    }

    /// The default search path
    pub fn default_search_path() -> Vec<PathBuf> {
        let mut names = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            names.push(home.join(HOME_CONFIG_FILE_NAME));
        }

        names
            .into_iter()
            .flat_map(|path| {
                let legacy = path.with_extension(LEGACY_CONFIG_EXTENSION);
                [path, legacy]
            })
            .collect()
    }

    /// Load the configuration, defaulting when no candidate exists
    ///
    /// Never writes to disk.
    pub fn load(&mut self) -> Result<AppConfig> {
        for candidate in &self.candidates {
            if candidate.is_file() {
                if is_legacy(candidate) {
                    let config = Self::read_legacy(candidate)?;
                    let migrated = yaml_sibling(candidate);
                    info!(
                        "Loaded legacy config {}; saving will write {}",
                        candidate.display(),
                        migrated.display()
                    );
                    self.location = Some(migrated);
                    return Ok(config);
                }

                let config = Self::read(candidate)?;
                debug!("Loaded config from {}", candidate.display());
                self.location = Some(candidate.clone());
                return Ok(config);
            }
        }

        debug!("Config file not found, using defaults");
        self.location = self.candidates.first().cloned();
        Ok(AppConfig::default())
    }

    /// Save the configuration to the loaded (or first candidate) location
    pub fn save(&self, config: &AppConfig) -> Result<PathBuf> {
        let path = self
            .location()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let content = serde_yaml::to_string(config).map_err(Error::ConfigSerialize)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::ConfigWrite {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&path, content).map_err(|source| Error::ConfigWrite {
            path: path.clone(),
            source,
        })?;

        debug!("Saved config to {}", path.display());
        Ok(path)
    }

    /// Where the configuration was loaded from or will be saved to
    pub fn location(&self) -> Option<&Path> {
        self.location
            .as_deref()
            .or_else(|| self.candidates.first().map(PathBuf::as_path))
    }

    fn read(path: &Path) -> Result<AppConfig> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid, empty configuration
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_legacy(path: &Path) -> Result<AppConfig> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::LegacyConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_legacy(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LEGACY_CONFIG_EXTENSION))
}

/// The YAML file a legacy config is migrated to on save
fn yaml_sibling(path: &Path) -> PathBuf {
    let extension = Path::new(CONFIG_FILE_NAME)
        .extension()
        .unwrap_or_default();
    path.with_extension(extension)
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_dirs_from_text() {
        let mut config = AppConfig::default();
        config.set_source_dirs_from_text("/a\n\n  /b  \n");
        assert_eq!(config.source_dirs, vec!["/a".to_string(), "/b".to_string()]);
        assert_eq!(config.source_dirs_text(), "/a\n/b");
    }

    #[test]
    fn test_missing_file_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("config.yaml");
        let mut store = ConfigStore::with_candidates(vec![first.clone(), dir.path().join("home.yaml")]);

        assert_eq!(store.load().unwrap(), AppConfig::default());
        assert_eq!(store.location(), Some(first.as_path()));
        assert!(!first.exists());
    }

    #[test]
    fn test_second_candidate_is_used_and_saved_back() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home.yaml");
        fs::write(&home, "source_dirs:\n  - /mods/Core.SC2Mod\n").unwrap();
        let mut store = ConfigStore::with_candidates(vec![dir.path().join("config.yaml"), home.clone()]);

        let mut config = store.load().unwrap();
        assert_eq!(config.source_dirs, vec!["/mods/Core.SC2Mod".to_string()]);

        config.source_dirs.push("/mods/Liberty.SC2Mod".to_string());
        assert_eq!(store.save(&config).unwrap(), home);

        let mut reloaded = ConfigStore::at(&home);
        assert_eq!(reloaded.load().unwrap(), config);
    }

    #[test]
    fn test_unknown_keys_and_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        fs::write(&path, "").unwrap();
        assert_eq!(ConfigStore::at(&path).load().unwrap(), AppConfig::default());

        fs::write(&path, "theme: dark\n").unwrap();
        assert!(ConfigStore::at(&path).load().unwrap().source_dirs.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "source_dirs: [unclosed\n").unwrap();

        let err = ConfigStore::at(&path).load().unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_legacy_toml_is_read_and_saved_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("config.toml");
        fs::write(&legacy, "source_dirs = [\"/mods/Core.SC2Mod\", \"/mods/Base.SC2Data\"]\n").unwrap();
        let yaml = dir.path().join("config.yaml");
        let mut store = ConfigStore::with_candidates(vec![yaml.clone(), legacy.clone()]);

        let config = store.load().unwrap();
        assert_eq!(
            config.source_dirs,
            vec!["/mods/Core.SC2Mod".to_string(), "/mods/Base.SC2Data".to_string()]
        );
        assert_eq!(store.location(), Some(yaml.as_path()));

        assert_eq!(store.save(&config).unwrap(), yaml);
        assert!(legacy.exists());

        // The YAML file now wins over the TOML one
        let mut reloaded = ConfigStore::with_candidates(vec![yaml, legacy]);
        assert_eq!(reloaded.load().unwrap(), config);
    }

    #[test]
    fn test_invalid_legacy_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join(".m3helper.toml");
        fs::write(&legacy, "source_dirs = [\n").unwrap();

        let err = ConfigStore::at(&legacy).load().unwrap_err();
        assert!(matches!(err, Error::LegacyConfigParse { .. }));
    }

    #[test]
    fn test_search_path_pairs_yaml_with_toml() {
        let candidates = ConfigStore::default_search_path();
        assert_eq!(candidates[0], PathBuf::from("config.yaml"));
        assert_eq!(candidates[1], PathBuf::from("config.toml"));
        if candidates.len() == 4 {
            assert!(candidates[2].ends_with(".m3helper.yaml"));
            assert!(candidates[3].ends_with(".m3helper.toml"));
        }
    }
}
