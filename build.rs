// Build script - reads src/defaults.yaml at compile time and generates constants
// This allows changing the magic names during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if defaults.yaml changes
    println!("cargo:rerun-if-changed=src/defaults.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_defaults.rs");

    // Try to read defaults.yaml from src/, fall back to hardcoded defaults if not found
    let defaults = if Path::new("src/defaults.yaml").exists() {
        let content = fs::read_to_string("src/defaults.yaml")
            .expect("Failed to read src/defaults.yaml");
        parse_defaults(&content)
    } else {
        CompiledDefaults::default()
    };

    let generated = format!(
        r#"// Auto-generated from defaults.yaml at compile time
// Do not edit - modify defaults.yaml and rebuild instead

pub const ARCHIVE_SUFFIXES: &[&str] = &[
{suffixes}
];
pub const ARCHIVE_BASE_PREFIX: &str = "{base_prefix}";

pub const TEXTURE_EXTENSION: &str = "{texture_extension}";
pub const TEXTURE_PATTERN: &str = r"(?i-u)([\w/]+{texture_extension_escaped})\x00";
pub const MODEL_EXTENSION: &str = "{model_extension}";

pub const CONFIG_FILE_NAME: &str = "{config_file_name}";
pub const HOME_CONFIG_FILE_NAME: &str = "{home_config_file_name}";
pub const LEGACY_CONFIG_EXTENSION: &str = "{legacy_config_extension}";

pub const MAX_LOG_LINES: usize = {max_log_lines};
pub const LOG_FILE_NAME: &str = "{log_file_name}";
"#,
        suffixes = defaults
            .archive_suffixes
            .iter()
            .map(|s| format!("    \"{}\",", s))
            .collect::<Vec<_>>()
            .join("\n"),
        base_prefix = defaults.base_prefix,
        texture_extension = defaults.texture_extension,
        texture_extension_escaped = regex_escape(&defaults.texture_extension),
        model_extension = defaults.model_extension,
        config_file_name = defaults.config_file_name,
        home_config_file_name = defaults.home_config_file_name,
        legacy_config_extension = defaults.legacy_config_extension,
        max_log_lines = defaults.max_log_lines,
        log_file_name = defaults.log_file_name,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled defaults");
}

struct CompiledDefaults {
    archive_suffixes: Vec<String>,
    base_prefix: String,
    texture_extension: String,
    model_extension: String,
    config_file_name: String,
    home_config_file_name: String,
    legacy_config_extension: String,
    max_log_lines: usize,
    log_file_name: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            archive_suffixes: vec![
                "sc2mod".to_string(),
                "sc2map".to_string(),
                "sc2campaign".to_string(),
                "stormmod".to_string(),
            ],
            base_prefix: "base.".to_string(),
            texture_extension: ".dds".to_string(),
            model_extension: "m3".to_string(),
            config_file_name: "config.yaml".to_string(),
            home_config_file_name: ".m3helper.yaml".to_string(),
            legacy_config_extension: "toml".to_string(),
            max_log_lines: 1000,
            log_file_name: "m3helper.log".to_string(),
        }
    }
}

#[derive(PartialEq)]
enum Section {
    None,
    Archives,
    Textures,
    Models,
    Config,
    Log,
}

fn parse_defaults(content: &str) -> CompiledDefaults {
    let mut defaults = CompiledDefaults::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::None;
    let mut in_suffixes = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Unindented keys open a new section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_suffixes = false;
            section = match trimmed.trim_end_matches(':') {
                "archives" => Section::Archives,
                "textures" => Section::Textures,
                "models" => Section::Models,
                "config" => Section::Config,
                "log" => Section::Log,
                _ => Section::None,
            };
            continue;
        }

        if section == Section::Archives && trimmed == "suffixes:" {
            in_suffixes = true;
            defaults.archive_suffixes.clear(); // Start fresh when we see the list
            continue;
        }

        if in_suffixes {
            if let Some(item) = trimmed.strip_prefix("- ") {
                defaults.archive_suffixes.push(unquote(item).to_lowercase());
                continue;
            }
            in_suffixes = false;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match (&section, key) {
                (Section::Archives, "base_prefix") => defaults.base_prefix = value.to_string(),
                (Section::Textures, "extension") => defaults.texture_extension = value.to_string(),
                (Section::Models, "extension") => defaults.model_extension = value.to_string(),
                (Section::Config, "file_name") => defaults.config_file_name = value.to_string(),
                (Section::Config, "home_file_name") => {
                    defaults.home_config_file_name = value.to_string()
                }
                (Section::Config, "legacy_extension") => {
                    defaults.legacy_config_extension = value.to_string()
                }
                (Section::Log, "max_lines") => {
                    defaults.max_log_lines = value.parse().unwrap_or(1000)
                }
                (Section::Log, "file_name") => defaults.log_file_name = value.to_string(),
                _ => {}
            }
        }
    }

    defaults
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, unquote(value)))
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}

// Backslash every regex metacharacter so the extension matches literally
fn regex_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
