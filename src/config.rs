/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub rules: RulesConfig,
    /// Default level file, used when no path is given on the command line.
    pub level_path: PathBuf,
}

#[derive(Clone, Copy, Debug)]
pub struct RulesConfig {
    /// Double the grid automatically when the player nears an edge.
    pub auto_grow: bool,
    /// Distance (in cells) from an edge that counts as "near".
    pub grow_margin: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            auto_grow: default_auto_grow(),
            grow_margin: default_grow_margin(),
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    rules: TomlRules,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlRules {
    #[serde(default = "default_auto_grow")]
    auto_grow: bool,
    #[serde(default = "default_grow_margin")]
    grow_margin: usize,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_level_path")]
    level: String,
}

// ── Defaults ──

fn default_auto_grow() -> bool { true }
fn default_grow_margin() -> usize { 1 }
fn default_level_path() -> String { "levels/crypt.txt".into() }

impl Default for TomlRules {
    fn default() -> Self {
        TomlRules {
            auto_grow: default_auto_grow(),
            grow_margin: default_grow_margin(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            level: default_level_path(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);

        // Resolve the level path against the search dirs unless absolute
        let level_str = &toml_cfg.general.level;
        let level_path = if PathBuf::from(level_str).is_absolute() {
            PathBuf::from(level_str)
        } else {
            search_dirs
                .iter()
                .map(|d| d.join(level_str))
                .find(|p| p.is_file())
                .unwrap_or_else(|| PathBuf::from(level_str))
        };

        GameConfig {
            rules: RulesConfig {
                auto_grow: toml_cfg.rules.auto_grow,
                grow_margin: toml_cfg.rules.grow_margin,
            },
            level_path,
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable (resolve symlinks)
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_defaults_fill_missing_sections() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert!(cfg.rules.auto_grow);
        assert_eq!(cfg.rules.grow_margin, 1);
        assert_eq!(cfg.general.level, "levels/crypt.txt");
    }

    #[test]
    fn schema_partial_override() {
        let cfg: TomlConfig = toml::from_str("[rules]\nauto_grow = false\n").unwrap();
        assert!(!cfg.rules.auto_grow);
        assert_eq!(cfg.rules.grow_margin, 1);
    }
}
