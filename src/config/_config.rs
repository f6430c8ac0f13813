//! Settings for the command-line tool.
//!
//! Loaded in order of precedence:
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (`VIM2EMACS_VIM`, `VIM2EMACS_OUTPUT_DIR`)
//! 3. Config file (`~/.config/vim2emacs/config.toml`)
//! 4. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const ENV_VIM: &str = "VIM2EMACS_VIM";
const ENV_OUTPUT_DIR: &str = "VIM2EMACS_OUTPUT_DIR";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    vim: Option<String>,
    output_dir: Option<PathBuf>,
    colors_dirs: Option<Vec<PathBuf>>,
    source_url: Option<String>,
    logging: FileLogging,
    groups: HashMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileLogging {
    level: Option<String>,
    dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Executable used to capture `:highlight` output
    pub vim: String,
    /// Where generated `*-theme.el` files are written
    pub output_dir: PathBuf,
    /// Directories searched for `colors/*.vim` schemes
    pub colors_dirs: Vec<PathBuf>,
    /// Link written into the header of generated themes
    pub source_url: String,
    pub log_level: String,
    pub log_dir: PathBuf,
    /// Extra group → face mappings layered over the built-in table
    pub groups: HashMap<String, Vec<String>>,
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// The package repository when set, otherwise its crates.io page.
fn default_source_url() -> String {
    let repository = env!("CARGO_PKG_REPOSITORY");
    if repository.is_empty() {
        format!("https://crates.io/crates/{}", env!("CARGO_PKG_NAME"))
    } else {
        repository.to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        let home = home();
        Self {
            vim: "vim".to_string(),
            output_dir: home.join(".emacs.d").join("themes"),
            colors_dirs: vec![
                home.join(".vim").join("colors"),
                home.join(".config").join("nvim").join("colors"),
            ],
            source_url: default_source_url(),
            log_level: "info".to_string(),
            log_dir: dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("vim2emacs"),
            groups: HashMap::new(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vim2emacs").join("config.toml"))
    }

    /// Loads `path`, or the default config path when `None`. A missing
    /// file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::config_path(),
        };

        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(vim) = file.vim {
            config.vim = vim;
        }
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        if let Some(dirs) = file.colors_dirs {
            config.colors_dirs = dirs;
        }
        if let Some(url) = file.source_url {
            config.source_url = url;
        }
        if let Some(level) = file.logging.level {
            config.log_level = level;
        }
        if let Some(dir) = file.logging.dir {
            config.log_dir = dir;
        }
        config.groups = file.groups;

        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(vim) = var(ENV_VIM).filter(|v| !v.is_empty()) {
            self.vim = vim;
        }
        if let Some(dir) = var(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
    }
}
