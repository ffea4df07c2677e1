use std::fs;
use std::path::{Path, PathBuf};

use langcss::Config;
use serde::Deserialize;

/// Source directory used when neither the command line nor the config file names one.
pub const DEFAULT_SOURCE_DIR: &str = "./localize";

/// Destination directory used when neither the command line nor the config file names one.
pub const DEFAULT_DEST_DIR: &str = "./docs/localize";

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub skip_lines: Option<usize>,
    pub default_language: Option<String>,
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| format!("Invalid config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| format!("{} ({})", e, path.display()))
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub skip_lines: Option<usize>,
    pub default_language: Option<String>,
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

/// Fully resolved options of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Merges command line values over config file values over built-in defaults.
pub fn resolve_settings(cli: CliOverrides, file: FileConfig) -> Settings {
    let skip_lines = cli.skip_lines.or(file.skip_lines).unwrap_or(0);
    let default_language = cli
        .default_language
        .or(file.default_language)
        .unwrap_or_default();

    Settings {
        config: Config::new()
            .with_skip_lines(skip_lines)
            .with_default_language(default_language),
        source: cli
            .source
            .or(file.source)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR)),
        destination: cli
            .destination
            .or(file.destination)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEST_DIR)),
    }
}
