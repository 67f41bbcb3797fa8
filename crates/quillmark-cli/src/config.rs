//! Render settings loaded from `quill.toml` and command-line flags.
//!
//! ```toml
//! fence = "multiline"   # or "legacy" (default)
//! escape_html = true    # default false: content is admin-authored
//! ```

use std::path::{Path, PathBuf};

use quillmark_core::surface::{HtmlOptions, TrustMode};
use quillmark_core::{FenceMode, Parser};
use serde::Deserialize;
use thiserror::Error;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "quill.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Code-fence handling as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FenceSetting {
    #[default]
    Legacy,
    Multiline,
}

impl From<FenceSetting> for FenceMode {
    fn from(setting: FenceSetting) -> Self {
        match setting {
            FenceSetting::Legacy => FenceMode::Legacy,
            FenceSetting::Multiline => FenceMode::Multiline,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fence: FenceSetting,
    pub escape_html: bool,
}

impl Config {
    /// Load a config file. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, fence: Option<FenceSetting>, escape_html: bool) -> Self {
        if let Some(fence) = fence {
            self.fence = fence;
        }
        self.escape_html |= escape_html;
        self
    }

    pub fn parser(&self) -> Parser {
        Parser::new().with_fence_mode(self.fence.into())
    }

    pub fn html_options(&self) -> HtmlOptions {
        let trust = if self.escape_html {
            TrustMode::Escaped
        } else {
            TrustMode::Trusted
        };
        HtmlOptions::new().with_trust(trust)
    }
}
