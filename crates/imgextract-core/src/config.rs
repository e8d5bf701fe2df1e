use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::extract::PNG_DATA_URI_MARKER;

/// Global configuration loaded from `~/.config/imgextract/config.toml`.
///
/// The defaults reproduce the fixed behavior of the tool: read
/// `pages/mapa-mental.html`, write `assets/mapa-mental.png`, both relative to
/// the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// HTML document holding the embedded image.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// Destination of the decoded PNG.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Data URI prefix that starts the payload.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Number of trailing payload characters echoed in diagnostics.
    #[serde(default = "default_tail_preview_chars")]
    pub tail_preview_chars: usize,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("pages/mapa-mental.html")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("assets/mapa-mental.png")
}

fn default_marker() -> String {
    PNG_DATA_URI_MARKER.to_string()
}

fn default_tail_preview_chars() -> usize {
    50
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            marker: default_marker(),
            tail_preview_chars: default_tail_preview_chars(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgextract")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExtractConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ExtractConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ExtractConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    if cfg.marker.is_empty() {
        anyhow::bail!("invalid config {}: marker must not be empty", path.display());
    }
    Ok(cfg)
}
