// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedEcho";

pub const DEFAULT_SUBTITLE_FONT_SIZE: u32 = 22;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Point size for both subtitle labels.
    #[serde(default)]
    pub subtitle_font_size: Option<u32>,
    /// Directory the video picker opens in.
    #[serde(default)]
    pub last_video_dir: Option<PathBuf>,
    /// Directory the subtitle pickers open in.
    #[serde(default)]
    pub last_subtitle_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subtitle_font_size: Some(DEFAULT_SUBTITLE_FONT_SIZE),
            last_video_dir: None,
            last_subtitle_dir: None,
        }
    }
}

impl Config {
    pub fn subtitle_font_size(&self) -> u32 {
        self.subtitle_font_size
            .unwrap_or(DEFAULT_SUBTITLE_FONT_SIZE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
