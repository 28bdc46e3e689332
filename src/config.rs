use crate::gui::circle::render_list::FontFamily;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Where the circle is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LayerMode {
    /// Ordinary decorated toplevel.
    #[default]
    #[strum(serialize = "window")]
    Window,
    /// Layer-shell surface beneath all windows, like a wallpaper.
    #[strum(serialize = "background", serialize = "wallpaper")]
    Background,
    #[strum(serialize = "bottom")]
    Bottom,
    #[strum(serialize = "overlay")]
    Overlay,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Fit the short side of the drawing area.
    #[default]
    #[strum(serialize = "viewport", serialize = "fit")]
    Viewport,
    #[strum(serialize = "fixed")]
    Fixed,
    /// Follow the pointer's distance from the center.
    #[strum(serialize = "pointer", serialize = "mouse")]
    Pointer,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub layer: LayerMode,
    /// Background opacity, 0 leaves the desktop visible behind the strokes.
    pub opacity: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            layer: LayerMode::Window,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub mode: ScaleMode,
    /// Pixels per unit radius in fixed mode.
    pub fixed: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            mode: ScaleMode::Viewport,
            fixed: 400.0,
        }
    }
}

/// Periods are in seconds; `*_motion` is the share of each period spent moving.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub breath_period: f64,
    pub breath_min: f64,
    pub breath_max: f64,
    pub tick_period: f64,
    pub tick_motion: f64,
    pub sweep_period: f64,
    pub sweep_motion: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            breath_period: 6.0,
            breath_min: 0.96,
            breath_max: 1.04,
            tick_period: 3.0,
            tick_motion: 0.25,
            sweep_period: 8.0,
            sweep_motion: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn at(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FontConfig {
    pub label: FontFamily,
    pub title: FontFamily,
    pub title_size: SizeRange,
    pub subtitle_size: SizeRange,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            label: FontFamily::new("Cardo"),
            title: FontFamily::new("Helvetica Neue"),
            title_size: SizeRange::new(22.0, 26.0),
            subtitle_size: SizeRange::new(13.0, 15.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub scale: ScaleConfig,
    pub animation: AnimationConfig,
    pub fonts: FontConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "gnostic", "gnostic-circle")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("GNOSTIC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to the default configuration: {}", e);
            Config::default()
        }
    }
}

/// Writes the commented default config unless one exists, returning its path either way.
pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
