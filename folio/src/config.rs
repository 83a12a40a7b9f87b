//! Configuration file and defaults.
//!
//! Layout values are in terminal cells: rows for vertical measures,
//! columns for horizontal ones.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{LevelFilter, debug};
use serde::Deserialize;

use crate::content::Content;
use crate::error::ConfigError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction at which a target is revealed.
    pub threshold: f32,
    pub duration_ms: u64,
    /// Extra transition delay per item index.
    pub stagger_ms: u64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            duration_ms: 700,
            stagger_ms: 100,
        }
    }
}

impl RevealSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    /// Scroll offset (rows) beyond which the bar turns opaque.
    pub scroll_threshold: u16,
    /// Bar height assumed until the first measurement.
    pub initial_height: u16,
    /// Delay before re-measuring after the menu opens.
    pub settle_delay_ms: u64,
    /// Viewports at least this wide show inline links instead of the toggle.
    pub breakpoint: u16,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: 2,
            initial_height: 3,
            settle_delay_ms: 10,
            breakpoint: 80,
        }
    }
}

impl NavSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Finish every transition and animation instantly.
    pub reduced: bool,
    /// Redraw interval while something is animating.
    pub frame_ms: u64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            reduced: false,
            frame_ms: 16,
        }
    }
}

impl MotionSettings {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reveal: RevealSettings,
    pub nav: NavSettings,
    pub motion: MotionSettings,
    pub log_level: LogLevel,
    pub content: Content,
}

impl Config {
    /// Parse a config document. Missing keys take their defaults.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// platform config directory if a file is there, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        match paths::config_file() {
            Some(path) if path.exists() => Self::read(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
