use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{PlaybillError, Result};
use crate::filter::{FilterControls, FilterMode, FilterTarget};

// Settings mirror the initial state of the filter surface. A missing file
// yields the defaults; a malformed one is a Config error.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub filter: FilterSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}
impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub include: bool,
    pub people_view: bool,
    pub arrangement: usize,
}
impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            include: true,
            people_view: true,
            arrangement: 0,
        }
    }
}
impl FilterSettings {
    pub fn mode(&self) -> FilterMode {
        if self.include {
            FilterMode::Include
        } else {
            FilterMode::Exclude
        }
    }
    pub fn target(&self) -> FilterTarget {
        if self.people_view {
            FilterTarget::People
        } else {
            FilterTarget::Shows
        }
    }
    pub fn controls(&self) -> FilterControls {
        FilterControls {
            text: String::new(),
            mode: self.mode(),
            target: self.target(),
        }
    }
}

impl Settings {
    pub fn load(name: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(
                File::with_name(name)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()
            .map_err(|e| PlaybillError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| PlaybillError::Config(e.to_string()))
    }
}
