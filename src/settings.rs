// std imports
use std::{include_str, path::Path};

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

const USER_SETTINGS: &str = "catc";

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub locale: String,
    pub dump: DumpFormat,
    pub all_errors: bool,
}

impl Settings {
    /// Loads settings layered over the embedded defaults.
    ///
    /// If `path` is given the file must exist, otherwise an optional
    /// `catc.toml` in the current directory is used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let user = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(USER_SETTINGS).format(FileFormat::Toml).required(false),
        };

        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .add_source(user)
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .expect("embedded default settings are valid")
    }
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DumpFormat {
    #[default]
    None,
    Text,
    Json,
}

#[cfg(test)]
mod tests;
