// std imports
use std::path::Path;

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::{error::Result, settings::Settings};

// ---

pub const APP_NAME: &str = "catc";

static GLOBAL: OnceCell<Settings> = OnceCell::new();
static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Loads settings from the given configuration file or the default locations.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    Settings::load(path)
}

/// Installs the global settings, the first call wins.
pub fn initialize(settings: Settings) {
    if GLOBAL.set(settings).is_err() {
        log::debug!("global settings already initialized");
    }
}

/// Returns the global settings, falling back to defaults if not initialized.
pub fn get() -> &'static Settings {
    GLOBAL.get().unwrap_or(&DEFAULT)
}
