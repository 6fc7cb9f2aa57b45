// std imports
use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

// third-party imports
use config::ConfigError;
use itertools::Itertools;
use message_dsl::ErrorList;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::locale::LocaleError;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to read {path:?}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error("failed to serialize catalog: {0}")]
    Json(#[from] json::Error),
    #[error("failed to compile {}", .0.iter().map(|f| format!("{:?}", f.file)).join(", "))]
    Compile(Vec<Failure>),
}

impl Error {
    /// Writes a human readable report of the error.
    ///
    /// Compile failures are reported with every positioned error if `all` is set,
    /// otherwise with one summary line per file.
    pub fn log_to<W: Write>(&self, target: &mut W, all: bool) -> io::Result<()> {
        let prefix = "error:".bright_red();
        let prefix = prefix.bold();
        match self {
            Self::Compile(failures) => {
                for failure in failures {
                    if all {
                        for entry in &failure.errors {
                            writeln!(target, "{} {}", prefix, entry)?;
                        }
                    } else {
                        writeln!(target, "{} {}", prefix, failure.errors.error_message())?;
                    }
                }
                Ok(())
            }
            _ => writeln!(target, "{} {}", prefix, self),
        }
    }

    pub fn log(&self, all: bool) {
        self.log_to(&mut io::stderr(), all).ok();
    }
}

// ---

/// Errors reported for a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub file: Arc<str>,
    pub errors: ErrorList,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
