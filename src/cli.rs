// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Args, Parser};

// local imports
use crate::{config, settings::DumpFormat};

// ---

/// Options needed before the configuration is loaded.
#[derive(Parser)]
#[command(ignore_errors(true), disable_help_flag(true), disable_version_flag(true))]
pub struct BootstrapOpt {
    #[command(flatten)]
    pub args: BootstrapArgs,
}

#[derive(Args)]
pub struct BootstrapArgs {
    /// Configuration file path.
    #[arg(long, value_name = "FILE", env = "CATC_CONFIG", num_args = 1)]
    pub config: Option<PathBuf>,
}

// ---

/// Message catalog compiler.
///
/// Parses message files, reports syntax and semantic errors together with
/// duplicate key warnings and optionally dumps the compiled catalog.
#[derive(Parser)]
#[command(name = config::APP_NAME, version)]
pub struct Opt {
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    /// Locale of the compiled catalog.
    #[arg(
        long,
        short,
        default_value_t = config::get().locale.clone(),
        env = "CATC_LOCALE",
        overrides_with = "locale",
    )]
    pub locale: String,

    /// Dump the compiled catalog to stdout.
    #[arg(long, value_enum, default_value_t = config::get().dump, env = "CATC_DUMP", overrides_with = "dump")]
    pub dump: DumpFormat,

    /// Report every error instead of a summary line per failed file.
    #[arg(long, short = 'a')]
    pub all_errors: bool,

    /// Message files to compile.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests;
