// public modules
pub mod catalog;
pub mod cli;
pub mod compile;
pub mod config;
pub mod dump;
pub mod error;
pub mod locale;
pub mod settings;

// public uses
pub use catalog::Catalog;
pub use compile::{CompileOutput, Compiler, Source};
pub use locale::{LocaleHandle, LocaleLookup, TagLocales};
pub use settings::Settings;
