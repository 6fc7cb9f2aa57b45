// std imports
use std::{io::stdout, process};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use catc::{
    Compiler, Source, TagLocales,
    cli::{self, BootstrapOpt},
    config,
    dump::dump,
    error::*,
};
use message_dsl::LogSink;

const CATC_DEBUG_LOG: &str = "CATC_DEBUG_LOG";
const CATC_DEBUG_LOG_STYLE: &str = "CATC_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<()> {
    if std::env::var(CATC_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(CATC_DEBUG_LOG).write_style(CATC_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .format_timestamp(None)
            .format_target(false)
            .init()
    }

    let opt = BootstrapOpt::parse_from(wild::args()).args;
    let settings = config::load(opt.config.as_deref())?;
    config::initialize(settings);

    Ok(())
}

fn run(opt: &cli::Opt) -> Result<()> {
    let sources = opt
        .files
        .iter()
        .map(|path| Source::load(path))
        .collect::<Result<Vec<_>>>()?;

    let output = Compiler::new(TagLocales).compile(&opt.locale, &sources, &mut LogSink)?;
    let catalog = output.into_result()?;
    log::debug!("compiled {} message(s)", catalog.len());

    dump(&catalog, opt.dump, &mut stdout().lock())
}

fn main() {
    if let Err(err) = bootstrap() {
        err.log(true);
        process::exit(1);
    }

    let opt = cli::Opt::parse_from(wild::args());
    let all = opt.all_errors || config::get().all_errors;

    if let Err(err) = run(&opt) {
        err.log(all);
        process::exit(1);
    }
}
