// std imports
use std::{fs, path::Path, sync::Arc};

// third-party imports
use message_dsl::{WarningSink, parse, validate};

// local imports
use crate::{
    catalog::Catalog,
    error::{Error, Failure, Result},
    locale::LocaleLookup,
};

// ---

/// A named message file.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: Arc<str>,
    pub data: Vec<u8>,
}

impl Source {
    pub fn new(name: impl Into<Arc<str>>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| Error::ReadFile {
            path: path.into(),
            source,
        })?;
        Ok(Self::new(path.to_string_lossy(), data))
    }
}

// ---

/// Outcome of a compilation.
///
/// The catalog holds every message parsed, including those of failed files.
#[derive(Debug)]
pub struct CompileOutput {
    pub catalog: Catalog,
    pub failures: Vec<Failure>,
}

impl CompileOutput {
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_result(self) -> Result<Catalog> {
        if self.failures.is_empty() {
            Ok(self.catalog)
        } else {
            Err(Error::Compile(self.failures))
        }
    }
}

// ---

pub struct Compiler<L> {
    locales: L,
}

impl<L: LocaleLookup> Compiler<L> {
    pub fn new(locales: L) -> Self {
        Self { locales }
    }

    /// Compiles `sources` in order into a catalog for `locale`.
    ///
    /// Duplicate keys across all sources are reported to `sink`.
    pub fn compile<S>(&self, locale: &str, sources: &[Source], sink: &mut S) -> Result<CompileOutput>
    where
        S: WarningSink + ?Sized,
    {
        let locale = self.locales.resolve(locale)?;
        log::debug!("compiling {} file(s) for locale {}", sources.len(), locale);

        let mut messages = Vec::new();
        let mut failures = Vec::new();

        for source in sources {
            let parsed = parse(source.name.clone(), &source.data);
            log::debug!(
                "{}: {} message(s), {} error(s)",
                source.name,
                parsed.messages.len(),
                parsed.errors.len()
            );
            if !parsed.errors.is_empty() {
                failures.push(Failure {
                    file: source.name.clone(),
                    errors: parsed.errors,
                });
            }
            messages.extend(parsed.messages);
        }

        validate(&messages, sink);

        Ok(CompileOutput {
            catalog: Catalog::new(locale, messages),
            failures,
        })
    }
}
