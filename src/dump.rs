// std imports
use std::io::Write;

// local imports
use crate::{catalog::Catalog, error::Result, settings::DumpFormat};

// ---

/// Writes a readable representation of `catalog` in the given format.
pub fn dump<W: Write>(catalog: &Catalog, format: DumpFormat, target: &mut W) -> Result<()> {
    match format {
        DumpFormat::None => {}
        DumpFormat::Text => {
            writeln!(target, "# locale: {}", catalog.locale)?;
            for message in &catalog.messages {
                if message.section.is_empty() {
                    writeln!(target, "{}: {}", message.key, message)?;
                } else {
                    writeln!(target, "[{}] {}: {}", message.section, message.key, message)?;
                }
            }
        }
        DumpFormat::Json => {
            json::to_writer_pretty(&mut *target, catalog)?;
            writeln!(target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
