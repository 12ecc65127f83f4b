use crate::io::error::Error;
use crate::model::record::ChemicalSystem;
use std::fmt;
use std::io::Write;

/// Layout of the emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PifStyle {
    #[default]
    Pretty,
    Compact,
}

impl fmt::Display for PifStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PifStyle::Pretty => write!(f, "pretty"),
            PifStyle::Compact => write!(f, "compact"),
        }
    }
}

pub fn write<W: Write>(mut writer: W, system: &ChemicalSystem, style: PifStyle) -> Result<(), Error> {
    match style {
        PifStyle::Pretty => serde_json::to_writer_pretty(&mut writer, system)?,
        PifStyle::Compact => serde_json::to_writer(&mut writer, system)?,
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn to_string(system: &ChemicalSystem, style: PifStyle) -> Result<String, Error> {
    let json = match style {
        PifStyle::Pretty => serde_json::to_string_pretty(system)?,
        PifStyle::Compact => serde_json::to_string(system)?,
    };
    Ok(json)
}
