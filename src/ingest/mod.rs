mod builder;
mod config;
mod error;
mod naming;

pub use builder::{DATABASE_FILE_PROPERTY, DATABASE_ID_NAME, build_record};
pub use config::IngestConfig;
pub use error::Error;
pub use naming::{
    FALLBACK_STATE, MODEL_CODE_STATES, PHASE_NAME_CORRECTIONS, STRUCTURE_KEYWORDS, constituent_label,
    phase_name, species_formula, species_name, state_label,
};

use crate::io::tdb;
use crate::model::record::ChemicalSystem;
use std::path::Path;
use tracing::info;

/// Converts a single TDB file into a chemical-system record with default
/// settings.
///
/// # Errors
///
/// [`Error::InvalidArgument`] unless `files` holds exactly one path, and
/// [`Error::Io`] if the file cannot be read or parsed.
pub fn convert<P: AsRef<Path>>(files: &[P], database_name: &str) -> Result<ChemicalSystem, Error> {
    convert_with_config(files, database_name, &IngestConfig::default())
}

pub fn convert_with_config<P: AsRef<Path>>(
    files: &[P],
    database_name: &str,
    config: &IngestConfig,
) -> Result<ChemicalSystem, Error> {
    let [file] = files else {
        return Err(Error::file_count(files.len()));
    };
    let path = file.as_ref();

    info!(
        path = %path.display(),
        database = database_name,
        keyword_match = %config.parse.keyword_match,
        "converting TDB database"
    );

    let database = tdb::read_file(path, &config.parse)?;
    Ok(build_record(&database, database_name, path))
}
