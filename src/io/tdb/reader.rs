use crate::io::{ParseConfig, error::Error};
use crate::model::{
    database::TdbDatabase,
    element::Element,
    name::{has_letter, title_case},
    phase::{Phase, split_model_code},
    species::Species,
};
use std::fs;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace, warn};

use super::statement::{Keyword, Statement, split_statements};

pub fn read<R: BufRead>(mut reader: R, config: &ParseConfig) -> Result<TdbDatabase, Error> {
    let mut source = String::new();
    std::io::Read::read_to_string(&mut reader, &mut source)?;
    parse_str(&source, config)
}

pub fn read_file(path: &Path, config: &ParseConfig) -> Result<TdbDatabase, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
    parse_str(&source, config)
}

pub fn parse_str(source: &str, config: &ParseConfig) -> Result<TdbDatabase, Error> {
    let mut db = TdbDatabase::new();
    let mut skipped = 0usize;

    for statement in split_statements(source, config.comments) {
        match Keyword::classify(statement.keyword(), config.keyword_match) {
            Some(Keyword::Element) => parse_element(&statement, &mut db)?,
            Some(Keyword::Species) => parse_species(&statement, &mut db)?,
            Some(Keyword::Phase) => parse_phase(&statement, &mut db)?,
            Some(Keyword::Constituent) => parse_constituent(&statement, &mut db)?,
            None => {
                trace!(
                    line = statement.line,
                    keyword = statement.keyword(),
                    "skipping statement"
                );
                skipped += 1;
            }
        }
    }

    debug!(
        elements = db.element_count(),
        species = db.species_count(),
        phases = db.phase_count(),
        skipped,
        "parsed TDB database"
    );

    Ok(db)
}

fn field<'a>(
    statement: &'a Statement,
    keyword: Keyword,
    index: usize,
    name: &'static str,
) -> Result<&'a str, Error> {
    statement
        .tokens
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::missing_field(keyword.name(), name, statement.line))
}

fn number<T: FromStr>(
    statement: &Statement,
    keyword: Keyword,
    index: usize,
    name: &'static str,
) -> Result<T, Error> {
    let raw = field(statement, keyword, index, name)?;
    raw.parse::<T>()
        .map_err(|_| Error::malformed(keyword.name(), name, raw, statement.line))
}

fn parse_element(statement: &Statement, db: &mut TdbDatabase) -> Result<(), Error> {
    const KW: Keyword = Keyword::Element;

    let symbol = field(statement, KW, 1, "symbol")?;
    if !has_letter(symbol) {
        trace!(line = statement.line, symbol, "skipping element without letters");
        return Ok(());
    }

    let reference_state = field(statement, KW, 2, "reference state")?;
    let mass = number::<f64>(statement, KW, 3, "mass")?;
    let enthalpy = number::<f64>(statement, KW, 4, "enthalpy")?;
    let entropy = number::<f64>(statement, KW, 5, "entropy")?;

    db.elements.insert(
        title_case(symbol),
        Element::new(reference_state, mass, enthalpy, entropy),
    );
    Ok(())
}

fn parse_species(statement: &Statement, db: &mut TdbDatabase) -> Result<(), Error> {
    const KW: Keyword = Keyword::Species;

    let name = field(statement, KW, 1, "name")?;
    let formula = field(statement, KW, 2, "formula")?;

    db.species.insert(name.to_string(), Species::new(formula));
    Ok(())
}

fn parse_phase(statement: &Statement, db: &mut TdbDatabase) -> Result<(), Error> {
    const KW: Keyword = Keyword::Phase;

    let (name, model_code) = split_model_code(field(statement, KW, 1, "name")?);
    let type_code = field(statement, KW, 2, "type code")?;
    let sublattice_count = number::<usize>(statement, KW, 3, "sublattice count")?;

    let site_ratios = (4..statement.tokens.len())
        .map(|idx| number::<f64>(statement, KW, idx, "site ratio"))
        .collect::<Result<Vec<_>, _>>()?;

    if site_ratios.len() != sublattice_count {
        return Err(Error::SublatticeMismatch {
            phase: name.to_string(),
            declared: sublattice_count,
            found: site_ratios.len(),
            what: "site ratio(s)",
            line: statement.line,
        });
    }

    db.phases.insert(
        name.to_string(),
        Phase::new(model_code, type_code, sublattice_count, site_ratios),
    );
    Ok(())
}

fn parse_constituent(statement: &Statement, db: &mut TdbDatabase) -> Result<(), Error> {
    const KW: Keyword = Keyword::Constituent;

    let (name, _) = split_model_code(field(statement, KW, 1, "phase name")?);

    let joined = statement.tokens[2..].concat();
    let sublattices: Vec<Vec<String>> = joined
        .trim_matches(':')
        .split(':')
        .map(|group| group.split(',').map(str::to_string).collect())
        .collect();

    let phase = db
        .phases
        .get_mut(name)
        .ok_or_else(|| Error::missing_phase(name, statement.line))?;

    if sublattices.len() != phase.sublattice_count {
        return Err(Error::SublatticeMismatch {
            phase: name.to_string(),
            declared: phase.sublattice_count,
            found: sublattices.len(),
            what: "constituent group(s)",
            line: statement.line,
        });
    }

    if phase.attach_constituents(sublattices).is_some() {
        warn!(
            line = statement.line,
            phase = name,
            "constituents redeclared, keeping the latest"
        );
    }
    Ok(())
}
