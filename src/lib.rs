//! A pure Rust ingester for CALPHAD thermodynamic databases (TDB files).
//! It extracts the elements, species and phases of a database and assembles
//! them into a hierarchical PIF "chemical system" record ready for JSON export.
//!
//! # Features
//!
//! - **TDB parsing** – Comment stripping, `!`-terminated statement splitting
//!   and tolerant keyword dispatch for `ELEMENT`, `SPECIES`, `PHASE` and
//!   `CONSTITUENT` commands; everything else is skipped
//! - **Chemical naming** – Upper-case TDB identifiers turned into chemically
//!   cased names and formulas (`PBTE` → `PbTe`, `PB1TE1` → `PbTe`)
//! - **Composition** – Ideal atomic percent per sublattice from site ratios
//! - **PIF output** – Pretty or compact JSON serialization of the record tree
//!
//! # Quick Start
//!
//! Parse a database with [`io::tdb`] and build the record with
//! [`build_record`], or let [`convert`] do both for a file on disk:
//!
//! ```
//! use std::path::Path;
//! use tdb_ingester::io::{ParseConfig, tdb};
//! use tdb_ingester::{SubsystemTag, build_record};
//!
//! let src = "
//! $ PbTe binary
//!  ELEMENT VA   VACUUM        0.0      0.0     0.0 !
//!  ELEMENT PB   BCT_A5      207.2   6870.0    64.785 !
//!  ELEMENT TE   HEXAGONAL_A8 127.6  6121.2    49.497 !
//!  SPECIES PBTE_L PB1TE1 !
//!  PHASE LIQUID:L % 1 1.0 !
//!  CONSTITUENT LIQUID:L :PB,TE,PBTE_L: !
//!  PHASE PBTE % 2 1 1 !
//!  CONSTITUENT PBTE :PB:TE: !
//! ";
//! let db = tdb::parse_str(src, &ParseConfig::default())?;
//! let record = build_record(&db, "2017Bajaj", Path::new("PbTe.TDB"));
//!
//! // Vacancy is not a chemical symbol
//! assert_eq!(record.chemical_formula.as_deref(), Some("PbTe"));
//!
//! let phases: Vec<_> = record
//!     .sub_systems_tagged(SubsystemTag::Phase)
//!     .filter_map(|p| p.name())
//!     .collect();
//! assert_eq!(phases, ["LIQUID", "PbTe"]);
//!
//! let pbte = record.sub_systems_tagged(SubsystemTag::Phase).nth(1).unwrap();
//! assert_eq!(pbte.composition[0].element, "(Pb)");
//! assert_eq!(pbte.composition[0].ideal_atomic_percent, 50.0);
//! # Ok::<(), tdb_ingester::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – TDB reader, PIF writer and parser configuration
//! - [`convert`] / [`convert_with_config`] – File-to-record entry points
//! - [`IngestConfig`] – Settings of a conversion run, loadable from TOML
//!
//! # Data Types
//!
//! ## Parsed Database
//!
//! - [`TdbDatabase`] – Elements, species and phases in declaration order
//! - [`Element`] – Reference state, mass, enthalpy and entropy
//! - [`Species`] – Species formula
//! - [`Phase`] – Model code, sublattices, site ratios and constituents
//! - [`PhaseState`] – Declared vs. constituents attached
//!
//! ## Output Record
//!
//! - [`ChemicalSystem`] – A node of the record tree
//! - [`SubsystemTag`] – Element, Specie or Phase sub-system kind
//! - [`Property`] – Named scalar or file value with optional units
//! - [`Composition`] – Sublattice label with its ideal atomic percent
//! - [`Id`] – Name/value identifier

mod ingest;
mod model;

pub mod io;

pub use model::database::TdbDatabase;
pub use model::element::{Element, VACANCY_SYMBOL, is_vacancy};
pub use model::name::{has_letter, title_case};
pub use model::phase::{MODEL_CODES, Phase, PhaseState, Sublattices, split_model_code};
pub use model::species::Species;

pub use model::record::{
    CHEMICAL_SYSTEM_CATEGORY, ChemicalSystem, Composition, FileReference, Id, Property, Scalar,
    ScalarValue, SubsystemTag,
};

pub use ingest::{
    DATABASE_FILE_PROPERTY, DATABASE_ID_NAME, FALLBACK_STATE, IngestConfig, MODEL_CODE_STATES,
    PHASE_NAME_CORRECTIONS, STRUCTURE_KEYWORDS, build_record, constituent_label, convert,
    convert_with_config, phase_name, species_formula, species_name, state_label,
};

pub use ingest::Error as IngestError;
