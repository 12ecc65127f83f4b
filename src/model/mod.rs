//! Core data structures shared by the TDB parser and the record builder.
//!
//! - [`element`] – `ELEMENT` reference data and the vacancy pseudo-element.
//! - [`species`] – `SPECIES` formulas.
//! - [`phase`] – `PHASE`/`CONSTITUENT` data with its declaration state machine.
//! - [`database`] – The ordered collection of all parsed entities.
//! - [`record`] – The hierarchical chemical-system record produced from it.
//! - [`name`] – Case conventions used when turning TDB identifiers into names.
//!
//! Parsing fills a [`TdbDatabase`]; the builder in `crate::ingest` turns it
//! into a [`ChemicalSystem`] without mutating it.
//!
//! [`TdbDatabase`]: database::TdbDatabase
//! [`ChemicalSystem`]: record::ChemicalSystem

pub mod database;
pub mod element;
pub mod name;
pub mod phase;
pub mod record;
pub mod species;
