//! PIF JSON output for [`ChemicalSystem`](crate::ChemicalSystem) records.

mod writer;

pub use writer::{PifStyle, to_string, write};
