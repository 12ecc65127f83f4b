//! CALPHAD thermodynamic database (TDB) reader.
//!
//! A TDB file is a sequence of `!`-terminated commands; lines starting with
//! `$` are comments. Only `ELEMENT`, `SPECIES`, `PHASE` and `CONSTITUENT`
//! commands carry data this crate extracts, every other command
//! (`FUNCTION`, `PARAMETER`, `TYPE_DEFINITION`, ...) is skipped.
//!
//! ```
//! use tdb_ingester::io::{ParseConfig, tdb};
//!
//! let src = "ELEMENT PB BCT_A5 207.2 6870 64.785 !
//!            PHASE LIQUID:L % 1 1.0 !
//!            CONSTITUENT LIQUID:L :PB: !";
//! let db = tdb::parse_str(src, &ParseConfig::default())?;
//!
//! assert_eq!(db.elements["Pb"].enthalpy, 6870.0);
//! assert_eq!(db.phases["LIQUID"].model_code, Some('L'));
//! # Ok::<(), tdb_ingester::io::Error>(())
//! ```

mod reader;
mod statement;

pub use reader::{parse_str, read, read_file};
pub use statement::{Keyword, Statement, split_statements};
