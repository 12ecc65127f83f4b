/// A `SPECIES` statement: a named entity with a stoichiometric formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    /// Formula exactly as written in the database (e.g. `PB1TE1`).
    pub formula: String,
}

impl Species {
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}
