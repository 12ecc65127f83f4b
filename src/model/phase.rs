/// Model codes accepted after the `:` of a phase name.
pub const MODEL_CODES: [char; 7] = ['G', 'A', 'Y', 'L', 'I', 'F', 'B'];

/// Splits a raw phase token into its base name and model code.
///
/// `LIQUID:L` yields `("LIQUID", Some('L'))`. Tokens without a colon, with
/// more than one colon, or with a code outside [`MODEL_CODES`] are returned
/// whole with no code.
pub fn split_model_code(raw: &str) -> (&str, Option<char>) {
    let mut parts = raw.split(':');
    let (Some(name), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return (raw, None);
    };

    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if MODEL_CODES.contains(&c) => (name, Some(c)),
        _ => (raw, None),
    }
}

/// Constituents of each sublattice, in sublattice order.
pub type Sublattices = Vec<Vec<String>>;

/// Lifecycle of a phase while the database is being read.
///
/// A `PHASE` statement declares the phase; the `CONSTITUENT` statement that
/// follows it attaches the sublattice occupants.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseState {
    Declared,
    ConstituentsAttached(Sublattices),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub model_code: Option<char>,
    pub type_code: String,
    pub sublattice_count: usize,
    pub site_ratios: Vec<f64>,
    pub state: PhaseState,
}

impl Phase {
    pub fn new(
        model_code: Option<char>,
        type_code: impl Into<String>,
        sublattice_count: usize,
        site_ratios: Vec<f64>,
    ) -> Self {
        Self {
            model_code,
            type_code: type_code.into(),
            sublattice_count,
            site_ratios,
            state: PhaseState::Declared,
        }
    }

    /// Moves the phase to [`PhaseState::ConstituentsAttached`].
    ///
    /// Returns the previously attached constituents, if any.
    pub fn attach_constituents(&mut self, sublattices: Sublattices) -> Option<Sublattices> {
        match std::mem::replace(&mut self.state, PhaseState::ConstituentsAttached(sublattices)) {
            PhaseState::Declared => None,
            PhaseState::ConstituentsAttached(previous) => Some(previous),
        }
    }

    pub fn constituents(&self) -> Option<&[Vec<String>]> {
        match &self.state {
            PhaseState::Declared => None,
            PhaseState::ConstituentsAttached(sublattices) => Some(sublattices),
        }
    }

    #[inline]
    pub fn has_constituents(&self) -> bool {
        matches!(self.state, PhaseState::ConstituentsAttached(_))
    }

    /// Total number of sites over all sublattices.
    pub fn total_sites(&self) -> f64 {
        self.site_ratios.iter().sum()
    }
}
