/// Symbol under which the vacancy pseudo-element is stored.
pub const VACANCY_SYMBOL: &str = "Va";

/// Reference data of one `ELEMENT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Stable element reference (SER) phase, e.g. `BCT_A5`.
    pub reference_state: String,
    /// Molar mass in g/mol.
    pub mass: f64,
    /// Enthalpy of the reference state in J/mol.
    pub enthalpy: f64,
    /// Entropy of the reference state in J/(mol·K).
    pub entropy: f64,
}

impl Element {
    pub fn new(reference_state: impl Into<String>, mass: f64, enthalpy: f64, entropy: f64) -> Self {
        Self {
            reference_state: reference_state.into(),
            mass,
            enthalpy,
            entropy,
        }
    }
}

/// Returns `true` if `symbol` names the vacancy pseudo-element.
#[inline]
pub fn is_vacancy(symbol: &str) -> bool {
    symbol.eq_ignore_ascii_case(VACANCY_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_new_stores_reference_data() {
        let pb = Element::new("BCT_A5", 207.2, 6870.0, 64.785);
        assert_eq!(pb.reference_state, "BCT_A5");
        assert_eq!(pb.mass, 207.2);
        assert_eq!(pb.enthalpy, 6870.0);
        assert_eq!(pb.entropy, 64.785);
    }

    #[test]
    fn vacancy_detection_ignores_case() {
        assert!(is_vacancy("Va"));
        assert!(is_vacancy("VA"));
        assert!(is_vacancy("va"));
        assert!(!is_vacancy("V"));
        assert!(!is_vacancy("Pb"));
    }
}
