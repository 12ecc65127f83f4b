use indexmap::IndexMap;

use super::element::{Element, is_vacancy};
use super::name::has_letter;
use super::phase::Phase;
use super::species::Species;

/// Everything the parser extracts from one TDB file.
///
/// All three maps keep declaration order, which is the order the record
/// builder emits sub-systems in. A redeclared key keeps its first position
/// and takes the new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TdbDatabase {
    /// Keyed by title-cased element symbol.
    pub elements: IndexMap<String, Element>,
    /// Keyed by species name as written.
    pub species: IndexMap<String, Species>,
    /// Keyed by base phase name, model code stripped.
    pub phases: IndexMap<String, Phase>,
}

impl TdbDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Element symbols that denote real chemical elements, in declaration
    /// order: letterless placeholders and the vacancy are skipped.
    pub fn chemical_symbols(&self) -> impl Iterator<Item = &str> {
        self.elements
            .keys()
            .map(String::as_str)
            .filter(|symbol| has_letter(symbol) && !is_vacancy(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> Element {
        Element::new("SER", 1.0, 0.0, 0.0)
    }

    #[test]
    fn chemical_symbols_skip_vacancy_in_order() {
        let mut db = TdbDatabase::new();
        db.elements.insert("Pb".into(), element());
        db.elements.insert("Va".into(), element());
        db.elements.insert("Te".into(), element());

        let symbols: Vec<_> = db.chemical_symbols().collect();
        assert_eq!(symbols, vec!["Pb", "Te"]);
        assert_eq!(db.element_count(), 3);
    }

    #[test]
    fn redeclared_key_keeps_first_position() {
        let mut db = TdbDatabase::new();
        db.species.insert("A".into(), Species::new("A1"));
        db.species.insert("B".into(), Species::new("B1"));
        db.species.insert("A".into(), Species::new("A2"));

        let names: Vec<_> = db.species.keys().cloned().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(db.species["A"].formula, "A2");
        assert_eq!(db.species_count(), 2);
        assert_eq!(db.phase_count(), 0);
    }
}
