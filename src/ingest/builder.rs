//! Assembly of the chemical-system record from a parsed database.
//!
//! The root system carries the database identifier, the system formula and a
//! reference to the source file. Its sub-systems are one node per element,
//! per species and per phase, in that order and each in declaration order.

use crate::model::{
    database::TdbDatabase,
    element::{Element, VACANCY_SYMBOL, is_vacancy},
    phase::Phase,
    record::{ChemicalSystem, Composition, Id, Property, SubsystemTag},
    species::Species,
};
use std::path::Path;
use tracing::{debug, warn};

use super::naming;

pub const DATABASE_ID_NAME: &str = "Database Name";
pub const DATABASE_FILE_PROPERTY: &str = "Thermodynamic database";

pub fn build_record(db: &TdbDatabase, database_name: &str, source: &Path) -> ChemicalSystem {
    let symbols: Vec<&str> = db.chemical_symbols().collect();

    let mut root = ChemicalSystem::new();
    root.ids.push(Id::new(DATABASE_ID_NAME, database_name));
    root.chemical_formula = Some(symbols.concat());
    root.properties.push(Property::file(
        DATABASE_FILE_PROPERTY,
        source.to_string_lossy(),
    ));

    root.sub_systems
        .reserve(db.element_count() + db.species_count() + db.phase_count());

    for (symbol, element) in &db.elements {
        root.sub_systems.push(element_system(symbol, element));
    }

    for (name, species) in &db.species {
        root.sub_systems
            .push(species_system(name, species, &symbols));
    }

    for (name, phase) in &db.phases {
        root.sub_systems.push(phase_system(name, phase, &symbols));
    }

    debug!(
        database = database_name,
        sub_systems = root.sub_systems.len(),
        "built chemical system record"
    );

    root
}

fn element_system(symbol: &str, element: &Element) -> ChemicalSystem {
    let mut sys = ChemicalSystem::tagged(SubsystemTag::Element);

    if is_vacancy(symbol) {
        sys.names.push(VACANCY_SYMBOL.to_string());
    } else {
        sys.chemical_formula = Some(symbol.to_string());
    }

    sys.properties = vec![
        Property::scalar("Element", symbol),
        Property::scalar("Reference state", element.reference_state.as_str()),
        Property::scalar("Mass of reference state", element.mass).with_units("g/mol"),
        Property::scalar("Enthalpy of reference state", element.enthalpy).with_units("J/mol"),
        Property::scalar("Entropy of reference state", element.entropy)
            .with_units("J/(mol·K)"),
    ];

    sys
}

fn species_system(name: &str, species: &Species, symbols: &[&str]) -> ChemicalSystem {
    let mut sys = ChemicalSystem::tagged(SubsystemTag::Specie);
    sys.names
        .push(naming::species_name(name, symbols.iter().copied()));
    sys.chemical_formula = Some(naming::species_formula(
        &species.formula,
        symbols.iter().copied(),
    ));
    sys
}

fn phase_system(name: &str, phase: &Phase, symbols: &[&str]) -> ChemicalSystem {
    let mut sys = ChemicalSystem::tagged(SubsystemTag::Phase);
    sys.names
        .push(naming::phase_name(name, symbols.iter().copied()));

    if let Some(code) = phase.model_code {
        sys.properties
            .push(Property::scalar("State", naming::state_label(code)));
    }

    match phase.constituents() {
        Some(sublattices) => sys.composition = composition(phase, sublattices),
        None => warn!(phase = name, "phase has no CONSTITUENT statement"),
    }

    sys
}

/// One group per sublattice with its share of all sites, rounded to two
/// decimals. An all-zero site total yields 0 for every group.
fn composition(phase: &Phase, sublattices: &[Vec<String>]) -> Vec<Composition> {
    let total = phase.total_sites();

    sublattices
        .iter()
        .zip(&phase.site_ratios)
        .map(|(constituents, sites)| Composition {
            element: naming::constituent_label(constituents),
            ideal_atomic_percent: if total == 0.0 {
                0.0
            } else {
                round2(sites / total * 100.0)
            },
        })
        .collect()
}

/// Two decimals, exact ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::ScalarValue;

    fn pbte_database() -> TdbDatabase {
        let mut db = TdbDatabase::new();
        db.elements
            .insert("Pb".into(), Element::new("BCT_A5", 207.2, 6870.0, 64.785));
        db.elements
            .insert("Va".into(), Element::new("VACUUM", 0.0, 0.0, 0.0));
        db.elements
            .insert("Te".into(), Element::new("HEXAGONAL_A8", 127.6, 6121.2, 49.497));

        db.species.insert("PBTE_L".into(), Species::new("PB1TE1"));

        let mut hex = Phase::new(None, "%", 1, vec![1.0]);
        hex.attach_constituents(vec![vec!["TE".into()]]);
        db.phases.insert("HEXAGONAL_A8".into(), hex);

        let mut liquid = Phase::new(Some('L'), "%", 1, vec![1.0]);
        liquid.attach_constituents(vec![vec!["PB".into(), "TE".into(), "PBTE_L".into()]]);
        db.phases.insert("LIQUID".into(), liquid);

        let mut pbte = Phase::new(None, "%", 2, vec![1.0, 1.0]);
        pbte.attach_constituents(vec![vec!["PB".into()], vec!["TE".into()]]);
        db.phases.insert("PBTE".into(), pbte);

        db
    }

    fn build(db: &TdbDatabase) -> ChemicalSystem {
        build_record(db, "2017Bajaj", Path::new("test_files/PbTe.TDB"))
    }

    #[test]
    fn root_carries_id_formula_and_file_reference() {
        let root = build(&pbte_database());
        assert_eq!(root.ids, vec![Id::new("Database Name", "2017Bajaj")]);
        assert_eq!(root.chemical_formula.as_deref(), Some("PbTe"));
        assert_eq!(root.properties[0].name, "Thermodynamic database");
        assert_eq!(root.properties[0].files[0].relative_path, "test_files/PbTe.TDB");
        assert!(root.tags.is_empty());
    }

    #[test]
    fn sub_systems_are_ordered_elements_species_phases() {
        let root = build(&pbte_database());
        let tags: Vec<_> = root.sub_systems.iter().filter_map(|s| s.tag()).collect();
        assert_eq!(
            tags,
            vec![
                SubsystemTag::Element,
                SubsystemTag::Element,
                SubsystemTag::Element,
                SubsystemTag::Specie,
                SubsystemTag::Phase,
                SubsystemTag::Phase,
                SubsystemTag::Phase,
            ]
        );
    }

    #[test]
    fn vacancy_element_gets_a_name_instead_of_formula() {
        let root = build(&pbte_database());
        let formulas: Vec<_> = root
            .sub_systems_tagged(SubsystemTag::Element)
            .map(|s| s.chemical_formula.as_deref())
            .collect();
        assert_eq!(formulas, vec![Some("Pb"), None, Some("Te")]);

        let va = root.sub_systems_tagged(SubsystemTag::Element).nth(1).unwrap();
        assert_eq!(va.name(), Some("Va"));
    }

    #[test]
    fn element_properties_carry_values_and_units() {
        let root = build(&pbte_database());
        let pb = root.sub_systems_tagged(SubsystemTag::Element).next().unwrap();

        let names: Vec<_> = pb.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Element",
                "Reference state",
                "Mass of reference state",
                "Enthalpy of reference state",
                "Entropy of reference state",
            ]
        );

        let enthalpy = pb.property("Enthalpy of reference state").unwrap();
        assert_eq!(enthalpy.value(), Some(&ScalarValue::Number(6870.0)));
        assert_eq!(enthalpy.units.as_deref(), Some("J/mol"));

        let entropy = pb.property("Entropy of reference state").unwrap();
        assert_eq!(entropy.units.as_deref(), Some("J/(mol·K)"));

        let state = pb.property("Reference state").unwrap();
        assert_eq!(state.value().and_then(ScalarValue::as_str), Some("BCT_A5"));
        assert_eq!(pb.property("Mass of reference state").unwrap().units.as_deref(), Some("g/mol"));
    }

    #[test]
    fn species_get_normalized_name_and_formula() {
        let root = build(&pbte_database());
        let species: Vec<_> = root.sub_systems_tagged(SubsystemTag::Specie).collect();
        assert_eq!(species.len(), 1);
        assert_eq!(species[0].name(), Some("PbTe_L"));
        assert_eq!(species[0].chemical_formula.as_deref(), Some("PbTe"));
    }

    #[test]
    fn no_species_means_no_specie_sub_systems() {
        let mut db = pbte_database();
        db.species.clear();
        let root = build(&db);
        assert_eq!(root.sub_systems_tagged(SubsystemTag::Specie).count(), 0);
        assert_eq!(root.sub_systems_tagged(SubsystemTag::Element).count(), 3);
        assert_eq!(root.sub_systems_tagged(SubsystemTag::Phase).count(), 3);
    }

    #[test]
    fn phases_get_names_states_and_composition() {
        let root = build(&pbte_database());
        let phases: Vec<_> = root.sub_systems_tagged(SubsystemTag::Phase).collect();
        let names: Vec<_> = phases.iter().filter_map(|p| p.name()).collect();
        assert_eq!(names, vec!["HEXAGONAL_A8", "LIQUID", "PbTe"]);

        let hex = phases[0];
        assert!(hex.property("State").is_none());
        assert_eq!(
            hex.composition,
            vec![Composition {
                element: "(Te)".into(),
                ideal_atomic_percent: 100.0,
            }]
        );

        let liquid = phases[1];
        let state = liquid.property("State").unwrap();
        assert_eq!(state.value().and_then(ScalarValue::as_str), Some("Liquid"));
        assert_eq!(liquid.composition[0].element, "(Pb, Te, Pbte_L)");

        let pbte = phases[2];
        let percents: Vec<_> = pbte
            .composition
            .iter()
            .map(|c| c.ideal_atomic_percent)
            .collect();
        assert_eq!(percents, vec![50.0, 50.0]);
    }

    #[test]
    fn composition_percent_is_site_share_rounded() {
        let mut phase = Phase::new(None, "%", 3, vec![1.0, 1.0, 1.0]);
        phase.attach_constituents(vec![vec!["A".into()], vec!["B".into()], vec!["C".into()]]);
        let groups = composition(&phase, phase.constituents().unwrap());
        for group in &groups {
            assert_eq!(group.ideal_atomic_percent, 33.33);
        }

        let mut phase = Phase::new(None, "%", 2, vec![0.75, 0.25]);
        phase.attach_constituents(vec![vec!["FE".into()], vec!["C".into(), "VA".into()]]);
        let groups = composition(&phase, phase.constituents().unwrap());
        assert_eq!(groups[0].ideal_atomic_percent, 75.0);
        assert_eq!(groups[1].ideal_atomic_percent, 25.0);
        assert_eq!(groups[1].element, "(C, Va)");

        // 5/32 and 27/32 of the sites are 15.625 and 84.375 percent exactly.
        let mut phase = Phase::new(None, "%", 2, vec![5.0, 27.0]);
        phase.attach_constituents(vec![vec!["AU".into()], vec!["SI".into()]]);
        let groups = composition(&phase, phase.constituents().unwrap());
        assert_eq!(groups[0].ideal_atomic_percent, 15.62);
        assert_eq!(groups[1].ideal_atomic_percent, 84.38);
    }

    #[test]
    fn zero_site_total_gives_zero_percent() {
        let mut phase = Phase::new(None, "%", 1, vec![0.0]);
        phase.attach_constituents(vec![vec!["A".into()]]);
        let groups = composition(&phase, phase.constituents().unwrap());
        assert_eq!(groups[0].ideal_atomic_percent, 0.0);
    }

    #[test]
    fn declared_phase_without_constituents_has_no_composition() {
        let mut db = TdbDatabase::new();
        db.phases
            .insert("GAS".into(), Phase::new(Some('G'), "%", 1, vec![1.0]));
        let root = build(&db);
        let gas = &root.sub_systems[0];
        assert!(gas.composition.is_empty());
        assert_eq!(
            gas.property("State").and_then(|p| p.value()),
            Some(&ScalarValue::Text("Gas".into()))
        );
        assert_eq!(root.chemical_formula.as_deref(), Some(""));
    }
}
