//! Output record tree.
//!
//! The shapes follow the generic PIF "chemical system" schema: a system has
//! identifiers, names, a formula, properties, a composition and nested
//! sub-systems. Field names serialize in camelCase and empty collections are
//! omitted, matching PIF JSON documents.

use serde::Serialize;
use std::fmt;

/// PIF category string of a chemical system.
pub const CHEMICAL_SYSTEM_CATEGORY: &str = "system.chemical";

/// Kind of sub-system; stored as the first tag of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsystemTag {
    Element,
    Specie,
    Phase,
}

impl SubsystemTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubsystemTag::Element => "Element",
            SubsystemTag::Specie => "Specie",
            SubsystemTag::Phase => "Phase",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Element" => Some(SubsystemTag::Element),
            "Specie" => Some(SubsystemTag::Specie),
            "Phase" => Some(SubsystemTag::Phase),
            _ => None,
        }
    }
}

impl fmt::Display for SubsystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalSystem {
    pub category: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Id>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub composition: Vec<Composition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_systems: Vec<ChemicalSystem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for ChemicalSystem {
    fn default() -> Self {
        Self {
            category: CHEMICAL_SYSTEM_CATEGORY,
            ids: Vec::new(),
            names: Vec::new(),
            chemical_formula: None,
            composition: Vec::new(),
            properties: Vec::new(),
            sub_systems: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl ChemicalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sub-system carrying `tag`.
    pub fn tagged(tag: SubsystemTag) -> Self {
        Self {
            tags: vec![tag.as_str().to_string()],
            ..Self::default()
        }
    }

    /// The sub-system kind, read from the first tag.
    pub fn tag(&self) -> Option<SubsystemTag> {
        self.tags.first().and_then(|t| SubsystemTag::from_tag(t))
    }

    /// The first name, if any.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Direct sub-systems carrying `tag`, in order.
    pub fn sub_systems_tagged(&self, tag: SubsystemTag) -> impl Iterator<Item = &ChemicalSystem> {
        self.sub_systems
            .iter()
            .filter(move |s| s.tag() == Some(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Id {
    pub name: String,
    pub value: String,
}

impl Id {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scalars: Vec<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileReference>,
}

impl Property {
    /// A property holding a single scalar.
    pub fn scalar(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            scalars: vec![Scalar {
                value: value.into(),
            }],
            units: None,
            files: Vec::new(),
        }
    }

    /// A property pointing at a file.
    pub fn file(name: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scalars: Vec::new(),
            units: None,
            files: vec![FileReference {
                relative_path: relative_path.into(),
            }],
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Value of the first scalar.
    pub fn value(&self) -> Option<&ScalarValue> {
        self.scalars.first().map(|s| &s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scalar {
    pub value: ScalarValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
}

impl ScalarValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(v) => Some(*v),
            ScalarValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Number(_) => None,
            ScalarValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Number(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub relative_path: String,
}

/// One sublattice of a phase: its occupants and its share of all sites.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub element: String,
    pub ideal_atomic_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_system_reports_its_tag() {
        let sys = ChemicalSystem::tagged(SubsystemTag::Phase);
        assert_eq!(sys.tags, vec!["Phase"]);
        assert_eq!(sys.tag(), Some(SubsystemTag::Phase));
        assert_eq!(sys.category, CHEMICAL_SYSTEM_CATEGORY);
    }

    #[test]
    fn untagged_system_has_no_tag() {
        assert_eq!(ChemicalSystem::new().tag(), None);
    }

    #[test]
    fn property_helpers_build_scalars_and_files() {
        let mass = Property::scalar("Mass of reference state", 207.2).with_units("g/mol");
        assert_eq!(mass.value().and_then(ScalarValue::as_f64), Some(207.2));
        assert_eq!(mass.units.as_deref(), Some("g/mol"));
        assert!(mass.files.is_empty());

        let file = Property::file("Thermodynamic database", "db/PbTe.TDB");
        assert!(file.value().is_none());
        assert_eq!(file.files[0].relative_path, "db/PbTe.TDB");
    }

    #[test]
    fn sub_systems_tagged_filters_in_order() {
        let mut root = ChemicalSystem::new();
        let mut a = ChemicalSystem::tagged(SubsystemTag::Element);
        a.chemical_formula = Some("Pb".into());
        let mut b = ChemicalSystem::tagged(SubsystemTag::Element);
        b.chemical_formula = Some("Te".into());
        root.sub_systems = vec![a, ChemicalSystem::tagged(SubsystemTag::Phase), b];

        let formulas: Vec<_> = root
            .sub_systems_tagged(SubsystemTag::Element)
            .map(|s| s.chemical_formula.as_deref())
            .collect();
        assert_eq!(formulas, vec![Some("Pb"), Some("Te")]);
    }

    #[test]
    fn serializes_with_camel_case_and_omits_empty_fields() {
        let mut sys = ChemicalSystem::tagged(SubsystemTag::Phase);
        sys.names.push("HEXAGONAL_A8".into());
        sys.composition.push(Composition {
            element: "(Te)".into(),
            ideal_atomic_percent: 100.0,
        });
        sys.properties.push(Property::scalar("State", "Liquid"));

        let json = serde_json::to_value(&sys).unwrap();
        assert_eq!(json["category"], "system.chemical");
        assert_eq!(json["names"][0], "HEXAGONAL_A8");
        assert_eq!(json["composition"][0]["idealAtomicPercent"], 100.0);
        assert_eq!(json["properties"][0]["scalars"][0]["value"], "Liquid");
        assert!(json.get("subSystems").is_none());
        assert!(json.get("chemicalFormula").is_none());
        assert!(json["properties"][0].get("units").is_none());
    }
}
