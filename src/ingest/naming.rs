//! Name and formula normalization rules.
//!
//! TDB identifiers are upper case; the record wants chemical casing. Phase
//! names that describe a crystal structure or a state keep their upper-case
//! spelling, names that read as compound formulas are title-cased, and any
//! embedded element symbol is re-cased to its proper form.

use crate::model::name::title_case;

/// Substrings marking a phase name as a structure or state designation.
pub const STRUCTURE_KEYWORDS: [&str; 14] = [
    "LIQUID",
    "GAS",
    "HCP",
    "FCC",
    "BCC",
    "SIGMA",
    "LAVES",
    "RHOMBOHEDRAL",
    "HEXAGONAL",
    "DIAMOND",
    "TETRAG",
    "CUB",
    "BCT",
    "ORTHO",
];

/// Phase names fixed up after normalization.
pub const PHASE_NAME_CORRECTIONS: [(&str, &str); 1] = [("HCP_ZN", "HCP_Zn")];

/// Model code to physical state.
pub const MODEL_CODE_STATES: [(char, &str); 7] = [
    ('G', "Gas"),
    ('A', "Aqueous"),
    ('Y', "Ionic liquid"),
    ('L', "Liquid"),
    ('I', "Ionic solid"),
    ('F', "fcc or hcp ordered"),
    ('B', "bcc ordered"),
];

/// State reported for a model code missing from [`MODEL_CODE_STATES`].
pub const FALLBACK_STATE: &str = "Solid";

pub fn state_label(code: char) -> &'static str {
    MODEL_CODE_STATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_STATE)
}

/// Replaces lower-case occurrences of each symbol with the symbol itself.
///
/// Symbols are expected title-cased (`Pb`, `Te`); upper-case text is left
/// untouched so structure names such as `HEXAGONAL_A8` survive.
pub fn recase_symbols<'a>(text: &str, symbols: impl IntoIterator<Item = &'a str>) -> String {
    symbols.into_iter().fold(text.to_string(), |acc, symbol| {
        let lower = symbol.to_ascii_lowercase();
        if acc.contains(&lower) {
            acc.replace(&lower, symbol)
        } else {
            acc
        }
    })
}

/// Display name of a species, e.g. `PBTE_L` → `PbTe_L`.
pub fn species_name<'a>(raw: &str, symbols: impl IntoIterator<Item = &'a str>) -> String {
    recase_symbols(&title_case(raw), symbols)
}

/// Chemical formula of a species with unit subscripts dropped, e.g.
/// `PB1TE1` → `PbTe`.
///
/// The formula is split into element symbols against `symbols` (title-cased,
/// longest match first, case-insensitive). Letters matching no symbol form a
/// capitalized run that ends where a declared symbol or a lower-to-upper case
/// change begins. A unit subscript is dropped only when the shorter text still
/// splits into the same symbols: with `Co` declared next to `C` and `O`,
/// `C1O1` stays `C1O1` because `CO` would read as cobalt. Applying the
/// function to its own output returns that output unchanged.
pub fn species_formula<'a>(raw: &str, symbols: impl IntoIterator<Item = &'a str>) -> String {
    let symbols: Vec<&str> = symbols.into_iter().filter(|s| !s.is_empty()).collect();
    let parts = formula_parts(raw, &symbols);

    let compact = render_formula(&parts, false);
    if without_units(&formula_parts(&compact, &symbols)) == without_units(&parts) {
        compact
    } else {
        render_formula(&parts, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormulaPart {
    Symbol(String),
    Count(String),
    Other(char),
}

impl FormulaPart {
    fn is_unit(&self) -> bool {
        matches!(self, FormulaPart::Count(count) if count == "1")
    }
}

fn formula_parts(text: &str, symbols: &[&str]) -> Vec<FormulaPart> {
    let mut parts = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let len = if ch.is_ascii_alphabetic() {
            match longest_symbol(rest, symbols) {
                Some(symbol) => {
                    parts.push(FormulaPart::Symbol(symbol.to_string()));
                    symbol.len()
                }
                None => {
                    let len = unknown_run_len(rest, symbols);
                    parts.push(FormulaPart::Symbol(capitalize(&rest[..len])));
                    len
                }
            }
        } else if ch.is_ascii_digit() {
            let len = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            parts.push(FormulaPart::Count(rest[..len].to_string()));
            len
        } else {
            parts.push(FormulaPart::Other(ch));
            ch.len_utf8()
        };
        rest = &rest[len..];
    }

    parts
}

fn longest_symbol<'a>(text: &str, symbols: &[&'a str]) -> Option<&'a str> {
    symbols
        .iter()
        .copied()
        .filter(|symbol| {
            text.get(..symbol.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(symbol))
        })
        .max_by_key(|symbol| symbol.len())
}

/// Length of a letter run that starts with an ASCII letter matching no symbol.
fn unknown_run_len(text: &str, symbols: &[&str]) -> usize {
    let bytes = text.as_bytes();
    let mut len = 1;
    while len < bytes.len()
        && bytes[len].is_ascii_alphabetic()
        && !(bytes[len].is_ascii_uppercase() && bytes[len - 1].is_ascii_lowercase())
        && longest_symbol(&text[len..], symbols).is_none()
    {
        len += 1;
    }
    len
}

fn capitalize(run: &str) -> String {
    let mut out = run.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

fn without_units(parts: &[FormulaPart]) -> Vec<&FormulaPart> {
    parts.iter().filter(|part| !part.is_unit()).collect()
}

fn render_formula(parts: &[FormulaPart], keep_units: bool) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            FormulaPart::Count(_) if !keep_units && part.is_unit() => {}
            FormulaPart::Symbol(text) | FormulaPart::Count(text) => out.push_str(text),
            FormulaPart::Other(ch) => out.push(*ch),
        }
    }
    out
}

pub fn phase_name<'a>(raw: &str, symbols: impl IntoIterator<Item = &'a str>) -> String {
    let cased = if STRUCTURE_KEYWORDS.iter().any(|kw| raw.contains(kw)) {
        raw.to_string()
    } else {
        title_case(raw)
    };

    let name = recase_symbols(&cased, symbols);

    PHASE_NAME_CORRECTIONS
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or(name)
}

/// Label of one sublattice, e.g. `["SI%", "VA"]` → `(Si, Va)`.
pub fn constituent_label(constituents: &[String]) -> String {
    let names: Vec<String> = constituents
        .iter()
        .map(|c| title_case(c).replace('%', ""))
        .collect();
    format!("({})", names.join(", "))
}
