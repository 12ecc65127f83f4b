use std::io::{self, Write};

use tdb_ingester::{ChemicalSystem, DATABASE_ID_NAME, SubsystemTag};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_record_summary(record: &ChemicalSystem) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    print_kv_table(&mut out, "Chemical System", &summary_rows(record));
    let _ = writeln!(out);

    let phases = phase_rows(record);
    if !phases.is_empty() {
        let rows: Vec<(&str, String)> = phases.iter().map(|(n, v)| (n.as_str(), v.clone())).collect();
        print_kv_table(&mut out, "Phases", &rows);
        let _ = writeln!(out);
    }
}

fn summary_rows(record: &ChemicalSystem) -> Vec<(&'static str, String)> {
    let database = record
        .ids
        .iter()
        .find(|id| id.name == DATABASE_ID_NAME)
        .map(|id| id.value.clone())
        .unwrap_or_default();

    let count = |tag: SubsystemTag| record.sub_systems_tagged(tag).count().to_string();

    vec![
        ("Database", database),
        (
            "Formula",
            record.chemical_formula.clone().unwrap_or_default(),
        ),
        ("Elements", count(SubsystemTag::Element)),
        ("Species", count(SubsystemTag::Specie)),
        ("Phases", count(SubsystemTag::Phase)),
    ]
}

/// One row per phase: its name and its sublattice labels.
fn phase_rows(record: &ChemicalSystem) -> Vec<(String, String)> {
    record
        .sub_systems_tagged(SubsystemTag::Phase)
        .map(|phase| {
            let sublattices = if phase.composition.is_empty() {
                "-".to_string()
            } else {
                phase
                    .composition
                    .iter()
                    .map(|c| format!("{} {:.2}%", c.element, c.ideal_atomic_percent))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            (phase.name().unwrap_or_default().to_string(), sublattices)
        })
        .collect()
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}┌{}┬{}┐", INDENT, k_line, v_line);
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Name", "Value"
    );
    let _ = writeln!(out, "{}├{}┼{}┤", INDENT, k_line, v_line);

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(out, "{}└{}┴{}┘", INDENT, k_line, v_line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdb_ingester::{Composition, Id};

    fn record() -> ChemicalSystem {
        let mut root = ChemicalSystem::new();
        root.ids.push(Id::new(DATABASE_ID_NAME, "2017Bajaj"));
        root.chemical_formula = Some("PbTe".into());
        root.sub_systems.push(ChemicalSystem::tagged(SubsystemTag::Element));

        let mut phase = ChemicalSystem::tagged(SubsystemTag::Phase);
        phase.names.push("PbTe".into());
        phase.composition = vec![
            Composition {
                element: "(Pb)".into(),
                ideal_atomic_percent: 50.0,
            },
            Composition {
                element: "(Te)".into(),
                ideal_atomic_percent: 50.0,
            },
        ];
        root.sub_systems.push(phase);

        let mut gas = ChemicalSystem::tagged(SubsystemTag::Phase);
        gas.names.push("GAS".into());
        root.sub_systems.push(gas);
        root
    }

    #[test]
    fn summary_counts_sub_systems() {
        let rows = summary_rows(&record());
        assert_eq!(rows[0], ("Database", "2017Bajaj".to_string()));
        assert_eq!(rows[1], ("Formula", "PbTe".to_string()));
        assert_eq!(rows[2], ("Elements", "1".to_string()));
        assert_eq!(rows[3], ("Species", "0".to_string()));
        assert_eq!(rows[4], ("Phases", "2".to_string()));
    }

    #[test]
    fn phase_rows_list_sublattices() {
        let rows = phase_rows(&record());
        assert_eq!(rows[0], ("PbTe".to_string(), "(Pb) 50.00% (Te) 50.00%".to_string()));
        assert_eq!(rows[1], ("GAS".to_string(), "-".to_string()));
    }

    #[test]
    fn kv_table_renders_rows() {
        let mut buf = Vec::new();
        print_kv_table(&mut buf, "Chemical System", &[("Database", "x".to_string())]);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Chemical System"));
        assert!(text.contains("Database"));
        assert_eq!(text.lines().count(), 6);
    }
}
