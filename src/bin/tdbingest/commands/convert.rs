use anyhow::{Context, Result};

use tdb_ingester::io::{PifStyle, pif, tdb};
use tdb_ingester::{ChemicalSystem, IngestConfig, IngestError, TdbDatabase, build_record};

use crate::cli::Cli;
use crate::config::build_ingest_config;
use crate::display::{Context as DisplayContext, Progress, Stage, print_record_summary};
use crate::io::{create_output, stdout_is_tty};
use crate::util::text::count_noun;

pub fn run_convert(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive);

    progress.begin(Stage::Configure);
    let config = build_ingest_config(&cli.parse)?;
    progress.done(Stage::Configure, &config_details(&cli, &config));

    let [path] = cli.files.as_slice() else {
        return Err(IngestError::file_count(cli.files.len()).into());
    };

    progress.begin(Stage::Parse);
    let database = tdb::read_file(path, &config.parse).context("Conversion failed")?;
    progress.done(Stage::Parse, &database_details(&database));

    progress.begin(Stage::Build);
    let record = build_record(&database, &cli.name, path);
    progress.done(Stage::Build, &record_details(&record));

    // Skip the summary when JSON goes to the same terminal.
    if ctx.interactive && (cli.output.output.is_some() || !stdout_is_tty()) {
        print_record_summary(&record);
    }

    progress.begin(Stage::Write);
    let style = if cli.output.compact {
        PifStyle::Compact
    } else {
        PifStyle::Pretty
    };
    let out = create_output(cli.output.output.as_deref())?;
    pif::write(out, &record, style).context("Failed to write output")?;

    let target = match &cli.output.output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    progress.done(Stage::Write, &[format!("{target} ({style} style)")]);

    progress.finish(&cli.name);

    Ok(())
}

fn config_details(cli: &Cli, config: &IngestConfig) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(path) = &cli.parse.config {
        details.push(format!("Read {}", path.display()));
    }
    details.push(format!("Keyword matching: {}", config.parse.keyword_match));
    details.push(format!("Comment lines: {}", config.parse.comments));

    details
}

fn database_details(db: &TdbDatabase) -> Vec<String> {
    let mut details = vec![format!(
        "Read {}, {}, {}",
        count_noun(db.element_count(), "ELEMENT statement", "ELEMENT statements"),
        count_noun(db.species_count(), "SPECIES statement", "SPECIES statements"),
        count_noun(db.phase_count(), "PHASE statement", "PHASE statements"),
    )];

    let open = db.phases.values().filter(|p| !p.has_constituents()).count();
    if open > 0 {
        details.push(format!(
            "{} without CONSTITUENT",
            count_noun(open, "phase", "phases")
        ));
    }

    details
}

fn record_details(record: &ChemicalSystem) -> Vec<String> {
    vec![
        format!("{} sub-systems", record.sub_systems.len()),
        format!(
            "System formula {}",
            record.chemical_formula.as_deref().unwrap_or("-")
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdb_ingester::io::ParseConfig;

    const SOURCE: &str = "\
ELEMENT PB BCT_A5 207.2 6870 64.785 !
ELEMENT TE HEXAGONAL_A8 127.6 6121.2 49.497 !
PHASE LIQUID:L % 1 1.0 !
PHASE PBTE % 2 1 1 !
CONSTITUENT PBTE :PB:TE: !
";

    #[test]
    fn database_details_count_statements_and_open_phases() {
        let db = tdb::parse_str(SOURCE, &ParseConfig::default()).unwrap();
        assert_eq!(
            database_details(&db),
            vec![
                "Read 2 ELEMENT statements, 0 SPECIES statements, 2 PHASE statements",
                "1 phase without CONSTITUENT",
            ]
        );
    }

    #[test]
    fn record_details_report_size_and_formula() {
        let db = tdb::parse_str(SOURCE, &ParseConfig::default()).unwrap();
        let record = build_record(&db, "PbTe", std::path::Path::new("PbTe.TDB"));
        assert_eq!(
            record_details(&record),
            vec!["4 sub-systems", "System formula PbTe"]
        );
    }
}
