use std::io::{self, Write};

use anyhow::Error;

use tdb_ingester::IngestError;
use tdb_ingester::io::Error as IoError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    let io_err = err.downcast_ref::<IoError>().or_else(|| {
        err.downcast_ref::<IngestError>().and_then(|e| match e {
            IngestError::Io(inner) => Some(inner),
            _ => None,
        })
    });

    if let Some(io_err) = io_err {
        io_hints(io_err, &mut hints);
    } else if let Some(ingest_err) = err.downcast_ref::<IngestError>() {
        ingest_hints(ingest_err, &mut hints);
    } else if let Some(std_err) = err.downcast_ref::<io::Error>() {
        std_io_hints(std_err, &mut hints);
    }

    hints
}

fn ingest_hints(err: &IngestError, hints: &mut Vec<String>) {
    match err {
        IngestError::InvalidArgument(_) => {
            hints.push("Pass exactly one TDB file per conversion".into());
            hints.push("Run tdbingest once per database to convert several".into());
        }
        IngestError::Config(_) => {
            hints.push("Check the [parse] section of the config file".into());
            hints.push(
                "keyword_match: exact | abbreviation | legacy, comments: indented | leading"
                    .into(),
            );
        }
        IngestError::Io(inner) => io_hints(inner, hints),
    }
}

fn io_hints(err: &IoError, hints: &mut Vec<String>) {
    if let Some(line) = err.line() {
        hints.push(format!("Inspect the statement starting near line {line}"));
    }

    match err {
        IoError::FileAccess { source, .. } | IoError::Io { source } => std_io_hints(source, hints),

        IoError::MalformedValue { keyword, field, .. } => {
            hints.push(format!("The {field} of a {keyword} statement must be a number"));
        }

        IoError::MissingField { keyword, .. } => {
            hints.push(format!("The {keyword} statement ends before all fields were read"));
            hints.push("Check for a '!' terminator placed too early".into());
        }

        IoError::MissingPhase { name, .. } => {
            hints.push(format!("Declare PHASE {name} before its CONSTITUENT statement"));
            hints.push("Check that both statements spell the phase name the same way".into());
        }

        IoError::SublatticeMismatch { .. } => {
            hints.push("The sublattice count of the PHASE statement must match".into());
            hints.push("its site ratios and the ':'-separated CONSTITUENT groups".into());
        }

        IoError::Json(_) => {
            hints.push("Serializing the record to JSON failed".into());
            hints.push("Check the output path and available disk space".into());
        }
    }
}

fn std_io_hints(source: &io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }

        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }

        ErrorKind::InvalidData => {
            hints.push("File is not valid UTF-8 text".into());
            hints.push("Re-encode the database as UTF-8 or ASCII".into());
        }

        ErrorKind::BrokenPipe => {
            hints.push("Output consumer terminated early".into());
            hints.push("This may occur when piping to commands like `head`".into());
        }

        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}
