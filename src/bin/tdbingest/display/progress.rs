use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Stages of one conversion, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configure,
    Parse,
    Build,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Configure, Stage::Parse, Stage::Build, Stage::Write];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Configure => "Loading configuration",
            Stage::Parse => "Parsing TDB statements",
            Stage::Build => "Building chemical system",
            Stage::Write => "Writing PIF JSON",
        }
    }

    fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).map_or(0, |i| i + 1)
    }
}

/// Stage reporting on stderr. A non-interactive run prints nothing.
pub struct Progress {
    interactive: bool,
    spinner: Option<ProgressBar>,
    started: Instant,
    stage_started: Instant,
}

impl Progress {
    pub fn new(interactive: bool) -> Self {
        let now = Instant::now();
        Self {
            interactive,
            spinner: None,
            started: now,
            stage_started: now,
        }
    }

    pub fn begin(&mut self, stage: Stage) {
        self.clear();
        self.stage_started = Instant::now();
        if self.interactive {
            self.spinner = Some(spinner(format!(
                "[{}/{}] {}...",
                stage.number(),
                Stage::ALL.len(),
                stage.label()
            )));
        }
    }

    pub fn done(&mut self, stage: Stage, report: &[String]) {
        self.clear();
        if !self.interactive {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", stage_line(stage, self.stage_started.elapsed()));
        for line in report {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {line}");
        }
    }

    pub fn finish(mut self, database: &str) {
        self.clear();
        if !self.interactive {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "{}", footer_line(database, self.started.elapsed()));
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(bar) = self.spinner.take() {
            bar.finish_and_clear();
        }
    }
}

fn spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    bar.enable_steady_tick(Duration::from_millis(80));
    bar.set_message(message);
    bar
}

fn stage_line(stage: Stage, elapsed: Duration) -> String {
    format!(
        "  \x1b[32m✓\x1b[0m {:<44} {:>5.2}s",
        stage.label(),
        elapsed.as_secs_f64()
    )
}

fn footer_line(database: &str, elapsed: Duration) -> String {
    let title = format!("{database} converted");
    format!(
        "  \x1b[32m✓\x1b[0m {:<38} Total: {:.2}s",
        title,
        elapsed.as_secs_f64()
    )
}
