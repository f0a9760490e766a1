use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use supports_color::Stream;
use tracing::warn;

use crate::scaffold::{NodeOutcome, NodeReport, ProgressReporter, ScaffoldSummary};

/// Prints one line per node and a completion line to stdout.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        colored::control::set_override(supports_color::on(Stream::Stdout).is_some());
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        // Progress output is best effort.
        if let Err(err) = writeln!(self.out, "{line}") {
            warn!("Failed to write progress: {}", err);
        }
    }
}

fn styled_outcome(outcome: NodeOutcome) -> ColoredString {
    let label = outcome.to_string();
    match outcome {
        NodeOutcome::DirectoryCreated => label.blue(),
        NodeOutcome::FileCreated => label.green(),
        NodeOutcome::FileAlreadyExists => label.yellow(),
    }
}

impl<W: Write> ProgressReporter for ConsoleReporter<W> {
    fn node(&mut self, report: &NodeReport) {
        let outcome = styled_outcome(report.outcome);
        self.emit(format_args!("{}: {}", outcome, report.path.display()));
    }

    fn finished(&mut self, summary: &ScaffoldSummary) {
        let done = "Directory structure created successfully!".bold();
        self.emit(format_args!("{done}"));
        self.emit(format_args!(
            "{} directories, {} files created, {} files already existed",
            summary.directories_created, summary.files_created, summary.files_existing
        ));
    }
}
