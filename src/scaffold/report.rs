use std::path::PathBuf;

use derive_more::Display;

/// What happened to a single diagram entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeOutcome {
    #[display("Created directory")]
    DirectoryCreated,
    #[display("Created file")]
    FileCreated,
    #[display("File already exists")]
    FileAlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{outcome}: {}", path.display())]
pub struct NodeReport {
    pub outcome: NodeOutcome,
    pub path: PathBuf,
}

impl NodeReport {
    pub fn new(outcome: NodeOutcome, path: impl Into<PathBuf>) -> Self {
        Self {
            outcome,
            path: path.into(),
        }
    }
}

/// Outcome counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub directories_created: usize,
    pub files_created: usize,
    pub files_existing: usize,
}

impl ScaffoldSummary {
    pub fn record(&mut self, outcome: NodeOutcome) {
        match outcome {
            NodeOutcome::DirectoryCreated => self.directories_created += 1,
            NodeOutcome::FileCreated => self.files_created += 1,
            NodeOutcome::FileAlreadyExists => self.files_existing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.directories_created + self.files_created + self.files_existing
    }
}

/// Receives progress while a tree is materialized.
pub trait ProgressReporter {
    fn node(&mut self, report: &NodeReport);
    fn finished(&mut self, summary: &ScaffoldSummary);
}

/// Collects reports in memory.
impl ProgressReporter for Vec<NodeReport> {
    fn node(&mut self, report: &NodeReport) {
        self.push(report.clone());
    }

    fn finished(&mut self, _summary: &ScaffoldSummary) {}
}
