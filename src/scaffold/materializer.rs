use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use snafu::Snafu;
use tracing::{debug, info};

use super::{DepthPathTable, NodeOutcome, NodeReport, ProgressReporter, ScaffoldSummary};
use crate::diagram::{Diagram, TreeEntry};

/// Parses `diagram` and materializes it under `base`.
pub fn create_tree(
    diagram: &str,
    base: impl Into<PathBuf>,
    reporter: &mut impl ProgressReporter,
) -> Result<ScaffoldSummary, MaterializeError> {
    Materializer::new(base).materialize(&Diagram::new(diagram), reporter)
}

/// Creates the directories and empty files implied by a sequence of entries.
#[derive(Debug, Clone)]
pub struct Materializer {
    base: PathBuf,
}

impl Materializer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Processes entries in order, stopping at the first filesystem failure.
    ///
    /// Nodes created before a failure are kept; rerunning is safe because
    /// directories are created idempotently and existing files are never touched.
    pub fn materialize<'a>(
        &self,
        entries: impl IntoIterator<Item = TreeEntry<'a>>,
        reporter: &mut impl ProgressReporter,
    ) -> Result<ScaffoldSummary, MaterializeError> {
        debug!("Materializing tree under {}", self.base.display());

        let mut table = DepthPathTable::new();
        let mut summary = ScaffoldSummary::default();

        for entry in entries {
            let full_path = table.resolve(&entry, &self.base);
            let outcome = if entry.is_directory() {
                create_directory(&full_path)?
            } else {
                create_file(&full_path)?
            };

            let report = NodeReport::new(outcome, full_path);
            info!("{}", report);
            summary.record(outcome);
            reporter.node(&report);
        }

        debug!("Materialized {} nodes", summary.total());
        reporter.finished(&summary);
        Ok(summary)
    }
}

fn create_directory(path: &Path) -> Result<NodeOutcome, MaterializeError> {
    fs::create_dir_all(path).map_err(|source| MaterializeError::from_io(path, source))?;
    Ok(NodeOutcome::DirectoryCreated)
}

fn create_file(path: &Path) -> Result<NodeOutcome, MaterializeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| MaterializeError::from_io(parent, source))?;
    }

    // create_new never truncates: an existing node surfaces as AlreadyExists.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(NodeOutcome::FileCreated),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(NodeOutcome::FileAlreadyExists),
        Err(source) => Err(MaterializeError::from_io(path, source)),
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Permission denied while creating '{}'", path.display()))]
    PermissionDenied { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create '{}'", path.display()))]
    Io { path: PathBuf, source: io::Error },
}

impl MaterializeError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. } | Self::Io { path, .. } => path,
        }
    }
}
