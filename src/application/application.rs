use std::{
    fs, io,
    path::{Path, PathBuf},
};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::console_reporter::ConsoleReporter;
use crate::application::{DiagramSource, RuntimeConfig};
use crate::scaffold::{MaterializeError, ProgressReporter, ScaffoldSummary, create_tree};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<ScaffoldSummary, ApplicationError> {
        Self::run_with(app_config, &mut ConsoleReporter::stdout())
    }

    pub fn run_with(
        app_config: impl Into<RuntimeConfig>,
        reporter: &mut impl ProgressReporter,
    ) -> Result<ScaffoldSummary, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let diagram = read_diagram(&app_config.source)?;
        debug!("Read diagram: {} bytes", diagram.len());

        let root = std::path::absolute(&app_config.root).context(ResolveRootSnafu {
            root: app_config.root.clone(),
        })?;

        create_tree(&diagram, root, reporter).context(ScaffoldSnafu)
    }
}

fn read_diagram(source: &DiagramSource) -> Result<String, ApplicationError> {
    match source {
        DiagramSource::File(path) => read_diagram_file(path),
        DiagramSource::Stdin => io::read_to_string(io::stdin()).context(ReadStdinSnafu),
    }
}

fn read_diagram_file(path: &Path) -> Result<String, ApplicationError> {
    debug!("Opening diagram file: {}", path.display());
    fs::read_to_string(path).context(ReadDiagramSnafu { path })
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read diagram file '{}'", path.display()))]
    ReadDiagramError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read diagram from standard input"))]
    ReadStdinError { source: io::Error },
    #[snafu(display("Failed to resolve root directory '{}'", root.display()))]
    ResolveRootError { root: PathBuf, source: io::Error },
    #[snafu(display("Critical failure encountered while creating the tree"))]
    ScaffoldError { source: MaterializeError },
}
