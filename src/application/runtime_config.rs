use std::path::{Path, PathBuf};

use crate::cli::Cli;

const STDIN_MARKER: &str = "-";

/// Where the diagram text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub source: DiagramSource,
    pub root: PathBuf,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        let source = match cli.diagram {
            Some(path) if path != Path::new(STDIN_MARKER) => DiagramSource::File(path),
            _ => DiagramSource::Stdin,
        };

        Self {
            source,
            root: cli.root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    #[case(&["treescaffold"], DiagramSource::Stdin)]
    #[case(&["treescaffold", "-"], DiagramSource::Stdin)]
    #[case(&["treescaffold", "tree.txt"], DiagramSource::File(PathBuf::from("tree.txt")))]
    fn picks_diagram_source(#[case] args: &[&str], #[case] expected: DiagramSource) {
        let config: RuntimeConfig = Cli::parse_from(args).into();
        assert_eq!(config.source, expected);
    }
}
