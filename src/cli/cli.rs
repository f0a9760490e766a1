use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Create directories and empty files from a tree diagram
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Diagram file to read. Reads standard input when omitted or `-`
    pub diagram: Option<PathBuf>,

    /// Directory the tree is created under
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdin_and_current_dir() {
        let cli = Cli::try_parse_from(["treescaffold"]).expect("Failed to parse");
        assert_eq!(cli.diagram, None);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn accepts_diagram_root_and_level() {
        let cli = Cli::try_parse_from(["treescaffold", "tree.txt", "-r", "out", "-l", "debug"])
            .expect("Failed to parse");
        assert_eq!(cli.diagram, Some(PathBuf::from("tree.txt")));
        assert_eq!(cli.root, PathBuf::from("out"));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["treescaffold", "-l", "loud"]).is_err());
    }
}
