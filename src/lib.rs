//! Scaffold directories and empty files from a `tree`-style diagram.
//!
//! ```no_run
//! use treescaffold::scaffold::{NodeReport, create_tree};
//!
//! let diagram = "app/\n├── src/\n│   └── main.rs\n└── Cargo.toml\n";
//! let mut reports: Vec<NodeReport> = Vec::new();
//! let summary = create_tree(diagram, "/tmp/out", &mut reports)?;
//! println!("{} nodes", summary.total());
//! # Ok::<(), treescaffold::scaffold::MaterializeError>(())
//! ```

pub mod application;
pub mod cli;
pub mod diagram;
pub mod scaffold;
