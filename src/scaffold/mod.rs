//! Materializes parsed diagram entries as directories and empty files.

mod depth_table;
mod materializer;
mod report;

pub use depth_table::DepthPathTable;
pub use materializer::{MaterializeError, Materializer, create_tree};
pub use report::{NodeOutcome, NodeReport, ProgressReporter, ScaffoldSummary};
