mod application;
mod console_reporter;
pub mod data;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use console_reporter::ConsoleReporter;
pub use runtime_config::{DiagramSource, RuntimeConfig};
