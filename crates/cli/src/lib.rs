pub mod pipeline;
pub mod report;

pub use pipeline::{compile, Artifacts, BuildError, Orchestrator, OutputPaths, BANNER};
pub use report::BuildReport;
