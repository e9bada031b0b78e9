use breeze_cli::{Orchestrator, OutputPaths};
use breeze_core::JsonFileSource;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "breeze.config.json";
const DEFAULT_OUT_DIR: &str = "dist";

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = JsonFileSource::new(env_path("BREEZE_CONFIG", DEFAULT_CONFIG));
    tracing::info!(config = %source.path().display(), "loading theme config");
    let outputs = OutputPaths::in_dir(env_path("BREEZE_OUT_DIR", DEFAULT_OUT_DIR));
    let orchestrator = Orchestrator::new(source, outputs);

    match orchestrator.run().await {
        Ok(report) => {
            let outputs = orchestrator.outputs();
            println!(
                "✓ Built {} and {}",
                outputs.readable.display(),
                outputs.minified.display()
            );
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("build failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
