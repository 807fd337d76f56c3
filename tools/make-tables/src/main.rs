use dti_paper_figures::{build_tables, format_build_report, BuildError, BuilderSettings};
use thiserror::Error;
use tracing::{info, Level};

/// Errors that can end a builder run
#[derive(Error, Debug)]
pub enum MakeTablesError {
    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}

type Result<T> = core::result::Result<T, MakeTablesError>;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = BuilderSettings::default();
    let written = build_tables(&settings)?;

    println!("{}", format_build_report(&written, Some("Generated tables")));
    info!(
        tables = written.len(),
        data_dir = %settings.data_dir.display(),
        "All paper tables generated"
    );

    Ok(())
}
