use dti_paper_figures::{render_figures, FigureStyle, OutputPaths, RenderError};
use thiserror::Error;
use tracing::Level;

/// Errors that can end a renderer run
#[derive(Error, Debug)]
pub enum RenderFiguresError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

type Result<T> = core::result::Result<T, RenderFiguresError>;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Fixed paths: tables from ./data, figures into the working directory.
    let written = render_figures(&OutputPaths::default(), &FigureStyle::default())?;
    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}
