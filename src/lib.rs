//! # DTI Paper Figures
//! Builds the result tables of the knowledge-integrated drug-target interaction
//! paper and renders its figures from them.
//!
//! The crate has two stages, each driven by a binary under `tools/`:
//!
//! - `make-tables` calls [`builder::build_tables`], writing seven CSV files into `data/`.
//! - `render-figures` calls [`render::render_figures`], reading those files back and
//!   drawing `Figure3_Performance_Comparison.png` and `Figure4_Ablation_Study.png`.
//!
//! File names, headers and lookup keys shared by both stages live in [`schema`].

/// Names shared by the builder and the renderer.
pub mod schema;

/// Row types of the dataset files.
pub mod records;

/// The pathway × drug category attention matrix.
pub mod matrix;

/// CSV reading and writing with header checks.
pub mod table_io;

/// Writes every dataset file.
pub mod builder;

/// Loads the dataset files back for rendering.
pub mod loader;

/// Draws the figures.
pub mod render;

/// Console summary of a builder run.
pub mod report;

pub use builder::{build_tables, BuildError, BuilderSettings, WrittenTable};
pub use loader::{load_paper_data, LoadError, LookupError, PaperData};
pub use render::style::FigureStyle;
pub use render::{render_figures, OutputPaths, RenderError};
pub use report::format_build_report;
