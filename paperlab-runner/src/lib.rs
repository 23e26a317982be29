//! PaperLab Runner — batch orchestration, summaries, and export.
//!
//! Fans a basket of symbols and a set of strategies out over the rayon
//! pool (each run is independent and single-threaded internally),
//! aggregates every run's step sequence into summary statistics, and
//! renders/exports the sorted results table.

pub mod batch;
pub mod config;
pub mod export;
pub mod progress;
pub mod summary;

pub use batch::{run_batch, BatchRow, RunOutcome};
pub use config::{BatchConfig, ConfigError};
pub use export::{export_csv, export_json, render_table};
pub use progress::{BatchProgress, SilentProgress, StdoutProgress};
pub use summary::StrategySummary;
