//! Progress callbacks for batch runs.
//!
//! The runner reports through this trait instead of printing directly, so
//! a CLI can show progress while tests stay silent. Callbacks may fire from
//! worker threads in any order.

use crate::batch::RunOutcome;

/// Observer for a batch of (symbol × strategy) runs.
pub trait BatchProgress: Send + Sync {
    /// Called when a run starts.
    fn on_start(&self, symbol: &str, strategy: &str, index: usize, total: usize);

    /// Called when a run completes.
    fn on_complete(&self, symbol: &str, strategy: &str, outcome: &RunOutcome);

    /// Called once the whole batch is done.
    fn on_batch_complete(&self, completed: usize, no_data: usize, total: usize);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl BatchProgress for StdoutProgress {
    fn on_start(&self, symbol: &str, strategy: &str, index: usize, total: usize) {
        println!("[{}/{}] Testing {symbol} × {strategy}...", index + 1, total);
    }

    fn on_complete(&self, symbol: &str, strategy: &str, outcome: &RunOutcome) {
        match outcome {
            RunOutcome::Completed(summary) => println!(
                "  OK: {symbol} × {strategy}: {} predictions, {:.2}% hit rate, {:+.2}% P/L",
                summary.prediction_count, summary.hit_rate_pct, summary.profit_pct
            ),
            RunOutcome::NoData => println!("  NO DATA: {symbol} × {strategy}"),
        }
    }

    fn on_batch_complete(&self, completed: usize, no_data: usize, total: usize) {
        println!("\nBatch complete: {completed}/{total} runs produced results, {no_data} had no data");
    }
}

/// No-op reporter for tests and benchmarks.
pub struct SilentProgress;

impl BatchProgress for SilentProgress {
    fn on_start(&self, _symbol: &str, _strategy: &str, _index: usize, _total: usize) {}
    fn on_complete(&self, _symbol: &str, _strategy: &str, _outcome: &RunOutcome) {}
    fn on_batch_complete(&self, _completed: usize, _no_data: usize, _total: usize) {}
}
