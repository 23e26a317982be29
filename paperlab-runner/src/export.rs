//! Results-table rendering and export — text, CSV, and JSON.
//!
//! All three views take the already-sorted row list; none of them re-order
//! or filter. NoData rows appear in every format with an explicit status so
//! a symbol that produced nothing is visible rather than missing.

use anyhow::{Context, Result};

use crate::batch::{BatchRow, RunOutcome};

/// Render the results table as aligned plain text.
pub fn render_table(rows: &[BatchRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<14} {:>11} {:>6} {:>13} {:>15} {:>10}\n",
        "Symbol", "Strategy", "Predictions", "Hits", "Hit Rate (%)", "Final Balance", "P/L (%)"
    ));
    out.push_str(&format!("{}\n", "-".repeat(88)));

    for row in rows {
        match &row.outcome {
            RunOutcome::Completed(s) => out.push_str(&format!(
                "{:<12} {:<14} {:>11} {:>6} {:>13.2} {:>15.2} {:>10.2}\n",
                row.symbol,
                row.strategy.name(),
                s.prediction_count,
                s.hit_count,
                s.hit_rate_pct,
                s.final_balance,
                s.profit_pct
            )),
            RunOutcome::NoData => out.push_str(&format!(
                "{:<12} {:<14} {:>11} {:>6} {:>13} {:>15} {:>10}\n",
                row.symbol,
                row.strategy.name(),
                "-",
                "-",
                "-",
                "no data",
                "-"
            )),
        }
    }

    out
}

/// Export the results table as CSV.
///
/// Columns: symbol, strategy, predictions, hits, hit_rate_pct,
/// final_balance, profit_pct, status. NoData rows leave the numeric
/// columns empty.
pub fn export_csv(rows: &[BatchRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "symbol",
        "strategy",
        "predictions",
        "hits",
        "hit_rate_pct",
        "final_balance",
        "profit_pct",
        "status",
    ])?;

    for row in rows {
        match &row.outcome {
            RunOutcome::Completed(s) => wtr.write_record([
                row.symbol.as_str(),
                row.strategy.name(),
                &s.prediction_count.to_string(),
                &s.hit_count.to_string(),
                &format!("{:.2}", s.hit_rate_pct),
                &format!("{:.2}", s.final_balance),
                &format!("{:.2}", s.profit_pct),
                "completed",
            ])?,
            RunOutcome::NoData => wtr.write_record([
                row.symbol.as_str(),
                row.strategy.name(),
                "",
                "",
                "",
                "",
                "",
                "no_data",
            ])?,
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Serialize the results table to pretty JSON.
pub fn export_json(rows: &[BatchRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("failed to serialize results to JSON")
}
