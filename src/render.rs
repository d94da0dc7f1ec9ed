//! Text and JSON rendering of calculation results.
//!
//! Amounts are rounded to two decimals here and nowhere else.

use bagshop_cost::{CostBreakdown, ExtraItem, RunComparison, RunOutcome, ScenarioTable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON envelope around any result.
#[derive(Debug, Serialize)]
pub struct Report<'a, T: Serialize> {
    pub generated_at: DateTime<Utc>,
    pub engine: &'static str,
    pub result: &'a T,
}

impl<'a, T: Serialize> Report<'a, T> {
    pub fn new(engine: &'static str, result: &'a T) -> Self {
        Self {
            generated_at: Utc::now(),
            engine,
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One breakdown run loaded from a config file, for `compare`.
#[derive(Debug, Serialize)]
pub struct ComparedRun {
    pub source: String,
    pub breakdown: CostBreakdown,
    pub extra_items: Vec<ExtraItem>,
}

/// Result of `compare`, serialized as one JSON document.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub runs: Vec<ComparedRun>,
    pub comparison: RunComparison,
}

/// Numbered cost table. The extra row only appears when the net is non-zero.
pub fn breakdown_table(breakdown: &CostBreakdown) -> String {
    let mut rows: Vec<(&str, String)> = vec![
        ("Logistics", money(breakdown.logistics)),
        ("Payment services", money(breakdown.payments)),
        ("Marketing", money(breakdown.marketing)),
        ("Staff", money(breakdown.staff)),
    ];
    if breakdown.extra_net != 0.0 {
        let sign = if breakdown.extra_net > 0.0 { '+' } else { '-' };
        rows.push((
            "Extra adjustments",
            format!("{} ({sign})", money(breakdown.extra_net)),
        ));
    }
    rows.push(("Total", money(breakdown.total)));

    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<20} {:>18}", "#", "Item", "Amount");
    for (index, (label, amount)) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}  {:<20} {:>18}", index + 1, label, amount);
    }
    out
}

/// Scenario table with one row per scenario and the best one called out.
pub fn scenario_table(table: &ScenarioTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>8} {:>14} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Scenario",
        "Orders",
        "Revenue",
        "Transaction",
        "Logistics",
        "Variable",
        "Returns",
        "Fixed+extra",
        "Profit"
    );
    for row in table.iter() {
        let _ = writeln!(
            out,
            "{:<14} {:>8} {:>14} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
            row.name,
            row.orders,
            money(row.revenue),
            money(row.transaction_cost),
            money(row.logistics_cost),
            money(row.variable_cost),
            money(row.returns_cost),
            money(row.fixed_and_extra),
            money(row.profit)
        );
    }
    if let Some(best) = table.best() {
        let _ = writeln!(
            out,
            "\nBest scenario: {} (profit {})",
            best.name,
            money(best.profit)
        );
    }
    out
}

/// Per-run totals followed by the conclusion against run #1.
pub fn comparison_summary(report: &ComparisonReport) -> String {
    let cmp = &report.comparison;
    let mut out = String::new();

    let _ = writeln!(out, "{:>3}  {:<32} {:>18} {:>18}", "#", "Source", "Total", "vs #1");
    for (index, run) in report.runs.iter().enumerate() {
        let diff = cmp.difference_for(index).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}  {:<32} {:>18} {:>18}",
            index + 1,
            run.source,
            money(run.breakdown.total),
            money(-diff)
        );
    }

    let best = &report.runs[cmp.best_index];
    let _ = writeln!(
        out,
        "\nLowest total: run #{} ({}) with {}",
        cmp.best_index + 1,
        best.source,
        money(cmp.best_total)
    );
    match cmp.outcome() {
        RunOutcome::Savings => {
            let _ = writeln!(out, "Savings against run #1: {}", money(cmp.savings_vs_baseline));
        }
        // The best run can never cost more than the baseline
        RunOutcome::Increase | RunOutcome::Unchanged => {
            let _ = writeln!(out, "No run is cheaper than run #1");
        }
    }
    if !best.extra_items.is_empty() {
        let extras: Vec<String> = best
            .extra_items
            .iter()
            .map(|item| format!("{} ({}{})", item.name, item.kind.marker(), money(item.amount)))
            .collect();
        let _ = writeln!(out, "Extra items in the best run: {}", extras.join("; "));
    }
    out
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}
