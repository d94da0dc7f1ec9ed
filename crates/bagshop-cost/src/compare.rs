//! Comparison of several cost breakdown runs.
//!
//! The caller owns the list of runs; run 0 is treated as the baseline.

use crate::models::CostBreakdown;
use serde::{Deserialize, Serialize};

/// How a run's total relates to the baseline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Lower total than the baseline
    Savings,
    /// Higher total than the baseline
    Increase,
    /// Same total as the baseline
    Unchanged,
}

/// Summary of a set of breakdown runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunComparison {
    /// Index of the run with the lowest total (first one on ties)
    pub best_index: usize,

    /// Total of the best run
    pub best_total: f64,

    /// Total of run 0
    pub baseline_total: f64,

    /// `baseline_total - best_total`, never negative
    pub savings_vs_baseline: f64,

    /// Totals of every run, in input order
    pub totals: Vec<f64>,
}

impl RunComparison {
    /// Outcome of the best run against the baseline.
    pub fn outcome(&self) -> RunOutcome {
        classify(self.baseline_total, self.best_total)
    }

    /// Outcome of run `index` against the baseline.
    pub fn outcome_for(&self, index: usize) -> Option<RunOutcome> {
        self.totals
            .get(index)
            .map(|total| classify(self.baseline_total, *total))
    }

    /// Difference `baseline - run` for run `index`; positive means savings.
    pub fn difference_for(&self, index: usize) -> Option<f64> {
        self.totals.get(index).map(|total| self.baseline_total - total)
    }
}

fn classify(baseline: f64, total: f64) -> RunOutcome {
    let diff = baseline - total;
    if diff > 0.0 {
        RunOutcome::Savings
    } else if diff < 0.0 {
        RunOutcome::Increase
    } else {
        RunOutcome::Unchanged
    }
}

/// Compare runs by total cost. Returns `None` for an empty slice.
pub fn compare_runs(runs: &[CostBreakdown]) -> Option<RunComparison> {
    let baseline_total = runs.first()?.total;

    let mut best_index = 0;
    for (index, run) in runs.iter().enumerate().skip(1) {
        if run.total < runs[best_index].total {
            best_index = index;
        }
    }
    let best_total = runs[best_index].total;

    Some(RunComparison {
        best_index,
        best_total,
        baseline_total,
        savings_vs_baseline: baseline_total - best_total,
        totals: runs.iter().map(|run| run.total).collect(),
    })
}
