//! Multi-scenario revenue and profit projection.
//!
//! This is a separate engine from [`crate::calculator`]: it models revenue
//! and profit with a flat per-order logistics cost and no delivery split.
//! The two engines do not share formulas and their results are not
//! comparable.
//!
//! Each scenario scales the base order volume and return rate:
//!
//! | Scenario    | orders × | return rate × |
//! |-------------|----------|---------------|
//! | Pessimistic | 0.8      | 1.3           |
//! | Base        | 1.0      | 1.0           |
//! | Optimistic  | 1.2      | 0.7           |
//!
//! ## Example
//!
//! ```
//! use bagshop_cost::{ScenarioParams, project_scenarios};
//!
//! let table = project_scenarios(&ScenarioParams::default(), &[]);
//! let best = table.best().unwrap();
//! assert_eq!(best.name, "Optimistic");
//! ```

use crate::calculator::extra_adjustment;
use crate::models::ExtraItem;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Base parameters for the scenario projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    /// Orders per month
    pub orders_per_month: u64,

    /// Average order value
    pub avg_check: f64,

    /// Share of orders paid online (0..1)
    pub share_online: f64,

    /// Payment provider commission rate (0..1)
    pub payment_commission: f64,

    /// Fixed monthly costs (rent, salaries, ...)
    pub fixed_costs: f64,

    /// Other variable cost per order
    pub variable_cost_per_order: f64,

    /// Flat logistics cost per order
    pub logistic_cost_per_order: f64,

    /// Share of orders returned (0..1)
    pub return_rate: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            orders_per_month: 10_900,
            avg_check: 800.0,
            share_online: 0.6,
            payment_commission: 0.015,
            fixed_costs: 100_000.0,
            variable_cost_per_order: 150.0,
            logistic_cost_per_order: 90.0,
            return_rate: 0.05,
        }
    }
}

/// A named pair of multipliers applied to the base parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Scenario name
    pub name: Cow<'static, str>,

    /// Multiplier on the base order volume
    pub orders_multiplier: f64,

    /// Multiplier on the base return rate
    pub return_multiplier: f64,
}

/// The standard pessimistic / base / optimistic table, in tie-break order.
pub static STANDARD_SCENARIOS: [ScenarioSpec; 3] = [
    ScenarioSpec {
        name: Cow::Borrowed("Pessimistic"),
        orders_multiplier: 0.8,
        return_multiplier: 1.3,
    },
    ScenarioSpec {
        name: Cow::Borrowed("Base"),
        orders_multiplier: 1.0,
        return_multiplier: 1.0,
    },
    ScenarioSpec {
        name: Cow::Borrowed("Optimistic"),
        orders_multiplier: 1.2,
        return_multiplier: 0.7,
    },
];

impl ScenarioSpec {
    /// Create a custom scenario.
    pub fn new(name: impl Into<String>, orders_multiplier: f64, return_multiplier: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            orders_multiplier,
            return_multiplier,
        }
    }

    /// Owned copy of [`STANDARD_SCENARIOS`].
    pub fn standard() -> Vec<ScenarioSpec> {
        STANDARD_SCENARIOS.to_vec()
    }
}

/// Projected figures for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// Scenario name
    pub name: String,

    /// Orders after applying the multiplier (truncated)
    pub orders: u64,

    /// Effective return rate after applying the multiplier
    pub return_rate: f64,

    /// Order revenue plus extra revenue items
    pub revenue: f64,

    /// Payment commission on online orders
    pub transaction_cost: f64,

    /// Flat per-order logistics
    pub logistics_cost: f64,

    /// Other variable costs
    pub variable_cost: f64,

    /// Revenue lost to returns
    pub returns_cost: f64,

    /// Fixed costs plus extra cost items
    pub fixed_and_extra: f64,

    /// Sum of all cost lines
    pub total_cost: f64,

    /// `revenue - total_cost`
    pub profit: f64,
}

/// Ordered result of a projection, one row per scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScenarioTable {
    /// Rows in the order the scenarios were given
    pub rows: Vec<ScenarioRow>,
}

impl ScenarioTable {
    /// Row with the highest profit. Ties go to the earlier row.
    pub fn best(&self) -> Option<&ScenarioRow> {
        let mut best: Option<&ScenarioRow> = None;
        for row in &self.rows {
            match best {
                Some(current) if row.profit <= current.profit => {}
                _ => best = Some(row),
            }
        }
        best
    }

    /// Find a row by scenario name.
    pub fn get(&self, name: &str) -> Option<&ScenarioRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioRow> {
        self.rows.iter()
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute one scenario row.
pub fn project_scenario(
    params: &ScenarioParams,
    extra_items: &[ExtraItem],
    spec: &ScenarioSpec,
) -> ScenarioRow {
    // `as` truncates toward zero and saturates at 0 for negative products
    let orders = (params.orders_per_month as f64 * spec.orders_multiplier) as u64;
    let n = orders as f64;
    let extra = extra_adjustment(extra_items);

    let revenue = n * params.avg_check + extra.revenue;
    let transaction_cost = n * params.share_online * params.avg_check * params.payment_commission;
    let logistics_cost = n * params.logistic_cost_per_order;
    let variable_cost = n * params.variable_cost_per_order;
    let return_rate = params.return_rate * spec.return_multiplier;
    let returns_cost = n * return_rate * params.avg_check;

    let total_cost = transaction_cost
        + logistics_cost
        + variable_cost
        + returns_cost
        + params.fixed_costs
        + extra.cost;
    let profit = revenue - total_cost;

    debug!(scenario = %spec.name, orders, revenue, total_cost, profit, "projected scenario");

    ScenarioRow {
        name: spec.name.to_string(),
        orders,
        return_rate,
        revenue,
        transaction_cost,
        logistics_cost,
        variable_cost,
        returns_cost,
        fixed_and_extra: params.fixed_costs + extra.cost,
        total_cost,
        profit,
    }
}

/// Project an arbitrary list of named scenarios.
pub fn project_with(
    params: &ScenarioParams,
    extra_items: &[ExtraItem],
    specs: &[ScenarioSpec],
) -> ScenarioTable {
    ScenarioTable {
        rows: specs
            .iter()
            .map(|spec| project_scenario(params, extra_items, spec))
            .collect(),
    }
}

/// Project the standard pessimistic / base / optimistic scenarios.
pub fn project_scenarios(params: &ScenarioParams, extra_items: &[ExtraItem]) -> ScenarioTable {
    project_with(params, extra_items, &STANDARD_SCENARIOS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_standard_orders() {
        let table = project_scenarios(&ScenarioParams::default(), &[]);
        let orders: Vec<u64> = table.iter().map(|r| r.orders).collect();
        assert_eq!(orders, vec![8_720, 10_900, 13_080]);
    }

    #[test]
    fn test_base_row_figures() {
        let table = project_scenarios(&ScenarioParams::default(), &[]);
        let base = table.get("Base").unwrap();

        assert_eq!(base.revenue, 8_720_000.0);
        assert!((base.transaction_cost - 78_480.0).abs() < EPS);
        assert_eq!(base.logistics_cost, 981_000.0);
        assert_eq!(base.variable_cost, 1_635_000.0);
        assert!((base.returns_cost - 436_000.0).abs() < EPS);
        assert_eq!(base.fixed_and_extra, 100_000.0);
        assert!((base.total_cost - 3_230_480.0).abs() < EPS);
        assert!((base.profit - 5_489_520.0).abs() < EPS);
    }

    #[test]
    fn test_orders_truncate() {
        let params = ScenarioParams {
            orders_per_month: 7,
            ..ScenarioParams::default()
        };
        let row = project_scenario(&params, &[], &STANDARD_SCENARIOS[0]);
        // 7 * 0.8 = 5.6
        assert_eq!(row.orders, 5);
    }

    #[test]
    fn test_extras_feed_revenue_and_fixed_costs() {
        let extras = vec![
            ExtraItem::cost("warehouse", 20_000.0),
            ExtraItem::revenue("affiliate", 5_000.0),
        ];
        let plain = project_scenarios(&ScenarioParams::default(), &[]);
        let with_extras = project_scenarios(&ScenarioParams::default(), &extras);

        for (a, b) in plain.iter().zip(with_extras.iter()) {
            assert_eq!(b.revenue - a.revenue, 5_000.0);
            assert_eq!(b.fixed_and_extra - a.fixed_and_extra, 20_000.0);
            assert!((a.profit - b.profit - 15_000.0).abs() < EPS);
        }
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let specs = vec![
            ScenarioSpec::new("A", 1.0, 1.0),
            ScenarioSpec::new("B", 1.0, 1.0),
        ];
        let table = project_with(&ScenarioParams::default(), &[], &specs);
        assert_eq!(table.best().unwrap().name, "A");
    }

    #[test]
    fn test_best_of_empty_table() {
        let table = project_with(&ScenarioParams::default(), &[], &[]);
        assert!(table.is_empty());
        assert!(table.best().is_none());
    }

    #[test]
    fn test_custom_scenarios_keep_order() {
        let specs = vec![
            ScenarioSpec::new("Peak season", 1.5, 1.1),
            ScenarioSpec::new("Slump", 0.5, 1.0),
        ];
        let table = project_with(&ScenarioParams::default(), &[], &specs);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].name, "Peak season");
        assert_eq!(table.rows[1].orders, 5_450);
    }

    #[test]
    fn test_scenario_spec_roundtrips_through_yaml() {
        let yaml = "name: Flash sale\norders_multiplier: 2.0\nreturn_multiplier: 1.5\n";
        let spec: ScenarioSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec, ScenarioSpec::new("Flash sale", 2.0, 1.5));
    }
}
