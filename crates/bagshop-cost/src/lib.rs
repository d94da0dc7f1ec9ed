//! # bagshop-cost
//!
//! Transactional cost modelling for an online store.
//!
//! This crate provides two independent calculation engines:
//! - [`calculator`] - cost structure breakdown (logistics, payments, marketing,
//!   staff, ad-hoc adjustments) for a [`ModelParams`] set
//! - [`scenario`] - revenue and profit projection for pessimistic, base and
//!   optimistic scenarios from a [`ScenarioParams`] set
//!
//! Plus [`validation`] for boundary checks and [`compare`] for picking the
//! cheapest of several breakdown runs. Everything here is pure and stateless.
//!
//! ## Example
//!
//! ```
//! use bagshop_cost::{ExtraItem, ModelParams, total_breakdown, validate};
//!
//! let params = ModelParams::default()
//!     .with_local_share(0.4)
//!     .with_extra(ExtraItem::cost("Warehouse rent", 10_000.0));
//! validate(&params).unwrap();
//!
//! let breakdown = total_breakdown(&params);
//! assert_eq!(breakdown.extra_net, 10_000.0);
//! println!("Total: {:.2}", breakdown.total);
//! ```

pub mod calculator;
pub mod compare;
pub mod error;
pub mod models;
pub mod scenario;
pub mod validation;

// Re-export main types
pub use calculator::{
    extra_adjustment, logistics_cost, marketing_cost, payment_cost, staffing_cost,
    total_breakdown,
};
pub use compare::{RunComparison, RunOutcome, compare_runs};
pub use error::{CostError, Result};
pub use models::{CostBreakdown, ExtraAdjustment, ExtraItem, ExtraKind, ModelParams};
pub use scenario::{
    STANDARD_SCENARIOS, ScenarioParams, ScenarioRow, ScenarioSpec, ScenarioTable,
    project_scenario, project_scenarios, project_with,
};
pub use validation::{
    ExtraItemPolicy, validate, validate_extra_items, validate_scenario_params,
    validate_scenario_specs, validate_with_policy,
};
