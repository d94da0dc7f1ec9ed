//! Boundary validation for calculation inputs.
//!
//! The calculators accept anything; these checks run before them when the
//! parameters come from a file or a user. Values are never clamped.

use crate::error::{CostError, Result};
use crate::models::{ExtraItem, ModelParams};
use crate::scenario::{ScenarioParams, ScenarioSpec};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tolerance for the `p_loc + p_int == 1` check.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-9;

/// How degenerate extra items (blank label, zero amount) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraItemPolicy {
    /// Skip them silently; they never contribute to the adjustment
    #[default]
    Drop,
    /// Fail validation
    Reject,
}

fn check_fraction(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CostError::invalid_parameter(field, value, "a value in [0, 1]"))
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CostError::invalid_parameter(field, value, "a non-negative amount"))
    }
}

/// Validate a breakdown parameter set, reporting the first violation.
pub fn validate(params: &ModelParams) -> Result<()> {
    check_fraction("p_loc", params.p_loc)?;
    check_fraction("p_int", params.p_int)?;

    let share_sum = params.p_loc + params.p_int;
    if (share_sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
        return Err(CostError::invalid_parameter(
            "p_loc + p_int",
            share_sum,
            "delivery shares summing to 1",
        ));
    }

    check_fraction("return_rate", params.return_rate)?;
    check_fraction("online_share", params.online_share)?;
    check_fraction("pay_commission", params.pay_commission)?;

    check_amount("avg_check", params.avg_check)?;
    check_amount("c_loc", params.c_loc)?;
    check_amount("c_int", params.c_int)?;
    check_amount("c_ret_loc", params.c_ret_loc)?;
    check_amount("c_ret_int", params.c_ret_int)?;
    check_amount("cac", params.cac)?;
    check_amount("staff_fixed", params.staff_fixed)?;
    check_amount("staff_per_order", params.staff_per_order)?;

    check_extra_amounts(&params.extra_items)
}

/// Validate a breakdown parameter set including the extra item policy.
pub fn validate_with_policy(params: &ModelParams, policy: ExtraItemPolicy) -> Result<()> {
    validate(params)?;
    validate_extra_items(&params.extra_items, policy)
}

/// Reject negative or non-finite extra amounts.
fn check_extra_amounts(items: &[ExtraItem]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        check_amount(&format!("extra_items[{index}].amount"), item.amount)?;
    }
    Ok(())
}

/// Apply the degenerate-item policy to a list of extra items.
///
/// With [`ExtraItemPolicy::Drop`] this only checks amounts are non-negative;
/// degenerate items are left for the calculator to skip.
pub fn validate_extra_items(items: &[ExtraItem], policy: ExtraItemPolicy) -> Result<()> {
    check_extra_amounts(items)?;

    if policy == ExtraItemPolicy::Drop {
        let dropped = items.iter().filter(|item| item.is_degenerate()).count();
        if dropped > 0 {
            debug!(dropped, "degenerate extra items will be ignored");
        }
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CostError::EmptyLabel { index });
        }
        if item.amount <= 0.0 {
            return Err(CostError::InvalidExtraItem {
                index,
                reason: "amount must be positive".to_string(),
            });
        }
    }
    Ok(())
}

/// Validate a scenario projection parameter set.
pub fn validate_scenario_params(params: &ScenarioParams) -> Result<()> {
    check_fraction("share_online", params.share_online)?;
    check_fraction("payment_commission", params.payment_commission)?;
    check_fraction("return_rate", params.return_rate)?;

    check_amount("avg_check", params.avg_check)?;
    check_amount("fixed_costs", params.fixed_costs)?;
    check_amount("variable_cost_per_order", params.variable_cost_per_order)?;
    check_amount("logistic_cost_per_order", params.logistic_cost_per_order)?;
    Ok(())
}

/// Validate caller-supplied scenario multipliers.
pub fn validate_scenario_specs(specs: &[ScenarioSpec]) -> Result<()> {
    for (index, spec) in specs.iter().enumerate() {
        check_amount(
            &format!("scenarios[{index}].orders_multiplier"),
            spec.orders_multiplier,
        )?;
        check_amount(
            &format!("scenarios[{index}].return_multiplier"),
            spec.return_multiplier,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(result: Result<()>) -> String {
        result.unwrap_err().field()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&ModelParams::default()).is_ok());
        assert!(validate_scenario_params(&ScenarioParams::default()).is_ok());
        assert!(validate_scenario_specs(&ScenarioSpec::standard()).is_ok());
    }

    #[test]
    fn test_rate_out_of_range() {
        let mut params = ModelParams::default();
        params.return_rate = 1.2;
        assert_eq!(field_of(validate(&params)), "return_rate");

        let mut params = ModelParams::default();
        params.pay_commission = -0.01;
        assert_eq!(field_of(validate(&params)), "pay_commission");

        let mut params = ModelParams::default();
        params.online_share = f64::NAN;
        assert_eq!(field_of(validate(&params)), "online_share");
    }

    #[test]
    fn test_delivery_shares_must_sum_to_one() {
        let mut params = ModelParams::default();
        params.p_int = 0.6;
        assert_eq!(field_of(validate(&params)), "p_loc + p_int");

        // Derived share is always accepted
        assert!(validate(&ModelParams::default().with_local_share(0.35)).is_ok());
    }

    #[test]
    fn test_negative_amount() {
        let mut params = ModelParams::default();
        params.staff_fixed = -1.0;
        let err = validate(&params).unwrap_err();
        assert!(matches!(err, CostError::InvalidParameter { ref field, value, .. }
            if field == "staff_fixed" && value == -1.0));
    }

    #[test]
    fn test_negative_extra_amount() {
        let params = ModelParams::default().with_extra(ExtraItem::cost("refund", -5.0));
        assert_eq!(field_of(validate(&params)), "extra_items[0].amount");
    }

    #[test]
    fn test_drop_policy_accepts_degenerate_items() {
        let items = vec![ExtraItem::cost("", 10.0), ExtraItem::revenue("zero", 0.0)];
        assert!(validate_extra_items(&items, ExtraItemPolicy::Drop).is_ok());
    }

    #[test]
    fn test_reject_policy() {
        let items = vec![ExtraItem::cost("rent", 10.0), ExtraItem::cost("  ", 10.0)];
        assert_eq!(
            validate_extra_items(&items, ExtraItemPolicy::Reject),
            Err(CostError::EmptyLabel { index: 1 })
        );

        let items = vec![ExtraItem::revenue("cashback", 0.0)];
        let err = validate_extra_items(&items, ExtraItemPolicy::Reject).unwrap_err();
        assert!(matches!(err, CostError::InvalidExtraItem { index: 0, .. }));
    }

    #[test]
    fn test_validate_with_policy() {
        let params = ModelParams::default().with_extra(ExtraItem::cost("", 100.0));
        assert!(validate_with_policy(&params, ExtraItemPolicy::Drop).is_ok());
        assert!(validate_with_policy(&params, ExtraItemPolicy::Reject).is_err());
    }

    #[test]
    fn test_scenario_params_validation() {
        let mut params = ScenarioParams::default();
        params.share_online = 1.5;
        assert_eq!(field_of(validate_scenario_params(&params)), "share_online");

        let specs = vec![ScenarioSpec::new("Crash", -0.5, 1.0)];
        assert_eq!(
            field_of(validate_scenario_specs(&specs)),
            "scenarios[0].orders_multiplier"
        );
    }
}
