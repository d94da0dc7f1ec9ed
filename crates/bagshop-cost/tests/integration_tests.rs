//! Integration tests for the cost engines through the public API.

use bagshop_cost::{
    CostError, ExtraItem, ExtraItemPolicy, ModelParams, STANDARD_SCENARIOS, ScenarioParams,
    ScenarioSpec, compare_runs, extra_adjustment, logistics_cost, marketing_cost, payment_cost,
    project_scenarios, project_with, staffing_cost, total_breakdown, validate,
    validate_with_policy,
};

const EPS: f64 = 1e-6;

/// Mixed adjustments with amounts that sum exactly in binary floating point.
fn sample_extras() -> Vec<ExtraItem> {
    vec![
        ExtraItem::cost("Warehouse rent", 12_500.5),
        ExtraItem::revenue("Marketplace bonus", 3_000.25),
        ExtraItem::cost("Packaging", 750.125),
        ExtraItem::revenue("Cashback", 125.0),
    ]
}

#[test]
fn test_reference_breakdown() {
    let breakdown = total_breakdown(&ModelParams::default());

    assert!((breakdown.logistics - 540_950.65).abs() < EPS);
    assert!((breakdown.payments - 130_391.25).abs() < EPS);
    assert_eq!(breakdown.marketing, 640_016.0);
    assert_eq!(breakdown.staff, 739_800.0);
    assert_eq!(breakdown.extra_net, 0.0);
    assert!((breakdown.total - 2_051_157.9).abs() < EPS);
}

#[test]
fn test_total_identity_with_extras() {
    let mut params = ModelParams::default().with_local_share(0.45);
    params.extra_items = sample_extras();

    let breakdown = total_breakdown(&params);
    let expected = logistics_cost(&params)
        + payment_cost(&params)
        + marketing_cost(&params)
        + staffing_cost(&params)
        + extra_adjustment(&params.extra_items).net;

    assert_eq!(breakdown.total, expected);
    assert_eq!(breakdown.extra_cost, 13_250.625);
    assert_eq!(breakdown.extra_revenue, 3_125.25);
    assert_eq!(breakdown.extra_net, 10_125.375);
}

#[test]
fn test_extra_adjustment_is_order_independent() {
    let forward = sample_extras();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(1);

    let expected = extra_adjustment(&forward);
    assert_eq!(extra_adjustment(&reversed), expected);
    assert_eq!(extra_adjustment(&rotated), expected);
}

#[test]
fn test_single_extra_cost_and_revenue_shift_total() {
    let base = total_breakdown(&ModelParams::default());

    let with_cost =
        total_breakdown(&ModelParams::default().with_extra(ExtraItem::cost("Audit", 10_000.0)));
    assert_eq!(with_cost.total, base.total + 10_000.0);

    let with_revenue = total_breakdown(
        &ModelParams::default().with_extra(ExtraItem::revenue("Grant", 10_000.0)),
    );
    assert_eq!(with_revenue.total, base.total - 10_000.0);
}

#[test]
fn test_calculations_are_idempotent() {
    let mut params = ModelParams::default();
    params.extra_items = sample_extras();

    assert_eq!(total_breakdown(&params), total_breakdown(&params));
    assert_eq!(
        project_scenarios(&ScenarioParams::default(), &params.extra_items),
        project_scenarios(&ScenarioParams::default(), &params.extra_items)
    );
}

#[test]
fn test_scenario_monotonicity() {
    let params = ScenarioParams::default();
    let table = project_scenarios(&params, &[]);

    let pessimistic = table.get("Pessimistic").unwrap();
    let base = table.get("Base").unwrap();
    let optimistic = table.get("Optimistic").unwrap();

    assert!(pessimistic.orders <= base.orders && base.orders <= optimistic.orders);
    assert!(pessimistic.return_rate >= base.return_rate);
    assert!(base.return_rate >= optimistic.return_rate);
    assert_eq!(base.return_rate, params.return_rate);
}

#[test]
fn test_scenario_rows_are_independent() {
    let params = ScenarioParams::default();
    let all = project_scenarios(&params, &[]);

    // Projecting a single scenario on its own gives the same row
    for (index, spec) in STANDARD_SCENARIOS.iter().enumerate() {
        let single = project_with(&params, &[], std::slice::from_ref(spec));
        assert_eq!(single.rows[0], all.rows[index]);
    }
}

#[test]
fn test_best_scenario_with_reference_defaults() {
    let table = project_scenarios(&ScenarioParams::default(), &[]);
    let best = table.best().unwrap();
    assert_eq!(best.name, "Optimistic");
    assert!((best.profit - 6_764_384.0).abs() < EPS);

    let pessimistic = table.get("Pessimistic").unwrap();
    assert!((pessimistic.profit - 4_266_976.0).abs() < EPS);
}

#[test]
fn test_best_scenario_when_volume_loses_money() {
    // Each order costs more than it brings in, so fewer orders is better
    let params = ScenarioParams {
        avg_check: 100.0,
        variable_cost_per_order: 150.0,
        ..ScenarioParams::default()
    };
    let table = project_scenarios(&params, &[]);
    assert_eq!(table.best().unwrap().name, "Pessimistic");
}

#[test]
fn test_custom_scenario_table() {
    let specs = vec![
        ScenarioSpec::new("Black Friday", 2.0, 1.5),
        ScenarioSpec::new("Summer lull", 0.6, 0.9),
    ];
    let table = project_with(&ScenarioParams::default(), &[], &specs);
    assert_eq!(table.rows[0].orders, 21_800);
    assert_eq!(table.rows[1].orders, 6_540);
    assert_eq!(table.best().unwrap().name, "Black Friday");
}

#[test]
fn test_validation_before_calculation() {
    let mut params = ModelParams::default();
    params.p_loc = 0.5;
    params.p_int = 0.7;

    match validate(&params) {
        Err(CostError::InvalidParameter { field, .. }) => assert_eq!(field, "p_loc + p_int"),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }

    let params = ModelParams::default().with_extra(ExtraItem::cost("", 500.0));
    assert!(validate_with_policy(&params, ExtraItemPolicy::Drop).is_ok());
    assert_eq!(
        validate_with_policy(&params, ExtraItemPolicy::Reject),
        Err(CostError::EmptyLabel { index: 0 })
    );
    // Under the drop policy the degenerate item has no effect
    assert_eq!(total_breakdown(&params).extra_net, 0.0);
}

#[test]
fn test_compare_breakdown_runs() {
    let baseline = total_breakdown(&ModelParams::default());
    let cheaper = total_breakdown(&ModelParams::default().with_orders(9_000));
    let pricier = total_breakdown(
        &ModelParams::default().with_extra(ExtraItem::cost("New office", 50_000.0)),
    );

    let cmp = compare_runs(&[baseline, pricier, cheaper]).unwrap();
    assert_eq!(cmp.best_index, 2);
    assert!(cmp.savings_vs_baseline > 0.0);
    assert!((cmp.savings_vs_baseline - (baseline.total - cheaper.total)).abs() < EPS);
}
