//! Cost breakdown engine.
//!
//! Pure closed-form functions over [`ModelParams`]. Nothing here validates
//! ranges or keeps state; out-of-range inputs produce arithmetically
//! consistent output. Run [`crate::validation::validate`] first when the
//! parameters come from an untrusted source.
//!
//! | Category  | Formula |
//! |-----------|---------|
//! | logistics | `Q·(p_loc·c_loc + p_int·c_int) + Q·return_rate·(p_loc·c_ret_loc + p_int·c_ret_int)` |
//! | payments  | `Q·online_share·avg_check·pay_commission` |
//! | marketing | `n_new_customers·cac` |
//! | staff     | `staff_fixed + staff_per_order·Q` |
//! | total     | `logistics + payments + marketing + staff + extra_net` |

use crate::models::{CostBreakdown, ExtraAdjustment, ExtraItem, ExtraKind, ModelParams};
use tracing::debug;

/// Delivery cost for all orders plus the expected cost of handling returns.
///
/// Returns are an expected value over the delivery mix, not tracked per order.
pub fn logistics_cost(params: &ModelParams) -> f64 {
    let q = params.q();
    let delivery = q * (params.p_loc * params.c_loc + params.p_int * params.c_int);
    let returns = q
        * params.return_rate
        * (params.p_loc * params.c_ret_loc + params.p_int * params.c_ret_int);
    delivery + returns
}

/// Commission on the online-paid share of revenue. Offline payments are free.
pub fn payment_cost(params: &ModelParams) -> f64 {
    params.q() * params.online_share * params.avg_check * params.pay_commission
}

/// Linear customer acquisition cost.
pub fn marketing_cost(params: &ModelParams) -> f64 {
    params.n_new_customers as f64 * params.cac
}

/// Fixed plus per-order staffing cost.
pub fn staffing_cost(params: &ModelParams) -> f64 {
    params.staff_fixed + params.staff_per_order * params.q()
}

/// Sum extra items by kind.
///
/// Items with a blank label or a non-positive amount are skipped. The result
/// does not depend on item order.
pub fn extra_adjustment(extra_items: &[ExtraItem]) -> ExtraAdjustment {
    let mut cost = 0.0;
    let mut revenue = 0.0;

    for (index, item) in extra_items.iter().enumerate() {
        if item.is_degenerate() {
            debug!(index, name = %item.name, amount = item.amount, "skipping degenerate extra item");
            continue;
        }
        match item.kind {
            ExtraKind::Cost => cost += item.amount,
            ExtraKind::Revenue => revenue += item.amount,
        }
    }

    ExtraAdjustment {
        cost,
        revenue,
        net: cost - revenue,
    }
}

/// Full cost breakdown for one parameter set.
pub fn total_breakdown(params: &ModelParams) -> CostBreakdown {
    let logistics = logistics_cost(params);
    let payments = payment_cost(params);
    let marketing = marketing_cost(params);
    let staff = staffing_cost(params);
    let extra = extra_adjustment(&params.extra_items);

    let total = logistics + payments + marketing + staff + extra.net;

    debug!(
        orders = params.orders,
        logistics,
        payments,
        marketing,
        staff,
        extra_net = extra.net,
        total,
        "computed cost breakdown"
    );

    CostBreakdown {
        logistics,
        payments,
        marketing,
        staff,
        extra_cost: extra.cost,
        extra_revenue: extra.revenue,
        extra_net: extra.net,
        total,
    }
}
