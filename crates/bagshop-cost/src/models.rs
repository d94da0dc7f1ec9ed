//! Data models for the cost breakdown engine.

use serde::{Deserialize, Serialize};

/// Whether an extra item adds to or offsets total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// Additional cost, increases the total
    Cost,
    /// Additional revenue, decreases the total
    Revenue,
}

impl ExtraKind {
    /// Short marker used when listing items ("+" for costs, "-" for revenue).
    pub fn marker(&self) -> char {
        match self {
            ExtraKind::Cost => '+',
            ExtraKind::Revenue => '-',
        }
    }
}

/// An ad-hoc cost or revenue adjustment supplied by the caller.
///
/// `amount` is always non-negative; direction comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraItem {
    /// Label shown next to the adjustment
    pub name: String,

    /// Cost or revenue
    pub kind: ExtraKind,

    /// Non-negative amount in the same currency as the other inputs
    pub amount: f64,
}

impl ExtraItem {
    /// Create a new extra item.
    pub fn new(name: impl Into<String>, kind: ExtraKind, amount: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            amount,
        }
    }

    /// Create an extra cost item.
    pub fn cost(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, ExtraKind::Cost, amount)
    }

    /// Create an extra revenue item.
    pub fn revenue(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, ExtraKind::Revenue, amount)
    }

    /// True for items with a blank label or a non-positive amount.
    ///
    /// These are skipped by [`crate::calculator::extra_adjustment`].
    pub fn is_degenerate(&self) -> bool {
        self.name.trim().is_empty() || self.amount.is_nan() || self.amount <= 0.0
    }
}

/// Business parameters for one cost breakdown.
///
/// Rates and shares are fractions in `[0, 1]` and `p_loc + p_int == 1`.
/// The calculator does not re-check this; see [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Orders per period (Q)
    #[serde(alias = "Q", alias = "q")]
    pub orders: u64,

    /// Average order value
    pub avg_check: f64,

    /// Share of local deliveries
    pub p_loc: f64,

    /// Share of interregional deliveries
    pub p_int: f64,

    /// Share of orders that are returned
    pub return_rate: f64,

    /// Local delivery cost per order
    pub c_loc: f64,

    /// Interregional delivery cost per order
    pub c_int: f64,

    /// Cost of handling a local return
    pub c_ret_loc: f64,

    /// Cost of handling an interregional return
    pub c_ret_int: f64,

    /// Share of orders paid online
    pub online_share: f64,

    /// Payment provider commission rate
    pub pay_commission: f64,

    /// Newly acquired customers
    pub n_new_customers: u64,

    /// Customer acquisition cost
    pub cac: f64,

    /// Fixed staffing cost
    pub staff_fixed: f64,

    /// Staffing cost per processed order
    pub staff_per_order: f64,

    /// Ad-hoc adjustments, in input order
    pub extra_items: Vec<ExtraItem>,
}

impl Default for ModelParams {
    /// 2024 reference figures.
    fn default() -> Self {
        Self {
            orders: 10_900,
            avg_check: 870.0,
            p_loc: 0.30,
            p_int: 0.70,
            return_rate: 0.061,
            c_loc: 45.0,
            c_int: 50.0,
            c_ret_loc: 15.0,
            c_ret_int: 20.0,
            online_share: 0.50,
            pay_commission: 0.0275,
            n_new_customers: 12_308,
            cac: 52.0,
            staff_fixed: 500_000.0,
            staff_per_order: 22.0,
            extra_items: Vec::new(),
        }
    }
}

impl ModelParams {
    /// Create parameters with the reference defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local delivery share; the interregional share becomes `1 - p_loc`.
    pub fn with_local_share(mut self, p_loc: f64) -> Self {
        self.p_loc = p_loc;
        self.p_int = 1.0 - p_loc;
        self
    }

    /// Set the order count.
    pub fn with_orders(mut self, orders: u64) -> Self {
        self.orders = orders;
        self
    }

    /// Append an extra item.
    pub fn with_extra(mut self, item: ExtraItem) -> Self {
        self.extra_items.push(item);
        self
    }

    /// Order count as a float for the formulas.
    pub fn q(&self) -> f64 {
        self.orders as f64
    }
}

/// Summed extra items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtraAdjustment {
    /// Sum of cost items
    pub cost: f64,

    /// Sum of revenue items
    pub revenue: f64,

    /// `cost - revenue`, added to the grand total
    pub net: f64,
}

/// Cost structure for one set of parameters.
///
/// Values are unrounded; rounding is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    /// Delivery plus expected return handling
    pub logistics: f64,

    /// Payment provider commission
    pub payments: f64,

    /// Customer acquisition
    pub marketing: f64,

    /// Fixed plus per-order staffing
    pub staff: f64,

    /// Sum of extra cost items
    pub extra_cost: f64,

    /// Sum of extra revenue items
    pub extra_revenue: f64,

    /// `extra_cost - extra_revenue`
    pub extra_net: f64,

    /// `logistics + payments + marketing + staff + extra_net`
    pub total: f64,
}

impl CostBreakdown {
    /// Category keys, in presentation order.
    pub const KEYS: [&'static str; 8] = [
        "logistics",
        "payments",
        "marketing",
        "staff",
        "extra_cost",
        "extra_revenue",
        "extra_net",
        "total",
    ];

    /// Look up a category by name.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "logistics" => Some(self.logistics),
            "payments" => Some(self.payments),
            "marketing" => Some(self.marketing),
            "staff" => Some(self.staff),
            "extra_cost" => Some(self.extra_cost),
            "extra_revenue" => Some(self.extra_revenue),
            "extra_net" => Some(self.extra_net),
            "total" => Some(self.total),
            _ => None,
        }
    }

    /// All `(category, amount)` pairs in [`Self::KEYS`] order.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|amount| (*key, amount)))
    }

    /// Extra adjustment part of the breakdown.
    pub fn extra(&self) -> ExtraAdjustment {
        ExtraAdjustment {
            cost: self.extra_cost,
            revenue: self.extra_revenue,
            net: self.extra_net,
        }
    }
}
