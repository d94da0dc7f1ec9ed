//! Error types for the cost calculation module.

use thiserror::Error;

/// Cost calculation errors.
///
/// The calculator itself never fails; these are raised by the validation
/// layer before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// A rate, share or monetary field is outside its allowed range
    #[error("invalid parameter {field} = {value}: expected {expected}")]
    InvalidParameter {
        /// Offending field name (e.g. "return_rate", "extra_items[2].amount")
        field: String,
        /// The rejected value
        value: f64,
        /// Human-readable description of the violated range
        expected: String,
    },

    /// An extra item has an empty or whitespace-only label
    #[error("extra item #{index} has an empty label")]
    EmptyLabel {
        /// Position of the item in the input sequence
        index: usize,
    },

    /// An extra item is otherwise degenerate (e.g. zero amount)
    #[error("extra item #{index} is invalid: {reason}")]
    InvalidExtraItem {
        /// Position of the item in the input sequence
        index: usize,
        /// Why the item was rejected
        reason: String,
    },
}

impl CostError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: f64,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            value,
            expected: expected.into(),
        }
    }

    /// The field or item this error refers to.
    pub fn field(&self) -> String {
        match self {
            CostError::InvalidParameter { field, .. } => field.clone(),
            CostError::EmptyLabel { index } => format!("extra_items[{index}].name"),
            CostError::InvalidExtraItem { index, .. } => format!("extra_items[{index}]"),
        }
    }

    /// Check if this error concerns an ad-hoc extra item.
    pub fn is_extra_item_error(&self) -> bool {
        match self {
            CostError::EmptyLabel { .. } | CostError::InvalidExtraItem { .. } => true,
            CostError::InvalidParameter { field, .. } => field.starts_with("extra_items"),
        }
    }
}

/// Result type for cost calculation operations.
pub type Result<T> = std::result::Result<T, CostError>;
