//! # bagshop-config
//!
//! Configuration management for BagShop.
//!
//! A configuration file describes one calculation run for each engine:
//!
//! ```yaml
//! params:            # cost breakdown engine
//!   Q: 10900
//!   avg_check: 870.0
//!   p_loc: 0.3
//!   p_int: 0.7
//!   extra_items:
//!     - { name: Warehouse rent, kind: cost, amount: 15000 }
//! projection:        # scenario projection engine
//!   params:
//!     orders_per_month: 10900
//!   extra_items: []
//!   scenarios:
//!     - { name: Pessimistic, orders_multiplier: 0.8, return_multiplier: 1.3 }
//! extra_item_policy: drop
//! ```
//!
//! Omitted fields take the reference defaults.

pub mod config;

pub use config::{BagshopConfig, DEFAULT_CONFIG_FILE, ProjectionConfig};
