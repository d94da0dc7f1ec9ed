//! # bagshop-core
//!
//! Core errors and utilities shared across the BagShop crates.
//!
//! This crate provides:
//! - [`BagshopError`] - Error type for configuration, I/O and serialization failures
//! - [`logging`] - Tracing setup for the CLI and tests
//!
//! ## Example
//!
//! ```no_run
//! use bagshop_core::{BagshopError, logging};
//!
//! fn main() -> bagshop_core::Result<()> {
//!     let _guard = logging::init_logging(None, false)?;
//!
//!     let config_path = std::path::Path::new("bagshop.yaml");
//!     if !config_path.exists() {
//!         return Err(BagshopError::config_not_found(config_path));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use error::{BagshopError, Result};
pub use logging::{LogGuard, init_logging};
