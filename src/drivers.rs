//! Switch driver module.
//!
//! This module provides access to the `SwitchDriver` trait and the bundled
//! in-memory implementations (`VlanDriver`, `NullDriver`).
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::drivers::{SwitchDriver, VlanDriver};
//! use std::sync::Arc;
//!
//! let driver: Arc<dyn SwitchDriver> = Arc::new(VlanDriver::new(100..=200));
//! ```

pub use switchyard_drivers::*;
