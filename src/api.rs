//! API operations module.
//!
//! This module provides access to the network/port handlers, the shared
//! in-memory `NetworkState`, and the startup registration pass.
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::api::{NetworkState, register_api};
//! use switchyard::drivers::{NullDriver, SwitchDriver};
//! use switchyard::routing::RouteTable;
//! use std::sync::Arc;
//!
//! let mut table = RouteTable::new();
//! let state = Arc::new(NetworkState::new());
//! let driver: Arc<dyn SwitchDriver> = Arc::new(NullDriver::new());
//! register_api(&mut table, state, driver).unwrap();
//! ```

pub use switchyard_api::*;
