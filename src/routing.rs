//! Routing and dispatch module.
//!
//! This module provides access to the route table, path patterns, the
//! matcher, and the dispatcher that drives a request from arrival to a
//! serialized response.
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::routing::{Dispatcher, RouteTable};
//! use std::sync::Arc;
//!
//! let table = RouteTable::new();
//! let dispatcher = Dispatcher::new(Arc::new(table));
//! ```

pub use switchyard_routing::*;
