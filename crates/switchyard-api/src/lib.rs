//! The switchyard network and port API.
//!
//! This crate is where HTTP stops and meaning starts: handlers that
//! create and delete named networks, attach switch ports to them, and
//! report what exists. State is an in-memory registry shared behind an
//! `Arc`; hardware effects go through the [`SwitchDriver`] seam, so
//! the same handlers run against a real switch or a test double.
//!
//! [`register_api`] wires every operation into a `RouteTable` in one
//! startup pass. Nothing registers itself implicitly.
//!
//! [`SwitchDriver`]: switchyard_drivers::SwitchDriver
//!
//! # Examples
//!
//! ```
//! use switchyard_api::{NetworkState, register_api};
//! use switchyard_drivers::VlanDriver;
//! use switchyard_routing::RouteTable;
//! use std::sync::Arc;
//!
//! let state = Arc::new(NetworkState::new());
//! let driver = Arc::new(VlanDriver::new(100..=200));
//!
//! let mut table = RouteTable::new();
//! register_api(&mut table, state, driver).unwrap();
//! assert_eq!(table.len(), 6);
//! ```

pub mod handlers;
pub mod registry;

pub use handlers::{
	ConnectPort, CreateNetwork, DeleteNetwork, DetachPort, ListNetworks, ShowNetwork,
	register_api,
};
pub use registry::NetworkState;
