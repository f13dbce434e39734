//! Switch drivers for switchyard.
//!
//! A driver owns everything below the API layer: pushing port-to-network
//! assignments to the hardware and handing out network identifiers from
//! whatever pool the fabric supports. Handlers talk to it only through
//! the [`SwitchDriver`] trait, so the same API code runs against a VLAN
//! switch, a test double, or nothing at all.
//!
//! Two drivers ship in this crate:
//!
//! - [`VlanDriver`]: keeps an in-memory pool of VLAN tags and records the
//!   port assignments it is asked to apply. The reference driver for
//!   development and tests.
//! - [`NullDriver`]: accepts every call and never has an identifier to
//!   give out. Useful for exercising pool-exhaustion paths.
//!
//! # Examples
//!
//! ```
//! use switchyard_drivers::{SwitchDriver, VlanDriver};
//!
//! #[tokio::main]
//! async fn main() {
//!     let driver = VlanDriver::new(100..=200);
//!     driver.init_db().await.unwrap();
//!
//!     let tag = driver.get_new_network_id().await.unwrap();
//!     assert_eq!(tag, Some("100".to_string()));
//! }
//! ```

pub mod null;
pub mod vlan;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

pub use null::NullDriver;
pub use vlan::VlanDriver;

/// Errors raised by a driver.
///
/// These stay inside the process; the API layer decides what a driver
/// failure means for the caller.
#[derive(Debug, Error)]
pub enum DriverError {
	/// A network identifier was freed that this driver never handed out,
	/// or was already returned to the pool.
	#[error("network id {0} is not allocated")]
	UnknownNetworkId(String),

	/// The device behind the driver rejected or failed the operation.
	#[error("backend error: {0}")]
	Backend(String),
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// The seam between the HTTP API and the switch fabric.
///
/// `apply_networking` takes the desired state per port: `Some(id)`
/// connects the port to that network, `None` detaches it. Identifier
/// allocation is explicit and separate, so the API layer can fail a
/// request before touching any hardware.
#[async_trait]
pub trait SwitchDriver: Send + Sync {
	/// Push the given port assignments to the switch.
	async fn apply_networking(
		&self,
		net_map: &HashMap<String, Option<String>>,
	) -> DriverResult<()>;

	/// Reserve the next free network identifier.
	///
	/// Returns `None` when the pool is exhausted. Exhaustion is an
	/// ordinary outcome, not an error.
	async fn get_new_network_id(&self) -> DriverResult<Option<String>>;

	/// Return a previously reserved identifier to the pool.
	async fn free_network_id(&self, net_id: &str) -> DriverResult<()>;

	/// Prepare any driver-side state before the first request.
	async fn init_db(&self) -> DriverResult<()>;
}
