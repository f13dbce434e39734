//! VLAN-backed driver with an in-memory tag pool.
//!
//! Network identifiers are VLAN tags drawn from a configured range.
//! Allocation always hands out the lowest free tag, so identifier
//! assignment is deterministic and tests can predict it.
//!
//! # Examples
//!
//! ```
//! use switchyard_drivers::{SwitchDriver, VlanDriver};
//!
//! #[tokio::main]
//! async fn main() {
//!     let driver = VlanDriver::new(100..=102);
//!
//!     assert_eq!(driver.get_new_network_id().await.unwrap(), Some("100".to_string()));
//!     assert_eq!(driver.get_new_network_id().await.unwrap(), Some("101".to_string()));
//!
//!     driver.free_network_id("100").await.unwrap();
//!     assert_eq!(driver.get_new_network_id().await.unwrap(), Some("100".to_string()));
//! }
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::{DriverError, DriverResult, SwitchDriver};

struct VlanState {
	range: RangeInclusive<u16>,
	free: BTreeSet<u16>,
	ports: HashMap<String, Option<String>>,
}

/// Driver that models a VLAN switch in memory.
///
/// Tags live in a `BTreeSet` so the lowest free one is always handed
/// out first. A tag is allocated exactly when it lies in the configured
/// range and is absent from the free set; freeing anything else fails.
/// Applied port assignments accumulate in a map that tests can inspect.
#[derive(Clone)]
pub struct VlanDriver {
	state: Arc<Mutex<VlanState>>,
}

impl VlanDriver {
	/// Create a driver whose tag pool is the given inclusive range.
	///
	/// # Examples
	///
	/// ```
	/// use switchyard_drivers::VlanDriver;
	///
	/// let driver = VlanDriver::new(100..=200);
	/// assert_eq!(driver.available(), 101);
	/// ```
	pub fn new(range: RangeInclusive<u16>) -> Self {
		Self {
			state: Arc::new(Mutex::new(VlanState {
				free: range.clone().collect(),
				range,
				ports: HashMap::new(),
			})),
		}
	}

	/// Number of tags currently free.
	pub fn available(&self) -> usize {
		self.state.lock().free.len()
	}

	/// The port assignments applied so far, latest value per port.
	pub fn port_map(&self) -> HashMap<String, Option<String>> {
		self.state.lock().ports.clone()
	}
}

#[async_trait]
impl SwitchDriver for VlanDriver {
	async fn apply_networking(
		&self,
		net_map: &HashMap<String, Option<String>>,
	) -> DriverResult<()> {
		let mut state = self.state.lock();
		for (port, net_id) in net_map {
			state.ports.insert(port.clone(), net_id.clone());
		}
		Ok(())
	}

	async fn get_new_network_id(&self) -> DriverResult<Option<String>> {
		let mut state = self.state.lock();
		Ok(state.free.pop_first().map(|tag| tag.to_string()))
	}

	async fn free_network_id(&self, net_id: &str) -> DriverResult<()> {
		let tag: u16 = net_id
			.parse()
			.map_err(|_| DriverError::UnknownNetworkId(net_id.to_string()))?;
		let mut state = self.state.lock();
		if !state.range.contains(&tag) || state.free.contains(&tag) {
			return Err(DriverError::UnknownNetworkId(net_id.to_string()));
		}
		state.free.insert(tag);
		Ok(())
	}

	async fn init_db(&self) -> DriverResult<()> {
		let mut state = self.state.lock();
		state.free = state.range.clone().collect();
		state.ports.clear();
		Ok(())
	}
}
