//! In-memory registry of networks and port attachments.

use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct StateInner {
	/// Network name to the driver-allocated identifier.
	networks: HashMap<String, String>,
	/// Port name to the network it is attached to; `None` once detached.
	ports: HashMap<String, Option<String>>,
}

/// Shared registry the API handlers read and mutate.
///
/// Holds which networks exist, which identifier each one was allocated,
/// and which network each known port is attached to. All methods take
/// `&self` and lock internally, so one instance sits behind an `Arc`
/// and serves every handler.
///
/// Listing methods return sorted clones; nothing hands out references
/// into the locked state.
///
/// # Examples
///
/// ```
/// use switchyard_api::NetworkState;
///
/// let state = NetworkState::new();
/// assert!(state.insert_network("prod", "100"));
///
/// state.attach_port("gi0/1", "prod").unwrap();
/// assert_eq!(state.attached_ports("prod"), vec!["gi0/1"]);
/// ```
#[derive(Default)]
pub struct NetworkState {
	inner: RwLock<StateInner>,
}

impl NetworkState {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a network with this name exists.
	pub fn contains_network(&self, name: &str) -> bool {
		self.inner.read().networks.contains_key(name)
	}

	/// Record a network and its identifier.
	///
	/// Returns `false` without touching anything when the name is
	/// already taken.
	pub fn insert_network(&self, name: &str, network_id: &str) -> bool {
		let mut inner = self.inner.write();
		if inner.networks.contains_key(name) {
			return false;
		}
		inner
			.networks
			.insert(name.to_string(), network_id.to_string());
		true
	}

	/// Drop a network, yielding its identifier if it existed.
	pub fn remove_network(&self, name: &str) -> Option<String> {
		self.inner.write().networks.remove(name)
	}

	/// The identifier allocated to a network.
	pub fn network_id(&self, name: &str) -> Option<String> {
		self.inner.read().networks.get(name).cloned()
	}

	/// All network names, sorted.
	pub fn network_names(&self) -> Vec<String> {
		let inner = self.inner.read();
		let mut names: Vec<String> = inner.networks.keys().cloned().collect();
		names.sort();
		names
	}

	/// Names of the ports attached to a network, sorted.
	pub fn attached_ports(&self, network: &str) -> Vec<String> {
		let inner = self.inner.read();
		let mut ports: Vec<String> = inner
			.ports
			.iter()
			.filter(|(_, attached)| attached.as_deref() == Some(network))
			.map(|(port, _)| port.clone())
			.collect();
		ports.sort();
		ports
	}

	/// Attach a port to a network.
	///
	/// Fails with the name of the network the port is currently
	/// attached to, including when that is the same network; attaching
	/// is never idempotent.
	pub fn attach_port(&self, port: &str, network: &str) -> Result<(), String> {
		let mut inner = self.inner.write();
		if let Some(Some(existing)) = inner.ports.get(port) {
			return Err(existing.clone());
		}
		inner
			.ports
			.insert(port.to_string(), Some(network.to_string()));
		Ok(())
	}

	/// Detach a port, but only if it is attached to this network.
	///
	/// Returns `false` when the port is unknown, already detached, or
	/// attached to a different network. The port stays known after a
	/// successful detach, assigned to nothing.
	pub fn detach_port(&self, port: &str, network: &str) -> bool {
		let mut inner = self.inner.write();
		let attached = matches!(inner.ports.get(port), Some(Some(net)) if net == network);
		if attached {
			inner.ports.insert(port.to_string(), None);
		}
		attached
	}
}
