//! Handlers for the network and port operations.
//!
//! Each handler is one API operation: it names its parameters, pulls
//! them out of the bound arguments, mutates the registry, and talks to
//! the driver. Failures are [`ApiError`]s; the dispatcher turns them
//! into wire responses, so nothing here ever sees HTTP.

use async_trait::async_trait;
use hyper::Method;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use switchyard_drivers::{DriverError, SwitchDriver};
use switchyard_exception::{ApiError, ApiResult};
use switchyard_http::{ApiHandler, ApiOutput, BoundArgs};
use switchyard_routing::{RegistrationError, RouteTable};

use crate::registry::NetworkState;

fn driver_error(error: DriverError) -> ApiError {
	ApiError::server(error.to_string())
}

/// `PUT /network/{network}`: create a named network.
///
/// Allocates an identifier from the driver and records the network.
/// A taken name is a `DuplicateError`; an exhausted identifier pool an
/// `AllocationError`.
pub struct CreateNetwork {
	state: Arc<NetworkState>,
	driver: Arc<dyn SwitchDriver>,
}

impl CreateNetwork {
	pub fn new(state: Arc<NetworkState>, driver: Arc<dyn SwitchDriver>) -> Self {
		Self { state, driver }
	}
}

#[async_trait]
impl ApiHandler for CreateNetwork {
	fn param_names(&self) -> &[&str] {
		&["network"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let network = args.require("network")?;
		if self.state.contains_network(network) {
			return Err(ApiError::duplicate(format!(
				"network {network} already exists"
			)));
		}

		let network_id = self
			.driver
			.get_new_network_id()
			.await
			.map_err(driver_error)?
			.ok_or_else(|| ApiError::allocation("no network ids are available"))?;

		// A concurrent create may have taken the name since the check;
		// the identifier goes back to the pool in that case.
		if !self.state.insert_network(network, &network_id) {
			self.driver
				.free_network_id(&network_id)
				.await
				.map_err(driver_error)?;
			return Err(ApiError::duplicate(format!(
				"network {network} already exists"
			)));
		}
		Ok(ApiOutput::Empty)
	}
}

/// `DELETE /network/{network}`: delete a network and free its identifier.
///
/// Refused while any port is still attached. An unknown name is a
/// `NotFoundError`.
pub struct DeleteNetwork {
	state: Arc<NetworkState>,
	driver: Arc<dyn SwitchDriver>,
}

impl DeleteNetwork {
	pub fn new(state: Arc<NetworkState>, driver: Arc<dyn SwitchDriver>) -> Self {
		Self { state, driver }
	}
}

#[async_trait]
impl ApiHandler for DeleteNetwork {
	fn param_names(&self) -> &[&str] {
		&["network"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let network = args.require("network")?;
		let network_id = self.state.network_id(network).ok_or_else(|| {
			ApiError::not_found(format!("network {network} does not exist"))
		})?;
		if !self.state.attached_ports(network).is_empty() {
			return Err(ApiError::api(format!(
				"network {network} still has attached ports"
			)));
		}

		self.driver
			.free_network_id(&network_id)
			.await
			.map_err(driver_error)?;
		self.state.remove_network(network);
		Ok(ApiOutput::Empty)
	}
}

/// `GET /network/{network}`: describe one network.
///
/// Returns the name, the allocated identifier, and the sorted list of
/// attached ports.
pub struct ShowNetwork {
	state: Arc<NetworkState>,
}

impl ShowNetwork {
	pub fn new(state: Arc<NetworkState>) -> Self {
		Self { state }
	}
}

#[async_trait]
impl ApiHandler for ShowNetwork {
	fn param_names(&self) -> &[&str] {
		&["network"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let network = args.require("network")?;
		let network_id = self.state.network_id(network).ok_or_else(|| {
			ApiError::not_found(format!("network {network} does not exist"))
		})?;
		let ports = self.state.attached_ports(network);
		Ok(ApiOutput::Json(json!({
			"name": network,
			"network_id": network_id,
			"ports": ports,
		})))
	}
}

/// `GET /networks`: list all network names, sorted.
pub struct ListNetworks {
	state: Arc<NetworkState>,
}

impl ListNetworks {
	pub fn new(state: Arc<NetworkState>) -> Self {
		Self { state }
	}
}

#[async_trait]
impl ApiHandler for ListNetworks {
	fn param_names(&self) -> &[&str] {
		&[]
	}

	async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
		Ok(ApiOutput::Json(json!(self.state.network_names())))
	}
}

/// `PUT /network/{network}/port/{port}`: attach a port to a network.
///
/// Records the attachment, then pushes it to the switch. A port that is
/// already attached anywhere is a `DuplicateError`; the network must
/// exist first.
pub struct ConnectPort {
	state: Arc<NetworkState>,
	driver: Arc<dyn SwitchDriver>,
}

impl ConnectPort {
	pub fn new(state: Arc<NetworkState>, driver: Arc<dyn SwitchDriver>) -> Self {
		Self { state, driver }
	}
}

#[async_trait]
impl ApiHandler for ConnectPort {
	fn param_names(&self) -> &[&str] {
		&["network", "port"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let network = args.require("network")?;
		let port = args.require("port")?;
		let network_id = self.state.network_id(network).ok_or_else(|| {
			ApiError::not_found(format!("network {network} does not exist"))
		})?;

		self.state.attach_port(port, network).map_err(|existing| {
			ApiError::duplicate(format!(
				"port {port} is already attached to network {existing}"
			))
		})?;

		let mut net_map = HashMap::new();
		net_map.insert(port.to_string(), Some(network_id));
		self.driver
			.apply_networking(&net_map)
			.await
			.map_err(driver_error)?;
		Ok(ApiOutput::Empty)
	}
}

/// `DELETE /network/{network}/port/{port}`: detach a port.
///
/// The port must currently be attached to that very network; anything
/// else is a `NotFoundError`. The switch is told to assign the port to
/// nothing.
pub struct DetachPort {
	state: Arc<NetworkState>,
	driver: Arc<dyn SwitchDriver>,
}

impl DetachPort {
	pub fn new(state: Arc<NetworkState>, driver: Arc<dyn SwitchDriver>) -> Self {
		Self { state, driver }
	}
}

#[async_trait]
impl ApiHandler for DetachPort {
	fn param_names(&self) -> &[&str] {
		&["network", "port"]
	}

	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
		let network = args.require("network")?;
		let port = args.require("port")?;
		if self.state.network_id(network).is_none() {
			return Err(ApiError::not_found(format!(
				"network {network} does not exist"
			)));
		}
		if !self.state.detach_port(port, network) {
			return Err(ApiError::not_found(format!(
				"port {port} is not attached to network {network}"
			)));
		}

		let mut net_map = HashMap::new();
		net_map.insert(port.to_string(), None);
		self.driver
			.apply_networking(&net_map)
			.await
			.map_err(driver_error)?;
		Ok(ApiOutput::Empty)
	}
}

/// Register every API operation on a route table.
///
/// | method | pattern | handler |
/// |---|---|---|
/// | `PUT` | `/network/{network}` | [`CreateNetwork`] |
/// | `DELETE` | `/network/{network}` | [`DeleteNetwork`] |
/// | `GET` | `/network/{network}` | [`ShowNetwork`] |
/// | `GET` | `/networks` | [`ListNetworks`] |
/// | `PUT` | `/network/{network}/port/{port}` | [`ConnectPort`] |
/// | `DELETE` | `/network/{network}/port/{port}` | [`DetachPort`] |
pub fn register_api(
	table: &mut RouteTable,
	state: Arc<NetworkState>,
	driver: Arc<dyn SwitchDriver>,
) -> Result<(), RegistrationError> {
	table.register(
		Method::PUT,
		"/network/{network}",
		Arc::new(CreateNetwork::new(Arc::clone(&state), Arc::clone(&driver))),
	)?;
	table.register(
		Method::DELETE,
		"/network/{network}",
		Arc::new(DeleteNetwork::new(Arc::clone(&state), Arc::clone(&driver))),
	)?;
	table.register(
		Method::GET,
		"/network/{network}",
		Arc::new(ShowNetwork::new(Arc::clone(&state))),
	)?;
	table.register(
		Method::GET,
		"/networks",
		Arc::new(ListNetworks::new(Arc::clone(&state))),
	)?;
	table.register(
		Method::PUT,
		"/network/{network}/port/{port}",
		Arc::new(ConnectPort::new(Arc::clone(&state), Arc::clone(&driver))),
	)?;
	table.register(
		Method::DELETE,
		"/network/{network}/port/{port}",
		Arc::new(DetachPort::new(state, driver)),
	)?;
	Ok(())
}
