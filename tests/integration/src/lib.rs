//! Integration test utilities for Switchyard
//!
//! Shared fixtures for wiring the whole stack together: the routed API
//! over a driver, and a live server on an ephemeral port for tests that
//! need a real socket.

use std::net::SocketAddr;
use std::sync::Arc;
use switchyard_api::{NetworkState, register_api};
use switchyard_drivers::{SwitchDriver, VlanDriver};
use switchyard_routing::{Dispatcher, RouteTable};
use switchyard_server::HttpServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Wire the full API over a driver, ready to dispatch.
///
/// Returns the shared state too, so scenarios can invoke handlers
/// directly against the same world the routes see.
pub fn build_api(driver: Arc<dyn SwitchDriver>) -> (Arc<Dispatcher>, Arc<NetworkState>) {
	let state = Arc::new(NetworkState::new());
	let mut table = RouteTable::new();
	register_api(&mut table, Arc::clone(&state), driver)
		.expect("API route registration must not conflict");
	(Arc::new(Dispatcher::new(Arc::new(table))), state)
}

/// The API over a VLAN pool, keeping a handle on the driver so tests
/// can inspect what was pushed to the switch.
pub fn build_vlan_api(range: std::ops::RangeInclusive<u16>) -> (Arc<Dispatcher>, VlanDriver) {
	let driver = VlanDriver::new(range);
	let (dispatcher, _state) = build_api(Arc::new(driver.clone()));
	(dispatcher, driver)
}

/// Spawn a live server on an ephemeral port.
///
/// The listener is bound before the accept loop is spawned, so clients
/// may connect as soon as this returns. Stop the server with
/// [`shutdown_test_server`].
pub async fn spawn_test_server(dispatcher: Arc<Dispatcher>) -> (String, JoinHandle<()>) {
	let listener = TcpListener::bind("127.0.0.1:0")
		.await
		.expect("Failed to bind to address");
	let addr: SocketAddr = listener.local_addr().expect("Failed to get local address");

	let server = HttpServer::new(dispatcher);
	let handle = tokio::spawn(async move {
		let _ = server.listen_on(listener).await;
	});

	(format!("http://{addr}"), handle)
}

/// Stop a server spawned by [`spawn_test_server`].
pub async fn shutdown_test_server(handle: JoinHandle<()>) {
	handle.abort();
	let _ = handle.await;
}
