//! # Switchyard
//!
//! An HTTP control plane for network switch ports and virtual network IDs.
//!
//! Switchyard exposes backend network operations over HTTP through a small
//! dispatch layer with one hard guarantee: every operation behaves identically
//! whether it is invoked as a direct function call or as an HTTP request.
//! Handlers return `ApiResult<ApiOutput>`; the dispatcher is the single place
//! where a failure becomes a wire response.
//!
//! ## Core Principles
//!
//! - **Call/HTTP Equivalence**: direct calls and HTTP requests agree on
//!   success payloads and on failure kind, message, and status
//! - **Closed Failure Taxonomy**: every `ApiError` kind maps to exactly one
//!   status code and serializes as `{"type": ..., "msg": ...}`
//! - **Explicit Registration**: routes are registered with plain method calls
//!   at startup; duplicates and ambiguous overlaps are rejected immediately
//! - **Async-First**: built on tokio and hyper from the ground up
//!
//! ## Feature Flags
//!
//! - `minimal` - dispatch core only (routing, HTTP types, drivers, API handlers)
//! - `full` (default) - everything, including the server loop and test utilities
//! - `server` - hyper serve loop and environment-based settings
//! - `test` - in-process test client and the equivalence harness
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = Arc::new(NetworkState::new());
//!     let driver: Arc<dyn SwitchDriver> = Arc::new(VlanDriver::new(100..=200));
//!     driver.init_db().await?;
//!
//!     let mut table = RouteTable::new();
//!     register_api(&mut table, state, driver)?;
//!
//!     let dispatcher = Arc::new(Dispatcher::new(Arc::new(table)));
//!     switchyard::serve("127.0.0.1:5000".parse()?, dispatcher).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod drivers;
pub mod exception;
pub mod http;
pub mod routing;
#[cfg(feature = "server")]
pub mod server;

// Re-export the failure taxonomy
pub use switchyard_exception::{ApiError, ApiResult};

// Re-export HTTP types and the handler contract
pub use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request, RequestBuilder, Response};

// Re-export routing and dispatch
pub use switchyard_routing::{
	Dispatcher, MatchedRequest, PathMatcher, PathPattern, PatternError, RegistrationError,
	RouteTable,
};

// Re-export drivers
pub use switchyard_drivers::{DriverError, DriverResult, NullDriver, SwitchDriver, VlanDriver};

// Re-export the API operations
pub use switchyard_api::{NetworkState, register_api};

// Re-export the server loop
#[cfg(feature = "server")]
pub use switchyard_server::{HttpServer, Settings, SettingsError, serve};

// Re-export test utilities
#[cfg(feature = "test")]
pub use switchyard_test::{ApiClient, ApiScenario, ResponseExt, TestResponse, check_equivalence};

// Re-export Method and StatusCode from hyper (already used in switchyard_http)
pub use hyper::{Method, StatusCode};

// Re-export common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;

pub mod prelude {
	// Core types - always available
	pub use crate::{
		ApiError,
		ApiHandler,
		ApiOutput,
		ApiResult,
		BoundArgs,
		Dispatcher,
		Method,
		NetworkState,
		NullDriver,
		Request,
		Response,
		RouteTable,
		StatusCode,
		SwitchDriver,
		VlanDriver,
		// Registration
		register_api,
	};

	// External
	pub use async_trait::async_trait;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Value, json};

	// Server feature
	#[cfg(feature = "server")]
	pub use crate::{HttpServer, Settings, serve};

	// Test feature
	#[cfg(feature = "test")]
	pub use crate::{ApiClient, ApiScenario, ResponseExt, TestResponse, check_equivalence};
}
