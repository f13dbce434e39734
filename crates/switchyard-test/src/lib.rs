//! Test support for switchyard.
//!
//! Three pieces, all dispatcher-backed so tests never open a socket:
//!
//! - [`ApiClient`]: a small HTTP-shaped client that serializes request
//!   data, runs the request through a [`Dispatcher`], and wraps what
//!   comes back.
//! - [`TestResponse`] and [`ResponseExt`]: response inspection plus
//!   chainable assertion helpers.
//! - [`ApiScenario`] and [`check_equivalence`]: the harness behind the
//!   core guarantee that calling a handler directly and calling it over
//!   HTTP produce the same observable outcome.
//!
//! [`Dispatcher`]: switchyard_routing::Dispatcher
//!
//! # Examples
//!
//! ```rust,ignore
//! use switchyard_test::{ApiClient, ResponseExt};
//!
//! let client = ApiClient::new(dispatcher);
//! let response = client.get("/networks").await.unwrap();
//! response.assert_ok();
//! assert_eq!(response.json_value().unwrap(), serde_json::json!([]));
//! ```

pub mod client;
pub mod equivalence;
pub mod response;

pub use client::{ApiClient, ClientError, ClientResult};
pub use equivalence::{ApiScenario, check_equivalence};
pub use response::{ResponseExt, TestResponse};
