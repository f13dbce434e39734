//! Direct-vs-HTTP equivalence checking
//!
//! The contract of the API surface: invoking an operation directly and
//! invoking it over HTTP must be indistinguishable. A scenario describes
//! one operation both ways; [`check_equivalence`] runs both legs and
//! asserts the HTTP rendering matches the direct outcome exactly, down
//! to the failure wire format.

use async_trait::async_trait;
use serde_json::Value;
use switchyard_exception::ApiResult;
use switchyard_http::{ApiOutput, Request};
use switchyard_routing::Dispatcher;

use crate::response::TestResponse;

/// One API operation, described both as a direct call and as a request.
///
/// `api_setup` and `api_teardown` run around each leg separately, so
/// both invocations observe the same starting state even when the
/// operation mutates it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use hyper::Method;
/// use serde_json::json;
/// use switchyard_exception::ApiResult;
/// use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request};
/// use switchyard_routing::{Dispatcher, RouteTable};
/// use switchyard_test::{check_equivalence, ApiScenario};
///
/// struct ListNetworks;
///
/// #[async_trait]
/// impl ApiHandler for ListNetworks {
///     fn param_names(&self) -> &[&str] {
///         &[]
///     }
///
///     async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
///         Ok(json!(["net-a"]).into())
///     }
/// }
///
/// struct ListScenario;
///
/// #[async_trait]
/// impl ApiScenario for ListScenario {
///     async fn api_call(&self) -> ApiResult<ApiOutput> {
///         ListNetworks.call(&BoundArgs::new()).await
///     }
///
///     fn request(&self) -> Request {
///         Request::builder()
///             .method(Method::GET)
///             .uri("/networks")
///             .build()
///             .unwrap()
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut table = RouteTable::new();
///     table
///         .register(Method::GET, "/networks", Arc::new(ListNetworks))
///         .unwrap();
///     let dispatcher = Dispatcher::new(Arc::new(table));
///     check_equivalence(&dispatcher, &ListScenario).await;
/// }
/// ```
#[async_trait]
pub trait ApiScenario: Send + Sync {
	/// Invoke the operation directly, no HTTP involved.
	async fn api_call(&self) -> ApiResult<ApiOutput>;

	/// The request form of the same invocation.
	fn request(&self) -> Request;

	/// Prepare state before a leg runs.
	async fn api_setup(&self) {}

	/// Restore state after a leg ran.
	async fn api_teardown(&self) {}
}

/// Assert that the HTTP rendering of a scenario matches its direct outcome.
///
/// The HTTP leg runs first, then the direct leg, each between its own
/// setup and teardown. Panics with a description of the divergence when
/// the two legs disagree.
pub async fn check_equivalence(dispatcher: &Dispatcher, scenario: &dyn ApiScenario) {
	scenario.api_setup().await;
	let response = TestResponse::from_response(dispatcher.dispatch(scenario.request()).await);
	scenario.api_teardown().await;

	scenario.api_setup().await;
	let direct = scenario.api_call().await;
	scenario.api_teardown().await;

	match direct {
		Ok(ApiOutput::Empty) => {
			assert_eq!(
				response.status_code(),
				200,
				"Direct call produced the empty marker but HTTP returned status {}. Body: {}",
				response.status_code(),
				response.text()
			);
			assert!(
				response.body().is_empty(),
				"Direct call produced the empty marker but the HTTP body is not empty: {}",
				response.text()
			);
		}
		Ok(ApiOutput::Json(value)) => {
			assert_eq!(
				response.status_code(),
				200,
				"Direct call succeeded but HTTP returned status {}. Body: {}",
				response.status_code(),
				response.text()
			);
			let body: Value = response
				.json_value()
				.expect("successful responses carry a JSON body");
			assert_eq!(
				body, value,
				"HTTP response body diverged from the direct result"
			);
		}
		Err(error) => {
			assert_eq!(
				response.status_code(),
				error.status_code(),
				"Direct call failed with {} but HTTP returned status {}. Body: {}",
				error.kind(),
				response.status_code(),
				response.text()
			);
			let body: Value = response
				.json_value()
				.expect("failure responses carry a JSON body");
			assert_eq!(
				body,
				error.wire_body(),
				"HTTP error body diverged from the failure rendering"
			);
		}
	}
}
