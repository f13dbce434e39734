//! The dispatch pipeline: match, bind, invoke, serialize.

use std::sync::Arc;
use switchyard_exception::{ApiError, ApiResult};
use switchyard_http::{ApiOutput, Request, Response};
use tracing::debug;

use crate::binder::bind_arguments;
use crate::table::RouteTable;

/// Drives a request through the route table to a response.
///
/// Every request follows the same stages: match the path, bind the
/// handler's arguments, invoke it, serialize the outcome. `dispatch`
/// is infallible; any [`ApiError`] raised along the way is rendered
/// as its wire form instead of propagating. Panics are not caught.
///
/// The dispatcher holds the table behind an `Arc` and takes `&self`
/// everywhere, so one instance serves concurrent requests and is the
/// same object tests call directly.
///
/// # Examples
///
/// ```
/// use switchyard_routing::{Dispatcher, RouteTable};
/// use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request};
/// use switchyard_exception::ApiResult;
/// use async_trait::async_trait;
/// use hyper::Method;
/// use std::sync::Arc;
///
/// # struct Ping;
/// # #[async_trait]
/// # impl ApiHandler for Ping {
/// #     fn param_names(&self) -> &[&str] { &[] }
/// #     async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
/// #         Ok(ApiOutput::Json(serde_json::json!({"pong": true})))
/// #     }
/// # }
/// let mut table = RouteTable::new();
/// table.register(Method::GET, "/ping", Arc::new(Ping)).unwrap();
/// let dispatcher = Dispatcher::new(Arc::new(table));
///
/// let request = Request::builder().uri("/ping").build().unwrap();
/// let response = tokio_test::block_on(dispatcher.dispatch(request));
/// assert_eq!(response.status.as_u16(), 200);
/// ```
pub struct Dispatcher {
	table: Arc<RouteTable>,
}

impl Dispatcher {
	/// Wrap a fully registered table.
	pub fn new(table: Arc<RouteTable>) -> Self {
		Self { table }
	}

	/// The table this dispatcher resolves against.
	pub fn table(&self) -> &Arc<RouteTable> {
		&self.table
	}

	/// Run a request through the pipeline and produce its response.
	///
	/// Success output becomes a 200 response: a JSON payload is
	/// serialized unchanged, the empty marker an empty body. A failed
	/// stage short-circuits the rest and is rendered from the error's
	/// own kind and status, so an unmatched path, a missing argument,
	/// and a handler failure all leave through the same door.
	pub async fn dispatch(&self, request: Request) -> Response {
		debug!(method = %request.method, path = %request.path(), "dispatching request");
		match self.run(request).await {
			Ok(output) => Self::serialize(output),
			Err(error) => Response::from(error),
		}
	}

	async fn run(&self, mut request: Request) -> ApiResult<ApiOutput> {
		let method = request.method.clone();
		let path = request.path().to_string();

		let matched = self
			.table
			.match_path(&method, &path)
			.ok_or_else(|| ApiError::not_found(format!("no route for {method} {path}")))?;
		debug!(params = matched.path_args().len(), "route resolved");

		for (name, value) in matched.path_args() {
			request.set_path_param(name.clone(), value.clone());
		}

		let handler = matched.handler();
		let args = bind_arguments(handler.param_names(), matched.path_args(), &request)?;
		handler.call(&args).await
	}

	fn serialize(output: ApiOutput) -> Response {
		match output {
			ApiOutput::Empty => Response::ok(),
			ApiOutput::Json(value) => Response::ok()
				.with_json(&value)
				.unwrap_or_else(|_| Response::internal_server_error()),
		}
	}
}
