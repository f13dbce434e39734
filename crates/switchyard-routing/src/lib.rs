//! # Switchyard Routing
//!
//! Route table, path matching, argument binding, and request dispatch.
//!
//! Routes are registered once at startup with explicit [`RouteTable::register`]
//! calls; a duplicate or unresolvably overlapping registration fails right
//! there instead of shadowing silently. During serving the table is shared
//! read-only behind an `Arc` and the [`Dispatcher`] drives every request
//! through the same stages: match the path, bind the handler's declared
//! arguments, invoke it, and serialize the outcome. The dispatcher is the
//! single place a taxonomy failure becomes a wire response.
//!
//! # Examples
//!
//! ```
//! use switchyard_routing::{Dispatcher, RouteTable};
//! use switchyard_http::{ApiHandler, ApiOutput, BoundArgs, Request};
//! use switchyard_exception::ApiResult;
//! use async_trait::async_trait;
//! use hyper::Method;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct ShowNetwork;
//!
//! #[async_trait]
//! impl ApiHandler for ShowNetwork {
//!     fn param_names(&self) -> &[&str] {
//!         &["network"]
//!     }
//!
//!     async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
//!         Ok(json!({"name": args.require("network")?}).into())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let mut table = RouteTable::new();
//! table.register(Method::GET, "/network/{network}", Arc::new(ShowNetwork)).unwrap();
//!
//! let dispatcher = Dispatcher::new(Arc::new(table));
//! let request = Request::builder().uri("/network/prod").build().unwrap();
//! let response = dispatcher.dispatch(request).await;
//! assert_eq!(response.status, hyper::StatusCode::OK);
//! # });
//! ```

pub mod binder;
pub mod dispatch;
pub mod matcher;
pub mod pattern;
pub mod table;

pub use binder::bind_arguments;
pub use dispatch::Dispatcher;
pub use matcher::{MatchedRequest, PathMatcher, split_path};
pub use pattern::{PathPattern, PatternError, Segment};
pub use table::{RegistrationError, RouteBinding, RouteTable};
