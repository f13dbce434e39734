//! # Switchyard HTTP
//!
//! HTTP request/response types and the handler contract for Switchyard.
//!
//! [`Request`] and [`Response`] are plain data carriers built on hyper's
//! types. [`ApiHandler`] is the contract every API operation implements: it
//! declares its parameter names and receives bound string arguments, then
//! returns an [`ApiOutput`] or a taxonomy failure. The same handler object
//! serves direct calls and HTTP dispatch, which is what keeps the two
//! invocation paths equivalent.
//!
//! # Examples
//!
//! ```
//! use switchyard_http::{Request, Response};
//! use hyper::Method;
//!
//! let request = Request::builder()
//!     .method(Method::PUT)
//!     .uri("/network/prod")
//!     .build()
//!     .unwrap();
//! assert_eq!(request.path(), "/network/prod");
//!
//! let response = Response::ok().with_body("done");
//! assert_eq!(response.body, bytes::Bytes::from("done"));
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::{HttpError, HttpResult};
pub use handler::{ApiHandler, ApiOutput, BoundArgs};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Commonly used hyper types
pub use hyper::{HeaderMap, Method, StatusCode, Uri, Version};
