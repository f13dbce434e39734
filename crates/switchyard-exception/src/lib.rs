//! Failure taxonomy for the Switchyard API.
//!
//! Every fallible API operation returns [`ApiResult`]. The error type is a
//! closed hierarchy: each kind carries a human-readable message and maps to
//! exactly one HTTP status code. The dispatcher renders a failure as a JSON
//! body of the form `{"type": <kind>, "msg": <message>}` with the kind's
//! status on the wire, so a failure observed over HTTP carries the same
//! identity as one observed from a direct call.
//!
//! New kinds are added as enum variants; there is no runtime registration.
//!
//! # Examples
//!
//! ```rust
//! use switchyard_exception::{ApiError, ApiResult};
//!
//! fn find_network(name: &str) -> ApiResult<String> {
//! 	Err(ApiError::not_found(format!("no network named {name}")))
//! }
//!
//! let err = find_network("prod").unwrap_err();
//! assert_eq!(err.kind(), "NotFoundError");
//! assert_eq!(err.status_code(), 404);
//! ```

use serde_json::{Value, json};
use thiserror::Error;

/// Result alias used at every handler boundary.
pub type ApiResult<T> = Result<T, ApiError>;

/// A failure raised by an API operation.
///
/// The hierarchy is closed. Every variant maps to exactly one wire name and
/// one status code, and the mapping never depends on runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// Unclassified domain failure, the base of the hierarchy.
	#[error("{0}")]
	Api(String),
	/// A required argument was missing or malformed.
	#[error("{0}")]
	BadArgument(String),
	/// No route matched, or a referenced object does not exist.
	#[error("{0}")]
	NotFound(String),
	/// The object being created already exists.
	#[error("{0}")]
	Duplicate(String),
	/// The driver could not allocate a new network ID.
	#[error("{0}")]
	Allocation(String),
	/// An internal invariant was violated inside a handler.
	#[error("{0}")]
	Server(String),
}

impl ApiError {
	/// Unclassified domain failure (status 400).
	pub fn api(msg: impl Into<String>) -> Self {
		Self::Api(msg.into())
	}

	/// Missing or malformed required argument (status 400).
	pub fn bad_argument(msg: impl Into<String>) -> Self {
		Self::BadArgument(msg.into())
	}

	/// Route or referenced object absent (status 404).
	pub fn not_found(msg: impl Into<String>) -> Self {
		Self::NotFound(msg.into())
	}

	/// Object already exists (status 409).
	pub fn duplicate(msg: impl Into<String>) -> Self {
		Self::Duplicate(msg.into())
	}

	/// Network ID pool exhausted (status 503).
	pub fn allocation(msg: impl Into<String>) -> Self {
		Self::Allocation(msg.into())
	}

	/// Internal invariant violation (status 500).
	pub fn server(msg: impl Into<String>) -> Self {
		Self::Server(msg.into())
	}

	/// The wire name serialized into the `"type"` field.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Api(_) => "APIError",
			Self::BadArgument(_) => "BadArgumentError",
			Self::NotFound(_) => "NotFoundError",
			Self::Duplicate(_) => "DuplicateError",
			Self::Allocation(_) => "AllocationError",
			Self::Server(_) => "ServerError",
		}
	}

	/// The HTTP status code this kind always maps to.
	pub fn status_code(&self) -> u16 {
		match self {
			Self::Api(_) | Self::BadArgument(_) => 400,
			Self::NotFound(_) => 404,
			Self::Duplicate(_) => 409,
			Self::Allocation(_) => 503,
			Self::Server(_) => 500,
		}
	}

	/// The message serialized into the `"msg"` field.
	pub fn message(&self) -> &str {
		match self {
			Self::Api(msg)
			| Self::BadArgument(msg)
			| Self::NotFound(msg)
			| Self::Duplicate(msg)
			| Self::Allocation(msg)
			| Self::Server(msg) => msg,
		}
	}

	/// The JSON body this failure serializes to on the wire.
	pub fn wire_body(&self) -> Value {
		json!({ "type": self.kind(), "msg": self.message() })
	}
}
