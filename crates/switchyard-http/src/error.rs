//! Infrastructure errors for HTTP type construction.

use thiserror::Error;

/// Result alias for HTTP type construction.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors raised while building or reading HTTP types.
///
/// These are infrastructure errors and never reach the wire taxonomy.
/// Callers that need a wire failure map them into one at the boundary
/// (the argument binder turns [`HttpError::MalformedForm`] into a
/// 400-class taxonomy failure, for example).
#[derive(Debug, Error)]
pub enum HttpError {
	/// The URI given to the request builder failed to parse.
	#[error("invalid uri: {0}")]
	InvalidUri(String),
	/// A body failed to serialize.
	#[error("serialization failed: {0}")]
	Serialization(String),
	/// An urlencoded body could not be decoded.
	#[error("malformed urlencoded body: {0}")]
	MalformedForm(String),
}
