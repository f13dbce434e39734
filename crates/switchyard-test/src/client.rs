//! API client for testing
//!
//! Speaks the same request shapes a real HTTP client would, but hands
//! every request straight to a [`Dispatcher`], so tests exercise the
//! full match/bind/invoke/serialize pipeline without a socket.

use bytes::Bytes;
use hyper::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use switchyard_http::{HttpError, Request};
use switchyard_routing::Dispatcher;
use thiserror::Error;

use crate::response::TestResponse;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("HTTP error: {0}")]
	Http(#[from] HttpError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Form encoding error: {0}")]
	FormEncoding(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Test client for making API requests
///
/// # Examples
///
/// ```rust,ignore
/// use switchyard_test::ApiClient;
/// use serde_json::json;
///
/// let client = ApiClient::new(dispatcher);
/// client.put("/network/prod", &json!({}), "json").await?;
/// let response = client.get("/networks").await?;
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct ApiClient {
	/// Base URL accepted in absolute paths (e.g., "http://testserver")
	base_url: String,

	/// Dispatcher every request is run through
	dispatcher: Arc<Dispatcher>,
}

impl ApiClient {
	/// Create a client over a dispatcher with the default base URL.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use switchyard_routing::{Dispatcher, RouteTable};
	/// use switchyard_test::ApiClient;
	///
	/// let dispatcher = Arc::new(Dispatcher::new(Arc::new(RouteTable::new())));
	/// let client = ApiClient::new(dispatcher);
	/// assert_eq!(client.base_url(), "http://testserver");
	/// ```
	pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
		Self::with_base_url(dispatcher, "http://testserver")
	}

	/// Create a client with a custom base URL.
	pub fn with_base_url(dispatcher: Arc<Dispatcher>, base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			dispatcher,
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Make a GET request
	pub async fn get(&self, path: &str) -> ClientResult<TestResponse> {
		self.request(Method::GET, path, None, None).await
	}

	/// Make a DELETE request
	pub async fn delete(&self, path: &str) -> ClientResult<TestResponse> {
		self.request(Method::DELETE, path, None, None).await
	}

	/// Make a POST request with `"json"` or `"form"` encoded data
	pub async fn post<T: Serialize>(
		&self,
		path: &str,
		data: &T,
		format: &str,
	) -> ClientResult<TestResponse> {
		let body = self.serialize_data(data, format)?;
		let content_type = self.get_content_type(format);
		self.request(Method::POST, path, Some(body), Some(content_type))
			.await
	}

	/// Make a PUT request with `"json"` or `"form"` encoded data
	pub async fn put<T: Serialize>(
		&self,
		path: &str,
		data: &T,
		format: &str,
	) -> ClientResult<TestResponse> {
		let body = self.serialize_data(data, format)?;
		let content_type = self.get_content_type(format);
		self.request(Method::PUT, path, Some(body), Some(content_type))
			.await
	}

	/// Generic request method
	async fn request(
		&self,
		method: Method,
		path: &str,
		body: Option<Bytes>,
		content_type: Option<&str>,
	) -> ClientResult<TestResponse> {
		let target = path.strip_prefix(&self.base_url).unwrap_or(path);

		let mut builder = Request::builder().method(method).uri(target);
		if let Some(ct) = content_type {
			builder = builder.header("content-type", ct);
		}
		if let Some(bytes) = body {
			builder = builder.body(bytes);
		}
		let request = builder.build()?;

		let response = self.dispatcher.dispatch(request).await;
		Ok(TestResponse::from_response(response))
	}

	/// Serialize data based on format
	fn serialize_data<T: Serialize>(&self, data: &T, format: &str) -> ClientResult<Bytes> {
		match format {
			"json" => {
				let json = serde_json::to_vec(data)?;
				Ok(Bytes::from(json))
			}
			"form" => {
				// Flatten through a JSON object so callers can pass maps,
				// structs, or json! literals interchangeably
				let json_value = serde_json::to_value(data)?;
				let Value::Object(map) = json_value else {
					return Err(ClientError::FormEncoding(
						"expected an object for form data".to_string(),
					));
				};
				let pairs: Vec<(String, String)> = map
					.into_iter()
					.map(|(key, value)| {
						let text = match value {
							Value::String(s) => s,
							other => other.to_string(),
						};
						(key, text)
					})
					.collect();
				let encoded = serde_urlencoded::to_string(&pairs)
					.map_err(|e| ClientError::FormEncoding(e.to_string()))?;
				Ok(Bytes::from(encoded))
			}
			_ => Err(ClientError::UnsupportedFormat(format.to_string())),
		}
	}

	/// Get content type for format
	fn get_content_type(&self, format: &str) -> &str {
		match format {
			"json" => "application/json",
			"form" => "application/x-www-form-urlencoded",
			_ => "application/octet-stream",
		}
	}
}
