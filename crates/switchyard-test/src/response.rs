//! Test response wrapper with assertion helpers

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode, Version};
use serde::de::DeserializeOwned;
use serde_json::Value;
use switchyard_http::Response;

/// Test response wrapper
#[derive(Debug)]
pub struct TestResponse {
	status: StatusCode,
	headers: HeaderMap,
	body: Bytes,
	version: Version,
}

impl TestResponse {
	/// Wrap a dispatched response (HTTP/1.1 implied)
	///
	/// # Examples
	///
	/// ```
	/// use switchyard_test::TestResponse;
	/// use switchyard_http::Response;
	///
	/// let response = TestResponse::from_response(Response::ok().with_body("hi"));
	/// assert_eq!(response.status_code(), 200);
	/// assert_eq!(response.text(), "hi");
	/// ```
	pub fn from_response(response: Response) -> Self {
		Self {
			status: response.status,
			headers: response.headers,
			body: response.body,
			version: Version::HTTP_11,
		}
	}

	/// Create a test response with status, headers, body, and HTTP version
	pub fn with_body_and_version(
		status: StatusCode,
		headers: HeaderMap,
		body: Bytes,
		version: Version,
	) -> Self {
		Self {
			status,
			headers,
			body,
			version,
		}
	}

	/// Get response status
	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Get response status code as u16
	pub fn status_code(&self) -> u16 {
		self.status.as_u16()
	}

	/// Get HTTP version of the response
	pub fn version(&self) -> Version {
		self.version
	}

	/// Get response headers
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Get response body as bytes
	pub fn body(&self) -> &Bytes {
		&self.body
	}

	/// Get response body as string
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).to_string()
	}

	/// Parse response body as JSON
	pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_slice(&self.body)
	}

	/// Parse response body as generic JSON value
	pub fn json_value(&self) -> Result<Value, serde_json::Error> {
		serde_json::from_slice(&self.body)
	}

	/// Check if response is successful (2xx)
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Check if response is client error (4xx)
	pub fn is_client_error(&self) -> bool {
		self.status.is_client_error()
	}

	/// Check if response is server error (5xx)
	pub fn is_server_error(&self) -> bool {
		self.status.is_server_error()
	}

	/// Get content type header
	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get("content-type")
			.and_then(|v| v.to_str().ok())
	}

	/// Get header value
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
}

/// Extension trait for Response assertions
pub trait ResponseExt {
	/// Assert status code
	fn assert_status(&self, expected: StatusCode) -> &Self;

	/// Assert 2xx success
	fn assert_success(&self) -> &Self;

	/// Assert 4xx client error
	fn assert_client_error(&self) -> &Self;

	/// Assert 5xx server error
	fn assert_server_error(&self) -> &Self;

	/// Assert specific status codes
	fn assert_ok(&self) -> &Self;
	fn assert_bad_request(&self) -> &Self;
	fn assert_not_found(&self) -> &Self;
	fn assert_conflict(&self) -> &Self;
	fn assert_service_unavailable(&self) -> &Self;
	fn assert_internal_server_error(&self) -> &Self;
}

impl ResponseExt for TestResponse {
	fn assert_status(&self, expected: StatusCode) -> &Self {
		assert_eq!(
			self.status,
			expected,
			"Expected status {}, got {}. Body: {}",
			expected,
			self.status,
			self.text()
		);
		self
	}

	fn assert_success(&self) -> &Self {
		assert!(
			self.is_success(),
			"Expected success status (2xx), got {}. Body: {}",
			self.status,
			self.text()
		);
		self
	}

	fn assert_client_error(&self) -> &Self {
		assert!(
			self.is_client_error(),
			"Expected client error status (4xx), got {}. Body: {}",
			self.status,
			self.text()
		);
		self
	}

	fn assert_server_error(&self) -> &Self {
		assert!(
			self.is_server_error(),
			"Expected server error status (5xx), got {}. Body: {}",
			self.status,
			self.text()
		);
		self
	}

	fn assert_ok(&self) -> &Self {
		self.assert_status(StatusCode::OK)
	}

	fn assert_bad_request(&self) -> &Self {
		self.assert_status(StatusCode::BAD_REQUEST)
	}

	fn assert_not_found(&self) -> &Self {
		self.assert_status(StatusCode::NOT_FOUND)
	}

	fn assert_conflict(&self) -> &Self {
		self.assert_status(StatusCode::CONFLICT)
	}

	fn assert_service_unavailable(&self) -> &Self {
		self.assert_status(StatusCode::SERVICE_UNAVAILABLE)
	}

	fn assert_internal_server_error(&self) -> &Self {
		self.assert_status(StatusCode::INTERNAL_SERVER_ERROR)
	}
}
