//! HTTP request representation and builder.

mod params;

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::{HttpError, HttpResult};

/// HTTP Request representation
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Raw query parameters parsed from the URI
	pub query_params: HashMap<String, String>,
	/// Path parameters extracted by the router
	pub path_params: HashMap<String, String>,
}

impl Request {
	/// Start building a request.
	///
	/// # Examples
	///
	/// ```
	/// use switchyard_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/networks")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.method, Method::GET);
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Construct a request directly from its parts.
	///
	/// The server glue uses this after collecting the body; query
	/// parameters are parsed from the URI here.
	pub fn from_parts(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			query_params,
			path_params: HashMap::new(),
		}
	}

	/// Decoded form fields from an `application/x-www-form-urlencoded` body.
	///
	/// Returns an empty map when the content type is absent or different.
	/// A body that is not valid UTF-8 is malformed. For repeated field
	/// names the first occurrence wins, matching multi-value form lookups.
	///
	/// # Examples
	///
	/// ```
	/// use switchyard_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::PUT)
	///     .uri("/network/prod/port/gi0-1")
	///     .form(&[("port", "gi0/1")])
	///     .build()
	///     .unwrap();
	///
	/// let form = request.form_params().unwrap();
	/// assert_eq!(form.get("port"), Some(&"gi0/1".to_string()));
	/// ```
	pub fn form_params(&self) -> HttpResult<HashMap<String, String>> {
		if !self.is_form_urlencoded() || self.body.is_empty() {
			return Ok(HashMap::new());
		}
		let text = std::str::from_utf8(&self.body)
			.map_err(|e| HttpError::MalformedForm(e.to_string()))?;
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(text)
			.map_err(|e| HttpError::MalformedForm(e.to_string()))?;
		let mut fields = HashMap::new();
		for (name, value) in pairs {
			fields.entry(name).or_insert(value);
		}
		Ok(fields)
	}

	fn is_form_urlencoded(&self) -> bool {
		self.headers
			.get(hyper::header::CONTENT_TYPE)
			.and_then(|h| h.to_str().ok())
			.map(|ct| {
				ct.split(';')
					.next()
					.unwrap_or("")
					.trim()
					.eq_ignore_ascii_case("application/x-www-form-urlencoded")
			})
			.unwrap_or(false)
	}
}

/// Builder for [`Request`]
///
/// The URI is parsed and the form body (if any) encoded in [`build`],
/// which is why construction is fallible.
///
/// [`build`]: RequestBuilder::build
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	form: Option<HttpResult<String>>,
}

impl RequestBuilder {
	/// Create a builder with GET, `/`, and HTTP/1.1 defaults.
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: String::from("/"),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			form: None,
		}
	}

	/// Set the request method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Set the request URI (path and optional query string).
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Set the HTTP version.
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replace all headers.
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Insert a single header; invalid names or values are ignored.
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}

	/// Set a raw body.
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Use an `application/x-www-form-urlencoded` body.
	///
	/// Accepts anything `serde_urlencoded` can serialize, typically a
	/// slice of string pairs.
	pub fn form<T: Serialize>(mut self, form: &T) -> Self {
		self.form = Some(
			serde_urlencoded::to_string(form)
				.map_err(|e| HttpError::Serialization(e.to_string())),
		);
		self
	}

	/// Build the request, parsing the URI and encoding any form body.
	pub fn build(mut self) -> HttpResult<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e: http::uri::InvalidUri| HttpError::InvalidUri(e.to_string()))?;
		if let Some(form) = self.form {
			let encoded = form?;
			self.headers.insert(
				hyper::header::CONTENT_TYPE,
				HeaderValue::from_static("application/x-www-form-urlencoded"),
			);
			self.body = Bytes::from(encoded);
		}
		Ok(Request::from_parts(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}
