//! HTTP response representation.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;
use switchyard_exception::ApiError;

use crate::error::{HttpError, HttpResult};

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    /// Create a new Response with the given status code
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_http::Response;
    /// use hyper::StatusCode;
    ///
    /// let response = Response::new(StatusCode::OK);
    /// assert_eq!(response.status, StatusCode::OK);
    /// assert!(response.body.is_empty());
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }
    /// Create a Response with HTTP 200 OK status
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_http::Response;
    /// use hyper::StatusCode;
    ///
    /// let response = Response::ok();
    /// assert_eq!(response.status, StatusCode::OK);
    /// ```
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }
    /// Create a Response with HTTP 400 Bad Request status
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }
    /// Create a Response with HTTP 404 Not Found status
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }
    /// Create a Response with HTTP 409 Conflict status
    pub fn conflict() -> Self {
        Self::new(StatusCode::CONFLICT)
    }
    /// Create a Response with HTTP 500 Internal Server Error status
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }
    /// Create a Response with HTTP 503 Service Unavailable status
    pub fn service_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE)
    }
    /// Set the response body
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_http::Response;
    /// use bytes::Bytes;
    ///
    /// let response = Response::ok().with_body("Hello, World!");
    /// assert_eq!(response.body, Bytes::from("Hello, World!"));
    /// ```
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
    /// Add a custom header to the response
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_http::Response;
    ///
    /// let response = Response::ok().with_header("X-Custom-Header", "custom-value");
    /// assert_eq!(
    ///     response.headers.get("X-Custom-Header").unwrap().to_str().unwrap(),
    ///     "custom-value"
    /// );
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes()) {
            if let Ok(header_value) = hyper::header::HeaderValue::from_str(value) {
                self.headers.insert(header_name, header_value);
            }
        }
        self
    }
    /// Set the response body to JSON and add appropriate Content-Type header
    ///
    /// # Examples
    ///
    /// ```
    /// use switchyard_http::Response;
    /// use serde_json::json;
    ///
    /// let data = json!({"name": "prod", "ports": []});
    /// let response = Response::ok().with_json(&data).unwrap();
    ///
    /// assert_eq!(
    ///     response.headers.get("content-type").unwrap().to_str().unwrap(),
    ///     "application/json"
    /// );
    /// ```
    pub fn with_json<T: Serialize>(mut self, data: &T) -> HttpResult<Self> {
        let json = serde_json::to_vec(data).map_err(|e| HttpError::Serialization(e.to_string()))?;
        self.body = Bytes::from(json);
        self.headers.insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }
}

impl From<ApiError> for Response {
    fn from(error: ApiError) -> Self {
        let status =
            StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Response::new(status)
            .with_json(&error.wire_body())
            .unwrap_or_else(|_| Response::internal_server_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_api_error_renders_status_and_wire_body() {
        // Arrange
        let error = ApiError::not_found("no network named prod");

        // Act
        let response = Response::from(error);

        // Assert
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"type": "NotFoundError", "msg": "no network named prod"})
        );
    }

    #[rstest]
    #[case(ApiError::api("x"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::duplicate("x"), StatusCode::CONFLICT)]
    #[case(ApiError::allocation("x"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(ApiError::server("x"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_each_kind_maps_to_its_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        let response = Response::from(error);
        assert_eq!(response.status, expected);
    }
}
