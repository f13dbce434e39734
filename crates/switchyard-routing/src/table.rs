//! Route registration and the startup-time overlap checks.

use hyper::Method;
use std::sync::Arc;
use switchyard_http::ApiHandler;
use thiserror::Error;

use crate::matcher::{MatchedRequest, PathMatcher};
use crate::pattern::{PathPattern, PatternError};

/// Errors raised while registering a route.
///
/// All of these surface at startup, before any request is served; a table
/// that registered successfully can never produce an ambiguous match.
#[derive(Debug, Error)]
pub enum RegistrationError {
	/// The pattern string failed to parse.
	#[error("invalid pattern {pattern:?}: {source}")]
	Pattern {
		pattern: String,
		#[source]
		source: PatternError,
	},
	/// The same (method, pattern) pair is already registered.
	#[error("duplicate route: {method} {pattern}")]
	Duplicate { method: Method, pattern: String },
	/// Another same-method pattern could match the same paths with the
	/// same variable count, so no specificity rule could pick a winner.
	#[error("ambiguous route: {method} {pattern} cannot be distinguished from {existing}")]
	Ambiguous {
		method: Method,
		pattern: String,
		existing: String,
	},
}

/// One registered route: method, pattern, and the handler behind them.
pub struct RouteBinding {
	method: Method,
	pattern: PathPattern,
	handler: Arc<dyn ApiHandler>,
}

impl RouteBinding {
	/// The HTTP method this route answers.
	pub fn method(&self) -> &Method {
		&self.method
	}

	/// The compiled path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// The handler invoked on a match.
	pub fn handler(&self) -> &Arc<dyn ApiHandler> {
		&self.handler
	}
}

/// The set of all registered routes.
///
/// Populated at startup with [`register`] calls and immutable during
/// serving; the dispatcher shares it behind an `Arc` without locking.
/// Tests construct their own isolated tables.
///
/// [`register`]: RouteTable::register
///
/// # Examples
///
/// ```
/// use switchyard_routing::RouteTable;
/// use switchyard_http::{ApiHandler, ApiOutput, BoundArgs};
/// use switchyard_exception::ApiResult;
/// use async_trait::async_trait;
/// use hyper::Method;
/// use std::sync::Arc;
///
/// # struct ListNetworks;
/// # #[async_trait]
/// # impl ApiHandler for ListNetworks {
/// #     fn param_names(&self) -> &[&str] { &[] }
/// #     async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
/// #         Ok(ApiOutput::Empty)
/// #     }
/// # }
/// let mut table = RouteTable::new();
/// table.register(Method::GET, "/networks", Arc::new(ListNetworks)).unwrap();
///
/// // The same (method, pattern) pair cannot be registered twice
/// assert!(table.register(Method::GET, "/networks/", Arc::new(ListNetworks)).is_err());
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Default)]
pub struct RouteTable {
	bindings: Vec<RouteBinding>,
	matcher: PathMatcher,
}

impl RouteTable {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a handler for a method and path pattern.
	///
	/// Fails when the pattern does not parse, when the same (method,
	/// pattern) pair already exists, or when an existing same-method
	/// pattern overlaps this one with an equal variable count. Nothing
	/// is ever shadowed silently.
	pub fn register(
		&mut self,
		method: Method,
		pattern: &str,
		handler: Arc<dyn ApiHandler>,
	) -> Result<(), RegistrationError> {
		let parsed =
			PathPattern::new(pattern).map_err(|source| RegistrationError::Pattern {
				pattern: pattern.to_string(),
				source,
			})?;

		for existing in &self.bindings {
			if existing.method != method || !existing.pattern.overlaps(&parsed) {
				continue;
			}
			if existing.pattern == parsed {
				return Err(RegistrationError::Duplicate {
					method,
					pattern: pattern.to_string(),
				});
			}
			if existing.pattern.variable_count() == parsed.variable_count() {
				return Err(RegistrationError::Ambiguous {
					method,
					pattern: pattern.to_string(),
					existing: existing.pattern.pattern().to_string(),
				});
			}
		}

		let index = self.bindings.len();
		self.matcher.add_pattern(method.clone(), parsed.clone(), index);
		self.bindings.push(RouteBinding {
			method,
			pattern: parsed,
			handler,
		});
		Ok(())
	}

	/// Resolve a method and path to a handler and its path variables.
	pub fn match_path(&self, method: &Method, path: &str) -> Option<MatchedRequest> {
		self.matcher.match_path(method, path).map(|(index, args)| {
			MatchedRequest::new(Arc::clone(&self.bindings[index].handler), args)
		})
	}

	/// All registered routes, in registration order.
	pub fn bindings(&self) -> &[RouteBinding] {
		&self.bindings
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// True when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use rstest::rstest;
	use switchyard_exception::ApiResult;
	use switchyard_http::{ApiOutput, BoundArgs};

	struct NoopHandler;

	#[async_trait]
	impl ApiHandler for NoopHandler {
		fn param_names(&self) -> &[&str] {
			&[]
		}

		async fn call(&self, _args: &BoundArgs) -> ApiResult<ApiOutput> {
			Ok(ApiOutput::Empty)
		}
	}

	fn handler() -> Arc<dyn ApiHandler> {
		Arc::new(NoopHandler)
	}

	#[rstest]
	fn test_identical_registration_is_a_duplicate() {
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/networks", handler())
			.unwrap();

		let err = table
			.register(Method::GET, "/networks", handler())
			.unwrap_err();
		assert!(matches!(err, RegistrationError::Duplicate { .. }));
	}

	#[rstest]
	fn test_trailing_slash_variants_are_the_same_route() {
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/networks", handler())
			.unwrap();

		let err = table
			.register(Method::GET, "/networks/", handler())
			.unwrap_err();
		assert!(matches!(err, RegistrationError::Duplicate { .. }));
	}

	#[rstest]
	fn test_same_shape_different_names_is_ambiguous() {
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/network/{a}", handler())
			.unwrap();

		let err = table
			.register(Method::GET, "/network/{b}", handler())
			.unwrap_err();
		assert!(matches!(err, RegistrationError::Ambiguous { .. }));
	}

	#[rstest]
	fn test_equal_variable_count_overlap_is_ambiguous() {
		// /a/b/c would match both with one variable each
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/a/{x}/c", handler())
			.unwrap();

		let err = table
			.register(Method::GET, "/a/b/{y}", handler())
			.unwrap_err();
		assert!(matches!(err, RegistrationError::Ambiguous { .. }));
	}

	#[rstest]
	fn test_overlap_with_different_variable_counts_is_allowed() {
		// Specificity resolves this pair at match time
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/network/{network}", handler())
			.unwrap();
		table
			.register(Method::GET, "/network/defaults", handler())
			.unwrap();
		assert_eq!(table.len(), 2);
	}

	#[rstest]
	fn test_same_pattern_under_different_methods_is_allowed() {
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/network/{network}", handler())
			.unwrap();
		table
			.register(Method::PUT, "/network/{network}", handler())
			.unwrap();
		table
			.register(Method::DELETE, "/network/{network}", handler())
			.unwrap();
		assert_eq!(table.len(), 3);
	}

	#[rstest]
	fn test_invalid_pattern_is_rejected_with_its_source() {
		let mut table = RouteTable::new();
		let err = table
			.register(Method::GET, "/static/{path:*}", handler())
			.unwrap_err();
		assert!(matches!(err, RegistrationError::Pattern { .. }));
	}

	#[rstest]
	fn test_match_path_returns_the_registered_handler() {
		let mut table = RouteTable::new();
		table
			.register(Method::GET, "/network/{network}", handler())
			.unwrap();

		let matched = table.match_path(&Method::GET, "/network/prod").unwrap();
		assert_eq!(
			matched.path_args(),
			&[("network".to_string(), "prod".to_string())]
		);
		assert!(table.match_path(&Method::GET, "/missing").is_none());
	}
}
