//! Path matching against registered patterns.

use hyper::Method;
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use switchyard_http::ApiHandler;

use crate::pattern::PathPattern;

/// Split a request path into percent-decoded segments.
///
/// Splitting happens before decoding, so an encoded slash inside a
/// segment stays inside that segment.
///
/// # Examples
///
/// ```
/// use switchyard_routing::split_path;
///
/// assert_eq!(split_path("/network/prod"), vec!["network", "prod"]);
/// assert_eq!(split_path("/port/gi0%2F1"), vec!["port", "gi0/1"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
	let trimmed = path.trim_start_matches('/').trim_end_matches('/');
	if trimmed.is_empty() {
		return Vec::new();
	}
	trimmed
		.split('/')
		.map(|segment| percent_decode_str(segment).decode_utf8_lossy().to_string())
		.collect()
}

/// A request resolved to its handler, with the path variables extracted.
///
/// Transient: created per request and dropped once the call completes.
#[derive(Clone)]
pub struct MatchedRequest {
	handler: Arc<dyn ApiHandler>,
	path_args: Vec<(String, String)>,
}

impl MatchedRequest {
	pub(crate) fn new(handler: Arc<dyn ApiHandler>, path_args: Vec<(String, String)>) -> Self {
		Self { handler, path_args }
	}

	/// The handler the path resolved to.
	pub fn handler(&self) -> &Arc<dyn ApiHandler> {
		&self.handler
	}

	/// Extracted `(name, value)` pairs in pattern order.
	pub fn path_args(&self) -> &[(String, String)] {
		&self.path_args
	}
}

/// Matches request paths against the registered patterns.
///
/// Specificity: among the patterns that match, the one with the fewest
/// variable segments wins. An exact tie cannot occur because registration
/// rejects same-method overlaps with equal variable counts.
#[derive(Debug, Default)]
pub struct PathMatcher {
	entries: Vec<MatchEntry>,
}

#[derive(Debug)]
struct MatchEntry {
	method: Method,
	pattern: PathPattern,
	binding: usize,
}

impl PathMatcher {
	/// Create an empty matcher.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a pattern pointing at a binding index.
	pub fn add_pattern(&mut self, method: Method, pattern: PathPattern, binding: usize) {
		self.entries.push(MatchEntry {
			method,
			pattern,
			binding,
		});
	}

	/// Resolve a method and path to a binding index and its path variables.
	pub fn match_path(
		&self,
		method: &Method,
		path: &str,
	) -> Option<(usize, Vec<(String, String)>)> {
		let segments = split_path(path);
		self.entries
			.iter()
			.filter(|entry| entry.method == *method)
			.filter_map(|entry| {
				entry
					.pattern
					.capture(&segments)
					.map(|args| (entry, args))
			})
			.min_by_key(|(entry, _)| entry.pattern.variable_count())
			.map(|(entry, args)| (entry.binding, args))
	}
}
