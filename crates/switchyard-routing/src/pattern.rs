//! Path patterns for URL routing.
//!
//! A pattern is an ordered list of `/`-separated segments, each either a
//! literal or a `{name}` variable binding one non-empty path segment.
//! Multi-segment wildcards are rejected at parse time: every route has a
//! fixed segment count, which is what makes registration-time overlap
//! checks possible.

use thiserror::Error;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// One `/`-separated element of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Matches exactly this text.
	Literal(String),
	/// Matches any single non-empty segment, binding it to the name.
	Variable(String),
}

/// Errors raised while parsing a pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// Pattern string exceeds the length limit.
	#[error("pattern length {len} exceeds maximum allowed length of {max} bytes")]
	TooLong { len: usize, max: usize },
	/// Pattern has more segments than the limit.
	#[error("pattern has {count} path segments, exceeding maximum of {max}")]
	TooManySegments { count: usize, max: usize },
	/// A double slash produced an empty segment.
	#[error("empty segment in pattern")]
	EmptySegment,
	/// A brace appeared outside a whole-segment `{name}` form.
	#[error("malformed variable segment {0:?}; expected {{name}}")]
	MalformedVariable(String),
	/// `{name:*}`-style catch-alls are not supported: a variable never
	/// spans more than one segment.
	#[error("multi-segment wildcards are not supported: {0:?}")]
	WildcardUnsupported(String),
	/// Variable names are restricted to alphanumerics and underscores.
	#[error("invalid variable name {0:?}")]
	InvalidName(String),
	/// The same variable name was used twice in one pattern.
	#[error("variable {0:?} appears more than once")]
	DuplicateName(String),
}

/// Represents a compiled path pattern.
///
/// Patterns use `{name}` syntax:
/// - `/networks` - exact match
/// - `/network/{network}` - single path variable
/// - `/network/{network}/port/{port}` - multiple variables
///
/// Leading and trailing slashes are not significant: `/networks`,
/// `networks`, and `/networks/` compile to the same segment sequence and
/// compare equal.
///
/// # Examples
///
/// ```
/// use switchyard_routing::PathPattern;
///
/// let pattern = PathPattern::new("/network/{network}/port/{port}").unwrap();
/// assert_eq!(pattern.param_names(), &["network", "port"]);
/// assert_eq!(pattern.variable_count(), 2);
///
/// // Trailing slashes do not distinguish patterns
/// let a = PathPattern::new("/networks").unwrap();
/// let b = PathPattern::new("/networks/").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Parsed segments in order.
	segments: Vec<Segment>,
	/// Variable names in order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Parse a pattern string.
	///
	/// # Errors
	///
	/// Rejects overly long patterns, empty segments, malformed or
	/// duplicated `{name}` variables, and `{name:*}` wildcards.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				len: pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		let trimmed = pattern.trim_start_matches('/').trim_end_matches('/');
		let mut segments = Vec::new();
		let mut param_names: Vec<String> = Vec::new();
		if !trimmed.is_empty() {
			for raw in trimmed.split('/') {
				if raw.is_empty() {
					return Err(PatternError::EmptySegment);
				}
				segments.push(Self::parse_segment(raw, &mut param_names)?);
			}
		}

		if segments.len() > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segments.len(),
				max: MAX_PATH_SEGMENTS,
			});
		}

		Ok(Self {
			pattern: pattern.to_string(),
			segments,
			param_names,
		})
	}

	fn parse_segment(raw: &str, param_names: &mut Vec<String>) -> Result<Segment, PatternError> {
		if let Some(inner) = raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
			if inner.contains(':') || inner.contains('*') {
				return Err(PatternError::WildcardUnsupported(raw.to_string()));
			}
			if inner.is_empty()
				|| !inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
			{
				return Err(PatternError::InvalidName(inner.to_string()));
			}
			if param_names.iter().any(|n| n == inner) {
				return Err(PatternError::DuplicateName(inner.to_string()));
			}
			param_names.push(inner.to_string());
			return Ok(Segment::Variable(inner.to_string()));
		}
		if raw.contains('{') || raw.contains('}') {
			return Err(PatternError::MalformedVariable(raw.to_string()));
		}
		Ok(Segment::Literal(raw.to_string()))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parsed segments.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns the variable names in order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Number of segments in the pattern.
	pub fn segment_count(&self) -> usize {
		self.segments.len()
	}

	/// Number of variable segments; lower means more specific.
	pub fn variable_count(&self) -> usize {
		self.param_names.len()
	}

	/// Match against decoded path segments, extracting variable bindings.
	///
	/// A pattern matches iff the segment counts agree, every literal
	/// matches exactly, and every variable position holds a non-empty
	/// segment. Returns the `(name, value)` pairs in pattern order.
	///
	/// # Examples
	///
	/// ```
	/// use switchyard_routing::{PathPattern, split_path};
	///
	/// let pattern = PathPattern::new("/func/{foo}/{bar}").unwrap();
	/// let captured = pattern.capture(&split_path("/func/alice/bob")).unwrap();
	/// assert_eq!(captured, vec![
	///     ("foo".to_string(), "alice".to_string()),
	///     ("bar".to_string(), "bob".to_string()),
	/// ]);
	///
	/// assert!(pattern.capture(&split_path("/func/alice")).is_none());
	/// ```
	pub fn capture(&self, segments: &[String]) -> Option<Vec<(String, String)>> {
		if segments.len() != self.segments.len() {
			return None;
		}
		let mut bound = Vec::with_capacity(self.param_names.len());
		for (expected, actual) in self.segments.iter().zip(segments) {
			match expected {
				Segment::Literal(lit) => {
					if lit != actual {
						return None;
					}
				}
				Segment::Variable(name) => {
					if actual.is_empty() {
						return None;
					}
					bound.push((name.clone(), actual.clone()));
				}
			}
		}
		Some(bound)
	}

	/// True when some concrete path could match both patterns.
	///
	/// Overlap requires equal segment counts and equal literals at every
	/// position where both sides are literal. Registration uses this to
	/// reject unresolvable ties up front.
	pub fn overlaps(&self, other: &PathPattern) -> bool {
		self.segments.len() == other.segments.len()
			&& self
				.segments
				.iter()
				.zip(&other.segments)
				.all(|(a, b)| match (a, b) {
					(Segment::Literal(x), Segment::Literal(y)) => x == y,
					_ => true,
				})
	}
}

/// Equality compares the normalized segment sequence, so patterns that
/// differ only in leading or trailing slashes are the same route.
impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.segments == other.segments
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
