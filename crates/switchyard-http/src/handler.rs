//! The handler contract shared by direct calls and HTTP dispatch.

use async_trait::async_trait;
use serde_json::Value;
use switchyard_exception::{ApiError, ApiResult};

/// The string arguments bound for one handler invocation.
///
/// Pairs keep the order in which they were bound (declared parameter
/// order), so positional access is deterministic.
///
/// # Examples
///
/// ```
/// use switchyard_http::BoundArgs;
///
/// let args = BoundArgs::new()
///     .with("network", "prod")
///     .with("port", "gi0/1");
///
/// assert_eq!(args.get("network"), Some("prod"));
/// assert_eq!(args.values().collect::<Vec<_>>(), vec!["prod", "gi0/1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArgs {
	args: Vec<(String, String)>,
}

impl BoundArgs {
	/// Create an empty argument set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a binding, builder style.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(name, value);
		self
	}

	/// Append a binding.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.args.push((name.into(), value.into()));
	}

	/// Look up a binding by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.args
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Look up a binding by name, failing with the 500-class kind when absent.
	///
	/// The binder guarantees every declared parameter is bound before a
	/// handler runs; a miss here is an internal invariant violation, not a
	/// client error.
	pub fn require(&self, name: &str) -> ApiResult<&str> {
		self.get(name)
			.ok_or_else(|| ApiError::server(format!("argument {name} was never bound")))
	}

	/// Bound values in declaration order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.args.iter().map(|(_, v)| v.as_str())
	}

	/// Bound names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.args.iter().map(|(n, _)| n.as_str())
	}

	/// Number of bound arguments.
	pub fn len(&self) -> usize {
		self.args.len()
	}

	/// True when nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}
}

impl FromIterator<(String, String)> for BoundArgs {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			args: iter.into_iter().collect(),
		}
	}
}

/// What a successful handler invocation produces.
///
/// # Examples
///
/// ```
/// use switchyard_http::ApiOutput;
/// use serde_json::json;
///
/// let listing: ApiOutput = json!(["net-a", "net-b"]).into();
/// assert!(!listing.is_empty());
///
/// let done = ApiOutput::Empty;
/// assert!(done.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutput {
	/// The empty-content marker: a literally empty 200 body on the wire.
	Empty,
	/// A JSON value serialized verbatim into the body.
	Json(Value),
}

impl ApiOutput {
	/// True for the empty-content marker.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

impl From<Value> for ApiOutput {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

/// An API operation invocable both directly and over HTTP.
///
/// Implementations are named structs with fixed arity: [`param_names`]
/// declares, in order, the arguments [`call`] expects to find bound. All
/// argument values are strings; handlers parse and validate themselves,
/// raising a taxonomy failure on invalid input.
///
/// [`param_names`]: ApiHandler::param_names
/// [`call`]: ApiHandler::call
///
/// # Examples
///
/// ```
/// use switchyard_http::{ApiHandler, ApiOutput, BoundArgs};
/// use switchyard_exception::ApiResult;
/// use async_trait::async_trait;
/// use serde_json::json;
///
/// struct EchoPair;
///
/// #[async_trait]
/// impl ApiHandler for EchoPair {
///     fn param_names(&self) -> &[&str] {
///         &["foo", "bar"]
///     }
///
///     async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput> {
///         let foo = args.require("foo")?;
///         let bar = args.require("bar")?;
///         Ok(json!([foo, bar]).into())
///     }
/// }
/// ```
#[async_trait]
pub trait ApiHandler: Send + Sync {
	/// Parameter names this handler requires, in binding order.
	fn param_names(&self) -> &[&str];

	/// Run the operation with the bound arguments.
	async fn call(&self, args: &BoundArgs) -> ApiResult<ApiOutput>;
}
