//! Argument binding from path variables, form bodies, and query strings.

use switchyard_exception::{ApiError, ApiResult};
use switchyard_http::{BoundArgs, Request};

/// Collect one value per handler parameter, in declaration order.
///
/// Sources are consulted in a fixed precedence: path variables first,
/// then the urlencoded form body, then the query string. The first
/// source that carries the name wins; later sources never override it.
/// Every value arrives percent-decoded, as free text. No parsing into
/// numbers or other types happens here.
///
/// A parameter found in no source fails the whole request with a
/// `BadArgumentError`, as does a form body that cannot be decoded.
pub fn bind_arguments(
	param_names: &[&str],
	path_args: &[(String, String)],
	request: &Request,
) -> ApiResult<BoundArgs> {
	let form = request
		.form_params()
		.map_err(|e| ApiError::bad_argument(format!("unreadable form body: {e}")))?;
	let query = request.decoded_query_params();

	let mut args = BoundArgs::new();
	for name in param_names {
		let value = path_args
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.clone())
			.or_else(|| form.get(*name).cloned())
			.or_else(|| query.get(*name).cloned())
			.ok_or_else(|| {
				ApiError::bad_argument(format!("missing required argument: {name}"))
			})?;
		args.push(*name, value);
	}
	Ok(args)
}
