//! Failure taxonomy module.
//!
//! This module provides access to the closed hierarchy of API failure kinds
//! and the `ApiResult` alias used at every handler boundary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::exception::{ApiError, ApiResult};
//!
//! fn parse_tag(raw: &str) -> ApiResult<u16> {
//!     raw.parse()
//!         .map_err(|_| ApiError::bad_argument(format!("invalid tag: {raw}")))
//! }
//! ```

pub use switchyard_exception::*;
