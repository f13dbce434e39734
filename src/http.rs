//! HTTP types and the handler contract module.
//!
//! This module provides access to the request/response types, the
//! `ApiHandler` trait, bound-argument access, and the success output enum.
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::http::{Request, Response};
//! use hyper::Method;
//!
//! let request = Request::builder()
//!     .method(Method::GET)
//!     .uri("/networks")
//!     .build()
//!     .unwrap();
//! let response = Response::ok();
//! ```

pub use switchyard_http::*;
