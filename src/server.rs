//! HTTP server module.
//!
//! This module provides access to the hyper-based serve loop and the
//! environment-variable settings reader.
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard::server::Settings;
//!
//! let settings = Settings::from_env().unwrap();
//! println!("binding to {}", settings.bind);
//! ```

pub use switchyard_server::*;
