//! HTTP front end for switchyard.
//!
//! A hyper 1.x HTTP/1.1 server that collects each request body, hands
//! the request to a shared [`Dispatcher`], and writes the resulting
//! response back. All routing, binding, and error mapping already
//! happened by the time bytes leave this crate; the server adds no
//! behavior of its own.
//!
//! Listener configuration comes from [`Settings`], read from
//! `SWITCHYARD_`-prefixed environment variables.
//!
//! [`Dispatcher`]: switchyard_routing::Dispatcher
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchyard_routing::{Dispatcher, RouteTable};
//! use switchyard_server::{Settings, serve};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let dispatcher = Arc::new(Dispatcher::new(Arc::new(RouteTable::new())));
//! serve(settings.bind, dispatcher).await?;
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod settings;

pub use http::{HttpServer, serve};
pub use settings::{Settings, SettingsError};
