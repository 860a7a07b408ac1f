//! HTTP transport and the MyGas API client.
//!
//! This module provides the layer between typed operations and the network:
//! it sends GraphQL requests, attaches access tokens and decodes response
//! envelopes.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MyGasApi`]: one async method per backend operation
//! - [`RequestExecutor`]: token, headers, request and envelope parsing for one query
//! - [`Transport`]: the network seam, object safe so tests can substitute it
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`HttpError`]: failures of a single HTTP exchange
//!
//! # Example
//!
//! ```rust,no_run
//! use mygas_api::{Identifier, MyGasApi, MyGasConfig, Password};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MyGasConfig::builder()
//!     .identifier(Identifier::new("user@example.com")?)
//!     .password(Password::new("secret")?)
//!     .build()?;
//!
//! let api = MyGasApi::new(&config)?;
//! let client = api.get_client_info().await?;
//! println!("{client:#}");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Behavior
//!
//! Requests are sent once. A non-2xx status or connection failure is
//! reported as [`ApiError::Http`](crate::ApiError::Http), or as
//! [`AuthError::Transport`](crate::AuthError::Transport) when it happened
//! while signing in.

mod api;
mod errors;
mod executor;
mod http_client;
mod transport;

pub use api::MyGasApi;
pub use errors::{HttpError, HttpResponseError};
pub use executor::RequestExecutor;
pub use http_client::HttpClient;
pub use transport::{Headers, Transport};
