//! # MyGas API Rust client
//!
//! An async Rust client for the MyGas personal-account GraphQL API: client
//! profile, accounts, charges, payments, receipts and meter readings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MyGasConfig`] and [`MyGasConfigBuilder`]
//! - Validated newtypes for credentials and the endpoint
//! - A per-client synthetic [`DeviceInfo`] identity
//! - Transparent sign-in with a cached, self-refreshing access token
//! - One async method per backend operation on [`MyGasApi`]
//! - Typed errors separating rejected requests, malformed payloads and
//!   authentication failures
//!
//! ## Quick Start
//!
//! ```rust
//! use mygas_api::{DeviceInfo, Identifier, MyGasConfig, Password};
//!
//! // Create configuration using the builder pattern
//! let config = MyGasConfig::builder()
//!     .identifier(Identifier::new("user@example.com").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .device_info(DeviceInfo::default())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.device_info().is_native_app());
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use mygas_api::{MeterReading, MyGasApi, MyGasConfig, Identifier, Password};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MyGasConfig::builder()
//!     .identifier(Identifier::new("user@example.com")?)
//!     .password(Password::new("secret")?)
//!     .build()?;
//! let api = MyGasApi::new(&config)?;
//!
//! // The first call signs in; later calls reuse the token
//! let accounts = api.get_accounts().await?;
//! let charges = api.get_charges(12345).await?;
//!
//! // Submit a meter reading
//! let reading = MeterReading::new(12345, "meter-uuid", 1234.5).els_id(678);
//! api.send_indication(&reading).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use mygas_api::{ApiError, MyGasApi};
//!
//! # async fn run(api: MyGasApi) {
//! match api.get_client_info().await {
//!     Ok(client) => println!("{client:#}"),
//!     Err(ApiError::Rejected { message }) => println!("Rejected: {message}"),
//!     Err(ApiError::Parse(e)) => println!("Unexpected payload: {e}"),
//!     Err(ApiError::Auth(e)) => println!("Sign-in failed: {e}"),
//!     Err(ApiError::Http(e)) => println!("Request failed: {e}"),
//! }
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and device identity are instance-based
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync` and refresh tokens at most once at a time
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Pass-through payloads**: Results are returned as the server sent them

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod queries;

// Re-export public types at crate root for convenience
pub use auth::{Authenticator, CachedToken, SessionHeaders, SimpleAuth};
pub use config::{DeviceInfo, Endpoint, Identifier, MyGasConfig, MyGasConfigBuilder, Password};
pub use error::{ApiError, AuthError, ConfigError, ParseError};

// Re-export client types
pub use clients::{HttpClient, HttpError, HttpResponseError, MyGasApi, Transport};

// Re-export operation types
pub use queries::{MeterReading, Operation, Query, Receipt};
