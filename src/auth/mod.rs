//! Token acquisition for the MyGas API.
//!
//! Every operation except sign-in carries an access token in the `token`
//! header. This module decides when a token has to be requested and how.
//!
//! # Overview
//!
//! - [`Authenticator`]: the strategy seam handing out access tokens
//! - [`SimpleAuth`]: identifier/password sign-in with an in-memory token cache
//! - [`CachedToken`]: the cached token and its expiry
//! - [`SessionHeaders`]: the fixed headers shared by every request
//!
//! # Token lifecycle
//!
//! A fresh token is requested when none is cached, when the cached one has no
//! expiry, or when it expires within [`CLOCK_SKEW_TOLERANCE`]. Concurrent
//! callers observing a stale token trigger exactly one sign-in; the others
//! wait and reuse its result.
//!
//! # Example
//!
//! ```rust,no_run
//! use mygas_api::auth::{Authenticator, SimpleAuth};
//! use mygas_api::{Identifier, MyGasConfig, Password};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MyGasConfig::builder()
//!     .identifier(Identifier::new("user@example.com")?)
//!     .password(Password::new("secret")?)
//!     .build()?;
//!
//! let auth = SimpleAuth::from_config(&config)?;
//! let token = auth.get_token().await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`CLOCK_SKEW_TOLERANCE`]: crate::config::CLOCK_SKEW_TOLERANCE

mod session;
mod simple;
mod token;

use async_trait::async_trait;

use crate::error::AuthError;

pub use session::SessionHeaders;
pub use simple::SimpleAuth;
pub use token::CachedToken;

/// Hands out access tokens for authenticated requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns a token that is valid for at least the clock-skew tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if a new token was needed and could not be obtained.
    async fn get_token(&self) -> Result<String, AuthError>;
}
