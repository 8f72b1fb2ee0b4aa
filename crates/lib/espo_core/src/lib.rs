//! # espo_core
//!
//! Gateway core for EspoCRM.
//!
//! Two pieces live here:
//!
//! - [`params`]: turns tool arguments into the camelCase parameter map the
//!   EspoCRM REST API expects.
//! - [`client`]: performs exactly one HTTP call against the configured
//!   EspoCRM instance and folds every outcome into a [`ResponseEnvelope`].

pub mod client;
pub mod credentials;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod params;
pub mod query;

pub use client::{CallOptions, EspoApi, PreparedRequest};
pub use credentials::Credentials;
pub use entity::Entity;
pub use envelope::{ErrorType, ResponseEnvelope};
pub use error::EspoError;
pub use params::{EspoParams, build_params, snake_to_camel};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
