/* src/client/engine/rust/src/error.rs */

use thiserror::Error;

/// Rejected site configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("site.base_url \"{url}\" is not a valid URL: {reason}")]
  InvalidBaseUrl { url: String, reason: String },
  #[error("site.base_url \"{0}\" must use http or https")]
  UnsupportedScheme(String),
  #[error("analytics.{integration}.id \"{id}\" may only contain letters, digits, '-' and '_'")]
  InvalidIntegrationId { integration: &'static str, id: String },
}

/// Failure reported by a third-party SDK call. Never propagated past the
/// tracker; it exists so sinks can say what went wrong.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SdkError {
  #[error("{sdk} threw: {message}")]
  Threw { sdk: &'static str, message: String },
  #[error("{sdk} rejected arguments: {message}")]
  BadArguments { sdk: &'static str, message: String },
}
