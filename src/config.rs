//! Connection configuration consumed by the invoker.
//!
//! A [`ClientConfig`] is immutable once built: the invoker owns it and never mutates it across
//! calls. Use [`ClientConfig::builder`] for explicit values or [`ClientConfig::from_env`] to pull
//! the base URL and credentials from the process environment.

/// Builder API for assembling client configurations.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, auth::ServiceCredentials};

/// Default provider endpoint used when no base URL override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::seconds(10);

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "AUTHLETE_BASE_URL";
/// Environment variable holding the service API key.
pub const ENV_API_KEY: &str = "AUTHLETE_SERVICE_APIKEY";
/// Environment variable holding the service API secret.
pub const ENV_API_SECRET: &str = "AUTHLETE_SERVICE_APISECRET";

/// Immutable connection settings: provider base URL, credentials, and request timeout.
///
/// Only [`ClientConfigBuilder::build`] produces a value, so every instance has passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Provider base URL; endpoint paths are appended to it verbatim.
	pub base_url: Url,
	/// Credentials attached to every request via HTTP Basic.
	pub credentials: ServiceCredentials,
	/// Default per-request timeout.
	pub timeout: Duration,
}
impl ClientConfig {
	/// Creates a new builder for the provided credentials.
	pub fn builder(credentials: ServiceCredentials) -> ClientConfigBuilder {
		ClientConfigBuilder::new(credentials)
	}

	/// Builds a configuration with the default base URL and timeout.
	pub fn new(credentials: ServiceCredentials) -> Result<Self, ConfigError> {
		Self::builder(credentials).build()
	}

	/// Reads the configuration from the process environment.
	///
	/// `AUTHLETE_BASE_URL` is optional; `AUTHLETE_SERVICE_APIKEY` and
	/// `AUTHLETE_SERVICE_APISECRET` are required.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads the configuration through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnv { name });
		let credentials = ServiceCredentials::new(require(ENV_API_KEY)?, require(ENV_API_SECRET)?);
		let mut builder = Self::builder(credentials);

		if let Some(raw) = lookup(ENV_BASE_URL) {
			builder = builder.base_url_str(&raw)?;
		}

		builder.build()
	}

	/// Joins an endpoint path onto the base URL.
	///
	/// The base path's trailing `/` is trimmed before concatenation so prefixes such as
	/// `https://proxy.example.com/authlete` are preserved.
	pub fn endpoint_url(&self, path: &str) -> Url {
		let mut url = self.base_url.clone();
		let joined = format!("{}{path}", url.path().trim_end_matches('/'));

		url.set_path(&joined);

		url
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map = vars
			.iter()
			.map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
			.collect::<HashMap<_, _>>();

		move |name: &str| map.get(name).cloned()
	}

	#[test]
	fn from_lookup_applies_defaults() {
		let config =
			ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "key"), (ENV_API_SECRET, "secret")]))
				.expect("Configuration should load with only credentials set.");

		assert_eq!(config.base_url.as_str(), "https://api.authlete.com/");
		assert_eq!(config.timeout, DEFAULT_TIMEOUT);
		assert_eq!(config.credentials.api_key, "key");
		assert_eq!(config.credentials.api_secret.expose(), "secret");
	}

	#[test]
	fn from_lookup_honors_base_url_override() {
		let config = ClientConfig::from_lookup(lookup(&[
			(ENV_BASE_URL, "https://eu.example.com"),
			(ENV_API_KEY, "key"),
			(ENV_API_SECRET, "secret"),
		]))
		.expect("Configuration should load with a base URL override.");

		assert_eq!(config.base_url.as_str(), "https://eu.example.com/");
	}

	#[test]
	fn from_lookup_requires_credentials() {
		let err = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "key")]))
			.expect_err("Missing secret should be rejected.");

		assert!(matches!(err, ConfigError::MissingEnv { name: ENV_API_SECRET }));
	}

	#[test]
	fn debug_output_redacts_api_secret() {
		let config = ClientConfig::new(ServiceCredentials::new("key", "top-secret"))
			.expect("Default configuration should build.");
		let rendered = format!("{config:?}");

		assert!(rendered.contains("key"));
		assert!(!rendered.contains("top-secret"));
	}

	#[test]
	fn endpoint_url_preserves_base_path() {
		let config = ClientConfig::builder(ServiceCredentials::new("key", "secret"))
			.base_url(Url::parse("https://proxy.example.com/authlete/").expect("URL should parse."))
			.build()
			.expect("Configuration should build.");
		let url = config.endpoint_url("/api/auth/token");

		assert_eq!(url.as_str(), "https://proxy.example.com/authlete/api/auth/token");

		let config = ClientConfig::new(ServiceCredentials::new("key", "secret"))
			.expect("Default configuration should build.");

		assert_eq!(
			config.endpoint_url("/api/auth/introspection").as_str(),
			"https://api.authlete.com/api/auth/introspection"
		);
	}
}
