// self
use crate::{
	_prelude::*,
	auth::ServiceCredentials,
	config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
};

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Credentials attached to every request.
	pub credentials: ServiceCredentials,
	/// Optional base URL override.
	pub base_url: Option<Url>,
	/// Default per-request timeout.
	pub timeout: Duration,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided credentials.
	pub fn new(credentials: ServiceCredentials) -> Self {
		Self { credentials, base_url: None, timeout: DEFAULT_TIMEOUT }
	}

	/// Overrides the provider base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Parses and overrides the provider base URL.
	pub fn base_url_str(self, raw: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self.base_url(url))
	}

	/// Overrides the default per-request timeout (10 seconds).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_BASE_URL)
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};
		let config = ClientConfig { base_url, credentials: self.credentials, timeout: self.timeout };

		config.validate()?;

		Ok(config)
	}
}

impl ClientConfig {
	/// Validates invariants for the configuration.
	fn validate(&self) -> Result<(), ConfigError> {
		validate_base_url(&self.base_url)?;

		if !self.timeout.is_positive() {
			return Err(ConfigError::InvalidTimeout { timeout: self.timeout });
		}

		Ok(())
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	let plain = matches!(url.scheme(), "http" | "https")
		&& url.query().is_none()
		&& url.fragment().is_none();

	if plain { Ok(()) } else { Err(ConfigError::UnsupportedBaseUrl { url: url.to_string() }) }
}
