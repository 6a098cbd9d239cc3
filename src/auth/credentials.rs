//! Service API key/secret pair and its HTTP Basic encoding.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::ApiSecret};

/// API key + secret pair presented to the provider as HTTP Basic credentials.
///
/// The key doubles as the Basic username and the secret as the password. Both are opaque to
/// the client; no format validation is applied.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
	/// Service API key (Basic username).
	pub api_key: String,
	/// Service API secret (Basic password).
	pub api_secret: ApiSecret,
}
impl ServiceCredentials {
	/// Creates a credential pair from the provided key and secret.
	pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
		Self { api_key: api_key.into(), api_secret: ApiSecret::new(api_secret) }
	}

	/// Encodes the pair as an `Authorization` header value (`Basic base64(key:secret)`).
	pub fn basic_authorization(&self) -> ApiSecret {
		let raw = format!("{}:{}", self.api_key, self.api_secret.expose());

		ApiSecret::new(format!("Basic {}", STANDARD.encode(raw)))
	}
}
impl Debug for ServiceCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ServiceCredentials")
			.field("api_key", &self.api_key)
			.field("api_secret", &self.api_secret)
			.finish()
	}
}
