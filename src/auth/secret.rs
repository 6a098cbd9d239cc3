//! Redacting wrapper for credential material.
//!
//! [`ApiSecret`] carries two values: the service API secret held in
//! [`ServiceCredentials`](crate::auth::ServiceCredentials), and the `Authorization: Basic ...`
//! header derived from it, which embeds the secret and so gets the same treatment. Neither
//! formatter prints the inner string, and the type has no serde impls.

// self
use crate::_prelude::*;

/// API secret or `Authorization` header value, hidden from `Debug` and `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);
impl ApiSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiSecret").field(&"<redacted>").finish()
	}
}
impl Display for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
