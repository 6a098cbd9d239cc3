//! Per-call request description: path, payload, and optional timeout override.

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Key-value wire payload; serialized as a flat JSON object with sorted keys.
pub type Payload = BTreeMap<String, String>;

/// A single logical remote call. Constructed per call and consumed by the invoker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteCall {
	path: Cow<'static, str>,
	/// Payload fields sent as the JSON request body.
	pub payload: Payload,
	/// Overrides the configured timeout for this call only.
	pub timeout: Option<Duration>,
}
impl RemoteCall {
	/// Creates a call for `path`, which must be non-empty and start with `/`.
	pub fn new(path: impl Into<Cow<'static, str>>) -> Result<Self, ConfigError> {
		let path = path.into();

		if !path.starts_with('/') {
			return Err(ConfigError::InvalidPath { path: path.into_owned() });
		}

		Ok(Self { path, payload: Payload::new(), timeout: None })
	}

	/// Creates a call for a fixed endpoint path known to be valid.
	pub(crate) fn endpoint(path: &'static str, payload: Payload) -> Self {
		Self { path: Cow::Borrowed(path), payload, timeout: None }
	}

	/// Returns the endpoint path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Adds or replaces a payload field.
	pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.payload.insert(key.into(), value.into());

		self
	}

	/// Replaces the whole payload.
	pub fn with_payload(mut self, payload: Payload) -> Self {
		self.payload = payload;

		self
	}

	/// Overrides the configured timeout for this call; the override must be positive.
	pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
		if !timeout.is_positive() {
			return Err(ConfigError::InvalidTimeout { timeout });
		}

		self.timeout = Some(timeout);

		Ok(self)
	}
}
