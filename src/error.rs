//! Client-level error types shared by configuration, transports, and remote calls.

// self
use crate::{_prelude::*, api::RemoteError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs that span construction and calls.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Remote call failure.
	#[error(transparent)]
	Call(#[from] CallError),
}

/// Failures surfaced by a single remote call.
///
/// Every variant is returned to the caller as-is; the invoker never retries.
#[derive(Debug, ThisError)]
pub enum CallError {
	/// Request payload could not be serialized to JSON.
	#[error("Request payload could not be encoded as JSON.")]
	EncodingFailed {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	TransportFailed(#[from] TransportError),
	/// Provider answered with a success status but the body did not match the response shape.
	#[error("Provider returned a malformed response body (status {status}).")]
	DecodeFailed {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Provider answered with a non-success status and an undecodable body.
	#[error("Unexpected status code: {0}.")]
	UnexpectedStatus(u16),
	/// Provider answered with a non-success status and a decodable error body.
	#[error(transparent)]
	Remote(RemoteError),
}
impl CallError {
	/// Returns `true` when the failure happened below the HTTP layer and a caller-driven retry
	/// may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::TransportFailed(_))
	}

	/// Returns `true` when the call was abandoned because its timeout elapsed.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::TransportFailed(TransportError::Timeout { .. }))
	}

	/// Returns the HTTP status code associated with the failure, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::DecodeFailed { status, .. } | Self::UnexpectedStatus(status) => Some(*status),
			_ => None,
		}
	}
}
impl From<RemoteError> for CallError {
	fn from(e: RemoteError) -> Self {
		Self::Remote(e)
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than `http`/`https`, or carries a query or fragment.
	#[error("Base URL `{url}` must be a plain http(s) URL.")]
	UnsupportedBaseUrl {
		/// Offending base URL.
		url: String,
	},
	/// Timeout is zero or negative.
	#[error("Request timeout must be positive, got {timeout}.")]
	InvalidTimeout {
		/// Rejected timeout value.
		timeout: Duration,
	},
	/// Remote call path is empty or not rooted at `/`.
	#[error("Endpoint path `{path}` must be non-empty and start with `/`.")]
	InvalidPath {
		/// Rejected path.
		path: String,
	},
	/// Required environment variable is not set.
	#[error("Environment variable `{name}` is not set.")]
	MissingEnv {
		/// Variable name.
		name: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Request did not complete before its timeout elapsed.
	#[error("Request timed out while calling the provider.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}
