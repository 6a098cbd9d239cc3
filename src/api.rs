//! Typed endpoint operations, response shapes, and the provider error body.
//!
//! Each endpoint is a request struct implementing [`ApiOperation`]: it binds a fixed path and a
//! fixed response shape, and flattens its typed arguments into the key-value wire payload. The
//! invoker runs every operation through the same generic call path.

pub mod authorization;
pub mod introspection;
pub mod token;

mod de;

pub use authorization::*;
pub use introspection::*;
pub use token::*;

// self
use crate::{_prelude::*, invoker::Payload};

/// Endpoint binding: fixed path, fixed response shape, typed arguments.
pub trait ApiOperation {
	/// Endpoint path appended to the configured base URL.
	const PATH: &'static str;

	/// Shape the success body decodes into.
	type Response: DeserializeOwned;

	/// Flattens the typed arguments into the wire payload.
	fn into_payload(self) -> Payload;
}

/// Error body returned by the provider on non-success responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Provider error: {message} (code: {code}).")]
pub struct RemoteError {
	/// Provider error code.
	#[serde(default, deserialize_with = "de::null_as_default")]
	pub code: i64,
	/// Human-readable provider message, preserved verbatim.
	#[serde(default, deserialize_with = "de::null_as_default")]
	pub message: String,
}
