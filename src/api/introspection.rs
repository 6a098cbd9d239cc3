//! Token introspection (`/api/auth/introspection`).

// self
use crate::{
	_prelude::*,
	api::{ApiOperation, de},
	http::ApiHttpClient,
	invoker::{Payload, RemoteCallInvoker},
};

/// Arguments for the introspection endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntrospectionRequest {
	/// Access token presented by the resource server's caller.
	pub token: String,
}
impl IntrospectionRequest {
	/// Creates a request for the provided token.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: token.into() }
	}
}
impl ApiOperation for IntrospectionRequest {
	type Response = IntrospectionResult;

	const PATH: &'static str = "/api/auth/introspection";

	fn into_payload(self) -> Payload {
		Payload::from([("token".into(), self.token)])
	}
}

/// Introspection verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntrospectionResult {
	/// Whether the token is currently usable.
	#[serde(deserialize_with = "de::null_as_default")]
	pub active: bool,
}

impl<C> RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Introspects an access token.
	pub async fn introspect(
		&self,
		token: impl Into<String>,
	) -> Result<IntrospectionResult, CallError> {
		self.call(IntrospectionRequest::new(token)).await
	}
}
