//! Token issuance (`/api/auth/token`).

// self
use crate::{
	_prelude::*,
	api::{ApiOperation, de},
	http::ApiHttpClient,
	invoker::{Payload, RemoteCallInvoker},
};

/// Arguments for the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequest {
	/// Form-encoded body of the client's token request.
	pub parameters: String,
	/// Client identifier extracted from the client's authentication.
	pub client_id: String,
}
impl TokenRequest {
	/// Creates a request for the provided token parameters and client identifier.
	pub fn new(parameters: impl Into<String>, client_id: impl Into<String>) -> Self {
		Self { parameters: parameters.into(), client_id: client_id.into() }
	}
}
impl ApiOperation for TokenRequest {
	type Response = TokenResult;

	const PATH: &'static str = "/api/auth/token";

	fn into_payload(self) -> Payload {
		Payload::from([("parameters".into(), self.parameters), ("clientId".into(), self.client_id)])
	}
}

/// Provider response to a token request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenResult {
	/// Provider result code.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_code: String,
	/// Provider result message.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_message: String,
	/// Next step the caller should take.
	#[serde(deserialize_with = "de::null_as_default")]
	pub action: String,
	/// JSON body to relay to the client.
	#[serde(deserialize_with = "de::null_as_default")]
	pub response_content: String,
	/// Issued access token.
	#[serde(deserialize_with = "de::null_as_default")]
	pub access_token: String,
	/// Token type (typically `Bearer`).
	#[serde(deserialize_with = "de::null_as_default")]
	pub token_type: String,
	/// Access token lifetime in seconds.
	#[serde(deserialize_with = "de::null_as_default")]
	pub expires_in: i64,
	/// Issued refresh token, if any.
	#[serde(deserialize_with = "de::null_as_default")]
	pub refresh_token: String,
}

impl<C> RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Processes a token request on behalf of `client_id`.
	pub async fn token(
		&self,
		parameters: impl Into<String>,
		client_id: impl Into<String>,
	) -> Result<TokenResult, CallError> {
		self.call(TokenRequest::new(parameters, client_id)).await
	}
}
