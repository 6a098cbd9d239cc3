//! Authorization endpoints: start (`/api/auth/authorization`), fail
//! (`/api/auth/authorization/fail`), and issue (`/api/auth/authorization/issue`).

// self
use crate::{
	_prelude::*,
	api::{ApiOperation, de},
	http::ApiHttpClient,
	invoker::{Payload, RemoteCallInvoker},
};

/// Arguments for the authorization start endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// Raw query string of the client's authorization request.
	pub parameters: String,
}
impl AuthorizationRequest {
	/// Creates a request for the provided authorization parameters.
	pub fn new(parameters: impl Into<String>) -> Self {
		Self { parameters: parameters.into() }
	}
}
impl ApiOperation for AuthorizationRequest {
	type Response = AuthorizationResult;

	const PATH: &'static str = "/api/auth/authorization";

	fn into_payload(self) -> Payload {
		Payload::from([("parameters".into(), self.parameters)])
	}
}

/// Provider verdict on an authorization request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationResult {
	/// Provider result code.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_code: String,
	/// Provider result message.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_message: String,
	/// Next step the caller should take.
	#[serde(deserialize_with = "de::null_as_default")]
	pub action: String,
	/// Ticket used by the follow-up fail/issue calls.
	#[serde(deserialize_with = "de::null_as_default")]
	pub ticket: String,
}

/// Arguments for the authorization fail endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationFailRequest {
	/// Ticket issued by the authorization start call.
	pub ticket: String,
}
impl AuthorizationFailRequest {
	/// Creates a request for the provided ticket.
	pub fn new(ticket: impl Into<String>) -> Self {
		Self { ticket: ticket.into() }
	}
}
impl ApiOperation for AuthorizationFailRequest {
	type Response = AuthorizationFailResult;

	const PATH: &'static str = "/api/auth/authorization/fail";

	fn into_payload(self) -> Payload {
		Payload::from([("ticket".into(), self.ticket)])
	}
}

/// Provider response to an authorization failure report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationFailResult {
	/// Provider result code.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_code: String,
	/// Provider result message.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_message: String,
	/// Next step the caller should take.
	#[serde(deserialize_with = "de::null_as_default")]
	pub action: String,
	/// Response body to relay to the client.
	#[serde(deserialize_with = "de::null_as_default")]
	pub response_content: String,
}

/// Arguments for the authorization issue endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationIssueRequest {
	/// Ticket issued by the authorization start call.
	pub ticket: String,
	/// Authenticated end-user subject.
	pub subject: String,
}
impl AuthorizationIssueRequest {
	/// Creates a request for the provided ticket and subject.
	pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
		Self { ticket: ticket.into(), subject: subject.into() }
	}
}
impl ApiOperation for AuthorizationIssueRequest {
	type Response = AuthorizationIssueResult;

	const PATH: &'static str = "/api/auth/authorization/issue";

	fn into_payload(self) -> Payload {
		Payload::from([("ticket".into(), self.ticket), ("subject".into(), self.subject)])
	}
}

/// Provider response to an authorization issue call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationIssueResult {
	/// Provider result code.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_code: String,
	/// Provider result message.
	#[serde(deserialize_with = "de::null_as_default")]
	pub result_message: String,
	/// Next step the caller should take.
	#[serde(deserialize_with = "de::null_as_default")]
	pub action: String,
	/// Response body (usually a redirect location) to relay to the client.
	#[serde(deserialize_with = "de::null_as_default")]
	pub response_content: String,
	/// Access token issued for implicit-style response types.
	#[serde(deserialize_with = "de::null_as_default")]
	pub access_token: String,
	/// Access token expiry in milliseconds since the Unix epoch.
	#[serde(deserialize_with = "de::null_as_default")]
	pub access_token_expires_at: i64,
	/// Access token lifetime in seconds.
	#[serde(deserialize_with = "de::null_as_default")]
	pub access_token_duration: i64,
	/// ID token, when `openid` was requested.
	#[serde(deserialize_with = "de::null_as_default")]
	pub id_token: String,
	/// Authorization code for code-flow response types.
	#[serde(deserialize_with = "de::null_as_default")]
	pub authorization_code: String,
	/// JWT-formatted access token, when the service issues them.
	#[serde(deserialize_with = "de::null_as_default")]
	pub jwt_access_token: String,
}

impl<C> RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Starts processing an authorization request.
	pub async fn authorize(
		&self,
		parameters: impl Into<String>,
	) -> Result<AuthorizationResult, CallError> {
		self.call(AuthorizationRequest::new(parameters)).await
	}

	/// Reports that the authorization identified by `ticket` failed.
	pub async fn authorize_fail(
		&self,
		ticket: impl Into<String>,
	) -> Result<AuthorizationFailResult, CallError> {
		self.call(AuthorizationFailRequest::new(ticket)).await
	}

	/// Completes the authorization identified by `ticket` on behalf of `subject`.
	pub async fn authorize_issue(
		&self,
		ticket: impl Into<String>,
		subject: impl Into<String>,
	) -> Result<AuthorizationIssueResult, CallError> {
		self.call(AuthorizationIssueRequest::new(ticket, subject)).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn issue_payload_carries_ticket_and_subject() {
		let payload = AuthorizationIssueRequest::new("tk-1", "alice").into_payload();

		assert_eq!(payload.len(), 2);
		assert_eq!(payload.get("ticket").map(String::as_str), Some("tk-1"));
		assert_eq!(payload.get("subject").map(String::as_str), Some("alice"));
	}

	#[test]
	fn empty_issue_body_decodes_to_zero_values() {
		let result: AuthorizationIssueResult =
			serde_json::from_str("{}").expect("Empty issue body should decode.");

		assert_eq!(result, AuthorizationIssueResult::default());
		assert_eq!(result.access_token_expires_at, 0);
		assert!(result.jwt_access_token.is_empty());
	}

	#[test]
	fn camel_case_fields_and_nulls_decode() {
		let result: AuthorizationResult = serde_json::from_str(
			r#"{"resultCode":"A004001","resultMessage":"ok","action":"INTERACTION","ticket":"tk-9","client":{"clientId":1}}"#,
		)
		.expect("Authorization body should decode.");

		assert_eq!(result.result_code, "A004001");
		assert_eq!(result.action, "INTERACTION");
		assert_eq!(result.ticket, "tk-9");

		let result: AuthorizationFailResult =
			serde_json::from_str(r#"{"action":"LOCATION","responseContent":null}"#)
				.expect("Null fields should decode to zero values.");

		assert_eq!(result.action, "LOCATION");
		assert!(result.response_content.is_empty());
	}
}
