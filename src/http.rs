//! Transport primitives for provider calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the transport-neutral [`ApiRequest`] and
//! [`ApiResponse`] values so downstream crates can integrate custom HTTP stacks. The invoker
//! assembles every header (including `Authorization`) before handing the request over, so a
//! transport only needs to POST the bytes and read the full response body back.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, auth::ApiSecret};

/// `Content-Type` sent with every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";
/// `Accept` header sent with every request.
pub const ACCEPT_JSON: &str = "application/json";

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing provider calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by many
/// invokers. The returned future must own or borrow only `self`, read the entire response body
/// before resolving, and release the connection on every exit path (including when the future is
/// dropped mid-flight).
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes a single POST request without retries.
	///
	/// # Contract
	///
	/// - Send `request.body` to `request.url` with every header in `request.headers`.
	/// - Abort with [`TransportError::Timeout`] once `request.timeout` elapses.
	/// - Resolve with an [`ApiResponse`] for any HTTP status; status interpretation belongs to the
	///   invoker.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// Fully assembled outbound request.
#[derive(Clone)]
pub struct ApiRequest {
	/// Absolute endpoint URL.
	pub url: Url,
	/// Plain headers (content negotiation).
	pub headers: Vec<(&'static str, &'static str)>,
	/// `Authorization` header value; redacted in debug output.
	pub authorization: ApiSecret,
	/// JSON-encoded body.
	pub body: Vec<u8>,
	/// Deadline for the whole exchange, body read included.
	pub timeout: std::time::Duration,
}
impl ApiRequest {
	/// Creates a JSON POST request with the default content negotiation headers.
	pub fn json(
		url: Url,
		authorization: ApiSecret,
		body: Vec<u8>,
		timeout: std::time::Duration,
	) -> Self {
		Self {
			url,
			headers: vec![("content-type", CONTENT_TYPE_JSON), ("accept", ACCEPT_JSON)],
			authorization,
			body,
			timeout,
		}
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiRequest")
			.field("url", &self.url.as_str())
			.field("headers", &self.headers)
			.field("authorization", &self.authorization)
			.field("body_len", &self.body.len())
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Status and body of a completed exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns true when the provider signalled success (HTTP 200 only).
	pub fn is_success(&self) -> bool {
		self.status == 200
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Provider endpoints answer directly, so the default client disables redirect following.
/// Configure any custom [`ReqwestClient`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let mut builder = self
				.0
				.post(request.url)
				.timeout(request.timeout)
				.header(reqwest::header::AUTHORIZATION, request.authorization.expose());

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}

			// Dropping `response` on any `?` below releases the connection.
			let response = builder.body(request.body).send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}
