//! Generic authenticated JSON-over-HTTP call path shared by every endpoint.
//!
//! [`RemoteCallInvoker::invoke`] is the single place where payloads are encoded, requests are
//! authenticated, and responses are classified. Classification is driven by the HTTP status
//! alone: `200` decodes the declared shape, anything else decodes the provider's
//! [`RemoteError`] body or falls back to [`CallError::UnexpectedStatus`].

pub mod call;

pub use call::*;

// self
use crate::{
	_prelude::*,
	api::{ApiOperation, RemoteError},
	auth::ApiSecret,
	config::ClientConfig,
	http::{ApiHttpClient, ApiRequest, ApiResponse},
	obs::{self, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Invoker specialized for the crate's default reqwest transport.
pub type ReqwestInvoker = RemoteCallInvoker<ReqwestHttpClient>;

/// Performs authenticated remote calls against a single provider deployment.
///
/// The invoker owns its [`ClientConfig`] and never mutates it, so clones share the same
/// transport and may be used from many tasks at once without locking.
pub struct RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	config: Arc<ClientConfig>,
	authorization: ApiSecret,
}
impl<C> RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates an invoker that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let authorization = config.credentials.basic_authorization();

		Self { http_client: http_client.into(), config: Arc::new(config), authorization }
	}

	/// Returns the immutable configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Runs a typed endpoint operation.
	pub async fn call<O>(&self, operation: O) -> Result<O::Response, CallError>
	where
		O: ApiOperation,
	{
		self.invoke(RemoteCall::endpoint(O::PATH, operation.into_payload())).await
	}

	/// Posts `call.payload` to `base_url + call.path` and decodes the response as `T`.
	///
	/// Every invocation is a single attempt; retries are left to the caller.
	pub async fn invoke<T>(&self, call: RemoteCall) -> Result<T, CallError>
	where
		T: DeserializeOwned,
	{
		let span = CallSpan::new(call.path());

		obs::record_call_outcome(call.path(), CallOutcome::Attempt);

		let result = span.instrument(self.dispatch(&call)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(call.path(), CallOutcome::Success),
			Err(e) => {
				obs::record_failure(e);
				obs::record_call_outcome(call.path(), CallOutcome::Failure);
			},
		}

		result
	}

	async fn dispatch<T>(&self, call: &RemoteCall) -> Result<T, CallError>
	where
		T: DeserializeOwned,
	{
		let body = serde_json::to_vec(&call.payload)
			.map_err(|source| CallError::EncodingFailed { source })?;
		let url = self.config.endpoint_url(call.path());
		let timeout = call.timeout.unwrap_or(self.config.timeout).unsigned_abs();
		let request = ApiRequest::json(url, self.authorization.clone(), body, timeout);
		let response = self.http_client.execute(request).await?;

		obs::record_status(response.status);

		decode_response(response)
	}
}
#[cfg(feature = "reqwest")]
impl RemoteCallInvoker<ReqwestHttpClient> {
	/// Creates a new invoker backed by a freshly built reqwest transport.
	pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
		Ok(Self::with_http_client(config, ReqwestHttpClient::new()?))
	}

	/// Creates a new invoker from the process environment.
	///
	/// See [`ClientConfig::from_env`] for the variables consulted.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::new(ClientConfig::from_env()?)
	}
}
impl<C> Clone for RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			config: Arc::clone(&self.config),
			authorization: self.authorization.clone(),
		}
	}
}
impl<C> Debug for RemoteCallInvoker<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RemoteCallInvoker")
			.field("base_url", &self.config.base_url.as_str())
			.field("api_key", &self.config.credentials.api_key)
			.field("timeout", &self.config.timeout)
			.finish()
	}
}

/// Classifies a completed exchange by status and decodes the matching body.
fn decode_response<T>(response: ApiResponse) -> Result<T, CallError>
where
	T: DeserializeOwned,
{
	let status = response.status;

	if response.is_success() {
		return decode_object(&response.body)
			.map_err(|source| CallError::DecodeFailed { source, status });
	}

	match decode_object::<RemoteError>(&response.body) {
		Ok(remote) => Err(CallError::Remote(remote)),
		Err(_) => Err(CallError::UnexpectedStatus(status)),
	}
}

/// Decodes a body that must be a JSON object; arrays and scalars are rejected even when the
/// target struct would accept them positionally. Bytes after the object are ignored.
fn decode_object<T>(body: &[u8]) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);
	let object: serde_json::Map<String, serde_json::Value> =
		serde_path_to_error::deserialize(&mut de)?;

	serde_path_to_error::deserialize(serde_json::Value::Object(object))
}
