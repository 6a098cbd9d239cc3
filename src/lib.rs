//! Typed async client for an OAuth/OIDC authorization-as-a-service API—basic-auth JSON calls,
//! uniform error decoding, and transport-aware observability in one small crate.
//!
//! Every endpoint is a thin specialization of [`invoker::RemoteCallInvoker::invoke`], which posts
//! a JSON payload to `base_url + path` and decodes either the declared response shape or the
//! provider's error body.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod invoker;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::ServiceCredentials,
		config::ClientConfig,
		http::ReqwestHttpClient,
		invoker::{ReqwestInvoker, RemoteCallInvoker},
	};

	/// API key used by the test helpers.
	pub const TEST_API_KEY: &str = "service-key";
	/// API secret used by the test helpers.
	pub const TEST_API_SECRET: &str = "service-secret";
	/// `Authorization` header value produced by [`TEST_API_KEY`] + [`TEST_API_SECRET`].
	pub const TEST_BASIC_AUTHORIZATION: &str = "Basic c2VydmljZS1rZXk6c2VydmljZS1zZWNyZXQ=";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a [`ClientConfig`] that targets `base_url` with the test credentials.
	pub fn test_client_config(base_url: &str) -> ClientConfig {
		ClientConfig::builder(ServiceCredentials::new(TEST_API_KEY, TEST_API_SECRET))
			.base_url(Url::parse(base_url).expect("Test base URL should parse successfully."))
			.build()
			.expect("Test client configuration should build successfully.")
	}

	/// Constructs a reqwest-backed [`RemoteCallInvoker`] pointed at `base_url`.
	pub fn build_reqwest_test_invoker(base_url: &str) -> ReqwestInvoker {
		RemoteCallInvoker::with_http_client(
			test_client_config(base_url),
			test_reqwest_http_client(),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{CallError, ConfigError, Error, Result, TransportError};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _};
