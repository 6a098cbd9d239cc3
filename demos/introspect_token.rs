//! Demonstrates introspecting an access token with the default reqwest transport against a mock
//! provider.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use authlete_client::{
	auth::ServiceCredentials, config::ClientConfig, invoker::ReqwestInvoker, url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let introspection_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/introspection");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"active\":true,\"resultCode\":\"A056001\"}");
		})
		.await;
	let config = ClientConfig::builder(ServiceCredentials::new("demo-key", "demo-secret"))
		.base_url(Url::parse(&server.base_url())?)
		.build()?;
	let invoker = ReqwestInvoker::new(config)?;
	let verdict = invoker.introspect("demo-access-token").await?;

	println!("Token active: {}.", verdict.active);

	introspection_mock.assert_async().await;

	Ok(())
}
