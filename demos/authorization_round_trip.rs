//! Walks an authorization request through start, issue, and token exchange, then shows how a
//! provider rejection surfaces as a typed error.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use authlete_client::{
	auth::ServiceCredentials, config::ClientConfig, error::CallError, invoker::ReqwestInvoker,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/authorization");
			then.status(200).body("{\"action\":\"INTERACTION\",\"ticket\":\"demo-ticket\"}");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/authorization/issue");
			then.status(200).body(
				"{\"action\":\"LOCATION\",\"responseContent\":\"https://client.example.com/cb?code=demo-code\",\"authorizationCode\":\"demo-code\"}",
			);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/token");
			then.status(400).body("{\"code\":400,\"message\":\"Unknown client.\"}");
		})
		.await;

	let config = ClientConfig::builder(ServiceCredentials::new("demo-key", "demo-secret"))
		.base_url(Url::parse(&server.base_url())?)
		.build()?;
	let invoker = ReqwestInvoker::new(config)?;
	let started = invoker.authorize("response_type=code&client_id=demo&scope=openid").await?;

	println!("Authorization action: {} (ticket {}).", started.action, started.ticket);

	let issued = invoker.authorize_issue(started.ticket, "demo-user").await?;

	println!("Redirect the user agent to {}.", issued.response_content);

	match invoker.token("grant_type=authorization_code&code=demo-code", "demo").await {
		Ok(token) => println!("Issued token type {}.", token.token_type),
		Err(CallError::Remote(remote)) =>
			println!("Provider rejected the token request: {} ({}).", remote.message, remote.code),
		Err(other) => return Err(other.into()),
	}

	Ok(())
}
