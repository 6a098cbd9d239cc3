#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use authlete_client::{
	_preludet::*,
	api::IntrospectionResult,
	auth::ServiceCredentials,
	config::ClientConfig,
	http::{ACCEPT_JSON, CONTENT_TYPE_JSON},
	invoker::{RemoteCall, RemoteCallInvoker},
};

#[derive(Debug, Deserialize)]
struct EchoShape {
	#[serde(default)]
	echoed: String,
}

#[tokio::test]
async fn invoke_posts_authenticated_json() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/custom/echo")
				.header("authorization", TEST_BASIC_AUTHORIZATION)
				.header("content-type", CONTENT_TYPE_JSON)
				.header("accept", ACCEPT_JSON)
				.json_body(json!({ "alpha": "1", "beta": "two" }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"echoed\":\"alpha,beta\",\"extra\":[1,2,3]}");
		})
		.await;
	let call = RemoteCall::new("/api/custom/echo")
		.expect("Custom path should be accepted.")
		.field("alpha", "1")
		.field("beta", "two");
	let shape: EchoShape = invoker.invoke(call).await.expect("Echo call should succeed.");

	assert_eq!(shape.echoed, "alpha,beta");

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_payload_is_sent_as_empty_object() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/custom/empty").json_body(json!({}));
			then.status(200).body("{}");
		})
		.await;
	let call = RemoteCall::new("/api/custom/empty").expect("Custom path should be accepted.");
	let shape: EchoShape = invoker.invoke(call).await.expect("Empty call should succeed.");

	assert!(shape.echoed.is_empty());

	mock.assert_async().await;
}

#[tokio::test]
async fn base_path_prefix_is_preserved() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.url("/gateway/authlete/"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/gateway/authlete/api/auth/introspection");
			then.status(200).body("{\"active\":true}");
		})
		.await;
	let result = invoker.introspect("at-prefixed").await.expect("Prefixed call should succeed.");

	assert!(result.active);

	mock.assert_async().await;
}

#[tokio::test]
async fn provider_error_body_surfaces_verbatim() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/introspection");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"code\": 400, \"message\": \"bad request\"}");
		})
		.await;
	let err = invoker.introspect("at-bad").await.expect_err("HTTP 400 should surface an error.");

	match err {
		CallError::Remote(remote) => {
			assert_eq!(remote.code, 400);
			assert_eq!(remote.message, "bad request");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn undecodable_error_body_keeps_status() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let empty = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/authorization");
			then.status(503);
		})
		.await;
	let html = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/authorization/fail");
			then.status(502).header("content-type", "text/html").body("<html>Bad Gateway</html>");
		})
		.await;
	let err = invoker
		.authorize("response_type=code")
		.await
		.expect_err("HTTP 503 with an empty body should fail.");

	assert!(matches!(err, CallError::UnexpectedStatus(503)));

	let err =
		invoker.authorize_fail("tk-1").await.expect_err("HTTP 502 with HTML body should fail.");

	assert!(matches!(err, CallError::UnexpectedStatus(502)));

	empty.assert_async().await;
	html.assert_async().await;
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_failure() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/token");
			then.status(200).body("{\"expiresIn\":\"soon\"}");
		})
		.await;
	let err = invoker
		.token("grant_type=client_credentials", "client-1")
		.await
		.expect_err("Type mismatch should fail to decode.");

	match err {
		CallError::DecodeFailed { source, status } => {
			assert_eq!(status, 200);
			assert_eq!(source.path().to_string(), "expiresIn");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn timeout_yields_transport_failure_and_releases_connection() {
	let server = MockServer::start_async().await;
	let invoker = build_reqwest_test_invoker(&server.base_url());
	let slow = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/introspection").json_body(json!({ "token": "slow" }));
			then.status(200).delay(std::time::Duration::from_secs(3)).body("{\"active\":true}");
		})
		.await;
	let fast = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/introspection").json_body(json!({ "token": "fast" }));
			then.status(200).body("{\"active\":true}");
		})
		.await;
	let call = RemoteCall::new("/api/auth/introspection")
		.expect("Introspection path should be accepted.")
		.field("token", "slow")
		.with_timeout(Duration::milliseconds(200))
		.expect("Positive timeout should be accepted.");
	let err = invoker
		.invoke::<IntrospectionResult>(call)
		.await
		.expect_err("Delayed response should exceed the timeout.");

	assert!(matches!(err, CallError::TransportFailed(TransportError::Timeout { .. })));
	assert!(err.is_retryable());

	// The same invoker keeps working once the abandoned request is gone.
	let result = invoker.introspect("fast").await.expect("Follow-up call should succeed.");

	assert!(result.active);

	slow.assert_calls_async(1).await;
	fast.assert_calls_async(1).await;
}

#[tokio::test]
async fn configured_timeout_applies_to_endpoint_operations() {
	let server = MockServer::start_async().await;
	let config = ClientConfig::builder(ServiceCredentials::new(TEST_API_KEY, TEST_API_SECRET))
		.base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."))
		.timeout(Duration::milliseconds(200))
		.build()
		.expect("Short-timeout configuration should build.");
	let invoker = RemoteCallInvoker::with_http_client(config, test_reqwest_http_client());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/authorization/issue");
			then.status(200).delay(std::time::Duration::from_secs(3)).body("{}");
		})
		.await;
	let err = invoker
		.authorize_issue("tk-slow", "alice")
		.await
		.expect_err("Configured timeout should abort the call.");

	assert!(err.is_timeout());

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
	let port = std::net::TcpListener::bind("127.0.0.1:0")
		.and_then(|listener| listener.local_addr())
		.expect("Ephemeral port should be available.")
		.port();
	let invoker = build_reqwest_test_invoker(&format!("http://127.0.0.1:{port}"));
	let err = invoker.introspect("at-offline").await.expect_err("Closed port should fail.");

	assert!(matches!(err, CallError::TransportFailed(TransportError::Network { .. })));
}
