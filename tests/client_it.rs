// std
use std::{collections::VecDeque, io, sync::Arc};
// crates.io
use oauth2::{
	HttpRequest, HttpResponse,
	http::{
		HeaderMap, Method, StatusCode,
		header::{AUTHORIZATION, CONTENT_TYPE},
	},
};
use parking_lot::Mutex;
// self
use oauth2_wordpress_com::{
	JsonObject,
	auth::AccessToken,
	client::{AuthorizationOptions, Client},
	error::Error,
	http::{HttpTransport, TransportFuture},
	owner::ResourceOwner,
	provider::{ProviderConfiguration, TOKEN_ENDPOINT, WordPressCom},
	serde_json::{self, Value},
	url::form_urlencoded,
};

const MOCK_USER: &str = r#"{
	"ID": 12345,
	"display_name": "Mock Name",
	"username": "mockuser",
	"email": "mockuser@example.com",
	"primary_blog": 9999999,
	"primary_blog_url": "https://example.com",
	"avatar_URL": "https://gravatar.com/avatar/17404A596CBD0D1E6C7D23FCD845AB82"
}"#;
const MOCK_TOKEN: &str = r#"{
	"access_token": "mock_access_token",
	"token_type": "bearer",
	"scope": "auth",
	"blog_id": 9999999,
	"blog_url": "https://example.com"
}"#;

#[derive(Debug)]
struct RecordedRequest {
	method: Method,
	uri: String,
	headers: HeaderMap,
	body: Vec<u8>,
}
impl RecordedRequest {
	fn form(&self) -> JsonObject {
		form_urlencoded::parse(&self.body)
			.map(|(key, value)| (key.into_owned(), Value::from(value.into_owned())))
			.collect()
	}
}

#[derive(Debug, Default)]
struct MockTransport {
	responses: Mutex<VecDeque<(u16, String)>>,
	requests: Mutex<Vec<RecordedRequest>>,
}
impl MockTransport {
	fn respond(status: u16, body: &str) -> Arc<Self> {
		let transport = Self::default();

		transport.responses.lock().push_back((status, body.to_owned()));

		Arc::new(transport)
	}

	fn single_request(&self) -> RecordedRequest {
		let mut requests = self.requests.lock();

		assert_eq!(requests.len(), 1, "Exactly one request should have been sent.");

		requests.remove(0)
	}
}
impl HttpTransport for MockTransport {
	type TransportError = io::Error;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let (parts, body) = request.into_parts();

		self.requests.lock().push(RecordedRequest {
			method: parts.method,
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		});

		let next = self.responses.lock().pop_front();

		Box::pin(async move {
			let (status, body) = next
				.ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "No response queued."))?;
			let mut response = HttpResponse::new(body.into_bytes());

			*response.status_mut() = StatusCode::from_u16(status).map_err(io::Error::other)?;
			response.headers_mut().insert(
				CONTENT_TYPE,
				"application/json".parse().expect("Content type fixture should parse."),
			);

			Ok(response)
		})
	}
}

fn build_client(transport: Arc<MockTransport>) -> Client<WordPressCom, MockTransport> {
	let config = ProviderConfiguration::new("mock_client_id", "mock_client_secret", "none");

	Client::with_transport(WordPressCom::new(config), transport)
}

fn mock_token() -> AccessToken {
	AccessToken::new("mock_access_token", "bearer")
}

#[tokio::test]
async fn exchange_code_returns_token_with_blog_values() {
	let transport = MockTransport::respond(200, MOCK_TOKEN);
	let client = build_client(transport.clone());
	let token =
		client.exchange_code("mock_authorization_code").await.expect("Exchange should succeed.");

	assert_eq!(token.secret(), "mock_access_token");
	assert_eq!(token.token_type, "bearer");
	assert!(token.expires_at.is_none());
	assert!(token.refresh_token.is_none());
	assert_eq!(token.value("blog_id"), Some(&Value::from(9999999)));
	assert_eq!(token.value("blog_url"), Some(&Value::from("https://example.com")));

	let request = transport.single_request();
	let form = request.form();

	assert_eq!(request.method, Method::POST);
	assert_eq!(request.uri, TOKEN_ENDPOINT);
	assert_eq!(form.get("grant_type"), Some(&Value::from("authorization_code")));
	assert_eq!(form.get("code"), Some(&Value::from("mock_authorization_code")));
	assert_eq!(form.get("client_id"), Some(&Value::from("mock_client_id")));
	assert_eq!(form.get("client_secret"), Some(&Value::from("mock_client_secret")));
	assert_eq!(form.get("redirect_uri"), Some(&Value::from("none")));
}

#[tokio::test]
async fn exchange_code_error_body_raises_identity_provider_error() {
	for status in [400, 200] {
		let transport = MockTransport::respond(
			status,
			r#"{"error":"invalid_request","error_description":"Unknown request"}"#,
		);
		let err = build_client(transport)
			.exchange_code("mock_authorization_code")
			.await
			.expect_err("Error bodies must fail the exchange.");
		let err = match err {
			Error::IdentityProvider(err) => err,
			other => panic!("Expected an identity provider error for status {status}, got {other:?}."),
		};

		assert_eq!(err.message, "Unknown request (invalid_request)");
		assert_eq!(err.code(), Some(&Value::from("invalid_request")));
		assert_eq!(err.description(), Some(&Value::from("Unknown request")));
	}
}

#[tokio::test]
async fn exchange_code_rejects_non_json_bodies() {
	let transport = MockTransport::respond(500, "<html>Internal Server Error</html>");
	let err = build_client(transport)
		.exchange_code("mock_authorization_code")
		.await
		.expect_err("HTML bodies must fail the exchange.");

	assert!(matches!(err, Error::ResponseParse { status: Some(500), .. }), "{err:?}");
}

#[tokio::test]
async fn exchange_code_surfaces_transport_failures() {
	let transport = Arc::new(MockTransport::default());
	let err = build_client(transport)
		.exchange_code("mock_authorization_code")
		.await
		.expect_err("Missing responses must fail the exchange.");

	assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn resource_owner_returns_wordpress_user() {
	let transport = MockTransport::respond(200, MOCK_USER);
	let client = build_client(transport.clone());
	let user = client.resource_owner(&mock_token()).await.expect("Profile lookup should succeed.");

	assert_eq!(user.id(), Some(&Value::from(12345)));
	assert_eq!(user.username(), Some(&Value::from("mockuser")));
	assert_eq!(user.email(), Some(&Value::from("mockuser@example.com")));
	assert_eq!(user.name(), Some(&Value::from("Mock Name")));
	assert_eq!(user.blog_id(), Some(&Value::from(9999999)));
	assert_eq!(user.blog_url(), Some(&Value::from("https://example.com")));
	assert!(user.avatar_url().and_then(Value::as_str).is_some_and(|url| !url.is_empty()));

	let expected: JsonObject = serde_json::from_str(MOCK_USER).expect("Fixture should decode.");

	assert_eq!(ResourceOwner::to_map(&user), &expected);

	let request = transport.single_request();

	assert_eq!(request.method, Method::GET);
	assert_eq!(request.uri, "https://public-api.wordpress.com/rest/v1/me");
	assert_eq!(
		request.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok()),
		Some("Bearer mock_access_token")
	);
}

#[tokio::test]
async fn resource_owner_error_detection_ignores_status() {
	for status in [200, 401, 500] {
		let transport = MockTransport::respond(
			status,
			r#"{"error":"invalid_token","error_description":"The OAuth2 token is invalid."}"#,
		);
		let err = build_client(transport)
			.fetch_resource_owner_details(&mock_token())
			.await
			.expect_err("Error bodies must fail the lookup.");

		let message = match &err {
			Error::IdentityProvider(inner) => inner.message.as_str(),
			other => panic!("Unexpected error for status {status}: {other:?}"),
		};

		assert_eq!(message, "The OAuth2 token is invalid. (invalid_token)");
	}

	let transport = MockTransport::respond(503, MOCK_USER);
	let details = build_client(transport)
		.fetch_resource_owner_details(&mock_token())
		.await
		.expect("Bodies without an error field succeed regardless of status.");

	assert_eq!(details.get("ID"), Some(&Value::from(12345)));
}

#[tokio::test]
async fn resource_owner_rejects_malformed_json() {
	let transport = MockTransport::respond(200, "{\"ID\":");
	let err = build_client(transport)
		.fetch_resource_owner_details(&mock_token())
		.await
		.expect_err("Truncated bodies must fail the lookup.");

	assert!(matches!(err, Error::ResponseParse { status: Some(200), .. }), "{err:?}");
}

#[tokio::test]
async fn authorization_state_round_trips() {
	let client = build_client(Arc::new(MockTransport::default()));
	let request = client
		.authorization_url(AuthorizationOptions::default())
		.expect("Authorization URL should build.");

	assert!(request.validate_state(&request.state).is_ok());
	assert!(matches!(request.validate_state("forged"), Err(Error::StateMismatch)));
	assert!(request.url.as_str().starts_with("https://public-api.wordpress.com/oauth2/authorize?"));
}
