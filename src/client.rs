//! Client that drives the Authorization Code flow through a [`ProviderAdapter`].
//!
//! The client owns the HTTP transport and asks the adapter for everything provider-specific:
//! endpoints, default scopes, extra authorization parameters, error detection, and the resource
//! owner type.

pub mod authorization;

pub use authorization::*;

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, AUTHORIZATION},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, TransportError},
	http::{HttpTransport, ResponseMetadata},
	oauth,
	obs::{FlowKind, FlowSpan},
	provider::ProviderAdapter,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestProviderClient<A> = Client<A, ReqwestHttpClient>;

/// Authorization Code flow client bound to one provider adapter.
pub struct Client<A, T>
where
	A: ProviderAdapter,
	T: ?Sized + HttpTransport,
{
	/// Provider hooks consulted by every operation.
	pub adapter: Arc<A>,
	/// Transport used for every outbound provider request.
	pub transport: Arc<T>,
}
impl<A, T> Client<A, T>
where
	A: ProviderAdapter,
	T: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(adapter: impl Into<Arc<A>>, transport: impl Into<Arc<T>>) -> Self {
		Self { adapter: adapter.into(), transport: transport.into() }
	}

	/// Builds the URL the user is sent to for authorization.
	pub fn authorization_url(&self, options: AuthorizationOptions) -> Result<AuthorizationRequest> {
		FlowSpan::start(FlowKind::Authorization, "authorization_url")
			.scope(|| authorization::build_request(self.adapter.as_ref(), options))
	}

	/// Exchanges an authorization code for an access token.
	pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
		FlowSpan::start(FlowKind::CodeExchange, "exchange_code")
			.run(oauth::exchange_code(self.adapter.as_ref(), self.transport.as_ref(), code))
			.await
	}

	/// Fetches the raw profile payload for `token`.
	///
	/// The body must decode to a JSON object and pass the adapter's error check; the HTTP status
	/// plays no part in deciding success.
	pub async fn fetch_resource_owner_details(&self, token: &AccessToken) -> Result<JsonObject> {
		FlowSpan::start(FlowKind::ResourceOwner, "fetch_resource_owner_details")
			.run(self.request_resource_owner_details(token))
			.await
	}

	/// Fetches the profile for `token` and wraps it in the adapter's resource owner type.
	pub async fn resource_owner(&self, token: &AccessToken) -> Result<A::ResourceOwner> {
		let details = self.fetch_resource_owner_details(token).await?;

		Ok(self.adapter.create_resource_owner(details, token))
	}

	async fn request_resource_owner_details(&self, token: &AccessToken) -> Result<JsonObject> {
		let endpoint = self.adapter.resource_owner_details_endpoint(token);
		let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
			endpoint: "resource_owner_details",
			source,
		})?;
		let request = Request::builder()
			.method(Method::GET)
			.uri(url.as_str())
			.header(AUTHORIZATION, format!("Bearer {}", token.secret()))
			.header(ACCEPT, "application/json")
			.body(Vec::new())
			.map_err(ConfigError::from)?;
		let response = self.transport.execute(request).await.map_err(TransportError::network)?;
		let metadata = ResponseMetadata::from_response(&response);
		let body = oauth::decode_object(response.body(), &metadata)?;

		self.adapter.check_response(&metadata, &body)?;

		Ok(body)
	}
}
#[cfg(feature = "reqwest")]
impl<A> Client<A, ReqwestHttpClient>
where
	A: ProviderAdapter,
{
	/// Creates a client backed by [`ReqwestHttpClient::new`].
	///
	/// Fails with [`TransportError`] when the reqwest client cannot be built.
	pub fn new(adapter: impl Into<Arc<A>>) -> Result<Self> {
		let transport = ReqwestHttpClient::new().map_err(TransportError::from)?;

		Ok(Self::with_transport(adapter, transport))
	}
}
impl<A, T> Clone for Client<A, T>
where
	A: ProviderAdapter,
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { adapter: self.adapter.clone(), transport: self.transport.clone() }
	}
}
impl<A, T> Debug for Client<A, T>
where
	A: ProviderAdapter,
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let config = self.adapter.configuration();

		f.debug_struct("Client")
			.field("client_id", &config.client_id)
			.field("authorization_endpoint", &self.adapter.authorization_endpoint())
			.finish()
	}
}
