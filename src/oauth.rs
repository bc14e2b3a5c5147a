//! Internal bridge to the `oauth2` crate for the authorization-code exchange.
//!
//! The `oauth2` crate builds the token request and parses the response. Whenever it rejects a
//! response, the raw body captured by the transport handle is decoded again and passed through
//! [`ProviderAdapter::check_response`], so error detection stays driven by the body.

// crates.io
use oauth2::{
	AuthType, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	ExtraTokenFields, HttpClientError, RequestTokenError, StandardRevocableToken,
	StandardTokenResponse, TokenResponse, TokenUrl,
	basic::{
		BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
		BasicTokenType,
	},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, TransportError},
	http::{CapturedResponse, HttpTransport, ResponseMetadata, ResponseSlot, TransportHandle},
	provider::{ProviderAdapter, TokenRequestParameters},
};

/// Non-standard token response fields, collected verbatim.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct TokenValues {
	#[serde(flatten)]
	values: JsonObject,
}
impl ExtraTokenFields for TokenValues {}

type ProviderTokenResponse = StandardTokenResponse<TokenValues, BasicTokenType>;
type ProviderClient = oauth2::Client<
	BasicErrorResponse,
	ProviderTokenResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
>;
type ExchangeClient = oauth2::Client<
	BasicErrorResponse,
	ProviderTokenResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointSet,
>;
type ExchangeError<E> = RequestTokenError<HttpClientError<E>, BasicErrorResponse>;

/// Exchanges `code` for an access token at the adapter's token endpoint.
///
/// Client credentials travel in the request body and the configured redirect URI is passed
/// through verbatim.
pub(crate) async fn exchange_code<A, T>(
	adapter: &A,
	transport: &T,
	code: &str,
) -> Result<AccessToken>
where
	A: ?Sized + ProviderAdapter,
	T: ?Sized + HttpTransport,
{
	let config = adapter.configuration();
	let params = TokenRequestParameters::from([
		("grant_type".into(), "authorization_code".into()),
		("code".into(), code.to_owned()),
		("redirect_uri".into(), config.redirect_uri.clone()),
	]);
	let token_url = TokenUrl::new(adapter.token_endpoint(&params).to_owned())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "token", source })?;
	let oauth_client: ExchangeClient = <ProviderClient>::new(ClientId::new(config.client_id.clone()))
		.set_client_secret(ClientSecret::new(config.client_secret.expose().to_owned()))
		.set_auth_type(AuthType::RequestBody)
		.set_token_uri(token_url);
	let slot = ResponseSlot::default();
	let handle = TransportHandle::new(transport, slot.clone());
	let response = oauth_client
		.exchange_code(AuthorizationCode::new(code.to_owned()))
		.add_extra_param("redirect_uri", config.redirect_uri.clone())
		.request_async(&handle)
		.await
		.map_err(|err| map_exchange_error(adapter, slot.take(), err))?;

	if let Some(err) = slot.take().and_then(|captured| provider_error(adapter, &captured)) {
		return Err(err);
	}

	Ok(into_access_token(response))
}

fn into_access_token(response: ProviderTokenResponse) -> AccessToken {
	let token_type = match response.token_type() {
		BasicTokenType::Bearer => "bearer".to_owned(),
		BasicTokenType::Extension(value) => value.clone(),
		other => format!("{other:?}").to_ascii_lowercase(),
	};
	let mut token = AccessToken::new(response.access_token().secret().to_owned(), token_type)
		.with_values(response.extra_fields().values.clone());

	if let Some(expires_in) = response.expires_in().and_then(|value| Duration::try_from(value).ok())
	{
		token = token.with_expires_in(expires_in);
	}
	if let Some(refresh) = response.refresh_token() {
		token = token.with_refresh_token(refresh.secret().to_owned());
	}
	if let Some(scopes) = response.scopes() {
		token = token.with_scopes(scopes.iter().map(|scope| scope.as_str()));
	}

	token
}

fn map_exchange_error<A, E>(
	adapter: &A,
	captured: Option<CapturedResponse>,
	err: ExchangeError<E>,
) -> Error
where
	A: ?Sized + ProviderAdapter,
	E: 'static + Send + Sync + StdError,
{
	let status = captured.as_ref().and_then(|captured| captured.metadata.status);

	if let Some(err) = captured.as_ref().and_then(|captured| provider_error(adapter, captured)) {
		return err;
	}

	match err {
		RequestTokenError::ServerResponse(response) => Error::UnexpectedResponse {
			message: format!("Token endpoint rejected the request: {}", response.error().as_ref()),
			status,
		},
		RequestTokenError::Request(error) => map_transport_error(error),
		RequestTokenError::Parse(source, _body) => Error::ResponseParse { source, status },
		RequestTokenError::Other(message) => Error::UnexpectedResponse { message, status },
	}
}

// Runs the adapter's predicate over the captured body, if it decodes to a JSON object.
fn provider_error<A>(adapter: &A, captured: &CapturedResponse) -> Option<Error>
where
	A: ?Sized + ProviderAdapter,
{
	let body = serde_json::from_slice::<JsonObject>(&captured.body).ok()?;

	adapter.check_response(&captured.metadata, &body).err().map(Error::from)
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		other => TransportError::Other { message: other.to_string() }.into(),
	}
}

/// Decodes a provider response body into a JSON object.
pub(crate) fn decode_object(body: &[u8], metadata: &ResponseMetadata) -> Result<JsonObject> {
	let deserializer = &mut serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(deserializer)
		.map_err(|source| Error::ResponseParse { source, status: metadata.status })
}
