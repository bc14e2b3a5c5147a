//! Authorization request construction and state validation.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{AuthorizationParameters, ProviderAdapter},
};

const STATE_LEN: usize = 32;
const DEFAULT_APPROVAL_PROMPT: &str = "auto";

/// Caller overrides for an authorization request.
///
/// Every field falls back to a default: a random state, the adapter's default scopes, the
/// `auto` approval prompt, and the configured redirect URI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationOptions {
	/// Explicit `state` value.
	pub state: Option<String>,
	/// Scopes to request instead of the adapter defaults.
	pub scopes: Option<Vec<String>>,
	/// `approval_prompt` value (`auto` or `force`).
	pub approval_prompt: Option<String>,
	/// Redirect URI overriding the configured one.
	pub redirect_uri: Option<String>,
}
impl AuthorizationOptions {
	/// Uses `state` instead of a generated value.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Requests `scopes` instead of the adapter defaults.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the `approval_prompt` parameter.
	pub fn with_approval_prompt(mut self, approval_prompt: impl Into<String>) -> Self {
		self.approval_prompt = Some(approval_prompt.into());

		self
	}

	/// Overrides the configured redirect URI for this request.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}
}

/// Authorization URL plus the state that must come back through the redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// Fully-formed URL the user should be sent to.
	pub url: Url,
	/// Opaque state value that must round-trip via the redirect handler.
	pub state: String,
	/// Every query parameter appended to the authorization endpoint.
	pub parameters: AuthorizationParameters,
}
impl AuthorizationRequest {
	/// Validates the returned `state` parameter after the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}

pub(crate) fn build_request<A>(
	adapter: &A,
	options: AuthorizationOptions,
) -> Result<AuthorizationRequest>
where
	A: ?Sized + ProviderAdapter,
{
	let config = adapter.configuration();
	let AuthorizationOptions { state, scopes, approval_prompt, redirect_uri } = options;
	let state = state.unwrap_or_else(|| random_string(STATE_LEN));
	let scope = match scopes {
		Some(scopes) => scopes.join(adapter.scope_separator()),
		None => adapter
			.default_scopes()
			.into_iter()
			.collect::<Vec<_>>()
			.join(adapter.scope_separator()),
	};
	let base = AuthorizationParameters::from([
		("client_id".into(), config.client_id.clone()),
		("redirect_uri".into(), redirect_uri.unwrap_or_else(|| config.redirect_uri.clone())),
		("state".into(), state.clone()),
		("scope".into(), scope),
		("response_type".into(), "code".into()),
		(
			"approval_prompt".into(),
			approval_prompt.unwrap_or_else(|| DEFAULT_APPROVAL_PROMPT.into()),
		),
	]);
	let parameters = adapter.augment_authorization_parameters(base);
	let mut url = Url::parse(adapter.authorization_endpoint())
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "authorization", source })?;

	url.query_pairs_mut().extend_pairs(parameters.iter());

	Ok(AuthorizationRequest { url, state, parameters })
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}
