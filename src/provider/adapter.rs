//! Provider adapter hooks that customize the Authorization Code flow.
//!
//! The client owns request construction, transport, and token parsing; an adapter only answers
//! the provider-specific questions (which URLs, which default scopes, which extra parameters,
//! what counts as an error, how to wrap the profile payload).

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::IdentityProviderError,
	http::ResponseMetadata,
	owner::ResourceOwner,
	provider::ProviderConfiguration,
};

/// Query parameters of an authorization request, keyed by parameter name.
pub type AuthorizationParameters = BTreeMap<String, String>;

/// Form parameters of a token request, keyed by parameter name.
pub type TokenRequestParameters = BTreeMap<String, String>;

/// Hook set a concrete provider implements so the client can drive its flow.
///
/// Implementors are required to be `Send + Sync`, and every hook is a pure function of its
/// inputs plus the read-only configuration. `scope_separator` and
/// `augment_authorization_parameters` have defaults that suit most providers.
pub trait ProviderAdapter: Send + Sync {
	/// Resource owner type built from a successful profile response.
	type ResourceOwner: ResourceOwner;

	/// Client registration this adapter was built with.
	fn configuration(&self) -> &ProviderConfiguration;

	/// Base URL users are redirected to for authorization.
	fn authorization_endpoint(&self) -> &str;

	/// URL the authorization code is exchanged at.
	///
	/// `params` carries the token request form for providers whose endpoint depends on it.
	fn token_endpoint(&self, params: &TokenRequestParameters) -> &str;

	/// URL that returns the resource owner's profile for `token`.
	fn resource_owner_details_endpoint(&self, token: &AccessToken) -> &str;

	/// Scopes requested when the caller does not name any.
	fn default_scopes(&self) -> BTreeSet<String>;

	/// Separator used to join scopes into the `scope` query parameter.
	fn scope_separator(&self) -> &str {
		","
	}

	/// Gives providers a chance to add parameters to the authorization request.
	///
	/// `base` holds everything the client assembled (client id, redirect URI, state, scope,
	/// response type, approval prompt). Implementations may add keys but must not drop any.
	/// The default returns `base` unchanged.
	fn augment_authorization_parameters(
		&self,
		base: AuthorizationParameters,
	) -> AuthorizationParameters {
		base
	}

	/// Inspects a decoded response body and reports provider errors.
	fn check_response(
		&self,
		metadata: &ResponseMetadata,
		body: &JsonObject,
	) -> Result<(), IdentityProviderError>;

	/// Wraps a successful profile response.
	fn create_resource_owner(&self, body: JsonObject, token: &AccessToken) -> Self::ResourceOwner;
}
