//! WordPress.com adapter.
//!
//! See <https://developer.wordpress.com/docs/oauth2/> for the upstream contract.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::IdentityProviderError,
	http::ResponseMetadata,
	owner::WordPressComUser,
	provider::{
		AuthorizationParameters, ProviderAdapter, ProviderConfiguration, TokenRequestParameters,
	},
};

/// Authorization endpoint.
pub const AUTHORIZATION_ENDPOINT: &str = "https://public-api.wordpress.com/oauth2/authorize";
/// Token endpoint.
pub const TOKEN_ENDPOINT: &str = "https://public-api.wordpress.com/oauth2/token";
/// Resource owner (`/me`) endpoint.
pub const RESOURCE_OWNER_DETAILS_ENDPOINT: &str = "https://public-api.wordpress.com/rest/v1/me";

const BLOG_PARAM: &str = "blog";

/// Scope values understood by WordPress.com.
///
/// The adapter never validates caller scopes; the enum only names the documented tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordPressComScope {
	/// `auth`: authentication only, grants access to the `/me` endpoints.
	Auth,
	/// `global`: access to all of the user's sites.
	Global,
	/// Empty string: access to a single blog, named by the `blog` parameter or picked by the
	/// user during authorization.
	Blog,
}
impl WordPressComScope {
	/// Returns the wire value of the scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			WordPressComScope::Auth => "auth",
			WordPressComScope::Global => "global",
			WordPressComScope::Blog => "",
		}
	}
}
impl Display for WordPressComScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<WordPressComScope> for String {
	fn from(value: WordPressComScope) -> Self {
		value.as_str().to_owned()
	}
}

/// WordPress.com provider adapter.
///
/// Endpoints are fixed; the only configurable behavior is the optional `blog` authorization
/// parameter taken from [`ProviderConfiguration::blog`].
#[derive(Clone, Debug)]
pub struct WordPressCom {
	config: Arc<ProviderConfiguration>,
}
impl WordPressCom {
	/// Creates an adapter reading from the shared configuration.
	pub fn new(config: impl Into<Arc<ProviderConfiguration>>) -> Self {
		Self { config: config.into() }
	}
}
impl ProviderAdapter for WordPressCom {
	type ResourceOwner = WordPressComUser;

	fn configuration(&self) -> &ProviderConfiguration {
		&self.config
	}

	fn authorization_endpoint(&self) -> &str {
		AUTHORIZATION_ENDPOINT
	}

	fn token_endpoint(&self, _params: &TokenRequestParameters) -> &str {
		TOKEN_ENDPOINT
	}

	fn resource_owner_details_endpoint(&self, _token: &AccessToken) -> &str {
		RESOURCE_OWNER_DETAILS_ENDPOINT
	}

	fn default_scopes(&self) -> BTreeSet<String> {
		BTreeSet::from([WordPressComScope::Auth.into()])
	}

	fn augment_authorization_parameters(
		&self,
		mut base: AuthorizationParameters,
	) -> AuthorizationParameters {
		if let Some(blog) = self.config.blog() {
			base.insert(BLOG_PARAM.into(), blog.into());
		}

		base
	}

	fn check_response(
		&self,
		_metadata: &ResponseMetadata,
		body: &JsonObject,
	) -> Result<(), IdentityProviderError> {
		let Some(error) = body.get("error").filter(|value| !is_empty(value)) else {
			return Ok(());
		};
		let description = body.get("error_description").map(render).unwrap_or_default();
		let message = format!("{description} ({})", render(error));

		Err(IdentityProviderError::new(message, body.clone()))
	}

	fn create_resource_owner(&self, body: JsonObject, _token: &AccessToken) -> Self::ResourceOwner {
		WordPressComUser::new(body)
	}
}

// Empty means null, false, zero, "", "0", or an empty array/object.
fn is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(flag) => !flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON),
		Value::String(text) => text.is_empty() || text == "0",
		Value::Array(items) => items.is_empty(),
		Value::Object(map) => map.is_empty(),
	}
}

// String coercion: `true` is "1", `false` and null are "", integral floats drop the fraction,
// and arrays/objects collapse to "Array".
fn render(value: &Value) -> String {
	match value {
		Value::Null | Value::Bool(false) => String::new(),
		Value::Bool(true) => "1".into(),
		Value::Number(number) => match number.as_f64() {
			Some(n) if number.is_f64() && n.fract().abs() < f64::EPSILON && n.abs() < 1e15 =>
				format!("{n:.0}"),
			_ => number.to_string(),
		},
		Value::String(text) => text.clone(),
		Value::Array(_) | Value::Object(_) => "Array".into(),
	}
}
