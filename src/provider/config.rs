//! Caller-supplied client registration for a provider.

// self
use crate::{_prelude::*, auth::Secret};

/// Client registration shared with a provider adapter for the lifetime of a flow.
///
/// The value is immutable once built; adapters keep it behind an [`Arc`] and only read it.
/// It deserializes from any serde format, with `blog` optional:
///
/// ```
/// use oauth2_wordpress_com::provider::ProviderConfiguration;
///
/// let config: ProviderConfiguration = serde_json::from_str(
/// 	r#"{"client_id":"123","client_secret":"s3cret","redirect_uri":"https://app.example.com/cb"}"#,
/// )
/// .unwrap();
///
/// assert!(config.blog.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret, sent in the token request body.
	pub client_secret: Secret,
	/// Redirect URI registered with the provider; passed through verbatim.
	pub redirect_uri: String,
	/// Blog (site) identifier or URL forwarded as the `blog` authorization parameter.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blog: Option<String>,
}
impl ProviderConfiguration {
	/// Creates a configuration without a blog identifier.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<Secret>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri: redirect_uri.into(),
			blog: None,
		}
	}

	/// Sets the blog identifier sent with authorization requests.
	pub fn with_blog(mut self, blog: impl Into<String>) -> Self {
		self.blog = Some(blog.into());

		self
	}

	/// Returns the blog identifier when one is configured and non-empty.
	///
	/// `""` and `"0"` both count as empty, the same rule applied to `error` fields in provider
	/// responses.
	pub fn blog(&self) -> Option<&str> {
		self.blog.as_deref().filter(|blog| !blog.is_empty() && *blog != "0")
	}
}
