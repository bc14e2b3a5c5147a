//! Access token issued by the token endpoint.

// self
use crate::{_prelude::*, auth::Secret};

/// Access token plus the metadata the token endpoint returned alongside it.
///
/// WordPress.com answers the code exchange with `access_token`, `token_type`, `scope`, and two
/// provider-specific fields, `blog_id` and `blog_url`, which land in [`values`](Self::values).
/// Tokens are long-lived, so `expires_at` and `refresh_token` are usually absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Bearer secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Token type reported by the provider (`bearer` for WordPress.com).
	pub token_type: String,
	/// Refresh token secret, if the provider issued one.
	pub refresh_token: Option<Secret>,
	/// Instant the token was received.
	pub issued_at: OffsetDateTime,
	/// Expiry instant derived from `expires_in`, if the provider sent one.
	pub expires_at: Option<OffsetDateTime>,
	/// Scopes echoed back by the provider.
	pub scopes: Vec<String>,
	/// Non-standard fields of the token response.
	pub values: JsonObject,
}
impl AccessToken {
	/// Creates a token issued now with no expiry, refresh token, scopes, or extra values.
	pub fn new(access_token: impl Into<Secret>, token_type: impl Into<String>) -> Self {
		Self {
			access_token: access_token.into(),
			token_type: token_type.into(),
			refresh_token: None,
			issued_at: OffsetDateTime::now_utc(),
			expires_at: None,
			scopes: Vec::new(),
			values: JsonObject::new(),
		}
	}

	/// Attaches a refresh token.
	pub fn with_refresh_token(mut self, refresh_token: impl Into<Secret>) -> Self {
		self.refresh_token = Some(refresh_token.into());

		self
	}

	/// Derives the expiry instant from a relative lifetime.
	pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
		self.expires_at = self.issued_at.checked_add(expires_in);

		self
	}

	/// Records the scopes returned by the provider.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Replaces the extra response values.
	pub fn with_values(mut self, values: JsonObject) -> Self {
		self.values = values;

		self
	}

	/// Returns the bearer secret.
	pub fn secret(&self) -> &str {
		self.access_token.expose()
	}

	/// Looks up a non-standard token response field such as `blog_id`.
	pub fn value(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Returns `true` if the token carries an expiry that has passed at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` if the token carries an expiry that has already passed.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
