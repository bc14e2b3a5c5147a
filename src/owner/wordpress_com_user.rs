//! WordPress.com user built from the `/rest/v1/me` response.

// self
use crate::{
	_prelude::*,
	owner::{ResourceOwner, lookup},
};

/// Read-only view over a WordPress.com `/me` payload.
///
/// Accessors return the raw JSON value stored under the documented key, or `None` when the key
/// is missing. Nothing is coerced or validated: `ID` and `primary_blog` are numbers, the rest are
/// usually strings, and whatever the provider sent is handed back as is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPressComUser {
	response: JsonObject,
}
impl WordPressComUser {
	/// Wraps a decoded profile response.
	pub fn new(response: JsonObject) -> Self {
		Self { response }
	}

	/// User identifier (`ID`).
	pub fn id(&self) -> Option<&Value> {
		lookup(&self.response, "ID")
	}

	/// Email address (`email`).
	pub fn email(&self) -> Option<&Value> {
		lookup(&self.response, "email")
	}

	/// Display name (`display_name`).
	pub fn display_name(&self) -> Option<&Value> {
		lookup(&self.response, "display_name")
	}

	/// Alias of [`display_name`](Self::display_name).
	pub fn name(&self) -> Option<&Value> {
		self.display_name()
	}

	/// Login name (`username`).
	pub fn username(&self) -> Option<&Value> {
		lookup(&self.response, "username")
	}

	/// Public profile link (`profile_URL`).
	pub fn profile_url(&self) -> Option<&Value> {
		lookup(&self.response, "profile_URL")
	}

	/// Gravatar URL (`avatar_URL`).
	pub fn avatar_url(&self) -> Option<&Value> {
		lookup(&self.response, "avatar_URL")
	}

	/// Primary blog identifier (`primary_blog`).
	pub fn blog_id(&self) -> Option<&Value> {
		lookup(&self.response, "primary_blog")
	}

	/// Primary blog URL (`primary_blog_url`).
	pub fn blog_url(&self) -> Option<&Value> {
		lookup(&self.response, "primary_blog_url")
	}

	/// Interface language (`language`).
	pub fn language(&self) -> Option<&Value> {
		lookup(&self.response, "language")
	}

	/// Complete response, unmodified.
	pub fn to_map(&self) -> &JsonObject {
		&self.response
	}

	/// Consumes the view and returns the response.
	pub fn into_map(self) -> JsonObject {
		self.response
	}
}
impl ResourceOwner for WordPressComUser {
	fn id(&self) -> Option<&Value> {
		WordPressComUser::id(self)
	}

	fn to_map(&self) -> &JsonObject {
		WordPressComUser::to_map(self)
	}
}
impl From<JsonObject> for WordPressComUser {
	fn from(response: JsonObject) -> Self {
		Self::new(response)
	}
}
