//! Resource owner views over decoded profile payloads.

pub mod wordpress_com_user;

pub use wordpress_com_user::*;

// self
use crate::_prelude::*;

/// Authenticated end user as described by a provider's profile response.
pub trait ResourceOwner: Send + Sync {
	/// Provider-side identifier of the user, as sent.
	fn id(&self) -> Option<&Value>;

	/// Complete profile payload, unmodified.
	fn to_map(&self) -> &JsonObject;
}

/// Looks up `key` in `map`, falling back to a dot-separated path into nested objects.
///
/// An exact key always wins, so keys that themselves contain dots stay reachable.
pub(crate) fn lookup<'a>(map: &'a JsonObject, key: &str) -> Option<&'a Value> {
	if let Some(value) = map.get(key) {
		return Some(value);
	}
	if !key.contains('.') {
		return None;
	}

	let mut segments = key.split('.');
	let mut current = map.get(segments.next()?)?;

	for segment in segments {
		current = current.as_object()?.get(segment)?;
	}

	Some(current)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn object(raw: &str) -> JsonObject {
		serde_json::from_str(raw).expect("JSON object fixture should decode.")
	}

	#[test]
	fn lookup_prefers_exact_keys() {
		let map = object(r#"{"a.b":1,"a":{"b":2}}"#);

		assert_eq!(lookup(&map, "a.b"), Some(&Value::from(1)));
	}

	#[test]
	fn lookup_walks_nested_objects() {
		let map = object(r#"{"meta":{"links":{"self":"https://example.com"}},"flat":3}"#);

		assert_eq!(lookup(&map, "meta.links.self"), Some(&Value::from("https://example.com")));
		assert_eq!(lookup(&map, "flat"), Some(&Value::from(3)));
		assert_eq!(lookup(&map, "flat.deeper"), None);
		assert_eq!(lookup(&map, "meta.missing"), None);
		assert_eq!(lookup(&map, "absent"), None);
	}

	#[test]
	fn lookup_returns_null_values_as_present() {
		let map = object(r#"{"language":null}"#);

		assert_eq!(lookup(&map, "language"), Some(&Value::Null));
	}
}
