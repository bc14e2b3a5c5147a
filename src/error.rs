//! Crate-level error types shared by the provider, the transport, and the client glue.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Provider answered with a body carrying a non-empty `error` field.
	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, I/O).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Provider responded with a body that is not a JSON object.
	#[error("Provider returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Provider responded with something the token machinery could not interpret and the body
	/// did not carry an `error` field.
	#[error("Provider returned an unexpected response: {message}.")]
	UnexpectedResponse {
		/// Summary of the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// The `state` returned through the redirect does not match the issued one.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}

/// Error raised when a decoded provider response carries a non-empty `error` field.
///
/// The message is rendered as `"{error_description} ({error})"` and the complete decoded body
/// is kept for callers that need the remaining fields.
#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{message}")]
pub struct IdentityProviderError {
	/// Human-readable message built from `error_description` and `error`.
	pub message: String,
	/// Full decoded response body.
	pub response: JsonObject,
}
impl IdentityProviderError {
	/// Creates an error from a pre-rendered message and the decoded body.
	pub fn new(message: impl Into<String>, response: JsonObject) -> Self {
		Self { message: message.into(), response }
	}

	/// Returns the raw `error` value from the response body.
	pub fn code(&self) -> Option<&Value> {
		self.response.get("error")
	}

	/// Returns the raw `error_description` value from the response body.
	pub fn description(&self) -> Option<&Value> {
		self.response.get("error_description")
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// An endpoint supplied by the provider cannot be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
	/// HTTP client failure described only by a message.
	#[error("HTTP client error occurred while calling the provider: {message}.")]
	Other {
		/// Message reported by the HTTP client.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
