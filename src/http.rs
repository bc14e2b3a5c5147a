//! Transport primitives for provider calls.
//!
//! The module exposes [`HttpTransport`], the crate's only dependency on an HTTP stack, alongside
//! [`ResponseMetadata`], which carries the status and headers of a response to
//! [`ProviderAdapter::check_response`](crate::provider::ProviderAdapter::check_response).
//! [`ReqwestHttpClient`] is the default implementation (feature `reqwest`).

// crates.io
use oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse, http::HeaderMap};
// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP clients capable of executing provider requests.
///
/// Implementations must not follow redirects for token requests and must return non-2xx
/// responses as regular [`HttpResponse`] values; only failures that produced no response at
/// all belong in [`TransportError`](Self::TransportError).
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the provider's raw response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Transport-level facts about a provider response.
///
/// Error detection in this crate is driven by the response body, so the metadata is passed
/// along for adapters that want it rather than consulted by default.
#[derive(Clone, Debug, Default)]
pub struct ResponseMetadata {
	/// HTTP status code, if a response was received.
	pub status: Option<u16>,
	/// Response headers.
	pub headers: HeaderMap,
}
impl ResponseMetadata {
	/// Captures status and headers from a response.
	pub fn from_response(response: &HttpResponse) -> Self {
		Self { status: Some(response.status().as_u16()), headers: response.headers().clone() }
	}
}

/// Response captured by [`ResponseSlot`] while the `oauth2` crate drives a token request.
#[derive(Clone, Debug, Default)]
pub(crate) struct CapturedResponse {
	pub(crate) metadata: ResponseMetadata,
	pub(crate) body: Vec<u8>,
}

/// Thread-safe slot that keeps the last response seen by a [`TransportHandle`].
///
/// The `oauth2` crate only hands back a parsed error type, so the raw body is kept here to let
/// the provider's error predicate inspect exactly what was sent.
#[derive(Clone, Debug, Default)]
pub(crate) struct ResponseSlot(Arc<Mutex<Option<CapturedResponse>>>);
impl ResponseSlot {
	pub(crate) fn store(&self, captured: CapturedResponse) {
		*self.0.lock() = Some(captured);
	}

	pub(crate) fn take(&self) -> Option<CapturedResponse> {
		self.0.lock().take()
	}
}

/// Adapter that lets the `oauth2` crate dispatch requests through an [`HttpTransport`].
pub(crate) struct TransportHandle<'t, T>
where
	T: ?Sized + HttpTransport,
{
	transport: &'t T,
	slot: ResponseSlot,
}
impl<'t, T> TransportHandle<'t, T>
where
	T: ?Sized + HttpTransport,
{
	pub(crate) fn new(transport: &'t T, slot: ResponseSlot) -> Self {
		Self { transport, slot }
	}
}
impl<'c, T> AsyncHttpClient<'c> for TransportHandle<'_, T>
where
	T: ?Sized + HttpTransport,
{
	type Error = HttpClientError<T::TransportError>;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		Box::pin(async move {
			self.slot.take();

			let response = self
				.transport
				.execute(request)
				.await
				.map_err(|err| HttpClientError::Reqwest(Box::new(err)))?;

			self.slot.store(CapturedResponse {
				metadata: ResponseMetadata::from_response(&response),
				body: response.body().clone(),
			});

			Ok::<_, Self::Error>(response)
		})
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests should not follow redirects, matching OAuth 2.0 guidance that token endpoints
/// return results directly. [`ReqwestHttpClient::new`] builds a client with redirects disabled and
/// reports builder failures instead of substituting another client; configure any custom
/// [`ReqwestClient`] passed to [`with_client`](Self::with_client) the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a rustls-backed client that never follows redirects.
	pub fn new() -> Result<Self, ReqwestError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Debug for ReqwestHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ReqwestHttpClient(..)")
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok::<_, ReqwestError>(response_new)
		})
	}
}
