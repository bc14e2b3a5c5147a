//! WordPress.com provider for OAuth 2.0.
//!
//! The crate pairs a [`provider::WordPressCom`] adapter (fixed endpoints, optional blog-scoped
//! authorization, body-driven error detection) with a [`client::Client`] that drives the
//! Authorization Code flow and returns a [`owner::WordPressComUser`] view over the `/me`
//! profile payload.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod owner;
pub mod provider;

mod oauth;

/// Decoded JSON object (string keys to arbitrary JSON values) as returned by the provider.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::{
		JsonObject,
		error::{Error, Result},
	};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use {oauth2, serde_json, url};
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
