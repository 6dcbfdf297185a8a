#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! TikHub API client for Rust
//!
//! Typed access to the TikHub social media data service: Douyin, TikTok,
//! Xiaohongshu, Kuaishou, Weibo, Bilibili, Instagram, YouTube and Twitter
//! endpoints, plus the TikHub account endpoints.
//!
//! Every endpoint is available in four forms: detailed or plain, async or
//! blocking.
//!
//! ```rust,no_run
//! use tikhub_ox::{TikHub, api::douyin::web::FetchOneVideo};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TikHub::load_from_env()?;
//!
//!     let request = FetchOneVideo::builder()
//!         .aweme_id("7345492945006595379")
//!         .build();
//!
//!     let response = client.send_detailed(&request).await?;
//!     println!("HTTP {}", response.status);
//!
//!     if let Some(video) = response.parsed.and_then(|p| p.into_success()) {
//!         println!("{}", video.data);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
mod internal;
pub mod raw;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use api::Platform;
pub use error::{RawRequestError, TikHubRequestError};
pub use raw::RawRequest;
pub use tikhub_common::{
    ApiRequest, EndpointDescriptor, HttpClientOptions, HttpMethod, HttpValidationError, Param,
    ParamKind, ParamSpec, Parsed, Response, ResponseModel, ValidationError,
};

#[cfg(feature = "blocking")]
pub use blocking::BlockingTikHub;

use bon::Builder;
use core::fmt;
use std::{collections::BTreeMap, time::Duration};
use tikhub_common::RequestBuilder;

const BASE_URL: &str = "https://api.tikhub.io";
const API_KEY_VAR: &str = "TIKHUB_API_KEY";
const BASE_URL_VAR: &str = "TIKHUB_BASE_URL";
const DEFAULT_USER_AGENT: &str = concat!("tikhub-ox/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Builder)]
pub struct TikHub {
    #[builder(into)]
    pub(crate) api_key: Option<String>,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    /// Async transport. [`TikHub::blocking`] builds its own client from the
    /// HTTP options instead of reusing this one.
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    /// Only set through [`TikHub::with_http_options`], which rebuilds `client`.
    #[builder(skip)]
    pub(crate) http_options: HttpClientOptions,
    #[builder(default)]
    pub(crate) headers: BTreeMap<String, String>,
    #[builder(default)]
    pub(crate) cookies: BTreeMap<String, String>,
    pub(crate) timeout: Option<Duration>,
    #[builder(default)]
    pub(crate) raise_on_unexpected_status: bool,
    #[builder(default = "Bearer".to_string(), into)]
    pub(crate) token_prefix: String,
    #[builder(default = "Authorization".to_string(), into)]
    pub(crate) auth_header_name: String,
    #[builder(default = DEFAULT_USER_AGENT.to_string(), into)]
    pub(crate) user_agent: String,
}

impl TikHub {
    /// Create a new TikHub client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Reads `TIKHUB_API_KEY` and, when present, `TIKHUB_BASE_URL`.
    ///
    /// A missing key or a variable that is not valid unicode is a
    /// [`TikHubRequestError::Env`] error.
    pub fn load_from_env() -> Result<Self, TikHubRequestError> {
        Self::from_vars(std::env::var)
    }

    /// [`TikHub::load_from_env`] over an arbitrary variable lookup.
    fn from_vars(
        var: impl Fn(&'static str) -> Result<String, std::env::VarError>,
    ) -> Result<Self, TikHubRequestError> {
        let api_key = var(API_KEY_VAR).map_err(|source| TikHubRequestError::Env {
            name: API_KEY_VAR,
            source,
        })?;
        let client = Self::new(api_key);
        match var(BASE_URL_VAR) {
            Ok(base_url) => {
                log::debug!("base url from {BASE_URL_VAR}: {base_url}");
                Ok(client.with_base_url(base_url))
            }
            Err(std::env::VarError::NotPresent) => Ok(client),
            Err(source) => Err(TikHubRequestError::Env {
                name: BASE_URL_VAR,
                source,
            }),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn raises_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    /// A copy of this client sending the additional headers.
    #[must_use]
    pub fn with_headers<K, V>(&self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut client = self.clone();
        client
            .headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        client
    }

    /// A copy of this client sending the additional cookies.
    #[must_use]
    pub fn with_cookies<K, V>(&self, cookies: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut client = self.clone();
        client
            .cookies
            .extend(cookies.into_iter().map(|(k, v)| (k.into(), v.into())));
        client
    }

    /// A copy of this client with a different per-request timeout.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut client = self.clone();
        client.timeout = Some(timeout);
        client
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a preconfigured async client.
    ///
    /// Only the async transport uses it. [`TikHub::blocking`] still builds its
    /// client from [`HttpClientOptions`], so prefer
    /// [`TikHub::with_http_options`] when both transports must agree.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Rebuild the underlying HTTP client with redirect and TLS options.
    pub fn with_http_options(
        mut self,
        options: HttpClientOptions,
    ) -> Result<Self, TikHubRequestError> {
        self.client = options.build_async()?;
        self.http_options = options;
        Ok(self)
    }

    #[must_use]
    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> Result<RequestBuilder, TikHubRequestError> {
        Ok(RequestBuilder::new(
            self.client.clone(),
            self.request_config()?,
        ))
    }
}

impl TikHub {
    /// Send a request and return the full response envelope.
    pub async fn send_detailed<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Response<R::Output>, TikHubRequestError> {
        self.request_helper()?.send_detailed(request).await
    }

    /// Send a request and return only the parsed body.
    ///
    /// `None` when the server answered with an undocumented status and the
    /// client is not configured to raise on it.
    pub async fn send<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Option<Parsed<R::Output>>, TikHubRequestError> {
        Ok(self.send_detailed(request).await?.parsed)
    }
}

impl fmt::Debug for TikHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TikHub")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field(
                "raise_on_unexpected_status",
                &self.raise_on_unexpected_status,
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;
    use std::ffi::OsString;

    fn vars(
        key: Result<&'static str, VarError>,
        base_url: Result<&'static str, VarError>,
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        move |name| {
            let value = if name == API_KEY_VAR { &key } else { &base_url };
            value.clone().map(str::to_string)
        }
    }

    #[test]
    fn test_env_key_and_optional_base_url() {
        let client = TikHub::from_vars(vars(Ok("key"), Err(VarError::NotPresent))).unwrap();
        assert_eq!(client.api_key(), Some("key"));
        assert_eq!(client.base_url(), BASE_URL);

        let client = TikHub::from_vars(vars(Ok("key"), Ok("http://localhost:9000"))).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_env_errors_name_the_variable() {
        let err = TikHub::from_vars(vars(Err(VarError::NotPresent), Ok("http://x"))).unwrap_err();
        assert!(matches!(
            err,
            TikHubRequestError::Env {
                name: API_KEY_VAR,
                source: VarError::NotPresent
            }
        ));

        let not_unicode = VarError::NotUnicode(OsString::from("bad"));
        let err = TikHub::from_vars(vars(Ok("key"), Err(not_unicode))).unwrap_err();
        assert!(matches!(
            err,
            TikHubRequestError::Env {
                name: BASE_URL_VAR,
                source: VarError::NotUnicode(_)
            }
        ));
        assert!(err.to_string().contains("TIKHUB_BASE_URL"));
    }

    #[test]
    fn test_http_options_default_until_rebuilt() {
        let client = TikHub::new("key");
        assert!(client.http_options.follow_redirects);

        let options = HttpClientOptions {
            follow_redirects: false,
            ..HttpClientOptions::default()
        };
        let client = client.with_http_options(options).unwrap();
        assert!(!client.http_options.follow_redirects);
    }
}
