use crate::{
    endpoint::{ApiRequest, EndpointDescriptor, ParamLocation},
    error::TikHubError,
    response::{self, Response},
};
use reqwest::{
    RequestBuilder as ReqwestRequestBuilder,
    header::{ACCEPT, COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
use std::{collections::BTreeMap, time::Duration};

/// Authentication method for API requests
#[derive(Clone)]
pub enum AuthMethod {
    /// `<header_name>: <prefix> <token>`, or the bare token when `prefix` is empty
    Bearer {
        token: String,
        prefix: String,
        header_name: String,
    },
}

impl AuthMethod {
    /// Standard `Authorization: Bearer <token>`.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
            prefix: "Bearer".to_string(),
            header_name: "Authorization".to_string(),
        }
    }

    fn header(&self) -> (&str, String) {
        match self {
            Self::Bearer {
                token,
                prefix,
                header_name,
            } => {
                let value = if prefix.is_empty() {
                    token.clone()
                } else {
                    format!("{prefix} {token}")
                };
                (header_name.as_str(), value)
            }
        }
    }
}

impl std::fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer {
                prefix,
                header_name,
                ..
            } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .field("prefix", prefix)
                .field("header_name", header_name)
                .finish(),
        }
    }
}

/// Configuration shared by the async and blocking transports
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub auth: Option<AuthMethod>,
    pub default_headers: BTreeMap<String, String>,
    pub cookies: BTreeMap<String, String>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
    pub raise_on_unexpected_status: bool,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            default_headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            user_agent: None,
            timeout: None,
            raise_on_unexpected_status: false,
        }
    }

    pub fn with_auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    /// Absolute URL for `path`, joined with exactly one slash.
    pub fn url(&self, path: &str) -> Result<String, TikHubError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url::Url::parse(&url)?;
        Ok(url)
    }

    /// Headers sent with every request: auth, defaults, cookies, user agent.
    pub fn header_map(&self) -> Result<HeaderMap, TikHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref auth) = self.auth {
            let (name, value) = auth.header();
            headers.insert(header_name(name)?, header_value(name, &value)?);
        }

        for (key, value) in &self.default_headers {
            headers.insert(header_name(key)?, header_value(key, value)?);
        }

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; ");
            headers.insert(COOKIE, header_value(COOKIE.as_str(), &cookie)?);
        }

        if let Some(ref user_agent) = self.user_agent {
            headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), user_agent)?);
        }

        Ok(headers)
    }
}

fn header_name(name: &str) -> Result<HeaderName, TikHubError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| TikHubError::InvalidHeader(format!("{name}: {e}")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, TikHubError> {
    HeaderValue::from_str(value).map_err(|e| TikHubError::InvalidHeader(format!("{name}: {e}")))
}

/// Transport options fixed when the underlying HTTP client is created
#[derive(Debug, Clone, Copy)]
pub struct HttpClientOptions {
    pub follow_redirects: bool,
    pub verify_ssl: bool,
    pub connect_timeout: Option<Duration>,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            verify_ssl: true,
            connect_timeout: None,
        }
    }
}

impl HttpClientOptions {
    fn redirect_policy(&self) -> reqwest::redirect::Policy {
        if self.follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        }
    }

    pub fn build_async(&self) -> Result<reqwest::Client, TikHubError> {
        let mut builder = reqwest::Client::builder()
            .redirect(self.redirect_policy())
            .danger_accept_invalid_certs(!self.verify_ssl);
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[cfg(feature = "blocking")]
    pub fn build_blocking(&self) -> Result<reqwest::blocking::Client, TikHubError> {
        let mut builder = reqwest::blocking::Client::builder()
            .redirect(self.redirect_policy())
            .danger_accept_invalid_certs(!self.verify_ssl);
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// Builds and sends endpoint requests over the async transport
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Build a reqwest RequestBuilder for the given request
    pub fn build_request<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<ReqwestRequestBuilder, TikHubError> {
        let descriptor: &EndpointDescriptor = request.descriptor();
        let url = self.config.url(descriptor.path)?;

        let mut req = self
            .client
            .request(descriptor.method.into(), &url)
            .headers(self.config.header_map()?);

        req = match descriptor.method.param_location() {
            ParamLocation::Query => req.query(request),
            ParamLocation::Body => req.json(request),
        };

        if let Some(timeout) = self.config.timeout {
            req = req.timeout(timeout);
        }

        log::debug!("{} {} ({})", descriptor.method, url, descriptor.name);
        Ok(req)
    }

    /// Send the request and return the full response envelope
    pub async fn send_detailed<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Response<R::Output>, TikHubError> {
        let req = self.build_request(request)?;
        let res = req.send().await?;

        let status = res.status();
        let headers = res.headers().clone();
        let content = res.bytes().await?;
        log::debug!(
            "{} answered {} ({} bytes)",
            request.descriptor().name,
            status,
            content.len()
        );

        response::build_response(
            status,
            headers,
            content,
            self.config.raise_on_unexpected_status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{HttpMethod, ParamSpec};
    use crate::{Param, ResponseModel};
    use serde::Serialize;

    static SEARCH: EndpointDescriptor = EndpointDescriptor {
        name: "test.web.search",
        method: HttpMethod::Get,
        path: "/api/v1/test/web/search",
        summary: "",
        params: &[
            ParamSpec::required("keyword"),
            ParamSpec::with_default("count", "20"),
            ParamSpec::optional("_time"),
        ],
    };

    static CREATE: EndpointDescriptor = EndpointDescriptor {
        name: "test.web.create",
        method: HttpMethod::Post,
        path: "api/v1/test/web/create",
        summary: "",
        params: &[ParamSpec::required("keyword").in_body()],
    };

    #[derive(Serialize)]
    struct Search {
        keyword: String,
        count: u32,
        #[serde(rename = "_time", skip_serializing_if = "Param::is_absent")]
        time: Param<i64>,
    }

    impl ApiRequest for Search {
        type Output = ResponseModel;

        fn descriptor(&self) -> &'static EndpointDescriptor {
            &SEARCH
        }
    }

    #[derive(Serialize)]
    struct Create {
        keyword: String,
    }

    impl ApiRequest for Create {
        type Output = ResponseModel;

        fn descriptor(&self) -> &'static EndpointDescriptor {
            &CREATE
        }
    }

    fn builder(config: RequestConfig) -> RequestBuilder {
        RequestBuilder::new(reqwest::Client::new(), config)
    }

    #[test]
    fn test_url_joining() {
        let config = RequestConfig::new("https://api.tikhub.io/");
        assert_eq!(
            config.url("/api/v1/x").unwrap(),
            "https://api.tikhub.io/api/v1/x"
        );
        assert_eq!(
            config.url("api/v1/x").unwrap(),
            "https://api.tikhub.io/api/v1/x"
        );
        assert!(RequestConfig::new("not a url").url("x").is_err());
    }

    #[test]
    fn test_header_map() {
        let config = RequestConfig::new("https://api.tikhub.io")
            .with_auth(AuthMethod::bearer("secret"))
            .with_header("x-trace", "1")
            .with_cookie("b", "2")
            .with_cookie("a", "1")
            .with_user_agent("tikhub-test/1.0");

        let headers = config.header_map().unwrap();
        assert_eq!(headers["authorization"], "Bearer secret");
        assert_eq!(headers["x-trace"], "1");
        assert_eq!(headers["cookie"], "a=1; b=2");
        assert_eq!(headers["user-agent"], "tikhub-test/1.0");
        assert_eq!(headers["accept"], "application/json");
    }

    #[test]
    fn test_custom_auth_header_and_empty_prefix() {
        let config = RequestConfig::new("https://api.tikhub.io").with_auth(AuthMethod::Bearer {
            token: "secret".to_string(),
            prefix: String::new(),
            header_name: "X-API-KEY".to_string(),
        });
        let headers = config.header_map().unwrap();
        assert_eq!(headers["x-api-key"], "secret");
        assert!(headers.get("authorization").is_none());
    }

    #[test]
    fn test_invalid_header_is_reported() {
        let config = RequestConfig::new("https://api.tikhub.io").with_header("bad header", "x");
        assert!(matches!(
            config.header_map(),
            Err(TikHubError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_invalid_header_value_names_the_header() {
        let config = RequestConfig::new("https://api.tikhub.io").with_header("x-trace", "a\nb");
        let Err(TikHubError::InvalidHeader(message)) = config.header_map() else {
            panic!("expected an invalid header error");
        };
        assert!(message.starts_with("x-trace: "), "{message}");

        let config = RequestConfig::new("https://api.tikhub.io").with_user_agent("bot\r\n");
        let Err(TikHubError::InvalidHeader(message)) = config.header_map() else {
            panic!("expected an invalid header error");
        };
        assert!(message.starts_with("user-agent: "), "{message}");
    }

    #[test]
    fn test_auth_debug_is_redacted() {
        let debug = format!("{:?}", AuthMethod::bearer("secret"));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_get_params_go_to_query() {
        let request = Search {
            keyword: "cat".to_string(),
            count: 20,
            time: Param::Unset,
        };
        let built = builder(RequestConfig::new("https://api.tikhub.io"))
            .build_request(&request)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(built.method(), reqwest::Method::GET);
        assert_eq!(built.url().path(), "/api/v1/test/web/search");
        assert_eq!(built.url().query(), Some("keyword=cat&count=20"));
        assert!(built.body().is_none());
    }

    #[test]
    fn test_non_idiomatic_names_survive() {
        let request = Search {
            keyword: "cat".to_string(),
            count: 5,
            time: Param::Value(1_700_000_000),
        };
        let built = builder(RequestConfig::new("https://api.tikhub.io"))
            .build_request(&request)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            built.url().query(),
            Some("keyword=cat&count=5&_time=1700000000")
        );
    }

    #[test]
    fn test_post_params_go_to_json_body() {
        let request = Create {
            keyword: "cat".to_string(),
        };
        let built = builder(
            RequestConfig::new("https://api.tikhub.io").with_timeout(Duration::from_secs(3)),
        )
        .build_request(&request)
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.url().query(), None);
        assert_eq!(built.headers()["content-type"], "application/json");
        assert_eq!(
            built.body().and_then(|b| b.as_bytes()),
            Some(br#"{"keyword":"cat"}"#.as_slice())
        );
        assert_eq!(built.timeout(), Some(&Duration::from_secs(3)));
    }
}
