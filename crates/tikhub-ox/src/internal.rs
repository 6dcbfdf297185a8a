use tikhub_common::{AuthMethod, RequestConfig};

use crate::{TikHub, TikHubRequestError};

impl TikHub {
    /// Transport configuration derived from the client settings.
    ///
    /// Shared by the async and blocking transports.
    pub(crate) fn request_config(&self) -> Result<RequestConfig, TikHubRequestError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(TikHubRequestError::AuthenticationMissing)?;

        let mut config = RequestConfig::new(&self.base_url)
            .with_auth(AuthMethod::Bearer {
                token: api_key.to_string(),
                prefix: self.token_prefix.clone(),
                header_name: self.auth_header_name.clone(),
            })
            .with_user_agent(&self.user_agent)
            .raise_on_unexpected_status(self.raise_on_unexpected_status);

        config.default_headers.extend(self.headers.clone());
        config.cookies.extend(self.cookies.clone());
        config.timeout = self.timeout;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_api_key() {
        let client = TikHub::builder().build();
        assert!(matches!(
            client.request_config(),
            Err(TikHubRequestError::AuthenticationMissing)
        ));

        let client = TikHub::new("");
        assert!(client.request_config().is_err());
    }

    #[test]
    fn test_config_carries_client_settings() {
        let client = TikHub::builder()
            .api_key("key")
            .token_prefix("Token")
            .timeout(Duration::from_secs(7))
            .raise_on_unexpected_status(true)
            .build()
            .with_headers([("x-lang", "en")])
            .with_cookies([("session", "abc")]);

        let config = client.request_config().unwrap();
        assert_eq!(config.base_url, "https://api.tikhub.io");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
        assert!(config.raise_on_unexpected_status);

        let headers = config.header_map().unwrap();
        assert_eq!(headers["authorization"], "Token key");
        assert_eq!(headers["x-lang"], "en");
        assert_eq!(headers["cookie"], "session=abc");
        assert!(
            headers["user-agent"]
                .to_str()
                .unwrap()
                .starts_with("tikhub-ox/")
        );
    }
}
