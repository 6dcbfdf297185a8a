//! Blocking transport.
//!
//! Mirrors [`crate::RequestBuilder`] over `reqwest::blocking`. Header
//! rendering and response discrimination are shared with the async side, so
//! both transports parse identical server responses identically.
//!
//! The blocking client must not be used from inside an async runtime.

use crate::{
    endpoint::{ApiRequest, ParamLocation},
    error::TikHubError,
    request_builder::RequestConfig,
    response::{self, Response},
};

#[derive(Debug, Clone)]
pub struct BlockingRequestBuilder {
    client: reqwest::blocking::Client,
    config: RequestConfig,
}

impl BlockingRequestBuilder {
    pub fn new(client: reqwest::blocking::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn build_request<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<reqwest::blocking::RequestBuilder, TikHubError> {
        let descriptor = request.descriptor();
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

        log::debug!("{} {} ({}, blocking)", descriptor.method, url, descriptor.name);
        Ok(req)
    }

    pub fn send_detailed<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Response<R::Output>, TikHubError> {
        let res = self.build_request(request)?.send()?;

        let status = res.status();
        let headers = res.headers().clone();
        let content = res.bytes()?;
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
