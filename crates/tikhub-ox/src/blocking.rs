use core::fmt;
use tikhub_common::{ApiRequest, BlockingRequestBuilder, Parsed, Response};

use crate::{TikHub, TikHubRequestError};

/// Blocking counterpart of [`TikHub`].
///
/// Do not create or use it from inside an async runtime.
#[derive(Clone)]
pub struct BlockingTikHub {
    helper: BlockingRequestBuilder,
}

impl BlockingTikHub {
    /// Create a new blocking client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TikHubRequestError> {
        TikHub::new(api_key).blocking()
    }

    /// Same variables and errors as [`TikHub::load_from_env`].
    pub fn load_from_env() -> Result<Self, TikHubRequestError> {
        TikHub::load_from_env()?.blocking()
    }

    /// Send a request and return the full response envelope.
    pub fn send_detailed<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Response<R::Output>, TikHubRequestError> {
        self.helper.send_detailed(request)
    }

    /// Send a request and return only the parsed body.
    pub fn send<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<Option<Parsed<R::Output>>, TikHubRequestError> {
        Ok(self.send_detailed(request)?.parsed)
    }
}

impl TikHub {
    /// A blocking client with the same configuration.
    pub fn blocking(&self) -> Result<BlockingTikHub, TikHubRequestError> {
        let config = self.request_config()?;
        let client = self.http_options.build_blocking()?;
        Ok(BlockingTikHub {
            helper: BlockingRequestBuilder::new(client, config),
        })
    }
}

impl fmt::Debug for BlockingTikHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingTikHub")
            .field("base_url", &self.helper.config().base_url)
            .finish_non_exhaustive()
    }
}
