#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP plumbing for the TikHub client
//!
//! This crate holds everything that does not depend on a particular endpoint:
//! the tri-state [`Param`] used for optional parameters, endpoint descriptors,
//! request construction for the async and blocking transports, the
//! [`Response`] envelope and the 200/422 response discrimination.

pub mod endpoint;
pub mod error;
pub mod models;
pub mod param;
pub mod request_builder;
pub mod response;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use endpoint::{
    ApiRequest, EndpointDescriptor, HttpMethod, ParamKind, ParamLocation, ParamSpec,
};
pub use error::TikHubError;
pub use models::{HttpValidationError, LocItem, ResponseModel, ValidationError};
pub use param::Param;
pub use request_builder::{AuthMethod, HttpClientOptions, RequestBuilder, RequestConfig};
pub use response::{Parsed, Response, build_response, parse_response};

#[cfg(feature = "blocking")]
pub use blocking::BlockingRequestBuilder;

/// Re-export common types for convenience
pub use serde::{Deserialize, Serialize};
