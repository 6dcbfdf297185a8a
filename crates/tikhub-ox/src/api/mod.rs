//! Endpoint catalog grouped by platform family
//!
//! Every endpoint has a static [`EndpointDescriptor`] and a typed request
//! struct built with `bon`, e.g. [`douyin::web::FetchOneVideo`]. Endpoints
//! without a typed struct can still be called through [`crate::RawRequest`].

pub mod bilibili;
pub mod douyin;
pub mod hybrid;
pub mod instagram;
pub mod kuaishou;
pub mod tikhub_user;
pub mod tiktok;
pub mod twitter;
pub mod weibo;
pub mod xiaohongshu;
pub mod youtube;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tikhub_common::EndpointDescriptor;

/// Platform family, the first path segment after `/api/v1/`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Platform {
    Douyin,
    Tiktok,
    Xiaohongshu,
    Kuaishou,
    Weibo,
    Bilibili,
    Instagram,
    Youtube,
    Twitter,
    Hybrid,
    Tikhub,
}

impl Platform {
    pub fn endpoints(self) -> &'static [&'static EndpointDescriptor] {
        match self {
            Self::Douyin => douyin::ENDPOINTS,
            Self::Tiktok => tiktok::ENDPOINTS,
            Self::Xiaohongshu => xiaohongshu::ENDPOINTS,
            Self::Kuaishou => kuaishou::ENDPOINTS,
            Self::Weibo => weibo::ENDPOINTS,
            Self::Bilibili => bilibili::ENDPOINTS,
            Self::Instagram => instagram::ENDPOINTS,
            Self::Youtube => youtube::ENDPOINTS,
            Self::Twitter => twitter::ENDPOINTS,
            Self::Hybrid => hybrid::ENDPOINTS,
            Self::Tikhub => tikhub_user::ENDPOINTS,
        }
    }

    /// Platform owning a descriptor, from its path.
    pub fn of(descriptor: &EndpointDescriptor) -> Option<Self> {
        descriptor.platform().parse().ok()
    }
}

pub fn platforms() -> impl Iterator<Item = Platform> {
    Platform::iter()
}

/// Every known endpoint, in platform order.
pub fn catalog() -> impl Iterator<Item = &'static EndpointDescriptor> {
    Platform::iter().flat_map(|p| p.endpoints().iter().copied())
}

/// Looks up an endpoint by its dotted name, e.g. `weibo.web.fetch_hot_search`.
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    catalog().find(|d| d.name == name)
}

/// Looks up an endpoint by path. A trailing slash or query string is ignored.
pub fn find_by_path(path: &str) -> Option<&'static EndpointDescriptor> {
    let path = path.split('?').next().unwrap_or_default();
    let path = path.trim_end_matches('/');
    catalog().find(|d| d.path == path)
}
