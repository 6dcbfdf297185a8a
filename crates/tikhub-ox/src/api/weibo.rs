//! Weibo (微博) web endpoints, `/api/v1/weibo/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_USER_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "weibo.web.fetch_user_info",
    method: HttpMethod::Get,
    path: "/api/v1/weibo/web/fetch_user_info",
    summary: "获取用户信息 / Get user info",
    params: &[ParamSpec::required("uid")],
};

pub static FETCH_HOT_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "weibo.web.fetch_hot_search",
    method: HttpMethod::Get,
    path: "/api/v1/weibo/web/fetch_hot_search",
    summary: "获取微博热搜 / Get hot search",
    params: &[ParamSpec::optional("_time").integer()],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserInfo {
    #[builder(into)]
    pub uid: String,
}

impl ApiRequest for FetchUserInfo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_INFO
    }
}

#[derive(Debug, Clone, Default, Serialize, Builder)]
pub struct FetchHotSearch {
    /// Unix timestamp in milliseconds, busts upstream caching
    #[builder(default, into)]
    #[serde(rename = "_time", skip_serializing_if = "Param::is_absent")]
    pub time: Param<i64>,
}

impl ApiRequest for FetchHotSearch {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_HOT_SEARCH
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&FETCH_USER_INFO, &FETCH_HOT_SEARCH];
