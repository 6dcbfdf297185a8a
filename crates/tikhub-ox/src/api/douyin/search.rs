//! Douyin search endpoints, `/api/v1/douyin/search/*`
//!
//! Search takes a JSON body rather than query parameters. Filter values are
//! numeric codes sent as strings.

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_GENERAL_SEARCH_V1: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.search.fetch_general_search_v1",
    method: HttpMethod::Post,
    path: "/api/v1/douyin/search/fetch_general_search_v1",
    summary: "获取综合搜索 V1 / Fetch general search V1",
    params: &[
        ParamSpec::required("keyword").in_body(),
        ParamSpec::with_default("cursor", "0").integer().in_body(),
        ParamSpec::with_default("sort_type", "0").in_body(),
        ParamSpec::with_default("publish_time", "0").in_body(),
        ParamSpec::with_default("filter_duration", "0").in_body(),
        ParamSpec::with_default("content_type", "0").in_body(),
        ParamSpec::with_default("search_id", "").in_body(),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchGeneralSearchV1 {
    #[builder(into)]
    pub keyword: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor: Param<i64>,
    /// `0` general, `1` most liked, `2` newest
    #[builder(default = Param::Value("0".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub sort_type: Param<String>,
    /// `0` any time, `1` one day, `7` one week, `180` half a year
    #[builder(default = Param::Value("0".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub publish_time: Param<String>,
    #[builder(default = Param::Value("0".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub filter_duration: Param<String>,
    #[builder(default = Param::Value("0".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub content_type: Param<String>,
    /// Echo the `search_id` of the previous page when paginating
    #[builder(default = Param::Value(String::new()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub search_id: Param<String>,
}

impl ApiRequest for FetchGeneralSearchV1 {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_GENERAL_SEARCH_V1
    }
}
