//! YouTube web endpoints, `/api/v1/youtube/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static GET_VIDEO_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "youtube.web.get_video_info",
    method: HttpMethod::Get,
    path: "/api/v1/youtube/web/get_video_info",
    summary: "获取视频信息 / Get video info",
    params: &[ParamSpec::required("video_id")],
};

pub static SEARCH_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "youtube.web.search_video",
    method: HttpMethod::Get,
    path: "/api/v1/youtube/web/search_video",
    summary: "搜索视频 / Search video",
    params: &[
        ParamSpec::required("search_query"),
        ParamSpec::with_default("language_code", "en"),
        ParamSpec::with_default("order_by", "this_month"),
        ParamSpec::with_default("country_code", "us"),
        ParamSpec::optional("continuation_token"),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct GetVideoInfo {
    #[builder(into)]
    pub video_id: String,
}

impl ApiRequest for GetVideoInfo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_VIDEO_INFO
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct SearchVideo {
    #[builder(into)]
    pub search_query: String,
    #[builder(default = Param::Value("en".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub language_code: Param<String>,
    /// `this_week`, `this_month`, `this_year`, `last_hour` or `today`
    #[builder(default = Param::Value("this_month".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub order_by: Param<String>,
    #[builder(default = Param::Value("us".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub country_code: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub continuation_token: Param<String>,
}

impl ApiRequest for SearchVideo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &SEARCH_VIDEO
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&GET_VIDEO_INFO, &SEARCH_VIDEO];
