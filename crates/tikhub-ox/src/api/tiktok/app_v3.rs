//! TikTok app v3 endpoints, `/api/v1/tiktok/app/v3/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_ONE_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.app_v3.fetch_one_video",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/app/v3/fetch_one_video",
    summary: "获取单个作品数据 / Get single video data",
    params: &[ParamSpec::required("aweme_id")],
};

pub static FETCH_VIDEO_COMMENTS: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.app_v3.fetch_video_comments",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/app/v3/fetch_video_comments",
    summary: "获取单个视频评论数据 / Get single video comments data",
    params: &[
        ParamSpec::required("aweme_id"),
        ParamSpec::with_default("cursor", "0").integer(),
        ParamSpec::with_default("count", "20").integer(),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchOneVideo {
    #[builder(into)]
    pub aweme_id: String,
}

impl ApiRequest for FetchOneVideo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_ONE_VIDEO
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchVideoComments {
    #[builder(into)]
    pub aweme_id: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor: Param<i64>,
    #[builder(default = Param::Value(20), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub count: Param<u32>,
}

impl ApiRequest for FetchVideoComments {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_VIDEO_COMMENTS
    }
}
