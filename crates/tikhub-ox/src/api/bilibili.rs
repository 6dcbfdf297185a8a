//! Bilibili (哔哩哔哩) web endpoints, `/api/v1/bilibili/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_ONE_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "bilibili.web.fetch_one_video",
    method: HttpMethod::Get,
    path: "/api/v1/bilibili/web/fetch_one_video",
    summary: "获取单个视频详情信息 / Get single video data",
    params: &[ParamSpec::required("bv_id")],
};

pub static FETCH_VIDEO_COMMENTS: EndpointDescriptor = EndpointDescriptor {
    name: "bilibili.web.fetch_video_comments",
    method: HttpMethod::Get,
    path: "/api/v1/bilibili/web/fetch_video_comments",
    summary: "获取指定视频的评论 / Get video comments",
    params: &[
        ParamSpec::required("bv_id"),
        ParamSpec::with_default("pn", "1").integer(),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchOneVideo {
    #[builder(into)]
    pub bv_id: String,
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
    pub bv_id: String,
    /// Page number, starting at 1
    #[builder(default = Param::Value(1), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub pn: Param<u32>,
}

impl ApiRequest for FetchVideoComments {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_VIDEO_COMMENTS
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&FETCH_ONE_VIDEO, &FETCH_VIDEO_COMMENTS];
