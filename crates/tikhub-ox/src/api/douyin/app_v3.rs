//! Douyin app v3 endpoints, `/api/v1/douyin/app/v3/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_ONE_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.app_v3.fetch_one_video",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/app/v3/fetch_one_video",
    summary: "获取单个作品数据 / Get single video data",
    params: &[ParamSpec::required("aweme_id")],
};

pub static FETCH_USER_LIKE_VIDEOS: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.app_v3.fetch_user_like_videos",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/app/v3/fetch_user_like_videos",
    summary: "获取用户喜欢作品数据 / Get user like video data",
    params: &[
        ParamSpec::required("sec_user_id"),
        ParamSpec::with_default("max_cursor", "0").integer(),
        ParamSpec::with_default("counts", "20").integer(),
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

/// The app API spells the page size `counts`.
#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserLikeVideos {
    #[builder(into)]
    pub sec_user_id: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub max_cursor: Param<i64>,
    #[builder(default = Param::Value(20), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub counts: Param<u32>,
}

impl ApiRequest for FetchUserLikeVideos {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_LIKE_VIDEOS
    }
}
