//! Douyin web endpoints, `/api/v1/douyin/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_ONE_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.fetch_one_video",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/fetch_one_video",
    summary: "获取单个作品数据 / Get single video data",
    params: &[ParamSpec::required("aweme_id")],
};

pub static HANDLER_USER_PROFILE: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.handler_user_profile",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/handler_user_profile",
    summary: "根据sec_user_id获取指定用户的信息 / Get user profile by sec_user_id",
    params: &[ParamSpec::required("sec_user_id")],
};

pub static FETCH_USER_POST_VIDEOS: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.fetch_user_post_videos",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/fetch_user_post_videos",
    summary: "获取用户主页作品数据 / Get user homepage video data",
    params: &[
        ParamSpec::required("sec_user_id"),
        ParamSpec::with_default("max_cursor", "0").integer(),
        ParamSpec::with_default("count", "20").integer(),
    ],
};

pub static FETCH_VIDEO_COMMENTS: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.fetch_video_comments",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/fetch_video_comments",
    summary: "获取单个视频评论数据 / Get single video comments data",
    params: &[
        ParamSpec::required("aweme_id"),
        ParamSpec::with_default("cursor", "0").integer(),
        ParamSpec::with_default("count", "20").integer(),
    ],
};

pub static FETCH_VIDEO_COMMENT_REPLIES: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.fetch_video_comment_replies",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/fetch_video_comment_replies",
    summary: "获取指定视频的评论回复数据 / Get comment replies of a video",
    params: &[
        ParamSpec::required("item_id"),
        ParamSpec::required("comment_id"),
        ParamSpec::with_default("cursor", "0").integer(),
        ParamSpec::with_default("count", "20").integer(),
    ],
};

pub static FETCH_HOT_SEARCH_RESULT: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.web.fetch_hot_search_result",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/web/fetch_hot_search_result",
    summary: "获取抖音热榜数据 / Get Douyin hot search results",
    params: &[],
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
pub struct HandlerUserProfile {
    #[builder(into)]
    pub sec_user_id: String,
}

impl ApiRequest for HandlerUserProfile {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &HANDLER_USER_PROFILE
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserPostVideos {
    #[builder(into)]
    pub sec_user_id: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub max_cursor: Param<i64>,
    #[builder(default = Param::Value(20), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub count: Param<u32>,
}

impl ApiRequest for FetchUserPostVideos {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_POST_VIDEOS
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

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchVideoCommentReplies {
    #[builder(into)]
    pub item_id: String,
    #[builder(into)]
    pub comment_id: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor: Param<i64>,
    #[builder(default = Param::Value(20), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub count: Param<u32>,
}

impl ApiRequest for FetchVideoCommentReplies {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_VIDEO_COMMENT_REPLIES
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchHotSearchResult {}

impl ApiRequest for FetchHotSearchResult {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_HOT_SEARCH_RESULT
    }
}
