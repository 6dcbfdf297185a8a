//! TikTok web endpoints, `/api/v1/tiktok/web/*`
//!
//! The web API keeps TikTok's own camelCase parameter names.

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_POST_DETAIL: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.web.fetch_post_detail",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/web/fetch_post_detail",
    summary: "获取单个作品数据 / Get single post detail",
    params: &[ParamSpec::required("itemId")],
};

pub static FETCH_USER_PROFILE: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.web.fetch_user_profile",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/web/fetch_user_profile",
    summary: "获取用户的个人信息 / Get user profile",
    params: &[ParamSpec::optional("uniqueId"), ParamSpec::optional("secUid")],
};

pub static FETCH_USER_POST: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.web.fetch_user_post",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/web/fetch_user_post",
    summary: "获取用户的作品列表 / Get user posts",
    params: &[
        ParamSpec::required("secUid"),
        ParamSpec::with_default("cursor", "0").integer(),
        ParamSpec::with_default("count", "35").integer(),
        ParamSpec::with_default("coverFormat", "2").integer(),
    ],
};

pub static FETCH_EXPLORE_POST: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.web.fetch_explore_post",
    method: HttpMethod::Get,
    path: "/api/v1/tiktok/web/fetch_explore_post",
    summary: "获取探索作品数据 / Get explore posts",
    params: &[
        ParamSpec::with_default("categoryType", "120"),
        ParamSpec::with_default("count", "16").integer(),
    ],
};

pub static GENERATE_XBOGUS: EndpointDescriptor = EndpointDescriptor {
    name: "tiktok.web.generate_xbogus",
    method: HttpMethod::Post,
    path: "/api/v1/tiktok/web/generate_xbogus",
    summary: "生成 XBogus / Generate XBogus",
    params: &[
        ParamSpec::required("url").in_body(),
        ParamSpec::required("user_agent").in_body(),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchPostDetail {
    #[builder(into)]
    #[serde(rename = "itemId")]
    pub item_id: String,
}

impl ApiRequest for FetchPostDetail {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_POST_DETAIL
    }
}

/// Either `uniqueId` or `secUid` identifies the user.
#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserProfile {
    #[builder(default, into)]
    #[serde(rename = "uniqueId", skip_serializing_if = "Param::is_absent")]
    pub unique_id: Param<String>,
    #[builder(default, into)]
    #[serde(rename = "secUid", skip_serializing_if = "Param::is_absent")]
    pub sec_uid: Param<String>,
}

impl ApiRequest for FetchUserProfile {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_PROFILE
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserPost {
    #[builder(into)]
    #[serde(rename = "secUid")]
    pub sec_uid: String,
    #[builder(default = Param::Value(0), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor: Param<i64>,
    #[builder(default = Param::Value(35), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub count: Param<u32>,
    /// `1` origin cover, `2` dynamic cover
    #[builder(default = Param::Value(2), into)]
    #[serde(rename = "coverFormat", skip_serializing_if = "Param::is_absent")]
    pub cover_format: Param<u8>,
}

impl ApiRequest for FetchUserPost {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_POST
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchExplorePost {
    /// `120` for you, `100` comedy, `101` music, ...
    #[builder(default = Param::Value("120".to_string()), into)]
    #[serde(rename = "categoryType", skip_serializing_if = "Param::is_absent")]
    pub category_type: Param<String>,
    #[builder(default = Param::Value(16), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub count: Param<u32>,
}

impl ApiRequest for FetchExplorePost {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_EXPLORE_POST
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct GenerateXbogus {
    #[builder(into)]
    pub url: String,
    #[builder(into)]
    pub user_agent: String,
}

impl ApiRequest for GenerateXbogus {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GENERATE_XBOGUS
    }
}
