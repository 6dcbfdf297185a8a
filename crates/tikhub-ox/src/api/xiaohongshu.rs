//! Xiaohongshu (小红书) web endpoints, `/api/v1/xiaohongshu/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static GET_NOTE_INFO_V4: EndpointDescriptor = EndpointDescriptor {
    name: "xiaohongshu.web.get_note_info_v4",
    method: HttpMethod::Get,
    path: "/api/v1/xiaohongshu/web/get_note_info_v4",
    summary: "获取笔记信息 V4 / Get note info V4",
    params: &[ParamSpec::optional("note_id"), ParamSpec::optional("share_text")],
};

pub static GET_USER_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "xiaohongshu.web.get_user_info",
    method: HttpMethod::Get,
    path: "/api/v1/xiaohongshu/web/get_user_info",
    summary: "获取用户信息 / Get user info",
    params: &[ParamSpec::required("user_id")],
};

pub static GET_HOME_RECOMMEND: EndpointDescriptor = EndpointDescriptor {
    name: "xiaohongshu.web.get_home_recommend",
    method: HttpMethod::Get,
    path: "/api/v1/xiaohongshu/web/get_home_recommend",
    summary: "获取首页推荐 / Get home recommend",
    params: &[
        ParamSpec::optional("subTabId"),
        ParamSpec::optional("cursor_score"),
        ParamSpec::with_default("num", "36").integer(),
    ],
};

/// `note_id` or a share text/link containing it
#[derive(Debug, Clone, Serialize, Builder)]
pub struct GetNoteInfoV4 {
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub note_id: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub share_text: Param<String>,
}

impl ApiRequest for GetNoteInfoV4 {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_NOTE_INFO_V4
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct GetUserInfo {
    #[builder(into)]
    pub user_id: String,
}

impl ApiRequest for GetUserInfo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_USER_INFO
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct GetHomeRecommend {
    /// Feed channel, e.g. `homefeed.fashion_v3`
    #[builder(default, into)]
    #[serde(rename = "subTabId", skip_serializing_if = "Param::is_absent")]
    pub sub_tab_id: Param<String>,
    /// Paging cursor from the previous page
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor_score: Param<String>,
    #[builder(default = Param::Value(36), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub num: Param<u32>,
}

impl ApiRequest for GetHomeRecommend {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_HOME_RECOMMEND
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] =
    &[&GET_NOTE_INFO_V4, &GET_USER_INFO, &GET_HOME_RECOMMEND];
