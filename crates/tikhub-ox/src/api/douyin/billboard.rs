//! Douyin billboard (抖音热点宝) endpoints, `/api/v1/douyin/billboard/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_HOT_TOTAL_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.billboard.fetch_hot_total_list",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/billboard/fetch_hot_total_list",
    summary: "获取热点榜 / Get hot total list",
    params: &[
        ParamSpec::with_default("page", "1").integer(),
        ParamSpec::with_default("page_size", "10").integer(),
        ParamSpec::with_default("type", "snapshot"),
        ParamSpec::optional("snapshot_time"),
        ParamSpec::optional("sentence_tag"),
        ParamSpec::optional("keyword"),
    ],
};

pub static FETCH_HOT_RISE_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "douyin.billboard.fetch_hot_rise_list",
    method: HttpMethod::Get,
    path: "/api/v1/douyin/billboard/fetch_hot_rise_list",
    summary: "获取上升热点榜 / Get hot rise list",
    params: &[
        ParamSpec::with_default("page", "1").integer(),
        ParamSpec::with_default("page_size", "10").integer(),
        ParamSpec::with_default("order", "rank"),
        ParamSpec::optional("sentence_tag"),
        ParamSpec::optional("keyword"),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchHotTotalList {
    #[builder(default = Param::Value(1), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub page: Param<u32>,
    #[builder(default = Param::Value(10), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub page_size: Param<u32>,
    /// `snapshot` or `range`
    #[builder(default = Param::Value("snapshot".to_string()), into)]
    #[serde(rename = "type", skip_serializing_if = "Param::is_absent")]
    pub list_type: Param<String>,
    /// `yyyyMMddHHmmss`, only for `snapshot`
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub snapshot_time: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub sentence_tag: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub keyword: Param<String>,
}

impl ApiRequest for FetchHotTotalList {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_HOT_TOTAL_LIST
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchHotRiseList {
    #[builder(default = Param::Value(1), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub page: Param<u32>,
    #[builder(default = Param::Value(10), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub page_size: Param<u32>,
    /// `rank` or `rank_diff`
    #[builder(default = Param::Value("rank".to_string()), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub order: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub sentence_tag: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub keyword: Param<String>,
}

impl ApiRequest for FetchHotRiseList {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_HOT_RISE_LIST
    }
}
