//! Cross-platform parsing, `/api/v1/hybrid/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static VIDEO_DATA: EndpointDescriptor = EndpointDescriptor {
    name: "hybrid.video_data",
    method: HttpMethod::Get,
    path: "/api/v1/hybrid/video_data",
    summary: "混合解析单一视频接口 / Hybrid parsing single video endpoint",
    params: &[
        ParamSpec::required("url"),
        ParamSpec::with_default("minimal", "false").boolean(),
    ],
};

/// Resolves a share link from any supported platform.
#[derive(Debug, Clone, Serialize, Builder)]
pub struct VideoData {
    #[builder(into)]
    pub url: String,
    #[builder(default = Param::Value(false), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub minimal: Param<bool>,
}

impl ApiRequest for VideoData {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &VIDEO_DATA
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&VIDEO_DATA];
