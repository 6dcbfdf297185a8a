//! Kuaishou (快手) web endpoints, `/api/v1/kuaishou/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, ParamSpec, ResponseModel};

pub static FETCH_ONE_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "kuaishou.web.fetch_one_video",
    method: HttpMethod::Get,
    path: "/api/v1/kuaishou/web/fetch_one_video",
    summary: "获取单个作品数据 / Get single video data",
    params: &[ParamSpec::required("photo_id")],
};

pub static FETCH_USER_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "kuaishou.web.fetch_user_info",
    method: HttpMethod::Get,
    path: "/api/v1/kuaishou/web/fetch_user_info",
    summary: "获取用户信息 / Get user info",
    params: &[ParamSpec::required("user_id")],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchOneVideo {
    #[builder(into)]
    pub photo_id: String,
}

impl ApiRequest for FetchOneVideo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_ONE_VIDEO
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserInfo {
    #[builder(into)]
    pub user_id: String,
}

impl ApiRequest for FetchUserInfo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_INFO
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&FETCH_ONE_VIDEO, &FETCH_USER_INFO];
