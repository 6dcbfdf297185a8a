//! Instagram web app endpoints, `/api/v1/instagram/web_app/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, ParamSpec, ResponseModel};

pub static FETCH_USER_INFO_BY_USERNAME: EndpointDescriptor = EndpointDescriptor {
    name: "instagram.web_app.fetch_user_info_by_username",
    method: HttpMethod::Get,
    path: "/api/v1/instagram/web_app/fetch_user_info_by_username",
    summary: "根据用户名获取用户数据 / Get user info by username",
    params: &[ParamSpec::required("username")],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserInfoByUsername {
    #[builder(into)]
    pub username: String,
}

impl ApiRequest for FetchUserInfoByUsername {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_INFO_BY_USERNAME
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[&FETCH_USER_INFO_BY_USERNAME];
