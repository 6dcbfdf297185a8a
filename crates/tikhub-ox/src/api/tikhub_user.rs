//! TikHub account endpoints, `/api/v1/tikhub/user/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static GET_USER_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "tikhub.user.get_user_info",
    method: HttpMethod::Get,
    path: "/api/v1/tikhub/user/get_user_info",
    summary: "获取TikHub用户信息 / Get TikHub user info",
    params: &[],
};

pub static GET_USER_DAILY_USAGE: EndpointDescriptor = EndpointDescriptor {
    name: "tikhub.user.get_user_daily_usage",
    method: HttpMethod::Get,
    path: "/api/v1/tikhub/user/get_user_daily_usage",
    summary: "获取用户每日使用情况 / Get user daily usage",
    params: &[],
};

pub static CALCULATE_PRICE: EndpointDescriptor = EndpointDescriptor {
    name: "tikhub.user.calculate_price",
    method: HttpMethod::Get,
    path: "/api/v1/tikhub/user/calculate_price",
    summary: "计算价格 / Calculate price",
    params: &[
        ParamSpec::required("endpoint"),
        ParamSpec::with_default("request_per_day", "1").integer(),
    ],
};

/// Account, plan and balance of the API key's owner
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUserInfo {}

impl ApiRequest for GetUserInfo {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_USER_INFO
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUserDailyUsage {}

impl ApiRequest for GetUserDailyUsage {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &GET_USER_DAILY_USAGE
    }
}

#[derive(Debug, Clone, Serialize, Builder)]
pub struct CalculatePrice {
    /// Endpoint path to price, e.g. `/api/v1/douyin/web/fetch_one_video`
    #[builder(into)]
    pub endpoint: String,
    #[builder(default = Param::Value(1), into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub request_per_day: Param<u32>,
}

impl ApiRequest for CalculatePrice {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &CALCULATE_PRICE
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] =
    &[&GET_USER_INFO, &GET_USER_DAILY_USAGE, &CALCULATE_PRICE];
