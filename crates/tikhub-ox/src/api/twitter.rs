//! Twitter / X web endpoints, `/api/v1/twitter/web/*`

use bon::Builder;
use serde::Serialize;
use tikhub_common::{ApiRequest, EndpointDescriptor, HttpMethod, Param, ParamSpec, ResponseModel};

pub static FETCH_TWEET_DETAIL: EndpointDescriptor = EndpointDescriptor {
    name: "twitter.web.fetch_tweet_detail",
    method: HttpMethod::Get,
    path: "/api/v1/twitter/web/fetch_tweet_detail",
    summary: "获取单个推文数据 / Get single tweet data",
    params: &[ParamSpec::required("tweet_id")],
};

pub static FETCH_USER_POST_TWEET: EndpointDescriptor = EndpointDescriptor {
    name: "twitter.web.fetch_user_post_tweet",
    method: HttpMethod::Get,
    path: "/api/v1/twitter/web/fetch_user_post_tweet",
    summary: "获取用户发帖 / Get user posts",
    params: &[
        ParamSpec::optional("screen_name"),
        ParamSpec::optional("rest_id"),
        ParamSpec::optional("cursor"),
    ],
};

#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchTweetDetail {
    #[builder(into)]
    pub tweet_id: String,
}

impl ApiRequest for FetchTweetDetail {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_TWEET_DETAIL
    }
}

/// The user is identified by `screen_name` or `rest_id`.
#[derive(Debug, Clone, Serialize, Builder)]
pub struct FetchUserPostTweet {
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub screen_name: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub rest_id: Param<String>,
    #[builder(default, into)]
    #[serde(skip_serializing_if = "Param::is_absent")]
    pub cursor: Param<String>,
}

impl ApiRequest for FetchUserPostTweet {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER_POST_TWEET
    }
}

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] =
    &[&FETCH_TWEET_DETAIL, &FETCH_USER_POST_TWEET];
