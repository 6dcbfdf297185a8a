//! Douyin (抖音) endpoints

pub mod app_v3;
pub mod billboard;
pub mod search;
pub mod web;

use tikhub_common::EndpointDescriptor;

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[
    &web::FETCH_ONE_VIDEO,
    &web::HANDLER_USER_PROFILE,
    &web::FETCH_USER_POST_VIDEOS,
    &web::FETCH_VIDEO_COMMENTS,
    &web::FETCH_VIDEO_COMMENT_REPLIES,
    &web::FETCH_HOT_SEARCH_RESULT,
    &app_v3::FETCH_ONE_VIDEO,
    &app_v3::FETCH_USER_LIKE_VIDEOS,
    &search::FETCH_GENERAL_SEARCH_V1,
    &billboard::FETCH_HOT_TOTAL_LIST,
    &billboard::FETCH_HOT_RISE_LIST,
];
