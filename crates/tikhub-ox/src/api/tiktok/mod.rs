//! TikTok endpoints

pub mod app_v3;
pub mod web;

use tikhub_common::EndpointDescriptor;

pub(crate) static ENDPOINTS: &[&EndpointDescriptor] = &[
    &web::FETCH_POST_DETAIL,
    &web::FETCH_USER_PROFILE,
    &web::FETCH_USER_POST,
    &web::FETCH_EXPLORE_POST,
    &web::GENERATE_XBOGUS,
    &app_v3::FETCH_ONE_VIDEO,
    &app_v3::FETCH_VIDEO_COMMENTS,
];
