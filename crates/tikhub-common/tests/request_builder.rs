use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use tikhub_common::{
    ApiRequest, AuthMethod, EndpointDescriptor, HttpMethod, Param, ParamSpec, Parsed,
    RequestBuilder, RequestConfig, ResponseModel, TikHubError,
};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

static FETCH_USER: EndpointDescriptor = EndpointDescriptor {
    name: "test.web.fetch_user",
    method: HttpMethod::Get,
    path: "/api/v1/test/web/fetch_user",
    summary: "Fetch a user",
    params: &[
        ParamSpec::required("uid"),
        ParamSpec::optional("subTabId"),
        ParamSpec::optional("cursor"),
    ],
};

#[derive(Serialize)]
struct FetchUser {
    uid: String,
    #[serde(rename = "subTabId", skip_serializing_if = "Param::is_absent")]
    sub_tab_id: Param<String>,
    #[serde(skip_serializing_if = "Param::is_absent")]
    cursor: Param<i64>,
}

impl ApiRequest for FetchUser {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        &FETCH_USER
    }
}

fn request_builder(server: &MockServer, raise: bool) -> RequestBuilder {
    let config = RequestConfig::new(server.uri())
        .with_auth(AuthMethod::bearer("test-token"))
        .raise_on_unexpected_status(raise);
    RequestBuilder::new(reqwest::Client::new(), config)
}

#[tokio::test]
async fn test_unset_and_null_params_are_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/test/web/fetch_user"))
        .and(query_param("uid", "42"))
        .and(query_param_is_missing("subTabId"))
        .and(query_param_is_missing("cursor"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "router": "/api/v1/test/web/fetch_user",
            "params": {"uid": "42"},
            "data": {"nickname": "tester"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = FetchUser {
        uid: "42".to_string(),
        sub_tab_id: Param::Unset,
        cursor: Param::Null,
    };
    let response = request_builder(&server, false)
        .send_detailed(&request)
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let model = response.parsed.and_then(Parsed::into_success).unwrap();
    assert_eq!(model.data["nickname"], "tester");
    assert_eq!(model.params["uid"], "42");
}

#[tokio::test]
async fn test_set_params_keep_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/test/web/fetch_user"))
        .and(query_param("subTabId", "video"))
        .and(query_param("cursor", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let request = FetchUser {
        uid: "42".to_string(),
        sub_tab_id: "video".into(),
        cursor: 0.into(),
    };
    let response = request_builder(&server, true)
        .send_detailed(&request)
        .await
        .unwrap();
    assert!(response.parsed.unwrap().is_success());
}

#[tokio::test]
async fn test_validation_error_is_parsed_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["query", "uid"], "msg": "Field required", "type": "missing"}]
        })))
        .mount(&server)
        .await;

    let request = FetchUser {
        uid: String::new(),
        sub_tab_id: Param::Unset,
        cursor: Param::Unset,
    };
    let response = request_builder(&server, true)
        .send_detailed(&request)
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let parsed = response.parsed.unwrap();
    assert_eq!(parsed.validation_error().unwrap().detail[0].msg, "Field required");
}

#[tokio::test]
async fn test_unexpected_status_depends_on_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_string("payment required")
                .insert_header("x-request-id", "abc"),
        )
        .mount(&server)
        .await;

    let request = FetchUser {
        uid: "42".to_string(),
        sub_tab_id: Param::Unset,
        cursor: Param::Unset,
    };

    let response = request_builder(&server, false)
        .send_detailed(&request)
        .await
        .unwrap();
    assert!(response.parsed.is_none());
    assert_eq!(response.headers["x-request-id"], "abc");
    assert_eq!(response.text(), "payment required");

    let err = request_builder(&server, true)
        .send_detailed(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, TikHubError::UnexpectedStatus { .. }));
    assert_eq!(err.status(), Some(StatusCode::PAYMENT_REQUIRED));
}
