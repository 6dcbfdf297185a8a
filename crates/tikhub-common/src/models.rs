use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// TikHub's standard success envelope.
///
/// `data` carries the platform payload; its shape depends on the endpoint,
/// so it defaults to a raw JSON value. Top-level fields this struct does not
/// name are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ResponseModel<T = Value> {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_url: Option<String>,
    #[serde(default)]
    pub router: String,
    #[serde(default)]
    pub params: Value,
    pub data: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ResponseModel<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

impl ResponseModel<Value> {
    /// Re-decodes `data` into a concrete payload type.
    pub fn data_as<D: serde::de::DeserializeOwned>(&self) -> Result<D, serde_json::Error> {
        D::deserialize(&self.data)
    }
}

/// Body of a 422 response: field-level validation failures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

impl HttpValidationError {
    /// Dotted paths of every rejected field.
    pub fn fields(&self) -> Vec<String> {
        self.detail.iter().map(ValidationError::field).collect()
    }
}

impl fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.detail {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", err.field(), err.msg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ValidationError {
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ValidationError {
    /// `loc` rendered as a dotted path, e.g. `query.aweme_id`.
    pub fn field(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// One segment of a validation error location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum LocItem {
    Name(String),
    Index(i64),
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_model_keeps_unknown_fields() {
        let body = json!({
            "code": 200,
            "router": "/api/v1/douyin/web/fetch_one_video",
            "params": {"aweme_id": "7345492945006595379"},
            "data": {"aweme_detail": {"desc": "hello"}},
            "message": "Request successful. This request will incur a charge.",
            "time_stamp": 1_716_000_000,
            "new_field": true
        });

        let model: ResponseModel = serde_json::from_value(body).unwrap();
        assert_eq!(model.code, 200);
        assert_eq!(model.router, "/api/v1/douyin/web/fetch_one_video");
        assert_eq!(model.params["aweme_id"], "7345492945006595379");
        assert_eq!(model.data["aweme_detail"]["desc"], "hello");
        assert_eq!(model.time_stamp, Some(1_716_000_000));
        assert_eq!(model.extra.get("new_field"), Some(&json!(true)));
    }

    #[test]
    fn test_typed_data() {
        #[derive(Deserialize)]
        struct Usage {
            daily_usage: u32,
        }

        let model: ResponseModel = serde_json::from_value(json!({
            "code": 200,
            "data": {"daily_usage": 12}
        }))
        .unwrap();
        let usage: Usage = model.data_as().unwrap();
        assert_eq!(usage.daily_usage, 12);
    }

    #[test]
    fn test_validation_error_locations() {
        let err: HttpValidationError = serde_json::from_value(json!({
            "detail": [
                {"loc": ["query", "aweme_id"], "msg": "Field required", "type": "missing"},
                {"loc": ["body", 0], "msg": "Input should be a valid string", "type": "string_type", "input": 5}
            ]
        }))
        .unwrap();

        assert_eq!(err.fields(), vec!["query.aweme_id", "body.0"]);
        assert_eq!(err.detail[0].kind, "missing");
        assert_eq!(err.detail[1].input, Some(json!(5)));
        assert_eq!(
            err.to_string(),
            "query.aweme_id: Field required; body.0: Input should be a valid string"
        );
    }
}
