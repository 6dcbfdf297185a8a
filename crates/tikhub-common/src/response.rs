use crate::{error::TikHubError, models::HttpValidationError};
use bytes::Bytes;
use reqwest::{StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;

/// A decoded response body: the endpoint's success schema or a 422 validation error
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Success(T),
    ValidationError(HttpValidationError),
}

impl<T> Parsed<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::ValidationError(_) => None,
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::ValidationError(_) => None,
        }
    }

    pub fn validation_error(&self) -> Option<&HttpValidationError> {
        match self {
            Self::Success(_) => None,
            Self::ValidationError(err) => Some(err),
        }
    }
}

/// Everything known about one HTTP exchange
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub content: Bytes,
    pub headers: HeaderMap,
    /// `None` when the status is neither 200 nor 422 and raising is disabled
    pub parsed: Option<Parsed<T>>,
}

impl<T> Response<T> {
    pub fn into_parsed(self) -> Option<Parsed<T>> {
        self.parsed
    }

    /// Raw body as text, lossily decoded.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

fn decode<D: DeserializeOwned>(status: StatusCode, content: &Bytes) -> Result<D, TikHubError> {
    serde_json::from_slice(content).map_err(|source| TikHubError::Decode {
        status,
        source,
        content: content.clone(),
    })
}

/// Discriminate a response body by status.
///
/// 200 decodes the success schema, 422 the validation-error schema. Anything
/// else is an error when `raise_on_unexpected_status` is set, `None` otherwise.
pub fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    content: &Bytes,
    raise_on_unexpected_status: bool,
) -> Result<Option<Parsed<T>>, TikHubError> {
    match status {
        StatusCode::OK => Ok(Some(Parsed::Success(decode(status, content)?))),
        StatusCode::UNPROCESSABLE_ENTITY => {
            Ok(Some(Parsed::ValidationError(decode(status, content)?)))
        }
        _ if raise_on_unexpected_status => Err(TikHubError::UnexpectedStatus {
            status,
            content: content.clone(),
        }),
        _ => {
            log::warn!(
                "unexpected status {} ignored ({} bytes)",
                status,
                content.len()
            );
            Ok(None)
        }
    }
}

/// Assemble the envelope for a finished exchange
pub fn build_response<T: DeserializeOwned>(
    status: StatusCode,
    headers: HeaderMap,
    content: Bytes,
    raise_on_unexpected_status: bool,
) -> Result<Response<T>, TikHubError> {
    let parsed = parse_response(status, &content, raise_on_unexpected_status)?;
    Ok(Response {
        status,
        content,
        headers,
        parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseModel;

    const OK_BODY: &[u8] = br#"{"code":200,"router":"/api/v1/x","params":{},"data":{"id":1}}"#;
    const UNPROCESSABLE_BODY: &[u8] =
        br#"{"detail":[{"loc":["query","aweme_id"],"msg":"Field required","type":"missing"}]}"#;

    #[test]
    fn test_ok_decodes_success_schema() {
        let parsed: Option<Parsed<ResponseModel>> =
            parse_response(StatusCode::OK, &Bytes::from_static(OK_BODY), false).unwrap();
        let model = parsed.and_then(Parsed::into_success).unwrap();
        assert_eq!(model.code, 200);
        assert_eq!(model.data["id"], 1);
    }

    #[test]
    fn test_unprocessable_never_decodes_success_schema() {
        let parsed: Option<Parsed<ResponseModel>> = parse_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &Bytes::from_static(UNPROCESSABLE_BODY),
            true,
        )
        .unwrap();
        let parsed = parsed.unwrap();
        assert!(!parsed.is_success());
        assert_eq!(
            parsed.validation_error().unwrap().fields(),
            vec!["query.aweme_id"]
        );
    }

    #[test]
    fn test_unexpected_status_raises_when_configured() {
        let result: Result<Option<Parsed<ResponseModel>>, _> = parse_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &Bytes::from_static(b"boom"),
            true,
        );
        match result {
            Err(TikHubError::UnexpectedStatus { status, content }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(content.as_ref(), b"boom");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_status_swallowed_by_default() {
        let response: Response<ResponseModel> = build_response(
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            Bytes::from_static(b"missing"),
            false,
        )
        .unwrap();
        assert!(response.parsed.is_none());
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "missing");
    }

    #[test]
    fn test_malformed_success_body_is_a_decode_error() {
        let result: Result<Option<Parsed<ResponseModel>>, _> =
            parse_response(StatusCode::OK, &Bytes::from_static(b"<html>"), false);
        assert!(matches!(
            result,
            Err(TikHubError::Decode { status: StatusCode::OK, .. })
        ));
    }
}
