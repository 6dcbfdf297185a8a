use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};
use std::fmt::Write as _;
use tikhub_ox::{EndpointDescriptor, Parsed, Platform, RawRequest, Response, ResponseModel, api};

use crate::cli::{CallArgs, GlobalOptions};

pub fn list(platform: Option<Platform>) -> String {
    let endpoints: Vec<&EndpointDescriptor> = match platform {
        Some(platform) => platform.endpoints().to_vec(),
        None => api::catalog().collect(),
    };
    let width = endpoints.iter().map(|d| d.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for d in endpoints {
        let _ = writeln!(out, "{:<width$}  {:<4}  {}", d.name, d.method.as_str(), d.path);
    }
    out
}

pub fn describe(endpoint: &str) -> Result<String> {
    let d = RawRequest::for_endpoint(endpoint)?.descriptor();
    let mut out = String::new();
    let _ = writeln!(out, "{}", d.name);
    let _ = writeln!(out, "  {} {}", d.method, d.path);
    let _ = writeln!(out, "  {}", d.summary);
    if d.params.is_empty() {
        let _ = writeln!(out, "  (no parameters)");
    }
    for p in d.params {
        let need = if p.required { "required" } else { "optional" };
        let _ = write!(out, "  {:<20} {:<8} {need}", p.name, p.kind.as_str());
        if let Some(default) = p.default {
            let _ = write!(out, ", default {default:?}");
        }
        out.push('\n');
    }
    Ok(out)
}

/// The request described by `call` arguments, validated against the catalog.
pub fn raw_request(args: &CallArgs) -> Result<RawRequest> {
    let mut request = RawRequest::for_endpoint(&args.endpoint)?.params_from_pairs(&args.params)?;
    if !args.no_defaults {
        request = request.with_defaults()?;
    }
    request.validate()?;
    Ok(request)
}

pub fn call(global: &GlobalOptions, args: &CallArgs) -> Result<Value> {
    let request = raw_request(args)?;
    let client = global.client()?;
    log::debug!("calling {} with {:?}", request.descriptor().name, request.params());

    let response = if args.blocking {
        client.blocking()?.send_detailed(&request)?
    } else {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        runtime.block_on(client.send_detailed(&request))?
    };
    render(response, args.detailed)
}

fn body(response: &Response<ResponseModel>) -> Value {
    serde_json::from_slice(&response.content)
        .unwrap_or_else(|_| Value::String(response.text().into_owned()))
}

pub fn render(response: Response<ResponseModel>, detailed: bool) -> Result<Value> {
    if detailed {
        let headers: Map<String, Value> = response
            .headers
            .iter()
            .map(|(name, value)| {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                (name.to_string(), Value::String(value))
            })
            .collect();
        let parsed = match &response.parsed {
            Some(Parsed::Success(_)) => "success",
            Some(Parsed::ValidationError(_)) => "validation_error",
            None => "unexpected_status",
        };
        return Ok(json!({
            "status": response.status.as_u16(),
            "headers": headers,
            "parsed": parsed,
            "content": body(&response),
        }));
    }

    let Response {
        status,
        content,
        parsed,
        ..
    } = response;
    match parsed {
        Some(Parsed::Success(model)) => Ok(serde_json::to_value(model)?),
        Some(Parsed::ValidationError(err)) => bail!("validation error: {err}"),
        None => bail!(
            "unexpected status {status}: {}",
            String::from_utf8_lossy(&content)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tikhub_ox::HttpValidationError;

    fn response(
        status: u16,
        content: &str,
        parsed: Option<Parsed<ResponseModel>>,
    ) -> Response<ResponseModel> {
        Response {
            status: status.try_into().unwrap(),
            content: content.as_bytes().to_vec().into(),
            headers: reqwest::header::HeaderMap::new(),
            parsed,
        }
    }

    fn call_args(endpoint: &str, params: &[&str], no_defaults: bool) -> CallArgs {
        CallArgs {
            endpoint: endpoint.to_string(),
            params: params.iter().map(ToString::to_string).collect(),
            detailed: false,
            blocking: false,
            no_defaults,
        }
    }

    #[test]
    fn test_list_filters_by_platform() {
        let out = list(Some(Platform::Weibo));
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("weibo.web.fetch_hot_search"));
        assert!(out.contains("/api/v1/weibo/web/fetch_user_info"));
        assert_eq!(list(None).lines().count(), api::catalog().count());
    }

    #[test]
    fn test_describe_shows_params_and_defaults() {
        let out = describe("tiktok.web.fetch_user_post").unwrap();
        assert!(out.contains("GET /api/v1/tiktok/web/fetch_user_post"));
        assert!(out.contains("secUid"));
        assert!(out.contains("default \"35\""));
        assert!(describe("nope").is_err());
    }

    #[test]
    fn test_raw_request_applies_defaults_unless_disabled() {
        let search = "youtube.web.search_video";
        let request = raw_request(&call_args(search, &["search_query=rust"], false)).unwrap();
        assert_eq!(request.params()["order_by"], "this_month");

        let request = raw_request(&call_args(search, &["search_query=rust"], true)).unwrap();
        assert_eq!(request.params().len(), 1);

        assert!(raw_request(&call_args(search, &[], false)).is_err());
        assert!(raw_request(&call_args(search, &["search_query=a", "q=b"], false)).is_err());
    }

    #[test]
    fn test_render_plain_and_detailed() {
        let model: ResponseModel =
            serde_json::from_value(json!({"code": 200, "data": {"a": 1}})).unwrap();
        let content = r#"{"code":200,"data":{"a":1}}"#;

        let success = Some(Parsed::Success(model.clone()));
        let out = render(response(200, content, success), false).unwrap();
        assert_eq!(out["data"]["a"], 1);

        let out = render(response(200, content, Some(Parsed::Success(model))), true).unwrap();
        assert_eq!(out["status"], 200);
        assert_eq!(out["parsed"], "success");
        assert_eq!(out["content"]["code"], 200);

        let out = render(response(503, "down", None), true).unwrap();
        assert_eq!(out["parsed"], "unexpected_status");
        assert_eq!(out["content"], "down");

        assert!(render(response(503, "down", None), false).is_err());
        let invalid = Parsed::ValidationError(HttpValidationError::default());
        assert!(render(response(422, "{}", Some(invalid)), false).is_err());
    }
}
