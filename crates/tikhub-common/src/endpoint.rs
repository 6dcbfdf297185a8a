use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Where parameters travel for this method.
    pub const fn param_location(self) -> ParamLocation {
        match self {
            Self::Get | Self::Delete => ParamLocation::Query,
            Self::Post | Self::Put | Self::Patch => ParamLocation::Body,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter is carried in the outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    Query,
    Body,
}

/// JSON type of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
}

impl ParamKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented parameter of an endpoint.
///
/// `name` is the exact wire name, `default` the text of the documented
/// default value as it appears in a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

impl ParamSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind: ParamKind::String,
            required: true,
            default: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind: ParamKind::String,
            required: false,
            default: None,
        }
    }

    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind: ParamKind::String,
            required: false,
            default: Some(default),
        }
    }

    /// Marks the parameter as a JSON body field.
    pub const fn in_body(mut self) -> Self {
        self.location = ParamLocation::Body;
        self
    }

    pub const fn integer(mut self) -> Self {
        self.kind = ParamKind::Integer;
        self
    }

    pub const fn boolean(mut self) -> Self {
        self.kind = ParamKind::Boolean;
        self
    }
}

/// Method, path and parameters of one TikHub REST operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Dotted catalog name, e.g. `douyin.web.fetch_one_video`
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
}

impl EndpointDescriptor {
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &'static ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }

    /// Platform family, the first path segment after `/api/v1/`.
    pub fn platform(&self) -> &'static str {
        self.path
            .trim_start_matches('/')
            .trim_start_matches("api/v1/")
            .split('/')
            .next()
            .unwrap_or_default()
    }
}

/// A typed request for one endpoint.
///
/// The implementor's serde field names are the wire names of the endpoint's
/// parameters. Absent optional parameters must be skipped during
/// serialization (see [`crate::Param::is_absent`]).
pub trait ApiRequest: Serialize {
    /// Schema of a 200 response
    type Output: DeserializeOwned;

    fn descriptor(&self) -> &'static EndpointDescriptor;
}

impl<R: ApiRequest> ApiRequest for &R {
    type Output = R::Output;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        (**self).descriptor()
    }
}
