//! Loosely typed requests for any catalogued endpoint

use crate::{api, error::RawRequestError};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};
use tikhub_common::{ApiRequest, EndpointDescriptor, Param, ParamKind, ResponseModel};

/// A request built from parameter names and JSON values instead of a typed
/// struct.
///
/// Parameters are sent under exactly the names given, so wire names such as
/// `_time` or `subTabId` pass through untouched. Explicit `null` values are
/// kept in [`RawRequest::params`] but never sent.
///
/// ```rust
/// use tikhub_ox::RawRequest;
///
/// let request = RawRequest::for_endpoint("weibo.web.fetch_hot_search")
///     .unwrap()
///     .param("_time", 1_700_000_000_000_i64);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RawRequest {
    descriptor: &'static EndpointDescriptor,
    params: Map<String, Value>,
}

impl RawRequest {
    pub fn new(descriptor: &'static EndpointDescriptor) -> Self {
        Self {
            descriptor,
            params: Map::new(),
        }
    }

    /// Looks the endpoint up in the catalog by dotted name or by path.
    pub fn for_endpoint(name: &str) -> Result<Self, RawRequestError> {
        api::find(name)
            .or_else(|| api::find_by_path(name))
            .map(Self::new)
            .ok_or_else(|| RawRequestError::UnknownEndpoint(name.to_string()))
    }

    pub fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Sets a parameter to a JSON value.
    #[must_use]
    pub fn param(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, Param::Value(value.into()))
    }

    /// Sets a parameter to an explicit `null`, which is never sent.
    #[must_use]
    pub fn null_param(self, name: impl Into<String>) -> Self {
        self.set(name, Param::Null)
    }

    #[must_use]
    pub fn unset(self, name: impl Into<String>) -> Self {
        self.set(name, Param::Unset)
    }

    /// Sets a parameter from its three-state form. `Param::Unset` removes it.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: Param<Value>) -> Self {
        let name = name.into();
        match value {
            Param::Unset => {
                self.params.remove(&name);
            }
            Param::Null => {
                self.params.insert(name, Value::Null);
            }
            Param::Value(value) => {
                self.params.insert(name, value);
            }
        }
        self
    }

    /// Sets a parameter from text, typed by its documented kind.
    ///
    /// Undocumented parameters are kept as strings and reported later by
    /// [`RawRequest::validate`].
    pub fn param_text(self, name: &str, raw: &str) -> Result<Self, RawRequestError> {
        let kind = self
            .descriptor
            .param(name)
            .map_or(ParamKind::String, |p| p.kind);
        let value = typed_value(name, kind, raw)?;
        Ok(self.param(name, value))
    }

    /// Applies `key=value` pairs with [`RawRequest::param_text`].
    pub fn params_from_pairs<I, S>(mut self, pairs: I) -> Result<Self, RawRequestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, raw) = pair
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| RawRequestError::MalformedPair(pair.to_string()))?;
            self = self.param_text(name, raw)?;
        }
        Ok(self)
    }

    /// Fills the documented default of every parameter not given yet.
    pub fn with_defaults(mut self) -> Result<Self, RawRequestError> {
        for spec in self.descriptor.params {
            let Some(default) = spec.default else {
                continue;
            };
            if !self.params.contains_key(spec.name) {
                let value = typed_value(spec.name, spec.kind, default)?;
                self.params.insert(spec.name.to_string(), value);
            }
        }
        Ok(self)
    }

    /// Every required parameter is given a non-null value and every given
    /// parameter is documented.
    pub fn validate(&self) -> Result<(), RawRequestError> {
        let endpoint = self.descriptor.name;
        if let Some(name) = self.params.keys().find(|k| self.descriptor.param(k).is_none()) {
            return Err(RawRequestError::UnknownParam {
                endpoint,
                name: name.clone(),
            });
        }
        for spec in self.descriptor.required_params() {
            if self.params.get(spec.name).is_none_or(Value::is_null) {
                return Err(RawRequestError::MissingParam {
                    endpoint,
                    name: spec.name,
                });
            }
        }
        Ok(())
    }
}

fn typed_value(name: &str, kind: ParamKind, raw: &str) -> Result<Value, RawRequestError> {
    let invalid = || RawRequestError::InvalidValue {
        name: name.to_string(),
        kind: kind.as_str(),
        value: raw.to_string(),
    };
    match kind {
        ParamKind::String => Ok(Value::String(raw.to_string())),
        ParamKind::Integer => raw.trim().parse::<i64>().map(Value::from).map_err(|_| invalid()),
        ParamKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
    }
}

impl Serialize for RawRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.params.iter().filter(|(_, v)| !v.is_null());
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl ApiRequest for RawRequest {
    type Output = ResponseModel;

    fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }
}
