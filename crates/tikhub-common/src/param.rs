//! Tri-state optional parameter.
//!
//! TikHub endpoints distinguish between a parameter the caller did not
//! provide and one explicitly set to `null`. Neither is ever put on the wire:
//! only [`Param::Value`] reaches the query string or the JSON body.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request parameter that may be unset, explicitly null, or carry a value.
///
/// Deserializing gives [`Param::Null`] for `null` and [`Param::Value`]
/// otherwise. A missing field only becomes [`Param::Unset`] when the field is
/// marked `#[serde(default)]`; without it serde treats the field as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Param<T> {
    /// Not provided by the caller. Omitted from the request.
    #[default]
    Unset,
    /// Explicitly null. Omitted from the request as well.
    Null,
    /// A concrete value that is serialized under the parameter's wire name.
    Value(T),
}

impl<T> Param<T> {
    /// `None` becomes [`Param::Unset`], `Some(v)` becomes [`Param::Value`].
    pub fn optional(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when the parameter must not be serialized.
    ///
    /// Used as `#[serde(skip_serializing_if = "Param::is_absent")]` on request fields.
    pub fn is_absent(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Param<U> {
        match self {
            Self::Unset => Param::Unset,
            Self::Null => Param::Null,
            Self::Value(v) => Param::Value(f(v)),
        }
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Param<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Param<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Param<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}

#[cfg(feature = "schema")]
impl<T: schemars::JsonSchema> schemars::JsonSchema for Param<T> {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        <Option<T> as schemars::JsonSchema>::schema_name()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <Option<T> as schemars::JsonSchema>::json_schema(generator)
    }
}
