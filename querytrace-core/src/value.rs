//! Bound parameter values and their explicit type tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form of the NULL sentinel.
pub const NULL_LITERAL: &str = "NULL";

/// A value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    /// The NULL sentinel.
    Null,
    /// Boolean value, rendered as `1` or `0`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// Any other JSON document.
    Json(serde_json::Value),
}

impl BoundValue {
    /// Check if this is the NULL sentinel.
    ///
    /// A JSON `null` counts as the sentinel too.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null | Self::Json(serde_json::Value::Null))
    }

    /// The textual form used when the value is written into a trace.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => NULL_LITERAL.to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Json(serde_json::Value::Null) => NULL_LITERAL.to_string(),
            Self::Json(serde_json::Value::String(v)) => v.clone(),
            Self::Json(v) => v.to_string(),
        }
    }
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for BoundValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for BoundValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for BoundValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for BoundValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for BoundValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for BoundValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for BoundValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<serde_json::Value> for BoundValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<BoundValue>> From<Option<T>> for BoundValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// Explicit parameter type that overrides inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    /// Rendered without quotes.
    #[serde(rename = "integer", alias = "int")]
    Integer,
    /// Rendered inside single quotes.
    #[serde(rename = "string", alias = "str")]
    String,
}

impl ParamType {
    /// Parse a type tag such as `int` or `str`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Integer),
            "str" | "string" => Some(Self::String),
            _ => None,
        }
    }
}

/// A bound value, optionally tagged with an explicit type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BindingRepr", into = "BindingRepr")]
pub struct Binding {
    /// The bound value.
    pub value: BoundValue,
    /// Explicit type, if the caller supplied one.
    pub param_type: Option<ParamType>,
}

impl Binding {
    /// Create an untyped binding.
    pub fn new(value: impl Into<BoundValue>) -> Self {
        Self {
            value: value.into(),
            param_type: None,
        }
    }

    /// Create a binding with an explicit type.
    pub fn typed(value: impl Into<BoundValue>, param_type: ParamType) -> Self {
        Self {
            value: value.into(),
            param_type: Some(param_type),
        }
    }

    /// Create a NULL binding.
    pub fn null() -> Self {
        Self::new(BoundValue::Null)
    }
}

/// Wire shape of a binding: either a bare value or a `[value, type]` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum BindingRepr {
    Typed(BoundValue, ParamType),
    Bare(BoundValue),
}

impl From<BindingRepr> for Binding {
    fn from(repr: BindingRepr) -> Self {
        match repr {
            BindingRepr::Typed(value, param_type) => Self::typed(value, param_type),
            BindingRepr::Bare(value) => Self::new(value),
        }
    }
}

impl From<Binding> for BindingRepr {
    fn from(binding: Binding) -> Self {
        match binding.param_type {
            Some(param_type) => Self::Typed(binding.value, param_type),
            None => Self::Bare(binding.value),
        }
    }
}

macro_rules! binding_from_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Binding {
                fn from(v: $ty) -> Self {
                    Self::new(v)
                }
            }
        )+
    };
}

binding_from_scalar!(BoundValue, bool, i32, i64, u32, f64, String, &str, serde_json::Value);

impl<T: Into<BoundValue>> From<Option<T>> for Binding {
    fn from(v: Option<T>) -> Self {
        Self::new(v)
    }
}

impl<T: Into<BoundValue>> From<(T, ParamType)> for Binding {
    fn from((value, param_type): (T, ParamType)) -> Self {
        Self::typed(value, param_type)
    }
}

/// Predicate deciding whether a text can be treated as an integer literal.
pub type IntegerProbe = fn(&str) -> bool;

/// Default [`IntegerProbe`]: the text must survive an `i64` round trip unchanged.
///
/// `"42"` and `"-7"` qualify; `"042"`, `"+1"`, `" 1"` and `"1.0"` do not.
pub fn can_be_treated_as_int(text: &str) -> bool {
    text.parse::<i64>().is_ok_and(|n| n.to_string() == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_forms() {
        assert_eq!(BoundValue::Null.to_text(), "NULL");
        assert_eq!(BoundValue::Bool(true).to_text(), "1");
        assert_eq!(BoundValue::Bool(false).to_text(), "0");
        assert_eq!(BoundValue::Int(-3).to_text(), "-3");
        assert_eq!(BoundValue::Float(1.5).to_text(), "1.5");
        assert_eq!(BoundValue::from("abc").to_text(), "abc");
        assert_eq!(
            BoundValue::Json(serde_json::json!({"a": 1})).to_text(),
            r#"{"a":1}"#
        );
        assert_eq!(BoundValue::Json(serde_json::json!("x")).to_text(), "x");
    }

    #[test]
    fn test_json_null_is_null() {
        assert!(BoundValue::Json(serde_json::Value::Null).is_null());
        assert!(BoundValue::from(None::<i64>).is_null());
        assert!(!BoundValue::from("NULL").is_null());
    }

    #[test]
    fn test_can_be_treated_as_int() {
        assert!(can_be_treated_as_int("42"));
        assert!(can_be_treated_as_int("-7"));
        assert!(can_be_treated_as_int("0"));
        assert!(!can_be_treated_as_int("042"));
        assert!(!can_be_treated_as_int("+1"));
        assert!(!can_be_treated_as_int(" 1"));
        assert!(!can_be_treated_as_int("1.0"));
        assert!(!can_be_treated_as_int("abc"));
        assert!(!can_be_treated_as_int(""));
        assert!(!can_be_treated_as_int("99999999999999999999"));
    }

    #[test]
    fn test_param_type_tags() {
        assert_eq!(ParamType::from_tag("int"), Some(ParamType::Integer));
        assert_eq!(ParamType::from_tag("STRING"), Some(ParamType::String));
        assert_eq!(ParamType::from_tag("blob"), None);
    }

    #[test]
    fn test_binding_conversions() {
        let b: Binding = 42.into();
        assert_eq!(b.value, BoundValue::Int(42));
        assert_eq!(b.param_type, None);

        let b: Binding = ("7", ParamType::Integer).into();
        assert_eq!(b.value, BoundValue::String("7".into()));
        assert_eq!(b.param_type, Some(ParamType::Integer));
    }

    #[test]
    fn test_binding_deserialize() {
        let bare: Binding = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(bare, Binding::new("abc"));

        let typed: Binding = serde_json::from_str(r#"["5", "str"]"#).unwrap();
        assert_eq!(typed, Binding::typed("5", ParamType::String));

        let null: Binding = serde_json::from_str("null").unwrap();
        assert!(null.value.is_null());
    }
}
