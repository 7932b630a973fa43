use super::value::Value;

/// Returned by string accessors when nothing usable is found.
pub const DEFAULT_STRING: &str = "";
/// Returned by integer accessors when nothing usable is found.
pub const DEFAULT_INT: i64 = -1;
/// Returned by float accessors when nothing usable is found.
pub const DEFAULT_FLOAT: f64 = -1.0;
/// Returned by bool accessors when nothing usable is found.
pub const DEFAULT_BOOL: bool = false;

/// Types a resolved value can be converted into.
///
/// The set is closed over the scalar families the store supports; each type
/// carries its own sentinel used when conversion fails.
pub trait Convert: Sized + Clone + PartialEq {
    /// The "not found" value of this type.
    fn sentinel() -> Self;

    /// Convert `value`, or `None` if it has no sensible representation.
    fn convert(value: &Value) -> Option<Self>;

    fn convert_or_sentinel(value: &Value) -> Self {
        Self::convert(value).unwrap_or_else(Self::sentinel)
    }
}

impl Convert for String {
    fn sentinel() -> Self {
        DEFAULT_STRING.to_string()
    }

    fn convert(value: &Value) -> Option<Self> {
        value.scalar_string()
    }
}

impl Convert for i64 {
    fn sentinel() -> Self {
        DEFAULT_INT
    }

    /// Floats are truncated toward zero; strings must hold a base-10 integer.
    fn convert(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
                Some(f.trunc() as i64)
            }
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Convert for f64 {
    fn sentinel() -> Self {
        DEFAULT_FLOAT
    }

    fn convert(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Convert for bool {
    fn sentinel() -> Self {
        DEFAULT_BOOL
    }

    fn convert(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Some(*i != 0),
            Value::String(s) => match s.trim() {
                "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
                "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

pub fn convert_string(value: &Value) -> String {
    String::convert_or_sentinel(value)
}

pub fn convert_int(value: &Value) -> i64 {
    i64::convert_or_sentinel(value)
}

pub fn convert_float(value: &Value) -> f64 {
    f64::convert_or_sentinel(value)
}

pub fn convert_bool(value: &Value) -> bool {
    bool::convert_or_sentinel(value)
}
