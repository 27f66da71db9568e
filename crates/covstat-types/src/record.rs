//! Validated access to loosely-typed JSON records.
//!
//! Required accessors fail with [`DecodingError`] when a field is absent or
//! has the wrong shape. Optional accessors never fail: absence, `null` and a
//! wrong shape all collapse to `None`. Numbers and strings are never coerced
//! into each other.

use crate::error::{DecodingError, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or(DecodingError::NotAnObject)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.present(key).is_some()
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| wrong_type(key, "string"))
    }

    pub fn required_number(&self, key: &str) -> Result<f64> {
        self.required(key)?
            .as_f64()
            .ok_or_else(|| wrong_type(key, "number"))
    }

    /// A required number that must be a non-negative whole value
    pub fn required_count(&self, key: &str) -> Result<f64> {
        let value = self.required_number(key)?;
        if value < 0.0 || value.fract() != 0.0 {
            return Err(DecodingError::NotACount {
                field: key.to_string(),
                value,
            });
        }
        Ok(value)
    }

    pub fn optional_str(&self, key: &str) -> Option<&'a str> {
        self.present(key).and_then(Value::as_str)
    }

    pub fn optional_number(&self, key: &str) -> Option<f64> {
        self.present(key).and_then(Value::as_f64)
    }

    pub fn nested(&self, key: &str) -> Result<Record<'a>> {
        let value = self.required(key)?;
        Record::from_value(value).map_err(|_| wrong_type(key, "object"))
    }

    /// Reads an object of `key -> number`, keeping the payload's key order.
    /// Null members are treated as absent.
    pub fn number_series(&self, key: &str) -> Result<IndexMap<String, f64>> {
        let series = self.nested(key)?;
        let mut values = IndexMap::with_capacity(series.fields.len());

        for (name, value) in series.fields {
            if value.is_null() {
                continue;
            }
            let number = value
                .as_f64()
                .ok_or_else(|| wrong_type(&format!("{}.{}", key, name), "number"))?;
            values.insert(name.clone(), number);
        }

        Ok(values)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value> {
        self.present(key).ok_or_else(|| DecodingError::Missing {
            field: key.to_string(),
        })
    }
}

/// Decode every element of a JSON array with `decode`, failing on the first
/// malformed element.
pub fn decode_array<T>(value: &Value, decode: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    value
        .as_array()
        .ok_or(DecodingError::NotAnArray)?
        .iter()
        .map(decode)
        .collect()
}

fn wrong_type(field: &str, expected: &'static str) -> DecodingError {
    DecodingError::WrongType {
        field: field.to_string(),
        expected,
    }
}
