//! Validated construction from JSON: every field is type-checked before any is applied.

use super::category::Category;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 250;

/// Field values present in a request body. Absent keys stay `None`; `id` is never read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
    pub category: Option<Category>,
}

impl ProductPatch {
    pub fn from_json(data: &Value) -> Result<Self, ValidationError> {
        let obj = data.as_object().ok_or(ValidationError::NotAnObject)?;
        Ok(ProductPatch {
            name: parse_name(obj)?,
            description: parse_description(obj)?,
            price: obj.get("price").map(parse_price).transpose()?,
            available: parse_available(obj)?,
            category: parse_category(obj)?,
        })
    }
}

fn parse_name(obj: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    let Some(v) = obj.get("name") else {
        return Ok(None);
    };
    let s = v.as_str().ok_or(ValidationError::InvalidType {
        field: "name",
        expected: "string",
    })?;
    if s.trim().is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    check_len("name", s, NAME_MAX_LEN)?;
    Ok(Some(s.to_string()))
}

fn parse_description(obj: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    match obj.get("description") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(String::new())),
        Some(Value::String(s)) => {
            check_len("description", s, DESCRIPTION_MAX_LEN)?;
            Ok(Some(s.clone()))
        }
        Some(_) => Err(ValidationError::InvalidType {
            field: "description",
            expected: "string",
        }),
    }
}

/// Accepts a JSON number or a numeric string. The number's source text is parsed directly so no
/// digits are lost to a float conversion; a value `Decimal` cannot hold exactly is rejected.
pub fn parse_price(v: &Value) -> Result<Decimal, ValidationError> {
    let price = match v {
        Value::Number(n) => parse_decimal(&n.to_string())?,
        Value::String(s) => parse_decimal(s)?,
        _ => {
            return Err(ValidationError::InvalidType {
                field: "price",
                expected: "number",
            })
        }
    };
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::NegativePrice);
    }
    Ok(price)
}

/// Largest power of ten a non-zero `Decimal` mantissa can be scaled by.
const MAX_EXPONENT_SHIFT: u32 = 28;

fn parse_decimal(text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();
    let invalid = || ValidationError::InvalidPrice(text.to_string());
    let Some((mantissa, exponent)) = text.split_once(|c| c == 'e' || c == 'E') else {
        return Decimal::from_str_exact(text).map_err(|_| invalid());
    };
    let mut value = Decimal::from_str_exact(mantissa).map_err(|_| invalid())?;
    let exponent: i64 = exponent.parse().map_err(|_| invalid())?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let scale = i64::from(value.scale()) - exponent;
    if scale >= 0 {
        let scale = u32::try_from(scale).map_err(|_| invalid())?;
        value.set_scale(scale).map_err(|_| invalid())?;
        return Ok(value);
    }
    let shift = u32::try_from(-scale).map_err(|_| invalid())?;
    if shift > MAX_EXPONENT_SHIFT {
        return Err(invalid());
    }
    value.set_scale(0).map_err(|_| invalid())?;
    for _ in 0..shift {
        value = value.checked_mul(Decimal::TEN).ok_or_else(invalid)?;
    }
    Ok(value)
}

fn parse_available(obj: &Map<String, Value>) -> Result<Option<bool>, ValidationError> {
    match obj.get("available") {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ValidationError::InvalidType {
            field: "available",
            expected: "boolean",
        }),
    }
}

fn parse_category(obj: &Map<String, Value>) -> Result<Option<Category>, ValidationError> {
    match obj.get("category") {
        None => Ok(None),
        Some(Value::String(s)) => s.parse().map(Some),
        Some(_) => Err(ValidationError::InvalidType {
            field: "category",
            expected: "string",
        }),
    }
}

fn check_len(field: &'static str, s: &str, max: usize) -> Result<(), ValidationError> {
    if s.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
