use std::fmt;

use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::expression::Expression;
use crate::parsed::wrapper::ParsedExpression;

/// Plain numbers are written as numbers, anything else as its description
///
/// A lone infinite or NaN number has no representation that reads back, so
/// it is rejected rather than written as a format-specific placeholder.
impl Serialize for ParsedExpression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.expression() {
            Expression::Number(n) if !n.is_finite() => Err(ser::Error::custom(format!(
                "cannot encode non-finite number {:?}",
                n
            ))),
            Expression::Number(n) => serializer.serialize_f64(*n),
            _ => serializer.serialize_str(&self.description()),
        }
    }
}

struct ParsedExpressionVisitor;

impl Visitor<'_> for ParsedExpressionVisitor {
    type Value = ParsedExpression;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number or a string holding an arithmetic expression")
    }

    fn visit_f64<E>(self, value: f64) -> Result<ParsedExpression, E>
    where
        E: de::Error,
    {
        Ok(ParsedExpression::from_number(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<ParsedExpression, E>
    where
        E: de::Error,
    {
        Ok(ParsedExpression::from_number(value as f64))
    }

    fn visit_u64<E>(self, value: u64) -> Result<ParsedExpression, E>
    where
        E: de::Error,
    {
        Ok(ParsedExpression::from_number(value as f64))
    }

    fn visit_str<E>(self, value: &str) -> Result<ParsedExpression, E>
    where
        E: de::Error,
    {
        ParsedExpression::parse(value).map_err(E::custom)
    }
}

/// Numbers are taken as they are; strings fall back to the parser
impl<'de> Deserialize<'de> for ParsedExpression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ParsedExpressionVisitor)
    }
}
