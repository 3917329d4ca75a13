//! Request validation: ordered per-route rule lists that collect every violation.

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use utoipa::ToSchema;

/// Where a rule reads its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    IsInt,
    NotEmpty,
    IsNumeric,
    Positive,
    IsBoolean,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub location: Location,
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Rule { location: Location::Params, field, check, message }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Rule { location: Location::Body, field, check, message }
    }
}

/// One failed rule, serialized into the `errors` array of a 400 response.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    #[schema(value_type = String)]
    pub msg: &'static str,
    #[schema(value_type = String)]
    pub path: &'static str,
    pub location: Location,
}

impl Violation {
    pub fn param(path: &'static str, value: Option<Value>, msg: &'static str) -> Self {
        Violation { kind: "field", value, msg, path, location: Location::Params }
    }

    pub fn body(path: &'static str, value: Option<Value>, msg: &'static str) -> Self {
        Violation { kind: "field", value, msg, path, location: Location::Body }
    }
}

pub const INVALID_ID: &str = "ID no válido";
pub const EMPTY_NAME: &str = "El Nombre de producto no puede ir vacio";
pub const NON_NUMERIC_PRICE: &str = "Valor no válido";
pub const EMPTY_PRICE: &str = "El precio de producto no puede ir vacio";
pub const INVALID_PRICE: &str = "El precio no es válido";
pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";
pub const INVALID_BODY: &str = "Cuerpo de la petición no válido";

pub const ID_RULES: &[Rule] = &[Rule::param("id", Check::IsInt, INVALID_ID)];

pub const CREATE_RULES: &[Rule] = &[
    Rule::body("name", Check::NotEmpty, EMPTY_NAME),
    Rule::body("price", Check::IsNumeric, NON_NUMERIC_PRICE),
    Rule::body("price", Check::NotEmpty, EMPTY_PRICE),
    Rule::body("price", Check::Positive, INVALID_PRICE),
];

pub const REPLACE_RULES: &[Rule] = &[
    Rule::param("id", Check::IsInt, INVALID_ID),
    Rule::body("name", Check::NotEmpty, EMPTY_NAME),
    Rule::body("price", Check::IsNumeric, NON_NUMERIC_PRICE),
    Rule::body("price", Check::NotEmpty, EMPTY_PRICE),
    Rule::body("price", Check::Positive, INVALID_PRICE),
    Rule::body("availability", Check::IsBoolean, INVALID_AVAILABILITY),
];

/// The parts of a request the rules look at.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestInput<'a> {
    pub id: Option<&'a str>,
    pub body: Option<&'a Map<String, Value>>,
}

impl<'a> RequestInput<'a> {
    pub fn new(id: Option<&'a str>, body: Option<&'a Map<String, Value>>) -> Self {
        RequestInput { id, body }
    }

    fn lookup(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => match field {
                "id" => self.id.map(|s| Value::String(s.to_string())),
                _ => None,
            },
            Location::Body => self.body.and_then(|b| b.get(field)).cloned(),
        }
    }

    fn body_field(&self, field: &str) -> Option<&'a Value> {
        self.body.and_then(|b| b.get(field))
    }

    pub fn id(&self) -> Option<i64> {
        self.id.and_then(parse_id)
    }

    pub fn name(&self) -> String {
        text_form(self.body_field("name"))
    }

    pub fn price(&self) -> Option<f64> {
        self.body_field("price").and_then(number_value)
    }

    pub fn availability(&self) -> Option<bool> {
        self.body_field("availability").and_then(bool_value)
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Run every rule and return all violations in rule order.
    pub fn violations(rules: &[Rule], input: &RequestInput<'_>) -> Vec<Violation> {
        rules
            .iter()
            .filter_map(|rule| {
                let value = input.lookup(rule.location, rule.field);
                if passes(rule.check, value.as_ref()) {
                    return None;
                }
                Some(Violation {
                    kind: "field",
                    value,
                    msg: rule.message,
                    path: rule.field,
                    location: rule.location,
                })
            })
            .collect()
    }

    pub fn validate(rules: &[Rule], input: &RequestInput<'_>) -> Result<(), AppError> {
        let violations = Self::violations(rules, input);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }

    /// Run the rules, then read the typed value they guard. Every field `read`
    /// parses is covered by one of `rules`, so `None` only follows a violation.
    pub fn accept<'a, T>(
        rules: &[Rule],
        input: &RequestInput<'a>,
        read: impl FnOnce(&RequestInput<'a>) -> Option<T>,
    ) -> Result<T, AppError> {
        let violations = Self::violations(rules, input);
        match read(input) {
            Some(value) if violations.is_empty() => Ok(value),
            _ => Err(AppError::Validation(violations)),
        }
    }
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    match check {
        Check::IsInt => value.and_then(Value::as_str).and_then(parse_id).is_some(),
        Check::NotEmpty => !text_form(value).trim().is_empty(),
        Check::IsNumeric => numeric_pattern().is_match(&text_form(value)),
        Check::Positive => value.and_then(number_value).is_some_and(|n| n > 0.0),
        Check::IsBoolean => value.and_then(bool_value).is_some(),
    }
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("numeric pattern compiles"))
}

/// Scalar text form used by the presence and numeric checks. Absent, null and
/// compound values read as the empty string.
fn text_form(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Path id as a signed 64-bit integer.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Numbers as-is, numeric strings parsed; only finite values count.
fn number_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn bool_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("test body must be an object"),
        }
    }

    fn messages(violations: &[Violation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.msg).collect()
    }

    #[test]
    fn empty_create_body_reports_four_violations() {
        let b = body(json!({}));
        let v = RequestValidator::violations(CREATE_RULES, &RequestInput::new(None, Some(&b)));
        assert_eq!(messages(&v), vec![EMPTY_NAME, NON_NUMERIC_PRICE, EMPTY_PRICE, INVALID_PRICE]);
        assert!(v.iter().all(|x| x.value.is_none()));
    }

    #[test]
    fn zero_price_only_fails_positivity() {
        let b = body(json!({"name": "Monitor", "price": 0}));
        let v = RequestValidator::violations(CREATE_RULES, &RequestInput::new(None, Some(&b)));
        assert_eq!(messages(&v), vec![INVALID_PRICE]);
        assert_eq!(v[0].value, Some(json!(0)));
    }

    #[test]
    fn text_price_fails_numeric_and_positivity() {
        let b = body(json!({"name": "Monitor", "price": "Hola"}));
        let v = RequestValidator::violations(CREATE_RULES, &RequestInput::new(None, Some(&b)));
        assert_eq!(messages(&v), vec![NON_NUMERIC_PRICE, INVALID_PRICE]);
    }

    #[test]
    fn numeric_string_price_is_accepted() {
        let b = body(json!({"name": "Monitor", "price": "300.5"}));
        assert!(RequestValidator::validate(CREATE_RULES, &RequestInput::new(None, Some(&b))).is_ok());
    }

    #[test]
    fn whitespace_name_is_empty() {
        let b = body(json!({"name": "   ", "price": 10}));
        let v = RequestValidator::violations(CREATE_RULES, &RequestInput::new(None, Some(&b)));
        assert_eq!(messages(&v), vec![EMPTY_NAME]);
    }

    #[test]
    fn empty_replace_body_reports_five_violations() {
        let b = body(json!({}));
        let v = RequestValidator::violations(REPLACE_RULES, &RequestInput::new(Some("1"), Some(&b)));
        assert_eq!(v.len(), 5);
        assert_eq!(v.last().map(|x| x.msg), Some(INVALID_AVAILABILITY));
        assert!(v.iter().all(|x| x.location == Location::Body));
    }

    #[test]
    fn bad_id_is_reported_alongside_body_violations() {
        let b = body(json!({}));
        let v = RequestValidator::violations(REPLACE_RULES, &RequestInput::new(Some("abc"), Some(&b)));
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].msg, INVALID_ID);
        assert_eq!(v[0].location, Location::Params);
        assert_eq!(v[0].value, Some(json!("abc")));
    }

    #[test]
    fn id_rule() {
        for ok in ["1", "2000", "-3", "+4"] {
            assert!(RequestValidator::violations(ID_RULES, &RequestInput::new(Some(ok), None)).is_empty(), "{ok}");
        }
        for bad in ["not-valid-url", "1.5", "", " 1", "99999999999999999999"] {
            assert_eq!(RequestValidator::violations(ID_RULES, &RequestInput::new(Some(bad), None)).len(), 1, "{bad}");
        }
    }

    #[test]
    fn availability_accepts_booleans_and_their_strings() {
        assert_eq!(bool_value(&json!(true)), Some(true));
        assert_eq!(bool_value(&json!("false")), Some(false));
        assert_eq!(bool_value(&json!(1)), None);
        assert_eq!(bool_value(&json!("yes")), None);
    }

    #[test]
    fn accepted_values_are_typed() {
        let b = body(json!({"name": "Monitor", "price": "300.5", "availability": "false"}));
        let input = RequestInput::new(Some("7"), Some(&b));
        let accepted = RequestValidator::accept(REPLACE_RULES, &input, |i| {
            Some((i.id()?, i.name(), i.price()?, i.availability()?))
        });
        assert_eq!(accepted.unwrap(), (7, "Monitor".to_string(), 300.5, false));
    }

    #[test]
    fn rejected_values_carry_every_violation() {
        let b = body(json!({"price": 0}));
        let input = RequestInput::new(None, Some(&b));
        match RequestValidator::accept(CREATE_RULES, &input, RequestInput::price) {
            Err(AppError::Validation(v)) => assert_eq!(messages(&v), vec![EMPTY_NAME, INVALID_PRICE]),
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_id_fails_the_id_rule() {
        let v = RequestValidator::violations(ID_RULES, &RequestInput::new(None, None));
        assert_eq!(v, vec![Violation::param("id", None, INVALID_ID)]);
    }

    #[test]
    fn violation_serializes_like_a_field_error() {
        let v = Violation::body("price", Some(json!(0)), INVALID_PRICE);
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"type": "field", "value": 0, "msg": INVALID_PRICE, "path": "price", "location": "body"})
        );
        let missing = Violation::param("id", None, INVALID_ID);
        assert!(serde_json::to_value(&missing).unwrap().get("value").is_none());
    }
}
