//! Shape-probing adapter for loosely typed input.
//!
//! Values arriving as JSON (component props, templating data) are classified the way the
//! renderer expects. Nothing here fails: unexpected shapes degrade to empty contributions.

use crate::convention::ConnectType;
use crate::settings::ConfigureOptions;
use crate::spec::{Conditions, Element, Spec, Structured};
use serde_json::{Map, Value};

const BASE: &str = "base";
const TYPE: &str = "type";
const CONNECT: &str = "connect";
const PREPEND: &str = "prepend";

/// Keys of a structured object that configure rendering and are never condition names.
pub const RESERVED_KEYS: [&str; 4] = [BASE, TYPE, CONNECT, PREPEND];

impl Spec {
    /// Classifies `value`: `null` is no spec, strings are literals, arrays are batches,
    /// objects are structured specs and any other scalar is an empty structured spec.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(base) => Some(Self::Literal(base.clone())),
            Value::Array(items) => Some(Self::Batch(items.iter().map(Element::from_value).collect())),
            Value::Object(fields) => Some(Self::Structured(Structured::from_object(fields))),
            Value::Bool(_) | Value::Number(_) => Some(Self::Structured(Structured::default())),
        }
    }
}

impl Element {
    /// Strings become tokens, objects nested specs, everything else an empty slot.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(token) => Self::Token(token.clone()),
            Value::Object(fields) => Self::Nested(Spec::Structured(Structured::from_object(fields))),
            _ => Self::Empty,
        }
    }
}

impl Structured {
    /// Reads the reserved keys as configuration and every other boolean entry as an inline
    /// condition. Wrongly typed reserved values are treated as absent.
    #[must_use]
    pub fn from_object(fields: &Map<String, Value>) -> Self {
        let mut structured = Self::default();
        for (key, value) in fields {
            match key.as_str() {
                BASE => structured.base = value.as_str().map(str::to_owned),
                TYPE => structured.connect_type = convention_from_value(value),
                CONNECT => structured.connect = value.as_str().map(str::to_owned),
                PREPEND => structured.prepend = value.as_bool(),
                name => {
                    if let Some(active) = value.as_bool() {
                        structured.conditions.insert(name, active);
                    }
                }
            }
        }
        structured
    }
}

impl Conditions {
    /// `null` means "not supplied"; an object yields its boolean entries in order and any
    /// other value yields an empty (but supplied) set.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(fields) => Some(
                fields.iter().filter_map(|(name, flag)| flag.as_bool().map(|active| (name.as_str(), active))).collect(),
            ),
            _ => Some(Self::new()),
        }
    }
}

impl ConfigureOptions {
    /// Non-object values produce `None`, which callers treat as a no-op.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self {
            connect_type: fields.get(TYPE).and_then(convention_from_value),
            symbol: fields.get("symbol").and_then(Value::as_str).map(str::to_owned),
        })
    }
}

fn convention_from_value(value: &Value) -> Option<ConnectType> {
    match value {
        Value::Number(number) => match number.as_u64() {
            Some(n) => u8::try_from(n).ok().and_then(ConnectType::from_repr),
            None => number.as_f64().and_then(ConnectType::from_f64),
        },
        Value::String(name) => ConnectType::parse(name).ok(),
        _ => None,
    }
}
