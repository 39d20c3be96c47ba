use crate::error::{KlassError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, FromRepr};

/// How a base token and a condition name are glued together.
///
/// The numeric values are stable and double as the serialized form.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, FromRepr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum ConnectType {
    /// `base + connector + Name`, first character of the name upper-cased.
    #[default]
    Camel = 0,
    /// `base + connector + name`, no case change.
    Line = 1,
}

impl ConnectType {
    /// Slot of this convention inside fixed-size per-convention tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses either a convention name (`camel`, `line`) or its numeric value.
    ///
    /// # Errors
    /// Returns [`KlassError::UnknownConvention`] when `raw` matches neither.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Ok(ty) = raw.parse::<Self>() {
            return Ok(ty);
        }
        raw.parse::<u8>()
            .ok()
            .and_then(Self::from_repr)
            .ok_or_else(|| KlassError::UnknownConvention { value: raw.to_owned(), context: None })
    }
}

impl ConnectType {
    /// Matches integral floating-point values such as `1.0` against the numeric values.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|ty| (f64::from(u8::from(*ty)) - value).abs() < f64::EPSILON)
    }
}

impl TryFrom<u8> for ConnectType {
    type Error = KlassError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_repr(value)
            .ok_or_else(|| KlassError::UnknownConvention { value: value.to_string(), context: None })
    }
}

impl From<ConnectType> for u8 {
    fn from(ty: ConnectType) -> Self {
        ty as Self
    }
}

impl Serialize for ConnectType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl<'de> Deserialize<'de> for ConnectType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ConnectTypeVisitor)
    }
}

struct ConnectTypeVisitor;

impl Visitor<'_> for ConnectTypeVisitor {
    type Value = ConnectType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a joining convention: 0, 1, \"camel\" or \"line\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(ConnectType::from_repr)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        ConnectType::from_f64(value).ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        ConnectType::parse(value).map_err(E::custom)
    }
}
