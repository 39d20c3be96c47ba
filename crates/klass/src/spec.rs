use crate::convention::ConnectType;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Condition names mapped to inclusion flags, kept in insertion order.
///
/// Output tokens follow this order, so it is part of the contract and of equality.
#[derive(Debug, Default, Clone)]
pub struct Conditions {
    entries: IndexMap<String, bool>,
}

impl Conditions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: IndexMap::with_capacity(capacity) }
    }

    /// Sets `name` to `active`. An existing name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, active: bool) -> &mut Self {
        self.entries.insert(name.into(), active);
        self
    }

    /// Builder form of [`Conditions::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, active: bool) -> Self {
        self.insert(name, active);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, active)| (name.as_str(), *active))
    }

    /// Names whose flag is `true`, in order.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|(name, active)| active.then_some(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Conditions {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Conditions {}

impl<K: Into<String>> Extend<(K, bool)> for Conditions {
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (name, active) in iter {
            self.insert(name, active);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut conditions = Self::new();
        conditions.extend(iter);
        conditions
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for Conditions {
    fn from(entries: [(K, bool); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for Conditions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, active) in self.iter() {
            map.serialize_entry(name, &active)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Conditions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConditionsVisitor)
    }
}

struct ConditionsVisitor;

impl<'de> Visitor<'de> for ConditionsVisitor {
    type Value = Conditions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of condition names to booleans")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut conditions = Conditions::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((name, active)) = access.next_entry::<String, bool>()? {
            conditions.insert(name, active);
        }
        Ok(conditions)
    }
}

/// Structured generator input: base token, joining rules and inline conditions.
///
/// Inline conditions are only consulted when the caller supplies no separate
/// [`Conditions`]. The configuration fields never act as condition names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Structured {
    pub base: Option<String>,
    pub connect_type: Option<ConnectType>,
    /// Overrides the settings' connector for this call when non-empty.
    pub connect: Option<String>,
    /// Emit `base` ahead of the derived tokens. Absent means `false`.
    pub prepend: Option<bool>,
    pub conditions: Conditions,
}

impl Structured {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub const fn connect_type(mut self, ty: ConnectType) -> Self {
        self.connect_type = Some(ty);
        self
    }

    #[must_use]
    pub fn connect(mut self, connect: impl Into<String>) -> Self {
        self.connect = Some(connect.into());
        self
    }

    #[must_use]
    pub const fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = Some(prepend);
        self
    }

    #[must_use]
    pub fn condition(mut self, name: impl Into<String>, active: bool) -> Self {
        self.conditions.insert(name, active);
        self
    }

    #[must_use]
    pub fn conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }
}

/// Primary generator input. An absent spec is modelled as `Option::<Spec>::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    /// Base token; without separate conditions it is also the sole active condition.
    Literal(String),
    /// Elements rendered independently and joined with spaces.
    Batch(Vec<Element>),
    Structured(Structured),
}

/// One slot of a [`Spec::Batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Emitted verbatim.
    Token(String),
    /// Rendered on its own, without outer conditions or prepend flag.
    Nested(Spec),
    /// Contributes an empty string, still occupying its slot in the join.
    Empty,
}

impl From<&str> for Spec {
    fn from(base: &str) -> Self {
        Self::Literal(base.to_owned())
    }
}

impl From<String> for Spec {
    fn from(base: String) -> Self {
        Self::Literal(base)
    }
}

impl From<Structured> for Spec {
    fn from(structured: Structured) -> Self {
        Self::Structured(structured)
    }
}

impl From<Conditions> for Spec {
    fn from(conditions: Conditions) -> Self {
        Self::Structured(Structured::new().conditions(conditions))
    }
}

impl From<Vec<Element>> for Spec {
    fn from(elements: Vec<Element>) -> Self {
        Self::Batch(elements)
    }
}

impl From<&str> for Element {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for Element {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<Spec> for Element {
    fn from(spec: Spec) -> Self {
        Self::Nested(spec)
    }
}

impl From<Structured> for Element {
    fn from(structured: Structured) -> Self {
        Self::Nested(Spec::Structured(structured))
    }
}

impl From<Conditions> for Element {
    fn from(conditions: Conditions) -> Self {
        Self::Nested(Spec::from(conditions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut conditions = Conditions::from([("current", true), ("act", true)]);
        conditions.insert("current", false);
        conditions.insert("extra", true);

        assert_eq!(
            conditions.iter().collect::<Vec<_>>(),
            [("current", false), ("act", true), ("extra", true)]
        );
        assert_eq!(conditions.active().collect::<Vec<_>>(), ["act", "extra"]);
        assert_eq!(conditions.get("current"), Some(false));
        assert_eq!(conditions.get("missing"), None);
    }

    #[test]
    fn large_maps_build_in_order() {
        let size = 200_000;
        let conditions: Conditions = (0..size).map(|i| (format!("k{i}"), i % 2 == 0)).collect();

        assert_eq!(conditions.len(), size);
        assert_eq!(conditions.get("k199998"), Some(true));
        assert_eq!(conditions.get("k199999"), Some(false));
        assert_eq!(conditions.active().next(), Some("k0"));
        assert_eq!(conditions.active().last(), Some("k199998"));
        assert_eq!(conditions.active().count(), size / 2);
    }

    #[test]
    fn equality_respects_order() {
        let forward = Conditions::from([("a", true), ("b", true)]);
        let backward = Conditions::from([("b", true), ("a", true)]);
        assert_ne!(forward, backward);
        assert_eq!(forward, Conditions::new().with("a", true).with("b", true));
    }

    #[test]
    fn deserialize_keeps_key_order() {
        let conditions: Conditions =
            serde_json::from_str(r#"{ "zeta": true, "alpha": false, "mid": true }"#).expect("conditions");
        assert_eq!(conditions.active().collect::<Vec<_>>(), ["zeta", "mid"]);
        assert_eq!(conditions.len(), 3);
    }

    #[test]
    fn deserialize_rejects_non_boolean_flags() {
        assert!(serde_json::from_str::<Conditions>(r#"{ "a": "yes" }"#).is_err());
    }

    #[test]
    fn conversions_pick_expected_variants() {
        assert_eq!(Spec::from("comp"), Spec::Literal("comp".to_owned()));
        assert_eq!(Element::from("comp"), Element::Token("comp".to_owned()));
        assert!(matches!(
            Element::from(Conditions::from([("act", true)])),
            Element::Nested(Spec::Structured(Structured { base: None, .. }))
        ));
    }
}
