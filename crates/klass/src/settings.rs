use crate::convention::ConnectType;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};

/// Connector string per [`ConnectType`].
///
/// Every convention always owns a slot; updates overwrite that slot in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorTable {
    symbols: [String; ConnectType::COUNT],
}

impl Default for ConnectorTable {
    fn default() -> Self {
        Self { symbols: [String::new(), "-".to_owned()] }
    }
}

impl ConnectorTable {
    /// Connector currently registered for `ty`.
    #[must_use]
    pub fn get(&self, ty: ConnectType) -> &str {
        &self.symbols[ty.index()]
    }

    /// Replaces the connector for `ty`.
    pub fn set(&mut self, ty: ConnectType, symbol: impl Into<String>) {
        self.symbols[ty.index()] = symbol.into();
    }

    /// Conventions paired with their connectors, in numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (ConnectType, &str)> {
        ConnectType::iter().map(|ty| (ty, self.get(ty)))
    }
}

impl Serialize for ConnectorTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(ConnectType::COUNT))?;
        for (ty, symbol) in self.iter() {
            map.serialize_entry(&ty.to_string(), symbol)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConnectorTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConnectorTableVisitor)
    }
}

/// Starts from the seed table so partial maps only override what they name.
struct ConnectorTableVisitor;

impl<'de> Visitor<'de> for ConnectorTableVisitor {
    type Value = ConnectorTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from joining convention to connector string")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = ConnectorTable::default();
        while let Some((key, symbol)) = access.next_entry::<String, String>()? {
            let ty = ConnectType::parse(&key).map_err(de::Error::custom)?;
            table.set(ty, symbol);
        }
        Ok(table)
    }
}

/// Options accepted by [`Settings::configure`].
///
/// An omitted `type` means [`ConnectType::Camel`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigureOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub connect_type: Option<ConnectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl ConfigureOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn connect_type(mut self, ty: ConnectType) -> Self {
        self.connect_type = Some(ty);
        self
    }

    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Defaults consulted by the generator: the fallback convention and its connectors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_type: ConnectType,
    pub connectors: ConnectorTable,
}

impl Settings {
    /// Applies `options`: stores `symbol` for the chosen convention (when given) and makes
    /// that convention the default.
    pub fn configure(&mut self, options: &ConfigureOptions) {
        let ty = options.connect_type.unwrap_or_default();
        if let Some(symbol) = &options.symbol {
            self.connectors.set(ty, symbol.as_str());
        }
        if self.default_type != ty {
            self.default_type = ty;
        }
    }

    /// Connector for `ty` under these settings.
    #[must_use]
    pub fn connector(&self, ty: ConnectType) -> &str {
        self.connectors.get(ty)
    }
}
