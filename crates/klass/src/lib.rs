//! # Klass
//!
//! Turns named boolean conditions into a space-separated class attribute string, optionally
//! prefixing each name with a base token joined by a configurable convention.
//!
//! * [`Settings`] holds the default [`ConnectType`] and one connector string per convention
//!   (`Camel` → `""`, `Line` → `"-"`). [`Settings::render`] is the generator; it never fails.
//! * [`configure`] / [`klass`] operate on one process-wide [`Settings`].
//! * [`klass_value`] / [`configure_value`] accept loosely typed `serde_json::Value` input.
//! * [`SettingsLoader`] reads settings from a file layered under `KLASS__*` environment variables.
//!
//! ## Example
//!
//! ```rust
//! use klass::{ConnectType, Settings, Spec, Structured, conditions};
//!
//! let settings = Settings::default();
//! let active = conditions! { "current" => true, "act" => true, "hidden" => false };
//!
//! let camel = Spec::from("comp");
//! assert_eq!(settings.render(Some(&camel), Some(&active), None), "compCurrent compAct");
//!
//! let line = Spec::from(Structured::new().base("comp").connect_type(ConnectType::Line).prepend(true));
//! assert_eq!(settings.render(Some(&line), Some(&active), None), "comp comp-current comp-act");
//! ```

mod convention;
mod dynamic;
mod error;
mod generator;
mod global;
mod loader;
mod macros;
mod settings;
mod spec;

pub use crate::convention::ConnectType;
pub use crate::dynamic::RESERVED_KEYS;
pub use crate::error::{KlassError, KlassErrorExt, Result};
pub use crate::generator::upper_first;
pub use crate::global::{
    configure, configure_value, install, klass, klass_value, reset, settings, with_settings,
};
pub use crate::loader::{ENV_PREFIX, SettingsLoader, load_global};
pub use crate::settings::{ConfigureOptions, ConnectorTable, Settings};
pub use crate::spec::{Conditions, Element, Spec, Structured};
