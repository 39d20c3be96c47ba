//! Process-wide settings used by the free functions [`configure`] and [`klass`].
//!
//! Configure once at startup, then render from anywhere. Reads and writes go through a
//! `parking_lot::RwLock`; ordering a `configure` call relative to concurrent renders is up to
//! the caller. Readers take recursive read locks, so [`klass`] and [`settings`] may be called
//! from inside [`with_settings`] even while a writer is queued.

use crate::settings::{ConfigureOptions, Settings};
use crate::spec::{Conditions, Spec};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Updates the global settings. See [`Settings::configure`].
pub fn configure(options: &ConfigureOptions) {
    let mut settings = SETTINGS.write();
    settings.configure(options);
    debug!(
        default_type = %settings.default_type,
        connector = settings.connector(settings.default_type),
        "klass settings reconfigured"
    );
}

/// Renders against the global settings. See [`Settings::render`].
///
/// # Example
/// ```rust
/// use klass::{Conditions, Spec, Structured, klass};
///
/// let spec = Spec::from(Structured::new().base("comp").prepend(true));
/// let conditions = Conditions::from([("current", true), ("act", true)]);
/// assert_eq!(klass(Some(&spec), Some(&conditions), None), "comp compCurrent compAct");
/// ```
#[must_use]
pub fn klass(spec: Option<&Spec>, conditions: Option<&Conditions>, prepend_base: Option<bool>) -> String {
    SETTINGS.read_recursive().render(spec, conditions, prepend_base)
}

/// [`configure`] for loosely typed options. Anything but an object is ignored.
pub fn configure_value(options: &Value) {
    if let Some(options) = ConfigureOptions::from_value(options) {
        configure(&options);
    }
}

/// [`klass`] for loosely typed input.
///
/// `prepend_base` only counts when it is a boolean.
///
/// ```rust
/// use serde_json::json;
///
/// let out = klass::klass_value(&json!({ "base": "comp", "type": 1 }), Some(&json!({ "act": true })), None);
/// assert_eq!(out, "comp-act");
/// ```
#[must_use]
pub fn klass_value(spec: &Value, conditions: Option<&Value>, prepend_base: Option<&Value>) -> String {
    let spec = Spec::from_value(spec);
    let conditions = conditions.and_then(Conditions::from_value);
    let prepend_base = prepend_base.and_then(Value::as_bool);
    klass(spec.as_ref(), conditions.as_ref(), prepend_base)
}

/// Snapshot of the global settings.
#[must_use]
pub fn settings() -> Settings {
    SETTINGS.read_recursive().clone()
}

/// Runs `f` with read access to the global settings.
///
/// `f` may render through the global functions, but must not call [`configure`], [`install`] or
/// [`reset`]: those wait for this read access to end.
pub fn with_settings<R>(f: impl FnOnce(&Settings) -> R) -> R {
    f(&SETTINGS.read_recursive())
}

/// Replaces the global settings wholesale, e.g. after [`Settings::load`].
pub fn install(settings: Settings) {
    debug!(default_type = %settings.default_type, "klass settings installed");
    *SETTINGS.write() = settings;
}

/// Restores the seed settings.
pub fn reset() {
    install(Settings::default());
}
