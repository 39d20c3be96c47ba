use crate::error::{KlassErrorExt, Result};
use crate::global;
use crate::settings::Settings;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `KLASS__CONNECTORS__LINE=__`.
pub const ENV_PREFIX: &str = "KLASS";

/// Layered settings loader: an optional file source under environment overrides.
///
/// Keys missing from every source keep their seed values.
///
/// # Example
/// ```rust
/// use klass::{ConnectType, SettingsLoader};
///
/// let settings = SettingsLoader::new()
///     .env_source([("KLASS__DEFAULT_TYPE".to_owned(), "line".to_owned())])
///     .load()
///     .unwrap();
/// assert_eq!(settings.default_type, ConnectType::Line);
/// ```
#[derive(Debug, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required settings file. The format follows the extension (`.toml`, `.json`, ...).
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_source(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env = Some(vars.into_iter().collect());
        self
    }

    /// Builds the layered configuration and deserializes it into [`Settings`].
    ///
    /// # Errors
    /// * [`crate::KlassError::Internal`] if the file path is empty.
    /// * [`crate::KlassError::Config`] if the file is missing or unreadable, or a value does not
    ///   fit (for example an unknown joining convention).
    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            if path.as_os_str().is_empty() {
                return Err("settings file path is empty".into());
            }
            info!("Loading klass settings from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(self.env),
        );

        let settings = builder
            .build()
            .context("Failed to build klass settings")?
            .try_deserialize::<Settings>()
            .context("Failed to deserialize klass settings")?;

        Ok(settings)
    }
}

impl Settings {
    /// Loads settings from `path` (when given) layered under `KLASS__*` environment variables.
    ///
    /// # Errors
    /// See [`SettingsLoader::load`].
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self> {
        let loader = match path {
            Some(path) => SettingsLoader::new().file(path),
            None => SettingsLoader::new(),
        };
        loader.load()
    }
}

/// Loads settings like [`Settings::load`] and installs them as the global settings.
///
/// # Errors
/// See [`SettingsLoader::load`]. The global settings are untouched on failure.
pub fn load_global(path: Option<impl AsRef<Path>>) -> Result<Settings> {
    let settings = Settings::load(path)?;
    global::install(settings.clone());
    Ok(settings)
}
