use std::borrow::Cow;

/// Errors raised by the fallible edges of the crate: settings loading and strict parsing.
///
/// Rendering and configuring never produce one of these.
#[klass_derive::klass_error]
pub enum KlassError {
    /// The settings sources could not be read or did not match [`crate::Settings`].
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A joining convention name or number that maps to no [`crate::ConnectType`].
    #[error("Unknown joining convention `{value}`{}", format_context(.context))]
    UnknownConvention { value: String, context: Option<Cow<'static, str>> },

    #[error("Internal klass error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
