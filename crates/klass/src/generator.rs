use crate::convention::ConnectType;
use crate::settings::Settings;
use crate::spec::{Conditions, Element, Spec};
use std::borrow::Cow;
use tracing::trace;

/// Upper-cases the first character of `name`, leaving the rest untouched.
///
/// Uses the full Unicode mapping, so one character may expand (`ß` becomes `SS`).
#[must_use]
pub fn upper_first(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(name);
    };
    let mut upper = first.to_uppercase();
    if upper.len() == 1 && upper.next() == Some(first) {
        return Cow::Borrowed(name);
    }

    let rest = chars.as_str();
    let mut out = String::with_capacity(name.len() + 2);
    out.extend(first.to_uppercase());
    out.push_str(rest);
    Cow::Owned(out)
}

/// Working values resolved from a spec before conditions are mapped.
#[derive(Debug)]
struct Resolved<'a> {
    base: &'a str,
    link: &'a str,
    convention: ConnectType,
    prepend: bool,
}

impl Settings {
    /// Renders `spec` into a space-separated token string.
    ///
    /// * `conditions` replaces whatever conditions the spec carries itself.
    /// * `prepend_base` emits the base token first; a structured spec decides this on its own.
    ///
    /// Every input renders; there is no failure path.
    ///
    /// # Example
    /// ```rust
    /// use klass::{Conditions, Settings, Spec};
    ///
    /// let settings = Settings::default();
    /// let conditions = Conditions::from([("current", true), ("act", true)]);
    /// let out = settings.render(Some(&Spec::from("comp")), Some(&conditions), Some(true));
    /// assert_eq!(out, "comp compCurrent compAct");
    /// ```
    #[must_use]
    pub fn render(
        &self,
        spec: Option<&Spec>,
        conditions: Option<&Conditions>,
        prepend_base: Option<bool>,
    ) -> String {
        let Some(spec) = spec else {
            return String::new();
        };

        let out = match spec {
            Spec::Batch(elements) => self.render_batch(elements),
            Spec::Literal(base) => {
                let resolved = Resolved {
                    base,
                    link: "",
                    convention: self.default_type,
                    prepend: prepend_base.unwrap_or(false),
                };
                match conditions {
                    Some(conditions) => join(&resolved, conditions.active()),
                    None => join(&resolved, std::iter::once(base.as_str())),
                }
            }
            Spec::Structured(structured) => {
                let convention = structured.connect_type.unwrap_or(self.default_type);
                let link = structured
                    .connect
                    .as_deref()
                    .filter(|connect| !connect.is_empty())
                    .unwrap_or_else(|| self.connector(convention));
                let resolved = Resolved {
                    base: structured.base.as_deref().unwrap_or_default(),
                    link,
                    convention,
                    prepend: structured.prepend.unwrap_or(false),
                };
                join(&resolved, conditions.unwrap_or(&structured.conditions).active())
            }
        };

        trace!(output = %out, "rendered class tokens");
        out
    }

    fn render_batch(&self, elements: &[Element]) -> String {
        let pieces: Vec<Cow<'_, str>> = elements
            .iter()
            .map(|element| match element {
                Element::Token(token) => Cow::Borrowed(token.as_str()),
                Element::Nested(spec) => Cow::Owned(self.render(Some(spec), None, None)),
                Element::Empty => Cow::Borrowed(""),
            })
            .collect();
        pieces.join(" ")
    }
}

fn join<'a>(resolved: &Resolved<'_>, names: impl Iterator<Item = &'a str>) -> String {
    let mut tokens: Vec<Cow<'a, str>> = Vec::new();
    if resolved.prepend && !resolved.base.is_empty() {
        tokens.push(Cow::Owned(resolved.base.to_owned()));
    }
    tokens.extend(names.map(|name| decorate(resolved, name)));
    tokens.join(" ")
}

fn decorate<'a>(resolved: &Resolved<'_>, name: &'a str) -> Cow<'a, str> {
    let Resolved { base, link, convention, .. } = *resolved;
    if base.is_empty() {
        return Cow::Borrowed(name);
    }
    match convention {
        ConnectType::Camel => Cow::Owned(format!("{base}{link}{}", upper_first(name))),
        ConnectType::Line => Cow::Owned(format!("{base}{link}{name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ConfigureOptions;
    use crate::spec::Structured;

    fn current_act() -> Conditions {
        Conditions::from([("current", true), ("act", true)])
    }

    #[test]
    fn upper_first_cases() {
        assert_eq!(upper_first("current"), "Current");
        assert_eq!(upper_first("Current"), "Current");
        assert!(matches!(upper_first("Current"), Cow::Borrowed(_)));
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("élan"), "Élan");
        assert_eq!(upper_first("ßtraße"), "SStraße");
        assert_eq!(upper_first("1st"), "1st");
    }

    #[test]
    fn absent_spec_renders_empty() {
        assert_eq!(Settings::default().render(None, Some(&current_act()), Some(true)), "");
    }

    #[test]
    fn literal_without_conditions_uses_itself() {
        let settings = Settings::default();
        assert_eq!(settings.render(Some(&Spec::from("comp")), None, None), "compComp");
        assert_eq!(settings.render(Some(&Spec::from("comp")), None, Some(true)), "comp compComp");
    }

    #[test]
    fn literal_ignores_configured_connector() {
        let mut settings = Settings::default();
        settings.configure(&ConfigureOptions::new().connect_type(ConnectType::Line).symbol("__"));
        let out = settings.render(Some(&Spec::from("comp")), Some(&current_act()), None);
        assert_eq!(out, "compcurrent compact");
    }

    #[test]
    fn structured_prepend_overrides_argument() {
        let settings = Settings::default();
        let spec = Spec::from(Structured::new().base("comp"));
        assert_eq!(settings.render(Some(&spec), Some(&current_act()), Some(true)), "compCurrent compAct");
    }

    #[test]
    fn empty_connect_falls_back_to_table() {
        let settings = Settings::default();
        let spec = Spec::from(Structured::new().base("comp").connect_type(ConnectType::Line).connect(""));
        assert_eq!(settings.render(Some(&spec), Some(&current_act()), None), "comp-current comp-act");
    }

    #[test]
    fn empty_conditions_with_prepend_yield_base() {
        let settings = Settings::default();
        let spec = Spec::from(Structured::new().base("comp").prepend(true));
        assert_eq!(settings.render(Some(&spec), None, None), "comp");
        assert_eq!(settings.render(Some(&spec), Some(&Conditions::new()), None), "comp");
    }

    #[test]
    fn empty_base_leaves_names_untouched() {
        let settings = Settings::default();
        let spec = Spec::from(Structured::new().base("").prepend(true).condition("act", true));
        assert_eq!(settings.render(Some(&spec), None, None), "act");
    }

    #[test]
    fn batch_keeps_empty_slots() {
        let settings = Settings::default();
        let spec = Spec::Batch(vec![Element::from("a"), Element::Empty, Element::from("b")]);
        assert_eq!(settings.render(Some(&spec), Some(&current_act()), Some(true)), "a  b");
    }
}
