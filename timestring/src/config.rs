//! Formatter settings read from configuration files or the environment.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::formatter::Formatter;
use crate::options::FormatterOptions;
use crate::style::Style;

/// Prefix used by [`FormatterConfig::from_env`] callers that have no prefix of their own.
pub const DEFAULT_ENV_PREFIX: &str = "TIMESTRING";

/// Style and options of a [`Formatter`], in a shape suitable for configuration.
///
/// `options` takes a list of option names or one comma separated string.
/// Missing keys fall back to [`Style::LongProcess`] with no options.
///
/// ```rust
/// use timestring::config::FormatterConfig;
/// use timestring::Nanoseconds;
///
/// let config = FormatterConfig::from_toml_str(r#"
///     style = "long-process"
///     options = ["abbreviated", "no-spaces"]
/// "#).unwrap();
/// let uptime = Nanoseconds::from_hours(25) + Nanoseconds::from_secs(7);
/// assert_eq!(config.formatter().format(uptime), "1d1h7s");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub style: Style,
    pub options: FormatterOptions,
}

impl FormatterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(?config, "loaded formatter config");
        Ok(config)
    }

    /// Read `{prefix}_STYLE` and `{prefix}_OPTIONS` from the process
    /// environment. `{prefix}_OPTIONS` is a comma separated list of option names.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Same as [`FormatterConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(prefix: &str, mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(style) = lookup(&format!("{prefix}_STYLE")) {
            trace!(%style, "formatter style from environment");
            config.style = style.parse()?;
        }
        if let Some(options) = lookup(&format!("{prefix}_OPTIONS")) {
            trace!(%options, "formatter options from environment");
            config.options = options.parse()?;
        }
        debug!(?config, prefix, "loaded formatter config from environment");
        Ok(config)
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.style).option(self.options.iter())
    }
}

impl From<FormatterConfig> for Formatter {
    fn from(config: FormatterConfig) -> Self {
        config.formatter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use indoc::indoc;
    use time::ext::NumericalDuration;

    use super::*;
    use crate::formatter::LONG_PROCESS;
    use crate::options::FormatterOption::*;

    #[test]
    fn test_from_toml_str() {
        let config = FormatterConfig::from_toml_str(indoc! {r#"
            style = "absolute"
            options = ["no-spaces", "ShowMillisOnSeconds", "no-spaces"]
        "#})
        .unwrap();
        assert_eq!(
            config,
            FormatterConfig {
                style: Style::Absolute,
                options: [NoSpaces, ShowMillisOnSeconds].into_iter().collect(),
            }
        );
        assert_eq!(config.formatter().format(49.hours() + 30.seconds()), "2d1h30s");

        let config = FormatterConfig::from_toml_str(indoc! {r#"
            style = "ShortProcess"
            options = "no-unit-spaces, abbreviated"
        "#})
        .unwrap();
        assert_eq!(config.style, Style::ShortProcess);
        assert_eq!(
            config.options.iter().collect::<Vec<_>>(),
            [NoUnitSpaces, Abbreviated]
        );
    }

    #[test]
    fn test_from_toml_str_defaults() {
        let config = FormatterConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormatterConfig::default());
        assert_eq!(config.formatter(), LONG_PROCESS);
        assert_eq!(Formatter::from(config).format(90.seconds()), "1 minute 30 seconds");
    }

    #[test]
    fn test_from_toml_str_errors() {
        let err = FormatterConfig::from_toml_str(r#"style = "long""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err}");
        assert!(err.to_string().contains("unknown formatter style `long`"), "{err}");

        let err = FormatterConfig::from_toml_str(r#"options = ["spaces"]"#).unwrap_err();
        assert!(err.to_string().contains("unknown formatter option `spaces`"), "{err}");

        let err = FormatterConfig::from_toml_str("options = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err}");

        let err = FormatterConfig::from_toml_str("abbreviated = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err}");
    }

    #[test]
    fn test_from_lookup() {
        let env = HashMap::from([
            ("APP_STYLE", "ShortProcess"),
            ("APP_OPTIONS", "no-spaces"),
            ("OTHER_OPTIONS", "NO_UNIT_SPACES, show-millis-on-seconds"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let config = FormatterConfig::from_lookup("APP", lookup).unwrap();
        assert_eq!(
            config,
            FormatterConfig {
                style: Style::ShortProcess,
                options: FormatterOptions::from(NoSpaces),
            }
        );

        let config = FormatterConfig::from_lookup("OTHER", lookup).unwrap();
        assert_eq!(config.style, Style::LongProcess);
        assert_eq!(
            config.options,
            [NoUnitSpaces, ShowMillisOnSeconds]
                .into_iter()
                .collect::<FormatterOptions>()
        );
        assert_eq!(config.formatter().format(61.seconds()), "1minute 1second");
        assert_eq!(
            config.formatter().format(1_500.milliseconds()),
            "1second 500milliseconds"
        );

        let config = FormatterConfig::from_lookup(DEFAULT_ENV_PREFIX, lookup).unwrap();
        assert_eq!(config, FormatterConfig::default());
    }

    #[test]
    fn test_from_lookup_errors() {
        let err = FormatterConfig::from_lookup("APP", |key| {
            (key == "APP_OPTIONS").then(|| "abbreviated,maybe".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Option(_)), "{err}");
        assert_eq!(
            err.to_string(),
            "unknown formatter option `maybe`, expected one of: \
             no-spaces, no-unit-spaces, abbreviated, show-millis-on-seconds"
        );

        let err = FormatterConfig::from_lookup("APP", |key| {
            (key == "APP_STYLE").then(|| "medium".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown formatter style `medium`, expected one of: \
             absolute, short-process, long-process"
        );
    }
}
