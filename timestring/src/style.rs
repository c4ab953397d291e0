use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};

use crate::error::ParseStyleError;
use crate::options::{normalize_name, FormatterOption, FormatterOptions};
use crate::unit::Unit;

/// A named formatting policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Style {
    /// Compact and precise: every non-zero unit down to nanoseconds, always
    /// abbreviated. `2d 1h 15m 30s`
    Absolute,
    /// Same output as [`Style::Absolute`].
    ShortProcess,
    /// Spelled out words down to seconds. `2 days 1 hour 15 minutes 30 seconds`
    #[default]
    LongProcess,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Absolute, Style::ShortProcess, Style::LongProcess];

    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Absolute => "absolute",
            Style::ShortProcess => "short-process",
            Style::LongProcess => "long-process",
        }
    }

    pub(crate) fn rules(self) -> &'static StyleRules {
        match self {
            Style::Absolute | Style::ShortProcess => &COMPACT,
            Style::LongProcess => &LONG,
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "absolute" => Ok(Style::Absolute),
            "shortprocess" => Ok(Style::ShortProcess),
            "longprocess" => Ok(Style::LongProcess),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Accepts the same spellings as [`Style::from_str`].
impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// How a style treats units whose value is zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ZeroPolicy {
    /// Never render a zero unit.
    Suppress,
    /// Render a zero for a `force_show_when_zero` unit while nothing else has
    /// been rendered yet.
    SoleContent,
}

/// Declarative description of a style. Adding a style means adding a row.
#[derive(Debug)]
pub(crate) struct StyleRules {
    /// Units the style may render, largest first.
    pub(crate) units: &'static [Unit],
    pub(crate) always_abbreviated: bool,
    /// Whether `seconds_only` units follow [`FormatterOption::ShowMillisOnSeconds`].
    /// Styles without it render those units like any other.
    pub(crate) millis_on_seconds: bool,
    pub(crate) zero: ZeroPolicy,
}

impl StyleRules {
    /// Options as seen by this style: forced ones added, meaningless ones dropped.
    pub(crate) const fn effective(&self, options: FormatterOptions) -> FormatterOptions {
        let options = if self.always_abbreviated {
            options
                .with(FormatterOption::Abbreviated)
                .without(FormatterOption::NoUnitSpaces)
        } else {
            options
        };
        if self.millis_on_seconds {
            options
        } else {
            options.without(FormatterOption::ShowMillisOnSeconds)
        }
    }

    pub(crate) fn renders(&self, unit: Unit) -> bool {
        self.units.contains(&unit)
    }
}

static COMPACT: StyleRules = StyleRules {
    units: &Unit::ALL,
    always_abbreviated: true,
    millis_on_seconds: false,
    zero: ZeroPolicy::Suppress,
};

static LONG: StyleRules = StyleRules {
    units: &[
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ],
    always_abbreviated: false,
    millis_on_seconds: true,
    zero: ZeroPolicy::SoleContent,
};

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token};

    use super::FormatterOption::*;
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("absolute".parse(), Ok(Style::Absolute));
        assert_eq!("short-process".parse(), Ok(Style::ShortProcess));
        assert_eq!("ShortProcess".parse(), Ok(Style::ShortProcess));
        assert_eq!("long_process".parse(), Ok(Style::LongProcess));
        assert_eq!(
            "long".parse::<Style>(),
            Err(ParseStyleError("long".to_string()))
        );
        for style in Style::ALL {
            assert_eq!(style.to_string().parse(), Ok(style));
        }
    }

    #[test]
    fn test_deserialize() {
        assert_de_tokens(&Style::ShortProcess, &[Token::Str("short-process")]);
        assert_de_tokens(&Style::ShortProcess, &[Token::Str("ShortProcess")]);
        assert_de_tokens(&Style::LongProcess, &[Token::Str("long_process")]);
        assert_de_tokens_error::<Style>(
            &[Token::Str("long")],
            "unknown formatter style `long`, expected one of: \
             absolute, short-process, long-process",
        );
    }

    #[test]
    fn test_effective_options() {
        let all = FormatterOption::ALL.into_iter().collect::<FormatterOptions>();

        let compact = Style::Absolute.rules();
        assert_eq!(
            compact.effective(FormatterOptions::EMPTY),
            FormatterOptions::from(Abbreviated)
        );
        assert_eq!(
            compact.effective(all),
            [NoSpaces, Abbreviated].into_iter().collect::<FormatterOptions>()
        );

        let long = Style::LongProcess.rules();
        assert_eq!(long.effective(FormatterOptions::EMPTY), FormatterOptions::EMPTY);
        assert_eq!(long.effective(all), all);
    }

    #[test]
    fn test_units() {
        assert!(Style::ShortProcess.rules().renders(Unit::Nanosecond));
        assert!(Style::LongProcess.rules().renders(Unit::Millisecond));
        assert!(!Style::LongProcess.rules().renders(Unit::Microsecond));
    }
}
