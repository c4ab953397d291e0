use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

use crate::error::ParseOptionError;

/// A toggle layered onto a [`Formatter`](crate::Formatter).
///
/// Options are independent of each other. A style silently ignores the ones
/// that mean nothing to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FormatterOption {
    /// No separator between consecutive unit tokens (`1d2h`).
    NoSpaces,
    /// No separator between a number and its unit word (`2days`).
    NoUnitSpaces,
    /// Unit abbreviations instead of words (`d` instead of `days`).
    Abbreviated,
    /// Also render milliseconds for durations shorter than a minute.
    ShowMillisOnSeconds,
}

impl FormatterOption {
    pub const ALL: [FormatterOption; 4] = [
        FormatterOption::NoSpaces,
        FormatterOption::NoUnitSpaces,
        FormatterOption::Abbreviated,
        FormatterOption::ShowMillisOnSeconds,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FormatterOption::NoSpaces => "no-spaces",
            FormatterOption::NoUnitSpaces => "no-unit-spaces",
            FormatterOption::Abbreviated => "abbreviated",
            FormatterOption::ShowMillisOnSeconds => "show-millis-on-seconds",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl Display for FormatterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatterOption {
    type Err = ParseOptionError;

    /// Accepts kebab, snake and camel case spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "nospaces" => Ok(FormatterOption::NoSpaces),
            "nounitspaces" => Ok(FormatterOption::NoUnitSpaces),
            "abbreviated" => Ok(FormatterOption::Abbreviated),
            "showmillisonseconds" => Ok(FormatterOption::ShowMillisOnSeconds),
            _ => Err(ParseOptionError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for FormatterOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Lowercase `name` and drop word separators.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A set of [`FormatterOption`]s.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FormatterOptions(u8);

impl FormatterOptions {
    pub const EMPTY: Self = Self(0);

    /// Returns a copy of the set with `option` added.
    #[must_use]
    pub const fn with(self, option: FormatterOption) -> Self {
        Self(self.0 | option.bit())
    }

    /// Returns a copy of the set with `option` removed.
    #[must_use]
    pub const fn without(self, option: FormatterOption) -> Self {
        Self(self.0 & !option.bit())
    }

    pub const fn contains(self, option: FormatterOption) -> bool {
        self.0 & option.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FormatterOption> {
        FormatterOption::ALL
            .into_iter()
            .filter(move |option| self.contains(*option))
    }
}

impl FromStr for FormatterOptions {
    type Err = ParseOptionError;

    /// Parses a comma separated list of option names. Blank entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|name| !name.trim().is_empty())
            .map(str::parse::<FormatterOption>)
            .collect()
    }
}

/// Reads either a list of option names or a single comma separated string.
impl<'de> Deserialize<'de> for FormatterOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = FormatterOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of option names or a comma separated string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut options = FormatterOptions::EMPTY;
                while let Some(option) = seq.next_element::<FormatterOption>()? {
                    options = options.with(option);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_any(OptionsVisitor)
    }
}

impl Debug for FormatterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<FormatterOption> for FormatterOptions {
    fn from(option: FormatterOption) -> Self {
        Self::EMPTY.with(option)
    }
}

impl FromIterator<FormatterOption> for FormatterOptions {
    fn from_iter<I: IntoIterator<Item = FormatterOption>>(iter: I) -> Self {
        let mut options = Self::EMPTY;
        options.extend(iter);
        options
    }
}

impl Extend<FormatterOption> for FormatterOptions {
    fn extend<I: IntoIterator<Item = FormatterOption>>(&mut self, iter: I) {
        for option in iter {
            *self = self.with(option);
        }
    }
}
