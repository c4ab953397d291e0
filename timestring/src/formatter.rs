use std::fmt::{self, Display, Write};

use crate::duration::{DecomposedDuration, Nanoseconds};
use crate::options::{FormatterOption, FormatterOptions};
use crate::style::{Style, ZeroPolicy};
use crate::unit::Unit;

/// Ready-to-use [`Style::Absolute`] formatter.
pub const ABSOLUTE: Formatter = Formatter::new(Style::Absolute);
/// Ready-to-use [`Style::ShortProcess`] formatter.
pub const SHORT_PROCESS: Formatter = Formatter::new(Style::ShortProcess);
/// Ready-to-use [`Style::LongProcess`] formatter.
pub const LONG_PROCESS: Formatter = Formatter::new(Style::LongProcess);
/// [`LONG_PROCESS`] with unit abbreviations: `2d 1h 15m 30s`.
pub const LONG_PROCESS_ABBREVIATED: Formatter = LONG_PROCESS.with(FormatterOption::Abbreviated);

/// A [`Style`] together with the options applied to it.
///
/// Formatters are plain values: [`Formatter::option`] returns a new formatter
/// and leaves the receiver untouched, so the constants above can be shared
/// freely.
///
/// ```rust
/// use timestring::{FormatterOption, Nanoseconds, LONG_PROCESS};
///
/// let uptime = Nanoseconds::from_hours(1000) + Nanoseconds::from_secs(32 * 60 + 29);
/// assert_eq!(LONG_PROCESS.format(uptime), "41 days 16 hours 32 minutes 29 seconds");
///
/// let compact = LONG_PROCESS.option([
///     FormatterOption::Abbreviated,
///     FormatterOption::NoSpaces,
///     FormatterOption::NoUnitSpaces,
/// ]);
/// assert_eq!(compact.format(uptime), "41d16h32m29s");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Formatter {
    style: Style,
    options: FormatterOptions,
}

impl Formatter {
    pub const fn new(style: Style) -> Self {
        Self {
            style,
            options: FormatterOptions::EMPTY,
        }
    }

    pub const fn style(&self) -> Style {
        self.style
    }

    pub const fn options(&self) -> FormatterOptions {
        self.options
    }

    /// Returns a formatter with `options` added to the current ones.
    #[must_use]
    pub fn option<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = FormatterOption>,
    {
        let mut formatter = self;
        formatter.options.extend(options);
        formatter
    }

    /// Returns a formatter with a single `option` added.
    #[must_use]
    pub const fn with(self, option: FormatterOption) -> Self {
        Self {
            style: self.style,
            options: self.options.with(option),
        }
    }

    pub fn format<D: Into<Nanoseconds>>(&self, duration: D) -> String {
        let mut buf = String::with_capacity(32);
        write!(&mut buf, "{}", self.display(duration)).expect(FORMATTER_DISPLAY_IMPL_ERROR);
        buf
    }

    pub fn display<D: Into<Nanoseconds>>(&self, duration: D) -> FormatterDisplay {
        FormatterDisplay {
            formatter: *self,
            duration: duration.into().decompose(),
        }
    }
}

impl From<Style> for Formatter {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}

const FORMATTER_DISPLAY_IMPL_ERROR: &str =
    "a Formatter formatting implementation returned an error";

/// A duration bound to a [`Formatter`], rendered through [`Display`].
///
/// Width, fill, alignment and precision flags are honoured:
///
/// ```rust
/// use timestring::LONG_PROCESS_ABBREVIATED;
///
/// let d = std::time::Duration::from_secs(65);
/// assert_eq!(format!("[{:>8}]", LONG_PROCESS_ABBREVIATED.display(d)), "[   1m 5s]");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FormatterDisplay {
    formatter: Formatter,
    duration: DecomposedDuration,
}

impl Display for FormatterDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return self.write_to(f);
        }
        let mut buf = String::with_capacity(32);
        self.write_to(&mut buf)?;
        f.pad(&buf)
    }
}

impl FormatterDisplay {
    fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        use FormatterOption::*;

        let rules = self.formatter.style.rules();
        let options = rules.effective(self.formatter.options);
        let duration = &self.duration;
        let show_millis = options.contains(ShowMillisOnSeconds);
        let millis_eligible = show_millis && duration.is_under_a_minute();

        let mut tokens = Tokens::new(out, options);
        for (unit, value) in duration.components() {
            if !rules.renders(unit) {
                continue;
            }
            let spec = unit.spec();
            if spec.seconds_only && rules.millis_on_seconds && !millis_eligible {
                continue;
            }
            // "999 milliseconds", not "0 seconds 999 milliseconds"
            if unit == Unit::Second && value == 0 && show_millis && duration.milliseconds > 0 {
                continue;
            }
            let sole_zero = rules.zero == ZeroPolicy::SoleContent
                && spec.force_show_when_zero
                && tokens.is_empty();
            if value > 0 || sole_zero {
                tokens.push(unit, value)?;
            }
        }
        if tokens.is_empty() {
            tokens.push(Unit::Second, 0)?;
        }
        Ok(())
    }
}

/// Writes `<value><unit>` tokens with the separators the options ask for.
struct Tokens<'a, W> {
    out: &'a mut W,
    abbreviated: bool,
    token_separator: Option<char>,
    unit_separator: Option<char>,
    written: usize,
}

impl<'a, W: Write> Tokens<'a, W> {
    fn new(out: &'a mut W, options: FormatterOptions) -> Self {
        use FormatterOption::*;

        let abbreviated = options.contains(Abbreviated);
        let separator = |option| (!options.contains(option)).then_some(' ');
        Self {
            out,
            abbreviated,
            token_separator: separator(NoSpaces),
            unit_separator: if abbreviated {
                None
            } else {
                separator(NoUnitSpaces)
            },
            written: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.written == 0
    }

    fn push(&mut self, unit: Unit, value: u64) -> fmt::Result {
        if let (false, Some(sep)) = (self.is_empty(), self.token_separator) {
            self.out.write_char(sep)?;
        }
        write!(self.out, "{value}")?;
        if let Some(sep) = self.unit_separator {
            self.out.write_char(sep)?;
        }
        self.out.write_str(unit.name(value, self.abbreviated))?;
        self.written += 1;
        Ok(())
    }
}
