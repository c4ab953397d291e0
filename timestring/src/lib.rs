//! Human readable elapsed durations.
//!
//! A duration is split into days, hours, minutes, seconds and sub-second
//! units, then rendered by one of the ready-to-use formatters:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use timestring::{FormatterOption, ABSOLUTE, LONG_PROCESS};
//!
//! let uptime = Duration::from_secs(49 * 3600 + 15 * 60 + 30);
//! assert_eq!(ABSOLUTE.format(uptime), "2d 1h 15m 30s");
//! assert_eq!(LONG_PROCESS.format(uptime), "2 days 1 hour 15 minutes 30 seconds");
//!
//! let short = LONG_PROCESS.option([
//!     FormatterOption::Abbreviated,
//!     FormatterOption::NoSpaces,
//!     FormatterOption::ShowMillisOnSeconds,
//! ]);
//! assert_eq!(short.format(Duration::from_micros(999_900)), "999ms");
//! assert_eq!(LONG_PROCESS.format(Duration::from_micros(999_900)), "0 seconds");
//! ```
//!
//! Formatting never fails. Negative durations render as a zero duration.
#![deny(rust_2018_idioms)]

pub use duration::{Components, DecomposedDuration, Nanoseconds};
pub use error::{ConfigError, ParseOptionError, ParseStyleError};
pub use formatter::{
    Formatter, FormatterDisplay, ABSOLUTE, LONG_PROCESS, LONG_PROCESS_ABBREVIATED, SHORT_PROCESS,
};
pub use options::{FormatterOption, FormatterOptions};
pub use style::Style;
pub use unit::{Unit, UnitSpec};

pub mod config;
pub mod serde_str;

mod duration;
mod error;
mod formatter;
mod options;
mod style;
mod unit;
