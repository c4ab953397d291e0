use std::ops::Add;

use crate::unit::Unit;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000 * NANOS_PER_MICRO;
const NANOS_PER_SEC: i64 = 1_000 * NANOS_PER_MILLI;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Elapsed time as a signed count of nanoseconds.
///
/// Every formatter accepts `impl Into<Nanoseconds>`, so [`std::time::Duration`],
/// [`time::Duration`] and raw counts work directly. Conversions saturate at
/// the bounds of `i64`.
///
/// Negative values are accepted but formatted as a zero duration.
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Nanoseconds(i64);

impl Nanoseconds {
    pub const ZERO: Self = Self(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(NANOS_PER_MICRO))
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(NANOS_PER_MILLI))
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(NANOS_PER_MINUTE))
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(NANOS_PER_HOUR))
    }

    pub const fn from_days(days: i64) -> Self {
        Self(days.saturating_mul(NANOS_PER_DAY))
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn decompose(self) -> DecomposedDuration {
        DecomposedDuration::new(self)
    }
}

impl Add for Nanoseconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<i64> for Nanoseconds {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<std::time::Duration> for Nanoseconds {
    fn from(duration: std::time::Duration) -> Self {
        Self(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl From<time::Duration> for Nanoseconds {
    fn from(duration: time::Duration) -> Self {
        let nanos = duration.whole_nanoseconds();
        Self(i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX }))
    }
}

/// A duration split into per-unit remainders.
///
/// Each field only holds what is left over after the next larger unit was
/// taken out, so `hours` is in `0..24`, `minutes` and `seconds` in `0..60`, and
/// the sub-second fields in `0..1000`. `days` is unbounded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DecomposedDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
    pub microseconds: u64,
    pub nanoseconds: u64,
}

impl DecomposedDuration {
    /// Split `duration` into its units. Negative durations are clamped to zero.
    pub const fn new(duration: Nanoseconds) -> Self {
        let nanos = if duration.0 < 0 { 0 } else { duration.0 as u64 };
        let hours = nanos / NANOS_PER_HOUR as u64;
        Self {
            days: hours / 24,
            hours: hours % 24,
            minutes: nanos / NANOS_PER_MINUTE as u64 % 60,
            seconds: nanos / NANOS_PER_SEC as u64 % 60,
            milliseconds: nanos / NANOS_PER_MILLI as u64 % 1000,
            microseconds: nanos / NANOS_PER_MICRO as u64 % 1000,
            nanoseconds: nanos % 1000,
        }
    }

    pub const fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
            Unit::Millisecond => self.milliseconds,
            Unit::Microsecond => self.microseconds,
            Unit::Nanosecond => self.nanoseconds,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.is_under_a_minute()
            && self.seconds == 0
            && self.milliseconds == 0
            && self.microseconds == 0
            && self.nanoseconds == 0
    }

    /// Whether the whole duration is shorter than 60 seconds.
    pub const fn is_under_a_minute(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }

    /// Reassemble the fields into a single nanosecond count.
    ///
    /// Fields are public and may hold anything, so the sum saturates at
    /// `i64::MAX` instead of overflowing.
    pub fn total(&self) -> Nanoseconds {
        let parts = [
            (self.days, NANOS_PER_DAY),
            (self.hours, NANOS_PER_HOUR),
            (self.minutes, NANOS_PER_MINUTE),
            (self.seconds, NANOS_PER_SEC),
            (self.milliseconds, NANOS_PER_MILLI),
            (self.microseconds, NANOS_PER_MICRO),
            (self.nanoseconds, 1),
        ];
        let nanos = parts.into_iter().try_fold(0i64, |total, (value, per_unit)| {
            i64::try_from(value)
                .ok()?
                .checked_mul(per_unit)?
                .checked_add(total)
        });
        Nanoseconds(nanos.unwrap_or(i64::MAX))
    }

    /// Iterate `(unit, value)` pairs from days down to nanoseconds.
    pub const fn components(self) -> Components {
        Components {
            duration: self,
            unit: Some(Unit::BIGGEST),
        }
    }
}

impl From<Nanoseconds> for DecomposedDuration {
    fn from(duration: Nanoseconds) -> Self {
        Self::new(duration)
    }
}

pub struct Components {
    duration: DecomposedDuration,
    unit: Option<Unit>,
}

impl Iterator for Components {
    type Item = (Unit, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.unit?;
        self.unit = unit.next_smaller();
        Some((unit, self.duration.get(unit)))
    }
}
