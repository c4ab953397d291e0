use std::fmt::{self, Display};

/// A calendar-like unit of elapsed time, ordered from largest to smallest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl Unit {
    pub const BIGGEST: Self = Self::Day;

    /// Every unit, from largest to smallest.
    pub const ALL: [Unit; 7] = [
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ];

    pub fn next_smaller(self) -> Option<Self> {
        use Unit::*;
        match self {
            Day => Some(Hour),
            Hour => Some(Minute),
            Minute => Some(Second),
            Second => Some(Millisecond),
            Millisecond => Some(Microsecond),
            Microsecond => Some(Nanosecond),
            Nanosecond => None,
        }
    }

    /// Static naming and display rules of this unit.
    pub fn spec(self) -> &'static UnitSpec {
        use Unit::*;
        match self {
            Day => &DAY,
            Hour => &HOUR,
            Minute => &MINUTE,
            Second => &SECOND,
            Millisecond => &MILLISECOND,
            Microsecond => &MICROSECOND,
            Nanosecond => &NANOSECOND,
        }
    }

    /// Word used for `value` of this unit, `abbreviated` or spelled out.
    pub fn name(self, value: u64, abbreviated: bool) -> &'static str {
        let spec = self.spec();
        match (abbreviated, value) {
            (true, _) => spec.abbrev,
            (false, 1) => spec.singular,
            (false, _) => spec.plural,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().singular)
    }
}

/// Read-only metadata of a [`Unit`].
#[derive(Debug, Eq, PartialEq)]
pub struct UnitSpec {
    pub singular: &'static str,
    pub plural: &'static str,
    pub abbrev: &'static str,
    /// The unit may stand for a zero duration when nothing else was rendered.
    pub force_show_when_zero: bool,
    /// The unit is only rendered for sub-minute durations, and only by styles
    /// asked to show sub-second precision.
    pub seconds_only: bool,
}

impl UnitSpec {
    const fn new(singular: &'static str, plural: &'static str, abbrev: &'static str) -> Self {
        Self {
            singular,
            plural,
            abbrev,
            force_show_when_zero: false,
            seconds_only: false,
        }
    }
}

static DAY: UnitSpec = UnitSpec::new("day", "days", "d");
static HOUR: UnitSpec = UnitSpec::new("hour", "hours", "h");
static MINUTE: UnitSpec = UnitSpec::new("minute", "minutes", "m");
static SECOND: UnitSpec = UnitSpec {
    force_show_when_zero: true,
    ..UnitSpec::new("second", "seconds", "s")
};
static MILLISECOND: UnitSpec = UnitSpec {
    force_show_when_zero: true,
    seconds_only: true,
    ..UnitSpec::new("millisecond", "milliseconds", "ms")
};
static MICROSECOND: UnitSpec = UnitSpec::new("microsecond", "microseconds", "µs");
static NANOSECOND: UnitSpec = UnitSpec::new("nanosecond", "nanoseconds", "ns");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_smaller_walks_all_units() {
        let mut units = vec![];
        let mut unit = Some(Unit::BIGGEST);
        while let Some(u) = unit {
            units.push(u);
            unit = u.next_smaller();
        }
        assert_eq!(units, Unit::ALL);
    }

    #[test]
    fn test_name() {
        assert_eq!(Unit::Day.name(1, false), "day");
        assert_eq!(Unit::Day.name(0, false), "days");
        assert_eq!(Unit::Day.name(2, false), "days");
        assert_eq!(Unit::Day.name(1, true), "d");
        assert_eq!(Unit::Millisecond.name(5, true), "ms");
        assert_eq!(Unit::Microsecond.name(5, true), "µs");
        assert_eq!(Unit::Nanosecond.name(1, false), "nanosecond");
    }

    #[test]
    fn test_flags() {
        let forced = Unit::ALL
            .into_iter()
            .filter(|u| u.spec().force_show_when_zero)
            .collect::<Vec<_>>();
        assert_eq!(forced, [Unit::Second, Unit::Millisecond]);

        let seconds_only = Unit::ALL
            .into_iter()
            .filter(|u| u.spec().seconds_only)
            .collect::<Vec<_>>();
        assert_eq!(seconds_only, [Unit::Millisecond]);
    }
}
