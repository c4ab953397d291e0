//! Serialize durations as formatted strings.
//!
//! Examples
//! ```rust
//! use std::time::Duration;
//!
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Status {
//!     #[serde(serialize_with = "timestring::serde_str::long_process::serialize")]
//!     uptime: Duration,
//!     #[serde(serialize_with = "timestring::serde_str::absolute::serialize")]
//!     last_request: Option<Duration>,
//! }
//!
//! let status = Status {
//!     uptime: Duration::from_secs(90_061),
//!     last_request: Some(Duration::from_micros(1_500)),
//! };
//! let json = serde_json::to_string(&status).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"uptime":"1 day 1 hour 1 minute 1 second","last_request":"1ms 500µs"}"#
//! );
//! ```

use serde::{Serialize, Serializer};

use crate::duration::Nanoseconds;
use crate::formatter::Formatter;

macro_rules! declare_serialize_module {
    ($formatter:path) => {
        use serde::Serializer;

        use super::private::Serde;

        pub fn serialize<T, S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            for<'a> Serde<'a, T>: serde::Serialize,
        {
            serde::Serialize::serialize(&Serde::new(&$formatter, val), serializer)
        }
    };
}

pub mod absolute {
    declare_serialize_module!(crate::formatter::ABSOLUTE);
}
pub mod short_process {
    declare_serialize_module!(crate::formatter::SHORT_PROCESS);
}
pub mod long_process {
    declare_serialize_module!(crate::formatter::LONG_PROCESS);
}
pub mod long_process_abbreviated {
    declare_serialize_module!(crate::formatter::LONG_PROCESS_ABBREVIATED);
}

/// Serialize `val` with an arbitrary `formatter`.
pub fn serialize_with<T, S>(
    formatter: &Formatter,
    val: &T,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    for<'a> private::Serde<'a, T>: Serialize,
{
    private::Serde::new(formatter, val).serialize(serializer)
}

mod private {
    use serde::{Serialize, Serializer};

    use super::*;

    pub struct Serde<'a, T> {
        formatter: &'a Formatter,
        val: &'a T,
    }

    impl<'a, T> Serde<'a, T> {
        pub(super) fn new(formatter: &'a Formatter, val: &'a T) -> Self {
            Self { formatter, val }
        }
    }

    macro_rules! impl_serialize {
        ($($ty:ty),+) => {$(
            impl Serialize for Serde<'_, $ty> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(&self.formatter.display(*self.val))
                }
            }

            impl Serialize for Serde<'_, Option<$ty>> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    match self.val {
                        Some(val) => serializer.serialize_some(&Serde::new(self.formatter, val)),
                        None => serializer.serialize_none(),
                    }
                }
            }
        )+};
    }

    impl_serialize!(Nanoseconds, std::time::Duration, time::Duration);
}
