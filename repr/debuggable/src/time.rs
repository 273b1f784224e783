use crate::*;
use std::time::Duration;

/// The unit a [`Duration`] is shown in.
#[derive(Debuggable, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Ascending.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    pub fn as_nanos(&self) -> u128 {
        match self {
            | TimeUnit::Nanoseconds => 1,
            | TimeUnit::Microseconds => 1_000,
            | TimeUnit::Milliseconds => 1_000_000,
            | TimeUnit::Seconds => 1_000_000_000,
            | TimeUnit::Minutes => 60 * 1_000_000_000,
            | TimeUnit::Hours => 60 * 60 * 1_000_000_000,
            | TimeUnit::Days => 24 * 60 * 60 * 1_000_000_000,
        }
    }

    /// The largest unit that divides `duration` exactly, and how many of it.
    /// A zero duration is counted in seconds.
    pub fn fit(duration: Duration) -> (u128, TimeUnit) {
        let nanos = duration.as_nanos();
        if nanos == 0 {
            return (0, TimeUnit::Seconds);
        }
        TimeUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| nanos % unit.as_nanos() == 0)
            .map(|unit| (nanos / unit.as_nanos(), unit))
            .unwrap_or((nanos, TimeUnit::Nanoseconds))
    }
}

impl Debuggable for Duration {
    fn to_repr(&self) -> Repr {
        let (length, unit) = TimeUnit::fit(*self);
        let length = match u64::try_from(length) {
            | Ok(length) => length.to_repr(),
            | Err(_) => length.to_repr(),
        };
        Repr::vconstructor(["std", "time"], "Duration", [length, unit.to_repr()])
    }
}
