use crate::*;
use std::fmt::Display;

/// Logs `[msg] <minimal rendering of item>` at `level`.
///
/// The value is only converted when a logger accepts the level.
pub fn log_repr<S, T>(level: ::log::Level, msg: S, item: &T)
where
    S: Display,
    T: Debuggable + ?Sized,
{
    if ::log::log_enabled!(level) {
        ::log::log!(level, "[{}] {}", msg, item.show());
    }
}

pub fn trace_repr<S, T>(msg: S, item: &T)
where
    S: Display,
    T: Debuggable + ?Sized,
{
    log_repr(::log::Level::Trace, msg, item)
}

pub fn debug_repr<S, T>(msg: S, item: &T)
where
    S: Display,
    T: Debuggable + ?Sized,
{
    log_repr(::log::Level::Debug, msg, item)
}
