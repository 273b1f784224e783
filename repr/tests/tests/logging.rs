use debuggable::{Debuggable, Repr};
use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

struct Capture {
    lines: Mutex<Vec<String>>,
}

impl log::Log for Capture {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }
    }
    fn flush(&self) {}
}

static LOGGER: Capture = Capture { lines: Mutex::new(Vec::new()) };
static CONVERSIONS: AtomicUsize = AtomicUsize::new(0);

/// Counts how often it is converted.
struct Probe(&'static str);

impl Debuggable for Probe {
    fn to_repr(&self) -> Repr {
        CONVERSIONS.fetch_add(1, Ordering::SeqCst);
        Repr::vconstructor(["probe"], "Probe", [self.0.to_repr()])
    }
}

#[test]
fn values_are_rendered_only_when_the_level_is_enabled() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Debug);

    debuggable::trace_repr("skipped", &Probe("quiet"));
    assert_eq!(CONVERSIONS.load(Ordering::SeqCst), 0);

    debuggable::debug_repr("checked", &Probe("loud"));
    debuggable::log_repr(log::Level::Warn, "pair", &(1u8, Some("x")));
    assert_eq!(CONVERSIONS.load(Ordering::SeqCst), 1);

    let lines = LOGGER.lines.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec![
            r#"DEBUG [checked] Probe("loud")"#.to_string(),
            r#"WARN [pair] (1u8, Some("x"))"#.to_string(),
        ]
    );
}
