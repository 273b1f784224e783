pub mod utils {
    use debuggable::{Debuggable, Renderer};
    use pretty_assertions::assert_eq;

    /// Renders `value` with all three renderers and compares in
    /// minimal, simple, full order.
    pub fn assert_renders<T: Debuggable + ?Sized>(value: &T, expected: [&str; 3]) {
        let repr = value.to_repr();
        for (renderer, expected) in Renderer::ALL.into_iter().zip(expected) {
            assert_eq!(repr.show_with(renderer), expected, "with the {} renderer", renderer);
        }
    }

    /// Routes `log` output through the test harness; safe to call repeatedly.
    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

/// `renders!(name, value, minimal, simple, full)` expands to a test asserting
/// the output of every renderer.
#[macro_export]
macro_rules! renders {
    ($name:ident, $value:expr, $minimal:expr, $simple:expr, $full:expr $(,)?) => {
        #[test]
        fn $name() {
            ::debuggable_tests::utils::init_logger();
            ::debuggable_tests::utils::assert_renders(&$value, [$minimal, $simple, $full]);
        }
    };
}
