use crate::*;
use std::fmt;

/// Call syntax available on every [`Debuggable`] value.
pub trait DebuggableExt: Debuggable {
    /// Minimal rendering.
    fn show(&self) -> String {
        self.to_repr().show_with(Renderer::Minimal)
    }
    fn show_with(&self, renderer: Renderer) -> String {
        self.to_repr().show_with(renderer)
    }
    fn show_pretty(&self, renderer: Renderer, width: usize) -> String {
        self.to_repr().show_pretty(renderer, width)
    }
    fn show_config(&self, conf: &RenderConfig) -> String {
        conf.render(&self.to_repr())
    }
    /// A `Display` adapter; `{:#}` lays the value out over several lines.
    fn shown(&self) -> Shown<'_, Self> {
        Shown::new(self, Renderer::Minimal)
    }
    fn shown_with(&self, renderer: Renderer) -> Shown<'_, Self> {
        Shown::new(self, renderer)
    }
}

impl<T: Debuggable + ?Sized> DebuggableExt for T {}

/// Renders the borrowed value when displayed. Width, fill and alignment
/// apply to the rendered text.
pub struct Shown<'a, T: ?Sized> {
    value: &'a T,
    renderer: Renderer,
}

impl<'a, T: Debuggable + ?Sized> Shown<'a, T> {
    pub fn new(value: &'a T, renderer: Renderer) -> Self {
        Shown { value, renderer }
    }
}

impl<T: Debuggable + ?Sized> fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self.value.to_repr();
        if f.alternate() {
            f.pad(&repr.show_pretty(self.renderer, DEFAULT_WIDTH))
        } else {
            f.pad(&repr.show_with(self.renderer))
        }
    }
}

/// Same output as `Display`, so `{:?}` placeholders also render the value
/// rather than the `Repr` tree behind it.
impl<T: Debuggable + ?Sized> fmt::Debug for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
