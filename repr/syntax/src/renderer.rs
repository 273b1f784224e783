//! Choosing a rendering policy at runtime.

use crate::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the three rendering policies.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    /// Rust-literal-like output with `label = value` fields.
    #[default]
    Minimal,
    /// Plain output without field labels.
    Simple,
    /// Qualified names with every field and entry labelled.
    Full,
}

impl Renderer {
    pub const ALL: [Renderer; 3] = [Renderer::Minimal, Renderer::Simple, Renderer::Full];

    pub fn name(&self) -> &'static str {
        match self {
            | Renderer::Minimal => "minimal",
            | Renderer::Simple => "simple",
            | Renderer::Full => "full",
        }
    }
    pub fn render(&self, repr: &Repr) -> String {
        match self {
            | Renderer::Minimal => repr.render(&Minimal),
            | Renderer::Simple => repr.render(&Simple),
            | Renderer::Full => repr.render(&Full),
        }
    }
    /// Width-aware rendering; falls back to the flat output when it fits.
    pub fn render_pretty(&self, repr: &Repr, width: usize, indent: isize) -> String {
        match self {
            | Renderer::Minimal => Layout::new(Minimal, width, indent).layout(repr),
            | Renderer::Simple => Layout::new(Simple, width, indent).layout(repr),
            | Renderer::Full => Layout::new(Full, width, indent).layout(repr),
        }
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Renderer {
    type Err = RenderError;
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Renderer::ALL
            .into_iter()
            .find(|renderer| renderer.name() == lowered)
            .ok_or_else(|| RenderError::UnknownRenderer(s.to_string()))
    }
}

/* ---------------------------------- Repr ---------------------------------- */

impl Repr {
    pub fn show_with(&self, renderer: Renderer) -> String {
        renderer.render(self)
    }
    pub fn show_pretty(&self, renderer: Renderer, width: usize) -> String {
        renderer.render_pretty(self, width, DEFAULT_INDENT)
    }
}

/// Minimal rendering; `{:#}` lays the tree out at the default width.
impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.show_pretty(Renderer::Minimal, DEFAULT_WIDTH))
        } else {
            write!(f, "{}", self.show_with(Renderer::Minimal))
        }
    }
}
