#![allow(clippy::style)]
#![allow(clippy::useless_format)]

/// The representation tree and its node types.
pub mod syntax;
pub use syntax::*;
mod impls;

/// The formatter traits and the policy-generic fold.
pub mod fmt;
pub use fmt::*;

/// The three rendering policies.
pub mod minimal;
pub use minimal::Minimal;
pub mod simple;
pub use simple::Simple;
pub mod full;
pub use full::Full;

/// Runtime choice of a policy.
pub mod renderer;
pub use renderer::Renderer;
/// Width-aware layout.
pub mod layout;
pub use layout::*;

/// Render configuration.
pub mod conf;
pub use conf::RenderConfig;
pub mod err;
pub use err::*;
