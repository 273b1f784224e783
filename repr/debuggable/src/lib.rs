#![allow(clippy::style)]
#![allow(clippy::useless_format)]

extern crate self as debuggable;

/// The representation tree and the renderers.
pub mod syntax {
    pub use debuggable_syntax::*;
}
pub use debuggable_syntax::{
    Constructor, Full, KeyValue, Layout, Minimal, Namespace, Object, RenderConfig, RenderError,
    Renderer, Repr, Scalar, Simple, VConstructor, DEFAULT_INDENT, DEFAULT_WIDTH,
};

/// The `Debuggable` trait and the helpers shared by container conversions.
pub mod registry;
pub use registry::{mapping, sequence, Debuggable};
pub use debuggable_derive::{dformat, Debuggable};

/// Conversions for primitives, text and transparent wrappers.
mod prims;
/// Conversions for `Option`, `Result`, ranges and std collections.
mod containers;
/// Conversions for cells and locks; inspection never blocks.
mod cells;
/// Tuples of arity 2 to 22.
mod tuples;
/// Persistent and insertion-ordered collections.
mod persistent;
/// Arbitrary precision numbers.
mod numbers;
/// `Duration` and its units.
pub mod time;
pub use time::TimeUnit;

/// First-class conversions for types without a `Debuggable` implementation.
pub mod conversion;
pub use conversion::{Bound, Conversion};

/// Call syntax and string templating.
pub mod ext;
pub use ext::{DebuggableExt, Shown};

/// Rendering into the `log` facade.
pub mod logging;
pub use logging::*;

pub mod prelude {
    pub use crate::{dformat, Debuggable, DebuggableExt, Renderer, Repr};
}
