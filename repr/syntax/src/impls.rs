use crate::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/* --------------------------------- Scalar --------------------------------- */

macro_rules! impl_scalar {
    ($($variant:ident($prim:ty)),* $(,)?) => {
        $(
            impl From<$prim> for Repr {
                fn from(value: $prim) -> Self {
                    Repr::Scalar(Scalar::$variant(value))
                }
            }
        )*
        impl Scalar {
            /// The primitive type name, e.g. `u8`.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( | Scalar::$variant(_) => stringify!($prim), )*
                }
            }
        }
    };
}

impl_scalar!(
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
);

/* -------------------------------- Namespace ------------------------------- */

impl Namespace {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Namespace(segments.into_iter().map(Into::into).collect())
    }
    /// The empty namespace.
    pub fn root() -> Self {
        Namespace(Vec::new())
    }
    /// Splits a `module_path!()`-shaped string on `::`.
    pub fn from_module_path(path: &str) -> Self {
        Namespace::new(path.split("::").map(str::trim).filter(|seg| !seg.is_empty()))
    }
    pub fn is_root(&self) -> bool {
        self.segments().is_empty()
    }
    pub fn segments(&self) -> &[String] {
        &self.0
    }
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments().to_vec();
        segments.push(segment.into());
        Namespace(segments)
    }
    /// `a::b` qualifying `c` gives `a::b::c`.
    pub fn qualify(&self, name: &str) -> String {
        if self.is_root() { name.to_string() } else { format!("{}::{}", self, name) }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("::"))
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Namespace::from_module_path(path)
    }
}
impl From<Vec<String>> for Namespace {
    fn from(segments: Vec<String>) -> Self {
        Namespace(segments)
    }
}
impl From<&[&str]> for Namespace {
    fn from(segments: &[&str]) -> Self {
        Namespace::new(segments.iter().copied())
    }
}
impl<const N: usize> From<[&str; N]> for Namespace {
    fn from(segments: [&str; N]) -> Self {
        Namespace::new(segments)
    }
}
impl From<&Namespace> for Namespace {
    fn from(namespace: &Namespace) -> Self {
        namespace.clone()
    }
}

/* ------------------------------ VConstructor ------------------------------ */

static TUPLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Tuple\d+$").unwrap());

impl VConstructor {
    /// Tuples live at the root and are named `TupleN`.
    pub fn is_tuple(&self) -> bool {
        self.namespace.is_root() && TUPLE_NAME.is_match(&self.name)
    }
}

/* ---------------------------------- Repr ---------------------------------- */

impl Repr {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            | Repr::Scalar(_) | Repr::Str(_) | Repr::Object(_) => 1,
            | Repr::KeyValue(KeyValue { key, value }) => 1 + key.size() + value.size(),
            | Repr::Constructor(Constructor { fields, .. }) => {
                1 + fields.values().map(Repr::size).sum::<usize>()
            }
            | Repr::VConstructor(VConstructor { values, .. }) => {
                1 + values.iter().map(Repr::size).sum::<usize>()
            }
        }
    }
}
