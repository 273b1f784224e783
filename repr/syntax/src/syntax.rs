//! The representation tree.

use derive_more::From;
use indexmap::IndexMap;

/* --------------------------------- Scalar --------------------------------- */

/// Primitive scalars, one variant per Rust primitive.
#[derive(From, Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
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
}

/* -------------------------------- Namespace ------------------------------- */

/// Path segments leading to a name, e.g. `std::collections`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Namespace(pub Vec<String>);

/* ---------------------------------- Nodes --------------------------------- */

/// `k -> v`
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub key: Box<Repr>,
    pub value: Box<Repr>,
}

/// A bare named object, e.g. `None` or a unit struct.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub namespace: Namespace,
    pub name: String,
}

/// `Name(label = value, ...)`
#[derive(Clone, Debug, PartialEq)]
pub struct Constructor {
    pub namespace: Namespace,
    pub name: String,
    pub fields: IndexMap<String, Repr>,
}

/// `Name(value, ...)`
#[derive(Clone, Debug, PartialEq)]
pub struct VConstructor {
    pub namespace: Namespace,
    pub name: String,
    pub values: Vec<Repr>,
}

/// The debug representation of a value.
#[derive(From, Clone, Debug, PartialEq)]
pub enum Repr {
    Scalar(Scalar),
    Str(String),
    KeyValue(KeyValue),
    Object(Object),
    Constructor(Constructor),
    VConstructor(VConstructor),
}

/* ------------------------------ Construction ------------------------------ */

impl Repr {
    pub fn key_value(key: impl Into<Repr>, value: impl Into<Repr>) -> Self {
        KeyValue { key: Box::new(key.into()), value: Box::new(value.into()) }.into()
    }
    pub fn object(namespace: impl Into<Namespace>, name: impl Into<String>) -> Self {
        Object { namespace: namespace.into(), name: name.into() }.into()
    }
    /// Later fields with a repeated label overwrite the value in place.
    pub fn constructor<L>(
        namespace: impl Into<Namespace>, name: impl Into<String>,
        fields: impl IntoIterator<Item = (L, Repr)>,
    ) -> Self
    where
        L: Into<String>,
    {
        let fields = fields.into_iter().map(|(label, repr)| (label.into(), repr)).collect();
        Constructor { namespace: namespace.into(), name: name.into(), fields }.into()
    }
    pub fn vconstructor(
        namespace: impl Into<Namespace>, name: impl Into<String>,
        values: impl IntoIterator<Item = Repr>,
    ) -> Self {
        let values = values.into_iter().collect();
        VConstructor { namespace: namespace.into(), name: name.into(), values }.into()
    }
    /// `(a, b, ...)`, stored as `TupleN` without a namespace.
    pub fn tuple(values: impl IntoIterator<Item = Repr>) -> Self {
        let values: Vec<Repr> = values.into_iter().collect();
        let name = format!("Tuple{}", values.len());
        VConstructor { namespace: Namespace::root(), name, values }.into()
    }
    /// The unit value `()`.
    pub fn unit() -> Self {
        Repr::object(Namespace::root(), "()")
    }
}

impl From<&str> for Repr {
    fn from(text: &str) -> Self {
        Repr::Str(text.to_string())
    }
}
