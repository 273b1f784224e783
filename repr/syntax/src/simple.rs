//! Plain rendering: unqualified names, no field labels, unquoted text.

use crate::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct Simple;

impl Policy for Simple {
    fn scalar(&self, scalar: &Scalar) -> String {
        match *scalar {
            | Scalar::I8(v) => v.to_string(),
            | Scalar::I16(v) => v.to_string(),
            | Scalar::I32(v) => v.to_string(),
            | Scalar::I64(v) => v.to_string(),
            | Scalar::I128(v) => v.to_string(),
            | Scalar::Isize(v) => v.to_string(),
            | Scalar::U8(v) => v.to_string(),
            | Scalar::U16(v) => v.to_string(),
            | Scalar::U32(v) => v.to_string(),
            | Scalar::U64(v) => v.to_string(),
            | Scalar::U128(v) => v.to_string(),
            | Scalar::Usize(v) => v.to_string(),
            // `{:?}` keeps the fractional part of whole numbers: `1.0`, not `1`
            | Scalar::F32(v) => format!("{:?}", v),
            | Scalar::F64(v) => format!("{:?}", v),
            | Scalar::Bool(v) => v.to_string(),
            | Scalar::Char(v) => v.to_string(),
        }
    }
    fn text(&self, text: &str) -> String {
        text.to_string()
    }
    fn head(&self, _namespace: &Namespace, name: &str) -> String {
        name.to_string()
    }
    fn label(&self, _label: &str) -> Option<String> {
        None
    }
    fn key_value_marks(&self) -> [&'static str; 2] {
        ["", " -> "]
    }
    fn tuple_sugar(&self) -> bool {
        true
    }
}
