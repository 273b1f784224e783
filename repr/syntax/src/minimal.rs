//! Rendering close to Rust literal syntax: quoted text, type suffixes on
//! non-default numbers, unqualified names and `label = value` fields.

use crate::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct Minimal;

/// `f64::NAN` and friends, `None` for finite values.
fn non_finite(v: f64, ty: &str) -> Option<String> {
    if v.is_nan() {
        Some(format!("{}::NAN", ty))
    } else if v == f64::INFINITY {
        Some(format!("{}::INFINITY", ty))
    } else if v == f64::NEG_INFINITY {
        Some(format!("{}::NEG_INFINITY", ty))
    } else {
        None
    }
}

impl Policy for Minimal {
    fn scalar(&self, scalar: &Scalar) -> String {
        match *scalar {
            | Scalar::I32(v) => v.to_string(),
            | Scalar::Bool(v) => v.to_string(),
            | Scalar::Char(v) => format!("{:?}", v),
            | Scalar::F64(v) => non_finite(v, "f64").unwrap_or_else(|| format!("{:?}", v)),
            | Scalar::F32(v) => {
                non_finite(f64::from(v), "f32").unwrap_or_else(|| format!("{:?}f32", v))
            }
            | _ => format!("{}{}", Simple.scalar(scalar), scalar.type_name()),
        }
    }
    fn text(&self, text: &str) -> String {
        format!("{:?}", text)
    }
    fn head(&self, _namespace: &Namespace, name: &str) -> String {
        name.to_string()
    }
    fn label(&self, label: &str) -> Option<String> {
        Some(format!("{} = ", label))
    }
    fn key_value_marks(&self) -> [&'static str; 2] {
        ["", " -> "]
    }
    fn tuple_sugar(&self) -> bool {
        true
    }
}
