//! Fully-qualified rendering: every name carries its namespace and every
//! field and entry is labelled.

use crate::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct Full;

impl Policy for Full {
    fn scalar(&self, scalar: &Scalar) -> String {
        Simple.scalar(scalar)
    }
    fn text(&self, text: &str) -> String {
        Simple.text(text)
    }
    fn head(&self, namespace: &Namespace, name: &str) -> String {
        namespace.qualify(name)
    }
    fn label(&self, label: &str) -> Option<String> {
        Some(format!("{} -> ", label))
    }
    fn key_value_marks(&self) -> [&'static str; 2] {
        ["key: ", " -> value: "]
    }
    fn tuple_sugar(&self) -> bool {
        false
    }
}
