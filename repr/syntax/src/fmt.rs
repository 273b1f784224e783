//! The formatter traits and the fold shared by every rendering policy.

use crate::*;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Render<'a, Fmter> {
    fn render(&self, f: &'a Fmter) -> String;
}

use pretty::RcDoc;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}

/* --------------------------------- Policy --------------------------------- */

/// The pieces a rendering policy decides; the tree walk is shared.
pub trait Policy {
    fn scalar(&self, scalar: &Scalar) -> String;
    fn text(&self, text: &str) -> String;
    /// The constructor or object name, qualified or not.
    fn head(&self, namespace: &Namespace, name: &str) -> String;
    /// Prefix of a labelled field, `None` when labels are hidden.
    fn label(&self, label: &str) -> Option<String>;
    /// Text before the key and between key and value.
    fn key_value_marks(&self) -> [&'static str; 2];
    /// Whether `TupleN` constructors print as `(a, b, ...)`.
    fn tuple_sugar(&self) -> bool;
}

impl<'a, P: Policy> Render<'a, P> for Repr {
    fn render(&self, f: &'a P) -> String {
        match self {
            | Repr::Scalar(scalar) => f.scalar(scalar),
            | Repr::Str(text) => f.text(text),
            | Repr::KeyValue(kv) => kv.render(f),
            | Repr::Object(obj) => obj.render(f),
            | Repr::Constructor(ctor) => ctor.render(f),
            | Repr::VConstructor(vctor) => vctor.render(f),
        }
    }
}

impl<'a, P: Policy> Render<'a, P> for KeyValue {
    fn render(&self, f: &'a P) -> String {
        let KeyValue { key, value } = self;
        let [before, between] = f.key_value_marks();
        format!("{}{}{}{}", before, key.render(f), between, value.render(f))
    }
}

impl<'a, P: Policy> Render<'a, P> for Object {
    fn render(&self, f: &'a P) -> String {
        let Object { namespace, name } = self;
        f.head(namespace, name)
    }
}

impl<'a, P: Policy> Render<'a, P> for Constructor {
    fn render(&self, f: &'a P) -> String {
        let Constructor { namespace, name, fields } = self;
        let mut s = String::new();
        s += &f.head(namespace, name);
        s += "(";
        s += &fields
            .iter()
            .map(|(label, repr)| {
                let value = repr.render(f);
                match f.label(label) {
                    | Some(prefix) => prefix + &value,
                    | None => value,
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        s += ")";
        s
    }
}

impl<'a, P: Policy> Render<'a, P> for VConstructor {
    fn render(&self, f: &'a P) -> String {
        let VConstructor { namespace, name, values } = self;
        let mut s = String::new();
        if !(f.tuple_sugar() && self.is_tuple()) {
            s += &f.head(namespace, name);
        }
        s += "(";
        s += &values.iter().map(|repr| repr.render(f)).collect::<Vec<_>>().join(", ");
        s += ")";
        s
    }
}
