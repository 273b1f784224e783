//! Width-aware rendering built on `pretty`.

use crate::*;
use pretty::RcDoc;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_INDENT: isize = 2;

/// Lays a tree out under a policy, breaking constructors that overflow `width`.
pub struct Layout<P> {
    pub policy: P,
    pub width: usize,
    pub indent: isize,
}

impl<P: Policy> Layout<P> {
    pub fn new(policy: P, width: usize, indent: isize) -> Self {
        Layout { policy, width, indent }
    }
    pub fn layout(&self, repr: &Repr) -> String {
        format!("{}", repr.pretty(self).pretty(self.width))
    }

    /// `head(` children `)`, one child per line when the group breaks.
    fn parens<'a>(&self, head: String, children: Vec<RcDoc<'a>>) -> RcDoc<'a> {
        if children.is_empty() {
            return RcDoc::text(head).append(RcDoc::text("()"));
        }
        let sep = RcDoc::text(",").append(RcDoc::line());
        RcDoc::text(head)
            .append(RcDoc::text("("))
            .append(RcDoc::line_().append(RcDoc::intersperse(children, sep)).nest(self.indent))
            .append(RcDoc::line_())
            .append(RcDoc::text(")"))
            .group()
    }
}

impl<P: Policy + Default> Default for Layout<P> {
    fn default() -> Self {
        Layout::new(P::default(), DEFAULT_WIDTH, DEFAULT_INDENT)
    }
}

impl<'a, P: Policy> Pretty<'a, Layout<P>> for Repr {
    fn pretty(&self, f: &'a Layout<P>) -> RcDoc<'a> {
        match self {
            | Repr::Scalar(scalar) => RcDoc::text(f.policy.scalar(scalar)),
            | Repr::Str(text) => RcDoc::text(f.policy.text(text)),
            | Repr::KeyValue(kv) => kv.pretty(f),
            | Repr::Object(obj) => RcDoc::text(obj.render(&f.policy)),
            | Repr::Constructor(ctor) => ctor.pretty(f),
            | Repr::VConstructor(vctor) => vctor.pretty(f),
        }
    }
}

impl<'a, P: Policy> Pretty<'a, Layout<P>> for KeyValue {
    fn pretty(&self, f: &'a Layout<P>) -> RcDoc<'a> {
        let KeyValue { key, value } = self;
        let [before, between] = f.policy.key_value_marks();
        RcDoc::text(before)
            .append(key.pretty(f))
            .append(RcDoc::text(between))
            .append(value.pretty(f))
    }
}

impl<'a, P: Policy> Pretty<'a, Layout<P>> for Constructor {
    fn pretty(&self, f: &'a Layout<P>) -> RcDoc<'a> {
        let Constructor { namespace, name, fields } = self;
        let children = fields
            .iter()
            .map(|(label, repr)| match f.policy.label(label) {
                | Some(prefix) => RcDoc::text(prefix).append(repr.pretty(f)),
                | None => repr.pretty(f),
            })
            .collect();
        f.parens(f.policy.head(namespace, name), children)
    }
}

impl<'a, P: Policy> Pretty<'a, Layout<P>> for VConstructor {
    fn pretty(&self, f: &'a Layout<P>) -> RcDoc<'a> {
        let VConstructor { namespace, name, values } = self;
        let head = if f.policy.tuple_sugar() && self.is_tuple() {
            String::new()
        } else {
            f.policy.head(namespace, name)
        };
        f.parens(head, values.iter().map(|repr| repr.pretty(f)).collect())
    }
}
