use crate::*;

/// Values that can describe themselves as a [`Repr`] tree.
///
/// Which conversion applies is decided by the static type; a type without an
/// implementation does not compile.
#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Debuggable {
    fn to_repr(&self) -> Repr;
}

/// `name(items...)`, each item converted by its own `Debuggable` implementation.
pub fn sequence<I>(namespace: impl Into<Namespace>, name: &str, items: I) -> Repr
where
    I: IntoIterator,
    I::Item: Debuggable,
{
    Repr::vconstructor(namespace, name, items.into_iter().map(|item| item.to_repr()))
}

/// `name(k -> v, ...)`
pub fn mapping<I, K, V>(namespace: impl Into<Namespace>, name: &str, entries: I) -> Repr
where
    I: IntoIterator<Item = (K, V)>,
    K: Debuggable,
    V: Debuggable,
{
    Repr::vconstructor(
        namespace,
        name,
        entries.into_iter().map(|(key, value)| Repr::key_value(key.to_repr(), value.to_repr())),
    )
}

impl Debuggable for Repr {
    fn to_repr(&self) -> Repr {
        self.clone()
    }
}
