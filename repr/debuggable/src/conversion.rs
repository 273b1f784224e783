use crate::*;
use std::rc::Rc;

/// A conversion held as a value rather than picked by type.
///
/// Useful for foreign types that cannot implement [`Debuggable`], and for
/// reusing one element conversion inside a container.
pub struct Conversion<T: ?Sized> {
    run: Rc<dyn Fn(&T) -> Repr>,
}

impl<T: ?Sized> Clone for Conversion<T> {
    fn clone(&self) -> Self {
        Conversion { run: self.run.clone() }
    }
}

impl<T: Debuggable + ?Sized + 'static> Default for Conversion<T> {
    fn default() -> Self {
        Conversion::natural()
    }
}

impl<T: ?Sized> Conversion<T> {
    pub fn new(run: impl Fn(&T) -> Repr + 'static) -> Self {
        Conversion { run: Rc::new(run) }
    }
    /// The conversion chosen by `T`'s own implementation.
    pub fn natural() -> Self
    where
        T: Debuggable + 'static,
    {
        Conversion::new(|value: &T| value.to_repr())
    }
    pub fn apply(&self, value: &T) -> Repr {
        (self.run)(value)
    }
    /// Converts an `S` by first projecting it to the `T` inside.
    pub fn contramap<S>(self, project: impl Fn(&S) -> &T + 'static) -> Conversion<S>
    where
        S: ?Sized + 'static,
        T: 'static,
    {
        Conversion::new(move |source: &S| self.apply(project(source)))
    }
    /// A [`Debuggable`] view of `value` under this conversion.
    pub fn bind<'a>(&'a self, value: &'a T) -> Bound<'a, T> {
        Bound { conversion: self, value }
    }
}

impl<T: 'static> Conversion<T> {
    /// `name(elements...)`, every element converted by `self`.
    pub fn sequence(
        self, namespace: impl Into<Namespace>, name: impl Into<String>,
    ) -> Conversion<Vec<T>> {
        let namespace = namespace.into();
        let name = name.into();
        Conversion::new(move |values: &Vec<T>| {
            let values = values.iter().map(|value| self.apply(value));
            Repr::vconstructor(namespace.clone(), name.clone(), values)
        })
    }
    /// `Some(x)` / `None`, with `x` converted by `self`.
    pub fn option(self) -> Conversion<Option<T>> {
        Conversion::new(move |value: &Option<T>| match value {
            | Some(inner) => Repr::vconstructor(["std", "option"], "Some", [self.apply(inner)]),
            | None => Repr::object(["std", "option"], "None"),
        })
    }
}

/// A value paired with the conversion to use for it.
pub struct Bound<'a, T: ?Sized> {
    conversion: &'a Conversion<T>,
    value: &'a T,
}

impl<T: ?Sized> Debuggable for Bound<'_, T> {
    fn to_repr(&self) -> Repr {
        self.conversion.apply(self.value)
    }
}
