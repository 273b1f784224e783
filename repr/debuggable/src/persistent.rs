//! `im` persistent collections and `indexmap` insertion-ordered collections.

use crate::*;
use std::hash::{BuildHasher, Hash};

impl<A: Debuggable + Clone> Debuggable for im::Vector<A> {
    fn to_repr(&self) -> Repr {
        sequence(["im"], "Vector", self.iter())
    }
}

impl<A, S> Debuggable for im::HashSet<A, S>
where
    A: Debuggable + Hash + Eq + Clone,
    S: BuildHasher,
{
    fn to_repr(&self) -> Repr {
        sequence(["im"], "HashSet", self.iter())
    }
}

impl<A: Debuggable + Ord + Clone> Debuggable for im::OrdSet<A> {
    fn to_repr(&self) -> Repr {
        sequence(["im"], "OrdSet", self.iter())
    }
}

impl<K, V, S> Debuggable for im::HashMap<K, V, S>
where
    K: Debuggable + Hash + Eq + Clone,
    V: Debuggable + Clone,
    S: BuildHasher,
{
    fn to_repr(&self) -> Repr {
        mapping(["im"], "HashMap", self.iter())
    }
}

impl<K, V> Debuggable for im::OrdMap<K, V>
where
    K: Debuggable + Ord + Clone,
    V: Debuggable + Clone,
{
    fn to_repr(&self) -> Repr {
        mapping(["im"], "OrdMap", self.iter())
    }
}

impl<T: Debuggable, S> Debuggable for indexmap::IndexSet<T, S> {
    fn to_repr(&self) -> Repr {
        sequence(["indexmap"], "IndexSet", self.iter())
    }
}

impl<K: Debuggable, V: Debuggable, S> Debuggable for indexmap::IndexMap<K, V, S> {
    fn to_repr(&self) -> Repr {
        mapping(["indexmap"], "IndexMap", self.iter())
    }
}
