use crate::*;
use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    marker::PhantomData,
    ops::{Range, RangeInclusive},
    path::{Path, PathBuf},
};

const OPTION: [&str; 2] = ["std", "option"];
const RESULT: [&str; 2] = ["std", "result"];
const COLLECTIONS: [&str; 2] = ["std", "collections"];
const OPS: [&str; 2] = ["std", "ops"];

/* ---------------------------- Option and Result --------------------------- */

impl<T: Debuggable> Debuggable for Option<T> {
    fn to_repr(&self) -> Repr {
        match self {
            | Some(value) => Repr::vconstructor(OPTION, "Some", [value.to_repr()]),
            | None => Repr::object(OPTION, "None"),
        }
    }
}

impl<T: Debuggable, E: Debuggable> Debuggable for Result<T, E> {
    fn to_repr(&self) -> Repr {
        match self {
            | Ok(value) => Repr::vconstructor(RESULT, "Ok", [value.to_repr()]),
            | Err(err) => Repr::vconstructor(RESULT, "Err", [err.to_repr()]),
        }
    }
}

/* -------------------------------- Sequences ------------------------------- */

impl<T: Debuggable> Debuggable for [T] {
    fn to_repr(&self) -> Repr {
        sequence(["std", "slice"], "Slice", self)
    }
}

impl<T: Debuggable, const N: usize> Debuggable for [T; N] {
    fn to_repr(&self) -> Repr {
        sequence(["std", "array"], "Array", self)
    }
}

impl<T: Debuggable> Debuggable for Vec<T> {
    fn to_repr(&self) -> Repr {
        sequence(["std", "vec"], "Vec", self)
    }
}

macro_rules! impl_collection {
    ($name:ident<$t:ident $(, $s:ident)?>) => {
        impl<$t: Debuggable $(, $s)?> Debuggable for $name<$t $(, $s)?> {
            fn to_repr(&self) -> Repr {
                sequence(COLLECTIONS, stringify!($name), self.iter())
            }
        }
    };
}

impl_collection!(VecDeque<T>);
impl_collection!(LinkedList<T>);
impl_collection!(BinaryHeap<T>);
impl_collection!(BTreeSet<T>);
impl_collection!(HashSet<T, S>);

/* ---------------------------------- Maps ---------------------------------- */

impl<K: Debuggable, V: Debuggable, S> Debuggable for HashMap<K, V, S> {
    fn to_repr(&self) -> Repr {
        mapping(COLLECTIONS, "HashMap", self.iter())
    }
}

impl<K: Debuggable, V: Debuggable> Debuggable for BTreeMap<K, V> {
    fn to_repr(&self) -> Repr {
        mapping(COLLECTIONS, "BTreeMap", self.iter())
    }
}

/* ------------------------------- Odds & ends ------------------------------ */

impl<T: Debuggable> Debuggable for Range<T> {
    fn to_repr(&self) -> Repr {
        Repr::constructor(
            OPS,
            "Range",
            [("start", self.start.to_repr()), ("end", self.end.to_repr())],
        )
    }
}

impl<T: Debuggable> Debuggable for RangeInclusive<T> {
    fn to_repr(&self) -> Repr {
        Repr::constructor(
            OPS,
            "RangeInclusive",
            [("start", self.start().to_repr()), ("end", self.end().to_repr())],
        )
    }
}

impl Debuggable for Ordering {
    fn to_repr(&self) -> Repr {
        let name = match self {
            | Ordering::Less => "Less",
            | Ordering::Equal => "Equal",
            | Ordering::Greater => "Greater",
        };
        Repr::object(["std", "cmp", "Ordering"], name)
    }
}

impl<T: ?Sized> Debuggable for PhantomData<T> {
    fn to_repr(&self) -> Repr {
        Repr::object(["std", "marker"], "PhantomData")
    }
}

impl Debuggable for Path {
    fn to_repr(&self) -> Repr {
        let text = self.to_string_lossy().into_owned();
        Repr::vconstructor(["std", "path"], "Path", [Repr::Str(text)])
    }
}

impl Debuggable for PathBuf {
    fn to_repr(&self) -> Repr {
        let text = self.to_string_lossy().into_owned();
        Repr::vconstructor(["std", "path"], "PathBuf", [Repr::Str(text)])
    }
}
