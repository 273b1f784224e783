use crate::*;
use std::{
    cell::{Cell, RefCell},
    sync::{Mutex, RwLock, TryLockError},
};

const CELL: [&str; 2] = ["std", "cell"];
const SYNC: [&str; 2] = ["std", "sync"];

/// Stands in for a value that cannot be inspected right now.
fn placeholder(what: &str) -> Repr {
    Repr::object(Namespace::root(), format!("<{}>", what))
}

impl<T: Debuggable + Copy> Debuggable for Cell<T> {
    fn to_repr(&self) -> Repr {
        Repr::constructor(CELL, "Cell", [("value", self.get().to_repr())])
    }
}

impl<T: Debuggable + ?Sized> Debuggable for RefCell<T> {
    fn to_repr(&self) -> Repr {
        let value = match self.try_borrow() {
            | Ok(value) => value.to_repr(),
            | Err(_) => placeholder("borrowed"),
        };
        Repr::constructor(CELL, "RefCell", [("value", value)])
    }
}

impl<T: Debuggable + ?Sized> Debuggable for Mutex<T> {
    fn to_repr(&self) -> Repr {
        let data = match self.try_lock() {
            | Ok(guard) => guard.to_repr(),
            | Err(TryLockError::Poisoned(err)) => err.get_ref().to_repr(),
            | Err(TryLockError::WouldBlock) => placeholder("locked"),
        };
        let poisoned = self.is_poisoned().to_repr();
        Repr::constructor(SYNC, "Mutex", [("data", data), ("poisoned", poisoned)])
    }
}

impl<T: Debuggable + ?Sized> Debuggable for RwLock<T> {
    fn to_repr(&self) -> Repr {
        let data = match self.try_read() {
            | Ok(guard) => guard.to_repr(),
            | Err(TryLockError::Poisoned(err)) => err.get_ref().to_repr(),
            | Err(TryLockError::WouldBlock) => placeholder("locked"),
        };
        let poisoned = self.is_poisoned().to_repr();
        Repr::constructor(SYNC, "RwLock", [("data", data), ("poisoned", poisoned)])
    }
}
