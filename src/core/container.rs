use std::{
    cell::RefCell,
    io::{self, Write},
    ops::Deref,
    rc::Rc,
};

/// A shared, interiorly-mutable handle. Scopes and closures are stored in these so that every
/// holder observes the same storage location.
#[derive(Debug, PartialEq)]
pub struct Container<T>(Rc<RefCell<T>>);

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Container(Rc::new(RefCell::new(value)))
    }

    /// This compares that two `Container` objects have the same identity, meaning that they point
    /// to the same place in memory.
    ///
    /// The `==` operator uses the derived `PartialEq` trait to check whether two `Container<T>`
    /// objects have the same values `T`.
    pub fn same_identity(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Container<T> {
    type Target = RefCell<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Cloning a `Container<T>` bumps the reference count; the inner `T` is never cloned, so `T` does
/// not need to implement `Clone`.
impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Container(self.0.clone())
    }
}

/// A byte buffer which can be handed to the interpreter as its output sink while the caller keeps
/// a handle to read what was written.
impl Write for Container<Vec<u8>> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
