//! A borrowed-pointer adaptor for function arguments.
//!
//! [`Ptr`] lets a function accept "some reference to a `T`" without caring
//! whether the caller holds a plain reference, a `Box`, an `Rc`, or an
//! `Arc`. It is a thin wrapper around `&T`: it never owns the pointee, never
//! drops it, and never extends its lifetime.

use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::{fmt, ops::Deref};

/// A non-owning reference to a `T`, convertible from any of the common
/// ownership wrappers by borrowing.
///
/// ```
/// use std::sync::Arc;
/// use sundry::Ptr;
///
/// fn shout(word: Ptr<'_, String>) -> String {
///     word.to_uppercase()
/// }
///
/// let owned = String::from("hi");
/// let shared = Arc::new(String::from("there"));
/// assert_eq!(shout(Ptr::from(&owned)), "HI");
/// assert_eq!(shout(Ptr::from(&shared)), "THERE");
/// ```
pub struct Ptr<'a, T: ?Sized> {
    inner: &'a T,
}

impl<'a, T: ?Sized> Ptr<'a, T> {
    /// Wraps a plain reference.
    #[must_use]
    pub fn new(inner: &'a T) -> Self {
        Self { inner }
    }

    /// Unwraps back to the underlying reference, keeping its full lifetime.
    #[must_use]
    pub fn get(self) -> &'a T {
        self.inner
    }
}

// Manual Clone/Copy: the derive would demand T: Clone, but copying a
// reference never needs that.
impl<T: ?Sized> Clone for Ptr<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ptr<'_, T> {}

impl<T: ?Sized> Deref for Ptr<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.inner
    }
}

impl<'a, T: ?Sized> From<&'a T> for Ptr<'a, T> {
    fn from(inner: &'a T) -> Self {
        Self { inner }
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Ptr<'a, T> {
    fn from(inner: &'a mut T) -> Self {
        Self { inner }
    }
}

impl<'a, T: ?Sized> From<&'a Box<T>> for Ptr<'a, T> {
    fn from(owner: &'a Box<T>) -> Self {
        Self { inner: owner }
    }
}

impl<'a, T: ?Sized> From<&'a Rc<T>> for Ptr<'a, T> {
    fn from(owner: &'a Rc<T>) -> Self {
        Self { inner: owner }
    }
}

impl<'a, T: ?Sized> From<&'a Arc<T>> for Ptr<'a, T> {
    fn from(owner: &'a Arc<T>) -> Self {
        Self { inner: owner }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Ptr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Ptr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use super::*;

    fn first_byte(bytes: Ptr<'_, [u8]>) -> Option<u8> {
        bytes.first().copied()
    }

    #[test]
    fn converts_from_every_wrapper() {
        let plain = 7u32;
        let mut exclusive = 8u32;
        let boxed = Box::new(9u32);
        let counted = Rc::new(10u32);
        let shared = Arc::new(11u32);

        assert_eq!(*Ptr::from(&plain), 7);
        assert_eq!(*Ptr::from(&mut exclusive), 8);
        assert_eq!(*Ptr::<u32>::from(&boxed), 9);
        assert_eq!(*Ptr::<u32>::from(&counted), 10);
        assert_eq!(*Ptr::<u32>::from(&shared), 11);
    }

    #[test]
    fn supports_unsized_pointees() {
        let bytes = vec![42u8, 1, 2];
        assert_eq!(first_byte(Ptr::from(bytes.as_slice())), Some(42));
        let text: &str = "hello";
        assert_eq!(Ptr::new(text).len(), 5);
    }

    #[test]
    fn get_returns_the_original_lifetime() {
        let owned = String::from("outlives the wrapper");
        let reference = {
            let wrapped = Ptr::new(&owned);
            wrapped.get()
        };
        assert_eq!(reference, "outlives the wrapper");
    }

    #[test]
    fn copies_without_clone_bounds() {
        struct NotClone(u8);
        let value = NotClone(5);
        let a = Ptr::new(&value);
        let b = a;
        assert_eq!(a.0, 5);
        assert_eq!(b.0, 5);
    }
}
