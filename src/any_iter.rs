//! A value-semantic iterator handle that hides the concrete cursor type.
//!
//! [`AnyIterator`] owns exactly one boxed [`IteratorWrapper`]. Copies are
//! deep: cloning the handle clones the wrapped cursor, so advancing one copy
//! never moves another.

mod adaptor;

use std::borrow::Borrow;

pub use adaptor::{Adaptor, IteratorWrapper};

use crate::{
    cursor::{Cursor, Position},
    error::{IterError, Result},
};

pub struct AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    wrapper: Option<Box<dyn IteratorWrapper<'a, T> + 'a>>,
}

impl<'a, T> AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor<'a> + 'a,
        C::Item: Borrow<T>,
    {
        Self::from_wrapper(Box::new(Adaptor::new(cursor)))
    }

    pub fn from_wrapper(wrapper: Box<dyn IteratorWrapper<'a, T> + 'a>) -> Self {
        AnyIterator {
            wrapper: Some(wrapper),
        }
    }

    /// Creates a placeholder handle. It may be assigned to, but every other
    /// operation on it fails with [`IterError::Empty`].
    pub fn empty() -> Self {
        AnyIterator { wrapper: None }
    }

    pub fn is_empty(&self) -> bool {
        self.wrapper.is_none()
    }

    fn wrapper(&self) -> Result<&(dyn IteratorWrapper<'a, T> + 'a)> {
        self.wrapper.as_deref().ok_or_else(empty_error)
    }

    fn wrapper_mut(&mut self) -> Result<&mut (dyn IteratorWrapper<'a, T> + 'a)> {
        self.wrapper.as_deref_mut().ok_or_else(empty_error)
    }

    pub fn position(&self) -> Result<Position> {
        Ok(self.wrapper()?.position())
    }

    pub fn try_get(&self) -> Result<&'a T> {
        self.wrapper()?.current().ok_or(IterError::PastEnd)
    }

    /// Returns the current element.
    ///
    /// Panics if the handle is empty or at the end of its sequence.
    pub fn get(&self) -> &'a T {
        self.try_get().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_advance(&mut self) -> Result<&mut Self> {
        self.wrapper_mut()?.next()?;
        Ok(self)
    }

    /// Steps forward by one element.
    ///
    /// Panics if the handle is empty or already at the end.
    pub fn advance(&mut self) -> &mut Self {
        if let Err(err) = self.wrapper_mut().and_then(|wrapper| wrapper.next()) {
            panic!("{err}");
        }
        self
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.wrapper()?.equal(other.wrapper()?)
    }

    /// Moves this handle to the position of `other`, reusing the wrapped
    /// cursor. Both handles must be non-empty and belong to the same
    /// sequence.
    pub fn try_assign(&mut self, other: &Self) -> Result<()> {
        let source = other.wrapper()?;
        self.wrapper_mut()?.assign(source)
    }
}

fn empty_error() -> IterError {
    tracing::debug!("operation on an empty iterator");
    IterError::Empty
}

impl<'a, T> Default for AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> Clone for AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    fn clone(&self) -> Self {
        AnyIterator {
            wrapper: self.wrapper.as_ref().map(|wrapper| wrapper.clone_box()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.try_assign(source).is_err() {
            *self = source.clone();
        }
    }
}

/// Panics when either handle is empty or the two belong to different
/// sequences. Use [`AnyIterator::try_eq`] to observe those cases.
impl<'a, T> PartialEq for AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a, T> std::ops::Deref for AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<'a, T> std::fmt::Debug for AnyIterator<'a, T>
where
    T: ?Sized + 'a,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.wrapper {
            Some(wrapper) => f
                .debug_struct("AnyIterator")
                .field("position", &wrapper.position())
                .finish(),
            None => f.write_str("AnyIterator(<empty>)"),
        }
    }
}
