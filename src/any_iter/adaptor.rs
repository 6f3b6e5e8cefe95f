use std::borrow::Borrow;

use crate::{
    cursor::{Cursor, Position},
    error::{IterError, Result},
};

/// The operations every erased cursor must provide.
///
/// `equal` and `assign` accept a peer of any concrete type. Peers are
/// matched by [`Position`]: a peer whose sequence starts at a different
/// element or has a different length is reported as
/// [`IterError::MismatchedOrigin`]. Views with the same start and length
/// but a different visiting order are not detected and compare by index.
pub trait IteratorWrapper<'a, T>
where
    T: ?Sized + 'a,
{
    /// The element at the current position, or `None` at the end.
    fn current(&self) -> Option<&'a T>;

    fn position(&self) -> Position;

    fn equal(&self, other: &dyn IteratorWrapper<'a, T>) -> Result<bool>;

    fn next(&mut self) -> Result<()>;

    /// Moves this wrapper to the position of `other`.
    fn assign(&mut self, other: &dyn IteratorWrapper<'a, T>) -> Result<()>;

    /// Produces an independent copy. Advancing the copy never moves `self`.
    fn clone_box(&self) -> Box<dyn IteratorWrapper<'a, T> + 'a>;
}

fn check_same_sequence(left: Position, right: Position) -> Result<()> {
    if left.same_sequence(&right) {
        Ok(())
    } else {
        tracing::debug!(?left, ?right, "iterators belong to different sequences");
        Err(IterError::MismatchedOrigin { left, right })
    }
}

/// Forwards [`IteratorWrapper`] to a single owned cursor.
pub struct Adaptor<C> {
    cursor: C,
}

impl<C> Adaptor<C> {
    pub fn new(cursor: C) -> Self {
        Adaptor { cursor }
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C> std::fmt::Debug for Adaptor<C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Adaptor").field(&self.cursor).finish()
    }
}

impl<C> Clone for Adaptor<C>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Adaptor::new(self.cursor.clone())
    }
}

impl<'a, C, T> IteratorWrapper<'a, T> for Adaptor<C>
where
    C: Cursor<'a> + 'a,
    C::Item: Borrow<T>,
    T: ?Sized + 'a,
{
    fn current(&self) -> Option<&'a T> {
        self.cursor.current().map(Borrow::borrow)
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    fn equal(&self, other: &dyn IteratorWrapper<'a, T>) -> Result<bool> {
        let (left, right) = (self.cursor.position(), other.position());
        check_same_sequence(left, right)?;
        Ok(left.index() == right.index())
    }

    fn next(&mut self) -> Result<()> {
        if self.cursor.current().is_none() {
            tracing::debug!(position = ?self.cursor.position(), "advance past the end");
            return Err(IterError::PastEnd);
        }
        self.cursor.advance();
        Ok(())
    }

    fn assign(&mut self, other: &dyn IteratorWrapper<'a, T>) -> Result<()> {
        let target = other.position();
        check_same_sequence(self.cursor.position(), target)?;
        if !self.cursor.seek(target.index()) {
            tracing::debug!(?target, "seek target beyond the end");
            return Err(IterError::Unreachable { target });
        }
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn IteratorWrapper<'a, T> + 'a> {
        Box::new(self.clone())
    }
}
