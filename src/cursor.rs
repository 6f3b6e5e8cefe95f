//! Native positions inside borrowed sequences.
//!
//! A [`Cursor`] is the statically-typed thing that gets erased: a clonable
//! position that can be dereferenced and stepped forward, and that knows
//! where it sits relative to the start of its sequence.

/// Identity of a cursor position.
///
/// A sequence is identified by `origin`, the address of its first element
/// (0 for an empty one), together with its length. `index` is the number of
/// steps taken from the beginning. Two positions are only comparable when
/// they identify the same sequence.
///
/// The identity cannot separate two views that start at the same element and
/// have the same length but visit elements in a different order, nor
/// sequences of zero-sized elements, which all share one address. Such views
/// compare by index alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    origin: usize,
    len: usize,
    index: usize,
}

impl Position {
    pub(crate) fn new(origin: usize, len: usize, index: usize) -> Self {
        Position { origin, len, index }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Length of the sequence, which is also the index of its end.
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_end(&self) -> bool {
        self.index == self.len
    }

    pub fn same_sequence(&self, other: &Position) -> bool {
        self.origin == other.origin && self.len == other.len
    }
}

pub(crate) fn origin_of<E>(first: Option<&E>) -> usize
where
    E: ?Sized,
{
    first.map_or(0, |elem| elem as *const E as *const () as usize)
}

/// A forward position within a sequence borrowed for `'a`.
///
/// Positions are only built inside this crate, so the cursors here are the
/// only implementations. Other containers are erased through [`IterCursor`].
pub trait Cursor<'a>: Clone {
    type Item: ?Sized + 'a;

    /// The element at this position, or `None` at the end.
    fn current(&self) -> Option<&'a Self::Item>;

    /// Moves one element forward. Does nothing at the end.
    fn advance(&mut self);

    fn position(&self) -> Position;

    /// Repositions the cursor `index` steps from the beginning. Returns
    /// `false` and leaves the cursor in place if `index` is past the end.
    fn seek(&mut self, index: usize) -> bool;
}

/// An index into a borrowed slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(slice: &'a [T]) -> Self {
        SliceCursor { slice, index: 0 }
    }

    pub fn end(slice: &'a [T]) -> Self {
        SliceCursor {
            slice,
            index: slice.len(),
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> std::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor<'a> for SliceCursor<'a, T> {
    type Item = T;

    fn current(&self) -> Option<&'a T> {
        self.slice.get(self.index)
    }

    fn advance(&mut self) {
        if self.index < self.slice.len() {
            self.index += 1;
        }
    }

    fn position(&self) -> Position {
        Position::new(origin_of(self.slice.first()), self.slice.len(), self.index)
    }

    fn seek(&mut self, index: usize) -> bool {
        if index > self.slice.len() {
            return false;
        }
        self.index = index;
        true
    }
}

/// A cursor over any clonable iterator of references.
///
/// This is how hashed, tree and linked containers are erased: their std
/// iterators are cheap to clone, so a position is an iterator plus the
/// element it has already yielded. The starting iterator is kept so that
/// seeking backwards can replay from the beginning.
pub struct IterCursor<I>
where
    I: Iterator,
{
    start: I,
    iter: I,
    head: Option<I::Item>,
    index: usize,
    len: usize,
    origin: usize,
}

impl<'a, I, E> IterCursor<I>
where
    I: Iterator<Item = &'a E> + Clone,
    E: ?Sized + 'a,
{
    /// Walks a copy of `iter` once to learn the sequence length.
    pub fn begin(iter: I) -> Self {
        let start = iter.clone();
        let len = iter.clone().count();
        let mut iter = iter;
        let head = iter.next();
        IterCursor {
            start,
            iter,
            head,
            index: 0,
            len,
            origin: origin_of(head),
        }
    }

    /// Derives the end position of the sequence `begin` walks over.
    pub fn end_from(begin: &Self) -> Self {
        let mut end = begin.clone();
        end.head = None;
        end.index = end.len;
        end
    }

    fn restart(&mut self) {
        self.iter = self.start.clone();
        self.head = self.iter.next();
        self.index = 0;
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        IterCursor {
            start: self.start.clone(),
            iter: self.iter.clone(),
            head: self.head.clone(),
            index: self.index,
            len: self.len,
            origin: self.origin,
        }
    }
}

impl<I> std::fmt::Debug for IterCursor<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor")
            .field("index", &self.index)
            .field("at_end", &self.head.is_none())
            .finish()
    }
}

impl<'a, I, E> Cursor<'a> for IterCursor<I>
where
    I: Iterator<Item = &'a E> + Clone,
    E: ?Sized + 'a,
{
    type Item = E;

    fn current(&self) -> Option<&'a E> {
        self.head
    }

    fn advance(&mut self) {
        if self.head.is_some() {
            self.head = self.iter.next();
            self.index += 1;
        }
    }

    fn position(&self) -> Position {
        Position::new(self.origin, self.len, self.index)
    }

    fn seek(&mut self, index: usize) -> bool {
        if index > self.len {
            return false;
        }
        if index < self.index {
            self.restart();
        }
        while self.index < index && self.head.is_some() {
            self.advance();
        }
        true
    }
}
