use std::{borrow::Borrow, iter::FusedIterator};

use crate::{any_iter::AnyIterator, cursor::Cursor};

/// A pair of erased iterators marking the bounds of a borrowed sequence.
///
/// The range never owns the elements; it borrows the originating container
/// for `'a`, which keeps the container alive and unmodified for as long as
/// the range exists.
pub struct Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    begin: AnyIterator<'a, T>,
    end: AnyIterator<'a, T>,
}

impl<'a, T> Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    pub fn new(begin: AnyIterator<'a, T>, end: AnyIterator<'a, T>) -> Self {
        Iterable { begin, end }
    }

    pub fn from_cursors<C>(begin: C, end: C) -> Self
    where
        C: Cursor<'a> + 'a,
        C::Item: Borrow<T>,
    {
        tracing::trace!(
            begin = ?begin.position(),
            end = ?end.position(),
            "erasing cursor range"
        );
        Iterable::new(AnyIterator::new(begin), AnyIterator::new(end))
    }

    pub fn begin(&self) -> AnyIterator<'a, T> {
        self.begin.clone()
    }

    pub fn end(&self) -> AnyIterator<'a, T> {
        self.end.clone()
    }

    /// Panics if the bounds are empty handles or belong to different
    /// sequences.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            front: self.begin(),
            end: self.end(),
        }
    }

    pub fn into_parts(self) -> (AnyIterator<'a, T>, AnyIterator<'a, T>) {
        (self.begin, self.end)
    }
}

impl<'a, T> Clone for Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    fn clone(&self) -> Self {
        Iterable::new(self.begin(), self.end())
    }
}

impl<'a, T> std::fmt::Debug for Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iterable")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

/// Walks an [`Iterable`] from its begin to its end.
///
/// Panics if the bounds are empty handles or belong to different sequences.
pub struct Iter<'a, T>
where
    T: ?Sized + 'a,
{
    front: AnyIterator<'a, T>,
    end: AnyIterator<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: ?Sized + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.end {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.front.position(), self.end.position()) {
            (Ok(front), Ok(end))
                if front.same_sequence(&end) && front.index() <= end.index() =>
            {
                let remaining = end.index() - front.index();
                (remaining, Some(remaining))
            }
            _ => (0, None),
        }
    }
}

impl<'a, T> std::fmt::Debug for Iter<'a, T>
where
    T: ?Sized + 'a,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> where T: ?Sized + 'a {}

impl<'a, T> Clone for Iter<'a, T>
where
    T: ?Sized + 'a,
{
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            end: self.end.clone(),
        }
    }
}

impl<'a, T> IntoIterator for Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, end) = self.into_parts();
        Iter { front, end }
    }
}

impl<'a, T> IntoIterator for &Iterable<'a, T>
where
    T: ?Sized + 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{IterCursor, SliceCursor};
    use std::collections::LinkedList;

    #[test]
    fn iterates_in_order() {
        let data = [10, 20, 30];
        let range: Iterable<i32> =
            Iterable::from_cursors(SliceCursor::begin(&data), SliceCursor::end(&data));
        let mut seen = Vec::new();
        for value in &range {
            seen.push(*value);
        }
        assert_eq!(seen, vec![10, 20, 30]);
        assert!(!range.is_empty());
    }

    #[test]
    fn begin_and_end_are_copies() {
        let list: LinkedList<char> = "abc".chars().collect();
        let begin = IterCursor::begin(list.iter());
        let end = IterCursor::end_from(&begin);
        let range: Iterable<char> = Iterable::from_cursors(begin, end);

        let mut first = range.begin();
        first.advance().advance();
        assert_eq!(*first, 'c');
        assert_eq!(*range.begin(), 'a');
        first.advance();
        assert!(first == range.end());
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let data = vec![1, 2, 3, 4];
        let range: Iterable<i32> =
            Iterable::from_cursors(SliceCursor::begin(&data), SliceCursor::end(&data));
        let mut iter = range.iter();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }

    #[test]
    fn size_hint_unknown_for_mismatched_bounds() {
        let data = [1, 2, 3];
        let range: Iterable<i32> = Iterable::new(
            AnyIterator::new(SliceCursor::begin(&data)),
            AnyIterator::new(SliceCursor::end(&data[..2])),
        );
        assert_eq!(range.iter().size_hint(), (0, None));

        let placeholder: Iterable<i32> = Iterable::new(AnyIterator::empty(), AnyIterator::empty());
        assert_eq!(placeholder.iter().size_hint(), (0, None));
    }

    #[test]
    fn exhausted_iter_stays_exhausted() {
        let data = [1];
        let range: Iterable<i32> =
            Iterable::from_cursors(SliceCursor::begin(&data), SliceCursor::end(&data));
        let mut iter = range.into_iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
