//! Helpers that erase a container's native iteration into an [`Iterable`].
//!
//! The container is only borrowed; the returned range lives no longer than
//! that borrow.

use std::borrow::Borrow;

use crate::{
    cursor::{IterCursor, SliceCursor},
    iterable::Iterable,
};

/// Erases `data` to a range over `T`, where each element borrows as `T`.
///
/// ```
/// let names = vec![String::from("ada"), String::from("grace")];
/// let range = anyiter::to_iterable_t::<str, _, _>(&names);
/// assert_eq!(range.iter().map(str::len).sum::<usize>(), 8);
/// ```
pub fn to_iterable_t<'a, T, C, E>(data: &'a C) -> Iterable<'a, T>
where
    T: ?Sized + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a E>,
    <&'a C as IntoIterator>::IntoIter: Clone + 'a,
    E: Borrow<T> + ?Sized + 'a,
{
    to_iterable_with(data.into_iter())
}

/// Erases `data` to a range over its own element type.
pub fn to_iterable<'a, C, E>(data: &'a C) -> Iterable<'a, E>
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a E>,
    <&'a C as IntoIterator>::IntoIter: Clone + 'a,
    E: ?Sized + 'a,
{
    to_iterable_t::<E, C, E>(data)
}

/// Erases any clonable iterator of references, such as map keys or values.
///
/// Finding the end walks a copy of `iter` once.
pub fn to_iterable_with<'a, T, I, E>(iter: I) -> Iterable<'a, T>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a E> + Clone + 'a,
    E: Borrow<T> + ?Sized + 'a,
{
    let begin = IterCursor::begin(iter);
    let end = IterCursor::end_from(&begin);
    Iterable::from_cursors(begin, end)
}

/// Erases a slice without walking it.
pub fn slice_iterable<T>(data: &[T]) -> Iterable<'_, T> {
    Iterable::from_cursors(SliceCursor::begin(data), SliceCursor::end(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn vec_round_trips_in_order() {
        let data = vec![3, 1, 2];
        let collected: Vec<i32> = to_iterable(&data).into_iter().copied().collect();
        assert_eq!(collected, data);
    }

    #[test]
    fn empty_container_is_empty_range() {
        let data: Vec<u8> = Vec::new();
        let range = to_iterable(&data);
        assert!(range.is_empty());
        assert!(range.begin() == range.end());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn hash_set_yields_every_element() {
        let set: HashSet<&str> = ["x", "y", "z"].into_iter().collect();
        let range = to_iterable(&set);
        let mut seen: Vec<&str> = range.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["x", "y", "z"]);
    }

    #[test]
    fn map_values_through_iterator() {
        let map: BTreeMap<u32, String> = [(2, "two".to_string()), (1, "one".to_string())]
            .into_iter()
            .collect();
        let range = to_iterable_with::<str, _, _>(map.values());
        let seen: Vec<&str> = range.iter().collect();
        assert_eq!(seen, vec!["one", "two"]);
    }

    #[test]
    fn slice_and_container_views_agree() {
        let data = vec![5u16, 6, 7];
        let by_slice = slice_iterable(&data);
        let by_container = to_iterable(&data);

        let mut it = by_slice.begin();
        it.advance();
        let mut other = by_container.begin();
        assert!(it != other);
        other.advance();
        assert!(it == other);
        assert!(by_slice.end() == by_container.end());
    }

    #[test]
    fn unsized_slice_container() {
        let data: &[char] = &['q', 'r'];
        let range = to_iterable(data);
        assert_eq!(range.iter().collect::<String>(), "qr");
    }
}
