//! Type-erased iteration over borrowed sequences.
//!
//! An [`Iterable`] lets an API accept or return "a sequence of `T`" without
//! naming the container or iterator type behind it. Any container whose
//! shared reference iterates over `&E` can be erased with [`to_iterable`] or,
//! when the element should be viewed through [`Borrow`](std::borrow::Borrow),
//! with [`to_iterable_t`].

mod any_iter;
mod convert;
pub mod cursor;
mod error;
mod iterable;

pub use any_iter::{Adaptor, AnyIterator, IteratorWrapper};
pub use convert::{slice_iterable, to_iterable, to_iterable_t, to_iterable_with};
pub use error::{IterError, Result};
pub use iterable::{Iter, Iterable};

#[cfg(test)]
mod tests {
    use super::*;

    fn total(values: Iterable<u32>) -> u32 {
        values.into_iter().sum()
    }

    #[test]
    fn one_signature_accepts_any_container() {
        let vec = vec![1, 2, 3];
        let set: std::collections::BTreeSet<u32> = [4, 5].into_iter().collect();
        let list: std::collections::LinkedList<u32> = [6].into_iter().collect();
        assert_eq!(total(to_iterable(&vec)), 6);
        assert_eq!(total(to_iterable(&set)), 9);
        assert_eq!(total(to_iterable(&list)), 6);
        assert_eq!(total(slice_iterable(&vec[1..])), 5);
    }
}
