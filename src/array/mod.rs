//! Ordered, integer-indexed sequences that may contain holes.
//!
//! [`ArrayLike`] is the contract every traversal in this crate works against:
//! a length and a way to look up the element at an index. An index inside
//! `0..len` for which [`ArrayLike::get`] returns `None` is a *hole*. The
//! standard collections never have holes; [`Sparse`] does.
//!
//! [`Slots`] is the output side of `map`. It lets the mapped sequence keep
//! the same positions as its source, holes included.

use std::collections::VecDeque;

mod sparse;

pub use sparse::{Present, Sparse};

/// An ordered sequence addressable by the index range `0..len`.
pub trait ArrayLike {
    /// The type of the elements in the sequence.
    type Item;

    /// The sequence `map` produces from this one.
    ///
    /// A type whose [`get`](ArrayLike::get) can return `None` for an index
    /// inside `0..len` must pick a buffer that can hold holes, such as
    /// [`Sparse<U>`](Sparse). `Vec<U>` is only valid for dense sequences;
    /// `map` panics if it has to skip a position of a `Vec` buffer.
    type Mapped<U>: Slots<U>;

    /// Returns the length of the index range, holes included.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if the index is a hole or
    /// out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the index range is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` is in range and holds an element.
    fn contains_index(&self, index: usize) -> bool {
        index < self.len() && self.get(index).is_some()
    }
}

/// A positional output buffer.
///
/// `map` creates one with [`Slots::with_len`] and fills the positions of its
/// source's elements, in ascending order, with [`Slots::set`].
pub trait Slots<T> {
    /// Creates a buffer of `len` unset positions.
    fn with_len(len: usize) -> Self;

    /// Stores `value` at `index`.
    fn set(&mut self, index: usize, value: T);
}

/// A dense buffer: positions are filled front to back, and none may be
/// skipped.
impl<T> Slots<T> for Vec<T> {
    fn with_len(len: usize) -> Self {
        Vec::with_capacity(len)
    }

    /// # Panics
    ///
    /// Panics if `index` is not the current length, which means the source
    /// sequence had a hole at a position a `Vec` cannot leave unset.
    fn set(&mut self, index: usize, value: T) {
        assert!(
            index == self.len(),
            "cannot leave position {} unset in a dense `Vec` map output; \
             sequences with holes need a sparse `ArrayLike::Mapped` such as `Sparse<U>`",
            self.len(),
        );
        self.push(value);
    }
}

impl<T> ArrayLike for [T] {
    type Item = T;
    type Mapped<U> = Vec<U>;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> ArrayLike for [T; N] {
    type Item = T;
    type Mapped<U> = Vec<U>;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ArrayLike for Vec<T> {
    type Item = T;
    type Mapped<U> = Vec<U>;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ArrayLike for VecDeque<T> {
    type Item = T;
    type Mapped<U> = Vec<U>;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    type Item = A::Item;
    type Mapped<U> = A::Mapped<U>;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dense_collections_have_no_holes() {
        let vec = vec![1, 2, 3];
        let array = [1, 2, 3];
        let deque: VecDeque<_> = vec.iter().copied().collect();

        for index in 0..3 {
            assert!(ArrayLike::contains_index(&vec, index));
            assert!(ArrayLike::contains_index(&array, index));
            assert!(ArrayLike::contains_index(&deque, index));
            assert!(ArrayLike::contains_index(vec.as_slice(), index));
        }
        assert!(!ArrayLike::contains_index(&vec, 3));
        assert_eq!(ArrayLike::get(&deque, 2), Some(&3));
    }

    #[test]
    fn references_forward() {
        let vec = vec!["a", "b"];
        let by_ref = &vec;
        assert_eq!(ArrayLike::len(&by_ref), 2);
        assert_eq!(ArrayLike::get(&by_ref, 1), Some(&"b"));
        assert!(!ArrayLike::is_empty(&by_ref));
    }

    #[test]
    fn vec_slots_fill_in_order() {
        let mut slots = <Vec<u8> as Slots<u8>>::with_len(2);
        slots.set(0, 10);
        slots.set(1, 20);
        assert_eq!(slots, vec![10, 20]);
    }

    #[test]
    #[should_panic(expected = "cannot leave position 1 unset")]
    fn vec_slots_reject_skipped_position() {
        let mut slots = <Vec<u8> as Slots<u8>>::with_len(3);
        slots.set(0, 10);
        slots.set(2, 30);
    }
}
