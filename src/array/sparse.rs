use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::{ArrayLike, Slots};

/// Creates a [`Sparse`] from a list of elements, where `_` marks a hole.
///
/// # Examples
///
/// ```
/// use async_seq::{sparse, ArrayLike};
///
/// let seq = sparse![1, _, 3];
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.get(1), None);
/// assert_eq!(seq.get(2), Some(&3));
/// ```
#[macro_export]
macro_rules! sparse {
    (@slots [$($slots:expr,)*]) => {
        $crate::array::Sparse::from_slots(::std::vec![$($slots,)*])
    };
    (@slots [$($slots:expr,)*] _ $(, $($rest:tt)*)?) => {
        $crate::sparse!(@slots [$($slots,)* ::core::option::Option::None,] $($($rest)*)?)
    };
    (@slots [$($slots:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::sparse!(@slots [$($slots,)* ::core::option::Option::Some($value),] $($($rest)*)?)
    };
    () => {
        $crate::array::Sparse::new()
    };
    ($($rest:tt)+) => {
        $crate::sparse!(@slots [] $($rest)+)
    };
}

/// An owned sequence in which any index may be a hole.
///
/// A hole is an index inside `0..len` that has no element. Holes count
/// toward the length but are skipped by most traversals. Removing an element
/// leaves a hole behind instead of shifting the elements after it, and
/// setting an element past the end extends the sequence with holes.
///
/// # Examples
///
/// ```
/// use async_seq::Sparse;
///
/// let mut seq = Sparse::from(vec!["a", "b", "c"]);
/// seq.remove(1);
/// seq.set(4, "e");
///
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.holes(), 2);
/// assert_eq!(seq.into_dense(), vec!["a", "c", "e"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sparse<T> {
    slots: Vec<Option<T>>,
}

impl<T> Sparse<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a sequence of `len` holes.
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots }
    }

    /// Creates a sequence from its slots, where `None` is a hole.
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }

    /// Returns the slots of the sequence, where `None` is a hole.
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }

    /// Returns the elements in order, dropping the holes.
    pub fn into_dense(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }

    /// Returns the length of the sequence, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the sequence has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of holes.
    pub fn holes(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Returns `true` if every index holds an element.
    pub fn is_dense(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the element at `index`, or `None` for holes and out of range
    /// indices.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Appends an element.
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Appends a hole.
    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    /// Stores `value` at `index`, returning the element it replaced.
    ///
    /// If `index` is past the end, the sequence is first extended with holes
    /// so that its length becomes `index + 1`.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Takes the element at `index` out, leaving a hole. The length does not
    /// change.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Shortens the sequence to `len`, dropping everything after it.
    pub fn truncate(&mut self, len: usize) {
        self.slots.truncate(len);
    }

    /// Iterates over every slot, yielding `None` for holes.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<&T>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates over the elements together with their index, skipping holes.
    pub fn present(&self) -> Present<'_, T> {
        Present {
            slots: self.slots.iter().enumerate(),
        }
    }
}

impl<T> Default for Sparse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sparse<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl<T> FromIterator<Option<T>> for Sparse<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T> ArrayLike for Sparse<T> {
    type Item = T;
    type Mapped<U> = Sparse<U>;

    fn len(&self) -> usize {
        Sparse::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        Sparse::get(self, index)
    }
}

impl<T> Slots<T> for Sparse<T> {
    fn with_len(len: usize) -> Self {
        Sparse::with_len(len)
    }

    fn set(&mut self, index: usize, value: T) {
        Sparse::set(self, index, value);
    }
}

/// An iterator over the elements of a [`Sparse`] and their indices.
///
/// This `struct` is created by [`Sparse::present`].
#[derive(Debug, Clone)]
pub struct Present<'a, T> {
    slots: Enumerate<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Present<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<'a, T> DoubleEndedIterator for Present<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.slots.next_back() {
            if let Some(value) = slot {
                return Some((index, value));
            }
        }
        None
    }
}

impl<T> FusedIterator for Present<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literal_marks_holes() {
        let seq = sparse![1, _, 3, _];
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.holes(), 2);
        assert_eq!(seq.into_slots(), vec![Some(1), None, Some(3), None]);

        let empty: Sparse<u8> = sparse![];
        assert!(empty.is_empty());

        let trailing = sparse![_, -1,];
        assert_eq!(trailing.into_slots(), vec![None, Some(-1)]);
    }

    #[test]
    fn set_past_the_end_grows_with_holes() {
        let mut seq = Sparse::new();
        assert_eq!(seq.set(2, 'c'), None);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.holes(), 2);
        assert_eq!(seq.set(2, 'd'), Some('c'));
        assert!(!seq.is_dense());
    }

    #[test]
    fn remove_leaves_a_hole() {
        let mut seq = Sparse::from(vec![1, 2, 3]);
        assert!(seq.is_dense());
        assert_eq!(seq.remove(1), Some(2));
        assert_eq!(seq.remove(1), None);
        assert_eq!(seq.remove(7), None);
        assert_eq!(seq.len(), 3);
        assert!(!seq.contains_index(1));
        assert!(seq.contains_index(2));
    }

    #[test]
    fn present_skips_holes_both_ways() {
        let seq = sparse!["a", _, "c", _, "e"];
        let forward: Vec<_> = seq.present().collect();
        assert_eq!(forward, vec![(0, &"a"), (2, &"c"), (4, &"e")]);

        let backward: Vec<_> = seq.present().rev().map(|(index, _)| index).collect();
        assert_eq!(backward, vec![4, 2, 0]);
    }

    #[test]
    fn slots_keep_positions() {
        let mut slots = <Sparse<u8> as Slots<u8>>::with_len(3);
        Slots::set(&mut slots, 2, 9);
        assert_eq!(slots, sparse![_, _, 9]);
        assert_eq!(slots.slots().count(), 3);
    }
}
