//! Sequential async traversal of array-like sequences.
//!
//! Each operation takes a callback that returns a future, and awaits that
//! future before it calls the callback again. Only one callback future per
//! operation is ever alive at a time, indices are visited in ascending
//! order, and the length of the sequence is read once, when the operation is
//! created.
//!
//! Callback futures resolve to a `Result`. The first `Err` ends the
//! operation with that same error and no further elements are visited.
//!
//! Holes (see [`ArrayLike`]) are skipped by every operation except
//! [`find`] and [`find_index`], which visit every index and pass the element
//! as an `Option`.
//!
//! ```
//! use async_seq::prelude::*;
//! use std::convert::Infallible;
//!
//! async_seq::runtime::block_on(async {
//!     let prices = vec![5, 10, 15];
//!     let found = prices
//!         .find_async(|price, _, _| async move { Ok::<_, Infallible>(price > Some(&7)) })
//!         .await;
//!     assert_eq!(found, Ok(Some(&10)));
//! });
//! ```

use futures_core::future::TryFuture;

use crate::array::ArrayLike;

mod every;
mod filter;
mod find;
mod find_index;
mod for_each;
mod map;
mod some;

pub use every::EveryAsync;
pub use filter::FilterAsync;
pub use find::FindAsync;
pub use find_index::FindIndexAsync;
pub use for_each::ForEachAsync;
pub use map::MapAsync;
pub use some::SomeAsync;

/// Extend [`ArrayLike`] sequences with sequential async traversals.
///
/// Every method captures the sequence's length and returns a future without
/// calling the callback. The callback is first invoked when the future is
/// polled.
pub trait ArrayLikeExt: ArrayLike {
    /// Calls `callback` for every element in order, awaiting each call
    /// before making the next.
    ///
    /// The callback receives the element, its index and the sequence. The
    /// values its futures resolve to are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use async_seq::prelude::*;
    /// use std::cell::RefCell;
    ///
    /// async_seq::runtime::block_on(async {
    ///     let seen = RefCell::new(vec![]);
    ///     ["a", "b", "c"]
    ///         .for_each_async(|item, index, _| {
    ///             seen.borrow_mut().push((index, *item));
    ///             async { Ok::<_, std::io::Error>(()) }
    ///         })
    ///         .await
    ///         .unwrap();
    ///     assert_eq!(seen.into_inner(), vec![(0, "a"), (1, "b"), (2, "c")]);
    /// });
    /// ```
    fn for_each_async<'a, F, Fut>(&'a self, callback: F) -> ForEachAsync<'a, Self, F, Fut>
    where
        F: FnMut(&'a Self::Item, usize, &'a Self) -> Fut,
        Fut: TryFuture,
    {
        ForEachAsync::new(self, callback)
    }

    /// Resolves to `true` if `predicate` accepts every element.
    ///
    /// Stops at the first element the predicate rejects. A sequence without
    /// elements resolves to `true`.
    ///
    /// # Example
    ///
    /// ```
    /// use async_seq::prelude::*;
    /// use std::convert::Infallible;
    ///
    /// async_seq::runtime::block_on(async {
    ///     let even = vec![2, 4, 6]
    ///         .every_async(|n, _, _| async move { Ok::<_, Infallible>(n % 2 == 0) })
    ///         .await;
    ///     assert_eq!(even, Ok(true));
    /// });
    /// ```
    fn every_async<'a, F, Fut>(&'a self, predicate: F) -> EveryAsync<'a, Self, F, Fut>
    where
        F: FnMut(&'a Self::Item, usize, &'a Self) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        EveryAsync::new(self, predicate)
    }

    /// Resolves to `true` if `predicate` accepts any element.
    ///
    /// Stops at the first element the predicate accepts. A sequence without
    /// elements resolves to `false`.
    fn some_async<'a, F, Fut>(&'a self, predicate: F) -> SomeAsync<'a, Self, F, Fut>
    where
        F: FnMut(&'a Self::Item, usize, &'a Self) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        SomeAsync::new(self, predicate)
    }

    /// Resolves to the elements `predicate` accepts, in order.
    ///
    /// The result never has holes, whatever the input looks like.
    ///
    /// # Example
    ///
    /// ```
    /// use async_seq::prelude::*;
    /// use async_seq::sparse;
    /// use std::convert::Infallible;
    ///
    /// async_seq::runtime::block_on(async {
    ///     let seq = sparse![1, _, 3, 4];
    ///     let odd = seq
    ///         .filter_async(|n, _, _| async move { Ok::<_, Infallible>(n % 2 == 1) })
    ///         .await;
    ///     assert_eq!(odd, Ok(vec![&1, &3]));
    /// });
    /// ```
    fn filter_async<'a, F, Fut>(&'a self, predicate: F) -> FilterAsync<'a, Self, F, Fut>
    where
        F: FnMut(&'a Self::Item, usize, &'a Self) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        FilterAsync::new(self, predicate)
    }

    /// Resolves to the first element `predicate` accepts.
    ///
    /// Unlike the other traversals this visits holes as well, passing `None`
    /// to the predicate for them. If the predicate accepts a hole the result
    /// is `None`, the same as when nothing matches.
    fn find_async<'a, F, Fut>(&'a self, predicate: F) -> FindAsync<'a, Self, F, Fut>
    where
        F: FnMut(Option<&'a Self::Item>, usize, &'a Self) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        FindAsync::new(self, predicate)
    }

    /// Resolves to the index of the first element `predicate` accepts, or
    /// `None` if there is none.
    ///
    /// Holes are visited like in [`find_async`](ArrayLikeExt::find_async).
    fn find_index_async<'a, F, Fut>(&'a self, predicate: F) -> FindIndexAsync<'a, Self, F, Fut>
    where
        F: FnMut(Option<&'a Self::Item>, usize, &'a Self) -> Fut,
        Fut: TryFuture<Ok = bool>,
    {
        FindIndexAsync::new(self, predicate)
    }

    /// Resolves to a sequence of the same length holding what `callback`
    /// produced for each element, at that element's index.
    ///
    /// Holes in the input stay holes in the output.
    ///
    /// # Example
    ///
    /// ```
    /// use async_seq::prelude::*;
    /// use async_seq::sparse;
    /// use std::convert::Infallible;
    ///
    /// async_seq::runtime::block_on(async {
    ///     let seq = sparse![1, _, 3];
    ///     let doubled = seq
    ///         .map_async(|n, _, _| async move { Ok::<_, Infallible>(n * 2) })
    ///         .await;
    ///     assert_eq!(doubled, Ok(sparse![2, _, 6]));
    /// });
    /// ```
    fn map_async<'a, F, Fut>(&'a self, callback: F) -> MapAsync<'a, Self, F, Fut>
    where
        F: FnMut(&'a Self::Item, usize, &'a Self) -> Fut,
        Fut: TryFuture,
    {
        MapAsync::new(self, callback)
    }
}

impl<S: ArrayLike + ?Sized> ArrayLikeExt for S {}

/// Calls `callback` for every element of `seq` in order.
///
/// See [`ArrayLikeExt::for_each_async`].
pub fn for_each<'a, S, F, Fut>(seq: &'a S, callback: F) -> ForEachAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture,
{
    ForEachAsync::new(seq, callback)
}

/// Checks that `predicate` accepts every element of `seq`.
///
/// See [`ArrayLikeExt::every_async`].
pub fn every<'a, S, F, Fut>(seq: &'a S, predicate: F) -> EveryAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    EveryAsync::new(seq, predicate)
}

/// Checks that `predicate` accepts some element of `seq`.
///
/// See [`ArrayLikeExt::some_async`].
pub fn some<'a, S, F, Fut>(seq: &'a S, predicate: F) -> SomeAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    SomeAsync::new(seq, predicate)
}

/// Collects the elements of `seq` that `predicate` accepts.
///
/// See [`ArrayLikeExt::filter_async`].
pub fn filter<'a, S, F, Fut>(seq: &'a S, predicate: F) -> FilterAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    FilterAsync::new(seq, predicate)
}

/// Finds the first element of `seq` that `predicate` accepts.
///
/// See [`ArrayLikeExt::find_async`].
pub fn find<'a, S, F, Fut>(seq: &'a S, predicate: F) -> FindAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Option<&'a S::Item>, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    FindAsync::new(seq, predicate)
}

/// Finds the index of the first element of `seq` that `predicate` accepts.
///
/// See [`ArrayLikeExt::find_index_async`].
pub fn find_index<'a, S, F, Fut>(seq: &'a S, predicate: F) -> FindIndexAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Option<&'a S::Item>, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    FindIndexAsync::new(seq, predicate)
}

/// Maps every element of `seq` through `callback`, keeping positions.
///
/// See [`ArrayLikeExt::map_async`].
pub fn map<'a, S, F, Fut>(seq: &'a S, callback: F) -> MapAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture,
{
    MapAsync::new(seq, callback)
}

/// Moves `index` forward to the next element of `seq` below `len`, skipping
/// holes.
fn next_present<'a, S>(seq: &'a S, index: &mut usize, len: usize) -> Option<&'a S::Item>
where
    S: ArrayLike + ?Sized,
{
    while *index < len {
        if let Some(item) = seq.get(*index) {
            return Some(item);
        }
        *index += 1;
    }
    None
}
