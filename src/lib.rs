#![warn(future_incompatible, unreachable_pub)]
//#![warn(missing_docs)]

//! Sequential async counterparts of the array traversal methods.
//!
//! This crate provides `for_each`, `every`, `some`, `filter`, `find`,
//! `find_index` and `map` for sequences whose callback returns a future. Each
//! callback is awaited before the traversal moves on to the next index, so
//! the operations keep the ordering and short-circuit behavior of their
//! synchronous counterparts. Callbacks never run concurrently with each
//! other.
//!
//! # Examples
//!
//! ```rust,no_run
#![doc = include_str!("../demos/traverse.rs")]
//! ```
//!
//! # Design Decisions
//!
//! The operations are exposed through the [`ArrayLikeExt`] extension trait,
//! which is only in scope where it is imported, and as free functions in
//! [`traverse`] that take the sequence as their first argument. Nothing is
//! installed on any existing type.
//!
//! Sequences may have holes. [`Sparse`] models an index that is in range but
//! has no element; the standard collections are always dense. Holes are
//! skipped by every operation except [`find_async`] and
//! [`find_index_async`], which visit every position and hand the callback an
//! `Option<&T>`.
//!
//! Callbacks return a future that resolves to a `Result`. The first `Err`
//! ends the traversal and is returned to the caller untouched. There is no
//! crate error type: the error belongs to the callback.
//!
//! There is no equivalent of a receiver binding (`thisArg`). Closures capture
//! whatever context they need.
//!
//! [`find_async`]: ArrayLikeExt::find_async
//! [`find_index_async`]: ArrayLikeExt::find_index_async

extern crate self as async_seq;

pub mod array;
pub mod runtime;
pub mod task;
pub mod traverse;

pub use array::{ArrayLike, Slots, Sparse};
pub use traverse::ArrayLikeExt;

pub use async_seq_macro::attr_macro_main as main;
pub use async_seq_macro::attr_macro_test as test;

pub mod prelude {
    pub use crate::traverse::ArrayLikeExt as _;
}
