//! A minimal executor.
//!
//! The traversals in this crate work on any executor. [`block_on()`] is a
//! small single-threaded one, used by the [`main`](crate::main) and
//! [`test`](crate::test) attributes, that parks the current thread while the
//! future it drives is pending.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod block_on;

pub use block_on::{block_on, try_block_on, AlreadyRunning};
