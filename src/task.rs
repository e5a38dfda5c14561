//! Types and Traits for working with asynchronous tasks.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Suspends the current task once, waking it again right away.
///
/// Awaiting this inside a callback gives the traversal a real suspension
/// point, which lets other futures on the same executor make progress.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

/// Suspends the current task once.
///
/// This `struct` is created by the [`yield_now`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
