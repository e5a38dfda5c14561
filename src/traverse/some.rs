use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::next_present;
use crate::array::ArrayLike;

pin_project! {
    /// Checks whether an async predicate holds for any element of a sequence,
    /// stopping at the first element it accepts.
    ///
    /// This `struct` is created by the [`some_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`some_async`]: crate::traverse::ArrayLikeExt::some_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct SomeAsync<'a, S: ?Sized, F, Fut> {
        seq: &'a S,
        predicate: F,
        #[pin]
        pending: Option<Fut>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S: ArrayLike + ?Sized, F, Fut> SomeAsync<'a, S, F, Fut> {
    pub(super) fn new(seq: &'a S, predicate: F) -> Self {
        Self {
            seq,
            predicate,
            pending: None,
            index: 0,
            len: seq.len(),
            completed: false,
        }
    }
}

impl<'a, S, F, Fut> Future for SomeAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    type Output = Result<bool, Fut::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let outcome = ready!(pending.try_poll(cx));
                this.pending.set(None);
                match outcome {
                    Ok(false) => *this.index += 1,
                    Ok(true) => {
                        tracing::trace!(index = *this.index, "some: predicate accepted");
                        *this.completed = true;
                        return Poll::Ready(Ok(true));
                    }
                    Err(err) => {
                        tracing::trace!(index = *this.index, "some: predicate failed");
                        *this.completed = true;
                        return Poll::Ready(Err(err));
                    }
                }
            }

            let seq = *this.seq;
            match next_present(seq, this.index, *this.len) {
                Some(item) => {
                    let next = (this.predicate)(item, *this.index, seq);
                    this.pending.set(Some(next));
                }
                None => {
                    *this.completed = true;
                    return Poll::Ready(Ok(false));
                }
            }
        }
    }
}
