use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::next_present;
use crate::array::ArrayLike;

pin_project! {
    /// Checks whether an async predicate holds for every element of a
    /// sequence, stopping at the first element it rejects.
    ///
    /// This `struct` is created by the [`every_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`every_async`]: crate::traverse::ArrayLikeExt::every_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct EveryAsync<'a, S: ?Sized, F, Fut> {
        seq: &'a S,
        predicate: F,
        #[pin]
        pending: Option<Fut>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S: ArrayLike + ?Sized, F, Fut> EveryAsync<'a, S, F, Fut> {
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

impl<'a, S, F, Fut> Future for EveryAsync<'a, S, F, Fut>
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
                    Ok(true) => *this.index += 1,
                    Ok(false) => {
                        tracing::trace!(index = *this.index, "every: predicate rejected");
                        *this.completed = true;
                        return Poll::Ready(Ok(false));
                    }
                    Err(err) => {
                        tracing::trace!(index = *this.index, "every: predicate failed");
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
                    return Poll::Ready(Ok(true));
                }
            }
        }
    }
}
