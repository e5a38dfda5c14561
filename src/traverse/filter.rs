use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::next_present;
use crate::array::ArrayLike;

pin_project! {
    /// Collects the elements of a sequence an async predicate accepts.
    ///
    /// This `struct` is created by the [`filter_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`filter_async`]: crate::traverse::ArrayLikeExt::filter_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct FilterAsync<'a, S: ?Sized, F, Fut>
    where
        S: ArrayLike,
    {
        seq: &'a S,
        predicate: F,
        #[pin]
        pending: Option<Fut>,
        accepted: Vec<&'a S::Item>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S: ArrayLike + ?Sized, F, Fut> FilterAsync<'a, S, F, Fut> {
    pub(super) fn new(seq: &'a S, predicate: F) -> Self {
        Self {
            seq,
            predicate,
            pending: None,
            accepted: vec![],
            index: 0,
            len: seq.len(),
            completed: false,
        }
    }
}

impl<'a, S, F, Fut> Future for FilterAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    type Output = Result<Vec<&'a S::Item>, Fut::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        let seq = *this.seq;
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let outcome = ready!(pending.try_poll(cx));
                this.pending.set(None);
                match outcome {
                    Ok(keep) => {
                        if keep {
                            // The slot was present when the predicate was called.
                            if let Some(item) = seq.get(*this.index) {
                                this.accepted.push(item);
                            }
                        }
                        *this.index += 1;
                    }
                    Err(err) => {
                        tracing::trace!(index = *this.index, "filter: predicate failed");
                        *this.completed = true;
                        return Poll::Ready(Err(err));
                    }
                }
            }

            match next_present(seq, this.index, *this.len) {
                Some(item) => {
                    let next = (this.predicate)(item, *this.index, seq);
                    this.pending.set(Some(next));
                }
                None => {
                    tracing::trace!(accepted = this.accepted.len(), "filter: done");
                    *this.completed = true;
                    return Poll::Ready(Ok(mem::take(this.accepted)));
                }
            }
        }
    }
}
