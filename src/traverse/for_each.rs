use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::next_present;
use crate::array::ArrayLike;

pin_project! {
    /// Runs an async callback for every element of a sequence, one after the
    /// other.
    ///
    /// This `struct` is created by the [`for_each_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`for_each_async`]: crate::traverse::ArrayLikeExt::for_each_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct ForEachAsync<'a, S: ?Sized, F, Fut> {
        seq: &'a S,
        callback: F,
        #[pin]
        pending: Option<Fut>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S: ArrayLike + ?Sized, F, Fut> ForEachAsync<'a, S, F, Fut> {
    pub(super) fn new(seq: &'a S, callback: F) -> Self {
        Self {
            seq,
            callback,
            pending: None,
            index: 0,
            len: seq.len(),
            completed: false,
        }
    }
}

impl<'a, S, F, Fut> Future for ForEachAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture,
{
    type Output = Result<(), Fut::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let outcome = ready!(pending.try_poll(cx));
                this.pending.set(None);
                if let Err(err) = outcome {
                    tracing::trace!(index = *this.index, "for_each: callback failed");
                    *this.completed = true;
                    return Poll::Ready(Err(err));
                }
                *this.index += 1;
            }

            let seq = *this.seq;
            match next_present(seq, this.index, *this.len) {
                Some(item) => {
                    let next = (this.callback)(item, *this.index, seq);
                    this.pending.set(Some(next));
                }
                None => {
                    tracing::trace!(len = *this.len, "for_each: done");
                    *this.completed = true;
                    return Poll::Ready(Ok(()));
                }
            }
        }
    }
}
