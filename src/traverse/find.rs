use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use crate::array::ArrayLike;

pin_project! {
    /// Searches a sequence for the first element an async predicate accepts.
    ///
    /// This `struct` is created by the [`find_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`find_async`]: crate::traverse::ArrayLikeExt::find_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct FindAsync<'a, S: ?Sized, F, Fut> {
        seq: &'a S,
        predicate: F,
        #[pin]
        pending: Option<Fut>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S: ArrayLike + ?Sized, F, Fut> FindAsync<'a, S, F, Fut> {
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

impl<'a, S, F, Fut> Future for FindAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(Option<&'a S::Item>, usize, &'a S) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    type Output = Result<Option<&'a S::Item>, Fut::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        let seq = *this.seq;
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let outcome = ready!(pending.try_poll(cx));
                this.pending.set(None);
                match outcome {
                    Ok(false) => *this.index += 1,
                    Ok(true) => {
                        tracing::trace!(index = *this.index, "find: predicate accepted");
                        *this.completed = true;
                        return Poll::Ready(Ok(seq.get(*this.index)));
                    }
                    Err(err) => {
                        tracing::trace!(index = *this.index, "find: predicate failed");
                        *this.completed = true;
                        return Poll::Ready(Err(err));
                    }
                }
            }

            // Holes are visited too; the predicate sees them as `None`.
            if *this.index < *this.len {
                let next = (this.predicate)(seq.get(*this.index), *this.index, seq);
                this.pending.set(Some(next));
            } else {
                *this.completed = true;
                return Poll::Ready(Ok(None));
            }
        }
    }
}
