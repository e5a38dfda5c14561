use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::TryFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::next_present;
use crate::array::{ArrayLike, Slots};

pin_project! {
    /// Maps every element of a sequence through an async callback, keeping
    /// each result at the index of its source.
    ///
    /// This `struct` is created by the [`map_async`] method on
    /// [`ArrayLikeExt`]. See its documentation for more.
    ///
    /// [`map_async`]: crate::traverse::ArrayLikeExt::map_async
    /// [`ArrayLikeExt`]: crate::traverse::ArrayLikeExt
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct MapAsync<'a, S: ?Sized, F, Fut>
    where
        S: ArrayLike,
        Fut: TryFuture,
    {
        seq: &'a S,
        callback: F,
        #[pin]
        pending: Option<Fut>,
        mapped: <S as ArrayLike>::Mapped<<Fut as TryFuture>::Ok>,
        index: usize,
        len: usize,
        completed: bool,
    }
}

impl<'a, S, F, Fut> MapAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    Fut: TryFuture,
{
    pub(super) fn new(seq: &'a S, callback: F) -> Self {
        let len = seq.len();
        Self {
            seq,
            callback,
            pending: None,
            mapped: <S::Mapped<Fut::Ok> as Slots<Fut::Ok>>::with_len(len),
            index: 0,
            len,
            completed: false,
        }
    }
}

impl<'a, S, F, Fut> Future for MapAsync<'a, S, F, Fut>
where
    S: ArrayLike + ?Sized,
    F: FnMut(&'a S::Item, usize, &'a S) -> Fut,
    Fut: TryFuture,
{
    type Output = Result<S::Mapped<Fut::Ok>, Fut::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        loop {
            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let outcome = ready!(pending.try_poll(cx));
                this.pending.set(None);
                match outcome {
                    Ok(value) => {
                        this.mapped.set(*this.index, value);
                        *this.index += 1;
                    }
                    Err(err) => {
                        tracing::trace!(index = *this.index, "map: callback failed");
                        *this.completed = true;
                        return Poll::Ready(Err(err));
                    }
                }
            }

            let seq = *this.seq;
            match next_present(seq, this.index, *this.len) {
                Some(item) => {
                    let next = (this.callback)(item, *this.index, seq);
                    this.pending.set(Some(next));
                }
                None => {
                    tracing::trace!(len = *this.len, "map: done");
                    *this.completed = true;
                    let empty = <S::Mapped<Fut::Ok> as Slots<Fut::Ok>>::with_len(0);
                    return Poll::Ready(Ok(mem::replace(this.mapped, empty)));
                }
            }
        }
    }
}
