use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use anyhow::{ensure, Result};
use async_seq::prelude::*;
use async_seq::sparse;
use async_seq::task::yield_now;

#[async_seq::test]
async fn visits_in_order() -> Result<()> {
    let seen = RefCell::new(vec![]);
    let seq: VecDeque<_> = ["a", "b", "c"].into_iter().collect();
    seq.for_each_async(|item, index, _| {
        let seen = &seen;
        async move {
            yield_now().await;
            seen.borrow_mut().push((index, *item));
            Ok::<_, anyhow::Error>(())
        }
    })
    .await?;

    assert_eq!(seen.into_inner(), vec![(0, "a"), (1, "b"), (2, "c")]);
    Ok(())
}

#[async_seq::test]
async fn skips_holes_but_keeps_positions() -> Result<()> {
    let seen = RefCell::new(vec![]);
    let seq = sparse![_, 'b', _, _, 'e', _];
    seq.for_each_async(|item, index, _| {
        seen.borrow_mut().push((index, *item));
        async { Ok::<_, anyhow::Error>(()) }
    })
    .await?;

    assert_eq!(seen.into_inner(), vec![(1, 'b'), (4, 'e')]);
    Ok(())
}

#[async_seq::test]
async fn ignores_callback_values() -> Result<()> {
    let calls = Cell::new(0);
    let seq = vec![1, 2, 3];
    seq.for_each_async(|n, _, _| {
        calls.set(calls.get() + 1);
        async move { Ok::<_, anyhow::Error>(n * 100) }
    })
    .await?;

    assert_eq!(calls.get(), 3);
    Ok(())
}

#[async_seq::test]
async fn callbacks_can_use_question_mark() -> Result<()> {
    async fn check(n: &u32) -> Result<()> {
        yield_now().await;
        ensure!(*n < 3, "{n} is too large");
        Ok(())
    }

    let small = vec![0, 1, 2];
    small.for_each_async(|n, _, _| check(n)).await?;

    let large = vec![1, 2, 3, 4];
    let err = large
        .for_each_async(|n, _, _| check(n))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "3 is too large");
    Ok(())
}

#[async_seq::test]
async fn empty_sequence_resolves_immediately() -> Result<()> {
    let empty: &[u8] = &[];
    let calls = Cell::new(0);
    async_seq::traverse::for_each(empty, |_, _, _| {
        calls.set(calls.get() + 1);
        async { Ok::<_, anyhow::Error>(()) }
    })
    .await?;
    assert_eq!(calls.get(), 0);
    Ok(())
}
