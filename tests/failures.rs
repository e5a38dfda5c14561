//! A failing callback ends every traversal at the element that failed.

use std::cell::RefCell;

use async_seq::prelude::*;
use async_seq::task::yield_now;

#[derive(Debug, PartialEq)]
struct Boom(usize);

const FAILS_AT: usize = 2;

struct Calls(RefCell<Vec<usize>>);

impl Calls {
    fn new() -> Self {
        Self(RefCell::new(vec![]))
    }

    /// Records a call and fails for the third element.
    async fn check<T>(&self, value: T, index: usize) -> Result<T, Boom> {
        self.0.borrow_mut().push(index);
        yield_now().await;
        if index == FAILS_AT {
            Err(Boom(index))
        } else {
            Ok(value)
        }
    }

    fn into_inner(self) -> Vec<usize> {
        self.0.into_inner()
    }
}

fn five() -> Vec<u32> {
    vec![10, 20, 30, 40, 50]
}

#[async_seq::test]
async fn for_each_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.for_each_async(|_, i, _| calls.check((), i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn every_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.every_async(|_, i, _| calls.check(true, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn some_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.some_async(|_, i, _| calls.check(false, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn filter_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.filter_async(|_, i, _| calls.check(true, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn find_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.find_async(|_, i, _| calls.check(false, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn find_index_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.find_index_async(|_, i, _| calls.check(false, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn map_halts() {
    let calls = Calls::new();
    let seq = five();
    let res = seq.map_async(|n, i, _| calls.check(n + 1, i)).await;
    assert_eq!(res, Err(Boom(2)));
    assert_eq!(calls.into_inner(), vec![0, 1, 2]);
}

#[async_seq::test]
async fn error_is_passed_through_untouched() {
    let seq = vec!["7", "x", "9"];
    let res = seq
        .map_async(|s, _, _| async move { s.parse::<i64>() })
        .await;
    let expected = "x".parse::<i64>().unwrap_err();
    assert_eq!(res, Err(expected));
}
