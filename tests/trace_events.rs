//! Traversals emit a `trace` event when they settle. These tests install a
//! recording layer and check which events fired.

use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, Mutex};

use async_seq::prelude::*;
use async_seq::runtime::block_on;
use async_seq::task::yield_now;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A settled traversal as seen by the subscriber: its message and the
/// `index` field, if any.
#[derive(Debug, Clone, PartialEq)]
struct Settled {
    message: String,
    index: Option<u64>,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Settled>>>);

impl Recorder {
    /// Runs `fut` to completion with this recorder as the current subscriber.
    fn run<Fut: std::future::Future>(&self, fut: Fut) -> Fut::Output {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, || block_on(fut))
    }

    fn events(&self) -> Vec<Settled> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = Fields::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(Settled {
            message: visitor.message,
            index: visitor.index,
        });
    }
}

#[derive(Default)]
struct Fields {
    message: String,
    index: Option<u64>,
}

impl Visit for Fields {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "index" {
            self.index = Some(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

#[test]
fn every_reports_the_rejected_index() {
    let recorder = Recorder::default();
    let seq = vec![1, 2, 3, 4];
    let all = recorder.run(seq.every_async(|n, _, _| async move {
        yield_now().await;
        Ok::<_, Infallible>(*n < 3)
    }));
    assert_eq!(all, Ok(false));

    assert_eq!(
        recorder.events(),
        vec![Settled {
            message: "every: predicate rejected".to_string(),
            index: Some(2),
        }]
    );
}

#[test]
fn map_reports_completion() {
    let recorder = Recorder::default();
    let seq = vec!["a", "b"];
    let upper = recorder.run(
        seq.map_async(|s, _, _| async move { Ok::<_, Infallible>(s.to_uppercase()) }),
    );
    assert_eq!(upper, Ok(vec!["A".to_string(), "B".to_string()]));

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "map: done");
}

#[test]
fn failures_report_the_failing_index() {
    let recorder = Recorder::default();
    let seq = [10, 20, 30];
    let res = recorder.run(seq.for_each_async(|n, index, _| {
        let n = *n;
        async move {
            if index == 1 {
                Err(format!("bad {n}"))
            } else {
                Ok(())
            }
        }
    }));
    assert_eq!(res, Err("bad 20".to_string()));

    assert_eq!(
        recorder.events(),
        vec![Settled {
            message: "for_each: callback failed".to_string(),
            index: Some(1),
        }]
    );
}

#[test]
fn silent_without_a_subscriber() {
    let recorder = Recorder::default();
    let seq = vec![1];
    let any = block_on(seq.some_async(|_, _, _| async { Ok::<_, Infallible>(true) }));
    assert_eq!(any, Ok(true));
    assert!(recorder.events().is_empty());
}
