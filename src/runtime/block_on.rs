use core::future::Future;
use core::pin::pin;
use core::task::Waker;
use core::task::{Context, Poll};
use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Wake;
use std::thread::{self, Thread};

thread_local! {
    static RUNNING: Cell<bool> = const { Cell::new(false) };
}

/// Run a future to completion on the current thread.
///
/// # Panics
///
/// Panics when called from inside a future that is itself being driven by
/// `block_on` on the same thread. Use [`try_block_on`] to get an error
/// instead.
pub fn block_on<Fut>(fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    match try_block_on(fut) {
        Ok(res) => res,
        Err(err) => panic!("{err}"),
    }
}

/// Run a future to completion on the current thread, unless the thread is
/// already inside `block_on`.
pub fn try_block_on<Fut>(fut: Fut) -> Result<Fut::Output, AlreadyRunning>
where
    Fut: Future,
{
    if RUNNING.with(|running| running.replace(true)) {
        return Err(AlreadyRunning { _priv: () });
    }
    let _guard = Running;

    // Pin the future so it can be polled
    let mut fut = pin!(fut);

    // Create a new context to be passed to the future.
    let waker_impl = Arc::new(ThreadWaker::new(thread::current()));
    let waker = Waker::from(Arc::clone(&waker_impl));
    let mut cx = Context::from_waker(&waker);

    // Either the future completes and we return, or we park until woken.
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(res) => break Ok(res),
            Poll::Pending => {
                while !waker_impl.take_awake() {
                    thread::park();
                }
            }
        }
    }
}

/// The error returned by [`try_block_on`] when the current thread is already
/// driving a future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadyRunning {
    _priv: (),
}

impl fmt::Display for AlreadyRunning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot async_seq::runtime::block_on inside an existing block_on!")
    }
}

impl std::error::Error for AlreadyRunning {}

/// Clears the running flag, also when the future panics.
struct Running;

impl Drop for Running {
    fn drop(&mut self) {
        RUNNING.with(|running| running.set(false));
    }
}

struct ThreadWaker {
    awake: AtomicBool,
    thread: Thread,
}

impl ThreadWaker {
    fn new(thread: Thread) -> Self {
        Self {
            awake: AtomicBool::new(false),
            thread,
        }
    }

    #[inline]
    fn take_awake(&self) -> bool {
        self.awake.swap(false, Ordering::Acquire)
    }
}

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.awake.store(true, Ordering::Release);
        self.thread.unpark();
    }
}
