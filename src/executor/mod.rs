//! Task submission for the callable and async calling conventions.
//!
//! Both conventions run the same operation future as the direct call; they
//! only differ in how the outcome is handed back. [`submit`] returns an
//! [`OperationHandle`], [`submit_with`] invokes a continuation.

use crate::error::{AwsError, Outcome};
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use pin_project_lite::pin_project;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::warn;

/// A boxed unit of work.
pub type BoxTask = BoxFuture<'static, ()>;

/// Runs submitted work to completion in the background.
pub trait Executor: Send + Sync {
    /// Submit a task. An error means the task was dropped unrun.
    fn spawn(&self, task: BoxTask) -> Result<(), AwsError>;
}

/// Executor backed by a tokio runtime.
///
/// Captures the runtime handle active at construction; when built outside a
/// runtime it falls back to the handle active at submission time.
#[derive(Clone, Default)]
pub struct TokioExecutor {
    handle: Option<Handle>,
}

impl TokioExecutor {
    /// Create an executor on the current runtime, if any.
    pub fn new() -> Self {
        Self {
            handle: Handle::try_current().ok(),
        }
    }

    /// Create an executor on a specific runtime.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl Executor for TokioExecutor {
    fn spawn(&self, task: BoxTask) -> Result<(), AwsError> {
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current()
                .map_err(|e| AwsError::execution(format!("no tokio runtime available: {}", e)))?,
        };
        handle.spawn(task);
        Ok(())
    }
}

impl fmt::Debug for TokioExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioExecutor")
            .field("bound", &self.handle.is_some())
            .finish()
    }
}

/// Caller-supplied value passed through to an async completion handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncCallerContext {
    id: String,
}

impl AsyncCallerContext {
    /// Create a context with a random UUID.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Create a context with an explicit identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The context identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for AsyncCallerContext {
    fn default() -> Self {
        Self::new()
    }
}

pin_project! {
    /// Future-like handle to an operation running on an executor.
    ///
    /// Resolves to the same outcome the direct call would have produced.
    /// If the executor drops the task, it resolves to an execution error.
    #[must_use = "the outcome is only observable through the handle"]
    pub struct OperationHandle<T> {
        #[pin]
        receiver: oneshot::Receiver<Outcome<T>>,
    }
}

fn dropped() -> AwsError {
    AwsError::execution("operation was dropped before completion")
}

impl<T> OperationHandle<T> {
    fn failed(error: AwsError) -> Self {
        let (tx, receiver) = oneshot::channel();
        let _ = tx.send(Err(error));
        Self { receiver }
    }

    /// Take the outcome if the operation already finished.
    pub fn try_take(&mut self) -> Option<Outcome<T>> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(dropped())),
        }
    }

    /// Block the current thread until the outcome is available.
    ///
    /// Must not be called from within an async context.
    pub fn blocking_wait(self) -> Outcome<T> {
        self.receiver.blocking_recv().unwrap_or_else(|_| Err(dropped()))
    }
}

impl<T> Future for OperationHandle<T> {
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .receiver
            .poll(cx)
            .map(|result| result.unwrap_or_else(|_| Err(dropped())))
    }
}

impl<T> fmt::Debug for OperationHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationHandle").finish_non_exhaustive()
    }
}

/// Run `future` on `executor` and return a handle to its outcome.
pub fn submit<T, F>(executor: &dyn Executor, future: F) -> OperationHandle<T>
where
    T: Send + 'static,
    F: Future<Output = Outcome<T>> + Send + 'static,
{
    let (tx, receiver) = oneshot::channel();
    let task = async move {
        let _ = tx.send(future.await);
    };

    match executor.spawn(task.boxed()) {
        Ok(()) => OperationHandle { receiver },
        Err(e) => OperationHandle::failed(e),
    }
}

/// Run `future` on `executor` and pass its outcome to `continuation`.
///
/// If the executor refuses the task, the continuation still runs, on the
/// calling thread, with the submission error.
pub fn submit_with<T, F, C>(executor: &dyn Executor, future: F, continuation: C)
where
    T: Send + 'static,
    F: Future<Output = Outcome<T>> + Send + 'static,
    C: FnOnce(Outcome<T>) + Send + 'static,
{
    let slot = Arc::new(Mutex::new(Some(continuation)));
    let task_slot = Arc::clone(&slot);
    let task = async move {
        let outcome = future.await;
        let continuation = task_slot.lock().take();
        if let Some(continuation) = continuation {
            continuation(outcome);
        }
    };

    if let Err(e) = executor.spawn(task.boxed()) {
        warn!(error = %e, "Executor rejected operation");
        let continuation = slot.lock().take();
        if let Some(continuation) = continuation {
            continuation(Err(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct RejectingExecutor;

    impl Executor for RejectingExecutor {
        fn spawn(&self, _task: BoxTask) -> Result<(), AwsError> {
            Err(AwsError::execution("shutting down"))
        }
    }

    #[tokio::test]
    async fn test_submit_resolves_outcome() {
        let executor = TokioExecutor::new();
        let handle = submit(&executor, async { Ok::<_, AwsError>(42) });
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_submit_rejected_resolves_to_error() {
        let handle = submit(&RejectingExecutor, async { Ok::<_, AwsError>(1) });
        let err = handle.await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Execution);
    }

    #[tokio::test]
    async fn test_submit_with_invokes_continuation() {
        let executor = TokioExecutor::new();
        let (tx, rx) = oneshot::channel();

        submit_with(&executor, async { Ok::<_, AwsError>("done") }, move |outcome| {
            let _ = tx.send(outcome.unwrap());
        });

        assert_eq!(rx.await.unwrap(), "done");
    }

    #[test]
    fn test_submit_with_rejected_runs_inline() {
        let (tx, rx) = std::sync::mpsc::channel();
        submit_with(&RejectingExecutor, async { Ok::<_, AwsError>(()) }, move |outcome| {
            tx.send(outcome.is_err()).unwrap();
        });
        assert!(rx.recv().unwrap());
    }

    #[test]
    fn test_blocking_wait_from_plain_thread() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let executor = TokioExecutor::with_handle(runtime.handle().clone());

        let handle = submit(&executor, async { Ok::<_, AwsError>(7u32) });
        assert_eq!(handle.blocking_wait().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_try_take() {
        let executor = TokioExecutor::new();
        let mut handle = submit(&executor, async { Ok::<_, AwsError>(5) });

        let mut outcome = handle.try_take();
        while outcome.is_none() {
            tokio::task::yield_now().await;
            outcome = handle.try_take();
        }
        assert_eq!(outcome.unwrap().unwrap(), 5);
    }

    #[test]
    fn test_caller_context_ids() {
        let a = AsyncCallerContext::new();
        let b = AsyncCallerContext::new();
        assert_ne!(a.id(), b.id());
        assert_eq!(AsyncCallerContext::with_id("job-7").id(), "job-7");
    }
}
