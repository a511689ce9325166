//! Page Task Scope
//!
//! Remote calls started by a page run as abortable tasks. The scope is tied
//! to the page's reactive owner, so unmounting drops every pending
//! completion before it can touch disposed state.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;

#[derive(Default)]
struct ScopeState {
    handles: Vec<AbortHandle>,
    closed: bool,
}

/// Set of in-flight tasks owned by one page
#[derive(Clone, Default)]
pub struct TaskScope {
    state: Arc<Mutex<ScopeState>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that is cancelled when the current owner is cleaned up
    pub fn for_current_owner() -> Self {
        let scope = Self::new();
        let on_unmount = scope.clone();
        on_cleanup(move || on_unmount.cancel_all());
        scope
    }

    fn lock(&self) -> MutexGuard<'_, ScopeState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a future with the scope without running it
    pub fn track<F: Future>(&self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let mut state = self.lock();
        if state.closed {
            handle.abort();
        } else {
            state.handles.retain(|h| !h.is_aborted());
            state.handles.push(handle);
        }
        Abortable::new(future, registration)
    }

    /// Run a future on the event loop unless the scope cancels it first
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if self.is_closed() {
            log::debug!("page closed, task not started");
            return;
        }
        let task = self.track(future);
        spawn_local(async move {
            if task.await.is_err() {
                log::debug!("page task aborted before completion");
            }
        });
    }

    /// Abort everything in flight; the scope stays usable
    pub fn cancel_pending(&self) {
        let mut state = self.lock();
        for handle in state.handles.drain(..) {
            handle.abort();
        }
    }

    /// Abort everything and reject later work
    pub fn cancel_all(&self) {
        self.cancel_pending();
        self.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::Aborted;
    use std::cell::Cell;

    #[test]
    fn test_completes_when_not_cancelled() {
        let scope = TaskScope::new();
        let task = scope.track(async { 42 });
        assert_eq!(block_on(task), Ok(42));
    }

    #[test]
    fn test_cancelled_task_never_runs_completion() {
        let scope = TaskScope::new();
        let ran = Cell::new(false);
        let task = scope.track(async { ran.set(true) });

        scope.cancel_all();
        assert_eq!(block_on(task), Err(Aborted));
        assert!(!ran.get());
    }

    #[test]
    fn test_closed_scope_rejects_new_work() {
        let scope = TaskScope::new();
        scope.cancel_all();
        assert!(scope.is_closed());

        let task = scope.track(async { "late" });
        assert_eq!(block_on(task), Err(Aborted));
    }

    #[test]
    fn test_cancel_pending_keeps_scope_open() {
        let scope = TaskScope::new();
        let stale = scope.track(async { 1 });
        scope.cancel_pending();
        let fresh = scope.track(async { 2 });

        assert_eq!(block_on(stale), Err(Aborted));
        assert_eq!(block_on(fresh), Ok(2));
        assert!(!scope.is_closed());
    }

    #[test]
    fn test_spawn_on_closed_scope_is_dropped() {
        let scope = TaskScope::new();
        scope.cancel_all();

        let ran = std::rc::Rc::new(Cell::new(false));
        let flag = ran.clone();
        scope.spawn(async move { flag.set(true) });

        assert!(scope.lock().handles.is_empty());
        assert!(!ran.get());
    }
}
