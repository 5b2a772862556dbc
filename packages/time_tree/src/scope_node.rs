use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::stopwatch::Stopwatch;
use crate::{ERR_POISONED_LOCK, Error};

/// A node in the timing tree, shared between the parent's child list and the
/// caller's [`Scope`](crate::Scope) handle.
///
/// The child list may be appended to by multiple threads concurrently (one
/// scope dispatching parallel workers that each begin children on it), so it
/// sits behind a mutex. The stopwatch is only ever written by the task that
/// owns the scope, but reads from the renderer may happen on another thread,
/// so it takes the same treatment.
#[derive(Debug)]
pub(crate) struct ScopeNode {
    name: String,
    is_async: bool,
    enabled: bool,
    stopwatch: Mutex<Stopwatch>,
    children: Mutex<Vec<Arc<ScopeNode>>>,
    platform: PlatformFacade,
}

impl ScopeNode {
    /// Creates an unstarted node.
    ///
    /// Returns [`Error::EmptyName`] if the name is empty; scope names become
    /// task labels in the report and an unlabeled entry would be meaningless.
    pub(crate) fn new(
        name: String,
        is_async: bool,
        enabled: bool,
        platform: PlatformFacade,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Self {
            name,
            is_async,
            enabled,
            stopwatch: Mutex::new(Stopwatch::default()),
            children: Mutex::new(Vec::new()),
            platform,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_async(&self) -> bool {
        self.is_async
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begins measuring elapsed time. No-op on a disabled node and on a node
    /// that is already running or stopped.
    pub(crate) fn start(&self) {
        if !self.enabled {
            return;
        }

        let now = self.platform.monotonic_time();
        self.stopwatch.lock().expect(ERR_POISONED_LOCK).start(now);
    }

    /// Freezes the elapsed time. Idempotent.
    pub(crate) fn stop(&self) {
        let now = self.platform.monotonic_time();
        self.stopwatch.lock().expect(ERR_POISONED_LOCK).stop(now);
    }

    /// Stops this node and every descendant, regardless of nesting depth.
    ///
    /// Scopes left open by an early return still contribute a bounded
    /// duration to the report instead of growing until render time.
    pub(crate) fn stop_all(&self) {
        self.stop();

        for child in self.children_snapshot() {
            child.stop_all();
        }
    }

    /// The elapsed time so far (for a running node) or the frozen elapsed
    /// time (for a stopped one).
    pub(crate) fn elapsed(&self) -> Duration {
        let now = self.platform.monotonic_time();
        self.stopwatch.lock().expect(ERR_POISONED_LOCK).elapsed(now)
    }

    /// Creates a child node, appends it to this node's child list and starts
    /// it.
    ///
    /// On a disabled parent the child is neither appended nor started, but a
    /// valid disabled node is still returned so caller code never needs to
    /// branch on the enabled state.
    pub(crate) fn begin_child(
        self: &Arc<Self>,
        name: String,
        is_async: bool,
    ) -> Result<Arc<Self>> {
        let child = Arc::new(Self::new(
            name,
            is_async,
            self.enabled,
            self.platform.clone(),
        )?);

        if !self.enabled {
            return Ok(child);
        }

        self.children
            .lock()
            .expect(ERR_POISONED_LOCK)
            .push(Arc::clone(&child));

        child.start();
        Ok(child)
    }

    /// The current children, in insertion order.
    pub(crate) fn children_snapshot(&self) -> Vec<Arc<Self>> {
        self.children.lock().expect(ERR_POISONED_LOCK).clone()
    }
}
