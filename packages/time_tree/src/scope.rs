use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::scope_builder::ScopeBuilder;
use crate::scope_node::ScopeNode;
use crate::{Report, ReportSink};

/// A named, timed scope in the hierarchy.
///
/// A scope begins measuring when created and stops when [`stop()`](Self::stop)
/// is called or when the handle is dropped, whichever comes first. Dropping
/// covers every exit path - normal return, early return, propagated error -
/// so the usual pattern is to bind a child scope to a block-local variable and
/// let the block end release it.
///
/// Child scopes are created with [`begin_child()`](Self::begin_child) and may
/// be created concurrently from multiple threads on the same parent, e.g. one
/// scope dispatching parallel workers that each record their own subtree.
///
/// # Examples
///
/// ```
/// use time_tree::Scope;
///
/// # fn main() -> Result<(), time_tree::Error> {
/// let root = Scope::root("handle request")?;
///
/// {
///     let _auth = root.begin_child("authenticate")?;
///     // Work happens here; dropping the handle stops the measurement.
/// }
///
/// {
///     let _render = root.begin_child("render response")?;
///     // More work.
/// }
///
/// root.stop_all();
/// root.print_to_stdout();
/// # Ok(())
/// # }
/// ```
///
/// # Disabled scopes
///
/// A scope built with [`enabled(false)`](ScopeBuilder::enabled) measures
/// nothing, retains no children and renders to the empty string, but still
/// hands out usable child handles so the instrumented code needs no branches:
///
/// ```
/// use time_tree::Scope;
///
/// # fn main() -> Result<(), time_tree::Error> {
/// let detailed_timing_wanted = false; // e.g. from a verbosity flag
///
/// let root = Scope::builder("expensive operation")
///     .enabled(detailed_timing_wanted)
///     .begin()?;
///
/// let child = root.begin_child("still works")?;
/// drop(child);
///
/// assert!(root.to_report().is_empty());
/// # Ok(())
/// # }
/// ```
#[must_use = "a scope measures the time between its creation and its stop or drop"]
pub struct Scope {
    node: Arc<ScopeNode>,

    // Present only on a root built with `report_to`; invoked exactly once,
    // from drop, after the whole tree has been stopped.
    sink: Option<ReportSink>,
}

impl Scope {
    pub(crate) fn new(node: Arc<ScopeNode>, sink: Option<ReportSink>) -> Self {
        Self { node, sink }
    }

    /// Creates an enabled, synchronous root scope and starts it immediately.
    ///
    /// Equivalent to `Scope::builder(name).begin()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`](crate::Error::EmptyName) if the name is
    /// empty.
    pub fn root(name: impl Into<String>) -> Result<Self> {
        Self::builder(name).begin()
    }

    /// Returns a builder for a root scope with non-default configuration:
    /// conditional enablement, async marking or a report sink.
    pub fn builder(name: impl Into<String>) -> ScopeBuilder {
        ScopeBuilder::new(name)
    }

    /// Creates a child scope, appends it to this scope's children and starts
    /// it immediately.
    ///
    /// Safe to call concurrently from multiple threads on the same parent.
    /// On a disabled scope the returned child is a valid no-op handle and is
    /// not retained in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`](crate::Error::EmptyName) if the name is
    /// empty. The parent remains usable.
    pub fn begin_child(&self, name: impl Into<String>) -> Result<Self> {
        let node = self.node.begin_child(name.into(), false)?;
        Ok(Self::new(node, None))
    }

    /// Creates a child scope marked as concurrently executing.
    ///
    /// An async child's duration overlaps the parent's timeline instead of
    /// consuming it serially, so the report shows `ASYNC` in place of its
    /// percentages and excludes it from the parent's "unspecified" time
    /// accounting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`](crate::Error::EmptyName) if the name is
    /// empty.
    pub fn begin_async_child(&self, name: impl Into<String>) -> Result<Self> {
        let node = self.node.begin_child(name.into(), true)?;
        Ok(Self::new(node, None))
    }

    /// Freezes this scope's elapsed time.
    ///
    /// Idempotent: stopping an already-stopped scope has no further effect.
    /// Dropping the handle stops the scope as well, so an explicit call is
    /// only needed to end the measurement before the handle goes away.
    pub fn stop(&self) {
        self.node.stop();
    }

    /// Stops this scope and recursively every descendant.
    ///
    /// Bounds the durations of scopes left open by an early return or an
    /// abandoned task, so they contribute a truncated measurement to the
    /// report instead of continuing to grow until render time.
    pub fn stop_all(&self) {
        self.node.stop_all();
    }

    /// The display label of this scope.
    #[must_use]
    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Whether this scope is marked as concurrently executing.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.node.is_async()
    }

    /// Whether this scope performs any measurement.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.node.is_enabled()
    }

    /// The elapsed time so far (while running) or the frozen elapsed time
    /// (once stopped).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.node.elapsed()
    }

    /// Creates a thread-safe snapshot of this scope's subtree.
    ///
    /// Running scopes contribute their elapsed-so-far. Call
    /// [`stop_all()`](Self::stop_all) first for a report with final values.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_scope_node(&self.node)
    }

    /// Prints the rendered timing tree to stdout.
    ///
    /// This is a convenience method equivalent to
    /// `self.to_report().print_to_stdout()`. Prints nothing at all for a
    /// disabled scope, not even an empty line.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.node.stop();

        if let Some(sink) = self.sink.take() {
            self.node.stop_all();

            if self.node.is_enabled() {
                sink(Report::from_scope_node(&self.node));
            }
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}
