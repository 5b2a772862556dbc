use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::pal::PlatformFacade;
use crate::scope_node::ScopeNode;
use crate::{Report, ReportSink, Scope};

/// Builder for a root [`Scope`] with non-default configuration.
///
/// Obtained from [`Scope::builder()`]. The builder covers the three root-only
/// knobs: conditional enablement, marking the root itself as concurrently
/// executing and attaching a report sink that receives the final snapshot
/// when the root handle is dropped.
///
/// # Examples
///
/// ```
/// use time_tree::Scope;
///
/// # fn main() -> Result<(), time_tree::Error> {
/// let verbose = true; // e.g. from configuration or a log level check
///
/// let root = Scope::builder("import data")
///     .enabled(verbose)
///     .report_to(|report| print!("{report}"))
///     .begin()?;
///
/// {
///     let _parse = root.begin_child("parse")?;
///     // Work happens here.
/// }
/// // Dropping the root stops the whole tree and hands the report to the sink.
/// # Ok(())
/// # }
/// ```
pub struct ScopeBuilder {
    name: String,
    is_async: bool,
    enabled: bool,
    sink: Option<ReportSink>,
    platform: PlatformFacade,
}

impl ScopeBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            enabled: true,
            sink: None,
            platform: PlatformFacade::real(),
        }
    }

    /// Sets whether the scope tree performs any measurement.
    ///
    /// A disabled root measures nothing, retains no children and renders to
    /// the empty string; the disabled state propagates to every descendant.
    /// Useful for keeping instrumentation in place while paying for it only
    /// when wanted, e.g. gated on a "debug logging enabled" check.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Marks the root as concurrently executing.
    ///
    /// Relevant when this tree's report is embedded in a larger timeline the
    /// root overlaps rather than consumes; the root's own report line always
    /// shows numeric percentages regardless.
    #[must_use]
    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Attaches a sink that receives the final [`Report`].
    ///
    /// The sink is invoked exactly once, when the root handle is dropped,
    /// after every scope in the tree has been stopped - and only if the root
    /// was enabled. The sink's nature is up to the caller: a logging call,
    /// a print, a test capture.
    #[must_use]
    pub fn report_to(mut self, sink: impl FnOnce(Report) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replaces the clock with a controllable fake.
    #[cfg(test)]
    pub(crate) fn with_platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Validates the configuration, constructs the root scope and starts it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`](crate::Error::EmptyName) if the name is
    /// empty.
    pub fn begin(self) -> Result<Scope> {
        let node = Arc::new(ScopeNode::new(
            self.name,
            self.is_async,
            self.enabled,
            self.platform,
        )?);

        node.start();
        Ok(Scope::new(node, self.sink))
    }
}

impl fmt::Debug for ScopeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeBuilder")
            .field("name", &self.name)
            .field("is_async", &self.is_async)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
