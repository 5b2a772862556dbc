//! Hierarchical execution timing with aggregated tree reports.
//!
//! This package lets a caller open a named timing scope, nest child scopes
//! inside it (synchronously or from concurrent workers) and render a textual
//! tree report at the end, showing per scope the elapsed time, the percentage
//! of root time, the percentage of immediate-parent time and aggregation
//! statistics for repeated same-named sibling scopes.
//!
//! The core types:
//! - [`Scope`] - a named timing scope; stops on drop and hands out child scopes
//! - [`ScopeBuilder`] - root configuration: conditional enablement, async
//!   marking, report sink
//! - [`Report`] - immutable snapshot of a timing tree that renders as text
//!
//! This package is a development and diagnostics aid, not a metrics pipeline:
//! the output is a human-readable string handed to whatever sink the caller
//! prefers.
//!
//! # Simple usage
//!
//! ```
//! use time_tree::Scope;
//!
//! # fn main() -> Result<(), time_tree::Error> {
//! let root = Scope::root("prepare meal")?;
//!
//! {
//!     let _chop = root.begin_child("chop vegetables")?;
//!     // Work happens here; dropping the handle stops the measurement.
//! }
//!
//! {
//!     let _cook = root.begin_child("cook")?;
//!     // More work.
//! }
//!
//! root.stop_all();
//! root.print_to_stdout();
//! # Ok(())
//! # }
//! ```
//!
//! This prints a report along these lines:
//!
//! ```text
//! -------------------------------
//! Root    Parent  Task
//! -------------------------------
//! 100.00% 100.00% - prepare meal [12ms]
//!    33.33%  33.33% - chop vegetables [4ms]
//!    58.33%  58.33% - cook [7ms]
//!     8.33%   8.33% ? unspecified [1ms]
//! ```
//!
//! The `unspecified` line accounts for the portion of a scope's time that no
//! synchronous child explains.
//!
//! # Concurrent workers
//!
//! Multiple threads may begin children on the same parent concurrently. A
//! child created with [`Scope::begin_async_child()`] is reported with an
//! `ASYNC` marker instead of percentages, since its wall-clock time overlaps
//! the parent's rather than consuming it:
//!
//! ```
//! use std::thread;
//!
//! use time_tree::Scope;
//!
//! # fn main() -> Result<(), time_tree::Error> {
//! let root = Scope::root("process batch")?;
//!
//! thread::scope(|s| {
//!     for i in 0..4 {
//!         let root = &root;
//!         s.spawn(move || {
//!             let _worker = root.begin_async_child(format!("worker {i}")).unwrap();
//!             // Worker does its part here.
//!         });
//!     }
//! });
//!
//! root.stop_all();
//! println!("{}", root.to_report());
//! # Ok(())
//! # }
//! ```
//!
//! # Conditional timing and report sinks
//!
//! Instrumentation can stay in place permanently and be paid for only when
//! wanted. A disabled tree measures nothing and renders to the empty string;
//! a report sink receives the final snapshot exactly once when the root is
//! dropped:
//!
//! ```
//! use time_tree::Scope;
//!
//! # fn main() -> Result<(), time_tree::Error> {
//! let timing_wanted = true; // e.g. LOGGER.is_debug_enabled() equivalent
//!
//! let root = Scope::builder("sync catalog")
//!     .enabled(timing_wanted)
//!     .report_to(|report| print!("{report}"))
//!     .begin()?;
//!
//! {
//!     let _fetch = root.begin_child("fetch remote state")?;
//! }
//! // Dropping the root stops the tree and hands the report to the sink.
//! # Ok(())
//! # }
//! ```

mod error;
mod pal;
mod report;
mod scope;
mod scope_builder;
mod scope_node;
mod stopwatch;

pub use error::Error;
pub use report::{Report, ReportScope};
pub use scope::Scope;
pub use scope_builder::ScopeBuilder;

/// The reporting sink attached to a root scope, invoked once from drop.
pub(crate) type ReportSink = Box<dyn FnOnce(Report) + Send + Sync>;

// A poisoned lock means a writer panicked mid-update, so the timing data can
// no longer be trusted (we panic).
pub(crate) const ERR_POISONED_LOCK: &str =
    "encountered poisoned lock - continued execution is not possible as data integrity cannot be guaranteed";
