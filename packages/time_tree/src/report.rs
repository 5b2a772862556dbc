//! Rendered timing reports.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::scope_node::ScopeNode;

/// An immutable snapshot of a timing tree.
///
/// A `Report` captures the elapsed times of a [`Scope`](crate::Scope) and all
/// its descendants at one moment, can be safely sent to other threads and
/// renders into the textual tree via its `Display` implementation.
///
/// A report taken from a disabled scope is empty and renders as the empty
/// string.
///
/// # Examples
///
/// ```
/// use time_tree::Scope;
///
/// # fn main() -> Result<(), time_tree::Error> {
/// let root = Scope::root("assemble page")?;
/// {
///     let _query = root.begin_child("query database")?;
///     // Work happens here.
/// }
/// root.stop_all();
///
/// let report = root.to_report();
/// // Report can be sent to another thread.
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
///
/// # Report format
///
/// Each line shows the percentage of root time, the percentage of
/// immediate-parent time, a marker (`-` for a named scope, `?` for the
/// untracked remainder), the scope name and the elapsed milliseconds.
/// Same-named siblings collapse into one line carrying their summed elapsed
/// time plus count/min/max statistics. Concurrently-executing scopes show
/// `ASYNC` in place of percentages, as their wall-clock time overlaps the
/// parent's instead of consuming it.
///
/// ```text
/// -------------------------------
/// Root    Parent  Task
/// -------------------------------
/// 100.00% 100.00% - assemble page [120ms]
///    66.67%  66.67% - query database [80ms; 2x; min=30ms; max=50ms]
///    33.33%  33.33% ? unspecified [40ms]
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    root: Option<ReportScope>,
}

/// Snapshot of a single scope within a [`Report`].
#[derive(Clone, Debug)]
pub struct ReportScope {
    name: String,
    is_async: bool,
    elapsed: Duration,
    children: Vec<ReportScope>,
}

impl Report {
    /// Creates a report by snapshotting the given scope subtree.
    ///
    /// Running scopes contribute their elapsed-so-far; disabled trees produce
    /// an empty report.
    pub(crate) fn from_scope_node(node: &Arc<ScopeNode>) -> Self {
        if !node.is_enabled() {
            return Self { root: None };
        }

        Self {
            root: Some(ReportScope::from_scope_node(node)),
        }
    }

    /// The root scope of the snapshot, or `None` if the tree was disabled.
    #[must_use]
    pub fn root(&self) -> Option<&ReportScope> {
        self.root.as_ref()
    }

    /// Whether this report captured any timing data.
    ///
    /// Only a disabled tree produces an empty report; an enabled tree always
    /// captures at least its root scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Prints the rendered timing tree to stdout.
    ///
    /// Prints nothing at all for an empty report, not even an empty line.
    /// This matters when the surrounding tool speaks an output protocol where
    /// unexpected lines are disruptive.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }
        println!("{self}");
    }
}

impl ReportScope {
    fn from_scope_node(node: &Arc<ScopeNode>) -> Self {
        Self {
            name: node.name().to_string(),
            is_async: node.is_async(),
            elapsed: node.elapsed(),
            children: node
                .children_snapshot()
                .iter()
                .map(Self::from_scope_node)
                .collect(),
        }
    }

    /// The display label of this scope.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this scope's duration overlaps its parent's timeline instead
    /// of consuming it serially.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// The elapsed time captured for this scope.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The child scopes, in insertion order, ungrouped.
    #[must_use]
    pub fn children(&self) -> &[ReportScope] {
        &self.children
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root.as_ref() else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "-------------------------------")?;
        writeln!(f, "Root    Parent  Task")?;
        writeln!(f, "-------------------------------")?;

        // The root line is always numeric: a root has no parent timeline to
        // overlap, so the async marker would carry no information.
        TaskLine {
            depth: 0,
            marker: '-',
            name: &root.name,
            elapsed: root.elapsed,
            root_elapsed: root.elapsed,
            parent_elapsed: root.elapsed,
            is_async: false,
            group: None,
        }
        .write_to(f)?;

        write_children(f, root, root.elapsed, 1)
    }
}

/// Renders the direct children of `scope` (grouped by name) and recurses into
/// their subtrees, then accounts for the time no child group explains.
fn write_children(
    f: &mut fmt::Formatter<'_>,
    scope: &ReportScope,
    root_elapsed: Duration,
    depth: usize,
) -> fmt::Result {
    let groups = group_by_name(scope.children());
    let parent_elapsed = scope.elapsed;

    let mut unaccounted = parent_elapsed;

    for (name, members) in &groups {
        let sum = total_elapsed(members.iter().copied());
        let min = members
            .iter()
            .map(|member| member.elapsed)
            .min()
            .unwrap_or_default();
        let max = members
            .iter()
            .map(|member| member.elapsed)
            .max()
            .unwrap_or_default();

        TaskLine {
            depth,
            marker: '-',
            name,
            elapsed: sum,
            root_elapsed,
            parent_elapsed,
            is_async: members.iter().any(|member| member.is_async),
            group: (members.len() >= 2).then_some(GroupStats {
                count: members.len(),
                min,
                max,
            }),
        }
        .write_to(f)?;

        // Async members overlap the parent's timeline instead of consuming
        // it, so only the synchronous members reduce the unaccounted budget.
        let synchronous = total_elapsed(members.iter().copied().filter(|member| !member.is_async));
        unaccounted = unaccounted.saturating_sub(synchronous);

        for member in members {
            write_children(f, member, root_elapsed, depth.saturating_add(1))?;
        }
    }

    if !groups.is_empty() {
        TaskLine {
            depth,
            marker: '?',
            name: "unspecified",
            elapsed: unaccounted,
            root_elapsed,
            parent_elapsed,
            is_async: false,
            group: None,
        }
        .write_to(f)?;
    }

    Ok(())
}

/// Groups sibling scopes by name, preserving first-occurrence order of
/// distinct names and insertion order within each group.
fn group_by_name(children: &[ReportScope]) -> Vec<(&str, Vec<&ReportScope>)> {
    let mut groups: Vec<(&str, Vec<&ReportScope>)> = Vec::new();

    for child in children {
        if let Some((_, members)) = groups.iter_mut().find(|(name, _)| *name == child.name) {
            members.push(child);
        } else {
            groups.push((child.name.as_str(), vec![child]));
        }
    }

    groups
}

fn total_elapsed<'a>(members: impl Iterator<Item = &'a ReportScope>) -> Duration {
    members.fold(Duration::ZERO, |acc, member| {
        acc.saturating_add(member.elapsed)
    })
}

/// One line of the rendered tree.
struct TaskLine<'a> {
    depth: usize,
    marker: char,
    name: &'a str,
    elapsed: Duration,
    root_elapsed: Duration,
    parent_elapsed: Duration,
    is_async: bool,
    group: Option<GroupStats>,
}

/// Aggregation statistics shown when a line represents two or more
/// same-named siblings.
struct GroupStats {
    count: usize,
    min: Duration,
    max: Duration,
}

/// Printed in place of both percentage columns for async entries, where the
/// ratio against a timeline the scope did not consume would be misleading.
const ASYNC_COLUMN: &str = "  ASYNC";

impl TaskLine<'_> {
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str("  ")?;
        }

        if self.is_async {
            write!(f, "{ASYNC_COLUMN} {ASYNC_COLUMN}")?;
        } else {
            write!(
                f,
                "{:6.2}% {:6.2}%",
                percent_of(self.elapsed, self.root_elapsed),
                percent_of(self.elapsed, self.parent_elapsed)
            )?;
        }

        write!(
            f,
            " {} {} [{:.0}ms",
            self.marker,
            self.name,
            as_millis(self.elapsed)
        )?;

        if let Some(group) = &self.group {
            write!(
                f,
                "; {}x; min={:.0}ms; max={:.0}ms",
                group.count,
                as_millis(group.min),
                as_millis(group.max)
            )?;
        }

        writeln!(f, "]")
    }
}

/// Ratio of `value` to `baseline` as a percentage.
///
/// A zero baseline occurs when a scope is rendered before its first stop; the
/// result clamps to zero instead of propagating NaN or infinity into the
/// report.
fn percent_of(value: Duration, baseline: Duration) -> f64 {
    if baseline.is_zero() {
        return 0.0;
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "floating point arithmetic cannot panic and the zero baseline is excluded above"
    )]
    {
        value.as_secs_f64() / baseline.as_secs_f64() * 100.0
    }
}

fn as_millis(value: Duration) -> f64 {
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "floating point arithmetic cannot panic"
    )]
    {
        value.as_secs_f64() * 1000.0
    }
}
