//! Tests for programmatic access to report data.

use std::time::Duration;

use time_tree::Scope;

#[test]
#[cfg(not(miri))] // Test uses the real platform clock which cannot be executed under Miri.
fn report_tree_is_walkable() {
    let root = Scope::root("pipeline").unwrap();

    {
        let extract = root.begin_child("extract").unwrap();
        let _download = extract.begin_child("download").unwrap();
    }
    {
        let _transform = root.begin_async_child("transform").unwrap();
    }

    root.stop_all();
    let report = root.to_report();

    assert!(!report.is_empty());

    let snapshot = report.root().unwrap();
    assert_eq!(snapshot.name(), "pipeline");
    assert!(!snapshot.is_async());
    assert!(snapshot.elapsed() >= Duration::ZERO);

    let names: Vec<&str> = snapshot
        .children()
        .iter()
        .map(|child| child.name())
        .collect();
    assert_eq!(names, ["extract", "transform"]);

    let extract = snapshot.children().first().unwrap();
    assert_eq!(extract.children().len(), 1);
    assert_eq!(extract.children().first().unwrap().name(), "download");

    let transform = snapshot.children().last().unwrap();
    assert!(transform.is_async());
    assert!(transform.children().is_empty());
}

#[test]
fn disabled_tree_has_no_report_data() {
    let root = Scope::builder("off").enabled(false).begin().unwrap();
    let _child = root.begin_child("invisible").unwrap();

    let report = root.to_report();
    assert!(report.is_empty());
    assert!(report.root().is_none());
    assert_eq!(report.to_string(), "");
}
