//! Timing a fan-out/fan-in workload across worker threads.
//!
//! One root scope dispatches several workers; each worker records its own
//! subtree as an async child of the root, so its wall-clock time is shown
//! with the `ASYNC` marker instead of being charged against the root's
//! serial timeline. The final report is delivered through a report sink
//! attached to the root, which fires when the root handle drops.
//!
//! Run with: `cargo run --example time_tree_parallel_workers`.

use std::thread;
use std::time::Duration;

use time_tree::Scope;

fn main() -> Result<(), time_tree::Error> {
    let root = Scope::builder("run batch")
        .report_to(|report| print!("{report}")) // Could also be a logging call.
        .begin()?;

    thread::scope(|s| -> Result<(), time_tree::Error> {
        let handles;
        {
            let _launch = root.begin_child("launch tasks")?;
            handles = (1..=3)
                .map(|i| {
                    let root = &root;
                    s.spawn(move || worker(root, i))
                })
                .collect::<Vec<_>>();
        }

        let _wait = root.begin_child("wait for tasks")?;
        for handle in handles {
            handle.join().expect("worker thread panicked")?;
        }
        Ok(())
    })?;

    // Dropping the root stops the whole tree and hands the report to the sink.
    Ok(())
}

fn worker(root: &Scope, item: u64) -> Result<(), time_tree::Error> {
    let process = root.begin_async_child(format!("process item {item}"))?;

    {
        let _fetch = process.begin_child("fetch")?;
        simulate_work(5);
    }

    {
        let _transform = process.begin_child("transform")?;
        simulate_work(item * 5);
    }

    if item % 2 == 0 {
        let _finalize = process.begin_child("finalize")?;
        simulate_work(5);
    }

    Ok(())
}

fn simulate_work(milliseconds: u64) {
    thread::sleep(Duration::from_millis(milliseconds));
}
