//! Simplified example demonstrating key `time_tree` types working together.
//!
//! This example shows how to use the main types in the `time_tree` package:
//! - `Scope`: A named timing scope that stops on drop
//! - `Report`: A snapshot of the timing tree that renders as text
//!
//! Run with: `cargo run --example time_tree_basic`.

use std::thread;
use std::time::Duration;

use time_tree::Scope;

fn main() -> Result<(), time_tree::Error> {
    println!("=== Hierarchical Timing Example ===");
    println!();

    // Create a root scope - measurement starts immediately.
    let root = Scope::root("prepare report")?;
    println!("✓ Created root scope");

    // Time a first phase with a nested step inside it.
    {
        let load = root.begin_child("load data")?;
        {
            let _parse = load.begin_child("parse rows")?;
            simulate_work(15);
        }
        {
            let _validate = load.begin_child("validate rows")?;
            simulate_work(10);
        }
    } // Dropping a handle stops its measurement.

    // Repeated same-named scopes are aggregated into one report line with
    // count, min and max statistics.
    for page in 0..3 {
        let _render = root.begin_child("render page")?;
        simulate_work(5 + page);
    }

    root.stop_all();
    root.print_to_stdout();

    println!();
    println!("Scopes automatically stop when dropped.");
    Ok(())
}

fn simulate_work(milliseconds: u64) {
    thread::sleep(Duration::from_millis(milliseconds));
}
