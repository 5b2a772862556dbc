//! Example from the README file, demonstrating basic nested timing.
//!
//! Run with: `cargo run --example time_tree_readme`.

use std::thread;
use std::time::Duration;

use time_tree::Scope;

fn main() -> Result<(), time_tree::Error> {
    let root = Scope::root("handle request")?;

    {
        let _auth = root.begin_child("authenticate")?;
        thread::sleep(Duration::from_millis(5));
    }

    {
        let query = root.begin_child("query database")?;
        {
            let _cache = query.begin_child("check cache")?;
            thread::sleep(Duration::from_millis(2));
        }
        thread::sleep(Duration::from_millis(10));
    }

    root.stop_all();
    root.print_to_stdout();
    Ok(())
}
