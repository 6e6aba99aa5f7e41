//! Error handling example for friends-rs
//!
//! Feeds the loader and planner the inputs they reject.

use friends_rs::prelude::*;
use std::io::Cursor;

fn main() {
    println!("=== friends-rs Error Handling Example ===\n");

    println!("--- Missing file ---");
    match load_friends("does/not/exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }

    println!("--- Duplicate user_id ---");
    let dup = "{\"latitude\": 1, \"user_id\": 4, \"name\": \"A\", \"longitude\": 2}\n\
               {\"latitude\": 1, \"user_id\": 4, \"name\": \"B\", \"longitude\": 2}\n";
    if let Err(e) = parse_friends(Cursor::new(dup)) {
        println!("  ✗ {e}");
    }

    println!("--- Malformed line ---");
    if let Err(e) = parse_friends(Cursor::new("{\"user_id\": 1,\n")) {
        println!("  ✗ {e}");
    }

    println!("--- Unparsable coordinate ---");
    let raw = vec![FriendRaw::new(9, "Nowhere", "north", "77.0")];
    if let Err(e) = plan_invitations(&raw) {
        println!("  ✗ {e}");
    }
}
