//! Basic usage example for friends-rs
//!
//! Loads a friend list, prints each friend's distance from the origin and
//! then the final invitations.
//!
//! $ cargo run --example basic_usage -- path/to/friend_list.json

use friends_rs::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| friends_rs::DEFAULT_FRIENDS_FILE.to_string());

    println!("--- Loading {path} ---");
    let raw = load_friends(&path)?;
    for r in &raw {
        let friend = Friend::try_from(r.clone())?;
        println!(
            "{:>4} {:<20} {:>10.3} km",
            friend.user_id(),
            friend.name(),
            friend.distance_from_origin()
        );
    }
    println!();

    println!("--- Final Invitations ---");
    for friend in plan_invitations(&raw)? {
        println!("{} {}", friend.user_id(), friend.name());
    }

    Ok(())
}
