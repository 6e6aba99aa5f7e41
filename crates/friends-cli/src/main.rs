//! friends-cli — print who to invite
//!
//! Reads a friend list (one JSON object per line), keeps the friends within
//! 100 km of the origin and prints `user_id name` for each, ordered by id.
//!
//! Usage examples
//! --------------
//!
//! - Use `friend_list.json` in the current directory
//!   $ friends-cli
//!
//! - Point to another list and show what the loader skips
//!   $ RUST_LOG=debug friends-cli customers.txt
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = CliArgs::parse();

    let invites = friends_core::invite_from_path(&args.input)
        .with_context(|| format!("planning invitations from {}", args.input.display()))?;
    info!("Final invitations: {}", invites.len());

    for friend in &invites {
        println!("{} {}", friend.user_id(), friend.name());
    }

    Ok(())
}
