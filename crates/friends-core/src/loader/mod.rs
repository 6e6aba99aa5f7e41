// crates/friends-core/src/loader/mod.rs

//! # Friend list loader
//!
//! Reads one JSON object per line. Blank lines are skipped with a warning;
//! a malformed line or a repeated `user_id` aborts the whole load.

use crate::error::{FriendsError, Result};
use crate::raw::FriendRaw;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

mod common_io;

/// File read by the CLI when no path is given.
pub const DEFAULT_FRIENDS_FILE: &str = "friend_list.json";

/// Loads the raw friend records from `path`, in file order.
pub fn load_friends(path: impl AsRef<Path>) -> Result<Vec<FriendRaw>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let friends = parse_friends(reader)?;
    info!("Loaded {} friends from {}", friends.len(), path.display());
    Ok(friends)
}

/// Parses line-delimited friend records from any buffered reader.
pub fn parse_friends<R: BufRead>(reader: R) -> Result<Vec<FriendRaw>> {
    let mut friends = Vec::new();
    let mut seen: HashSet<i64> = HashSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| FriendsError::Read {
            line: line_no,
            source,
        })?;

        if line.trim().is_empty() {
            warn!("Blank line found at line {line_no}, skipping");
            continue;
        }

        let friend: FriendRaw = serde_json::from_str(&line).map_err(|source| {
            FriendsError::Json {
                line: line_no,
                source,
            }
        })?;

        if !seen.insert(friend.user_id) {
            return Err(FriendsError::DuplicateUserId(friend.user_id));
        }
        debug!("line {line_no}: user_id {} ({})", friend.user_id, friend.name);
        friends.push(friend);
    }

    Ok(friends)
}
