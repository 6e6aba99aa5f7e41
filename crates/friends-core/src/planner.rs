// crates/friends-core/src/planner.rs
use crate::error::{FriendsError, Result};
use crate::loader::load_friends;
use crate::model::Friend;
use crate::raw::FriendRaw;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// Friends strictly closer than this many kilometres are invited.
pub const INVITE_RADIUS_KM: f64 = 100.0;

/// Resolves every raw record, keeps those within [`INVITE_RADIUS_KM`] of the
/// origin and returns them ordered by `user_id`.
///
/// Fails with [`FriendsError::DuplicateUserId`] if two records share an id.
pub fn plan_invitations(friends: &[FriendRaw]) -> Result<Vec<Friend>> {
    let mut invites = Vec::new();
    let mut seen: HashSet<i64> = HashSet::new();
    for raw in friends {
        if !seen.insert(raw.user_id) {
            return Err(FriendsError::DuplicateUserId(raw.user_id));
        }
        let friend = Friend::try_from(raw.clone())?;
        debug!(
            "user_id {} is {:.3} km away",
            friend.user_id(),
            friend.distance_from_origin()
        );
        if friend.distance_from_origin() < INVITE_RADIUS_KM {
            invites.push(friend);
        }
    }
    info!("{} of {} friends within {INVITE_RADIUS_KM} km", invites.len(), friends.len());
    Ok(sort_friends(invites))
}

/// Orders friends by `user_id`, ascending.
pub fn sort_friends(mut friends: Vec<Friend>) -> Vec<Friend> {
    friends.sort_by_key(Friend::user_id);
    friends
}

/// Loads the friend list at `path` and plans the invitations.
pub fn invite_from_path(path: impl AsRef<Path>) -> Result<Vec<Friend>> {
    let friends = load_friends(path)?;
    plan_invitations(&friends)
}
