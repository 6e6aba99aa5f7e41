// crates/friends-core/src/lib.rs

//! Loads a line-delimited JSON friend list, measures each friend's
//! great-circle distance from a fixed origin and plans who gets invited.
//!
//! ```no_run
//! use friends_core::invite_from_path;
//!
//! for friend in invite_from_path("friend_list.json").unwrap() {
//!     println!("{} {}", friend.user_id(), friend.name());
//! }
//! ```

pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod planner;
pub mod prelude;
// Raw line records, before coordinates are resolved
pub mod raw;

// Re-exports
pub use crate::error::{FriendsError, Result};
pub use crate::geo::{distance_from_origin, in_radian, GeoPoint, EARTH_RADIUS_KM, ORIGIN};
pub use crate::loader::{load_friends, parse_friends, DEFAULT_FRIENDS_FILE};
pub use crate::model::Friend;
pub use crate::planner::{invite_from_path, plan_invitations, sort_friends, INVITE_RADIUS_KM};
pub use crate::raw::{CoordinateRaw, FriendRaw};
