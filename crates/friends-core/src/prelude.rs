// crates/friends-core/src/prelude.rs
//! friends-core prelude: bring common types into scope for demos and binaries.

pub use crate::error::{FriendsError, Result};
pub use crate::geo::{distance_from_origin, in_radian, GeoPoint, ORIGIN};
pub use crate::loader::{load_friends, parse_friends};
pub use crate::model::Friend;
pub use crate::planner::{invite_from_path, plan_invitations, sort_friends};
pub use crate::raw::FriendRaw;
