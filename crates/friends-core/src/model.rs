// crates/friends-core/src/model.rs
use crate::error::{FriendsError, Result};
use crate::geo::{distance_from_origin, in_radian};
use crate::raw::{CoordinateRaw, FriendRaw};
use serde::Serialize;

/// A friend with resolved coordinates.
///
/// `distance_from_origin` is computed once in [`Friend::new`] and is only
/// readable afterwards, so it always matches `latitude`/`longitude`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Friend {
    user_id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    distance_from_origin: f64,
}

impl Friend {
    /// Builds a friend from coordinates in degrees.
    pub fn new(user_id: i64, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        let distance_from_origin = distance_from_origin(in_radian(latitude), in_radian(longitude));
        Self {
            user_id,
            name: name.into(),
            latitude,
            longitude,
            distance_from_origin,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Distance from the origin in kilometres.
    pub fn distance_from_origin(&self) -> f64 {
        self.distance_from_origin
    }
}

impl TryFrom<FriendRaw> for Friend {
    type Error = FriendsError;

    fn try_from(raw: FriendRaw) -> Result<Self> {
        let latitude = raw
            .latitude
            .to_degrees()
            .ok_or_else(|| invalid(raw.user_id, "latitude", &raw.latitude))?;
        let longitude = raw
            .longitude
            .to_degrees()
            .ok_or_else(|| invalid(raw.user_id, "longitude", &raw.longitude))?;
        Ok(Friend::new(raw.user_id, raw.name, latitude, longitude))
    }
}

fn invalid(user_id: i64, field: &'static str, value: &CoordinateRaw) -> FriendsError {
    let value = match value {
        CoordinateRaw::Number(n) => n.to_string(),
        CoordinateRaw::Text(s) => s.clone(),
    };
    FriendsError::InvalidCoordinate {
        user_id,
        field,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_derived_at_construction() {
        let f = Friend::new(1, "Arun", 12.986375, 77.043701);
        assert!((f.distance_from_origin() - 64.26480291995638).abs() < 1e-6);
        assert_eq!(f.latitude(), 12.986375);
        assert_eq!(f.longitude(), 77.043701);
    }

    #[test]
    fn converts_from_raw_with_text_coordinates() {
        let raw = FriendRaw::new(3, "Palak", "13.254755", "78.111111");
        let f = Friend::try_from(raw).unwrap();
        assert_eq!(f.user_id(), 3);
        assert_eq!(f.name(), "Palak");
        assert!((f.distance_from_origin() - 60.91863541658307).abs() < 1e-6);
    }

    #[test]
    fn bad_coordinate_names_user_and_field() {
        let raw = FriendRaw::new(7, "Ghost", 12.0, "east-ish");
        match Friend::try_from(raw) {
            Err(FriendsError::InvalidCoordinate { user_id, field, .. }) => {
                assert_eq!(user_id, 7);
                assert_eq!(field, "longitude");
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }
}
