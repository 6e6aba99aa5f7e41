// crates/friends-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// A coordinate as it appears in the input: either a JSON string such as
/// `"12.986375"` or a plain JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateRaw {
    Number(f64),
    Text(String),
}

impl CoordinateRaw {
    /// Parses the coordinate into degrees. Returns `None` for text that is not
    /// a finite number.
    pub fn to_degrees(&self) -> Option<f64> {
        let value = match self {
            CoordinateRaw::Number(n) => *n,
            CoordinateRaw::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for CoordinateRaw {
    fn from(value: f64) -> Self {
        CoordinateRaw::Number(value)
    }
}

impl From<&str> for CoordinateRaw {
    fn from(value: &str) -> Self {
        CoordinateRaw::Text(value.to_string())
    }
}

/// One line of the friend list, exactly as read.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendRaw {
    pub user_id: i64,
    pub name: String,
    pub latitude: CoordinateRaw,
    pub longitude: CoordinateRaw,
}

impl FriendRaw {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        latitude: impl Into<CoordinateRaw>,
        longitude: impl Into<CoordinateRaw>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_number_coordinates() {
        let line = r#"{"latitude": "12.986375", "user_id": 12, "name": "Chris", "longitude": 77.043701}"#;
        let raw: FriendRaw = serde_json::from_str(line).unwrap();
        assert_eq!(raw.user_id, 12);
        assert_eq!(raw.name, "Chris");
        assert_eq!(raw.latitude, CoordinateRaw::Text("12.986375".into()));
        assert_eq!(raw.longitude, CoordinateRaw::Number(77.043701));
        assert_eq!(raw.latitude.to_degrees(), Some(12.986375));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(CoordinateRaw::from("north").to_degrees(), None);
        assert_eq!(CoordinateRaw::from("NaN").to_degrees(), None);
        assert_eq!(CoordinateRaw::from(" 9.5 ").to_degrees(), Some(9.5));
    }

    #[test]
    fn missing_field_is_an_error() {
        let line = r#"{"latitude": "12.9", "user_id": 1, "name": "Arun"}"#;
        assert!(serde_json::from_str::<FriendRaw>(line).is_err());
    }
}
