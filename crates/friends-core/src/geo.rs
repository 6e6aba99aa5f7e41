// crates/friends-core/src/geo.rs

//! # Great-circle distance
//!
//! Distances are measured on a sphere of radius [`EARTH_RADIUS_KM`] with the
//! spherical law of cosines. Every function here works in **radians**;
//! degrees are converted exactly once, through [`in_radian`] or
//! [`GeoPoint::from_degrees`].

use once_cell::sync::Lazy;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude of the origin ("me"), in degrees.
pub const ORIGIN_LATITUDE_DEG: f64 = 12.9611159;
/// Longitude of the origin ("me"), in degrees.
pub const ORIGIN_LONGITUDE_DEG: f64 = 77.6362214;

/// The fixed reference point every friend is measured from.
pub static ORIGIN: Lazy<GeoPoint> =
    Lazy::new(|| GeoPoint::from_degrees(ORIGIN_LATITUDE_DEG, ORIGIN_LONGITUDE_DEG));

/// Converts an angle from degrees to radians (`degrees * π / 180`).
#[inline]
pub fn in_radian(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// A point on the sphere, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::from_radians(in_radian(latitude), in_radian(longitude))
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let dlambda = other.longitude - self.longitude;
        let cos_sigma = self.latitude.sin() * other.latitude.sin()
            + self.latitude.cos() * other.latitude.cos() * dlambda.cos();
        // rounding can push |cos_sigma| past 1 for (near-)identical points
        let dsigma = cos_sigma.clamp(-1.0, 1.0).acos();
        EARTH_RADIUS_KM * dsigma
    }
}

/// Distance in kilometres from [`ORIGIN`] to a point given in radians.
pub fn distance_from_origin(latitude: f64, longitude: f64) -> f64 {
    ORIGIN.distance_km(&GeoPoint::from_radians(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-6;

    #[test]
    fn in_radian_converts_half_turn() {
        assert!((in_radian(180.0) - PI).abs() < 1e-12);
        assert_eq!(in_radian(0.0), 0.0);
        assert!((in_radian(-90.0) + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn distance_takes_radians_without_reconverting() {
        // 11.92893 / 78.27699 are fed in as-is, i.e. as radians
        let d = distance_from_origin(11.92893, 78.27699);
        assert!((d - 10624.327726157604).abs() < EPS, "got {d}");
    }

    #[test]
    fn origin_is_zero_km_from_itself() {
        let d = distance_from_origin(ORIGIN.latitude, ORIGIN.longitude);
        assert!(d.is_finite());
        assert!(d < 1e-3, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::from_degrees(12.986375, 77.043701);
        let b = GeoPoint::from_degrees(9.022445, 90.123456);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < EPS);
    }

    #[test]
    fn antipodes_are_half_circumference_apart() {
        let a = GeoPoint::from_degrees(0.0, 0.0);
        let b = GeoPoint::from_degrees(0.0, 180.0);
        assert!((a.distance_km(&b) - PI * EARTH_RADIUS_KM).abs() < EPS);
    }
}
