use geo::{Distance, Euclidean};
use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(LocationIdx, Location);

#[derive(Serialize, Debug, Clone)]
pub struct Location {
    external_id: String,
    point: geo::Point,
}

impl Location {
    pub fn new(external_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            external_id: external_id.into(),
            point: geo::Point::new(x, y),
        }
    }

    /// Creates an anonymous location, named after its coordinates.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self::new(format!("({x}, {y})"), x, y)
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &Location) -> f64 {
        Euclidean.distance(self.point, to.point)
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let a = Location::from_cartesian(0.0, 0.0);
        let b = Location::from_cartesian(3.0, 4.0);

        assert_eq!(a.euclidean_distance(&b), 5.0);
        assert_eq!(b.euclidean_distance(&a), 5.0);
        assert_eq!(a.euclidean_distance(&a), 0.0);
    }

    #[test]
    fn test_anonymous_location_id() {
        let location = Location::from_cartesian(1.0, 2.5);
        assert_eq!(location.external_id(), "(1, 2.5)");
    }
}
