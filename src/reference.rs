use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::Direction;
use geo::{Distance, Haversine, Orient, Point};

use crate::point::GeoPoint;
use crate::polygon::to_geo_polygon;

/// Ellipsoidal area of a ring in square meters (geo crate).
pub fn geodesic_area(ring: &[GeoPoint]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let geo_polygon = to_geo_polygon(ring).orient(Direction::Default);
    geo_polygon.geodesic_area_unsigned()
}

/// Great-circle distance in meters (geo crate).
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    Haversine.distance(Point::from(*a), Point::from(*b))
}
