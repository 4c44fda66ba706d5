use geo::{Coord, LineString};

use crate::point::{GeoBoundingBox, GeoPoint};

/// Planar Shoelace area of a closed ring, with latitude and longitude used
/// directly as plane coordinates. Only meaningful for comparing rings.
pub fn compute_area(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = &ring[i];
        let p2 = &ring[(i + 1) % n];
        sum += p1.lon * p2.lat - p2.lon * p1.lat;
    }
    sum.abs() / 2.0
}

pub fn info(ring: &[GeoPoint]) {
    log::info!("ring: len: {}", ring.len());
    if let Some(bbox) = GeoBoundingBox::of(ring) {
        log::info!("ring: bbox: {}", bbox);
        log::info!("ring: width: {:.5} deg", bbox.width());
        log::info!("ring: height: {:.5} deg", bbox.height());
    }
    log::info!("ring: planar area: {:.8} deg^2", compute_area(ring));
}

/// Builds a `geo::Polygon` (x = lon, y = lat) without holes. The exterior
/// is closed explicitly, as geo-types expects.
pub fn to_geo_polygon(ring: &[GeoPoint]) -> geo::Polygon<f64> {
    let mut coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord::from(*p)).collect();
    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(*first);
        }
    }
    geo::Polygon::new(LineString::new(coords), vec![])
}
