use crate::point::{GeoPoint, Ring};

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_POINT_COUNT: usize = 36;

/// Approximates the geodesic circle of `radius_km` around `center` with
/// `point_count` points, starting due north and going clockwise. The first
/// point is not repeated at the end.
///
/// No wrapping is applied: longitudes may leave [-180, 180] near the
/// antimeridian, see [`GeoPoint::wrapped`].
pub fn generate_circle(center: &GeoPoint, radius_km: f64, point_count: usize) -> Ring {
    let lat1 = center.lat.to_radians();
    let lon1 = center.lon.to_radians();
    let angular = radius_km / EARTH_RADIUS_KM;

    (0..point_count)
        .map(|i| {
            let bearing = (i as f64 * 360.0 / point_count as f64).to_radians();
            let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
            let lon2 = lon1
                + (bearing.sin() * angular.sin() * lat1.cos())
                    .atan2(angular.cos() - lat1.sin() * lat2.sin());
            GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
        })
        .collect()
}

/// Great-circle distance in kilometers on a sphere of [`EARTH_RADIUS_KM`].
pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadiusCircle {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub point_count: usize,
    pub ring: Ring,
}

impl RadiusCircle {
    pub fn new(center: GeoPoint, radius_km: f64, point_count: usize) -> Self {
        let ring = generate_circle(&center, radius_km, point_count);
        log::debug!(
            "circle: center: {}, radius: {:.3} km, points: {}",
            center,
            radius_km,
            ring.len()
        );
        RadiusCircle {
            center,
            radius_km,
            point_count,
            ring,
        }
    }

    pub fn with_default_points(center: GeoPoint, radius_km: f64) -> Self {
        Self::new(center, radius_km, DEFAULT_POINT_COUNT)
    }

    /// Longitudes of every ring point brought into [-180, 180).
    pub fn wrapped(mut self) -> Self {
        for p in &mut self.ring {
            *p = p.wrapped();
        }
        self
    }

    /// GeoJSON Polygon in `[lon, lat]` order. GeoJSON rings must be closed,
    /// so the first position is repeated.
    pub fn to_geojson(&self) -> geojson::Geometry {
        let mut positions: Vec<Vec<f64>> = self.ring.iter().map(|p| vec![p.lon, p.lat]).collect();
        if let Some(first) = positions.first().cloned() {
            positions.push(first);
        }
        geojson::Geometry::new(geojson::Value::Polygon(vec![positions]))
    }
}
