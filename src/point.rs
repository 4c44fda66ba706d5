use core::fmt;

/// A position in decimal degrees, latitude first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Closed ring of points. The last point connects back to the first
/// without being repeated.
pub type Ring = Vec<GeoPoint>;

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Same point with its longitude brought into [-180, 180).
    pub fn wrapped(&self) -> Self {
        let lon = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        GeoPoint { lat: self.lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geo(lat: {:.5}, lon: {:.5})", self.lat, self.lon)
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Coord { x: p.lon, y: p.lat }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoBoundingBox {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl GeoBoundingBox {
    pub fn of(ring: &[GeoPoint]) -> Option<Self> {
        let first = *ring.first()?;
        let (min, max) = ring.iter().fold((first, first), |(min, max), curr| {
            (
                GeoPoint::new(min.lat.min(curr.lat), min.lon.min(curr.lon)),
                GeoPoint::new(max.lat.max(curr.lat), max.lon.max(curr.lon)),
            )
        });
        Some(GeoBoundingBox { min, max })
    }
    pub fn width(&self) -> f64 {
        self.max.lon - self.min.lon
    }
    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }
    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.lon >= self.min.lon && p.lon <= self.max.lon && p.lat >= self.min.lat && p.lat <= self.max.lat
    }
    pub fn union(&self, other: &Self) -> Self {
        GeoBoundingBox {
            min: GeoPoint::new(self.min.lat.min(other.min.lat), self.min.lon.min(other.min.lon)),
            max: GeoPoint::new(self.max.lat.max(other.max.lat), self.max.lon.max(other.max.lon)),
        }
    }
}

impl fmt::Display for GeoBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geobbox(min: {}, max: {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_keeps_inside_values() {
        let p = GeoPoint::new(48.1, 11.5).wrapped();
        assert_eq!(p, GeoPoint::new(48.1, 11.5));
    }

    #[test]
    fn test_wrapped_antimeridian() {
        assert!((GeoPoint::new(0.0, 181.0).wrapped().lon + 179.0).abs() < 1e-9);
        assert!((GeoPoint::new(0.0, -181.0).wrapped().lon - 179.0).abs() < 1e-9);
        assert_eq!(GeoPoint::new(0.0, 180.0).wrapped().lon, -180.0);
        assert_eq!(GeoPoint::new(10.0, 540.0).wrapped().lat, 10.0);
    }

    #[test]
    fn test_bbox() {
        let ring = vec![
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(-1.0, 5.0),
            GeoPoint::new(3.0, 0.0),
        ];
        let b = GeoBoundingBox::of(&ring).unwrap();
        assert_eq!(b.min, GeoPoint::new(-1.0, 0.0));
        assert_eq!(b.max, GeoPoint::new(3.0, 5.0));
        assert_eq!(b.width(), 5.0);
        assert_eq!(b.height(), 4.0);
        assert!(b.contains(&GeoPoint::new(0.0, 1.0)));
        assert!(!b.contains(&GeoPoint::new(4.0, 1.0)));
    }

    #[test]
    fn test_bbox_empty() {
        assert!(GeoBoundingBox::of(&[]).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GeoPoint::new(1.0, -2.5).to_string(),
            "geo(lat: 1.00000, lon: -2.50000)"
        );
    }
}
