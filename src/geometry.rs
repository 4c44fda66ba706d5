use serde::Deserialize;
use serde_json::Value;

use crate::point::{GeoPoint, Ring};
use crate::polygon::compute_area;

/// `[lon, lat]` rings, GeoJSON axis order.
pub type PolygonCoordinates = Vec<Vec<[f64; 2]>>;

/// The part of a GeoJSON geometry this crate understands. Anything else a
/// geocoder may hand over lands in `Unrecognized`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum GeoJsonGeometry {
    Polygon(PolygonCoordinates),
    MultiPolygon(Vec<PolygonCoordinates>),
    Unrecognized,
}

impl From<Value> for GeoJsonGeometry {
    fn from(value: Value) -> Self {
        GeoJsonGeometry::from(&value)
    }
}

impl From<&Value> for GeoJsonGeometry {
    fn from(value: &Value) -> Self {
        let coordinates = value.get("coordinates");
        match value.get("type").and_then(Value::as_str) {
            Some("Polygon") => GeoJsonGeometry::Polygon(coordinates.map(polygon).unwrap_or_default()),
            Some("MultiPolygon") => GeoJsonGeometry::MultiPolygon(
                coordinates
                    .and_then(Value::as_array)
                    .map(|polygons| polygons.iter().map(polygon).collect())
                    .unwrap_or_default(),
            ),
            Some(other) => {
                log::debug!("unrecognized geometry type: {}", other);
                GeoJsonGeometry::Unrecognized
            }
            None => GeoJsonGeometry::Unrecognized,
        }
    }
}

fn polygon(value: &Value) -> PolygonCoordinates {
    match value.as_array() {
        Some(rings) => rings.iter().map(ring).collect(),
        None => Vec::new(),
    }
}

fn ring(value: &Value) -> Vec<[f64; 2]> {
    let Some(positions) = value.as_array() else {
        return Vec::new();
    };
    positions
        .iter()
        .filter_map(|p| {
            let pos = position(p);
            if pos.is_none() {
                log::debug!("skipping malformed position: {}", p);
            }
            pos
        })
        .collect()
}

fn position(value: &Value) -> Option<[f64; 2]> {
    let p = value.as_array()?;
    let lon = p.first()?.as_f64()?;
    let lat = p.get(1)?.as_f64()?;
    Some([lon, lat])
}

fn from_positions(ring: &[Vec<f64>]) -> Vec<[f64; 2]> {
    ring.iter()
        .filter_map(|p| match p.as_slice() {
            [lon, lat, ..] => Some([*lon, *lat]),
            _ => None,
        })
        .collect()
}

impl From<&geojson::Geometry> for GeoJsonGeometry {
    fn from(geometry: &geojson::Geometry) -> Self {
        match &geometry.value {
            geojson::Value::Polygon(rings) => {
                GeoJsonGeometry::Polygon(rings.iter().map(|r| from_positions(r)).collect())
            }
            geojson::Value::MultiPolygon(polygons) => GeoJsonGeometry::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| rings.iter().map(|r| from_positions(r)).collect())
                    .collect(),
            ),
            _ => GeoJsonGeometry::Unrecognized,
        }
    }
}

/// Flips GeoJSON `[lon, lat]` pairs into points.
fn flip(ring: &[[f64; 2]]) -> Ring {
    ring.iter().map(|[lon, lat]| GeoPoint::new(*lat, *lon)).collect()
}

fn outer_ring(polygon: &PolygonCoordinates) -> Option<Ring> {
    let outer = polygon.first()?;
    if outer.is_empty() {
        return None;
    }
    Some(flip(outer))
}

/// Picks the candidate with the strictly greatest planar area. The running
/// maximum starts at zero, so a zero-area candidate is never chosen.
pub fn largest_ring<I>(candidates: I) -> Option<Ring>
where
    I: IntoIterator<Item = Ring>,
{
    let mut max_area = 0.0;
    let mut best = None;
    for ring in candidates {
        let area = compute_area(&ring);
        log::trace!("candidate ring: len: {}, area: {:.8}", ring.len(), area);
        if area > max_area {
            max_area = area;
            best = Some(ring);
        }
    }
    best
}

/// Outer ring of a Polygon, or the largest outer ring of a MultiPolygon, in
/// (lat, lon) order. Holes are ignored. Returns `None` whenever no usable
/// ring exists.
pub fn extract_largest_outer_ring(geometry: Option<&GeoJsonGeometry>) -> Option<Ring> {
    match geometry? {
        GeoJsonGeometry::Polygon(rings) => outer_ring(rings),
        GeoJsonGeometry::MultiPolygon(polygons) => {
            largest_ring(polygons.iter().filter_map(outer_ring))
        }
        GeoJsonGeometry::Unrecognized => None,
    }
}
