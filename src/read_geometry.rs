use std::fs;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::GeoJsonGeometry;

/// Collects every geometry in a GeoJSON document: a FeatureCollection, a
/// single Feature, a GeometryCollection or a bare geometry. Features without
/// geometry are skipped.
pub fn read_str(content: &str) -> Result<Vec<GeoJsonGeometry>> {
    let value: Value = serde_json::from_str(content)?;
    let mut ret = Vec::new();
    collect(&value, &mut ret);
    Ok(ret)
}

pub fn read_file(filename: &str) -> Result<Vec<GeoJsonGeometry>> {
    let content = fs::read_to_string(filename).map_err(|source| Error::Io {
        path: filename.to_string(),
        source,
    })?;
    let ret = read_str(&content)?;
    log::info!("{}: {} geometries", filename, ret.len());
    Ok(ret)
}

fn collect(value: &Value, out: &mut Vec<GeoJsonGeometry>) {
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            for feature in value.get("features").and_then(Value::as_array).into_iter().flatten() {
                collect(feature, out);
            }
        }
        Some("Feature") => match value.get("geometry") {
            Some(geometry) if !geometry.is_null() => collect(geometry, out),
            _ => log::trace!("feature without geometry"),
        },
        Some("GeometryCollection") => {
            for geometry in value.get("geometries").and_then(Value::as_array).into_iter().flatten() {
                collect(geometry, out);
            }
        }
        _ => out.push(GeoJsonGeometry::from(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::extract_largest_outer_ring;

    #[test]
    fn test_feature_collection() {
        let content = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "a"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1]]]}},
                {"type": "Feature", "properties": {}, "geometry": null},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [5, 5]}}
            ]
        }"#;
        let geometries = read_str(content).unwrap();
        assert_eq!(geometries.len(), 2);
        assert!(extract_largest_outer_ring(geometries.first()).is_some());
        assert_eq!(geometries[1], GeoJsonGeometry::Unrecognized);
    }

    #[test]
    fn test_bare_geometry() {
        let geometries =
            read_str(r#"{"type": "MultiPolygon", "coordinates": [[[[0,0],[0,2],[2,2],[2,0]]]]}"#)
                .unwrap();
        assert_eq!(geometries.len(), 1);
        assert_eq!(extract_largest_outer_ring(geometries.first()).unwrap().len(), 4);
    }

    #[test]
    fn test_geometry_collection_is_flattened() {
        let content = r#"{"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1]]]},
            {"type": "Polygon", "coordinates": [[[0,0],[3,0],[3,3]]]}
        ]}"#;
        assert_eq!(read_str(content).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(read_str("{not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = read_file("/nonexistent/area.geojson").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/area.geojson"));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join("radius_toolkit_read_file.geojson");
        fs::write(
            &path,
            r#"{"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1]]]}}"#,
        )
        .unwrap();
        let geometries = read_file(path.to_str().unwrap()).unwrap();
        assert_eq!(geometries.len(), 1);
        fs::remove_file(&path).ok();
    }
}
