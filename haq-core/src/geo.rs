//! World boundary features.
//!
//! The boundary file is a GeoJSON `FeatureCollection` whose features carry
//! the country name in a `NAME` property. Only the name and the polygon
//! rings are kept; everything else in the file is ignored.

use crate::error::{HaqError, Result};
use geojson::{GeoJson, Value};

/// Property holding the country name, matched verbatim against
/// `location_name` in the dataset.
pub const NAME_PROPERTY: &str = "NAME";

/// A closed ring of `[longitude, latitude]` positions in degrees.
pub type Ring = Vec<[f64; 2]>;

/// One country (or territory) from the boundary file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    /// Value of the `NAME` property, or empty when absent.
    pub name: String,
    /// Polygons, each an exterior ring followed by its holes.
    pub polygons: Vec<Vec<Ring>>,
}

impl GeoFeature {
    /// All rings of all polygons, exterior and holes alike.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }

    /// False when the geometry was null or not polygonal.
    pub fn is_drawable(&self) -> bool {
        self.rings().any(|ring| !ring.is_empty())
    }
}

/// Parse a GeoJSON `FeatureCollection` into features, in file order.
///
/// # Example
///
/// ```rust
/// let json = r#"{"type":"FeatureCollection","features":[
///   {"type":"Feature","properties":{"NAME":"Chad"},
///    "geometry":{"type":"Polygon","coordinates":[[[14,8],[24,8],[24,23],[14,8]]]}}]}"#;
/// let features = haq_core::geo::parse_features(json).unwrap();
/// assert_eq!(features[0].name, "Chad");
/// assert_eq!(features[0].polygons[0][0].len(), 4);
/// ```
pub fn parse_features(json: &str) -> Result<Vec<GeoFeature>> {
    let geojson: GeoJson = json.parse()?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        GeoJson::Feature(_) => return Err(HaqError::NotFeatureCollection("Feature")),
        GeoJson::Geometry(_) => return Err(HaqError::NotFeatureCollection("Geometry")),
    };

    let features: Vec<GeoFeature> = collection
        .features
        .into_iter()
        .map(|feature| {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(NAME_PROPERTY))
                .and_then(|value| value.as_str())
                .unwrap_or("")
                .to_string();
            let polygons = feature
                .geometry
                .map(|geometry| polygons_of(geometry.value))
                .unwrap_or_default();
            GeoFeature { name, polygons }
        })
        .collect();

    log::info!("geo: parsed {} boundary features", features.len());
    Ok(features)
}

fn polygons_of(value: Value) -> Vec<Vec<Ring>> {
    match value {
        Value::Polygon(rings) => vec![convert_polygon(rings)],
        Value::MultiPolygon(polygons) => polygons.into_iter().map(convert_polygon).collect(),
        _ => Vec::new(),
    }
}

fn convert_polygon(rings: Vec<Vec<Vec<f64>>>) -> Vec<Ring> {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter_map(|position| match position.as_slice() {
                    [lon, lat, ..] => Some([*lon, *lat]),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(features: &str) -> String {
        format!(r#"{{"type":"FeatureCollection","features":[{features}]}}"#)
    }

    #[test]
    fn parses_polygon_and_multipolygon() {
        let json = collection(
            r#"{"type":"Feature","properties":{"NAME":"India"},
                "geometry":{"type":"Polygon","coordinates":[[[68,7],[97,7],[97,35],[68,7]]]}},
               {"type":"Feature","properties":{"NAME":"Japan"},
                "geometry":{"type":"MultiPolygon","coordinates":[
                  [[[130,31],[132,31],[132,34],[130,31]]],
                  [[[139,35],[141,35],[141,41],[139,35]]]]}}"#,
        );
        let features = parse_features(&json).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].polygons.len(), 1);
        assert_eq!(features[1].name, "Japan");
        assert_eq!(features[1].polygons.len(), 2);
        assert_eq!(features[1].rings().count(), 2);
        assert_eq!(features[0].polygons[0][0][1], [97.0, 7.0]);
    }

    #[test]
    fn missing_name_and_null_geometry_are_tolerated() {
        let json = collection(
            r#"{"type":"Feature","properties":{"ISO":"XX"},"geometry":null},
               {"type":"Feature","properties":null,
                "geometry":{"type":"Point","coordinates":[1,2]}}"#,
        );
        let features = parse_features(&json).unwrap();
        assert_eq!(features.len(), 2);
        assert!(features.iter().all(|f| f.name.is_empty()));
        assert!(features.iter().all(|f| !f.is_drawable()));
    }

    #[test]
    fn non_string_name_is_treated_as_missing() {
        let json = collection(
            r#"{"type":"Feature","properties":{"NAME":42},
                "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#,
        );
        let features = parse_features(&json).unwrap();
        assert_eq!(features[0].name, "");
        assert!(features[0].is_drawable());
    }

    #[test]
    fn rejects_non_collection_root() {
        let json = r#"{"type":"Point","coordinates":[1,2]}"#;
        match parse_features(json) {
            Err(HaqError::NotFeatureCollection(kind)) => assert_eq!(kind, "Geometry"),
            other => panic!("expected NotFeatureCollection, got {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_features("{not json"),
            Err(HaqError::GeoJsonParse(_))
        ));
    }
}
