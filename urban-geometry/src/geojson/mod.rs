//! GeoJSON codec.
//!
//! [`load`] turns a GeoJSON document into a [`Geometry`], [`dump`] does the reverse. Besides the standard members,
//! geometries may carry a non-standard `crs` member:
//!
//! ```json
//! {
//!     "type": "Point",
//!     "coordinates": [30.5, 50.4],
//!     "crs": { "type": "name", "properties": { "name": "EPSG:4326" } }
//! }
//! ```
//!
//! [`loads`] accepts GeoJSON text and falls back to WKT (or EWKT) for text that is not JSON at all.

use ::geojson::feature::Id;
use ::geojson::{GeoJson, Value};
use serde_json::{Map, Value as JsonValue};

use crate::error::GeometryError;
use crate::geometry_type::GeometryType;
use crate::impls::{
    Feature, FeatureCollection, FeatureId, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::{Crs, Geometry};

mod position;
mod wkt;

/// Loads a geometry from a GeoJSON document.
///
/// If `crs` is given, it takes precedence over any CRS found in the document: the `crs` members it replaces are
/// dropped before the document is validated. For a feature the override is applied to its geometry, for a feature
/// collection to the geometry of every feature.
///
/// ```
/// use serde_json::json;
/// use urban_geometry::{geojson, Crs, Geometry};
///
/// let document = json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]});
/// let line = geojson::load(document, Some("EPSG:4326".into())).unwrap();
///
/// assert!(matches!(line, Geometry::LineString(_)));
/// assert_eq!(line.crs(), Some(&Crs::WGS84));
/// ```
pub fn load(mut document: JsonValue, crs: Option<Crs>) -> Result<Geometry, GeometryError> {
    read_type(&document)?;
    if crs.is_some() {
        remove_overridden_crs(&mut document);
    }

    let geojson = GeoJson::from_json_value(document)
        .map_err(|err| GeometryError::InvalidGeoJson(err.to_string()))?;

    let geometry = convert_geojson(geojson)?;
    Ok(match crs {
        Some(crs) => geometry.with_crs(Some(crs)),
        None => geometry,
    })
}

/// Loads a geometry from text.
///
/// The text is parsed as GeoJSON first. If it is not JSON, it is parsed as WKT, optionally prefixed by an EWKT
/// `SRID=<code>;` tag which becomes an `EPSG:<code>` CRS unless `crs` is given. JSON that is not valid GeoJSON is an
/// [`GeometryError::InvalidGeoJson`] error; text that is neither JSON nor WKT is [`GeometryError::InvalidEwkt`].
pub fn loads(text: &str, crs: Option<Crs>) -> Result<Geometry, GeometryError> {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(document) => load(document, crs),
        Err(err) => {
            log::debug!("Input is not JSON ({err}), trying to parse it as WKT");
            wkt::load_ewkt(text, crs)
        }
    }
}

/// Converts a geometry into a GeoJSON document.
///
/// `load(dump(g), None) == g` for every geometry that was loaded or built with the checked (`try_new`) constructors.
/// Geometries built with unchecked constructors are dumped as they are, even if `load` would reject the result.
pub fn dump(geometry: &Geometry) -> JsonValue {
    to_geojson(geometry).to_json_value()
}

/// Converts a geometry into GeoJSON text.
pub fn dumps(geometry: &Geometry) -> String {
    dump(geometry).to_string()
}

fn read_type(document: &JsonValue) -> Result<GeometryType, GeometryError> {
    let object = document.as_object().ok_or_else(|| {
        GeometryError::InvalidGeoJson("GeoJSON document must be an object".to_string())
    })?;

    match object.get("type") {
        Some(JsonValue::String(name)) => name.parse(),
        Some(_) => Err(GeometryError::InvalidGeoJson(
            "'type' member must be a string".to_string(),
        )),
        None => Err(GeometryError::InvalidGeoJson(
            "'type' member is missing".to_string(),
        )),
    }
}

/// Drops the `crs` members an override replaces: the one of the document itself, and for features the ones of the
/// feature geometries.
fn remove_overridden_crs(document: &mut JsonValue) {
    let Some(object) = document.as_object_mut() else {
        return;
    };

    object.remove("crs");
    let kind = object
        .get("type")
        .and_then(JsonValue::as_str)
        .map(str::to_owned);

    match kind.as_deref() {
        Some("Feature") => remove_geometry_crs(object),
        Some("FeatureCollection") => {
            if let Some(JsonValue::Array(features)) = object.get_mut("features") {
                for feature in features.iter_mut().filter_map(JsonValue::as_object_mut) {
                    feature.remove("crs");
                    remove_geometry_crs(feature);
                }
            }
        }
        _ => {}
    }
}

fn remove_geometry_crs(feature: &mut Map<String, JsonValue>) {
    if let Some(geometry) = feature
        .get_mut("geometry")
        .and_then(JsonValue::as_object_mut)
    {
        geometry.remove("crs");
    }
}

fn read_crs(members: Option<&Map<String, JsonValue>>) -> Result<Option<Crs>, GeometryError> {
    match members.and_then(|m| m.get("crs")) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| GeometryError::InvalidGeoJson(format!("invalid 'crs' member: {err}"))),
    }
}

fn convert_geojson(geojson: GeoJson) -> Result<Geometry, GeometryError> {
    match geojson {
        GeoJson::Geometry(geometry) => convert_geometry(geometry),
        GeoJson::Feature(feature) => Ok(Geometry::Feature(convert_feature(feature, None)?)),
        GeoJson::FeatureCollection(collection) => {
            let inherited = read_crs(collection.foreign_members.as_ref())?;
            let features = collection
                .features
                .into_iter()
                .map(|f| convert_feature(f, inherited.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::FeatureCollection(FeatureCollection::new(features)))
        }
    }
}

/// A `crs` member on a feature (or on its collection) applies to the feature geometry unless the geometry has its
/// own one.
fn convert_feature(
    feature: ::geojson::Feature,
    inherited: Option<&Crs>,
) -> Result<Feature, GeometryError> {
    let crs = read_crs(feature.foreign_members.as_ref())?.or_else(|| inherited.cloned());
    let geometry = feature
        .geometry
        .ok_or_else(|| GeometryError::InvalidGeoJson("feature has no geometry".to_string()))?;

    let mut geometry = convert_geometry(geometry)?;
    if geometry.crs().is_none() && crs.is_some() {
        geometry = geometry.with_crs(crs);
    }

    Ok(Feature::new(geometry)?
        .with_id(feature.id.map(|id| match id {
            Id::String(s) => FeatureId::String(s),
            Id::Number(n) => FeatureId::Number(n),
        }))
        .with_properties(feature.properties))
}

fn convert_geometry(geometry: ::geojson::Geometry) -> Result<Geometry, GeometryError> {
    let crs = read_crs(geometry.foreign_members.as_ref())?;

    Ok(match geometry.value {
        Value::Point(p) => Point::new(position::coord(&p)?).with_crs(crs).into(),
        Value::MultiPoint(points) => MultiPoint::try_new(position::coords(&points)?)?
            .with_crs(crs)
            .into(),
        Value::LineString(line) => LineString::try_new(position::coords(&line)?)?
            .with_crs(crs)
            .into(),
        Value::MultiLineString(lines) => MultiLineString::try_new(position::nested(&lines)?)?
            .with_crs(crs)
            .into(),
        Value::Polygon(rings) => Polygon::try_new(position::nested(&rings)?)?
            .with_crs(crs)
            .into(),
        Value::MultiPolygon(polygons) => MultiPolygon::try_new(position::polygons(&polygons)?)?
            .with_crs(crs)
            .into(),
        Value::GeometryCollection(geometries) => {
            let geometries = geometries
                .into_iter()
                .map(convert_geometry)
                .collect::<Result<Vec<_>, _>>()?;
            GeometryCollection::from_parts(geometries, crs).into()
        }
    })
}

fn to_geojson(geometry: &Geometry) -> GeoJson {
    match geometry {
        Geometry::Feature(feature) => GeoJson::Feature(feature_to_geojson(feature)),
        Geometry::FeatureCollection(collection) => {
            GeoJson::FeatureCollection(::geojson::FeatureCollection {
                bbox: None,
                features: collection
                    .features()
                    .iter()
                    .map(feature_to_geojson)
                    .collect(),
                foreign_members: None,
            })
        }
        _ => GeoJson::Geometry(geometry_to_geojson(geometry)),
    }
}

fn feature_to_geojson(feature: &Feature) -> ::geojson::Feature {
    ::geojson::Feature {
        bbox: None,
        geometry: Some(geometry_to_geojson(feature.geometry())),
        id: feature.id().map(|id| match id {
            FeatureId::String(s) => Id::String(s.clone()),
            FeatureId::Number(n) => Id::Number(n.clone()),
        }),
        properties: feature.properties().cloned(),
        foreign_members: None,
    }
}

fn geometry_to_geojson(geometry: &Geometry) -> ::geojson::Geometry {
    let value = match geometry {
        Geometry::Point(v) => Value::Point(v.coordinates().to_position()),
        Geometry::MultiPoint(v) => Value::MultiPoint(position::positions(v.coordinates())),
        Geometry::LineString(v) => Value::LineString(position::positions(v.coordinates())),
        Geometry::MultiLineString(v) => {
            Value::MultiLineString(position::nested_positions(v.coordinates()))
        }
        Geometry::Polygon(v) => Value::Polygon(position::nested_positions(v.coordinates())),
        Geometry::MultiPolygon(v) => Value::MultiPolygon(
            v.coordinates()
                .iter()
                .map(|rings| position::nested_positions(rings))
                .collect(),
        ),
        Geometry::GeometryCollection(v) => {
            Value::GeometryCollection(v.geometries().iter().map(geometry_to_geojson).collect())
        }
        // Wrappers can't be nested into geometries, these two arms only make the conversion total.
        Geometry::Feature(v) => return geometry_to_geojson(v.geometry()),
        Geometry::FeatureCollection(v) => Value::GeometryCollection(
            v.features()
                .iter()
                .map(|f| geometry_to_geojson(f.geometry()))
                .collect(),
        ),
    };

    let foreign_members = geometry.crs().map(|crs| {
        let mut members = Map::new();
        members.insert("crs".to_string(), crs.to_json());
        members
    });

    ::geojson::Geometry {
        bbox: None,
        value,
        foreign_members,
    }
}
