//! See documentation for [`GeometryType`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Value of the GeoJSON `type` member.
///
/// The codec reads the discriminator into this enum once, at the boundary. Everything else matches on
/// [`Geometry`](crate::Geometry) variants directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// `Point`
    Point,
    /// `MultiPoint`
    MultiPoint,
    /// `LineString`
    LineString,
    /// `MultiLineString`
    MultiLineString,
    /// `Polygon`
    Polygon,
    /// `MultiPolygon`
    MultiPolygon,
    /// `GeometryCollection`
    GeometryCollection,
    /// `Feature`
    Feature,
    /// `FeatureCollection`
    FeatureCollection,
}

impl GeometryType {
    /// Name of the type as used in GeoJSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Feature => "Feature",
            GeometryType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Feature and FeatureCollection wrap other geometries instead of having coordinates.
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            GeometryType::Feature | GeometryType::FeatureCollection
        )
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Point" => GeometryType::Point,
            "MultiPoint" => GeometryType::MultiPoint,
            "LineString" => GeometryType::LineString,
            "MultiLineString" => GeometryType::MultiLineString,
            "Polygon" => GeometryType::Polygon,
            "MultiPolygon" => GeometryType::MultiPolygon,
            "GeometryCollection" => GeometryType::GeometryCollection,
            "Feature" => GeometryType::Feature,
            "FeatureCollection" => GeometryType::FeatureCollection,
            other => {
                return Err(GeometryError::InvalidGeoJson(format!(
                    "unknown geometry type '{other}'"
                )))
            }
        })
    }
}
