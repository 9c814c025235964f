use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry_type::GeometryType;
use crate::impls::{
    Feature, FeatureCollection, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::{geojson, BoundingRect, Crs};

/// Any GeoJSON object: one of the seven geometry shapes, or a feature wrapper.
///
/// Values are immutable. Operations like [`Geometry::reverse`] or reprojection return new values.
///
/// `Geometry` implements `Serialize` and `Deserialize` through the GeoJSON [codec](crate::geojson), so it can be
/// embedded directly into request and response bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single position.
    Point(Point),
    /// Set of positions.
    MultiPoint(MultiPoint),
    /// Line.
    LineString(LineString),
    /// Set of lines.
    MultiLineString(MultiLineString),
    /// Polygon with optional holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Set of heterogeneous geometries.
    GeometryCollection(GeometryCollection),
    /// Geometry with properties.
    Feature(Feature),
    /// Set of features.
    FeatureCollection(FeatureCollection),
}

impl Geometry {
    /// Type of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::Feature(_) => GeometryType::Feature,
            Geometry::FeatureCollection(_) => GeometryType::FeatureCollection,
        }
    }

    /// Whether this is a feature or a feature collection.
    pub fn is_wrapper(&self) -> bool {
        self.geometry_type().is_wrapper()
    }

    /// Coordinate reference system of the geometry.
    ///
    /// For a feature this is the CRS of the wrapped geometry. A feature collection has no CRS.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Geometry::Point(v) => v.crs(),
            Geometry::MultiPoint(v) => v.crs(),
            Geometry::LineString(v) => v.crs(),
            Geometry::MultiLineString(v) => v.crs(),
            Geometry::Polygon(v) => v.crs(),
            Geometry::MultiPolygon(v) => v.crs(),
            Geometry::GeometryCollection(v) => v.crs(),
            Geometry::Feature(v) => v.crs(),
            Geometry::FeatureCollection(_) => None,
        }
    }

    /// Numeric spatial reference id of the geometry CRS. See [`Crs::srid`].
    pub fn srid(&self) -> Option<i32> {
        self.crs()?.srid()
    }

    /// Returns the same geometry with `crs` set.
    ///
    /// Features pass the CRS to their geometry, feature collections to the geometry of every feature. For a
    /// geometry collection only the CRS of the collection itself is replaced.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        match self {
            Geometry::Point(v) => Geometry::Point(v.with_crs(crs)),
            Geometry::MultiPoint(v) => Geometry::MultiPoint(v.with_crs(crs)),
            Geometry::LineString(v) => Geometry::LineString(v.with_crs(crs)),
            Geometry::MultiLineString(v) => Geometry::MultiLineString(v.with_crs(crs)),
            Geometry::Polygon(v) => Geometry::Polygon(v.with_crs(crs)),
            Geometry::MultiPolygon(v) => Geometry::MultiPolygon(v.with_crs(crs)),
            Geometry::GeometryCollection(v) => Geometry::GeometryCollection(v.with_crs(crs)),
            Geometry::Feature(v) => Geometry::Feature(with_feature_crs(&v, crs)),
            Geometry::FeatureCollection(v) => Geometry::FeatureCollection(FeatureCollection::new(
                v.features()
                    .iter()
                    .map(|f| with_feature_crs(f, crs.clone()))
                    .collect(),
            )),
        }
    }

    /// Copy of the geometry with the order of the positions inverted in every coordinate sequence.
    ///
    /// Composite geometries are reversed part by part, the order of the parts is kept. Points (and so multipoints)
    /// are their own reverse. `g.reverse().reverse() == g` for any geometry.
    pub fn reverse(&self) -> Self {
        match self {
            Geometry::Point(v) => Geometry::Point(v.reverse()),
            Geometry::MultiPoint(v) => Geometry::MultiPoint(v.reverse()),
            Geometry::LineString(v) => Geometry::LineString(v.reverse()),
            Geometry::MultiLineString(v) => Geometry::MultiLineString(v.reverse()),
            Geometry::Polygon(v) => Geometry::Polygon(v.reverse()),
            Geometry::MultiPolygon(v) => Geometry::MultiPolygon(v.reverse()),
            Geometry::GeometryCollection(v) => Geometry::GeometryCollection(v.reverse()),
            Geometry::Feature(v) => Geometry::Feature(v.reverse()),
            Geometry::FeatureCollection(v) => Geometry::FeatureCollection(v.reverse()),
        }
    }

    /// Bounding rectangle of all positions, `None` if the geometry has none.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        match self {
            Geometry::Point(v) => Some(v.bounding_rect()),
            Geometry::MultiPoint(v) => v.bounding_rect(),
            Geometry::LineString(v) => v.bounding_rect(),
            Geometry::MultiLineString(v) => v.bounding_rect(),
            Geometry::Polygon(v) => v.bounding_rect(),
            Geometry::MultiPolygon(v) => v.bounding_rect(),
            Geometry::GeometryCollection(v) => v.bounding_rect(),
            Geometry::Feature(v) => v.bounding_rect(),
            Geometry::FeatureCollection(v) => v.bounding_rect(),
        }
    }
}

fn with_feature_crs(feature: &Feature, crs: Option<Crs>) -> Feature {
    feature.with_geometry(feature.geometry().clone().with_crs(crs))
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        geojson::dump(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = serde_json::Value::deserialize(deserializer)?;
        geojson::load(document, None).map_err(D::Error::custom)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

impl From<Feature> for Geometry {
    fn from(value: Feature) -> Self {
        Self::Feature(value)
    }
}

impl From<FeatureCollection> for Geometry {
    fn from(value: FeatureCollection) -> Self {
        Self::FeatureCollection(value)
    }
}
