//! Geometry shapes and the feature wrappers.

mod feature;
mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
pub(crate) mod polygon;
pub(crate) mod validate;

pub use feature::{Feature, FeatureCollection, FeatureId};
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
