//! Geometry model of the Urban SDK services.
//!
//! This crate contains the [`Geometry`] type, a closed set of GeoJSON objects that carry an optional
//! [coordinate reference system](Crs), and the operations the services need on them:
//! * [loading and dumping](geojson) GeoJSON (and reading WKT/EWKT);
//! * [reprojecting](projection::ProjectionEngine) geometries between coordinate reference systems;
//! * [merging](ops::merge_lines) contiguous lines and [reversing](ops::reverse) coordinate order.
//!
//! ```
//! use urban_geometry::{geojson, ops, Geometry};
//!
//! let a = geojson::loads(r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#, Some("EPSG:4326".into())).unwrap();
//! let b = geojson::loads("SRID=4326;LINESTRING(1 1, 2 2)", None).unwrap();
//!
//! let (Geometry::LineString(a), Geometry::LineString(b)) = (a, b) else { unreachable!() };
//! let merged: Geometry = ops::merge_lines(&[a, b]).unwrap().unwrap().into();
//! assert_eq!(merged.srid(), Some(4326));
//! ```

mod bounding_rect;
mod coord;
mod crs;
mod error;
pub mod geojson;
mod geometry;
mod geometry_type;
mod impls;
pub mod ops;
pub mod projection;

pub use bounding_rect::BoundingRect;
pub use coord::Coord;
pub use crs::Crs;
pub use error::GeometryError;
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use impls::*;
