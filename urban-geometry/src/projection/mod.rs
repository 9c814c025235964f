//! Projections between coordinate reference systems.
//!
//! The [`ProjectionEngine`] resolves CRS identifiers into [`ProjectionHandle`]s and builds [`Transformer`]s that
//! reproject whole geometries from one CRS into another. Every projection converts between its own coordinates and
//! geographic longitude/latitude degrees, so any pair of supported CRS can be combined.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::Coord;

mod datum;
mod definition;
mod engine;
mod geographic;
mod transformer;
mod web_mercator;

#[cfg(feature = "geodesy")]
mod geodesy;

pub use datum::Datum;
pub use engine::{EngineOptions, ProjectionEngine};
pub use geographic::Geographic;
pub use transformer::Transformer;
pub use web_mercator::WebMercator;

#[cfg(feature = "geodesy")]
pub use geodesy::GeodesyProjection;

/// Conversion between geographic coordinates and the coordinates of some CRS.
///
/// Implementations only touch `x` and `y`, `z` and `m` are passed through.
pub trait Projection: Send + Sync {
    /// Projects longitude/latitude degrees into the CRS coordinates. `None` if the point is out of the projection
    /// domain.
    fn project(&self, lonlat: &Coord) -> Option<Coord>;

    /// Inverse of [`Projection::project`].
    fn unproject(&self, xy: &Coord) -> Option<Coord>;

    /// True if the projection coordinates are longitude/latitude degrees.
    fn is_geographic(&self) -> bool {
        false
    }
}

/// Shared reference to a resolved projection.
///
/// Cloning is cheap. Handles returned by the same [`ProjectionEngine`] for the same identifier are
/// [pointer-equal](ProjectionHandle::ptr_eq) while they stay in the engine cache.
#[derive(Clone)]
pub struct ProjectionHandle {
    identifier: Arc<str>,
    projection: Arc<dyn Projection>,
}

impl ProjectionHandle {
    /// Wraps a projection. `identifier` should be in normalized form.
    pub fn new(identifier: impl Into<Arc<str>>, projection: impl Projection + 'static) -> Self {
        Self {
            identifier: identifier.into(),
            projection: Arc::new(projection),
        }
    }

    /// Normalized identifier the handle was resolved from.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// See [`Projection::project`].
    pub fn project(&self, lonlat: &Coord) -> Option<Coord> {
        self.projection.project(lonlat)
    }

    /// See [`Projection::unproject`].
    pub fn unproject(&self, xy: &Coord) -> Option<Coord> {
        self.projection.unproject(xy)
    }

    /// See [`Projection::is_geographic`].
    pub fn is_geographic(&self) -> bool {
        self.projection.is_geographic()
    }

    /// Whether both handles point to the same projection instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.projection, &other.projection)
    }
}

impl Debug for ProjectionHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ProjectionHandle")
            .field(&self.identifier)
            .finish()
    }
}
