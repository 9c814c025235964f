use super::validate;
use crate::error::GeometryError;
use crate::{BoundingRect, Coord, Crs};

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Coord>,
    crs: Option<Crs>,
}

impl MultiPoint {
    /// Creates a new multipoint without a CRS. The coordinates are not checked, see [`MultiPoint::try_new`].
    pub fn new(coordinates: Vec<Coord>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Creates a new multipoint, checking that all the positions have the same dimensions.
    pub fn try_new(coordinates: Vec<Coord>) -> Result<Self, GeometryError> {
        validate::dimensions(&coordinates)?;
        Ok(Self::new(coordinates))
    }

    /// Returns the same multipoint with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Positions of the points.
    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    /// Coordinate reference system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Every part is a point, which is its own reverse, so the multipoint is returned as is.
    pub fn reverse(&self) -> Self {
        self.clone()
    }

    /// Bounding rectangle, `None` if there are no points.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_coords(self.coordinates.iter())
    }
}

impl From<Vec<Coord>> for MultiPoint {
    fn from(value: Vec<Coord>) -> Self {
        Self::new(value)
    }
}
