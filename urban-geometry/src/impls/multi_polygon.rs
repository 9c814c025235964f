use super::validate;
use crate::error::GeometryError;
use crate::impls::polygon::reverse_rings;
use crate::{BoundingRect, Coord, Crs};

/// Geometry consisting of several polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    coordinates: Vec<Vec<Vec<Coord>>>,
    crs: Option<Crs>,
}

impl MultiPolygon {
    /// Creates a new multipolygon without a CRS. The rings are not checked, see [`MultiPolygon::try_new`].
    pub fn new(coordinates: Vec<Vec<Vec<Coord>>>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Creates a new multipolygon, checking every ring the way [`Polygon::try_new`](super::Polygon::try_new) does.
    /// Dimensions must be the same across all the polygons.
    pub fn try_new(coordinates: Vec<Vec<Vec<Coord>>>) -> Result<Self, GeometryError> {
        coordinates
            .iter()
            .try_for_each(|rings| validate::rings(rings))?;
        validate::dimensions(coordinates.iter().flatten().flatten())?;
        Ok(Self::new(coordinates))
    }

    /// Returns the same geometry with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Rings of every polygon.
    pub fn coordinates(&self) -> &[Vec<Vec<Coord>>] {
        &self.coordinates
    }

    /// Coordinate reference system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Reverses every ring of every polygon.
    pub fn reverse(&self) -> Self {
        Self {
            coordinates: self
                .coordinates
                .iter()
                .map(|rings| reverse_rings(rings))
                .collect(),
            crs: self.crs.clone(),
        }
    }

    /// Bounding rectangle of the exterior rings.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_coords(
            self.coordinates
                .iter()
                .filter_map(|rings| rings.first())
                .flatten(),
        )
    }
}
