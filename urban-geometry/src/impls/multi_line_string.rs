use super::validate;
use crate::error::GeometryError;
use crate::{BoundingRect, Coord, Crs};

/// Geometry consisting of several line strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString {
    coordinates: Vec<Vec<Coord>>,
    crs: Option<Crs>,
}

impl MultiLineString {
    /// Creates a new multi line string without a CRS. The lines are not checked, see
    /// [`MultiLineString::try_new`].
    pub fn new(coordinates: Vec<Vec<Coord>>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Creates a new multi line string, checking that no line is empty and all positions have the same dimensions.
    pub fn try_new(coordinates: Vec<Vec<Coord>>) -> Result<Self, GeometryError> {
        coordinates.iter().try_for_each(|line| validate::line(line))?;
        validate::dimensions(coordinates.iter().flatten())?;
        Ok(Self::new(coordinates))
    }

    /// Returns the same geometry with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Positions of every line.
    pub fn coordinates(&self) -> &[Vec<Coord>] {
        &self.coordinates
    }

    /// Coordinate reference system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Reverses every line. The order of the lines is kept.
    pub fn reverse(&self) -> Self {
        Self {
            coordinates: self
                .coordinates
                .iter()
                .map(|line| line.iter().rev().copied().collect())
                .collect(),
            crs: self.crs.clone(),
        }
    }

    /// Bounding rectangle, `None` if there are no positions.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_coords(self.coordinates.iter().flatten())
    }
}
