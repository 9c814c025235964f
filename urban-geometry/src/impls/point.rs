use crate::{BoundingRect, Coord, Crs};

/// Single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Coord,
    crs: Option<Crs>,
}

impl Point {
    /// Creates a new point without a CRS.
    pub fn new(coordinates: Coord) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Returns the same point with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Position of the point.
    pub fn coordinates(&self) -> &Coord {
        &self.coordinates
    }

    /// Coordinate reference system of the point.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// A point has no coordinate order to invert, so this is a copy of the point.
    pub fn reverse(&self) -> Self {
        self.clone()
    }

    /// Bounding rectangle of the point.
    pub fn bounding_rect(&self) -> BoundingRect {
        BoundingRect::from_coord(&self.coordinates)
    }
}
