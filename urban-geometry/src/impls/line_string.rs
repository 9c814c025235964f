use super::validate;
use crate::error::GeometryError;
use crate::{ops, BoundingRect, Coord, Crs};

/// Ordered sequence of positions.
///
/// Unlike a closed contour, a line string is not connected back to its first point. A valid line string has at least
/// one position, all of the same dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Coord>,
    crs: Option<Crs>,
}

impl LineString {
    /// Creates a new line string without a CRS.
    ///
    /// The coordinates are not checked: an empty line can be created, but it can't be loaded back from GeoJSON.
    /// Use [`LineString::try_new`] for input that is not known to be valid.
    pub fn new(coordinates: Vec<Coord>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Creates a new line string, checking that it is not empty and all positions have the same dimensions.
    pub fn try_new(coordinates: Vec<Coord>) -> Result<Self, GeometryError> {
        validate::line(&coordinates)?;
        validate::dimensions(&coordinates)?;
        Ok(Self::new(coordinates))
    }

    /// Returns the same line with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Positions of the line.
    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    /// Coordinate reference system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// First position of the line.
    pub fn first(&self) -> Option<&Coord> {
        self.coordinates.first()
    }

    /// Last position of the line.
    pub fn last(&self) -> Option<&Coord> {
        self.coordinates.last()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the line has no positions.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Copy of the line with the positions in reverse order.
    pub fn reverse(&self) -> Self {
        Self {
            coordinates: self.coordinates.iter().rev().copied().collect(),
            crs: self.crs.clone(),
        }
    }

    /// Merges several contiguous lines into one. See [`ops::merge_lines`].
    pub fn merge(lines: &[LineString]) -> Result<Option<LineString>, GeometryError> {
        ops::merge_lines(lines)
    }

    /// Bounding rectangle, `None` for an empty line.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_coords(self.coordinates.iter())
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn reverse() {
        let line = LineString::new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0), coord!(2.0, 0.0)])
            .with_crs(Some(Crs::WGS84));
        let reversed = line.reverse();

        assert_eq!(
            reversed.coordinates(),
            &[coord!(2.0, 0.0), coord!(1.0, 1.0), coord!(0.0, 0.0)]
        );
        assert_eq!(reversed.crs(), Some(&Crs::WGS84));
        assert_eq!(reversed.reverse(), line);
    }

    #[test]
    fn endpoints() {
        let line = LineString::new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]);
        assert_eq!(line.first(), Some(&coord!(0.0, 0.0)));
        assert_eq!(line.last(), Some(&coord!(1.0, 1.0)));
        assert_eq!(line.len(), 2);

        let empty = LineString::new(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.bounding_rect(), None);
    }

    #[test]
    fn checked_constructor() {
        use assert_matches::assert_matches;

        assert_matches!(
            LineString::try_new(vec![]),
            Err(GeometryError::InvalidGeoJson(_))
        );
        assert_matches!(
            LineString::try_new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0, 1.0)]),
            Err(GeometryError::InvalidGeoJson(_))
        );

        let line = LineString::try_new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)])
            .expect("valid line")
            .with_crs(Some(Crs::WGS84));
        let geometry: crate::Geometry = line.into();
        assert_eq!(
            crate::geojson::load(crate::geojson::dump(&geometry), None),
            Ok(geometry)
        );
    }
}
