use super::validate;
use crate::error::GeometryError;
use crate::{BoundingRect, Coord, Crs};

/// Polygon given as a list of linear rings: the exterior ring first, then the holes.
///
/// Rings follow the GeoJSON convention: the last position repeats the first one, so a valid ring has at least 4
/// positions. This is checked by [`Polygon::try_new`] and when a polygon is loaded from GeoJSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    coordinates: Vec<Vec<Coord>>,
    crs: Option<Crs>,
}

impl Polygon {
    /// Creates a new polygon without a CRS. The rings are not checked.
    pub fn new(rings: Vec<Vec<Coord>>) -> Self {
        Self {
            coordinates: rings,
            crs: None,
        }
    }

    /// Creates a new polygon, checking that every ring is closed and has at least 4 positions, and that all
    /// positions have the same dimensions.
    pub fn try_new(rings: Vec<Vec<Coord>>) -> Result<Self, GeometryError> {
        validate::rings(&rings)?;
        validate::dimensions(rings.iter().flatten())?;
        Ok(Self::new(rings))
    }

    /// Returns the same polygon with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// All rings of the polygon.
    pub fn coordinates(&self) -> &[Vec<Coord>] {
        &self.coordinates
    }

    /// Exterior ring.
    pub fn exterior(&self) -> Option<&[Coord]> {
        self.coordinates.first().map(Vec::as_slice)
    }

    /// Holes.
    pub fn interiors(&self) -> &[Vec<Coord>] {
        self.coordinates.get(1..).unwrap_or_default()
    }

    /// Coordinate reference system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Reverses every ring, which flips their winding. Rings stay closed.
    pub fn reverse(&self) -> Self {
        Self {
            coordinates: reverse_rings(&self.coordinates),
            crs: self.crs.clone(),
        }
    }

    /// Bounding rectangle of the exterior ring, `None` for an empty polygon.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_coords(self.exterior()?.iter())
    }
}

pub(crate) fn reverse_rings(rings: &[Vec<Coord>]) -> Vec<Vec<Coord>> {
    rings
        .iter()
        .map(|ring| ring.iter().rev().copied().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    fn square() -> Polygon {
        Polygon::new(vec![
            vec![
                coord!(0.0, 0.0),
                coord!(4.0, 0.0),
                coord!(4.0, 4.0),
                coord!(0.0, 4.0),
                coord!(0.0, 0.0),
            ],
            vec![
                coord!(1.0, 1.0),
                coord!(1.0, 2.0),
                coord!(2.0, 2.0),
                coord!(1.0, 1.0),
            ],
        ])
    }

    #[test]
    fn rings() {
        let polygon = square();
        assert_eq!(polygon.exterior().map(<[Coord]>::len), Some(5));
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(Polygon::default().interiors().len(), 0);
        assert_eq!(Polygon::default().exterior(), None);
    }

    #[test]
    fn reverse_keeps_rings_closed() {
        let reversed = square().reverse();
        for ring in reversed.coordinates() {
            assert_eq!(ring.first(), ring.last());
        }
        assert_eq!(reversed.coordinates()[0][1], coord!(0.0, 4.0));
        assert_eq!(reversed.reverse(), square());
    }

    #[test]
    fn checked_constructor() {
        use assert_matches::assert_matches;

        assert_eq!(
            Polygon::try_new(square().coordinates().to_vec()),
            Ok(square())
        );
        assert_matches!(
            Polygon::try_new(vec![vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]]),
            Err(GeometryError::InvalidGeoJson(_))
        );

        let mut mixed = square().coordinates().to_vec();
        mixed[1] = mixed[1].iter().map(|c| coord!(c.x(), c.y(), 1.0)).collect();
        assert_matches!(
            Polygon::try_new(mixed),
            Err(GeometryError::InvalidGeoJson(_))
        );
    }

    #[test]
    fn bounding_rect_uses_exterior() {
        assert_eq!(
            square().bounding_rect(),
            Some(BoundingRect::new(0.0, 0.0, 4.0, 4.0))
        );
    }
}
