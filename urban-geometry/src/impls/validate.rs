//! Structural checks shared by the checked constructors and the GeoJSON codec.

use crate::error::GeometryError;
use crate::Coord;

/// All positions of one geometry must have the same number of values.
pub(crate) fn dimensions<'a>(
    coords: impl IntoIterator<Item = &'a Coord>,
) -> Result<(), GeometryError> {
    let mut coords = coords.into_iter();
    let Some(first) = coords.next() else {
        return Ok(());
    };

    let expected = first.dimensions();
    match coords.find(|c| c.dimensions() != expected) {
        Some(other) => Err(GeometryError::InvalidGeoJson(format!(
            "positions of one geometry must have the same dimensions, but {expected} and {} found",
            other.dimensions()
        ))),
        None => Ok(()),
    }
}

pub(crate) fn line(coords: &[Coord]) -> Result<(), GeometryError> {
    if coords.is_empty() {
        return Err(GeometryError::InvalidGeoJson(
            "line string must contain at least one position".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn ring(coords: &[Coord]) -> Result<(), GeometryError> {
    if coords.len() < 4 {
        return Err(GeometryError::InvalidGeoJson(format!(
            "linear ring must contain at least 4 positions, but {} found",
            coords.len()
        )));
    }

    if coords.first() != coords.last() {
        return Err(GeometryError::InvalidGeoJson(
            "linear ring must end with its first position".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn rings(rings: &[Vec<Coord>]) -> Result<(), GeometryError> {
    rings.iter().try_for_each(|r| ring(r))
}
