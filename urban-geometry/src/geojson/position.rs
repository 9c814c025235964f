use ::geojson::Position;

use crate::error::GeometryError;
use crate::Coord;

pub(super) fn coord(position: &Position) -> Result<Coord, GeometryError> {
    Coord::try_from(position.as_slice())
}

pub(super) fn coords(positions: &[Position]) -> Result<Vec<Coord>, GeometryError> {
    positions.iter().map(coord).collect()
}

pub(super) fn nested(positions: &[Vec<Position>]) -> Result<Vec<Vec<Coord>>, GeometryError> {
    positions.iter().map(|p| coords(p)).collect()
}

pub(super) fn polygons(
    polygons: &[Vec<Vec<Position>>],
) -> Result<Vec<Vec<Vec<Coord>>>, GeometryError> {
    polygons.iter().map(|p| nested(p)).collect()
}

pub(super) fn positions(coords: &[Coord]) -> Vec<Position> {
    coords.iter().map(Coord::to_position).collect()
}

pub(super) fn nested_positions(coords: &[Vec<Coord>]) -> Vec<Vec<Position>> {
    coords.iter().map(|c| positions(c)).collect()
}
