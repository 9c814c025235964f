use super::Projection;
use crate::Coord;

/// Geographic coordinates: longitude and latitude in degrees are passed through as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geographic;

impl Projection for Geographic {
    fn project(&self, lonlat: &Coord) -> Option<Coord> {
        Some(*lonlat)
    }

    fn unproject(&self, xy: &Coord) -> Option<Coord> {
        Some(*xy)
    }

    fn is_geographic(&self) -> bool {
        true
    }
}
