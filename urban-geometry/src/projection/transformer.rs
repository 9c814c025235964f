use std::sync::Arc;

use super::definition::normalize;
use super::ProjectionHandle;
use crate::error::GeometryError;
use crate::impls::{
    Feature, FeatureCollection, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::{Coord, Crs, Geometry};

/// Pair of projections a non-identity transformer converts between. Shared through the engine cache.
#[derive(Debug)]
pub(crate) struct Reprojection {
    pub(crate) source: ProjectionHandle,
    pub(crate) dest: ProjectionHandle,
}

#[derive(Debug, Clone)]
enum TransformerKind {
    Identity,
    Reproject {
        reprojection: Arc<Reprojection>,
        dest_crs: Crs,
    },
}

/// Reprojects geometries from one CRS into another.
///
/// Created by [`ProjectionEngine::transformer_between`](super::ProjectionEngine::transformer_between). When the
/// source and destination CRS are the same, the transformer is an identity one: it returns its input unchanged,
/// without looking at the coordinates or the CRS of the geometry.
#[derive(Debug, Clone)]
pub struct Transformer {
    kind: TransformerKind,
}

impl Transformer {
    pub(crate) fn identity() -> Self {
        Self {
            kind: TransformerKind::Identity,
        }
    }

    pub(crate) fn reproject(reprojection: Arc<Reprojection>, dest_crs: Crs) -> Self {
        Self {
            kind: TransformerKind::Reproject {
                reprojection,
                dest_crs,
            },
        }
    }

    /// True for the identity transformer.
    pub fn is_identity(&self) -> bool {
        matches!(self.kind, TransformerKind::Identity)
    }

    /// CRS set on the transformed geometries. `None` for the identity transformer.
    pub fn dest_crs(&self) -> Option<&Crs> {
        match &self.kind {
            TransformerKind::Identity => None,
            TransformerKind::Reproject { dest_crs, .. } => Some(dest_crs),
        }
    }

    /// Transforms a single coordinate. `z` and `m` are kept as they are.
    pub fn transform_coord(&self, coord: &Coord) -> Result<Coord, GeometryError> {
        match &self.kind {
            TransformerKind::Identity => Ok(*coord),
            TransformerKind::Reproject { reprojection, .. } => reprojection.coord(coord),
        }
    }

    /// Transforms every coordinate of the geometry, at any nesting depth.
    ///
    /// Every geometry part that has a CRS must be in the source CRS of the transformer, otherwise
    /// [`GeometryError::CrsMismatch`] is returned. Parts without CRS are assumed to be in the source CRS. All parts of
    /// the result have the destination CRS.
    pub fn transform(&self, geometry: &Geometry) -> Result<Geometry, GeometryError> {
        match &self.kind {
            TransformerKind::Identity => Ok(geometry.clone()),
            TransformerKind::Reproject {
                reprojection,
                dest_crs,
            } => Reprojector {
                reprojection,
                dest_crs,
            }
            .geometry(geometry),
        }
    }
}

impl Reprojection {
    fn coord(&self, coord: &Coord) -> Result<Coord, GeometryError> {
        self.source
            .unproject(coord)
            .and_then(|lonlat| self.dest.project(&lonlat))
            .filter(|c| c.x().is_finite() && c.y().is_finite())
            .ok_or_else(|| GeometryError::ProjectionFailed {
                from: self.source.identifier().to_string(),
                to: self.dest.identifier().to_string(),
            })
    }
}

struct Reprojector<'a> {
    reprojection: &'a Reprojection,
    dest_crs: &'a Crs,
}

impl Reprojector<'_> {
    fn check_crs(&self, crs: Option<&Crs>) -> Result<(), GeometryError> {
        match crs {
            Some(crs) if normalize(crs.name()) != self.reprojection.source.identifier() => {
                Err(GeometryError::CrsMismatch {
                    expected: Some(self.reprojection.source.identifier().to_string()),
                    found: Some(crs.name().to_string()),
                })
            }
            _ => Ok(()),
        }
    }

    fn dest(&self) -> Option<Crs> {
        Some(self.dest_crs.clone())
    }

    fn coords(&self, coords: &[Coord]) -> Result<Vec<Coord>, GeometryError> {
        coords.iter().map(|c| self.reprojection.coord(c)).collect()
    }

    fn nested(&self, coords: &[Vec<Coord>]) -> Result<Vec<Vec<Coord>>, GeometryError> {
        coords.iter().map(|c| self.coords(c)).collect()
    }

    fn polygons(&self, coords: &[Vec<Vec<Coord>>]) -> Result<Vec<Vec<Vec<Coord>>>, GeometryError> {
        coords.iter().map(|c| self.nested(c)).collect()
    }

    fn feature(&self, feature: &Feature) -> Result<Feature, GeometryError> {
        feature.map_geometry(|g| self.geometry(g))
    }

    fn geometry(&self, geometry: &Geometry) -> Result<Geometry, GeometryError> {
        self.check_crs(geometry.crs())?;

        Ok(match geometry {
            Geometry::Point(v) => Point::new(self.reprojection.coord(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::MultiPoint(v) => MultiPoint::new(self.coords(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::LineString(v) => LineString::new(self.coords(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::MultiLineString(v) => MultiLineString::new(self.nested(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::Polygon(v) => Polygon::new(self.nested(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::MultiPolygon(v) => MultiPolygon::new(self.polygons(v.coordinates())?)
                .with_crs(self.dest())
                .into(),
            Geometry::GeometryCollection(v) => GeometryCollection::from_parts(
                v.geometries()
                    .iter()
                    .map(|g| self.geometry(g))
                    .collect::<Result<_, _>>()?,
                self.dest(),
            )
            .into(),
            Geometry::Feature(v) => self.feature(v)?.into(),
            Geometry::FeatureCollection(v) => FeatureCollection::new(
                v.features()
                    .iter()
                    .map(|f| self.feature(f))
                    .collect::<Result<_, _>>()?,
            )
            .into(),
        })
    }
}
