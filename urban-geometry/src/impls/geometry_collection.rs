use crate::error::GeometryError;
use crate::{BoundingRect, Crs, Geometry};

/// Heterogeneous collection of geometries.
///
/// Members can't be features or feature collections. Every member may carry its own CRS in addition to the CRS of
/// the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    crs: Option<Crs>,
}

impl GeometryCollection {
    /// Creates a new collection without a CRS.
    ///
    /// Returns an error if any of the `geometries` is a feature or a feature collection.
    pub fn new(geometries: Vec<Geometry>) -> Result<Self, GeometryError> {
        if let Some(wrapper) = geometries.iter().find(|g| g.is_wrapper()) {
            return Err(GeometryError::InvalidGeoJson(format!(
                "geometry collection cannot contain a {}",
                wrapper.geometry_type()
            )));
        }

        Ok(Self {
            geometries,
            crs: None,
        })
    }

    /// Returns the same collection with the given CRS.
    pub fn with_crs(self, crs: Option<Crs>) -> Self {
        Self { crs, ..self }
    }

    /// Members of the collection.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Coordinate reference system of the collection.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Reverses every member.
    pub fn reverse(&self) -> Self {
        Self {
            geometries: self.geometries.iter().map(Geometry::reverse).collect(),
            crs: self.crs.clone(),
        }
    }

    /// Bounding rectangle of all members.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::merge_all(self.geometries.iter().filter_map(Geometry::bounding_rect))
    }

    pub(crate) fn from_parts(geometries: Vec<Geometry>, crs: Option<Crs>) -> Self {
        Self { geometries, crs }
    }
}
