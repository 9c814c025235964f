use serde_json::{Map, Number, Value};

use crate::error::GeometryError;
use crate::{BoundingRect, Crs, Geometry};

/// Identifier of a feature: GeoJSON allows either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureId {
    /// String id.
    String(String),
    /// Numeric id.
    Number(Number),
}

/// Geometry with an optional id and a set of properties.
///
/// A feature has no CRS of its own: [`Feature::crs`] is the CRS of the wrapped geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Box<Geometry>,
    id: Option<FeatureId>,
    properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Creates a feature without id and properties.
    ///
    /// Returns an error if the `geometry` is a feature or a feature collection itself.
    pub fn new(geometry: Geometry) -> Result<Self, GeometryError> {
        check_geometry(&geometry)?;

        Ok(Self {
            geometry: Box::new(geometry),
            id: None,
            properties: None,
        })
    }

    /// Returns the same feature with the given id.
    pub fn with_id(self, id: Option<FeatureId>) -> Self {
        Self { id, ..self }
    }

    /// Returns the same feature with the given properties.
    pub fn with_properties(self, properties: Option<Map<String, Value>>) -> Self {
        Self { properties, ..self }
    }

    /// Wrapped geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Feature id.
    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    /// Feature properties.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref()
    }

    /// Value of a single property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(name)
    }

    /// CRS of the wrapped geometry.
    pub fn crs(&self) -> Option<&Crs> {
        self.geometry.crs()
    }

    /// Copy of the feature with the wrapped geometry replaced. Id and properties are kept.
    ///
    /// Fails like [`Feature::new`] if `f` returns a feature or a feature collection.
    pub fn map_geometry(
        &self,
        f: impl FnOnce(&Geometry) -> Result<Geometry, GeometryError>,
    ) -> Result<Self, GeometryError> {
        let geometry = f(&self.geometry)?;
        check_geometry(&geometry)?;
        Ok(self.with_geometry(geometry))
    }

    pub(crate) fn with_geometry(&self, geometry: Geometry) -> Self {
        Self {
            geometry: Box::new(geometry),
            id: self.id.clone(),
            properties: self.properties.clone(),
        }
    }

    /// Copy of the feature with the wrapped geometry reversed.
    pub fn reverse(&self) -> Self {
        self.with_geometry(self.geometry.reverse())
    }

    /// Bounding rectangle of the wrapped geometry.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        self.geometry.bounding_rect()
    }
}

fn check_geometry(geometry: &Geometry) -> Result<(), GeometryError> {
    if geometry.is_wrapper() {
        return Err(GeometryError::InvalidGeoJson(format!(
            "feature geometry cannot be a {}",
            geometry.geometry_type()
        )));
    }

    Ok(())
}

/// Sequence of features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Features of the collection.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Reverses the geometry of every feature.
    pub fn reverse(&self) -> Self {
        Self {
            features: self.features.iter().map(Feature::reverse).collect(),
        }
    }

    /// Bounding rectangle of all features.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::merge_all(self.features.iter().filter_map(Feature::bounding_rect))
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(value: Vec<Feature>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use crate::impls::Point;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn feature() -> Feature {
        let properties = json!({"name": "stop"}).as_object().cloned();
        Feature::new(Point::new(coord!(1.0, 2.0)).into())
            .expect("point is a valid feature geometry")
            .with_id(Some(FeatureId::String("a".into())))
            .with_properties(properties)
    }

    #[test]
    fn map_geometry_keeps_id_and_properties() {
        let feature = feature();
        let mapped = feature
            .map_geometry(|g| Ok(g.clone().with_crs(Some(Crs::WGS84))))
            .expect("point result");

        assert_eq!(mapped.crs(), Some(&Crs::WGS84));
        assert_eq!(mapped.id(), feature.id());
        assert_eq!(mapped.property("name"), Some(&json!("stop")));
    }

    #[test]
    fn map_geometry_rejects_nested_wrappers() {
        let feature = feature();
        assert_matches!(
            feature.map_geometry(|_| Ok(feature.clone().into())),
            Err(GeometryError::InvalidGeoJson(_))
        );
        assert_matches!(
            feature.map_geometry(|_| Ok(FeatureCollection::new(vec![feature.clone()]).into())),
            Err(GeometryError::InvalidGeoJson(_))
        );
        assert_matches!(
            Feature::new(FeatureCollection::default().into()),
            Err(GeometryError::InvalidGeoJson(_))
        );
    }
}
