use std::fmt::{Debug, Formatter};
use std::sync::{Arc, OnceLock};

use quick_cache::sync::Cache;
use serde::{Deserialize, Serialize};

use super::definition::{self, ProjectionDefinition};
use super::transformer::{Reprojection, Transformer};
use super::{Geographic, ProjectionHandle, WebMercator};
use crate::error::GeometryError;
use crate::{Crs, Geometry};

const GEOGRAPHIC_KEY: &str = "epsg:4326";
const METRIC_KEY: &str = "epsg:3857";

/// Settings of a [`ProjectionEngine`].
///
/// Can be embedded into the settings file of the host application: missing fields take default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Maximum number of resolved projections kept in the cache.
    pub projection_cache_capacity: usize,
    /// Maximum number of transformers kept in the cache.
    pub transformer_cache_capacity: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            projection_cache_capacity: 5096,
            transformer_cache_capacity: 5098,
        }
    }
}

/// Resolves CRS identifiers into projections and builds transformers between them.
///
/// Resolved projections and transformers are cached in bounded caches owned by the engine. The engine is
/// `Send + Sync`: a single instance is meant to be shared by all request handlers. When several threads resolve the
/// same identifier for the first time, each of them may construct its own projection, and one of them ends up in
/// the cache.
///
/// ```
/// use urban_geometry::{coord, projection::ProjectionEngine, Crs, Geometry, Point};
///
/// let engine = ProjectionEngine::default();
/// let point: Geometry = Point::new(coord!(30.5, 50.4)).with_crs(Some(Crs::WGS84)).into();
///
/// let projected = engine.reproject(&point, &Crs::EPSG3857).unwrap();
/// assert_eq!(projected.crs(), Some(&Crs::EPSG3857));
/// ```
pub struct ProjectionEngine {
    options: EngineOptions,
    projections: Cache<String, ProjectionHandle>,
    transformers: Cache<(String, String), Arc<Reprojection>>,
    geographic: OnceLock<ProjectionHandle>,
    metric: OnceLock<ProjectionHandle>,
}

impl ProjectionEngine {
    /// Creates a new engine with empty caches.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            projections: Cache::new(options.projection_cache_capacity.max(1)),
            transformers: Cache::new(options.transformer_cache_capacity.max(1)),
            geographic: OnceLock::new(),
            metric: OnceLock::new(),
        }
    }

    /// Options the engine was created with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Resolves a CRS identifier into a projection.
    ///
    /// The identifier is case-insensitive, a bare numeric code is treated as an EPSG code. Supported are:
    /// * `EPSG:4326`, `OGC:CRS84`, `CRS:84`: geographic longitude/latitude;
    /// * `EPSG:3857` and its aliases `EPSG:900913`, `EPSG:3785`, `EPSG:102100`: Web Mercator;
    /// * `EPSG:326NN`, `EPSG:327NN`: UTM zones on WGS-84;
    /// * PROJ strings with `+proj=tmerc`, `+proj=utm` or `+proj=merc`.
    ///
    /// The last two groups require the `geodesy` feature. Anything else is [`GeometryError::UnsupportedCrs`].
    pub fn resolve_projection(&self, identifier: &str) -> Result<ProjectionHandle, GeometryError> {
        let key = definition::normalize(identifier);
        if let Some(handle) = self.projections.get(&key) {
            return Ok(handle);
        }

        let handle = build_projection(&key).map_err(|err| {
            log::warn!("Cannot resolve coordinate reference system '{identifier}': {err}");
            err
        })?;
        self.projections.insert(key, handle.clone());

        Ok(handle)
    }

    /// Geographic (EPSG:4326) projection.
    pub fn geographic_default(&self) -> ProjectionHandle {
        self.geographic
            .get_or_init(|| self.cached_or_insert(GEOGRAPHIC_KEY, Geographic))
            .clone()
    }

    /// Default metric (EPSG:3857) projection.
    pub fn metric_default(&self) -> ProjectionHandle {
        self.metric
            .get_or_init(|| self.cached_or_insert(METRIC_KEY, WebMercator::default()))
            .clone()
    }

    fn cached_or_insert(
        &self,
        key: &str,
        projection: impl super::Projection + 'static,
    ) -> ProjectionHandle {
        if let Some(handle) = self.projections.get(key) {
            return handle;
        }

        let handle = ProjectionHandle::new(key, projection);
        self.projections.insert(key.to_string(), handle.clone());
        handle
    }

    /// Transformer from `source` to `dest` CRS.
    ///
    /// If the identifiers are the same (after normalization), an identity transformer is returned without resolving
    /// any of them.
    pub fn transformer_between(
        &self,
        source: &Crs,
        dest: &Crs,
    ) -> Result<Transformer, GeometryError> {
        let key = (
            definition::normalize(source.name()),
            definition::normalize(dest.name()),
        );
        if key.0 == key.1 {
            return Ok(Transformer::identity());
        }

        if let Some(reprojection) = self.transformers.get(&key) {
            return Ok(Transformer::reproject(reprojection, dest.clone()));
        }

        log::debug!("Creating transformer from '{}' to '{}'", key.0, key.1);
        let reprojection = Arc::new(Reprojection {
            source: self.resolve_projection(&key.0)?,
            dest: self.resolve_projection(&key.1)?,
        });
        self.transformers.insert(key, reprojection.clone());

        Ok(Transformer::reproject(reprojection, dest.clone()))
    }

    /// Metric CRS best suited for measuring the geometry.
    ///
    /// Currently this is always EPSG:3857, whatever the geometry and its CRS are. Choosing a UTM zone or an
    /// equal-area projection by the geometry location would fit here.
    pub fn best_projection_for(&self, _geometry: &Geometry, _source_crs: &Crs) -> Crs {
        Crs::EPSG3857
    }

    /// Transformer from geographic coordinates into a transverse Mercator projection centered at the middle of the
    /// geometry bounding rectangle.
    ///
    /// Distortion close to the geometry is much lower than with the default metric projection. The transformer is
    /// built for this geometry only and is not cached.
    pub fn custom_tangent_projection_for(
        &self,
        geometry: &Geometry,
    ) -> Result<Transformer, GeometryError> {
        let source = match geometry.crs() {
            Some(crs) => {
                let handle = self.resolve_projection(crs.name())?;
                if !handle.is_geographic() {
                    return Err(GeometryError::crs_mismatch(Some(&Crs::WGS84), Some(crs)));
                }
                handle
            }
            None => self.geographic_default(),
        };

        let bbox = geometry
            .bounding_rect()
            .ok_or(GeometryError::EmptyGeometry)?;
        let (lon_0, lat_0) = bbox.center();

        let definition =
            format!("+proj=tmerc +lat_0={lat_0} +lon_0={lon_0} +k=1 +x_0=0 +y_0=0 +ellps=WGS84");
        log::debug!("Creating tangent projection '{definition}'");

        let dest = build_projection(&definition::normalize(&definition))?;
        Ok(Transformer::reproject(
            Arc::new(Reprojection { source, dest }),
            Crs::new(definition),
        ))
    }

    /// Reprojects the geometry from its own CRS into `dest`.
    ///
    /// Returns [`GeometryError::MissingCrs`] if the geometry has no CRS.
    pub fn reproject(&self, geometry: &Geometry, dest: &Crs) -> Result<Geometry, GeometryError> {
        let source = geometry.crs().ok_or(GeometryError::MissingCrs)?;
        self.transformer_between(source, dest)?.transform(geometry)
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Debug for ProjectionEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectionEngine")
            .field("options", &self.options)
            .field("projections", &self.projections.len())
            .field("transformers", &self.transformers.len())
            .finish()
    }
}

fn build_projection(key: &str) -> Result<ProjectionHandle, GeometryError> {
    log::debug!("Creating projection for '{key}'");

    Ok(match definition::parse(key)? {
        ProjectionDefinition::Geographic => ProjectionHandle::new(key, Geographic),
        ProjectionDefinition::WebMercator => ProjectionHandle::new(key, WebMercator::default()),
        ProjectionDefinition::Geodesy(operator) => geodesy_projection(key, &operator)?,
    })
}

#[cfg(feature = "geodesy")]
fn geodesy_projection(key: &str, operator: &str) -> Result<ProjectionHandle, GeometryError> {
    super::GeodesyProjection::new(operator)
        .map(|projection| ProjectionHandle::new(key, projection))
        .ok_or_else(|| GeometryError::UnsupportedCrs(key.to_string()))
}

#[cfg(not(feature = "geodesy"))]
fn geodesy_projection(key: &str, _operator: &str) -> Result<ProjectionHandle, GeometryError> {
    Err(GeometryError::UnsupportedCrs(key.to_string()))
}
