//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Every variant is a deterministic validation failure caused by the caller's input, so all of them are classified
/// as client errors (see [`GeometryError::status_code`]). It's up to the routing layer to turn them into responses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The GeoJSON document is malformed or structurally invalid.
    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
    /// The text is neither GeoJSON nor (E)WKT.
    #[error("invalid EWKT: {0}")]
    InvalidEwkt(String),
    /// Geometries that must share a coordinate reference system don't.
    #[error("coordinate reference system mismatch: expected {expected:?}, found {found:?}")]
    CrsMismatch {
        /// Identifier the operation expected.
        expected: Option<String>,
        /// Identifier that was found instead.
        found: Option<String>,
    },
    /// The operation requires a coordinate reference system, but the geometry has none.
    #[error("the coordinate reference system is missing")]
    MissingCrs,
    /// Line at `index` does not start where the previous one ends.
    #[error("line string {index} does not start at the end of the previous one")]
    NonContiguousLineString {
        /// Position of the offending line in the merge input.
        index: usize,
    },
    /// The coordinate reference system identifier cannot be resolved to a projection.
    #[error("unsupported coordinate reference system: {0}")]
    UnsupportedCrs(String),
    /// A coordinate could not be transformed (e.g. it is outside of the projection domain).
    #[error("failed to project coordinates from {from} to {to}")]
    ProjectionFailed {
        /// Source CRS identifier.
        from: String,
        /// Target CRS identifier.
        to: String,
    },
    /// The operation requires at least one coordinate.
    #[error("geometry has no coordinates")]
    EmptyGeometry,
}

impl GeometryError {
    /// HTTP-like status classification of the error.
    pub fn status_code(&self) -> u16 {
        match self {
            GeometryError::InvalidGeoJson(_)
            | GeometryError::InvalidEwkt(_)
            | GeometryError::CrsMismatch { .. }
            | GeometryError::MissingCrs
            | GeometryError::NonContiguousLineString { .. }
            | GeometryError::UnsupportedCrs(_)
            | GeometryError::ProjectionFailed { .. }
            | GeometryError::EmptyGeometry => 400,
        }
    }

    /// Returns true if the error was caused by invalid input rather than by the subsystem itself.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub(crate) fn crs_mismatch(expected: Option<&crate::Crs>, found: Option<&crate::Crs>) -> Self {
        Self::CrsMismatch {
            expected: expected.map(|crs| crs.name().to_string()),
            found: found.map(|crs| crs.name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_are_client_errors() {
        let errors = [
            GeometryError::InvalidGeoJson("no type".into()),
            GeometryError::InvalidEwkt("garbage".into()),
            GeometryError::CrsMismatch {
                expected: Some("EPSG:4326".into()),
                found: None,
            },
            GeometryError::MissingCrs,
            GeometryError::NonContiguousLineString { index: 1 },
            GeometryError::UnsupportedCrs("epsg:1".into()),
            GeometryError::ProjectionFailed {
                from: "epsg:4326".into(),
                to: "epsg:3857".into(),
            },
            GeometryError::EmptyGeometry,
        ];

        for error in errors {
            assert_eq!(error.status_code(), 400);
            assert!(error.is_client_error());
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            GeometryError::NonContiguousLineString { index: 2 }.to_string(),
            "line string 2 does not start at the end of the previous one"
        );
        assert_eq!(
            GeometryError::crs_mismatch(Some(&crate::Crs::WGS84), None).to_string(),
            "coordinate reference system mismatch: expected Some(\"EPSG:4326\"), found None"
        );
    }
}
