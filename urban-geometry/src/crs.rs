//! Coordinate reference system identifiers.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Named coordinate reference system (e.g. `EPSG:4326`).
///
/// Two values are equal if their identifiers are equal as strings. No normalization is done here: `4326`,
/// `epsg:4326` and `EPSG:4326` are three different values. The [projection engine](crate::projection::ProjectionEngine)
/// normalizes identifiers for its own lookups, but geometries compare CRS values as they are.
///
/// On the wire a CRS is represented as a GeoJSON `crs` member:
///
/// ```json
/// { "type": "name", "properties": { "name": "EPSG:4326" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CrsDefinition", into = "CrsDefinition")]
pub struct Crs {
    name: Cow<'static, str>,
}

impl Crs {
    /// WGS-84 geographic coordinates (longitude and latitude in degrees).
    pub const WGS84: Crs = Crs {
        name: Cow::Borrowed("EPSG:4326"),
    };

    /// Spherical Web Mercator, in meters.
    pub const EPSG3857: Crs = Crs {
        name: Cow::Borrowed("EPSG:3857"),
    };

    /// Creates a CRS with the given identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// Creates an `EPSG:<code>` CRS.
    pub fn epsg(code: u32) -> Self {
        Self::new(format!("EPSG:{code}"))
    }

    /// Identifier of the CRS.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric spatial reference id of the CRS.
    ///
    /// The identifier is split on `:` and the last token is parsed as an integer, so both `EPSG:4326` and `4326`
    /// give `Some(4326)`. Returns `None` if the last token is not a number: many valid CRS definitions simply have
    /// no SRID.
    ///
    /// ```
    /// use urban_geometry::Crs;
    ///
    /// assert_eq!(Crs::new("EPSG:4326").srid(), Some(4326));
    /// assert_eq!(Crs::new("not-a-crs").srid(), None);
    /// ```
    pub fn srid(&self) -> Option<i32> {
        self.name.rsplit(':').next()?.trim().parse().ok()
    }

    /// GeoJSON `crs` member for this CRS.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "name",
            "properties": { "name": self.name() },
        })
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Crs {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Crs {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CrsKind {
    #[default]
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CrsProperties {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CrsDefinition {
    #[serde(rename = "type", default)]
    kind: CrsKind,
    properties: CrsProperties,
}

impl From<CrsDefinition> for Crs {
    fn from(value: CrsDefinition) -> Self {
        Crs::new(value.properties.name)
    }
}

impl From<Crs> for CrsDefinition {
    fn from(value: Crs) -> Self {
        Self {
            kind: CrsKind::Name,
            properties: CrsProperties {
                name: value.name.into_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_is_by_identifier() {
        assert_eq!(Crs::new("EPSG:4326"), Crs::WGS84);
        assert_eq!(Crs::epsg(3857), Crs::EPSG3857);
        assert_ne!(Crs::new("epsg:4326"), Crs::WGS84);
        assert_ne!(Crs::new("4326"), Crs::WGS84);
    }

    #[test]
    fn srid() {
        assert_eq!(Crs::new("EPSG:4326").srid(), Some(4326));
        assert_eq!(Crs::new("4326").srid(), Some(4326));
        assert_eq!(Crs::new("urn:ogc:def:crs:EPSG::3857").srid(), Some(3857));
        assert_eq!(Crs::new("not-a-crs").srid(), None);
        assert_eq!(Crs::new("EPSG:").srid(), None);
        assert_eq!(Crs::new("OGC:CRS84").srid(), None);
        assert_eq!(Crs::new("").srid(), None);
    }

    #[test]
    fn wire_format() {
        let value = serde_json::to_value(Crs::WGS84).expect("serializable");
        assert_eq!(
            value,
            json!({"type": "name", "properties": {"name": "EPSG:4326"}})
        );

        let crs: Crs = serde_json::from_value(value).expect("valid crs");
        assert_eq!(crs, Crs::WGS84);
    }

    #[test]
    fn to_json_matches_serde() {
        let crs = Crs::new("EPSG:32633");
        assert_eq!(
            crs.to_json(),
            serde_json::to_value(&crs).expect("serializable")
        );
    }

    #[test]
    fn missing_type_defaults_to_name() {
        let crs: Crs = serde_json::from_value(json!({"properties": {"name": "EPSG:3857"}}))
            .expect("valid crs");
        assert_eq!(crs, Crs::EPSG3857);
    }

    #[test]
    fn linked_crs_is_rejected() {
        let result = serde_json::from_value::<Crs>(json!({
            "type": "link",
            "properties": {"href": "http://example.com/crs/42", "type": "proj4"}
        }));
        assert!(result.is_err());
    }
}
