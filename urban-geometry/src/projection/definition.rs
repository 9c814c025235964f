use crate::error::GeometryError;

/// What a CRS identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProjectionDefinition {
    Geographic,
    WebMercator,
    /// `geodesy` operator definition.
    Geodesy(String),
}

/// Normalized form of a CRS identifier used as a cache key: trimmed, lower-cased, a bare numeric code is
/// prefixed with `epsg:`.
pub(crate) fn normalize(identifier: &str) -> String {
    let identifier = identifier.trim().to_lowercase();
    if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
        format!("epsg:{identifier}")
    } else {
        identifier
    }
}

/// Resolves a normalized identifier.
pub(crate) fn parse(normalized: &str) -> Result<ProjectionDefinition, GeometryError> {
    let unsupported = || GeometryError::UnsupportedCrs(normalized.to_string());

    match normalized {
        "epsg:4326" | "ogc:crs84" | "crs:84" => return Ok(ProjectionDefinition::Geographic),
        "epsg:3857" | "epsg:900913" | "epsg:3785" | "epsg:102100" => {
            return Ok(ProjectionDefinition::WebMercator)
        }
        _ => {}
    }

    if let Some(code) = normalized.strip_prefix("epsg:") {
        let code: u32 = code.trim().parse().map_err(|_| unsupported())?;
        return utm(code)
            .map(ProjectionDefinition::Geodesy)
            .ok_or_else(unsupported);
    }

    if normalized.starts_with("+proj=") {
        return proj_to_geodesy(normalized)
            .map(ProjectionDefinition::Geodesy)
            .ok_or_else(unsupported);
    }

    Err(unsupported())
}

/// `EPSG:326NN` is the northern UTM zone NN on WGS-84, `EPSG:327NN` the southern one.
fn utm(code: u32) -> Option<String> {
    let (hemisphere, zone) = (code / 100, code % 100);
    if !(1..=60).contains(&zone) {
        return None;
    }

    match hemisphere {
        326 => Some(format!("utm zone={zone} ellps=WGS84")),
        327 => Some(format!("utm zone={zone} south ellps=WGS84")),
        _ => None,
    }
}

/// Translates a PROJ string (`+proj=tmerc +lon_0=15 +k=0.9996 ...`) into a `geodesy` operator definition.
///
/// Only `tmerc`, `utm` and `merc` are accepted. Parameters that don't affect the projection math (`units`,
/// `no_defs`, `type`) are dropped.
fn proj_to_geodesy(definition: &str) -> Option<String> {
    let mut operator = None;
    let mut params = vec![];

    for token in definition.split_whitespace() {
        let token = token.strip_prefix('+').unwrap_or(token);
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        };

        match (key, value) {
            ("proj", Some(name @ ("tmerc" | "utm" | "merc"))) => operator = Some(name),
            ("proj", _) => return None,
            ("units", Some("m")) | ("no_defs", None) | ("type", _) | ("wktext", None) => {}
            ("units", _) => return None,
            ("k", Some(value)) => params.push(format!("k_0={value}")),
            ("ellps" | "datum", Some(value)) => params.push(format!("ellps={}", ellipsoid(value))),
            (key, Some(value)) => params.push(format!("{key}={value}")),
            (key, None) => params.push(key.to_string()),
        }
    }

    let operator = operator?;
    if params.is_empty() {
        Some(operator.to_string())
    } else {
        Some(format!("{operator} {}", params.join(" ")))
    }
}

fn ellipsoid(name: &str) -> String {
    match name {
        "wgs84" => "WGS84".to_string(),
        "grs80" => "GRS80".to_string(),
        "wgs72" => "WGS72".to_string(),
        other => other.to_string(),
    }
}
