use geozero::geojson::GeoJsonWriter;
use geozero::wkt::Wkt;
use geozero::{CoordDimensions, GeozeroGeometry};

use crate::error::GeometryError;
use crate::{Crs, Geometry};

/// Loads a geometry from WKT text, optionally prefixed with an EWKT `SRID=<code>;` tag.
///
/// The tag becomes an `EPSG:<code>` CRS, unless `crs` is given.
pub(super) fn load_ewkt(text: &str, crs: Option<Crs>) -> Result<Geometry, GeometryError> {
    let (srid, wkt) = split_srid(text.trim())?;
    let crs = crs.or_else(|| srid.map(Crs::epsg));

    let mut json = Vec::new();
    {
        let mut writer = GeoJsonWriter::with_dims(&mut json, CoordDimensions::xyzm());
        Wkt(wkt)
            .process_geom(&mut writer)
            .map_err(|err| GeometryError::InvalidEwkt(err.to_string()))?;
    }
    let document = serde_json::from_slice(&json)
        .map_err(|err| GeometryError::InvalidEwkt(err.to_string()))?;

    super::load(document, crs).map_err(|err| match err {
        GeometryError::InvalidGeoJson(message) => GeometryError::InvalidEwkt(message),
        other => other,
    })
}

fn split_srid(text: &str) -> Result<(Option<u32>, &str), GeometryError> {
    let Some((tag, wkt)) = text.split_once(';') else {
        return Ok((None, text));
    };

    let code = tag
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("srid="))
        .map(|_| tag[5..].trim())
        .ok_or_else(|| GeometryError::InvalidEwkt(format!("unexpected prefix '{tag}'")))?;

    let srid = code
        .parse()
        .map_err(|_| GeometryError::InvalidEwkt(format!("invalid SRID '{code}'")))?;

    log::debug!("EWKT text has SRID {srid}");
    Ok((Some(srid), wkt.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use crate::impls::{LineString, Point, Polygon};
    use assert_matches::assert_matches;

    #[test]
    fn plain_wkt() {
        let line = load_ewkt("LINESTRING(0 0, 1 1)", None).expect("valid WKT");
        assert_eq!(
            line,
            LineString::new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]).into()
        );
    }

    #[test]
    fn srid_prefix() {
        let point = load_ewkt("SRID=4326;POINT(1 2)", None).expect("valid EWKT");
        assert_eq!(
            point,
            Point::new(coord!(1.0, 2.0))
                .with_crs(Some(Crs::WGS84))
                .into()
        );

        let point = load_ewkt("srid=3857; POINT(1 2)", None).expect("valid EWKT");
        assert_eq!(point.crs(), Some(&Crs::EPSG3857));
    }

    #[test]
    fn override_wins_over_srid() {
        let point = load_ewkt("SRID=4326;POINT(1 2)", Some(Crs::EPSG3857)).expect("valid EWKT");
        assert_eq!(point.crs(), Some(&Crs::EPSG3857));
    }

    #[test]
    fn polygon() {
        let polygon = load_ewkt("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))", None).expect("valid WKT");
        assert_eq!(
            polygon,
            Polygon::new(vec![vec![
                coord!(0.0, 0.0),
                coord!(1.0, 0.0),
                coord!(1.0, 1.0),
                coord!(0.0, 1.0),
                coord!(0.0, 0.0),
            ]])
            .into()
        );
    }

    #[test]
    fn keeps_z_values() {
        let point = load_ewkt("POINT Z (1 2 3)", None).expect("valid WKT");
        assert_eq!(point, Point::new(coord!(1.0, 2.0, 3.0)).into());

        let line = load_ewkt("LINESTRING Z (0 0 1, 1 1 2)", None).expect("valid WKT");
        assert_eq!(
            line,
            LineString::new(vec![coord!(0.0, 0.0, 1.0), coord!(1.0, 1.0, 2.0)]).into()
        );

        let point = load_ewkt("SRID=3857;POINT Z (10 20 30)", None).expect("valid EWKT");
        let Geometry::Point(point) = point else {
            panic!("expected a point, got {point:?}");
        };
        assert_eq!(point.coordinates().z(), Some(30.0));
        assert_eq!(point.crs(), Some(&Crs::EPSG3857));
    }

    #[test]
    fn invalid_text() {
        assert_matches!(
            load_ewkt("not a geometry", None),
            Err(GeometryError::InvalidEwkt(_))
        );
        assert_matches!(
            load_ewkt("SRID=abc;POINT(1 2)", None),
            Err(GeometryError::InvalidEwkt(_))
        );
        assert_matches!(
            load_ewkt("FOO=1;POINT(1 2)", None),
            Err(GeometryError::InvalidEwkt(_))
        );
        // Unclosed ring.
        assert_matches!(
            load_ewkt("POLYGON((0 0, 1 0, 1 1, 0 1))", None),
            Err(GeometryError::InvalidEwkt(_))
        );
    }

    #[test]
    fn loads_falls_back_to_wkt() {
        let point = crate::geojson::loads("SRID=4326;POINT(1 2)", None).expect("valid EWKT");
        assert_eq!(point.srid(), Some(4326));
    }
}
