use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::datum::Datum;
use super::Projection;
use crate::Coord;

/// Spherical Web Mercator (EPSG:3857) on the semi-major axis of the datum.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WebMercator {
    datum: Datum,
}

impl Projection for WebMercator {
    fn project(&self, lonlat: &Coord) -> Option<Coord> {
        let a = self.datum.semimajor();
        let x = a * lonlat.x().to_radians();
        let y = a * (FRAC_PI_4 + lonlat.y().to_radians() / 2.0).tan().ln();

        if x.is_finite() && y.is_finite() {
            Some(lonlat.with_xy(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, xy: &Coord) -> Option<Coord> {
        let a = self.datum.semimajor();
        let lat = 2.0 * (xy.y() / a).exp().atan() - FRAC_PI_2;
        let lon = xy.x() / a;

        let (lon, lat) = (lon.to_degrees(), lat.to_degrees());
        if lon.is_finite() && lat.is_finite() {
            Some(xy.with_xy(lon, lat))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let projection = WebMercator::default();

        let origin = projection
            .project(&coord!(0.0, 0.0))
            .expect("origin is projectable");
        assert_abs_diff_eq!(origin.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.y(), 0.0, epsilon = 1e-9);

        let corner = projection
            .project(&coord!(180.0, 85.0511287798066))
            .expect("valid coordinates");
        assert_abs_diff_eq!(corner.x(), 20_037_508.342789244, epsilon = 1e-6);
        assert_abs_diff_eq!(corner.y(), 20_037_508.342789244, epsilon = 1e-3);

        let kyiv = projection
            .project(&coord!(30.5, 50.4))
            .expect("valid coordinates");
        assert_abs_diff_eq!(kyiv.x(), 3_395_244.469, epsilon = 1e-2);
        assert_abs_diff_eq!(kyiv.y(), 6_515_839.148, epsilon = 1e-2);
    }

    #[test]
    fn round_trip() {
        let projection = WebMercator::default();
        for (lon, lat) in [(30.5, 50.4), (-122.4, 37.8), (151.2, -33.9), (0.0, 0.0)] {
            let projected = projection
                .project(&coord!(lon, lat, 12.0))
                .expect("valid coordinates");
            assert_eq!(projected.z(), Some(12.0));

            let unprojected = projection.unproject(&projected).expect("valid coordinates");
            assert_abs_diff_eq!(unprojected.x(), lon, epsilon = 1e-9);
            assert_abs_diff_eq!(unprojected.y(), lat, epsilon = 1e-9);
            assert_eq!(unprojected.z(), Some(12.0));
        }
    }

    #[test]
    fn invalid_latitude_is_not_projectable() {
        assert_eq!(WebMercator::default().project(&coord!(0.0, 100.0)), None);
    }
}
