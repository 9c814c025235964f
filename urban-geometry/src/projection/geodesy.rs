use geodesy::prelude::*;

use super::Projection;
use crate::Coord;

/// Projection backed by a `geodesy` operator, e.g. `utm zone=33` or `tmerc lon_0=30 lat_0=50`.
pub struct GeodesyProjection {
    context: Minimal,
    op: OpHandle,
}

impl GeodesyProjection {
    /// Creates the projection from a `geodesy` operator definition. Returns `None` if the definition is invalid.
    pub fn new(definition: &str) -> Option<Self> {
        let mut context = Minimal::new();
        let op = context.op(definition).ok()?;
        Some(Self { context, op })
    }
}

impl std::fmt::Debug for GeodesyProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeodesyProjection").finish_non_exhaustive()
    }
}

impl Projection for GeodesyProjection {
    fn project(&self, lonlat: &Coord) -> Option<Coord> {
        let mut data = [Coor2D::geo(lonlat.y(), lonlat.x())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        let [x, y] = data[0].0;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some(lonlat.with_xy(x, y))
    }

    fn unproject(&self, xy: &Coord) -> Option<Coord> {
        let mut data = [Coor2D([xy.x(), xy.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        let (lon, lat) = (data[0].0[0].to_degrees(), data[0].0[1].to_degrees());
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }

        Some(xy.with_xy(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use approx::assert_abs_diff_eq;

    #[test]
    fn utm_central_meridian() {
        let projection = GeodesyProjection::new("utm zone=33").expect("valid definition");

        let projected = projection
            .project(&coord!(15.0, 0.0))
            .expect("valid coordinates");
        assert_abs_diff_eq!(projected.x(), 500_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(projected.y(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn tmerc_round_trip() {
        let projection =
            GeodesyProjection::new("tmerc lat_0=50 lon_0=30 k_0=1 x_0=0 y_0=0 ellps=WGS84")
                .expect("valid definition");

        let center = projection
            .project(&coord!(30.0, 50.0))
            .expect("valid coordinates");
        assert_abs_diff_eq!(center.x(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.y(), 0.0, epsilon = 1e-6);

        let point = coord!(30.5, 50.4, 100.0);
        let unprojected = projection
            .unproject(&projection.project(&point).expect("valid coordinates"))
            .expect("valid coordinates");
        assert_abs_diff_eq!(unprojected.x(), 30.5, epsilon = 1e-8);
        assert_abs_diff_eq!(unprojected.y(), 50.4, epsilon = 1e-8);
        assert_eq!(unprojected.z(), Some(100.0));
    }

    #[test]
    fn invalid_definition() {
        assert!(GeodesyProjection::new("no_such_operator").is_none());
    }
}
