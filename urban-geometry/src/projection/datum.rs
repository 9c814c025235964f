/// Reference ellipsoid parameters used by the spherical projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// WGS-84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Semi-major axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_wgs84() {
        assert_eq!(Datum::default(), Datum::WGS84);
        assert_eq!(Datum::default().semimajor(), 6_378_137.0);
    }
}
