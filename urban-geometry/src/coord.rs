use crate::error::GeometryError;

/// A single position: `x`, `y` and optionally `z` and `m` values.
///
/// For geographic coordinate systems `x` is the longitude and `y` is the latitude, both in degrees, in the GeoJSON
/// axis order.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Coord {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

impl Coord {
    /// Creates a 2d coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Creates a 3d coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Creates a 3d coordinate with a measure.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// X (easting or longitude).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y (northing or latitude).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Elevation.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Measure.
    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// Number of values in the coordinate, between 2 and 4.
    pub fn dimensions(&self) -> usize {
        2 + self.z.map_or(0, |_| 1) + self.m.map_or(0, |_| 1)
    }

    /// Returns a copy with `x` and `y` replaced. `z` and `m` are kept.
    pub fn with_xy(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// GeoJSON position for this coordinate.
    pub fn to_position(&self) -> Vec<f64> {
        let mut position = Vec::with_capacity(self.dimensions());
        position.push(self.x);
        position.push(self.y);
        position.extend(self.z);
        position.extend(self.m);
        position
    }
}

impl TryFrom<&[f64]> for Coord {
    type Error = GeometryError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::xyz(x, y, z)),
            [x, y, z, m] => Ok(Self::xyzm(x, y, z, m)),
            _ => Err(GeometryError::InvalidGeoJson(format!(
                "position must contain from 2 to 4 values, but {} found",
                value.len()
            ))),
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Creates a [`Coord`] from 2 to 4 values.
///
/// ```
/// use urban_geometry::coord;
///
/// let c = coord!(30.5, 50.4);
/// assert_eq!(c.x(), 30.5);
/// assert_eq!(coord!(1.0, 2.0, 3.0).z(), Some(3.0));
/// ```
#[macro_export]
macro_rules! coord {
    ($x:expr, $y:expr) => {
        $crate::Coord::new($x, $y)
    };
    ($x:expr, $y:expr, $z:expr) => {
        $crate::Coord::xyz($x, $y, $z)
    };
    ($x:expr, $y:expr, $z:expr, $m:expr) => {
        $crate::Coord::xyzm($x, $y, $z, $m)
    };
}
