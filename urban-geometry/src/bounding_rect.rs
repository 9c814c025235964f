use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

use crate::Coord;

/// Axis-aligned rectangle that contains a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect<N: Num + Copy + PartialOrd = f64> {
    /// Minimum x.
    pub x_min: N,
    /// Minimum y.
    pub y_min: N,
    /// Maximum x.
    pub x_max: N,
    /// Maximum y.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd> BoundingRect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Merges all the rectangles of the iterator. Returns `None` for an empty iterator.
    pub fn merge_all(iter: impl IntoIterator<Item = Self>) -> Option<Self> {
        iter.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }
}

impl<N: Float> BoundingRect<N> {
    /// Center of the rectangle. Each axis is averaged on its own: `((x_min + x_max) / 2, (y_min + y_max) / 2)`.
    pub fn center(&self) -> (N, N) {
        let two = N::one() + N::one();
        (
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }
}

impl BoundingRect<f64> {
    /// Rectangle of a single coordinate.
    pub fn from_coord(c: &Coord) -> Self {
        Self {
            x_min: c.x(),
            x_max: c.x(),
            y_min: c.y(),
            y_max: c.y(),
        }
    }

    /// Rectangle containing all the coordinates, or `None` if there are none.
    pub fn from_coords<'a>(mut coords: impl Iterator<Item = &'a Coord>) -> Option<Self> {
        let first = coords.next()?;
        let mut x_min = first.x();
        let mut y_min = first.y();
        let mut x_max = first.x();
        let mut y_max = first.y();

        for c in coords {
            if x_min > c.x() {
                x_min = c.x();
            }
            if y_min > c.y() {
                y_min = c.y();
            }
            if x_max < c.x() {
                x_max = c.x();
            }
            if y_max < c.y() {
                y_max = c.y();
            }
        }

        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Whether the coordinate is inside the rectangle (borders included).
    pub fn contains(&self, c: &Coord) -> bool {
        self.x_min <= c.x() && self.x_max >= c.x() && self.y_min <= c.y() && self.y_max >= c.y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn from_coords() {
        let coords = [coord!(1.0, 5.0), coord!(-3.0, 2.0), coord!(4.0, -1.0)];
        let rect = BoundingRect::from_coords(coords.iter()).expect("not empty");
        assert_eq!(rect, BoundingRect::new(-3.0, -1.0, 4.0, 5.0));
        assert!(rect.contains(&coord!(0.0, 0.0)));
        assert!(!rect.contains(&coord!(0.0, 6.0)));

        assert_eq!(BoundingRect::from_coords([].iter()), None);
    }

    #[test]
    fn center_averages_each_axis() {
        let rect = BoundingRect::new(10.0, 40.0, 20.0, 50.0);
        assert_eq!(rect.center(), (15.0, 45.0));

        let rect = BoundingRect::new(-80.0, 30.0, -80.0, 32.0);
        assert_eq!(rect.center(), (-80.0, 31.0));
    }

    #[test]
    fn merge_all() {
        let merged = BoundingRect::merge_all([
            BoundingRect::new(0.0, 0.0, 1.0, 1.0),
            BoundingRect::new(-1.0, 0.5, 0.5, 3.0),
        ]);
        assert_eq!(merged, Some(BoundingRect::new(-1.0, 0.0, 1.0, 3.0)));
        assert_eq!(merged.map(|r| r.width()), Some(2.0));
        assert_eq!(BoundingRect::<f64>::merge_all([]), None);
    }
}
