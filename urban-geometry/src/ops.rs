//! Spatial operations on geometries.

use crate::error::GeometryError;
use crate::impls::LineString;
use crate::Geometry;

/// Copy of the geometry with coordinate order inverted in every coordinate sequence. See [`Geometry::reverse`].
pub fn reverse(geometry: &Geometry) -> Geometry {
    geometry.reverse()
}

/// Joins an ordered sequence of lines into one line.
///
/// Every line after the first one must start where the previous one ends. The shared endpoint is included into
/// the result only once, so merging `n` lines gives `sum(len) - (n - 1)` positions.
///
/// * An empty input gives `None`.
/// * A single line is returned as is.
/// * Otherwise all lines must have equal CRS (a missing CRS is not equal to any set one). This is checked before
///   any coordinates are looked at, so on error there is no partial result.
///
/// ```
/// use urban_geometry::{coord, ops, LineString};
///
/// let a = LineString::new(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]);
/// let b = LineString::new(vec![coord!(1.0, 1.0), coord!(2.0, 2.0)]);
///
/// let merged = ops::merge_lines(&[a, b]).unwrap().unwrap();
/// assert_eq!(merged.coordinates(), &[coord!(0.0, 0.0), coord!(1.0, 1.0), coord!(2.0, 2.0)]);
/// ```
pub fn merge_lines(lines: &[LineString]) -> Result<Option<LineString>, GeometryError> {
    let Some((first, rest)) = lines.split_first() else {
        return Ok(None);
    };

    if let Some(other) = rest.iter().find(|line| line.crs() != first.crs()) {
        return Err(GeometryError::crs_mismatch(first.crs(), other.crs()));
    }

    let mut coordinates = Vec::with_capacity(lines.iter().map(LineString::len).sum());
    coordinates.extend_from_slice(first.coordinates());

    for (index, line) in rest.iter().enumerate() {
        let Some((start, tail)) = line.coordinates().split_first() else {
            return Err(GeometryError::NonContiguousLineString { index: index + 1 });
        };

        if coordinates.last() != Some(start) {
            return Err(GeometryError::NonContiguousLineString { index: index + 1 });
        }

        coordinates.extend_from_slice(tail);
    }

    log::trace!(
        "Merged {} lines into a line of {} positions",
        lines.len(),
        coordinates.len()
    );

    Ok(Some(
        LineString::new(coordinates).with_crs(first.crs().cloned()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, Crs};
    use assert_matches::assert_matches;

    fn line(coords: &[(f64, f64)]) -> LineString {
        LineString::new(coords.iter().map(|&(x, y)| coord!(x, y)).collect())
    }

    #[test]
    fn merge_identity() {
        assert_eq!(merge_lines(&[]), Ok(None));

        let single = line(&[(0.0, 0.0), (1.0, 1.0)]).with_crs(Some(Crs::WGS84));
        assert_eq!(merge_lines(&[single.clone()]), Ok(Some(single)));
    }

    #[test]
    fn merge_contiguous() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let b = line(&[(1.0, 1.0), (2.0, 2.0)]);

        let merged = merge_lines(&[a, b])
            .expect("lines are contiguous")
            .expect("input is not empty");
        assert_eq!(merged, line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
    }

    #[test]
    fn merged_length() {
        let lines = vec![
            line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
            line(&[(2.0, 0.0), (2.0, 1.0)]),
            line(&[(2.0, 1.0)]),
            line(&[(2.0, 1.0), (3.0, 1.0), (3.0, 2.0), (4.0, 2.0)]),
        ];
        let merged = merge_lines(&lines)
            .expect("lines are contiguous")
            .expect("input is not empty");

        let total: usize = lines.iter().map(LineString::len).sum();
        assert_eq!(merged.len(), total - (lines.len() - 1));
        assert_eq!(merged.last(), Some(&coord!(4.0, 2.0)));
    }

    #[test]
    fn merge_keeps_crs() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]).with_crs(Some(Crs::WGS84));
        let b = line(&[(1.0, 1.0), (2.0, 2.0)]).with_crs(Some(Crs::WGS84));

        let merged = merge_lines(&[a, b]).expect("valid").expect("not empty");
        assert_eq!(merged.crs(), Some(&Crs::WGS84));
    }

    #[test]
    fn merge_non_contiguous() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let b = line(&[(1.0, 1.0), (2.0, 2.0)]);
        let c = line(&[(5.0, 5.0), (6.0, 6.0)]);

        assert_eq!(
            merge_lines(&[a.clone(), c.clone()]),
            Err(GeometryError::NonContiguousLineString { index: 1 })
        );
        assert_eq!(
            merge_lines(&[a.clone(), b.clone(), c]),
            Err(GeometryError::NonContiguousLineString { index: 2 })
        );
        // Order matters: the lines are not rearranged.
        assert_eq!(
            merge_lines(&[b, a]),
            Err(GeometryError::NonContiguousLineString { index: 1 })
        );
    }

    #[test]
    fn merge_crs_mismatch() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]).with_crs(Some(Crs::WGS84));
        let b = line(&[(1.0, 1.0), (2.0, 2.0)]).with_crs(Some(Crs::EPSG3857));
        assert_matches!(
            merge_lines(&[a.clone(), b]),
            Err(GeometryError::CrsMismatch { .. })
        );

        // CRS is checked before contiguity.
        let far = line(&[(5.0, 5.0), (6.0, 6.0)]).with_crs(Some(Crs::EPSG3857));
        assert_matches!(
            merge_lines(&[a.clone(), far]),
            Err(GeometryError::CrsMismatch { .. })
        );

        let unset = line(&[(1.0, 1.0), (2.0, 2.0)]);
        assert_matches!(
            merge_lines(&[a, unset]),
            Err(GeometryError::CrsMismatch { .. })
        );
    }

    #[test]
    fn reverse_line() {
        let a: Geometry = line(&[(0.0, 0.0), (1.0, 1.0), (3.0, 2.0)]).into();
        assert_eq!(
            reverse(&a),
            line(&[(3.0, 2.0), (1.0, 1.0), (0.0, 0.0)]).into()
        );
        assert_eq!(reverse(&reverse(&a)), a);
    }
}
