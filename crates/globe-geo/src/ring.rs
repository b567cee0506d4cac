//! Polygon rings in lon/lat space.

use crate::GeoCoordinate;

/// Orientation of a ring in the lon/lat plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Positive signed area (longitude as x, latitude as y).
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area: fewer than three distinct points or all collinear.
    Degenerate,
}

/// An ordered sequence of coordinates, implicitly closed.
///
/// Rings keep the exact point sequence they were parsed with, including a
/// trailing copy of the first point when the source repeats it. Consumers that
/// need the open form use [`Ring::open_coords`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Ring {
    coords: Vec<GeoCoordinate>,
}

impl Ring {
    /// Creates a ring from coordinates in source order.
    pub fn new(coords: Vec<GeoCoordinate>) -> Self {
        Self { coords }
    }

    /// Creates a ring from `[lon, lat]` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        Self::new(pairs.into_iter().map(GeoCoordinate::from).collect())
    }

    /// All coordinates in source order.
    #[inline]
    pub fn coords(&self) -> &[GeoCoordinate] {
        &self.coords
    }

    /// Number of coordinates in source order, closing point included.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the ring has no coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns `true` if the last coordinate repeats the first.
    pub fn is_explicitly_closed(&self) -> bool {
        self.coords.len() > 1 && self.coords.first() == self.coords.last()
    }

    /// Coordinates with a trailing duplicate of the first point removed.
    pub fn open_coords(&self) -> &[GeoCoordinate] {
        if self.is_explicitly_closed() {
            &self.coords[..self.coords.len() - 1]
        } else {
            &self.coords
        }
    }

    /// A copy of this ring with the point order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.coords.iter().rev().copied().collect())
    }

    /// Flat `[lon0, lat0, lon1, lat1, ...]` buffer of the open ring, the
    /// input layout of 2D triangulators.
    pub fn flat_2d(&self) -> Vec<f64> {
        self.open_coords()
            .iter()
            .flat_map(|c| [c.lon, c.lat])
            .collect()
    }

    /// Shoelace signed area of the open ring in square degrees.
    pub fn signed_area(&self) -> f64 {
        let pts = self.open_coords();
        let n = pts.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = pts[i];
                let b = pts[(i + 1) % n];
                a.lon * b.lat - b.lon * a.lat
            })
            .sum();
        twice * 0.5
    }

    /// Orientation of the ring in the lon/lat plane.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}

impl FromIterator<GeoCoordinate> for Ring {
    fn from_iter<T: IntoIterator<Item = GeoCoordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
