//! Direction-independent ring keys.
//!
//! A ring is first rounded to a fixed number of decimals so float noise from
//! reprojection or dataset jitter disappears. The rounded ring is serialized in
//! both point orders and the lexicographically smaller string is the key, so a
//! boundary traced clockwise by one region and counter-clockwise by its
//! neighbour yields the same key. Keys carry no geometry beyond equality.

use std::fmt::{self, Write as _};

use globe_geo::{GeoCoordinate, Ring};

/// Decimal places kept by default when normalizing a ring.
pub const DEFAULT_KEY_PRECISION: u32 = 5;

/// Canonical, winding-independent identity of a ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// The serialized form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round to `precision` decimal places using decimal (not binary) rounding.
///
/// Negative zero is folded to zero so `-0.000001` and `0.000001` agree.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let text = format!("{value:.prec$}", prec = precision as usize);
    text.parse::<f64>().unwrap_or(value) + 0.0
}

/// Round every coordinate of a ring to `precision` decimal places.
pub fn normalize_ring(ring: &Ring, precision: u32) -> Ring {
    ring.coords()
        .iter()
        .map(|c| {
            GeoCoordinate::new(
                round_to_precision(c.lon, precision),
                round_to_precision(c.lat, precision),
            )
        })
        .collect()
}

/// Key of an already normalized ring.
pub fn canonical_key(normalized: &Ring) -> CanonicalKey {
    let coords = normalized.coords();
    let forward = serialize(coords.iter());
    let backward = serialize(coords.iter().rev());
    CanonicalKey(if forward <= backward { forward } else { backward })
}

fn serialize<'a>(coords: impl Iterator<Item = &'a GeoCoordinate>) -> String {
    let mut out = String::from("[");
    for (i, c) in coords.enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "[{},{}]", c.lon, c.lat);
    }
    out.push(']');
    out
}

/// Normalizes rings and computes their keys at a fixed precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingCanonicalizer {
    precision: u32,
}

impl Default for RingCanonicalizer {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PRECISION)
    }
}

impl RingCanonicalizer {
    /// Creates a canonicalizer keeping `precision` decimal places.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Decimal places kept.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Round every coordinate of `ring`.
    pub fn normalize(&self, ring: &Ring) -> Ring {
        normalize_ring(ring, self.precision)
    }

    /// Normalize `ring` and return its canonical key.
    pub fn key(&self, ring: &Ring) -> CanonicalKey {
        canonical_key(&self.normalize(ring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ring() -> Ring {
        Ring::from_pairs([
            [2.123456789, 48.1],
            [3.5, 48.1],
            [3.5, 49.987654321],
            [2.123456789, 49.987654321],
            [2.123456789, 48.1],
        ])
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(2.123456789, 5), 2.12346);
        assert_eq!(round_to_precision(-0.000001, 5), 0.0);
        assert!(round_to_precision(-0.000001, 5).is_sign_positive());
        assert_eq!(round_to_precision(10.0, 5), 10.0);
    }

    #[test]
    fn test_reversal_invariance() {
        let c = RingCanonicalizer::default();
        let ring = sample_ring();
        assert_eq!(c.key(&ring), c.key(&ring.reversed()));
    }

    #[test]
    fn test_reversal_invariance_many_rings() {
        let c = RingCanonicalizer::default();
        for seed in 0..50u32 {
            let ring: Ring = (0..(3 + seed % 7))
                .map(|i| {
                    let t = (seed * 31 + i * 17) as f64;
                    GeoCoordinate::new((t * 1.37).sin() * 179.0, (t * 0.71).cos() * 89.0)
                })
                .collect();
            assert_eq!(c.key(&ring), c.key(&ring.reversed()), "seed {seed}");
        }
    }

    #[test]
    fn test_jitter_below_precision_collides() {
        let c = RingCanonicalizer::default();
        let jittered: Ring = sample_ring()
            .coords()
            .iter()
            .map(|p| GeoCoordinate::new(p.lon + 1e-9, p.lat - 1e-9))
            .collect();
        assert_eq!(c.key(&sample_ring()), c.key(&jittered.reversed()));
    }

    #[test]
    fn test_different_rings_differ() {
        let c = RingCanonicalizer::default();
        let other = Ring::from_pairs([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        assert_ne!(c.key(&sample_ring()), c.key(&other));
    }

    #[test]
    fn test_key_is_smaller_serialization() {
        let ring = Ring::from_pairs([[5.0, 1.0], [1.0, 2.0], [3.0, 3.0]]);
        let key = canonical_key(&ring);
        assert_eq!(key.as_str(), "[[3,3],[1,2],[5,1]]");
    }

    #[test]
    fn test_coarser_precision_merges_more() {
        let a = Ring::from_pairs([[0.12, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let b = Ring::from_pairs([[0.14, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert_ne!(RingCanonicalizer::new(2).key(&a), RingCanonicalizer::new(2).key(&b));
        assert_eq!(RingCanonicalizer::new(0).key(&a), RingCanonicalizer::new(0).key(&b));
    }
}
