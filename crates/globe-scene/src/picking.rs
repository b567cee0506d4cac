//! CPU ray casting against region solids.

use glam::Vec3;
use globe_borders::BorderId;
use globe_geo::GeoCoordinate;

/// A ray in globe space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Need not be normalized; hit distances are in units of its length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `target`.
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, (target - origin).normalize_or_zero())
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest region hit by a ray.
#[derive(Clone, Debug, PartialEq)]
pub struct PickHit {
    /// Index of the region in [`crate::Globe::regions`].
    pub region: usize,
    /// Owning country of the region.
    pub country: String,
    /// Ray parameter of the hit.
    pub distance: f32,
    /// Hit point in globe space.
    pub point: Vec3,
    /// Hit point as longitude/latitude.
    pub coordinate: GeoCoordinate,
    /// Internal borders of the country, the set a host would highlight.
    pub borders: Vec<BorderId>,
}

/// Möller–Trumbore intersection, returning the ray parameter of a hit in
/// front of the origin. Both faces count.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < EPSILON {
        return None; // parallel
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// Nearest intersection of `ray` with an indexed triangle list.
pub(crate) fn nearest_triangle_hit(ray: &Ray, positions: &[Vec3], indices: &[u32]) -> Option<f32> {
    indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let v0 = *positions.get(tri[0] as usize)?;
            let v1 = *positions.get(tri[1] as usize)?;
            let v2 = *positions.get(tri[2] as usize)?;
            ray_triangle_intersect(ray, v0, v1, v2)
        })
        .min_by(f32::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> (Vec3, Vec3, Vec3) {
        (Vec3::ZERO, Vec3::X, Vec3::Y)
    }

    #[test]
    fn test_hit_through_interior() {
        let (a, b, c) = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, 2.0), Vec3::NEG_Z);
        let t = ray_triangle_intersect(&ray, a, b, c).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
        assert!(ray.at(t).abs_diff_eq(Vec3::new(0.25, 0.25, 0.0), 1e-6));
    }

    #[test]
    fn test_back_face_counts() {
        let (a, b, c) = unit_triangle();
        let ray = Ray::new(Vec3::new(0.25, 0.25, -2.0), Vec3::Z);
        assert!(ray_triangle_intersect(&ray, a, b, c).is_some());
    }

    #[test]
    fn test_miss_outside_and_behind() {
        let (a, b, c) = unit_triangle();
        let outside = Ray::new(Vec3::new(0.9, 0.9, 2.0), Vec3::NEG_Z);
        assert_eq!(ray_triangle_intersect(&outside, a, b, c), None);
        let behind = Ray::new(Vec3::new(0.25, 0.25, 2.0), Vec3::Z);
        assert_eq!(ray_triangle_intersect(&behind, a, b, c), None);
        let parallel = Ray::new(Vec3::new(0.25, 0.25, 2.0), Vec3::X);
        assert_eq!(ray_triangle_intersect(&parallel, a, b, c), None);
    }

    #[test]
    fn test_nearest_of_stacked_triangles() {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ];
        let indices = [0, 1, 2, 3, 4, 5];
        let ray = Ray::towards(Vec3::new(0.2, 0.2, 5.0), Vec3::new(0.2, 0.2, 0.0));
        let t = nearest_triangle_hit(&ray, &positions, &indices).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::NEG_Z);
        assert_eq!(nearest_triangle_hit(&ray, &[Vec3::ZERO], &[0, 1, 2]), None);
    }
}
