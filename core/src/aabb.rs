use std::ops::{Add, Index};

use crate::{
    interval::{self, Interval},
    ray::{Point3, Ray},
    vec3::Vec3,
};

/// No side narrower than this gets padded (needed so planar primitives like
/// quads and axis-aligned triangles still bound the BVH slab test sanely).
const PAD_DELTA: f64 = 0.0001;

/// Axis-aligned bounding box: one interval per axis.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

pub const EMPTY: Aabb = Aabb { x: interval::EMPTY, y: interval::EMPTY, z: interval::EMPTY };

impl Aabb {
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }.padded()
    }

    /// Treats `a` and `b` as opposite corners, in either order.
    pub fn with_points(a: Point3, b: Point3) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        }
        .padded()
    }

    pub fn from_boxes(a: &Aabb, b: &Aabb) -> Self {
        Self {
            x: Interval::with_enclosing(&a.x, &b.x),
            y: Interval::with_enclosing(&a.y, &b.y),
            z: Interval::with_enclosing(&a.z, &b.z),
        }
    }

    pub fn longest_axis(&self) -> u8 {
        let (sx, sy, sz) = (self.x.size(), self.y.size(), self.z.size());

        if sx > sy {
            if sx > sz { 0 } else { 2 }
        } else if sy > sz {
            1
        } else {
            2
        }
    }

    /// Slab test against the ray, narrowing `ray_t` as it goes.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let ax = &self[axis];
            let inv_d = 1. / ray.direction[axis];

            let mut t0 = (ax.min - ray.origin[axis]) * inv_d;
            let mut t1 = (ax.max - ray.origin[axis]) * inv_d;
            if inv_d < 0. {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = ray_t.min.max(t0);
            ray_t.max = ray_t.max.min(t1);

            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    fn padded(mut self) -> Self {
        if self.x.size() < PAD_DELTA {
            self.x.expand(PAD_DELTA);
        }
        if self.y.size() < PAD_DELTA {
            self.y.expand(PAD_DELTA);
        }
        if self.z.size() < PAD_DELTA {
            self.z.expand(PAD_DELTA);
        }

        self
    }
}

impl Index<u8> for Aabb {
    type Output = Interval;

    fn index(&self, index: u8) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Aabb index out of bounds, got {index}"),
        }
    }
}

impl Add<Vec3> for Aabb {
    type Output = Aabb;

    fn add(self, rhs: Vec3) -> Self::Output {
        Aabb {
            x: Interval::new(self.x.min + rhs.x, self.x.max + rhs.x),
            y: Interval::new(self.y.min + rhs.y, self.y.max + rhs.y),
            z: Interval::new(self.z.min + rhs.z, self.z.max + rhs.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_points_accepts_either_corner_order() {
        let a = Point3::new(1., 2., 3.);
        let b = Point3::new(1.5, 1.5, 3.5);

        assert_eq!(
            Aabb::with_points(a, b),
            Aabb::new(Interval::new(1., 1.5), Interval::new(1.5, 2.), Interval::new(3., 3.5))
        );
    }

    #[test]
    fn flat_axis_gets_padded() {
        let bbox = Aabb::with_points(Point3::new(0., 0., 0.), Point3::new(1., 0., 1.));

        assert!(bbox.y.size() >= PAD_DELTA);
    }

    #[test]
    fn union_contains_both_inputs() {
        let a = Aabb::new(Interval::new(0., 1.), Interval::new(0., 1.), Interval::new(0., 1.));
        let b = Aabb::new(Interval::new(2., 3.), Interval::new(-1., 0.5), Interval::new(0.5, 4.));

        let u = Aabb::from_boxes(&a, &b);

        assert!(u.x.contains(a.x.min) && u.x.contains(a.x.max));
        assert!(u.x.contains(b.x.min) && u.x.contains(b.x.max));
        assert!(u.y.contains(a.y.min) && u.y.contains(b.y.min));
        assert!(u.z.contains(a.z.max) && u.z.contains(b.z.max));
    }

    #[test]
    fn longest_axis_picks_the_widest() {
        let bbox = Aabb::new(Interval::new(0., 5.), Interval::new(0., 1.), Interval::new(0., 2.));

        assert_eq!(bbox.longest_axis(), 0);
    }

    #[test]
    fn slab_test_misses_ray_pointing_away() {
        let bbox = Aabb::new(Interval::new(-1., 1.), Interval::new(-1., 1.), Interval::new(-1., 1.));
        let ray = Ray::new(Point3::new(5., 0., 0.), Vec3::new(1., 0., 0.));

        assert!(!bbox.hit(&ray, interval::UNIVERSE));
    }

    #[test]
    fn slab_test_hits_ray_through_center() {
        let bbox = Aabb::new(Interval::new(-1., 1.), Interval::new(-1., 1.), Interval::new(-1., 1.));
        let ray = Ray::new(Point3::new(-5., 0., 0.), Vec3::new(1., 0., 0.));

        assert!(bbox.hit(&ray, interval::UNIVERSE));
    }
}
