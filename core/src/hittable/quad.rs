use std::sync::Arc;

use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, HittableList, Uv},
    interval::Interval,
    material::MaterialKind,
    ray::{Point3, Ray},
    rng::Rng,
    vec3::Vec3,
};

/// Parallelogram spanned by edge vectors `u`, `v` from corner `q`.
#[derive(Clone)]
pub struct Quad {
    q: Point3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    normal: Vec3,
    d: f64,
    material: Arc<MaterialKind>,
    bounding_box: Aabb,
}

impl Quad {
    pub fn new(q: Point3, u: Vec3, v: Vec3, material: Arc<MaterialKind>) -> Self {
        let n = u.cross(&v);
        let normal = n.to_unit();
        let d = normal.dot(&q);
        let w = n / n.dot_self();

        let box0 = Aabb::with_points(q, q + u + v);
        let box1 = Aabb::with_points(q + u, q + v);

        Self { q, u, v, w, normal, d, material, bounding_box: Aabb::from_boxes(&box0, &box1) }
    }

    /// Builds the six quads of an axis-aligned box spanning corners `a` and `b`.
    pub fn new_box(a: Point3, b: Point3, material: Arc<MaterialKind>) -> HittableList {
        let min = Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));

        let dx = Vec3::with_x(max.x - min.x);
        let dy = Vec3::with_y(max.y - min.y);
        let dz = Vec3::with_z(max.z - min.z);

        let mut sides = HittableList::with_capacity(6);
        sides.push(Quad::new(Point3::new(min.x, min.y, max.z), dx, dy, material.clone()));
        sides.push(Quad::new(Point3::new(max.x, min.y, max.z), -dz, dy, material.clone()));
        sides.push(Quad::new(Point3::new(max.x, min.y, min.z), -dx, dy, material.clone()));
        sides.push(Quad::new(Point3::new(min.x, min.y, min.z), dz, dy, material.clone()));
        sides.push(Quad::new(Point3::new(min.x, max.y, max.z), dx, -dz, material.clone()));
        sides.push(Quad::new(Point3::new(min.x, min.y, min.z), dx, dz, material));

        sides
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, ray_t: Interval, _rng: &mut Rng) -> Option<HitRecord> {
        let denom = self.normal.dot(&ray.direction);
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.d - self.normal.dot(&ray.origin)) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        let intersection = ray.at(t);
        let planar = intersection - self.q;
        let alpha = self.w.dot(&planar.cross(&self.v));
        let beta = self.w.dot(&self.u.cross(&planar));

        let unit = Interval::new(0., 1.);
        if !unit.contains(alpha) || !unit.contains(beta) {
            return None;
        }

        Some(HitRecord::with_face_normal(
            ray,
            intersection,
            self.normal,
            t,
            Uv::new(alpha, beta),
            self.material.clone(),
        ))
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }
}
