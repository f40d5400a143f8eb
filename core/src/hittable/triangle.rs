use std::sync::Arc;

use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, Uv},
    interval::Interval,
    material::MaterialKind,
    ray::{Point3, Ray},
    rng::Rng,
    vec3::Vec3,
};

const EPSILON: f64 = 1e-8;

/// Three vertices, with optional per-vertex normals for smooth shading.
#[derive(Clone)]
pub struct Triangle {
    v0: Point3,
    edge1: Vec3,
    edge2: Vec3,
    face_normal: Vec3,
    vertex_normals: Option<(Vec3, Vec3, Vec3)>,
    material: Arc<MaterialKind>,
    bounding_box: Aabb,
}

impl Triangle {
    pub fn flat(v0: Point3, v1: Point3, v2: Point3, material: Arc<MaterialKind>) -> Self {
        Self::new(v0, v1, v2, None, material)
    }

    pub fn smooth(
        v0: Point3,
        v1: Point3,
        v2: Point3,
        n0: Vec3,
        n1: Vec3,
        n2: Vec3,
        material: Arc<MaterialKind>,
    ) -> Self {
        Self::new(v0, v1, v2, Some((n0, n1, n2)), material)
    }

    fn new(
        v0: Point3,
        v1: Point3,
        v2: Point3,
        vertex_normals: Option<(Vec3, Vec3, Vec3)>,
        material: Arc<MaterialKind>,
    ) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let face_normal = edge1.cross(&edge2).to_unit();

        let bbox01 = Aabb::with_points(v0, v1);
        let bbox2 = Aabb::with_points(v2, v2);
        let bounding_box = Aabb::from_boxes(&bbox01, &bbox2);

        Self { v0, edge1, edge2, face_normal, vertex_normals, material, bounding_box }
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, _rng: &mut Rng) -> Option<HitRecord> {
        let pvec = ray.direction.cross(&self.edge2);
        let det = self.edge1.dot(&pvec);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1. / det;

        let tvec = ray.origin - self.v0;
        let u = tvec.dot(&pvec) * inv_det;
        if !(0. ..=1.).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(&self.edge1);
        let v = ray.direction.dot(&qvec) * inv_det;
        if v < 0. || u + v > 1. {
            return None;
        }

        let t = self.edge2.dot(&qvec) * inv_det;
        if !ray_t.contains(t) {
            return None;
        }

        let p = ray.at(t);
        let outward_normal = match self.vertex_normals {
            Some((n0, n1, n2)) => {
                let w = 1. - u - v;
                (w * n0 + u * n1 + v * n2).to_unit()
            }
            None => self.face_normal,
        };

        Some(HitRecord::with_face_normal(
            ray,
            p,
            outward_normal,
            t,
            Uv::new(u, v),
            self.material.clone(),
        ))
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interval, material::Lambertian};

    fn white() -> Arc<MaterialKind> {
        Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)))
    }

    fn unit_xy_triangle() -> Triangle {
        Triangle::flat(
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(0., 1., 0.),
            white(),
        )
    }

    #[test]
    fn hits_inside_the_triangle() {
        let tri = unit_xy_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, -1.), Vec3::with_z(1.));
        let mut rng = Rng::seeded(0);

        assert!(tri.hit(&ray, interval::UNIVERSE, &mut rng).is_some());
    }

    #[test]
    fn misses_outside_barycentric_bounds() {
        let tri = unit_xy_triangle();
        let ray = Ray::new(Point3::new(0.9, 0.9, -1.), Vec3::with_z(1.));
        let mut rng = Rng::seeded(0);

        assert!(tri.hit(&ray, interval::UNIVERSE, &mut rng).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let tri = unit_xy_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, -1.), Vec3::with_x(1.));
        let mut rng = Rng::seeded(0);

        assert!(tri.hit(&ray, interval::UNIVERSE, &mut rng).is_none());
    }

    #[test]
    fn smooth_shading_interpolates_vertex_normals() {
        let tri = Triangle::smooth(
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(0., 1., 0.),
            Vec3::with_z(1.),
            Vec3::with_z(1.),
            Vec3::new(1., 0., 1.).to_unit(),
            white(),
        );
        let ray = Ray::new(Point3::new(0., 1., -1.), Vec3::with_z(1.));
        let mut rng = Rng::seeded(0);

        let rec = tri.hit(&ray, interval::UNIVERSE, &mut rng).unwrap();
        assert!((rec.normal.length() - 1.).abs() < 1e-9);
    }
}
