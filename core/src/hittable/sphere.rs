use std::{f64::consts::PI, sync::Arc};

use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, Uv},
    interval::Interval,
    material::MaterialKind,
    ray::{Point3, Ray},
    rng::Rng,
    vec3::Vec3,
};

/// Stationary or linearly-moving sphere. `center(t) = center0 + t * (center1 - center0)`;
/// a stationary sphere has `center1 == center0`.
#[derive(Clone)]
pub struct Sphere {
    center0: Point3,
    center1: Point3,
    radius: f64,
    material: Arc<MaterialKind>,
    bounding_box: Aabb,
}

impl Sphere {
    pub fn stationary(center: Point3, radius: f64, material: Arc<MaterialKind>) -> Self {
        Self::new(center, center, radius, material)
    }

    pub fn moving(center0: Point3, center1: Point3, radius: f64, material: Arc<MaterialKind>) -> Self {
        Self::new(center0, center1, radius, material)
    }

    fn new(center0: Point3, center1: Point3, radius: f64, material: Arc<MaterialKind>) -> Self {
        let radius = radius.max(0.);
        let rvec = Vec3::with_isotropic(radius);
        let box0 = Aabb::with_points(center0 - rvec, center0 + rvec);
        let box1 = Aabb::with_points(center1 - rvec, center1 + rvec);

        Self {
            center0,
            center1,
            radius,
            material,
            bounding_box: Aabb::from_boxes(&box0, &box1),
        }
    }

    fn center(&self, time: f64) -> Point3 {
        self.center0 + time * (self.center1 - self.center0)
    }

    /// `u = (atan2(-z, x) + pi) / (2 pi)`, `v = acos(-y) / pi`; expects a unit
    /// outward normal.
    fn uv(p: Vec3) -> Uv {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        Uv::new(phi / (2. * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, _rng: &mut Rng) -> Option<HitRecord> {
        let center = self.center(ray.time);
        let oc = center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(&oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;

        if discriminant < 0. {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let t = root;
        let p = ray.at(t);
        let outward_normal = (p - center) / self.radius;

        Some(HitRecord::with_face_normal(
            ray,
            p,
            outward_normal,
            t,
            Self::uv(outward_normal),
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

    fn white_lambertian() -> Arc<MaterialKind> {
        Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)))
    }

    #[test]
    fn uv_matches_reference_points() {
        assert_eq!(Sphere::uv(Vec3::new(1., 0., 0.)), Uv::new(0.5, 0.5));
        assert_eq!(Sphere::uv(Vec3::new(0., 1., 0.)).v, 1.);
        assert_eq!(Sphere::uv(Vec3::new(0., -1., 0.)).v, 0.);
    }

    #[test]
    fn radius_is_clamped_non_negative() {
        let s = Sphere::stationary(Point3::ZERO, -5., white_lambertian());

        assert_eq!(s.radius, 0.);
    }

    #[test]
    fn grazing_ray_misses() {
        let s = Sphere::stationary(Point3::ZERO, 1., white_lambertian());
        let ray = Ray::new(Point3::new(0., 5., 0.), Vec3::new(1., 0., 0.));

        let mut rng = Rng::seeded(0);
        assert!(s.hit(&ray, interval::UNIVERSE, &mut rng).is_none());
    }

    #[test]
    fn hit_normal_opposes_ray_direction() {
        let s = Sphere::stationary(Point3::ZERO, 1., white_lambertian());
        let ray = Ray::new(Point3::new(0., 0., -5.), Vec3::new(0., 0., 1.));

        let mut rng = Rng::seeded(0);
        let rec = s.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rng).unwrap();

        assert!(ray.direction.dot(&rec.normal) <= 0.);
        assert!(rec.front_face);
    }

    #[test]
    fn moving_sphere_tracks_center_over_time() {
        let s = Sphere::moving(
            Point3::new(-1., 0., 0.),
            Point3::new(1., 0., 0.),
            0.5,
            white_lambertian(),
        );

        assert_eq!(s.center(0.), Point3::new(-1., 0., 0.));
        assert_eq!(s.center(1.), Point3::new(1., 0., 0.));
        assert_eq!(s.center(0.5), Point3::ZERO);
    }
}
