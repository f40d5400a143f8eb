use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, Primitive},
    interval::Interval,
    ray::Ray,
    rng::Rng,
    vec3::Vec3,
};

/// Rigid translation of a wrapped primitive by a constant offset.
#[derive(Clone)]
pub struct Translate {
    object: Primitive,
    offset: Vec3,
    bounding_box: Aabb,
}

impl Translate {
    pub fn new(object: Primitive, offset: Vec3) -> Self {
        let bounding_box = *object.bounding_box() + offset;

        Self { object, offset, bounding_box }
    }
}

impl Hittable for Translate {
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord> {
        let offset_ray = Ray::new_with_time(ray.origin - self.offset, ray.direction, ray.time);

        let mut hit_record = self.object.hit(&offset_ray, ray_t, rng)?;
        hit_record.p += self.offset;

        Some(hit_record)
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        hittable::Sphere,
        material::{Lambertian, MaterialKind},
        ray::Point3,
    };

    fn white() -> Arc<MaterialKind> {
        Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)))
    }

    #[test]
    fn hit_point_is_shifted_by_the_offset() {
        let sphere = Primitive::Sphere(Sphere::stationary(Point3::ZERO, 1., white()));
        let translate = Translate::new(sphere, Vec3::new(5., 0., 0.));
        let ray = Ray::new(Point3::new(5., 0., -5.), Vec3::with_z(1.));
        let mut rng = Rng::seeded(0);

        let rec = translate.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rng).unwrap();
        assert!((rec.p.x - 5.).abs() < 1e-9);
    }

    #[test]
    fn bounding_box_follows_the_offset() {
        let sphere = Primitive::Sphere(Sphere::stationary(Point3::ZERO, 1., white()));
        let translate = Translate::new(sphere, Vec3::new(5., 0., 0.));

        assert!(translate.bounding_box().x.contains(4.));
        assert!(translate.bounding_box().x.contains(6.));
    }
}
