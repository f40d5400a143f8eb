use std::ops::{Deref, DerefMut};

use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, Primitive},
    interval::Interval,
    ray::Ray,
    rng::Rng,
};

/// Owning, ordered sequence of hittables with a maintained union bounding box.
#[derive(Clone, Default)]
pub struct HittableList {
    objects: Vec<Primitive>,
    bounding_box: Aabb,
}

impl HittableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { objects: Vec::with_capacity(capacity), bounding_box: Aabb::default() }
    }

    pub fn push(&mut self, object: impl Into<Primitive>) {
        let object = object.into();
        self.bounding_box = Aabb::from_boxes(&self.bounding_box, object.bounding_box());
        self.objects.push(object);
    }

    pub fn into_objects(self) -> Vec<Primitive> {
        self.objects
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord> {
        let mut closest = ray_t.max;
        let mut hit_record = None;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray, Interval::new(ray_t.min, closest), rng) {
                closest = hit.t;
                hit_record = Some(hit);
            }
        }

        hit_record
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }
}

impl Deref for HittableList {
    type Target = Vec<Primitive>;

    fn deref(&self) -> &Self::Target {
        &self.objects
    }
}

impl DerefMut for HittableList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.objects
    }
}

impl From<HittableList> for Primitive {
    fn from(list: HittableList) -> Self {
        Primitive::List(list)
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
        vec3::Vec3,
    };

    #[test]
    fn push_grows_bounding_box_and_len() {
        let mut list = HittableList::new();
        assert!(list.is_empty());

        let mat = Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)));
        list.push(Sphere::stationary(Point3::ZERO, 1., mat));

        assert_eq!(list.len(), 1);
        assert!(list.bounding_box().x.size() >= 2.);
    }

    #[test]
    fn hit_returns_closest_intersection() {
        let mat = Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)));
        let mut list = HittableList::new();
        list.push(Sphere::stationary(Point3::new(0., 0., -5.), 1., mat.clone()));
        list.push(Sphere::stationary(Point3::new(0., 0., -2.), 1., mat));

        let ray = Ray::new(Point3::ZERO, Vec3::with_z(-1.));
        let mut rng = Rng::seeded(0);
        let rec = list.hit(&ray, crate::interval::UNIVERSE, &mut rng).unwrap();

        assert!((rec.t - 1.).abs() < 1e-9);
    }
}
