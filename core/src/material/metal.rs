use crate::{
    hittable::HitRecord,
    material::Material,
    ray::Ray,
    rng::Rng,
    vec3::{self, Color, Vec3},
};

/// Reflects about the normal, then perturbs by `fuzz * random_in_unit_sphere()`.
/// Scatter fails if the perturbed direction points back into the surface.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self { albedo, fuzz: fuzz.clamp(0., 1.) }
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)> {
        let reflected = vec3::reflect(&ray_in.direction, &hit.normal).to_unit()
            + self.fuzz * Vec3::random_unit_vector(rng);
        let scattered = Ray::new_with_time(hit.p, reflected, ray_in.time);

        if scattered.direction.dot(&hit.normal) > 0. {
            Some((self.albedo, scattered))
        } else {
            None
        }
    }
}
