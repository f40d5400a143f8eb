use crate::{
    hittable::HitRecord,
    material::Material,
    ray::Ray,
    rng::Rng,
    vec3::{self, Color},
};

/// Transparent dielectric with index of refraction `ior`, tinted by `tint`
/// (applied multiplicatively on every scatter event). Always scatters,
/// choosing reflection or refraction by Schlick's approximation.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    refraction_index: f64,
    tint: Color,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Self {
        Self::tinted(refraction_index, Color::ONE)
    }

    pub fn tinted(refraction_index: f64, tint: Color) -> Self {
        Self { refraction_index, tint }
    }

    /// Schlick's approximation to Fresnel reflectance.
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = (1. - refraction_index) / (1. + refraction_index);
        let r0 = r0 * r0;

        r0 + (1. - r0) * (1. - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)> {
        let ratio = if hit.front_face { 1. / self.refraction_index } else { self.refraction_index };

        let unit_direction = ray_in.direction.to_unit();
        let cos_theta = (-unit_direction).dot(&hit.normal).min(1.);
        let sin_theta = (1. - cos_theta * cos_theta).sqrt();

        let cannot_refract = ratio * sin_theta > 1.;
        let direction = if cannot_refract || Self::reflectance(cos_theta, ratio) > rng.next_f64() {
            vec3::reflect(&unit_direction, &hit.normal)
        } else {
            vec3::refract(&unit_direction, &hit.normal, ratio)
        };

        let scattered = Ray::new_with_time(hit.p, direction, ray_in.time);

        Some((self.tint, scattered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hittable::Uv, ray::Point3, vec3::Vec3};
    use std::sync::Arc;

    #[test]
    fn total_internal_reflection_is_deterministic() {
        let glass = Dielectric::new(1.5);
        let normal = Vec3::with_y(1.);
        // cos(theta) = 0.1 from inside: steep grazing angle through a denser medium.
        let cos_theta = 0.1_f64;
        let sin_theta = (1. - cos_theta * cos_theta).sqrt();
        let direction = Vec3::new(sin_theta, -cos_theta, 0.);
        let hit = HitRecord {
            p: Point3::ZERO,
            normal,
            t: 1.,
            uv: Uv::default(),
            front_face: false,
            material: Arc::new(crate::material::MaterialKind::Dielectric(glass)),
        };
        let ray_in = Ray::new(Point3::ZERO, direction);

        for seed in 0..1024 {
            let mut rng = Rng::seeded(seed);
            let (_, scattered) = glass.scatter(&ray_in, &hit, &mut rng).unwrap();
            let reflected = vec3::reflect(&direction.to_unit(), &normal);
            assert!((scattered.direction - reflected).length() < 1e-9);
        }
    }
}
