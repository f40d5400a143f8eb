use std::sync::Arc;

use crate::{
    hittable::HitRecord,
    material::Material,
    ray::Ray,
    rng::Rng,
    texture::{Texture, TextureKind},
    vec3::{Color, Vec3},
};

/// Scatters toward `normal + random_unit_vector()`; attenuation is the
/// texture's value at the hit point.
#[derive(Clone)]
pub struct Lambertian {
    texture: Arc<TextureKind>,
}

impl Lambertian {
    pub fn new(texture: Arc<TextureKind>) -> Self {
        Self { texture }
    }

    pub fn from_color(albedo: Color) -> Self {
        Self::new(TextureKind::solid(albedo))
    }
}

impl Material for Lambertian {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)> {
        let mut scatter_direction = hit.normal + Vec3::random_unit_vector(rng);

        if scatter_direction.near_zero() {
            scatter_direction = hit.normal;
        }

        let attenuation = self.texture.value(hit.uv, hit.p);
        let scattered = Ray::new_with_time(hit.p, scatter_direction, ray_in.time);

        Some((attenuation, scattered))
    }
}
