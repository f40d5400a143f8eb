use std::sync::Arc;

use crate::{
    hittable::HitRecord,
    material::Material,
    ray::Ray,
    rng::Rng,
    texture::{Texture, TextureKind},
    vec3::{Color, Vec3},
};

/// Phase function for homogeneous participating media: scatters uniformly
/// over the unit sphere.
#[derive(Clone)]
pub struct Isotropic {
    texture: Arc<TextureKind>,
}

impl Isotropic {
    pub fn new(texture: Arc<TextureKind>) -> Self {
        Self { texture }
    }

    pub fn from_color(albedo: Color) -> Self {
        Self::new(TextureKind::solid(albedo))
    }
}

impl Material for Isotropic {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)> {
        let scattered = Ray::new_with_time(hit.p, Vec3::random_unit_vector(rng), ray_in.time);
        let attenuation = self.texture.value(hit.uv, hit.p);

        Some((attenuation, scattered))
    }
}
