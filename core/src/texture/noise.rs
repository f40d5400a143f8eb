use crate::{hittable::Uv, perlin::Perlin, ray::Point3, rng::Rng, texture::Texture, vec3::Color};

/// Perlin-noise marble: `0.5 * (1 + sin(scale * p.z + 10 * turbulence(p)))`.
#[derive(Clone)]
pub struct Noise {
    noise: Perlin,
    scale: f64,
}

impl Noise {
    pub fn new(scale: f64, rng: &mut Rng) -> Self {
        Self { noise: Perlin::new(rng), scale }
    }
}

impl Texture for Noise {
    fn value(&self, _uv: Uv, p: Point3) -> Color {
        let marble = 1. + (self.scale * p.z + 10. * self.noise.turbulence(p, 7)).sin();

        Color::with_isotropic(0.5) * Color::with_isotropic(marble)
    }
}
