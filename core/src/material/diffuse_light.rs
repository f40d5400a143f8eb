use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Uv},
    material::Material,
    ray::{Point3, Ray},
    rng::Rng,
    texture::{Texture, TextureKind},
    vec3::Color,
};

/// Never scatters; emits the texture's value, but only on the front face —
/// the back of a light panel is dark, matching a one-sided emitter.
#[derive(Clone)]
pub struct DiffuseLight {
    texture: Arc<TextureKind>,
}

impl DiffuseLight {
    pub fn new(texture: Arc<TextureKind>) -> Self {
        Self { texture }
    }

    pub fn from_color(emit: Color) -> Self {
        Self::new(TextureKind::solid(emit))
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray_in: &Ray, _hit: &HitRecord, _rng: &mut Rng) -> Option<(Color, Ray)> {
        None
    }

    fn emitted(&self, uv: Uv, p: Point3, front_face: bool) -> Color {
        if front_face { self.texture.value(uv, p) } else { Color::ZERO }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_face_emits_black() {
        let light = DiffuseLight::from_color(Color::with_isotropic(4.));

        assert_eq!(light.emitted(Uv::default(), Point3::ZERO, false), Color::ZERO);
        assert_eq!(light.emitted(Uv::default(), Point3::ZERO, true), Color::with_isotropic(4.));
    }
}
