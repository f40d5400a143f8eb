use crate::{hittable::Uv, ray::Point3, texture::Texture, vec3::Color};

/// Constant color texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    albedo: Color,
}

impl Solid {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for Solid {
    fn value(&self, _uv: Uv, _p: Point3) -> Color {
        self.albedo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_ignores_uv_and_point() {
        let t = Solid::new(Color::new(0.1, 0.2, 0.3));

        assert_eq!(t.value(Uv::new(0., 0.), Point3::ZERO), Color::new(0.1, 0.2, 0.3));
        assert_eq!(t.value(Uv::new(1., 1.), Point3::new(5., 5., 5.)), Color::new(0.1, 0.2, 0.3));
    }
}
