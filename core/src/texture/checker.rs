use std::sync::Arc;

use crate::{
    hittable::Uv,
    ray::Point3,
    texture::{Texture, TextureKind},
    vec3::Color,
};

/// 3D checker: parity of `floor(p * inv_scale)` summed per axis picks the
/// even or odd sub-texture.
#[derive(Clone)]
pub struct Checker {
    inv_scale: f64,
    even: Arc<TextureKind>,
    odd: Arc<TextureKind>,
}

impl Checker {
    pub fn new(scale: f64, even: Arc<TextureKind>, odd: Arc<TextureKind>) -> Self {
        Self { inv_scale: 1. / scale, even, odd }
    }

    pub fn from_colors(scale: f64, even: Color, odd: Color) -> Self {
        Self::new(scale, TextureKind::solid(even), TextureKind::solid(odd))
    }
}

impl Texture for Checker {
    fn value(&self, uv: Uv, p: Point3) -> Color {
        let x = (self.inv_scale * p.x).floor() as i64;
        let y = (self.inv_scale * p.y).floor() as i64;
        let z = (self.inv_scale * p.z).floor() as i64;

        if (x + y + z) % 2 == 0 {
            self.even.value(uv, p)
        } else {
            self.odd.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_with_unit_cells() {
        let c = Checker::from_colors(1., Color::ONE, Color::ZERO);

        assert_eq!(c.value(Uv::default(), Point3::new(0.5, 0.5, 0.5)), Color::ONE);
        assert_eq!(c.value(Uv::default(), Point3::new(1.5, 0.5, 0.5)), Color::ZERO);
        assert_eq!(c.value(Uv::default(), Point3::new(1.5, 1.5, 0.5)), Color::ONE);
    }
}
