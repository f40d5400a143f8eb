mod checker;
mod image;
mod noise;
mod solid;

use std::sync::Arc;

pub use checker::Checker;
pub use image::{Image, ImageData};
pub use noise::Noise;
pub use solid::Solid;

use crate::{hittable::Uv, ray::Point3, rng::Rng, vec3::Color};

/// `(u, v, p) -> Color`.
pub trait Texture: Sync + Send {
    fn value(&self, uv: Uv, p: Point3) -> Color;
}

/// Closed set of textures, dispatched by match (see `DESIGN.md`).
#[derive(Clone)]
pub enum TextureKind {
    Solid(Solid),
    Checker(Checker),
    Image(Image),
    Noise(Noise),
}

impl Texture for TextureKind {
    fn value(&self, uv: Uv, p: Point3) -> Color {
        match self {
            Self::Solid(t) => t.value(uv, p),
            Self::Checker(t) => t.value(uv, p),
            Self::Image(t) => t.value(uv, p),
            Self::Noise(t) => t.value(uv, p),
        }
    }
}

impl TextureKind {
    pub fn solid(color: Color) -> Arc<Self> {
        Arc::new(Self::Solid(Solid::new(color)))
    }

    pub fn checker(scale: f64, even: Color, odd: Color) -> Arc<Self> {
        Arc::new(Self::Checker(Checker::from_colors(scale, even, odd)))
    }

    pub fn checker_from_textures(scale: f64, even: Arc<TextureKind>, odd: Arc<TextureKind>) -> Arc<Self> {
        Arc::new(Self::Checker(Checker::new(scale, even, odd)))
    }

    pub fn image(data: Arc<dyn ImageData>) -> Arc<Self> {
        Arc::new(Self::Image(Image::new(data)))
    }

    pub fn noise(scale: f64, rng: &mut Rng) -> Arc<Self> {
        Arc::new(Self::Noise(Noise::new(scale, rng)))
    }
}
