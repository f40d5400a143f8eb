use std::sync::Arc;

use crate::{hittable::Uv, interval::Interval, ray::Point3, texture::Texture, vec3::Color};

/// Width, height, and RGB bytes per pixel for whatever decoded a texture
/// file. Implemented by `tracer-imaging`'s decoder; a provider with
/// `height() == 0` stands in for a missing or unreadable file and makes the
/// texture return solid cyan.
pub trait ImageData: Sync + Send {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Row 0 is the top of the image; no V-flip is applied here, the
    /// texture does that.
    fn pixel_rgb8(&self, x: u32, y: u32) -> [u8; 3];
}

/// Image texture sampling an [`ImageData`] provider. V is flipped (image row
/// 0 is `v = 1`); out-of-range UV is clamped to `[0, 1]`.
#[derive(Clone)]
pub struct Image {
    data: Arc<dyn ImageData>,
}

const UNIT: Interval = Interval { min: 0., max: 1. };

impl Image {
    pub fn new(data: Arc<dyn ImageData>) -> Self {
        Self { data }
    }
}

impl Texture for Image {
    fn value(&self, uv: Uv, _p: Point3) -> Color {
        if self.data.height() == 0 {
            return Color::new(0., 1., 1.);
        }

        let u = UNIT.clamp(uv.u);
        let v = 1. - UNIT.clamp(uv.v);

        let i = ((u * self.data.width() as f64) as u32).min(self.data.width() - 1);
        let j = ((v * self.data.height() as f64) as u32).min(self.data.height() - 1);

        let [r, g, b] = self.data.pixel_rgb8(i, j);
        let scale = 1. / 255.;

        Color::new(r as f64 * scale, g as f64 * scale, b as f64 * scale)
    }
}
