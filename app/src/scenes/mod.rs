mod bouncing_spheres;
mod checkered_spheres;
mod cornell_box;
mod cornell_smoke;
mod earth;
mod final_scene;
mod perlin_spheres;
mod quads;
mod simple_light;

use std::sync::Arc;

use tracer_core::prelude::*;
use tracing::warn;

pub use bouncing_spheres::bouncing_spheres;
pub use checkered_spheres::checkered_spheres;
pub use cornell_box::cornell_box;
pub use cornell_smoke::cornell_smoke;
pub use earth::earth;
pub use final_scene::final_scene;
pub use perlin_spheres::perlin_spheres;
pub use quads::quads;
pub use simple_light::simple_light;

/// A scene builder's output: the world it assembled plus the camera it
/// thinks looks best at it. The CLI overrides image size, sample count, and
/// depth on top of this before calling `build()`.
pub struct Setup {
    pub scene: Scene,
    pub camera: CameraBuilder,
}

/// Loads a texture image, falling back to the core's built-in cyan marker
/// (via an empty [`tracer_imaging::DecodedImage`]) and a logged warning if
/// the file is missing or unreadable, matching the documented fallback for
/// invalid texture files.
fn image_texture(path: &str) -> Arc<TextureKind> {
    let image = tracer_imaging::DecodedImage::load(path).unwrap_or_else(|err| {
        warn!(path, %err, "failed to decode texture image, substituting cyan");
        tracer_imaging::DecodedImage::empty()
    });

    TextureKind::image(Arc::new(image))
}
