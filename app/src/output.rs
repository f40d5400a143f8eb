use std::io::{self, Write};

use tracer_core::prelude::*;

/// Somewhere a rendered [`FrameBuffer`] can be written once tone-mapped to
/// 8-bit RGB.
pub trait OutputSink {
    fn write_frame(&self, buffer: &FrameBuffer, writer: &mut dyn Write) -> io::Result<()>;
}

/// Writes the ASCII `P3` variant of PPM: a `P3\n<width> <height>\n255\n`
/// header followed by one `r g b` line per pixel, row-major, top to bottom.
pub struct PpmSink;

impl OutputSink for PpmSink {
    fn write_frame(&self, buffer: &FrameBuffer, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "P3\n{} {}\n255", buffer.width, buffer.height)?;

        for row in buffer.rows() {
            for &pixel in row {
                let [r, g, b] = tonemap::to_rgb8(pixel);
                writeln!(writer, "{r} {g} {b}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_the_ppm_p3_contract() {
        let camera = Camera::builder().aspect_ratio(1.).image_width(2).samples_per_pixel(1).max_depth(1).build();
        let world = Primitive::List(HittableList::new());
        let scene = std::sync::Arc::new(Scene::new(world, Color::ZERO));
        let buffer = camera.render(&scene, &RenderSettings { seed: 0, thread_count: Some(1) });

        let mut out = Vec::new();
        PpmSink.write_frame(&buffer, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.count(), 4);
    }
}
