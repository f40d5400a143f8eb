use std::sync::{Arc, Mutex};

use tracing::info;

use crate::{
    hittable::Hittable,
    interval::Interval,
    material::Material,
    ray::{Point3, Ray},
    rng::Rng,
    scene::Scene,
    vec3::{Color, Vec3},
};

/// Render configuration before the viewport basis is computed. Chained
/// setters mirror the call-site shape of a scene builder picking a camera
/// (`Camera::builder().aspect_ratio(16. / 9.)...build()`).
pub struct CameraBuilder {
    aspect_ratio: f64,
    image_width: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    vfov: f64,
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,
    defocus_angle: f64,
    focus_distance: f64,
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.,
            look_from: Point3::ZERO,
            look_at: Point3::with_z(-1.),
            vup: Vec3::with_y(1.),
            defocus_angle: 0.,
            focus_distance: 10.,
        }
    }
}

impl CameraBuilder {
    pub fn aspect_ratio(mut self, value: f64) -> Self {
        self.aspect_ratio = value;
        self
    }

    pub fn image_width(mut self, value: u32) -> Self {
        self.image_width = value;
        self
    }

    pub fn samples_per_pixel(mut self, value: u32) -> Self {
        self.samples_per_pixel = value;
        self
    }

    pub fn max_depth(mut self, value: u32) -> Self {
        self.max_depth = value;
        self
    }

    pub fn vertical_fov(mut self, degrees: f64) -> Self {
        self.vfov = degrees;
        self
    }

    pub fn look_from(mut self, point: Point3) -> Self {
        self.look_from = point;
        self
    }

    pub fn look_at(mut self, point: Point3) -> Self {
        self.look_at = point;
        self
    }

    pub fn vup(mut self, up: Vec3) -> Self {
        self.vup = up;
        self
    }

    pub fn defocus_angle(mut self, degrees: f64) -> Self {
        self.defocus_angle = degrees;
        self
    }

    pub fn focus_distance(mut self, value: f64) -> Self {
        self.focus_distance = value;
        self
    }

    pub fn build(self) -> Camera {
        let image_width = self.image_width.max(1);
        let image_height = ((image_width as f64 / self.aspect_ratio) as u32).max(1);
        let samples_per_pixel = self.samples_per_pixel.max(1);
        let max_depth = self.max_depth.max(1);

        let center = self.look_from;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.).tan();
        let viewport_height = 2. * h * self.focus_distance;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        let w = (self.look_from - self.look_at).to_unit();
        let u = self.vup.cross(&w).to_unit();
        let v = w.cross(&u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left = center - (self.focus_distance * w) - viewport_u / 2. - viewport_v / 2.;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = self.focus_distance * (self.defocus_angle / 2.).to_radians().tan();
        let defocus_disk_u = u * defocus_radius;
        let defocus_disk_v = v * defocus_radius;

        Camera {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_angle: self.defocus_angle,
            defocus_disk_u,
            defocus_disk_v,
        }
    }
}

/// Per-render knobs that aren't part of the viewport geometry: the RNG seed
/// and how many worker threads to split scanlines across.
pub struct RenderSettings {
    pub seed: u64,
    pub thread_count: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { seed: 0, thread_count: None }
    }
}

/// A 2D array of linear (pre-tonemap) colors, row-major, top-to-bottom.
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![Color::ZERO; (width * height) as usize] }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width as usize)
    }
}

/// Thin-lens camera with an initialized viewport basis, ready to render.
pub struct Camera {
    image_width: u32,
    image_height: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_angle: f64,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Renders `scene` by splitting scanlines into contiguous row stripes,
    /// one per worker thread, each with its own deterministically seeded
    /// RNG so the result is reproducible for a fixed seed and thread count.
    pub fn render(&self, scene: &Arc<Scene>, settings: &RenderSettings) -> FrameBuffer {
        let thread_count = settings
            .thread_count
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let mut buffer = FrameBuffer::new(self.image_width, self.image_height);
        let rows_per_stripe = self.image_height.div_ceil(thread_count as u32).max(1);
        let remaining = Mutex::new(self.image_height);

        std::thread::scope(|scope| {
            for (stripe_index, chunk) in
                buffer.pixels.chunks_mut((rows_per_stripe * self.image_width) as usize).enumerate()
            {
                let scene = Arc::clone(scene);
                let remaining = &remaining;
                let start_row = stripe_index as u32 * rows_per_stripe;
                let seed = settings.seed ^ (stripe_index as u64).wrapping_mul(0x9E3779B97F4A7C15);

                scope.spawn(move || {
                    let mut rng = Rng::seeded(seed);

                    for (row_offset, row) in chunk.chunks_mut(self.image_width as usize).enumerate() {
                        let j = start_row + row_offset as u32;

                        for (i, pixel) in row.iter_mut().enumerate() {
                            *pixel = self.sample_pixel(i as u32, j, &scene, &mut rng);
                        }

                        let left = {
                            let mut left = remaining.lock().unwrap();
                            *left -= 1;
                            *left
                        };
                        eprint!("\r\x1B[KScanlines remaining: {left}");
                    }
                });
            }
        });

        eprint!("\r\x1B[K");
        info!(width = self.image_width, height = self.image_height, "render complete");

        buffer
    }

    fn sample_pixel(&self, i: u32, j: u32, scene: &Scene, rng: &mut Rng) -> Color {
        let mut sum = Color::ZERO;
        for _ in 0..self.samples_per_pixel {
            let ray = self.sample_ray(i, j, rng);
            sum += Self::ray_color(&ray, scene, self.max_depth, rng);
        }

        sum * (1. / self.samples_per_pixel as f64)
    }

    fn sample_ray(&self, i: u32, j: u32, rng: &mut Rng) -> Ray {
        let offset = Vec3::new(rng.next_f64() - 0.5, rng.next_f64() - 0.5, 0.);
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + offset.x) * self.pixel_delta_u)
            + ((j as f64 + offset.y) * self.pixel_delta_v);

        let origin = if self.defocus_angle <= 0. {
            self.center
        } else {
            let p = Vec3::random_in_unit_disk(rng);
            self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
        };

        Ray::new_with_time(origin, pixel_sample - origin, rng.next_f64())
    }

    fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut Rng) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }

        let Some(hit) = scene.world.hit(ray, Interval::new(0.001, f64::INFINITY), rng) else {
            return scene.background;
        };

        let emitted = hit.material.emitted(hit.uv, hit.p, hit.front_face);

        match hit.material.scatter(ray, &hit, rng) {
            Some((attenuation, scattered)) => {
                emitted + attenuation * Self::ray_color(&scattered, scene, depth - 1, rng)
            }
            None => emitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hittable::{Primitive, Sphere}, material::MaterialKind};

    fn white_world() -> Arc<Scene> {
        let material = MaterialKind::lambertian(Color::with_isotropic(0.5));
        let world = Primitive::Sphere(Sphere::stationary(Point3::with_z(-1.), 0.5, material));

        Arc::new(Scene::new(world, Color::new(0.5, 0.7, 1.)))
    }

    #[test]
    fn image_height_is_at_least_one() {
        let camera = Camera::builder().aspect_ratio(1000.).image_width(10).build();

        assert_eq!(camera.image_height(), 1);
    }

    #[test]
    fn render_fills_every_pixel() {
        let camera = Camera::builder()
            .aspect_ratio(1.)
            .image_width(8)
            .samples_per_pixel(4)
            .max_depth(4)
            .build();
        let scene = white_world();
        let settings = RenderSettings { seed: 1, thread_count: Some(2) };

        let buffer = camera.render(&scene, &settings);

        assert_eq!(buffer.width, 8);
        assert_eq!(buffer.height, 8);
        let centre = buffer.pixel(4, 4);
        assert!(centre.x >= 0. && centre.y >= 0. && centre.z >= 0.);
    }

    #[test]
    fn same_seed_and_thread_count_reproduce_exactly() {
        let camera = Camera::builder()
            .aspect_ratio(1.)
            .image_width(6)
            .samples_per_pixel(3)
            .max_depth(3)
            .build();
        let scene = white_world();
        let settings = RenderSettings { seed: 42, thread_count: Some(3) };

        let a = camera.render(&scene, &settings);
        let b = camera.render(&scene, &settings);

        for (pa, pb) in a.pixels.iter().zip(b.pixels.iter()) {
            assert_eq!(pa, pb);
        }
    }
}
