use tracer_core::prelude::*;

use super::{image_texture, Setup};

/// A single sphere textured with an equirectangular world map, to exercise
/// the image texture and its V-flip/UV-clamp rules.
pub fn earth() -> Setup {
    let material = MaterialKind::lambertian_texture(image_texture("assets/earthmap.jpg"));
    let world = Primitive::Sphere(Sphere::stationary(Point3::ZERO, 2., material));

    let scene = Scene::new(world, Color::new(0.7, 0.8, 1.));

    let camera = Camera::builder()
        .aspect_ratio(16. / 9.)
        .vertical_fov(20.)
        .look_from(Point3::with_z(12.))
        .look_at(Point3::ZERO)
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
