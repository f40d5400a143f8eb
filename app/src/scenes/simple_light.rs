use tracer_core::prelude::*;

use super::Setup;

/// A marble ground and sphere lit by a quad panel and a small glowing sphere,
/// against a black background so only emitted and bounced light shows.
pub fn simple_light(seed: u64) -> Setup {
    let mut rng = Rng::seeded(seed);
    let noise = TextureKind::noise(4., &mut rng);
    let marble = MaterialKind::lambertian_texture(noise);
    let light = MaterialKind::diffuse_light(Color::with_isotropic(4.));

    let mut world = HittableList::new();
    world.push(Sphere::stationary(Point3::with_y(-1000.), 1000., marble.clone()));
    world.push(Sphere::stationary(Point3::with_y(2.), 2., marble));
    world.push(Quad::new(Point3::new(3., 1., -2.), Vec3::with_x(2.), Vec3::with_y(2.), light.clone()));
    world.push(Sphere::stationary(Point3::new(0., 7., 0.), 2., light));

    let scene = Scene::new(Primitive::List(world), Color::ZERO);

    let camera = Camera::builder()
        .aspect_ratio(16. / 9.)
        .vertical_fov(20.)
        .look_from(Point3::new(26., 3., 6.))
        .look_at(Point3::with_y(2.))
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
