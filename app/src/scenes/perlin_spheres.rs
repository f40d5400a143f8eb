use tracer_core::prelude::*;

use super::Setup;

/// Two spheres textured with Perlin marble noise, at two scales.
pub fn perlin_spheres(seed: u64) -> Setup {
    let mut rng = Rng::seeded(seed);
    let noise = TextureKind::noise(4., &mut rng);
    let material = MaterialKind::lambertian_texture(noise);

    let mut world = HittableList::new();
    world.push(Sphere::stationary(Point3::with_y(-1000.), 1000., material.clone()));
    world.push(Sphere::stationary(Point3::with_y(2.), 2., material));

    let scene = Scene::new(Primitive::List(world), Color::new(0.7, 0.8, 1.));

    let camera = Camera::builder()
        .aspect_ratio(16. / 9.)
        .vertical_fov(20.)
        .look_from(Point3::new(13., 2., 3.))
        .look_at(Point3::ZERO)
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
