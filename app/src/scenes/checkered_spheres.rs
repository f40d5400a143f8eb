use tracer_core::prelude::*;

use super::Setup;

/// Two large spheres sharing a 3D checker texture, one above the other.
pub fn checkered_spheres() -> Setup {
    let checker = TextureKind::checker(0.32, Color::new(0.2, 0.3, 0.1), Color::with_isotropic(0.9));
    let material = MaterialKind::lambertian_texture(checker);

    let mut world = HittableList::new();
    world.push(Sphere::stationary(Point3::with_y(-10.), 10., material.clone()));
    world.push(Sphere::stationary(Point3::with_y(10.), 10., material));

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
