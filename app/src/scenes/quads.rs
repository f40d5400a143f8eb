use tracer_core::prelude::*;

use super::Setup;

/// Five axis-aligned colored quads forming walls around the camera, used to
/// sanity-check quad intersection and UV mapping.
pub fn quads() -> Setup {
    let left_red = MaterialKind::lambertian(Color::new(1., 0.2, 0.2));
    let back_green = MaterialKind::lambertian(Color::new(0.2, 1., 0.2));
    let right_blue = MaterialKind::lambertian(Color::new(0.2, 0.2, 1.));
    let upper_orange = MaterialKind::lambertian(Color::new(1., 0.5, 0.));
    let lower_teal = MaterialKind::lambertian(Color::new(0.2, 0.8, 0.8));

    let mut world = HittableList::new();
    world.push(Quad::new(Point3::new(-3., -2., 5.), Vec3::new(0., 0., -4.), Vec3::with_y(4.), left_red));
    world.push(Quad::new(Point3::new(-2., -2., 0.), Vec3::with_x(4.), Vec3::with_y(4.), back_green));
    world.push(Quad::new(Point3::new(3., -2., 1.), Vec3::with_z(4.), Vec3::with_y(4.), right_blue));
    world.push(Quad::new(Point3::new(-2., 3., 1.), Vec3::with_x(4.), Vec3::with_z(4.), upper_orange));
    world.push(Quad::new(Point3::new(-2., -3., 5.), Vec3::with_x(4.), Vec3::new(0., 0., -4.), lower_teal));

    let scene = Scene::new(Primitive::List(world), Color::new(0.7, 0.8, 1.));

    let camera = Camera::builder()
        .aspect_ratio(1.)
        .vertical_fov(80.)
        .look_from(Point3::with_z(9.))
        .look_at(Point3::ZERO)
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
