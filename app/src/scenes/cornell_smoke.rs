use std::sync::Arc;

use tracer_core::prelude::*;

use super::Setup;

/// The Cornell box with its two boxes replaced by participating media — a
/// dark fog and a light one — to exercise the constant-density medium.
pub fn cornell_smoke() -> Setup {
    let red = MaterialKind::lambertian(Color::new(0.65, 0.05, 0.05));
    let white = MaterialKind::lambertian(Color::with_isotropic(0.73));
    let green = MaterialKind::lambertian(Color::new(0.12, 0.45, 0.15));
    let light = MaterialKind::diffuse_light(Color::with_isotropic(7.));

    let mut world = HittableList::new();
    world.push(Quad::new(Point3::with_x(555.), Vec3::with_y(555.), Vec3::with_z(555.), green));
    world.push(Quad::new(Point3::ZERO, Vec3::with_y(555.), Vec3::with_z(555.), red));
    world.push(Quad::new(
        Point3::new(113., 554., 127.),
        Vec3::with_x(330.),
        Vec3::with_z(305.),
        light,
    ));
    world.push(Quad::new(Point3::ZERO, Vec3::with_x(555.), Vec3::with_z(555.), white.clone()));
    world.push(Quad::new(
        Point3::new(555., 555., 555.),
        Vec3::with_x(-555.),
        Vec3::with_z(-555.),
        white.clone(),
    ));
    world.push(Quad::new(Point3::with_z(555.), Vec3::with_x(555.), Vec3::with_y(555.), white.clone()));

    let tall_box = Primitive::List(Quad::new_box(Point3::ZERO, Point3::new(165., 330., 165.), white.clone()))
        .rotate_y(15.)
        .translate(Vec3::new(265., 0., 295.));
    let short_box = Primitive::List(Quad::new_box(Point3::ZERO, Point3::new(165., 165., 165.), white))
        .rotate_y(-18.)
        .translate(Vec3::new(130., 0., 65.));

    world.push(Primitive::ConstantMedium(Arc::new(ConstantMedium::with_color(tall_box, 0.01, Color::ZERO))));
    world.push(Primitive::ConstantMedium(Arc::new(ConstantMedium::with_color(short_box, 0.01, Color::ONE))));

    let scene = Scene::new(Primitive::List(world), Color::ZERO);

    let camera = Camera::builder()
        .aspect_ratio(1.)
        .vertical_fov(40.)
        .look_from(Point3::new(278., 278., -800.))
        .look_at(Point3::new(278., 278., 0.))
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
