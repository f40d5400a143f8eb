use std::sync::Arc;

use tracer_core::prelude::*;

use super::{image_texture, Setup};

const BOXES_PER_SIDE: usize = 20;

fn ground_boxes(rng: &mut Rng) -> HittableList {
    let ground = MaterialKind::lambertian(Color::new(0.48, 0.83, 0.53));
    let mut boxes = HittableList::with_capacity(BOXES_PER_SIDE * BOXES_PER_SIDE);

    for i in 0..BOXES_PER_SIDE {
        for j in 0..BOXES_PER_SIDE {
            let w = 100.;
            let x0 = -1000. + i as f64 * w;
            let z0 = -1000. + j as f64 * w;
            let y1 = rng.range_f64(1., 101.);

            boxes.push(Quad::new_box(
                Point3::new(x0, 0., z0),
                Point3::new(x0 + w, y1, z0 + w),
                ground.clone(),
            ));
        }
    }

    boxes
}

fn sphere_cluster(rng: &mut Rng) -> HittableList {
    let white = MaterialKind::lambertian(Color::with_isotropic(0.73));
    let mut spheres = HittableList::with_capacity(1000);

    for _ in 0..1000 {
        let center = Vec3::random_range(rng, 0., 165.);
        spheres.push(Sphere::stationary(center, 10., white.clone()));
    }

    spheres
}

/// The book's closing scene: a floor of random-height boxes, an overhead
/// light, a motion-blurred sphere, dielectric and metal spheres, a fog
/// sphere, a global haze, an earth-textured sphere, a marble sphere, and a
/// translated/rotated cluster of small spheres.
pub fn final_scene(seed: u64) -> Setup {
    let mut rng = Rng::seeded(seed);

    let mut world = HittableList::new();
    world.push(Primitive::Bvh(Arc::new(BvhNode::new(ground_boxes(&mut rng).into_objects()))));

    let light = MaterialKind::diffuse_light(Color::with_isotropic(7.));
    world.push(Quad::new(Point3::new(123., 554., 147.), Vec3::with_x(300.), Vec3::with_z(265.), light));

    let center1 = Point3::new(400., 400., 200.);
    let center2 = center1 + Vec3::with_x(30.);
    world.push(Sphere::moving(center1, center2, 50., MaterialKind::lambertian(Color::new(0.7, 0.3, 0.1))));

    world.push(Sphere::stationary(Point3::new(260., 150., 45.), 50., MaterialKind::dielectric(1.5)));
    world.push(Sphere::stationary(
        Point3::new(0., 150., 145.),
        50.,
        MaterialKind::metal(Color::new(0.8, 0.8, 0.9), 1.),
    ));

    let boundary = Primitive::Sphere(Sphere::stationary(Point3::new(360., 150., 145.), 70., MaterialKind::dielectric(1.5)));
    world.push(boundary.clone());
    world.push(Primitive::ConstantMedium(Arc::new(ConstantMedium::with_color(
        boundary,
        0.2,
        Color::new(0.2, 0.4, 0.9),
    ))));

    let atmosphere = Primitive::Sphere(Sphere::stationary(Point3::ZERO, 5000., MaterialKind::dielectric(1.5)));
    world.push(Primitive::ConstantMedium(Arc::new(ConstantMedium::with_color(atmosphere, 0.0001, Color::ONE))));

    world.push(Sphere::stationary(
        Point3::new(400., 200., 400.),
        100.,
        MaterialKind::lambertian_texture(image_texture("assets/earthmap.jpg")),
    ));
    world.push(Sphere::stationary(
        Point3::new(220., 280., 300.),
        80.,
        MaterialKind::lambertian_texture(TextureKind::noise(0.2, &mut rng)),
    ));

    let cluster = Primitive::List(sphere_cluster(&mut rng)).rotate_y(15.).translate(Vec3::new(-100., 270., 395.));
    world.push(cluster);

    let scene = Scene::new(Primitive::List(world), Color::ZERO);

    let camera = Camera::builder()
        .aspect_ratio(1.)
        .vertical_fov(40.)
        .look_from(Point3::new(478., 278., -600.))
        .look_at(Point3::new(278., 278., 0.))
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.)
        .focus_distance(10.);

    Setup { scene, camera }
}
