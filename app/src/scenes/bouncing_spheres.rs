use tracer_core::prelude::*;

use super::Setup;

fn random_small_spheres(rng: &mut Rng) -> HittableList {
    let mut world = HittableList::new();

    for i in -11..11 {
        for j in -11..11 {
            let material_random = rng.next_f64();
            let center = Point3::new(
                j as f64 + 0.9 * rng.next_f64(),
                0.2,
                i as f64 + 0.9 * rng.next_f64(),
            );

            if (center - Point3::new(4., 0.2, 0.)).length() <= 0.9 {
                continue;
            }

            if material_random < 0.7 {
                let albedo = Vec3::random(rng) * Vec3::random(rng);
                let material = MaterialKind::lambertian(albedo);
                let center_end = center + Vec3::with_y(rng.range_f64(0., 0.5));
                world.push(Sphere::moving(center, center_end, 0.2, material));
            } else if material_random < 0.9 {
                let albedo = Vec3::random_range(rng, 0.5, 1.);
                let fuzz = rng.range_f64(0., 0.5);
                world.push(Sphere::stationary(center, 0.2, MaterialKind::metal(albedo, fuzz)));
            } else {
                world.push(Sphere::stationary(center, 0.2, MaterialKind::dielectric(1.5)));
            }
        }
    }

    world
}

/// The book's opening "everything" scene: a checkered ground plane, a field
/// of small random spheres, and three signature large ones (glass, diffuse,
/// metal).
pub fn bouncing_spheres(seed: u64) -> Setup {
    let mut rng = Rng::seeded(seed);
    let mut world = random_small_spheres(&mut rng);

    let checker = TextureKind::checker(0.32, Color::new(0.2, 0.3, 0.1), Color::with_isotropic(0.9));
    world.push(Sphere::stationary(Point3::with_y(-1000.), 1000., MaterialKind::lambertian_texture(checker)));

    world.push(Sphere::stationary(Point3::with_y(1.), 1., MaterialKind::dielectric(1.5)));
    world.push(Sphere::stationary(
        Point3::new(-4., 1., 0.),
        1.,
        MaterialKind::lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    world.push(Sphere::stationary(
        Point3::new(4., 1., 0.),
        1.,
        MaterialKind::metal(Color::new(0.7, 0.6, 0.5), 0.),
    ));

    let world = Primitive::Bvh(std::sync::Arc::new(BvhNode::new(world.into_objects())));
    let scene = Scene::new(world, Color::new(0.7, 0.8, 1.));

    let camera = Camera::builder()
        .aspect_ratio(16. / 9.)
        .vertical_fov(20.)
        .look_from(Point3::new(13., 2., 3.))
        .look_at(Point3::ZERO)
        .vup(Vec3::with_y(1.))
        .defocus_angle(0.6)
        .focus_distance(10.);

    Setup { scene, camera }
}
