use tracer_core::prelude::*;

fn some_hit(normal: Vec3) -> HitRecord {
    HitRecord {
        p: Point3::ZERO,
        normal,
        t: 1.,
        uv: Uv::default(),
        front_face: true,
        material: MaterialKind::lambertian(Color::ONE),
    }
}

#[test]
fn lambertian_attenuation_never_exceeds_albedo() {
    let albedo = Color::new(0.6, 0.3, 0.9);
    let material = Lambertian::from_color(albedo);
    let hit = some_hit(Vec3::with_y(1.));
    let ray_in = Ray::new(Point3::new(0., -1., 0.), Vec3::with_y(1.));

    let mut sum = Color::ZERO;
    let trials = 1000;
    let mut rng = Rng::seeded(11);

    for _ in 0..trials {
        let (attenuation, _) = material.scatter(&ray_in, &hit, &mut rng).unwrap();
        sum += attenuation;
    }
    let average = sum * (1. / trials as f64);

    assert!(average.x <= albedo.x + 1e-9);
    assert!(average.y <= albedo.y + 1e-9);
    assert!(average.z <= albedo.z + 1e-9);
}

#[test]
fn metal_attenuation_never_exceeds_albedo() {
    let albedo = Color::new(0.8, 0.7, 0.5);
    let material = Metal::new(albedo, 0.3);
    let hit = some_hit(Vec3::with_y(1.));
    let ray_in = Ray::new(Point3::new(0., -1., 0.), Vec3::new(0.1, 1., 0.).to_unit());

    let mut sum = Color::ZERO;
    let mut hits = 0;
    let trials = 1000;
    let mut rng = Rng::seeded(23);

    for _ in 0..trials {
        if let Some((attenuation, _)) = material.scatter(&ray_in, &hit, &mut rng) {
            sum += attenuation;
            hits += 1;
        }
    }
    let average = sum * (1. / hits as f64);

    assert!(average.x <= albedo.x + 1e-9);
    assert!(average.y <= albedo.y + 1e-9);
    assert!(average.z <= albedo.z + 1e-9);
}
