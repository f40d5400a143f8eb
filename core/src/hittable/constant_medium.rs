use std::sync::Arc;

use crate::{
    aabb::Aabb,
    hittable::{HitRecord, Hittable, Primitive, Uv},
    interval::{self, Interval},
    material::{Isotropic, MaterialKind},
    ray::Ray,
    rng::Rng,
    texture::TextureKind,
    vec3::{Color, Vec3},
};

/// Constant-density participating medium wrapping a convex boundary
/// primitive. Reports a probabilistic hit inside the boundary with an
/// isotropic phase function; never hits outside it.
pub struct ConstantMedium {
    boundary: Primitive,
    phase_function: Arc<MaterialKind>,
    neg_inv_density: f64,
}

impl ConstantMedium {
    pub fn with_texture(boundary: Primitive, density: f64, texture: Arc<TextureKind>) -> Self {
        Self {
            boundary,
            phase_function: Arc::new(MaterialKind::Isotropic(Isotropic::new(texture))),
            neg_inv_density: -1. / density,
        }
    }

    pub fn with_color(boundary: Primitive, density: f64, albedo: Color) -> Self {
        Self {
            boundary,
            phase_function: Arc::new(MaterialKind::Isotropic(Isotropic::from_color(albedo))),
            neg_inv_density: -1. / density,
        }
    }
}

impl Hittable for ConstantMedium {
    /// Finds where the ray enters and exits the boundary, then draws a
    /// free-flight distance from an exponential distribution scaled by the
    /// medium's density; a hit farther than that distance passes straight
    /// through untouched.
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord> {
        let mut enter = self.boundary.hit(ray, interval::UNIVERSE, rng)?;
        let mut exit =
            self.boundary.hit(ray, Interval::new(enter.t + 0.0001, f64::INFINITY), rng)?;

        enter.t = enter.t.max(ray_t.min);
        exit.t = exit.t.min(ray_t.max);

        if enter.t >= exit.t {
            return None;
        }
        enter.t = enter.t.max(0.);

        let ray_length = ray.direction.length();
        let distance_inside_boundary = (exit.t - enter.t) * ray_length;
        let hit_distance = self.neg_inv_density * rng.next_f64().ln();

        if hit_distance > distance_inside_boundary {
            return None;
        }

        let t = enter.t + hit_distance / ray_length;
        let p = ray.at(t);

        Some(HitRecord {
            p,
            normal: Vec3::with_x(1.),
            t,
            uv: Uv::default(),
            front_face: true,
            material: self.phase_function.clone(),
        })
    }

    fn bounding_box(&self) -> &Aabb {
        self.boundary.bounding_box()
    }
}
