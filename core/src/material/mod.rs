mod dielectric;
mod diffuse_light;
mod isotropic;
mod lambertian;
mod metal;

use std::sync::Arc;

pub use dielectric::Dielectric;
pub use diffuse_light::DiffuseLight;
pub use isotropic::Isotropic;
pub use lambertian::Lambertian;
pub use metal::Metal;

use crate::{hittable::HitRecord, hittable::Uv, ray::Point3, ray::Ray, rng::Rng, vec3::Color};

/// A material turns an incoming ray at a hit point into either an outgoing
/// scattered ray (with an attenuation) or emitted light. Default emission is
/// black.
pub trait Material: Sync + Send {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)>;

    fn emitted(&self, _uv: Uv, _p: Point3, _front_face: bool) -> Color {
        Color::ZERO
    }
}

/// Closed set of BSDFs, dispatched by match (see `DESIGN.md`).
#[derive(Clone)]
pub enum MaterialKind {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
    Isotropic(Isotropic),
}

impl Material for MaterialKind {
    fn scatter(&self, ray_in: &Ray, hit: &HitRecord, rng: &mut Rng) -> Option<(Color, Ray)> {
        match self {
            Self::Lambertian(m) => m.scatter(ray_in, hit, rng),
            Self::Metal(m) => m.scatter(ray_in, hit, rng),
            Self::Dielectric(m) => m.scatter(ray_in, hit, rng),
            Self::DiffuseLight(m) => m.scatter(ray_in, hit, rng),
            Self::Isotropic(m) => m.scatter(ray_in, hit, rng),
        }
    }

    fn emitted(&self, uv: Uv, p: Point3, front_face: bool) -> Color {
        match self {
            Self::Lambertian(m) => m.emitted(uv, p, front_face),
            Self::Metal(m) => m.emitted(uv, p, front_face),
            Self::Dielectric(m) => m.emitted(uv, p, front_face),
            Self::DiffuseLight(m) => m.emitted(uv, p, front_face),
            Self::Isotropic(m) => m.emitted(uv, p, front_face),
        }
    }
}

impl MaterialKind {
    pub fn lambertian(albedo: Color) -> Arc<Self> {
        Arc::new(Self::Lambertian(Lambertian::from_color(albedo)))
    }

    pub fn lambertian_texture(texture: Arc<crate::texture::TextureKind>) -> Arc<Self> {
        Arc::new(Self::Lambertian(Lambertian::new(texture)))
    }

    pub fn metal(albedo: Color, fuzz: f64) -> Arc<Self> {
        Arc::new(Self::Metal(Metal::new(albedo, fuzz)))
    }

    pub fn dielectric(refraction_index: f64) -> Arc<Self> {
        Arc::new(Self::Dielectric(Dielectric::new(refraction_index)))
    }

    pub fn diffuse_light(emit: Color) -> Arc<Self> {
        Arc::new(Self::DiffuseLight(DiffuseLight::from_color(emit)))
    }

    pub fn diffuse_light_texture(texture: Arc<crate::texture::TextureKind>) -> Arc<Self> {
        Arc::new(Self::DiffuseLight(DiffuseLight::new(texture)))
    }
}
