mod bvh;
mod constant_medium;
mod hittable_list;
mod quad;
mod rotate_y;
mod sphere;
mod translate;
mod triangle;

use std::sync::Arc;

pub use bvh::BvhNode;
pub use constant_medium::ConstantMedium;
pub use hittable_list::HittableList;
pub use quad::Quad;
pub use rotate_y::RotateY;
pub use sphere::Sphere;
pub use translate::Translate;
pub use triangle::Triangle;

use crate::{
    aabb::Aabb, interval::Interval, material::MaterialKind, ray::{Point3, Ray}, rng::Rng, vec3::Vec3,
};

/// Surface parameterization of a hit point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// Intersection data filled in by a successful [`Hittable::hit`].
///
/// Invariant: `dot(ray.direction, normal) <= 0`; `front_face` is true iff the
/// ray struck the outward side.
#[derive(Clone)]
pub struct HitRecord {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub uv: Uv,
    pub front_face: bool,
    pub material: Arc<MaterialKind>,
}

impl HitRecord {
    /// Orients `normal` against the ray and records which side was struck.
    /// `outward_normal` must have unit length.
    pub fn with_face_normal(
        ray: &Ray,
        p: Point3,
        outward_normal: Vec3,
        t: f64,
        uv: Uv,
        material: Arc<MaterialKind>,
    ) -> Self {
        let front_face = ray.direction.dot(&outward_normal) < 0.;
        let normal = if front_face { outward_normal } else { -outward_normal };

        Self { p, normal, t, uv, front_face, material }
    }
}

/// Anything a ray can intersect: primitives, aggregates, and volumes.
///
/// `hit` takes the per-thread RNG alongside the ray: most primitives ignore
/// it, but [`ConstantMedium`] needs a random free-flight sample, and
/// threading it through the trait (rather than reaching for a thread-local)
/// keeps sampling reproducible from a single seed.
pub trait Hittable: Sync + Send {
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord>;

    fn bounding_box(&self) -> &Aabb;
}

/// Closed set of scene elements, dispatched by match rather than virtual
/// calls so the BVH can store them contiguously without per-ray heap
/// indirection (see `DESIGN.md`).
#[derive(Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    Quad(Quad),
    List(HittableList),
    Bvh(Arc<BvhNode>),
    ConstantMedium(Arc<ConstantMedium>),
    Translate(Arc<Translate>),
    RotateY(Arc<RotateY>),
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Quad> for Primitive {
    fn from(quad: Quad) -> Self {
        Primitive::Quad(quad)
    }
}

impl Primitive {
    pub fn translate(self, offset: Vec3) -> Self {
        Self::Translate(Arc::new(Translate::new(self, offset)))
    }

    pub fn rotate_y(self, angle_degrees: f64) -> Self {
        Self::RotateY(Arc::new(RotateY::new(self, angle_degrees)))
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord> {
        match self {
            Self::Sphere(s) => s.hit(ray, ray_t, rng),
            Self::Triangle(t) => t.hit(ray, ray_t, rng),
            Self::Quad(q) => q.hit(ray, ray_t, rng),
            Self::List(l) => l.hit(ray, ray_t, rng),
            Self::Bvh(b) => b.hit(ray, ray_t, rng),
            Self::ConstantMedium(m) => m.hit(ray, ray_t, rng),
            Self::Translate(t) => t.hit(ray, ray_t, rng),
            Self::RotateY(r) => r.hit(ray, ray_t, rng),
        }
    }

    fn bounding_box(&self) -> &Aabb {
        match self {
            Self::Sphere(s) => s.bounding_box(),
            Self::Triangle(t) => t.bounding_box(),
            Self::Quad(q) => q.bounding_box(),
            Self::List(l) => l.bounding_box(),
            Self::Bvh(b) => b.bounding_box(),
            Self::ConstantMedium(m) => m.bounding_box(),
            Self::Translate(t) => t.bounding_box(),
            Self::RotateY(r) => r.bounding_box(),
        }
    }
}
