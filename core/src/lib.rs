pub mod aabb;
pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod perlin;
pub mod ray;
pub mod rng;
pub mod scene;
pub mod texture;
pub mod tonemap;
pub mod vec3;

/// Commonly used types and traits, for scene-builder crates to glob-import.
pub mod prelude {
    pub use crate::aabb::Aabb;
    pub use crate::camera::{Camera, CameraBuilder, FrameBuffer, RenderSettings};
    pub use crate::hittable::{
        BvhNode, ConstantMedium, HitRecord, Hittable, HittableList, Primitive, Quad, RotateY,
        Sphere, Translate, Triangle, Uv,
    };
    pub use crate::interval::{self, Interval};
    pub use crate::material::{
        Dielectric, DiffuseLight, Isotropic, Lambertian, Material, MaterialKind, Metal,
    };
    pub use crate::perlin::Perlin;
    pub use crate::ray::{Point3, Ray};
    pub use crate::rng::Rng;
    pub use crate::scene::Scene;
    pub use crate::texture::{Checker, Image, ImageData, Noise, Solid, Texture, TextureKind};
    pub use crate::tonemap;
    pub use crate::vec3::{Color, Vec3};
}
