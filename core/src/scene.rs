use crate::{hittable::Primitive, vec3::Color};

/// The top-level primitive (normally a `BvhNode` wrapping a `HittableList`)
/// plus the background color rays escape into. Materials and textures are
/// reached through the `Arc`s the primitives already hold, so there is
/// nothing else to own here.
pub struct Scene {
    pub world: Primitive,
    pub background: Color,
}

impl Scene {
    pub fn new(world: Primitive, background: Color) -> Self {
        Self { world, background }
    }
}
