use crate::vec3::Vec3;

pub type Point3 = Vec3;

/// A ray with origin, direction (not required to be unit length), and the
/// emission time it carries for motion blur (in `[0, 1]`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
    pub time: f64,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::new_with_time(origin, direction, 0.)
    }

    pub fn new_with_time(origin: Point3, direction: Vec3, time: f64) -> Self {
        Self { origin, direction, time }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
