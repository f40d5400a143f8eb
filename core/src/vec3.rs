use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::rng::Rng;

pub type Color = Vec3;

/// Triple of doubles shared by points, directions, and colors.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0., y: 0., z: 0. };
    pub const ONE: Vec3 = Vec3 { x: 1., y: 1., z: 1. };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn with_isotropic(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub fn with_x(x: f64) -> Self {
        Self::new(x, 0., 0.)
    }

    pub fn with_y(y: f64) -> Self {
        Self::new(0., y, 0.)
    }

    pub fn with_z(z: f64) -> Self {
        Self::new(0., 0., z)
    }

    /// True if every component is within `1e-8` of zero.
    pub fn near_zero(&self) -> bool {
        const EPS: f64 = 1e-8;
        self.x.abs() < EPS && self.y.abs() < EPS && self.z.abs() < EPS
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn dot_self(&self) -> f64 {
        self.dot(self)
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.dot_self()
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn to_unit(&self) -> Self {
        *self / self.length()
    }

    pub fn random(rng: &mut Rng) -> Self {
        Self::new(rng.next_f64(), rng.next_f64(), rng.next_f64())
    }

    pub fn random_range(rng: &mut Rng, min: f64, max: f64) -> Self {
        Self::new(
            rng.range_f64(min, max),
            rng.range_f64(min, max),
            rng.range_f64(min, max),
        )
    }

    /// Rejection-sampled uniform point inside the unit ball.
    pub fn random_in_unit_sphere(rng: &mut Rng) -> Self {
        loop {
            let p = Self::random_range(rng, -1., 1.);
            if p.length_squared() < 1. {
                return p;
            }
        }
    }

    pub fn random_unit_vector(rng: &mut Rng) -> Self {
        Self::random_in_unit_sphere(rng).to_unit()
    }

    /// Rejection-sampled uniform point inside the unit disk (z = 0).
    pub fn random_in_unit_disk(rng: &mut Rng) -> Self {
        loop {
            let p = Self::new(rng.range_f64(-1., 1.), rng.range_f64(-1., 1.), 0.);
            if p.length_squared() < 1. {
                return p;
            }
        }
    }

    /// Uniform direction on the unit sphere, used by isotropic scattering.
    pub fn random_on_unit_sphere(rng: &mut Rng) -> Self {
        Self::random_unit_vector(rng)
    }
}

/// Reflects `v` about unit normal `n`.
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    *v - 2. * v.dot(n) * *n
}

/// Refracts unit direction `uv` through a surface with unit normal `n`, where
/// `etai_over_etat` is the ratio of refractive indices on either side.
pub fn refract(uv: &Vec3, n: &Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-*uv).dot(n).min(1.);
    let r_out_perp = etai_over_etat * (*uv + cos_theta * *n);
    let r_out_parallel = -((1. - r_out_perp.length_squared()).abs().sqrt()) * *n;

    r_out_perp + r_out_parallel
}

impl Index<u8> for Vec3 {
    type Output = f64;

    fn index(&self, index: u8) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds, got {index}"),
        }
    }
}

impl IndexMut<u8> for Vec3 {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds, got {index}"),
        }
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vec3::ZERO, |acc, v| acc + v)
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<Vec3> for (f64, f64, f64) {
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div for Vec3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self * (1. / rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        *self *= 1. / rhs;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_sub_work() {
        let a = Vec3::new(1., 2., 3.);
        let b = Vec3::new(4., 5., 6.);

        assert_eq!(a + b, Vec3::new(5., 7., 9.));
        assert_eq!(a - b, Vec3::new(-3., -3., -3.));
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec3::new(1., 2., 3.);
        let b = Vec3::new(4., 5., 6.);

        assert_eq!(a.dot(&b), 32.);
        assert_eq!(a.cross(&b), Vec3::new(-3., 6., -3.));
    }

    #[test]
    fn to_unit_has_length_one() {
        let v = Vec3::new(1., 2., 3.);

        assert!((v.to_unit().length() - 1.).abs() < 1e-12);
    }

    #[test]
    fn near_zero_detects_tiny_components() {
        assert!(Vec3::new(1e-9, -1e-9, 0.).near_zero());
        assert!(!Vec3::new(1e-7, 0., 0.).near_zero());
    }

    #[test]
    fn reflect_is_an_involution() {
        let n = Vec3::new(0., 1., 0.);
        let d = Vec3::new(1., -1., 0.).to_unit();

        let once = reflect(&d, &n);
        let twice = reflect(&once, &n);

        assert!((twice - d).length() < 1e-9);
    }

    #[test]
    fn refract_reciprocity_without_tir() {
        let n = Vec3::new(0., 1., 0.);
        let d = Vec3::new(0.3, -1., 0.).to_unit();
        let ratio = 1. / 1.5;

        let refracted = refract(&d, &n, ratio);
        let back = refract(&refracted, &-n, 1. / ratio);

        assert!((back - d).length() < 1e-9);
    }

    #[test]
    fn index_matches_fields() {
        let v = Vec3::new(1., 2., 3.);

        assert_eq!(v[0], 1.);
        assert_eq!(v[1], 2.);
        assert_eq!(v[2], 3.);
    }
}
