use crate::{ray::Point3, rng::Rng, vec3::Vec3};

const POINT_COUNT: usize = 256;

/// Perlin noise: a 3D point maps to a repeatable randomish scalar, with
/// nearby points returning similar values. Seeded once at scene-build time
/// (see [`crate::texture::Noise`]).
#[derive(Clone)]
pub struct Perlin {
    rand_vecs: [Vec3; POINT_COUNT],
    perm_x: [usize; POINT_COUNT],
    perm_y: [usize; POINT_COUNT],
    perm_z: [usize; POINT_COUNT],
}

impl Perlin {
    pub fn new(rng: &mut Rng) -> Self {
        let mut rand_vecs = [Vec3::ZERO; POINT_COUNT];
        for v in rand_vecs.iter_mut() {
            *v = Vec3::random_range(rng, -1., 1.).to_unit();
        }

        Self {
            rand_vecs,
            perm_x: generate_perm(rng),
            perm_y: generate_perm(rng),
            perm_z: generate_perm(rng),
        }
    }

    pub fn noise(&self, p: Point3) -> f64 {
        let i = p.x.floor() as i64;
        let j = p.y.floor() as i64;
        let k = p.z.floor() as i64;

        let mut c = [[[Vec3::ZERO; 2]; 2]; 2];
        for di in 0..2_i64 {
            for dj in 0..2_i64 {
                for dk in 0..2_i64 {
                    let xi = ((i + di) & 255) as usize;
                    let yi = ((j + dj) & 255) as usize;
                    let zi = ((k + dk) & 255) as usize;

                    c[di as usize][dj as usize][dk as usize] =
                        self.rand_vecs[self.perm_x[xi] ^ self.perm_y[yi] ^ self.perm_z[zi]];
                }
            }
        }

        perlin_interp(&c, p)
    }

    /// Sum of noise at halved-amplitude octaves, used to perturb the marble
    /// sine pattern.
    pub fn turbulence(&self, p: Point3, depth: usize) -> f64 {
        let mut accum = 0.;
        let mut temp_p = p;
        let mut weight = 1.;

        for _ in 0..depth {
            accum += weight * self.noise(temp_p);
            weight *= 0.5;
            temp_p *= 2.;
        }

        accum.abs()
    }
}

fn perlin_interp(c: &[[[Vec3; 2]; 2]; 2], p: Point3) -> f64 {
    let u = p.x - p.x.floor();
    let v = p.y - p.y.floor();
    let w = p.z - p.z.floor();

    let uu = u * u * (3. - 2. * u);
    let vv = v * v * (3. - 2. * v);
    let ww = w * w * (3. - 2. * w);

    let mut accum = 0.;
    for (i, ic) in c.iter().enumerate() {
        for (j, jc) in ic.iter().enumerate() {
            for (k, val) in jc.iter().enumerate() {
                let (fi, fj, fk) = (i as f64, j as f64, k as f64);
                let weight_v = Vec3::new(u - fi, v - fj, w - fk);

                accum += (fi * uu + (1. - fi) * (1. - uu))
                    * (fj * vv + (1. - fj) * (1. - vv))
                    * (fk * ww + (1. - fk) * (1. - ww))
                    * val.dot(&weight_v);
            }
        }
    }

    accum
}

fn generate_perm(rng: &mut Rng) -> [usize; POINT_COUNT] {
    let mut perm = [0; POINT_COUNT];
    for (i, slot) in perm.iter_mut().enumerate() {
        *slot = i;
    }

    for i in (1..POINT_COUNT).rev() {
        let target = rng.range_usize(0, i);
        perm.swap(i, target);
    }

    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_perm_is_a_permutation() {
        let mut rng = Rng::seeded(1);
        let mut perm = generate_perm(&mut rng);
        perm.sort_unstable();

        assert!(perm.iter().enumerate().all(|(i, &v)| i == v));
    }

    #[test]
    fn noise_is_deterministic_for_a_seed() {
        let mut rng_a = Rng::seeded(42);
        let mut rng_b = Rng::seeded(42);
        let a = Perlin::new(&mut rng_a);
        let b = Perlin::new(&mut rng_b);

        assert_eq!(a.noise(Point3::new(1.3, 2.7, -0.4)), b.noise(Point3::new(1.3, 2.7, -0.4)));
    }
}
