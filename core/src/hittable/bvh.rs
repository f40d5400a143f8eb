use std::sync::Arc;

use crate::{
    aabb::{self, Aabb},
    hittable::{HitRecord, Hittable, Primitive},
    interval::Interval,
    ray::Ray,
    rng::Rng,
};

/// Binary spatial-subdivision aggregate. Built once over a contiguous slice
/// and then immutable; the node's AABB always spans both children.
pub struct BvhNode {
    left: Arc<Primitive>,
    right: Arc<Primitive>,
    bounding_box: Aabb,
}

impl BvhNode {
    /// Consumes the list, reordering it in place while building the tree:
    /// split on the box's longest axis, sort by lower bound, recurse on halves.
    pub fn new(mut objects: Vec<Primitive>) -> Self {
        Self::build(&mut objects)
    }

    fn build(objects: &mut [Primitive]) -> Self {
        let bounding_box = union_bounding_box(objects);
        let axis = bounding_box.longest_axis();

        let (left, right): (Arc<Primitive>, Arc<Primitive>) = match objects.len() {
            0 => panic!("BvhNode::build called with an empty slice"),
            1 => {
                let only = Arc::new(objects[0].clone());
                (only.clone(), only)
            }
            2 => (Arc::new(objects[0].clone()), Arc::new(objects[1].clone())),
            _ => {
                objects.sort_by(|a, b| {
                    a.bounding_box()[axis].min.total_cmp(&b.bounding_box()[axis].min)
                });
                let mid = objects.len() / 2;
                let (left_half, right_half) = objects.split_at_mut(mid);

                (
                    Arc::new(Primitive::Bvh(Arc::new(Self::build(left_half)))),
                    Arc::new(Primitive::Bvh(Arc::new(Self::build(right_half)))),
                )
            }
        };

        Self { left, right, bounding_box }
    }
}

fn union_bounding_box(objects: &[Primitive]) -> Aabb {
    objects
        .iter()
        .map(|o| *o.bounding_box())
        .fold(aabb::EMPTY, |acc, b| Aabb::from_boxes(&acc, &b))
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval, rng: &mut Rng) -> Option<HitRecord> {
        if !self.bounding_box.hit(ray, ray_t) {
            return None;
        }

        let left_hit = self.left.hit(ray, ray_t, rng);
        let right_max = left_hit.as_ref().map_or(ray_t.max, |h| h.t);
        let right_hit = self.right.hit(ray, Interval::new(ray_t.min, right_max), rng);

        right_hit.or(left_hit)
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        hittable::{HittableList, Sphere},
        interval,
        material::{Lambertian, MaterialKind},
        ray::Point3,
        vec3::Vec3,
    };

    fn white() -> Arc<MaterialKind> {
        Arc::new(MaterialKind::Lambertian(Lambertian::from_color(Vec3::ONE)))
    }

    fn brute_force_closest(
        objects: &[Primitive],
        ray: &Ray,
        ray_t: Interval,
        rng: &mut Rng,
    ) -> Option<HitRecord> {
        let mut closest = ray_t.max;
        let mut best = None;
        for o in objects {
            if let Some(h) = o.hit(ray, Interval::new(ray_t.min, closest), rng) {
                closest = h.t;
                best = Some(h);
            }
        }
        best
    }

    #[test]
    fn bvh_matches_brute_force_list() {
        let mut objects = Vec::new();
        for i in 0..50 {
            let x = (i as f64) * 0.7 - 15.;
            objects.push(Primitive::Sphere(Sphere::stationary(
                Point3::new(x, (i as f64 * 1.3).sin(), (i as f64 * 0.9).cos() * 3.),
                0.4,
                white(),
            )));
        }

        let bvh = BvhNode::new(objects.clone());

        for i in 0..200 {
            let angle = i as f64 * 0.031;
            let ray = Ray::new(
                Point3::new(-50., 0., 0.),
                Vec3::new(50., angle.sin() * 5., angle.cos() * 5.),
            );

            let mut rng = Rng::seeded(i as u64);
            let via_bvh = bvh.hit(&ray, interval::UNIVERSE, &mut rng).map(|h| h.t);
            let via_list =
                brute_force_closest(&objects, &ray, interval::UNIVERSE, &mut rng).map(|h| h.t);

            match (via_bvh, via_list) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                (None, None) => {}
                other => panic!("mismatch: {other:?}"),
            }
        }
    }

    #[test]
    fn single_object_bvh_hits() {
        let list = vec![Primitive::Sphere(Sphere::stationary(Point3::ZERO, 1., white()))];
        let bvh = BvhNode::new(list);
        let ray = Ray::new(Point3::new(0., 0., -5.), Vec3::with_z(1.));
        let mut rng = Rng::seeded(0);

        assert!(bvh.hit(&ray, interval::UNIVERSE, &mut rng).is_some());
    }

    #[test]
    fn bounding_box_spans_children() {
        let mut list = HittableList::new();
        list.push(Sphere::stationary(Point3::new(-5., 0., 0.), 1., white()));
        list.push(Sphere::stationary(Point3::new(5., 0., 0.), 1., white()));

        let bvh = BvhNode::new(list.into_objects());

        assert!(bvh.bounding_box().x.contains(-6.));
        assert!(bvh.bounding_box().x.contains(6.));
    }
}
