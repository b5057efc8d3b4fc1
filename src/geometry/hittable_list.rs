use crate::hittable::{closer, HitRecord, Hittable, ScanMode};
use crate::math::*;

use super::Aggregate;

/// exhaustive linear scan over a small primitive set, in list order.
#[derive(Clone, Debug, Default)]
pub struct HittableList {
    pub list: Vec<Aggregate>,
}

impl HittableList {
    pub fn new(list: Vec<Aggregate>) -> HittableList {
        HittableList { list }
    }

    pub fn scan(&self, r: Ray, mode: ScanMode) -> Option<HitRecord> {
        match mode {
            ScanMode::Nearest => self.hit(r, 0.0, INFINITY),
            ScanMode::LegacyFlagClearing => self.legacy_scan(r),
        }
    }

    // running record plus a hit flag that every candidate clears before its own test.
    // "no hit yet" is a best distance of 0, so a candidate at distance 0 never sticks.
    fn legacy_scan(&self, r: Ray) -> Option<HitRecord> {
        let mut best: Option<HitRecord> = None;
        let mut flag = false;
        for hittable in &self.list {
            if let Some(candidate) = hittable.legacy_candidate(r) {
                flag = false;
                let best_time = best.map_or(0.0, |b| b.time);
                if candidate.time < best_time || best_time == 0.0 {
                    best = Some(candidate);
                    flag = true;
                }
            }
        }
        if flag {
            best
        } else {
            None
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let mut closest_so_far: f32 = t1;
        let mut hit_record: Option<HitRecord> = None;
        for hittable in &self.list {
            let tmp_hit_record = hittable.hit(r, t0, closest_so_far);
            if let Some(hit) = &tmp_hit_record {
                closest_so_far = hit.time;
            }
            hit_record = closer(hit_record, tmp_hit_record);
        }
        hit_record
    }

    fn legacy_candidate(&self, r: Ray) -> Option<HitRecord> {
        self.legacy_scan(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere};

    fn sphere(z: f32, radius: f32, color: RGBAColor) -> Aggregate {
        Aggregate::from(Sphere::new(radius, Point3::new(0.0, 0.0, z), color))
    }

    #[test]
    fn test_nearest_regardless_of_order() {
        let red = RGBAColor::new(1.0, 0.0, 0.0, 1.0);
        let green = RGBAColor::new(0.0, 1.0, 0.0, 1.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());

        let near_first = HittableList::new(vec![sphere(-3.0, 1.0, red), sphere(-8.0, 1.0, green)]);
        let far_first = HittableList::new(vec![sphere(-8.0, 1.0, green), sphere(-3.0, 1.0, red)]);

        for list in [near_first, far_first] {
            let hit = list.scan(ray, ScanMode::Nearest).unwrap();
            assert_eq!(hit.color, red);
            assert!((hit.time - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_nearest_hit_invariant() {
        let list = HittableList::new(vec![
            Aggregate::from(Plane::new(
                Point3::new(0.0, -0.5, 0.0),
                Vec3::y(),
                RGBAColor::WHITE,
            )),
            sphere(-2.0, 0.6, RGBAColor::WHITE),
            sphere(-1.2, 0.2, RGBAColor::WHITE),
            sphere(-4.0, 1.5, RGBAColor::WHITE),
        ]);
        let directions = [
            Vec3::new(0.0, -0.2, -1.0),
            Vec3::new(0.1, 0.0, -1.0),
            Vec3::new(0.0, -1.0, -0.3),
            Vec3::new(-0.05, 0.05, -1.0),
        ];
        for direction in directions {
            let ray = Ray::new(Point3::origin(), direction);
            let nearest = list.scan(ray, ScanMode::Nearest);
            for hittable in &list.list {
                if let Some(own) = hittable.hit(ray, 0.0, INFINITY) {
                    let nearest = nearest.expect("a primitive was hit, so the scan must hit");
                    assert!(nearest.time <= own.time, "{:?} {:?}", nearest, own);
                }
            }
        }
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::default();
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        assert!(list.scan(ray, ScanMode::Nearest).is_none());
        assert!(list.scan(ray, ScanMode::LegacyFlagClearing).is_none());
    }

    #[test]
    fn test_legacy_scan_drops_hit_on_later_rejection() {
        let red = RGBAColor::new(1.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        // near sphere accepted first, the farther sphere's candidate then clears the flag
        let list = HittableList::new(vec![
            sphere(-3.0, 1.0, red),
            sphere(-8.0, 1.0, RGBAColor::WHITE),
        ]);
        assert!(list.scan(ray, ScanMode::LegacyFlagClearing).is_none());
        assert!(list.scan(ray, ScanMode::Nearest).is_some());

        // reversed order, the nearest is accepted last and survives
        let list = HittableList::new(vec![
            sphere(-8.0, 1.0, RGBAColor::WHITE),
            sphere(-3.0, 1.0, red),
        ]);
        let hit = list.scan(ray, ScanMode::LegacyFlagClearing).unwrap();
        assert_eq!(hit.color, red);
        assert!((hit.time - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_legacy_scan_ignores_primitives_without_candidates() {
        let red = RGBAColor::new(1.0, 0.0, 0.0, 1.0);
        let ray = Ray::new(Point3::origin(), -Vec3::z());
        // the second sphere is off the ray entirely, so it leaves the flag alone
        let list = HittableList::new(vec![
            sphere(-3.0, 1.0, red),
            Aggregate::from(Sphere::new(
                1.0,
                Point3::new(10.0, 0.0, -8.0),
                RGBAColor::WHITE,
            )),
        ]);
        let hit = list.scan(ray, ScanMode::LegacyFlagClearing).unwrap();
        assert_eq!(hit.color, red);
    }
}
