//! Unit tests for cw-core primitives.

#[cfg(test)]
mod geom {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{Pose, Vec2, normalize_angle};

    #[test]
    fn from_heading_is_unit() {
        for h in [0.0, 0.7, FRAC_PI_2, PI, -2.1] {
            let v = Vec2::from_heading(h);
            assert!((v.length() - 1.0).abs() < 1e-12, "heading {h}");
        }
    }

    #[test]
    fn perp_left_rotates_ccw() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(v.perp_left(), Vec2::new(0.0, 1.0));
        assert_eq!(v.perp_left().perp_left(), -v);
    }

    #[test]
    fn distance_and_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((a.dot(b) - 16.0).abs() < 1e-12);
    }

    #[test]
    fn advanced_moves_along_heading() {
        let p = Pose::new(Vec2::ZERO, FRAC_PI_2).advanced(10.0);
        assert!(p.position.x.abs() < 1e-9);
        assert!((p.position.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f64::INFINITY).is_finite());
        assert!(Vec2::new(1.0, -2.0).is_finite());
    }

    #[test]
    fn angle_normalization() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(0.3) - 0.3).abs() < 1e-12);
    }
}

#[cfg(test)]
mod traffic {
    use crate::{Approach, Lane, LightColor, LightMap, TurnType};

    #[test]
    fn destination_table() {
        use Approach::*;
        use TurnType::*;
        assert_eq!(North.destination(Straight), South);
        assert_eq!(North.destination(Left), West);
        assert_eq!(North.destination(Right), East);
        assert_eq!(East.destination(Straight), West);
        assert_eq!(South.destination(Left), East);
        assert_eq!(West.destination(Right), North);
    }

    #[test]
    fn destination_matches_heading_delta() {
        // Every destination is the side whose outbound direction equals the
        // final travel heading.  A vehicle leaving through side `s` travels
        // opposite to that side's inbound heading.
        use std::f64::consts::PI;
        for a in Approach::ALL {
            for t in [TurnType::Straight, TurnType::Left, TurnType::Right] {
                let final_heading = crate::normalize_angle(a.heading() + t.heading_delta());
                let expected = Approach::ALL
                    .into_iter()
                    .find(|s| {
                        (crate::normalize_angle(s.heading() + PI) - final_heading).abs() < 1e-9
                    })
                    .unwrap();
                assert_eq!(a.destination(t), expected, "{a} {t}");
            }
        }
    }

    #[test]
    fn opposite_is_involution() {
        for a in Approach::ALL {
            assert_eq!(a.opposite().opposite(), a);
        }
    }

    #[test]
    fn lane_offsets_distinct() {
        assert_eq!(Lane::RightTurn.offset_factor(), 0.25);
        assert_eq!(Lane::Through.offset_factor(), 0.75);
    }

    #[test]
    fn light_map_absent_is_permissive() {
        let map = LightMap::permissive();
        for a in Approach::ALL {
            assert_eq!(map.get(a), None);
            assert!(map.permits(a));
        }
    }

    #[test]
    fn light_map_set_and_clear() {
        let mut map = LightMap::permissive();
        map.set(Approach::North, LightColor::Red);
        assert!(!map.permits(Approach::North));
        assert!(map.permits(Approach::East));
        map.set(Approach::North, LightColor::Yellow);
        assert!(map.permits(Approach::North));
        map.clear(Approach::North);
        assert_eq!(map.get(Approach::North), None);
    }

    #[test]
    fn uniform_map_shows_one_color() {
        let map = LightMap::uniform(LightColor::Red);
        for a in Approach::ALL {
            assert_eq!(map.get(a), Some(LightColor::Red));
            assert!(!map.permits(a));
        }
    }
}

#[cfg(test)]
mod scene {
    use crate::{SceneBounds, Vec2};

    #[test]
    fn containment() {
        let b = SceneBounds::new(800.0, 600.0);
        assert!(b.contains(Vec2::new(400.0, 300.0)));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(!b.contains(Vec2::new(-1.0, 300.0)));
    }

    #[test]
    fn margin_exit() {
        let b = SceneBounds::new(800.0, 600.0);
        assert!(!b.beyond_margin(Vec2::new(-50.0, 300.0), 100.0));
        assert!(b.beyond_margin(Vec2::new(-101.0, 300.0), 100.0));
        assert!(b.beyond_margin(Vec2::new(400.0, 701.0), 100.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let same = (0..32).filter(|_| a.gen_range(0u32..1000) == b.gen_range(0u32..1000)).count();
        assert!(same < 8);
    }

    #[test]
    fn choose_covers_slice() {
        let mut rng = SimRng::new(3);
        let items = [1, 2, 3, 4];
        for _ in 0..16 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod settings {
    use crate::SimSettings;

    #[test]
    fn default_is_valid() {
        assert!(SimSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_rates() {
        let mut s = SimSettings::default();
        s.spawn_rate_per_10s = 0.0;
        assert!(s.validate().is_err());
        s.spawn_rate_per_10s = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_bad_speed_and_bounds() {
        let mut s = SimSettings::default();
        s.max_speed = -1.0;
        assert!(s.validate().is_err());

        let mut s = SimSettings::default();
        s.bounds.width = 0.0;
        assert!(s.validate().is_err());
    }
}

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn next_increments() {
        assert_eq!(VehicleId(0).next(), VehicleId(1));
        assert!(VehicleId(5) < VehicleId(6));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}
