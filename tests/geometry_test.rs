//! Integration tests for eye-pair geometry and crop regions

use face_sampler::geometry::{rect_center, EyePairGeometry};
use opencv::core::Rect;
use proptest::prelude::*;

#[test]
fn test_reference_scenario() {
    // Eyes at centers (100, 50) and (140, 50) with widths 20
    let left = Rect::new(90, 40, 20, 20);
    let right = Rect::new(130, 40, 20, 20);

    let geometry = EyePairGeometry::new(left, right);
    assert_eq!(geometry.distance(), 40.0);
    assert_eq!(geometry.center(), (120.0, 50.0));

    let region = geometry.crop_region(1.6, 0.2);
    assert_eq!(region.x, 88);
    assert_eq!(region.y, 42);
    assert_eq!(region.width, 64);
    assert_eq!(region.height, 64);
}

#[test]
fn test_center_uses_both_axes() {
    // Eyes on different rows: the crop center averages y as well
    let high = Rect::new(20, 30, 20, 20);
    let low = Rect::new(80, 50, 20, 20);

    let geometry = EyePairGeometry::new(high, low);
    let (cx, cy) = geometry.center();
    assert_eq!(cx, 60.0);
    assert_eq!(cy, 50.0);
}

#[test]
fn test_odd_sized_rect_center() {
    let (cx, cy) = rect_center(Rect::new(0, 0, 21, 21));
    assert_eq!(cx, 10.5);
    assert_eq!(cy, 10.5);
}

fn arb_rect() -> impl Strategy<Value = (i32, i32, i32, i32)> {
    (-500..500i32, -500..500i32, 1..300i32, 1..300i32)
}

proptest! {
    #[test]
    fn prop_distance_symmetric((ax, ay, aw, ah) in arb_rect(), (bx, by, bw, bh) in arb_rect()) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);

        let forward = EyePairGeometry::new(a, b);
        let swapped = EyePairGeometry::new(b, a);

        prop_assert_eq!(forward.distance(), swapped.distance());
        prop_assert_eq!(forward.center(), swapped.center());
    }

    #[test]
    fn prop_crop_region_square((ax, ay, aw, ah) in arb_rect(), (bx, by, bw, bh) in arb_rect()) {
        let geometry = EyePairGeometry::new(Rect::new(ax, ay, aw, ah), Rect::new(bx, by, bw, bh));
        let region = geometry.crop_region(1.6, 0.2);
        prop_assert_eq!(region.width, region.height);
        prop_assert!(region.width >= 0);
    }

    #[test]
    fn prop_geometry_idempotent((ax, ay, aw, ah) in arb_rect(), (bx, by, bw, bh) in arb_rect()) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);

        let first = EyePairGeometry::new(a, b);
        let second = EyePairGeometry::new(a, b);
        prop_assert_eq!(first, second);

        let region_a = first.crop_region(1.6, 0.2);
        let region_b = second.crop_region(1.6, 0.2);
        prop_assert_eq!(region_a.x, region_b.x);
        prop_assert_eq!(region_a.y, region_b.y);
        prop_assert_eq!(region_a.width, region_b.width);
        prop_assert_eq!(region_a.height, region_b.height);
    }

    #[test]
    fn prop_distance_ignores_vertical_offset(
        (ax, aw) in (-500..500i32, 1..300i32),
        (bx, bw) in (-500..500i32, 1..300i32),
        ay in -500..500i32,
        by in -500..500i32,
    ) {
        let level = EyePairGeometry::new(Rect::new(ax, 0, aw, 20), Rect::new(bx, 0, bw, 20));
        let offset = EyePairGeometry::new(Rect::new(ax, ay, aw, 20), Rect::new(bx, by, bw, 20));
        prop_assert_eq!(level.distance(), offset.distance());
    }
}
