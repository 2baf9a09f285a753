#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use planar_regions::{
    are_regions_equal, difference, exclusive_or, intersection, is_path_simple, is_valid_region,
    offset_path, offset_region, point_in_region, region_area, region_parts, union, OffsetParams,
    Point2, Region, EPSILON,
};
use proptest::prelude::*;

const TOL: f64 = 1e-6;

fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x0 + size, y0),
        Point2::new(x0 + size, y0 + size),
        Point2::new(x0, y0 + size),
    ]
}

#[allow(clippy::cast_precision_loss)]
fn regular_polygon(cx: f64, cy: f64, radius: f64, sides: usize, phase: f64) -> Vec<Point2> {
    (0..sides)
        .map(|i| {
            let a = phase + TAU * i as f64 / sides as f64;
            Point2::new(cx + radius * a.cos(), cy + radius * a.sin())
        })
        .collect()
}

prop_compose! {
    fn polygon()(
        cx in 0.0f64..20.0,
        cy in 0.0f64..20.0,
        radius in 2.0f64..15.0,
        sides in 3usize..9,
        phase in 0.0f64..TAU,
    ) -> Region {
        Region::from(regular_polygon(cx, cy, radius, sides, phase))
    }
}

/// Alternates between an outer and an inner radius.
#[allow(clippy::cast_precision_loss)]
fn star_polygon(cx: f64, cy: f64, outer: f64, inner: f64, spikes: usize, phase: f64) -> Vec<Point2> {
    (0..2 * spikes)
        .map(|i| {
            let a = phase + TAU * i as f64 / (2 * spikes) as f64;
            let r = if i % 2 == 0 { outer } else { inner };
            Point2::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

prop_compose! {
    fn star()(
        cx in 0.0f64..20.0,
        cy in 0.0f64..20.0,
        outer in 8.0f64..14.0,
        ratio in 0.55f64..0.8,
        spikes in 4usize..8,
        phase in 0.0f64..TAU,
    ) -> Region {
        Region::from(star_polygon(cx, cy, outer, outer * ratio, spikes, phase))
    }
}

prop_compose! {
    /// A regular polygon with a smaller, rotated regular hole at its centre.
    fn holed()(
        cx in 0.0f64..20.0,
        cy in 0.0f64..20.0,
        radius in 6.0f64..14.0,
        ratio in 0.2f64..0.4,
        sides in 4usize..9,
        hole_sides in 3usize..7,
        phase in 0.0f64..TAU,
    ) -> Region {
        Region::new(vec![
            regular_polygon(cx, cy, radius, sides, phase),
            regular_polygon(cx, cy, radius * ratio, hole_sides, phase * 0.5),
        ])
    }
}

fn shape() -> impl Strategy<Value = Region> {
    prop_oneof![polygon(), star(), holed()]
}

/// Compares two regions by membership of a fixed grid of sample points.
fn same_membership(a: &Region, b: &Region) -> bool {
    (0..40).all(|i| {
        (0..40).all(|j| {
            let p = Point2::new(-15.0 + 0.913 * f64::from(i), -15.0 + 0.917 * f64::from(j));
            point_in_region(p, a, EPSILON) == point_in_region(p, b, EPSILON)
        })
    })
}

proptest! {
    #[test]
    fn self_operations_are_identities(a in polygon()) {
        let pair = [a.clone(), a.clone()];
        prop_assert!(are_regions_equal(&union(&pair, EPSILON).unwrap(), &a, TOL));
        prop_assert!(are_regions_equal(&intersection(&pair, EPSILON).unwrap(), &a, TOL));
        prop_assert!(difference(&pair, EPSILON).unwrap().is_empty());
    }

    #[test]
    fn areas_satisfy_inclusion_exclusion(a in polygon(), b in polygon()) {
        let pair = [a.clone(), b.clone()];
        let u = union(&pair, EPSILON).unwrap();
        let i = intersection(&pair, EPSILON).unwrap();
        let lhs = region_area(&u, EPSILON) + region_area(&i, EPSILON);
        let rhs = region_area(&a, EPSILON) + region_area(&b, EPSILON);
        prop_assert!((lhs - rhs).abs() < TOL * rhs, "{lhs} != {rhs}");
        prop_assert!(is_valid_region(&u, EPSILON));
        prop_assert!(is_valid_region(&i, EPSILON));
    }

    #[test]
    fn every_operator_yields_a_valid_region(a in shape(), b in shape()) {
        let pair = [a.clone(), b.clone()];
        let u = union(&pair, EPSILON).unwrap();
        let i = intersection(&pair, EPSILON).unwrap();
        let d = difference(&pair, EPSILON).unwrap();
        let x = exclusive_or(&pair, EPSILON).unwrap();
        for (name, r) in [("union", &u), ("intersection", &i), ("difference", &d), ("xor", &x)] {
            prop_assert!(is_valid_region(r, EPSILON), "{name} is invalid: {r:?}");
        }

        let (area_a, area_b) = (region_area(&a, EPSILON), region_area(&b, EPSILON));
        let (area_u, area_i) = (region_area(&u, EPSILON), region_area(&i, EPSILON));
        let tol = TOL * (area_a + area_b);
        prop_assert!((area_u + area_i - area_a - area_b).abs() < tol);
        prop_assert!((region_area(&d, EPSILON) - (area_a - area_i)).abs() < tol);
        prop_assert!((region_area(&x, EPSILON) - (area_u - area_i)).abs() < tol);
    }

    #[test]
    fn concave_offsets_stay_valid(
        a in prop_oneof![star(), holed()],
        d in -0.6f64..0.6,
    ) {
        prop_assume!(d.abs() > 0.05);
        let r = offset_region(&a, &OffsetParams::delta(d)).unwrap();
        prop_assert!(is_valid_region(&r, EPSILON), "invalid offset: {r:?}");
        let (before, after) = (region_area(&a, EPSILON), region_area(&r, EPSILON));
        if d > 0.0 {
            prop_assert!(after > before);
        } else {
            prop_assert!(after < before);
        }

        let outline = offset_path(&a.components[0], &OffsetParams::radius(d)).unwrap();
        prop_assert!(is_path_simple(&outline, true, EPSILON));
    }

    #[test]
    fn exclusive_or_is_union_of_differences(a in polygon(), b in polygon()) {
        let ab = difference(&[a.clone(), b.clone()], EPSILON).unwrap();
        let ba = difference(&[b.clone(), a.clone()], EPSILON).unwrap();
        let expected = union(&[ab, ba], EPSILON).unwrap();
        let xor = exclusive_or(&[a, b], EPSILON).unwrap();
        prop_assert!((region_area(&xor, EPSILON) - region_area(&expected, EPSILON)).abs() < TOL * 100.0);
        prop_assert!(same_membership(&xor, &expected));
    }

    #[test]
    fn delta_offset_round_trips_on_convex_polygons(
        a in polygon(),
        d in 0.5f64..8.0,
    ) {
        let path = &a.components[0];
        let grown = offset_path(path, &OffsetParams::delta(d)).unwrap();
        let back = offset_path(&grown, &OffsetParams::delta(-d)).unwrap();
        prop_assert!(are_regions_equal(&Region::from(back), &a, TOL));
    }

    #[test]
    fn region_offset_grows_area(a in polygon(), r in 0.5f64..4.0) {
        let grown = offset_region(&a, &OffsetParams::radius(r)).unwrap();
        prop_assert_eq!(grown.len(), 1);
        prop_assert!(region_area(&grown, EPSILON) > region_area(&a, EPSILON));
    }
}

#[test]
fn point_in_region_on_square() {
    let region = Region::from(square(0.0, 0.0, 10.0));
    assert_eq!(point_in_region(Point2::new(5.0, 5.0), &region, EPSILON), 1);
    assert_eq!(point_in_region(Point2::new(15.0, 5.0), &region, EPSILON), -1);
    assert_eq!(point_in_region(Point2::new(0.0, 5.0), &region, EPSILON), 0);
}

#[test]
fn square_with_hole_area() {
    let region = Region::new(vec![square(0.0, 0.0, 10.0), square(2.0, 2.0, 6.0)]);
    assert!((region_area(&region, EPSILON) - 64.0).abs() < EPSILON);
}

#[test]
fn square_offset_by_delta() {
    let out = offset_path(&square(0.0, 0.0, 10.0), &OffsetParams::delta(2.0)).unwrap();
    assert!(are_regions_equal(
        &Region::from(out),
        &Region::from(square(-2.0, -2.0, 14.0)),
        TOL
    ));
}

#[test]
fn concentric_squares_split_into_two_parts() {
    let region = Region::new(vec![
        square(0.0, 0.0, 30.0),
        square(5.0, 5.0, 20.0),
        square(10.0, 10.0, 10.0),
    ]);
    let parts = region_parts(&region, EPSILON);
    assert_eq!(parts.len(), 2);
    let ring = parts.iter().find(|p| p.holes.len() == 1).unwrap();
    assert!(are_regions_equal(
        &Region::from(ring.outer.clone()),
        &Region::from(square(0.0, 0.0, 30.0)),
        TOL
    ));
    assert!(are_regions_equal(
        &Region::from(ring.holes[0].clone()),
        &Region::from(square(5.0, 5.0, 20.0)),
        TOL
    ));
    let core = parts.iter().find(|p| p.holes.is_empty()).unwrap();
    assert!(are_regions_equal(
        &Region::from(core.outer.clone()),
        &Region::from(square(10.0, 10.0, 10.0)),
        TOL
    ));
}

#[test]
fn notched_square_offsets_over_the_notch() {
    let notched = Region::from(vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(5.5, 10.0),
        Point2::new(5.5, 7.0),
        Point2::new(4.5, 7.0),
        Point2::new(4.5, 10.0),
        Point2::new(0.0, 10.0),
    ]);
    let grown = offset_region(&notched, &OffsetParams::delta(1.0)).unwrap();
    assert!(is_valid_region(&grown, EPSILON));
    assert!((region_area(&grown, EPSILON) - 144.0).abs() < TOL);
    assert_eq!(point_in_region(Point2::new(5.0, 9.0), &grown, EPSILON), 1);

    let shrunk = offset_region(&notched, &OffsetParams::delta(-1.0)).unwrap();
    assert!(is_valid_region(&shrunk, EPSILON));
    assert_eq!(point_in_region(Point2::new(5.0, 7.5), &shrunk, EPSILON), -1);
}

#[test]
fn nested_round_trip() {
    let region = Region::new(vec![square(0.0, 0.0, 3.0)]);
    let nested = region.to_nested();
    assert!(planar_regions::is_region(&nested));
    assert_eq!(Region::from_nested(&nested).unwrap(), region);
}
