use super::rand::{draw_convex, draw_star, RadialCfg, ReplayToken, VertexCount};
use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn pts(xs: &[(f64, f64)]) -> Vec<Point2D> {
    xs.iter().map(|&(x, y)| vector![x, y]).collect()
}

fn square() -> Polygon {
    Polygon::new(pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])).unwrap()
}

#[test]
fn check_needs_three_points() {
    let p = vector![1.0, 2.0];
    let q = vector![3.0, -4.0];
    assert!(!check(&[]));
    assert!(!check(&[p]));
    assert!(!check(&[p, q]));
}

#[test]
fn check_square_prefixes_never_cross() {
    let v = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    for k in 0..=v.len() {
        assert!(!check(&v[..k]), "prefix of length {k}");
    }
}

#[test]
fn check_bowtie_crosses_first_edge() {
    let v = pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
    // |(0,10) - (0,0)| == 10 is not strictly inside the closing radius.
    assert!(check(&v));
    assert_eq!(first_crossing_with(&v, &SketchCfg::default()), Some(0));
}

#[test]
fn check_reports_first_crossed_edge() {
    let v = pts(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (0.0, 5.0),
        (15.0, 5.0),
    ]);
    assert!(check(&v));
    assert_eq!(first_crossing_with(&v, &SketchCfg::default()), Some(1));
}

#[test]
fn check_skips_first_edge_when_closing() {
    let near = pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (50.0, 50.0), (5.0, -5.0)]);
    assert!(!check(&near));
    let far = pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (50.0, 50.0), (12.0, -5.0)]);
    assert!(check(&far));
    // A wider threshold exempts the second cursor too.
    let wide = SketchCfg {
        closing_threshold: 20.0,
        ..SketchCfg::default()
    };
    assert!(!check_with(&far, &wide));
}

#[test]
fn check_ring_drops_closing_vertex() {
    let open = pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
    let mut ring = open.clone();
    ring.push(open[0]);
    assert_eq!(check_ring(&ring), check(&open));
    assert!(check_ring(&ring));
    // Open input passes through.
    assert_eq!(check_ring(&open), check(&open));
}

#[test]
fn ring_checks_honour_the_closing_threshold() {
    let mut ring = pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (50.0, 50.0), (12.0, -5.0)]);
    ring.push(ring[0]);
    let wide = SketchCfg {
        closing_threshold: 20.0,
        ..SketchCfg::default()
    };
    assert_eq!(first_crossing_ring_with(&ring, &SketchCfg::default()), Some(0));
    assert!(check_ring_with(&ring, &SketchCfg::default()));
    assert_eq!(first_crossing_ring_with(&ring, &wide), None);
    assert!(!check_ring_with(&ring, &wide));
}

#[test]
fn collinear_overlap_falls_through() {
    // Zero cross products read as "not ccw" on both sides.
    let s = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    let t = Segment::new(vector![5.0, 0.0], vector![15.0, 0.0]);
    assert!(!segments_intersect(&s, &t));
    assert_eq!(orientation(s.a, s.b, t.a), Orientation::Collinear);
}

#[test]
fn proper_crossing_detected_both_ways() {
    let s = Segment::new(vector![0.0, 0.0], vector![10.0, 10.0]);
    let t = Segment::new(vector![0.0, 10.0], vector![10.0, 0.0]);
    assert!(segments_intersect(&s, &t));
    assert!(segments_intersect(&t, &s));
    let far = Segment::new(vector![20.0, 0.0], vector![30.0, 10.0]);
    assert!(!segments_intersect(&s, &far));
}

#[test]
fn orientation_signs() {
    let o = vector![0.0, 0.0];
    let x = vector![1.0, 0.0];
    let y = vector![0.0, 1.0];
    assert_eq!(orientation(o, x, y), Orientation::CounterClockwise);
    assert_eq!(orientation(o, y, x), Orientation::Clockwise);
    assert!(ccw(o, x, y));
    assert!(!ccw(o, y, x));
    assert!((cross(o, x, y) - 1.0).abs() < 1e-12);
}

#[test]
fn square_containment() {
    let sq = square();
    assert!(sq.contains(vector![5.0, 5.0]));
    assert!(!sq.contains(vector![15.0, 5.0]));
    assert!(!sq.contains(vector![5.0, -1.0]));
    assert!(contains(&sq, vector![0.5, 9.5]));
}

#[test]
fn boundary_points_are_outside() {
    let sq = square();
    for p in [
        vector![10.0, 5.0],
        vector![0.0, 0.0],
        vector![5.0, 10.0],
        vector![0.0, 7.0],
    ] {
        assert!(sq.on_boundary(p));
        assert!(!sq.contains(p));
        assert!(!sq.contains_with(p, FillRule::NonZero));
    }
}

#[test]
fn concave_notch_is_outside() {
    let u = Polygon::new(pts(&[
        (0.0, 0.0),
        (30.0, 0.0),
        (30.0, 30.0),
        (20.0, 30.0),
        (20.0, 10.0),
        (10.0, 10.0),
        (10.0, 30.0),
        (0.0, 30.0),
    ]))
    .unwrap();
    assert!(!u.contains(vector![15.0, 20.0]));
    assert!(u.contains(vector![5.0, 20.0]));
    assert!(u.contains(vector![25.0, 20.0]));
    assert!(u.contains(vector![15.0, 5.0]));
    // Ray from (5,10) passes through the notch vertices at y = 10.
    assert!(u.contains(vector![5.0, 10.0]));
}

#[test]
fn bowtie_lobes_and_wedges() {
    let bow = Polygon::new(pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)])).unwrap();
    assert!(bow.contains(vector![2.0, 5.0]));
    assert!(bow.contains(vector![8.0, 5.0]));
    assert!(!bow.contains(vector![5.0, 8.0]));
    assert!(bow.contains_with(vector![2.0, 5.0], FillRule::NonZero));
    assert_eq!(bow.winding_number(vector![2.0, 5.0]).abs(), 1);
    assert_eq!(bow.winding_order(), Orientation::Collinear);
}

#[test]
fn fill_rules_differ_on_double_wound_ring() {
    let twice = Polygon::new(pts(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]))
    .unwrap();
    let p = vector![5.0, 5.0];
    assert_eq!(twice.winding_number(p), 2);
    assert!(!twice.contains_with(p, FillRule::EvenOdd));
    assert!(twice.contains_with(p, FillRule::NonZero));
}

#[test]
fn polygon_construction() {
    assert!(Polygon::new(pts(&[(0.0, 0.0), (1.0, 0.0)])).is_none());
    let ring = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    let p = Polygon::from_ring(&ring).unwrap();
    assert_eq!(p, square());
    assert_eq!(p.len(), 4);
    assert_eq!(p.edges().count(), 4);
    assert_eq!(p.edge(3), Segment::new(vector![0.0, 10.0], vector![0.0, 0.0]));
    assert!((p.signed_area() - 100.0).abs() < 1e-12);
    assert_eq!(p.winding_order(), Orientation::CounterClockwise);
    let b = p.bounds();
    assert_eq!((b.min, b.max), (vector![0.0, 0.0], vector![10.0, 10.0]));
    // A closed triangle ring with its repeat is still a triangle.
    let tri = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
    assert_eq!(Polygon::from_ring(&tri).map(|p| p.len()), Some(3));
}

#[test]
fn raw_slice_containment_tolerates_short_input() {
    let v = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(!contains_points(&v, vector![5.0, 0.0]));
    assert!(!contains_points(&[], vector![0.0, 0.0]));
    assert!(contains_points(square().vertices(), vector![5.0, 5.0]));
}

#[test]
fn raw_slice_containment_matches_polygon() {
    for index in 0..16 {
        let poly = draw_star(RadialCfg::default(), ReplayToken { seed: 3, index }).unwrap();
        for x in (-130..=130).step_by(13) {
            for y in (-130..=130).step_by(13) {
                let p = vector![x as f64, y as f64];
                assert_eq!(contains_points(poly.vertices(), p), poly.contains(p));
            }
        }
        // Vertices are boundary points on both paths.
        assert!(!contains_points(poly.vertices(), poly.vertices()[0]));
    }
}

#[test]
fn convex_random_prefixes_and_closure_never_cross() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 20 },
        ..RadialCfg::default()
    };
    for index in 0..64 {
        let poly = draw_convex(cfg, ReplayToken { seed: 2024, index }).unwrap();
        let v = poly.vertices();
        for k in 3..=v.len() {
            assert!(!check(&v[..k]), "seed index {index}, prefix {k}");
        }
        // Cursor back on the first vertex closes the ring.
        let mut closed = v.to_vec();
        closed.push(v[0]);
        assert!(!check(&closed), "seed index {index}, closing");
    }
}

fn arb_point() -> impl Strategy<Value = Point2D> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| vector![x, y])
}

proptest! {
    #[test]
    fn triangles_never_self_intersect(a in arb_point(), b in arb_point(), c in arb_point()) {
        prop_assert!(!check(&[a, b, c]));
    }

    #[test]
    fn crossing_back_over_an_edge_is_reported(index in 0u64..10_000) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 4, max: 16 },
            ..RadialCfg::default()
        };
        let poly = draw_convex(cfg, ReplayToken { seed: 11, index }).unwrap();
        let v = poly.vertices();
        prop_assume!(v.len() >= 4);
        // Aim from the last vertex through the midpoint of edge 1 and beyond.
        let last = v[v.len() - 1];
        let mid = (v[1] + v[2]) * 0.5;
        let mut trail = v.to_vec();
        trail.push(last + (mid - last) * 2.0);
        prop_assert!(check(&trail));
    }

    #[test]
    fn closing_cursor_never_hits_first_edge(
        head in prop::collection::vec(arb_point(), 2..10),
        r in 0.0f64..9.9,
        theta in 0.0f64..std::f64::consts::TAU,
    ) {
        let mut trail = head.clone();
        trail.push(head[0] + vector![theta.cos(), theta.sin()] * r);
        prop_assert_ne!(first_crossing_with(&trail, &SketchCfg::default()), Some(0));
    }

    #[test]
    fn containment_is_deterministic(index in 0u64..1_000, p in arb_point()) {
        let poly = draw_star(RadialCfg::default(), ReplayToken { seed: 5, index }).unwrap();
        prop_assert_eq!(poly.contains(p), poly.contains(p));
        prop_assert_eq!(contains(&poly, p), poly.contains(p));
    }

    #[test]
    fn fill_rules_agree_on_simple_rings(index in 0u64..1_000, p in arb_point()) {
        let poly = draw_star(RadialCfg::default(), ReplayToken { seed: 6, index }).unwrap();
        prop_assert_eq!(
            poly.contains_with(p, FillRule::EvenOdd),
            poly.contains_with(p, FillRule::NonZero)
        );
    }
}
