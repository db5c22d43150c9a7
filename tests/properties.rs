//! Behavioral properties of the label search, checked over fixed shapes and
//! deterministically generated star-shaped polygons.

use polylabel::distance::signed_distance;
use polylabel::{
    polylabel, polylabel_default, polylabel_with, CellAction, Point2, PolylabelError,
    PolylabelOptions, PolylabelSearch, QueueOrder, StoragePrecision,
};

/// Simple xorshift for deterministic "random" values in [0, 1).
struct XorShift(u64);

impl XorShift {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Star-shaped (hence simple) polygon with `n` vertices around `center`.
fn star_polygon(n: usize, center: Point2<f64>, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = XorShift(seed);
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * 2.0 * std::f64::consts::PI;
            let radius = 3.0 + 7.0 * rng.next_f64();
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn test_polygons() -> Vec<Vec<Point2<f64>>> {
    let mut polygons = vec![
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ],
        // U shape
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ],
    ];
    for (i, n) in [5, 12, 40].into_iter().enumerate() {
        polygons.push(star_polygon(n, Point2::new(-20.0, 35.0), 0x9E37_79B9 + i as u64));
    }
    polygons
}

/// Self-intersecting five-vertex ring.
fn self_intersecting_sample() -> Vec<Point2<f64>> {
    vec![
        Point2::new(-70.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(-1.0, -10.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.2, 0.0),
    ]
}

/// Independent inside test: nonzero winding number.
fn winding_number(p: Point2<f64>, ring: &[Point2<f64>]) -> i32 {
    let is_left =
        |a: Point2<f64>, b: Point2<f64>| (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    let mut winding = 0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && is_left(a, b) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

fn bounds(ring: &[Point2<f64>]) -> (Point2<f64>, Point2<f64>) {
    ring.iter().fold((ring[0], ring[0]), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    })
}

fn sample_points(ring: &[Point2<f64>], count: usize, seed: u64) -> Vec<Point2<f64>> {
    let (lo, hi) = bounds(ring);
    let mut rng = XorShift(seed);
    (0..count)
        .map(|_| {
            Point2::new(
                lo.x - 1.0 + (hi.x - lo.x + 2.0) * rng.next_f64(),
                lo.y - 1.0 + (hi.y - lo.y + 2.0) * rng.next_f64(),
            )
        })
        .collect()
}

#[test]
fn test_repeated_runs_are_identical() {
    for ring in test_polygons() {
        for order in [QueueOrder::Fifo, QueueOrder::BestFirst] {
            let options = PolylabelOptions::with_precision(0.05).order(order);
            let first = polylabel_with(&ring, &options).unwrap();
            let second = polylabel_with(&ring, &options).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_sign_matches_winding_number() {
    for (k, ring) in test_polygons().iter().enumerate() {
        for p in sample_points(ring, 500, 17 + k as u64) {
            let d = signed_distance(p, ring);
            if d.abs() < 1e-9 {
                continue;
            }
            let inside = winding_number(p, ring) != 0;
            assert_eq!(d > 0.0, inside, "point {:?} distance {}", p, d);
        }
    }
}

#[test]
fn test_pruned_cells_respect_precision() {
    for ring in test_polygons() {
        for precision in [1.0, 0.1] {
            let options = PolylabelOptions::with_precision(precision).order(QueueOrder::Fifo);
            let mut pruned = 0;
            for step in PolylabelSearch::new(&ring, &options).unwrap() {
                if step.action == CellAction::Pruned {
                    pruned += 1;
                    assert!(step.cell.max_distance - step.best_distance <= precision);
                }
            }
            assert!(pruned > 0);
        }
    }
}

#[test]
fn test_no_sample_beats_answer_by_more_than_precision() {
    for (k, ring) in test_polygons().iter().enumerate() {
        for order in [QueueOrder::Fifo, QueueOrder::BestFirst] {
            let options = PolylabelOptions::with_precision(0.1).order(order);
            let label = polylabel_with(ring, &options).unwrap();
            assert!(label.distance > 0.0, "label should be inside: {:?}", label);

            for p in sample_points(ring, 400, 101 + k as u64) {
                assert!(signed_distance(p, ring) <= label.distance + 0.1 + 1e-9);
            }
        }
    }
}

#[test]
fn test_collinear_input_returns_min_corner() {
    let ring = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(2.0, 0.0),
    ];
    assert_eq!(polylabel_default(&ring).unwrap(), Point2::new(0.0, 0.0));
}

#[test]
fn test_square_example() {
    let ring = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    let p = polylabel(&ring, 1.0).unwrap();
    assert!(p.distance(Point2::new(5.0, 5.0)) <= 1.0);
    assert!(signed_distance(p, &ring) >= 4.0);
}

#[test]
fn test_self_intersecting_sample_finishes() {
    let ring = self_intersecting_sample();
    let p = polylabel_default(&ring).unwrap();
    assert!(p.is_finite());

    let reference = polylabel_with(&ring, &PolylabelOptions::reference()).unwrap();
    assert!(reference.point.is_finite());
    assert!(reference.probes > 0);
}

#[test]
fn test_tighter_precision_never_loses_distance() {
    let mut rings = test_polygons();
    rings.push(vec![
        Point2::new(0.0, 0.0),
        Point2::new(8.0, 0.0),
        Point2::new(8.0, 4.0),
        Point2::new(0.0, 4.0),
    ]);
    rings.push(self_intersecting_sample());

    for ring in &rings {
        for order in [QueueOrder::Fifo, QueueOrder::BestFirst] {
            for storage in [StoragePrecision::Native, StoragePrecision::Single] {
                let options = PolylabelOptions::default().order(order).storage(storage);
                let coarse = polylabel_with(ring, &options.precision(1.0)).unwrap();
                let fine = polylabel_with(ring, &options.precision(0.1)).unwrap();
                assert!(
                    fine.distance >= coarse.distance,
                    "{:?} {:?}: coarse {:?}, fine {:?}",
                    order,
                    storage,
                    coarse,
                    fine
                );
            }
        }
    }
}

#[test]
fn test_tighter_precision_stays_within_coarse_bound() {
    for ring in test_polygons() {
        let coarse = polylabel_with(&ring, &PolylabelOptions::with_precision(1.0)).unwrap();
        let fine = polylabel_with(&ring, &PolylabelOptions::with_precision(0.1)).unwrap();
        assert!(fine.distance >= coarse.distance - 0.1);
        assert!(fine.distance <= coarse.distance + 1.0);
    }
}

#[test]
fn test_single_storage_stays_close_to_native() {
    for ring in test_polygons() {
        let native = polylabel_with(
            &ring,
            &PolylabelOptions::with_precision(0.1).storage(StoragePrecision::Native),
        )
        .unwrap();
        let single = polylabel_with(
            &ring,
            &PolylabelOptions::with_precision(0.1).storage(StoragePrecision::Single),
        )
        .unwrap();
        assert!((native.distance - single.distance).abs() <= 0.1 + 1e-4);
    }
}

#[test]
fn test_errors() {
    let empty: Vec<Point2<f64>> = Vec::new();
    assert_eq!(polylabel_default(&empty), Err(PolylabelError::EmptyPolygon));

    let ring = test_polygons().remove(0);
    assert!(matches!(
        polylabel(&ring, 0.0),
        Err(PolylabelError::InvalidPrecision { .. })
    ));

    let with_nan = vec![Point2::new(0.0, 0.0), Point2::new(f64::NAN, 1.0)];
    assert_eq!(
        polylabel_default(&with_nan),
        Err(PolylabelError::NonFiniteCoordinate { index: 1 })
    );
}
