mod common;

use common::{argmax, correlation, ring};
use drt_core::{
    back_scan_fast, phantom, reconstruct_fast, reconstruct_fast_expanded, scan_fast,
    scan_fast_expanded, DrtError, Engine, Pipeline, Radon, ReconConfig,
};
use ndarray::Array2;

#[test]
fn point_source_reconstructs_to_a_peak() {
    let _ = env_logger::builder().is_test(true).try_init();
    let n = 16;
    let image = phantom::point(n, 8, 8);
    let restored = reconstruct_fast(&scan_fast(&image).unwrap()).unwrap();
    assert_eq!(restored.dim(), (n, n));

    let (at, peak) = argmax(&restored);
    assert_eq!(at, (8, 8));
    assert!(peak > 0.5, "peak {peak}");
    for ((i, j), &v) in restored.indexed_iter() {
        if (i, j) != at {
            assert!(v.abs() < 0.1 * peak, "pixel ({i}, {j}) = {v} vs peak {peak}");
        }
    }
}

#[test]
fn disk_interior_separates_from_background() {
    let _ = env_logger::builder().is_test(true).try_init();
    let image = phantom::disk(16, 0.6);
    let restored = reconstruct_fast(&scan_fast(&image).unwrap()).unwrap();

    let inside = ring(&restored, |r| r <= 2.5);
    let outside = ring(&restored, |r| r >= 6.5);
    let inside_min = inside.iter().cloned().fold(f64::INFINITY, f64::min);
    let outside_max = outside.iter().map(|v| v.abs()).fold(0.0, f64::max);
    assert!(inside_min > 0.6, "inside min {inside_min}");
    assert!(outside_max < 0.15, "outside max {outside_max}");
    assert!(correlation(&restored, &image) > 0.98);
}

#[test]
fn expanded_reconstruction_keeps_the_peak_in_place() {
    let image = phantom::point(16, 8, 8);
    let d = scan_fast_expanded(&image, 2).unwrap();
    assert_eq!(d.size(), 16);
    let restored = reconstruct_fast_expanded(&d, 2).unwrap();
    assert_eq!(restored.dim(), (16, 16));
    assert_eq!(argmax(&restored).0, (8, 8));
}

#[test]
fn structure_sizes_follow_the_image() {
    for n in [2usize, 4, 8, 32] {
        let d = scan_fast(&Array2::zeros((n, n))).unwrap();
        assert_eq!(d.size(), n);
        for q in d.quadrants() {
            assert_eq!(q.dim(), (2 * n, n));
        }
        assert_eq!(back_scan_fast(&d).unwrap().dim(), (n, n));
    }
    assert_eq!(Radon::default().size(), 0);
}

#[test]
fn bad_sizes_are_rejected_everywhere() {
    for shape in [(12, 12), (8, 16), (1, 1), (0, 0)] {
        let image = Array2::zeros(shape);
        assert!(scan_fast(&image).is_err(), "accepted {shape:?}");
    }
    assert!(matches!(
        scan_fast(&Array2::zeros((12, 12))),
        Err(DrtError::NotPowerOfTwo { value: 12, .. })
    ));
    assert!(matches!(
        scan_fast(&Array2::zeros((8, 16))),
        Err(DrtError::NotSquare { rows: 8, cols: 16 })
    ));
    assert!(Radon::new(6).is_err());
    assert!(reconstruct_fast(&Radon::default()).is_err());
}

#[test]
fn pipeline_runs_both_engines() {
    let _ = env_logger::builder().is_test(true).try_init();
    let image = phantom::gaussian(16, 2.0);
    for engine in [Engine::Fast, Engine::Slow] {
        let pipeline = Pipeline::new(ReconConfig {
            engine,
            ..Default::default()
        })
        .unwrap();
        let restored = pipeline.run(&image).unwrap();
        assert_eq!(restored.dim(), (16, 16));
        let c = correlation(&restored, &image);
        assert!(c > 0.98, "{engine:?} correlation {c}");
    }
}
