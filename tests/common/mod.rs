#![allow(dead_code)]

use ndarray::Array2;

/// Pearson correlation of two equally shaped arrays.
pub fn correlation(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "correlation needs equal shapes");
    let ma = a.mean().unwrap_or(0.0);
    let mb = b.mean().unwrap_or(0.0);
    let mut num = 0.0;
    let mut va = 0.0;
    let mut vb = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        num += (x - ma) * (y - mb);
        va += (x - ma) * (x - ma);
        vb += (y - mb) * (y - mb);
    }
    num / (va * vb).sqrt()
}

/// Position and value of the largest element.
pub fn argmax(a: &Array2<f64>) -> ((usize, usize), f64) {
    let mut best = ((0, 0), f64::NEG_INFINITY);
    for (idx, &v) in a.indexed_iter() {
        if v > best.1 {
            best = (idx, v);
        }
    }
    best
}

/// Values of pixels whose distance from the image centre satisfies `keep`.
pub fn ring<F: Fn(f64) -> bool>(a: &Array2<f64>, keep: F) -> Vec<f64> {
    let c = (a.nrows() as f64 - 1.0) / 2.0;
    a.indexed_iter()
        .filter(|((i, j), _)| keep((*i as f64 - c).hypot(*j as f64 - c)))
        .map(|(_, &v)| v)
        .collect()
}
