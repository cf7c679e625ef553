/// Given samples `y = f(x)`, estimate the `x` at which `f(x) = ya` by
/// Lagrange interpolation of the inverse function.
pub fn inverse_lagrange(x: &[f64], y: &[f64], ya: f64) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let mut total = 0.0;
    for i in 0..x.len() {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for j in 0..x.len() {
            if j != i {
                numer *= ya - y[j];
                denom *= y[i] - y[j];
            }
        }
        total += numer * x[i] / denom;
    }
    total
}

/// Make a sequence of angles that wraps past 360° monotonically increasing.
pub fn unwrap_angles(angles: &[f64]) -> Vec<f64> {
    let mut out = angles.to_vec();
    for i in 1..out.len() {
        if out[i] < out[i - 1] {
            out[i] += 360.0;
        }
    }
    out
}
