use rand::Rng;

use crate::math::matrix::Matrix;

/// Spread used by `random_matrix` when the caller gives none.
pub const DEFAULT_STD_DEV: f64 = 0.08;

/// Samples a single value from N(0, 1) using the Marsaglia polar method.
///
/// Pairs `(u, v)` uniform on [-1, 1) are rejected until they fall inside the
/// unit disc (excluding the origin). The loop has no iteration cap.
pub fn gaussian_sample<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen_range(-1.0..1.0);
        let v: f64 = rng.gen_range(-1.0..1.0);
        let r = u * u + v * v;
        if r > 0.0 && r <= 1.0 {
            return u * (-2.0 * r.ln() / r).sqrt();
        }
    }
}

pub fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    mean + gaussian_sample(rng) * std_dev
}

/// Overwrites every element of `matrix` with an independent N(mean, std_dev) draw.
pub fn fill_random<R: Rng + ?Sized>(rng: &mut R, matrix: &mut Matrix, mean: f64, std_dev: f64) {
    for value in matrix.data.iter_mut() {
        *value = normal_sample(rng, mean, std_dev);
    }
}

/// Allocates a `rows x cols` matrix of Gaussian samples.
///
/// `mean` defaults to `0.0` and `std_dev` to [`DEFAULT_STD_DEV`] when `None`.
/// An explicit `Some(0.0)` is kept as given.
pub fn random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    mean: Option<f64>,
    std_dev: Option<f64>,
) -> Matrix {
    let mut res = Matrix::zeros(rows, cols);
    fill_random(
        rng,
        &mut res,
        mean.unwrap_or(0.0),
        std_dev.unwrap_or(DEFAULT_STD_DEV),
    );
    res
}
