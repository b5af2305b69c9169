use rand::Rng;

use crate::config::ArtConfig;
use crate::math::matrix::Matrix;
use crate::math::random::random_matrix;

/// Spread of every weight matrix in a freshly built model.
pub const WEIGHT_STD_DEV: f64 = 0.8;

/// The weights of one untrained coordinate-to-colour network.
///
/// `w_in` lifts the augmented coordinate `(x, y, 1)` to `input` dimensions,
/// `hidden` is applied in index order, and `w_out` projects back to R, G, B.
#[derive(Debug, Clone)]
pub struct Model {
    /// Shape `(input, 3)`.
    pub w_in: Matrix,
    /// Each of shape `(input, input)`.
    pub hidden: Vec<Matrix>,
    /// Shape `(3, input)`. Any other row count is rejected by `color_at`.
    pub w_out: Matrix,
}

/// Samples every weight IID from N(0, 0.8).
pub fn create_model<R: Rng + ?Sized>(config: &ArtConfig, rng: &mut R) -> Model {
    let w_in = random_matrix(rng, config.input, 3, None, Some(WEIGHT_STD_DEV));
    let hidden = (0..config.hidden)
        .map(|_| random_matrix(rng, config.input, config.input, None, Some(WEIGHT_STD_DEV)))
        .collect();
    let w_out = random_matrix(rng, 3, config.input, None, Some(WEIGHT_STD_DEV));

    tracing::debug!(input = config.input, hidden = config.hidden, "built model");

    Model { w_in, hidden, w_out }
}
