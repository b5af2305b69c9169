use crate::error::ArtResult;
use crate::math::matrix::Matrix;
use crate::network::model::Model;

/// Evaluates the network at `(x, y)`.
///
/// Returns a `(3, 1)` matrix of sigmoid activations, read as raw R, G, B.
pub fn forward(model: &Model, x: f64, y: f64) -> ArtResult<Matrix> {
    let input = Matrix::column(&[x, y, 1.0]);

    let mut out = model.w_in.multiply(&input)?.tanh();
    for layer in &model.hidden {
        out = layer.multiply(&out)?.tanh();
    }

    Ok(model.w_out.multiply(&out)?.sigmoid())
}
