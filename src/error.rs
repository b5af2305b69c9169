use thiserror::Error;

pub type ArtResult<T> = Result<T, ArtError>;

#[derive(Debug, Error)]
pub enum ArtError {
    /// Inner dimensions of a matrix product disagree.
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The network produced something other than a `(3, 1)` colour column.
    #[error("network output is {}x{}, expected 3x1", shape.0, shape.1)]
    OutputShape { shape: (usize, usize) },

    #[error("index ({row}, {col}) is outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A pixel buffer whose length does not match `width * height * 4`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
