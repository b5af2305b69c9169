pub mod math;
pub mod activation;
pub mod network;
pub mod config;
pub mod render;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::random::{fill_random, gaussian_sample, normal_sample, random_matrix};
pub use activation::activation::ActivationFunction;
pub use network::{create_model, forward, Model};
pub use config::ArtConfig;
pub use render::{color_at, render_image, render_image_with_rng, save_png, to_rgba_image, Rgba};
pub use error::{ArtError, ArtResult};
