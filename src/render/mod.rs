pub mod image;
pub mod pixel;

pub use self::image::{render_image, render_image_with_rng, save_png, to_rgba_image};
pub use pixel::{color_at, Rgba};
