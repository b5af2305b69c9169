pub mod forward;
pub mod model;

pub use forward::forward;
pub use model::{create_model, Model};
