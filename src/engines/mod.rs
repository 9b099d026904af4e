pub mod aggregate;
pub mod derive;
pub mod pipeline;
pub mod selection;

pub use pipeline::{Pipeline, RenderPass};
