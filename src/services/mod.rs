pub mod input_collector;
pub mod request_builder;
pub mod result_renderer;

pub use input_collector::InputCollector;
pub use request_builder::build;
pub use result_renderer::{render, render_validation};
