mod engine;
mod preferences;
mod registry;
pub mod sanitizer;

pub use engine::*;
pub use preferences::*;
pub use registry::*;
