pub mod classifier;
pub mod constants;
pub mod integrator;
pub mod landmarks;
pub mod pipeline;
pub mod resolver;
pub mod stabilizer;
pub mod tracker;
pub mod transform;

pub use classifier::*;
pub use integrator::*;
pub use landmarks::*;
pub use pipeline::*;
pub use resolver::*;
pub use stabilizer::*;
pub use tracker::*;
pub use transform::*;
