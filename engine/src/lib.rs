// Engine library root: the upload-to-RenderModel pipeline.

pub mod data;
pub mod error;
pub mod metrics;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::build_dashboard;
