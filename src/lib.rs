pub mod banner_pipeline;
pub mod logger;
