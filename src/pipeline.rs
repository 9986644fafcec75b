pub mod batch;
pub mod plan;
