//! Palette extraction: quantization, colorspace scanning, aggregation
//! and the per-document pipeline.

pub mod aggregate;
pub mod colorspace;
mod kmeans;
pub mod pipeline;
pub mod quantizer;

pub use aggregate::aggregate;
pub use colorspace::scan;
pub use pipeline::analyze_document;
pub use quantizer::{cluster_count, quantize};
