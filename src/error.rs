use thiserror::Error;

/// Failure taxonomy for document palette analysis.
///
/// Only [`AnalysisError::InvalidArgument`] is surfaced to callers as a
/// rejected request. The other kinds are recovered close to where they
/// occur: a malformed colorspace declaration is skipped by the scanner,
/// and a page whose clustering fails simply contributes no clusters to
/// the document aggregate.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("resource parse failure: {0}")]
    ResourceParse(String),

    #[error("clustering failed: {0}")]
    ClusteringFailed(String),
}
