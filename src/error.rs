//! Typed errors returned by the rule evaluators
//!
//! Almost everything in the engine degrades silently (missing catalog data,
//! odd dates). These variants are the contract violations the caller controls.

/// Errors from the pure evaluation core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Growth stage asked for a plant that is still only planned
    #[error("{plant} has not been planted yet, so it has no growth timeline")]
    NotPlanted { plant: String },

    /// Milestone toggle addressed an index past the end of the table
    #[error("milestone index {index} is out of range ({len} milestones)")]
    MilestoneOutOfRange { index: usize, len: usize },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
