//! Stage implementations for the recommendation pipeline.
//!
//! This module contains the concrete stages that are composed into a
//! StagePipeline. Their order is fixed by `StagePipeline::standard`.

pub mod confidence;
pub mod logistics;
pub mod minimum_tier;
pub mod tier_estimate;

// Re-export for convenience
pub use confidence::ConfidenceScorer;
pub use logistics::LogisticsMapper;
pub use minimum_tier::MinimumTierEnforcer;
pub use tier_estimate::TierEstimator;
