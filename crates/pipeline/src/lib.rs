//! Recommendation pipeline for moving-service bookings.
//!
//! This crate provides:
//! - Signal normalization for raw analyze requests
//! - Stage trait and implementations for tier, logistics and confidence
//! - StagePipeline for composing stages
//!
//! ## Architecture
//! A request is processed in stages:
//! 1. Signals are normalized (defaults for missing fields)
//! 2. TierEstimator raises the severity level from heavy items, stairs
//!    and image volume
//! 3. MinimumTierEnforcer lifts the tier to the size-derived floor
//! 4. LogisticsMapper picks truck, crew and duration
//! 5. ConfidenceScorer scores the amount of visual evidence
//!
//! Every stage is pure, so a pipeline can be shared freely across threads.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::StagePipeline;
//!
//! let pipeline = StagePipeline::standard();
//! let recommendation = pipeline.recommend(&request);
//! ```

pub mod assessment;
pub mod signals;
pub mod stage_pipeline;
pub mod stages;
pub mod traits;

// Re-export main types
pub use assessment::Assessment;
pub use signals::{normalize_signals, NormalizedSignals};
pub use stage_pipeline::StagePipeline;
pub use traits::Stage;
