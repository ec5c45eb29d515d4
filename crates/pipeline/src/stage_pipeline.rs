//! The StagePipeline orchestrates the recommendation stages.
//!
//! This module provides the main StagePipeline struct that chains
//! stages together using the builder pattern.

use crate::assessment::Assessment;
use crate::signals::{normalize_signals, NormalizedSignals};
use crate::stages::{ConfidenceScorer, LogisticsMapper, MinimumTierEnforcer, TierEstimator};
use crate::traits::Stage;
use domain::{AnalyzeRequest, Recommendation};

/// Chains multiple stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(TierEstimator::default())
///     .add_stage(MinimumTierEnforcer)
///     .add_stage(LogisticsMapper)
///     .add_stage(ConfidenceScorer::default());
///
/// let recommendation = pipeline.recommend(&request);
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create a new empty StagePipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The production pipeline: tier estimate, minimum tier, logistics,
    /// confidence. Reason order depends on this order.
    pub fn standard() -> Self {
        Self::new()
            .add_stage(TierEstimator::default())
            .add_stage(MinimumTierEnforcer)
            .add_stage(LogisticsMapper)
            .add_stage(ConfidenceScorer::default())
    }

    /// Add a stage to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `stage` - Any type implementing the Stage trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run all stages in sequence over already-normalized signals.
    pub fn apply(&self, signals: &NormalizedSignals) -> Assessment {
        let mut current = Assessment::new();
        for stage in &self.stages {
            current = stage.apply(current, signals);
            tracing::debug!(
                "Stage applied: {} (tier: {}, reasons: {})",
                stage.name(),
                current.service_type,
                current.reasons.len()
            );
        }
        current
    }

    /// Normalize a request, run every stage, and assemble the result.
    pub fn recommend(&self, request: &AnalyzeRequest) -> Recommendation {
        self.recommend_signals(&normalize_signals(request))
    }

    /// Run every stage over already-normalized signals and assemble the result.
    pub fn recommend_signals(&self, signals: &NormalizedSignals) -> Recommendation {
        self.apply(signals).into_recommendation()
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::standard()
    }
}
