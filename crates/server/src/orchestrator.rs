//! # Recommendation Engine
//!
//! This module coordinates a single recommendation:
//! 1. Normalize the request signals
//! 2. Run the stage pipeline (tier, minimum tier, logistics, confidence)
//! 3. Assemble the Recommendation
//!
//! The engine holds no per-request state. Clones share one pipeline, so a
//! single engine serves every HTTP handler and batch worker.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use domain::{AnalyzeRequest, Recommendation};
use pipeline::{normalize_signals, StagePipeline};

/// Entry point that turns analyze requests into recommendations
#[derive(Clone)]
pub struct RecommendationEngine {
    pipeline: Arc<StagePipeline>,
}

impl RecommendationEngine {
    /// Create an engine running the standard pipeline
    pub fn new() -> Self {
        Self::with_pipeline(StagePipeline::standard())
    }

    /// Create an engine around a custom pipeline
    pub fn with_pipeline(pipeline: StagePipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Main entry point: recommend a service for one request
    pub fn recommend(&self, request: &AnalyzeRequest) -> Recommendation {
        let start_time = Instant::now();

        let signals = normalize_signals(request);
        debug!(
            "Normalized signals: mode={}, place_size='{}', floors_total={}, elevator={}, heavy={}, images={}",
            signals.mode,
            signals.place_size,
            signals.floors_total,
            signals.has_elevator,
            signals.add_heavy,
            signals.num_images
        );

        let recommendation = self.pipeline.recommend_signals(&signals);

        info!(
            "Recommended {} service ({} truck, {} workers, {} min, confidence {:.2}) in {:.2?}",
            recommendation.service_type,
            recommendation.truck_size,
            recommendation.workers,
            recommendation.estimated_minutes,
            recommendation.confidence,
            start_time.elapsed()
        );
        recommendation
    }

    /// Recommend for many requests in parallel; output order matches input
    pub fn recommend_batch(&self, requests: &[AnalyzeRequest]) -> Vec<Recommendation> {
        let start_time = Instant::now();
        let recommendations: Vec<Recommendation> = requests
            .par_iter()
            .map(|request| self.recommend(request))
            .collect();

        info!(
            "Evaluated batch of {} requests in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
