//! Core traits for the recommendation pipeline.
//!
//! This module defines the Stage trait that lets the tier, logistics and
//! confidence rules be composed into a StagePipeline.

use crate::assessment::Assessment;
use crate::signals::NormalizedSignals;

/// One step of the recommendation pipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across request handlers
/// - Stages take ownership of the Assessment and return the updated value
/// - Stages cannot fail: unknown inputs fall back to documented defaults
pub trait Stage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to the running assessment.
    ///
    /// # Arguments
    /// * `assessment` - The assessment built so far (takes ownership)
    /// * `signals` - Normalized request signals
    fn apply(&self, assessment: Assessment, signals: &NormalizedSignals) -> Assessment;
}
