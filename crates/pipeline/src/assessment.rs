//! Working value threaded through the pipeline stages.

use crate::stages::confidence::BASE_CONFIDENCE;
use crate::stages::logistics::DEFAULT_LOGISTICS;
use domain::{LogisticsEstimate, ReasonCode, Recommendation, ServiceTier};

/// Severity level every request starts from (maps to light)
pub const BASE_LEVEL: u8 = 1;

/// Partial recommendation as it moves through the stages.
///
/// Reasons are appended in the order the rules fire and are never
/// reordered or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub suggest_level: u8,
    pub service_type: ServiceTier,
    pub logistics: LogisticsEstimate,
    pub confidence: f64,
    pub reasons: Vec<ReasonCode>,
}

impl Assessment {
    /// Create an Assessment with default values.
    pub fn new() -> Self {
        Self {
            suggest_level: BASE_LEVEL,
            service_type: ServiceTier::from_level(BASE_LEVEL),
            logistics: DEFAULT_LOGISTICS,
            confidence: BASE_CONFIDENCE,
            reasons: Vec::new(),
        }
    }

    /// Raise the severity level to at least `level` and record why.
    ///
    /// The level never decreases.
    pub fn raise_level(&mut self, level: u8, reason: ReasonCode) {
        self.suggest_level = self.suggest_level.max(level);
        self.reasons.push(reason);
    }

    /// Assemble the final Recommendation.
    pub fn into_recommendation(self) -> Recommendation {
        Recommendation {
            service_type: self.service_type,
            truck_size: self.logistics.truck_size,
            workers: self.logistics.workers,
            estimated_minutes: self.logistics.estimated_minutes,
            reasons: self.reasons,
            confidence: self.confidence,
            recommended_services: self.service_type.escalation_path(),
        }
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}
