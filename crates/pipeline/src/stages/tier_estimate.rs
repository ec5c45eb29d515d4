//! Stage that estimates the service tier from request signals.
//!
//! Each rule can only raise the severity level. Rules run in a fixed
//! order (heavy items, stairs, image volume) and that order is the
//! order of the emitted reason codes.

use crate::assessment::Assessment;
use crate::signals::NormalizedSignals;
use crate::traits::Stage;
use domain::{ReasonCode, ServiceTier};
use tracing::debug;

/// Severity level that maps to medium
pub const MEDIUM_LEVEL: u8 = 2;
/// Severity level that maps to heavy
pub const HEAVY_LEVEL: u8 = 3;

/// Derives the severity level and tier.
///
/// ## Algorithm
/// 1. Heavy items: level >= 3
/// 2. No elevator and at least `multi_floor_threshold` floors: level >= 2
/// 3. At least `high_volume_images` images: level >= 3,
///    otherwise at least `medium_volume_images`: level >= 2
/// 4. Map level to tier
pub struct TierEstimator {
    multi_floor_threshold: u32,
    high_volume_images: usize,
    medium_volume_images: usize,
}

impl TierEstimator {
    /// Create a TierEstimator with custom thresholds.
    ///
    /// # Arguments
    /// * `multi_floor_threshold` - Floors without an elevator before escalation (typically 3)
    /// * `high_volume_images` - Image count that forces heavy (typically 12)
    /// * `medium_volume_images` - Image count that forces medium (typically 6)
    pub fn new(
        multi_floor_threshold: u32,
        high_volume_images: usize,
        medium_volume_images: usize,
    ) -> Self {
        Self {
            multi_floor_threshold,
            high_volume_images,
            medium_volume_images,
        }
    }
}

impl Default for TierEstimator {
    fn default() -> Self {
        Self::new(3, 12, 6)
    }
}

impl Stage for TierEstimator {
    fn name(&self) -> &str {
        "TierEstimator"
    }

    fn apply(&self, mut assessment: Assessment, signals: &NormalizedSignals) -> Assessment {
        if signals.add_heavy {
            assessment.raise_level(HEAVY_LEVEL, ReasonCode::AddHeavyContext);
        }

        if !signals.has_elevator && signals.floors_total >= self.multi_floor_threshold {
            assessment.raise_level(MEDIUM_LEVEL, ReasonCode::MultiFloorNoElevator);
        }

        if signals.num_images >= self.high_volume_images {
            assessment.raise_level(HEAVY_LEVEL, ReasonCode::ManyImagesHighVolume);
        } else if signals.num_images >= self.medium_volume_images {
            assessment.raise_level(MEDIUM_LEVEL, ReasonCode::MediumImagesVolume);
        }

        assessment.service_type = ServiceTier::from_level(assessment.suggest_level);
        debug!(
            "Estimated level {} -> {}",
            assessment.suggest_level, assessment.service_type
        );
        assessment
    }
}
