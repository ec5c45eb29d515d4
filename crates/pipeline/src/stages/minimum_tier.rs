//! Stage that enforces a minimum tier for large properties.
//!
//! Big apartments, villas and commercial units always need at least a
//! medium crew, whatever the media suggested.

use crate::assessment::Assessment;
use crate::signals::NormalizedSignals;
use crate::traits::Stage;
use domain::{ReasonCode, ServiceTier};
use tracing::debug;

/// Minimum tier for a (lower-cased) size code.
///
/// Prefix checks run in sequence and a later match overrides an earlier
/// one. Unrecognized codes have no minimum (light).
pub fn minimum_tier_for(place_size: &str) -> ServiceTier {
    let mut minimum = ServiceTier::Light;
    if place_size.starts_with("s3_") || place_size.starts_with("s4_") {
        minimum = ServiceTier::Medium;
    }
    if place_size.starts_with("villa_250_350") {
        minimum = ServiceTier::Medium;
    }
    if place_size.starts_with("villa_350_500") || place_size.starts_with("comm_150_250") {
        minimum = ServiceTier::Heavy;
    }
    if place_size.starts_with("comm_100_150") {
        minimum = ServiceTier::Medium;
    }
    minimum
}

/// Raises the estimated tier to the size-derived minimum.
///
/// ## Algorithm
/// 1. Look up the minimum tier for the size code
/// 2. If the current tier is lower, replace it and record
///    `vision_place_size_minimum`
pub struct MinimumTierEnforcer;

impl Stage for MinimumTierEnforcer {
    fn name(&self) -> &str {
        "MinimumTierEnforcer"
    }

    fn apply(&self, mut assessment: Assessment, signals: &NormalizedSignals) -> Assessment {
        let minimum = minimum_tier_for(&signals.place_size);
        if assessment.service_type < minimum {
            debug!(
                "Raising {} to {} for place size {}",
                assessment.service_type, minimum, signals.place_size
            );
            assessment.service_type = minimum;
            assessment.reasons.push(ReasonCode::PlaceSizeMinimum);
        }
        assessment
    }
}
