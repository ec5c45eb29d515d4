//! Stage that scores confidence from the amount of visual evidence.

use crate::assessment::Assessment;
use crate::signals::NormalizedSignals;
use crate::traits::Stage;

/// Confidence with fewer images than the lowest band
pub const BASE_CONFIDENCE: f64 = 0.70;

/// Scores confidence by image count.
///
/// Bands are (min_images, confidence) pairs checked from the highest
/// threshold down. With the default bands:
/// - 10+ images: 0.85
/// - 5-9 images: 0.78
/// - fewer: 0.70
pub struct ConfidenceScorer {
    bands: Vec<(usize, f64)>,
}

impl ConfidenceScorer {
    /// Create a ConfidenceScorer from (min_images, confidence) bands.
    ///
    /// Bands are sorted by threshold so lookup always picks the highest
    /// band reached.
    pub fn new(mut bands: Vec<(usize, f64)>) -> Self {
        bands.sort_by(|a, b| b.0.cmp(&a.0));
        Self { bands }
    }

    pub fn score(&self, num_images: usize) -> f64 {
        self.bands
            .iter()
            .find(|(min_images, _)| num_images >= *min_images)
            .map(|(_, confidence)| *confidence)
            .unwrap_or(BASE_CONFIDENCE)
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(vec![(10, 0.85), (5, 0.78)])
    }
}

impl Stage for ConfidenceScorer {
    fn name(&self) -> &str {
        "ConfidenceScorer"
    }

    fn apply(&self, mut assessment: Assessment, signals: &NormalizedSignals) -> Assessment {
        assessment.confidence = self.score(signals.num_images);
        assessment
    }
}
