//! Signal normalizer.
//!
//! Turns a raw AnalyzeRequest into the handful of working values the
//! stages read. Missing fields are never an error: they collapse to
//! the defaults the booking application assumes.

use domain::AnalyzeRequest;

/// Normalized view of a request, built once and shared by every stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSignals {
    /// Media type as sent by the caller
    pub mode: String,
    /// Lower-cased size code, empty when absent
    pub place_size: String,
    pub add_heavy: bool,
    pub has_elevator: bool,
    /// pickup_floor + destination_floor
    pub floors_total: u32,
    pub num_images: usize,
}

impl NormalizedSignals {
    /// True when the crew has to carry everything up or down stairs
    pub fn stairs_only(&self) -> bool {
        !self.has_elevator && self.floors_total > 0
    }
}

/// Build NormalizedSignals from a request
///
/// - place_size is lower-cased
/// - 0/absent flags are false, any other integer is true
/// - missing floors count as ground floor
/// - only the number of image references is kept
pub fn normalize_signals(request: &AnalyzeRequest) -> NormalizedSignals {
    let context = &request.context;

    let place_size = context
        .place_size
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let floors_total = context
        .pickup_floor
        .unwrap_or(0)
        .saturating_add(context.destination_floor.unwrap_or(0));

    NormalizedSignals {
        mode: request.mode.clone(),
        place_size,
        add_heavy: flag(context.add_heavy),
        has_elevator: flag(context.has_elevator),
        floors_total,
        num_images: request.image_urls.len(),
    }
}

fn flag(value: Option<i64>) -> bool {
    value.is_some_and(|v| v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Context;

    #[test]
    fn test_empty_context_defaults() {
        let request = AnalyzeRequest::new("video", Context::default());
        let signals = normalize_signals(&request);

        assert_eq!(signals.mode, "video");
        assert_eq!(signals.place_size, "");
        assert!(!signals.add_heavy);
        assert!(!signals.has_elevator);
        assert_eq!(signals.floors_total, 0);
        assert_eq!(signals.num_images, 0);
        assert!(!signals.stairs_only());
    }

    #[test]
    fn test_fields_are_normalized() {
        let context = Context {
            place_size: Some("VILLA_350_500".to_string()),
            pickup_floor: Some(2),
            destination_floor: Some(3),
            has_elevator: Some(0),
            add_heavy: Some(5),
            ..Context::default()
        };
        let request = AnalyzeRequest::new("images", context)
            .with_image_urls(vec!["a".to_string(), "b".to_string(), "a".to_string()]);

        let signals = normalize_signals(&request);

        assert_eq!(signals.place_size, "villa_350_500");
        assert!(signals.add_heavy);
        assert!(!signals.has_elevator);
        assert_eq!(signals.floors_total, 5);
        // Duplicates still count
        assert_eq!(signals.num_images, 3);
        assert!(signals.stairs_only());
    }

    #[test]
    fn test_single_floor_field() {
        let context = Context {
            destination_floor: Some(4),
            has_elevator: Some(1),
            ..Context::default()
        };
        let signals = normalize_signals(&AnalyzeRequest::new("video", context));

        assert_eq!(signals.floors_total, 4);
        assert!(signals.has_elevator);
        assert!(!signals.stairs_only());
    }
}
