//! Stage that maps the property size to truck, crew and duration.
//!
//! The lookup depends only on the size code, never on the tier.

use crate::assessment::Assessment;
use crate::signals::NormalizedSignals;
use crate::traits::Stage;
use domain::{LogisticsEstimate, TruckSize};
use tracing::warn;

/// Used for empty or unrecognized size codes
pub const DEFAULT_LOGISTICS: LogisticsEstimate = LogisticsEstimate::new(TruckSize::Small, 2, 120);

/// Extra minutes per floor when there is no elevator
pub const MINUTES_PER_STAIR_FLOOR: u32 = 20;

/// Every size code with a dedicated logistics entry, smallest first
pub const PLACE_SIZE_CODES: [&str; 14] = [
    "s1_40_60",
    "s1_60_80",
    "s2_80_100",
    "s2_100_120",
    "s3_120_150",
    "s3_150_180",
    "s4_180_220",
    "s4_220_260",
    "villa_250_350",
    "villa_350_500",
    "comm_30_60",
    "comm_60_100",
    "comm_100_150",
    "comm_150_250",
];

/// Exact-match lookup of the baseline truck, crew and minutes
pub fn lookup_logistics(place_size: &str) -> Option<LogisticsEstimate> {
    use TruckSize::*;

    let (truck_size, workers, minutes) = match place_size {
        "s1_40_60" => (Small, 2, 90),
        "s1_60_80" => (Small, 2, 120),
        "s2_80_100" => (Medium, 3, 150),
        "s2_100_120" => (Medium, 3, 180),
        "s3_120_150" => (Large, 4, 240),
        "s3_150_180" => (Large, 4, 300),
        "s4_180_220" => (Xl, 4, 360),
        "s4_220_260" => (Xl, 5, 420),
        "villa_250_350" => (Xl, 4, 420),
        "villa_350_500" => (Xxl, 5, 480),
        "comm_30_60" => (Small, 2, 120),
        "comm_60_100" => (Medium, 3, 180),
        "comm_100_150" => (Large, 4, 240),
        "comm_150_250" => (Xl, 5, 360),
        _ => return None,
    };
    Some(LogisticsEstimate::new(truck_size, workers, minutes))
}

/// Fills in truck size, crew and estimated minutes.
///
/// ## Algorithm
/// 1. Look up the size code, falling back to `DEFAULT_LOGISTICS`
/// 2. Without an elevator, add `MINUTES_PER_STAIR_FLOOR` per floor
pub struct LogisticsMapper;

impl Stage for LogisticsMapper {
    fn name(&self) -> &str {
        "LogisticsMapper"
    }

    fn apply(&self, mut assessment: Assessment, signals: &NormalizedSignals) -> Assessment {
        let mut estimate = lookup_logistics(&signals.place_size).unwrap_or_else(|| {
            // Absent sizes fall back silently
            if !signals.place_size.is_empty() {
                warn!("No logistics entry for '{}', using default", signals.place_size);
            }
            DEFAULT_LOGISTICS
        });

        if signals.stairs_only() {
            let penalty = signals.floors_total.saturating_mul(MINUTES_PER_STAIR_FLOOR);
            estimate.estimated_minutes = estimate.estimated_minutes.saturating_add(penalty);
        }

        assessment.logistics = estimate;
        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn logs_while<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn map(place_size: &str, floors_total: u32, has_elevator: bool) -> LogisticsEstimate {
        let signals = NormalizedSignals {
            place_size: place_size.to_string(),
            floors_total,
            has_elevator,
            ..NormalizedSignals::default()
        };
        LogisticsMapper.apply(Assessment::new(), &signals).logistics
    }

    #[test]
    fn test_every_code_has_an_entry() {
        for code in PLACE_SIZE_CODES {
            assert!(lookup_logistics(code).is_some(), "missing entry for {}", code);
        }
    }

    #[test]
    fn test_table_values() {
        assert_eq!(map("s1_40_60", 0, true), LogisticsEstimate::new(TruckSize::Small, 2, 90));
        assert_eq!(map("s2_100_120", 0, true), LogisticsEstimate::new(TruckSize::Medium, 3, 180));
        assert_eq!(map("s3_150_180", 0, true), LogisticsEstimate::new(TruckSize::Large, 4, 300));
        assert_eq!(map("s4_220_260", 0, true), LogisticsEstimate::new(TruckSize::Xl, 5, 420));
        assert_eq!(map("villa_350_500", 0, true), LogisticsEstimate::new(TruckSize::Xxl, 5, 480));
        assert_eq!(map("comm_150_250", 0, true), LogisticsEstimate::new(TruckSize::Xl, 5, 360));
    }

    #[test]
    fn test_unknown_size_uses_default() {
        assert_eq!(map("unknown_code", 0, false), DEFAULT_LOGISTICS);
        assert_eq!(map("", 0, true), DEFAULT_LOGISTICS);
        // Lookup is exact, prefixes do not match
        assert_eq!(map("s3_custom", 0, true), DEFAULT_LOGISTICS);
    }

    #[test]
    fn test_stair_penalty() {
        assert_eq!(map("s3_120_150", 4, true).estimated_minutes, 240);
        assert_eq!(map("s3_120_150", 4, false).estimated_minutes, 240 + 80);
        assert_eq!(map("s3_120_150", 0, false).estimated_minutes, 240);
        assert_eq!(map("unknown_code", 2, false).estimated_minutes, 160);
    }

    #[test]
    fn test_penalty_saturates() {
        let estimate = map("villa_350_500", u32::MAX, false);
        assert_eq!(estimate.estimated_minutes, u32::MAX);
    }

    #[test]
    fn test_unknown_size_logs_warning() {
        let output = logs_while(|| {
            map("unknown_code", 0, true);
        });
        assert!(output.contains("WARN"), "unexpected log output: {}", output);
        assert!(output.contains("unknown_code"));

        // Missing size and known codes stay quiet
        let output = logs_while(|| {
            map("", 0, true);
            map("s1_40_60", 0, true);
        });
        assert!(!output.contains("WARN"), "unexpected log output: {}", output);
    }
}
