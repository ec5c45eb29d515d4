//! # Domain Crate
//!
//! Shared types for the MeezGo media analyzer.
//!
//! ## Main Components
//!
//! - **types**: Request, response and value types (Context, AnalyzeRequest,
//!   Recommendation, ServiceTier, TruckSize, ReasonCode)
//! - **error**: Error types for parsing domain values from text
//!
//! ## Example Usage
//!
//! ```ignore
//! use domain::{AnalyzeRequest, Context};
//!
//! let request: AnalyzeRequest = serde_json::from_str(body)?;
//! let size = request.context.place_size.as_deref().unwrap_or_default();
//! ```

// Public modules
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DomainError, Result};
pub use types::{
    AnalyzeRequest,
    AnalyzeResponse,
    Context,
    LogisticsEstimate,
    ReasonCode,
    Recommendation,
    ServiceTier,
    TruckSize,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(ServiceTier::Light < ServiceTier::Medium);
        assert!(ServiceTier::Medium < ServiceTier::Heavy);
        assert_eq!(ServiceTier::Light.ordinal(), 0);
        assert_eq!(ServiceTier::Heavy.ordinal(), 2);
        assert_eq!(ServiceTier::Light.max(ServiceTier::Medium), ServiceTier::Medium);
    }

    #[test]
    fn test_tier_from_level() {
        assert_eq!(ServiceTier::from_level(0), ServiceTier::Light);
        assert_eq!(ServiceTier::from_level(1), ServiceTier::Light);
        assert_eq!(ServiceTier::from_level(2), ServiceTier::Medium);
        assert_eq!(ServiceTier::from_level(3), ServiceTier::Heavy);
        assert_eq!(ServiceTier::from_level(7), ServiceTier::Heavy);
    }

    #[test]
    fn test_escalation_path() {
        for tier in ServiceTier::ALL {
            let path = tier.escalation_path();
            assert_eq!(path[0], tier);
            assert_eq!(path.len() == 1, tier == ServiceTier::Heavy);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(" Medium ".parse::<ServiceTier>().unwrap(), ServiceTier::Medium);
        assert_eq!("XXL".parse::<TruckSize>().unwrap(), TruckSize::Xxl);
        assert_eq!(
            "extreme".parse::<ServiceTier>(),
            Err(DomainError::UnknownTier("extreme".to_string()))
        );
        assert!("tiny".parse::<TruckSize>().is_err());
    }

    #[test]
    fn test_request_defaults() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"mode": "video", "context": {}}"#).unwrap();

        assert_eq!(request.mode, "video");
        assert!(request.image_urls.is_empty());
        assert!(request.video_url.is_none());
        assert_eq!(request.context, Context::default());
    }

    #[test]
    fn test_flags_accept_integers_booleans_and_null() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{
                "mode": "images",
                "image_urls": ["a.jpg", "b.jpg"],
                "context": {
                    "place_size": "S3_120_150",
                    "pickup_floor": 2,
                    "has_elevator": true,
                    "add_heavy": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(request.image_urls.len(), 2);
        assert_eq!(request.context.has_elevator, Some(1));
        assert_eq!(request.context.add_heavy, None);
        assert_eq!(request.context.pickup_floor, Some(2));
        assert_eq!(request.context.destination_floor, None);

        let context: Context = serde_json::from_str(r#"{"add_heavy": 0, "has_elevator": false}"#).unwrap();
        assert_eq!(context.add_heavy, Some(0));
        assert_eq!(context.has_elevator, Some(0));
    }

    #[test]
    fn test_flags_accept_numeric_strings_and_integral_floats() {
        let context: Context = serde_json::from_str(r#"{"has_elevator": "1", "add_heavy": " 0 "}"#).unwrap();
        assert_eq!(context.has_elevator, Some(1));
        assert_eq!(context.add_heavy, Some(0));

        let context: Context = serde_json::from_str(r#"{"has_elevator": 1.0, "add_heavy": 0.0}"#).unwrap();
        assert_eq!(context.has_elevator, Some(1));
        assert_eq!(context.add_heavy, Some(0));
    }

    #[test]
    fn test_floors_accept_numeric_strings_and_integral_floats() {
        let context: Context =
            serde_json::from_str(r#"{"pickup_floor": "3", "destination_floor": 2.0}"#).unwrap();
        assert_eq!(context.pickup_floor, Some(3));
        assert_eq!(context.destination_floor, Some(2));

        let context: Context =
            serde_json::from_str(r#"{"pickup_floor": 4, "destination_floor": null}"#).unwrap();
        assert_eq!(context.pickup_floor, Some(4));
        assert_eq!(context.destination_floor, None);
    }

    #[test]
    fn test_non_numeric_values_rejected() {
        for body in [
            r#"{"add_heavy": "yes"}"#,
            r#"{"has_elevator": 1.5}"#,
            r#"{"has_elevator": [1]}"#,
            r#"{"pickup_floor": "third"}"#,
            r#"{"pickup_floor": 2.5}"#,
            r#"{"destination_floor": -1}"#,
            r#"{"destination_floor": "-2"}"#,
        ] {
            assert!(serde_json::from_str::<Context>(body).is_err(), "accepted {}", body);
        }
    }

    #[test]
    fn test_recommendation_wire_format() {
        let response = AnalyzeResponse::from(Recommendation {
            service_type: ServiceTier::Heavy,
            truck_size: TruckSize::Xxl,
            workers: 5,
            estimated_minutes: 480,
            reasons: vec![ReasonCode::PlaceSizeMinimum],
            confidence: 0.7,
            recommended_services: vec![ServiceTier::Heavy],
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["recommendations"]["service_type"], "heavy");
        assert_eq!(json["recommendations"]["truck_size"], "xxl");
        assert_eq!(json["recommendations"]["reasons"][0], "vision_place_size_minimum");
        assert_eq!(json["recommendations"]["recommended_services"][0], "heavy");
    }
}
