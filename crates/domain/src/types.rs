//! Core domain types for the media analyzer.
//!
//! This module defines the request, response and value types shared by the
//! recommendation pipeline, the HTTP service and the CLI.
//! - Ordered enums for service tiers and truck sizes
//! - Reason codes with their stable wire names
//! - Request types whose optional fields default the way the booking
//!   application sends them

use crate::error::{DomainError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Service Tier
// =============================================================================

/// Intensity of the moving service, ordered light < medium < heavy.
///
/// The derived `Ord` follows declaration order, so `max` raises a tier and
/// comparisons match the tier ordinals 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Light,
    Medium,
    Heavy,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Light, ServiceTier::Medium, ServiceTier::Heavy];

    /// Ordinal used for tier comparisons (light = 0, heavy = 2)
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Map a severity level to a tier: 3 and above is heavy, 2 is medium,
    /// anything lower is light.
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=1 => ServiceTier::Light,
            2 => ServiceTier::Medium,
            _ => ServiceTier::Heavy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceTier::Light => "light",
            ServiceTier::Medium => "medium",
            ServiceTier::Heavy => "heavy",
        }
    }

    /// This tier followed by the next escalation, or just `[Heavy]` at the top.
    pub fn escalation_path(self) -> Vec<ServiceTier> {
        match self {
            ServiceTier::Light => vec![ServiceTier::Light, ServiceTier::Medium],
            ServiceTier::Medium => vec![ServiceTier::Medium, ServiceTier::Heavy],
            ServiceTier::Heavy => vec![ServiceTier::Heavy],
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ServiceTier::Light),
            "medium" => Ok(ServiceTier::Medium),
            "heavy" => Ok(ServiceTier::Heavy),
            _ => Err(DomainError::UnknownTier(s.to_string())),
        }
    }
}

// =============================================================================
// Logistics
// =============================================================================

/// Truck classes offered by the booking application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckSize {
    Small,
    Medium,
    Large,
    Xl,
    Xxl,
}

impl TruckSize {
    pub fn as_str(self) -> &'static str {
        match self {
            TruckSize::Small => "small",
            TruckSize::Medium => "medium",
            TruckSize::Large => "large",
            TruckSize::Xl => "xl",
            TruckSize::Xxl => "xxl",
        }
    }
}

impl fmt::Display for TruckSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TruckSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(TruckSize::Small),
            "medium" => Ok(TruckSize::Medium),
            "large" => Ok(TruckSize::Large),
            "xl" => Ok(TruckSize::Xl),
            "xxl" => Ok(TruckSize::Xxl),
            _ => Err(DomainError::UnknownTruckSize(s.to_string())),
        }
    }
}

/// Truck, crew and duration for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsEstimate {
    pub truck_size: TruckSize,
    pub workers: u32,
    pub estimated_minutes: u32,
}

impl LogisticsEstimate {
    pub const fn new(truck_size: TruckSize, workers: u32, estimated_minutes: u32) -> Self {
        Self {
            truck_size,
            workers,
            estimated_minutes,
        }
    }
}

// =============================================================================
// Reason Codes
// =============================================================================

/// Machine-readable tag explaining a tier escalation or minimum override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    #[serde(rename = "vision_add_heavy_context")]
    AddHeavyContext,
    #[serde(rename = "vision_multi_floor_no_elevator")]
    MultiFloorNoElevator,
    #[serde(rename = "vision_many_images_high_volume")]
    ManyImagesHighVolume,
    #[serde(rename = "vision_medium_images_volume")]
    MediumImagesVolume,
    #[serde(rename = "vision_place_size_minimum")]
    PlaceSizeMinimum,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::AddHeavyContext => "vision_add_heavy_context",
            ReasonCode::MultiFloorNoElevator => "vision_multi_floor_no_elevator",
            ReasonCode::ManyImagesHighVolume => "vision_many_images_high_volume",
            ReasonCode::MediumImagesVolume => "vision_medium_images_volume",
            ReasonCode::PlaceSizeMinimum => "vision_place_size_minimum",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Booking context sent alongside the media.
///
/// Every field is optional; absent values are defaulted by the signal
/// normalizer rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub place_type: Option<String>,
    /// Size bracket code, e.g. `s3_120_150` or `villa_350_500`
    #[serde(default)]
    pub place_size: Option<String>,
    /// Accepts integers, integral floats and numeric strings
    #[serde(default, deserialize_with = "deserialize_floor")]
    pub pickup_floor: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_floor")]
    pub destination_floor: Option<u32>,
    /// Non-zero means an elevator is available. Booleans, integral floats
    /// and numeric strings are accepted too.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub has_elevator: Option<i64>,
    /// Non-zero means bulky or heavy items were detected
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub add_heavy: Option<i64>,
    /// Caller's own tier guess; carried but never read by the pipeline
    #[serde(default)]
    pub service_type: Option<String>,
}

/// A single analysis request from the media pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Media type, e.g. "video" or "images"
    pub mode: String,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Only the number of images is used
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub context: Context,
}

impl AnalyzeRequest {
    pub fn new(mode: impl Into<String>, context: Context) -> Self {
        Self {
            mode: mode.into(),
            video_url: None,
            image_urls: Vec::new(),
            context,
        }
    }

    /// Builder helper for attaching image references
    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }
}

/// Integer as loosely typed by form-driven callers: `1`, `1.0`, `"1"`, `true`
#[derive(Deserialize)]
#[serde(untagged)]
enum LaxInt {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl LaxInt {
    fn into_i64(self) -> std::result::Result<i64, String> {
        match self {
            LaxInt::Bool(value) => Ok(i64::from(value)),
            LaxInt::Int(value) => Ok(value),
            LaxInt::Float(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
            LaxInt::Float(value) => Err(format!("expected an integer, got {}", value)),
            LaxInt::Str(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("expected an integer, got \"{}\"", text)),
        }
    }
}

/// Boolean-as-integer fields; `null` and absent both mean unset
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LaxInt>::deserialize(deserializer)?
        .map(LaxInt::into_i64)
        .transpose()
        .map_err(D::Error::custom)
}

/// Floor numbers must be non-negative
fn deserialize_floor<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<LaxInt>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let floor = value.into_i64().map_err(D::Error::custom)?;
    u32::try_from(floor)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("expected a non-negative floor, got {}", floor)))
}

// =============================================================================
// Response Types
// =============================================================================

/// Final recommendation returned to the booking application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service_type: ServiceTier,
    pub truck_size: TruckSize,
    pub workers: u32,
    pub estimated_minutes: u32,
    /// Reason codes in the order they fired
    pub reasons: Vec<ReasonCode>,
    pub confidence: f64,
    pub recommended_services: Vec<ServiceTier>,
}

/// HTTP response envelope for `/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub recommendations: Recommendation,
}

impl From<Recommendation> for AnalyzeResponse {
    fn from(recommendations: Recommendation) -> Self {
        Self { recommendations }
    }
}
