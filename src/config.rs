//! Runtime configuration
//!
//! Every threshold the gesture engine uses lives here, with defaults tuned
//! for a laptop webcam at roughly 30fps. Configuration files are JSON with
//! camelCase keys; any missing field falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirMouseConfig {
    pub gestures: GestureConfig,
    pub smoothing: SmoothingConfig,
    pub detection: DetectionConfig,
    pub display: DisplayConfig,
    pub pointer: PointerConfig,
}

/// Pinch thresholds and timing windows for gesture classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    /// Index-thumb distance below which a click/drag pinch engages
    pub click_distance: f64,
    /// Middle-thumb distance below which scrolling is active
    pub scroll_pinch_distance: f64,
    /// Pinky-thumb distance below which a right click fires
    pub right_click_distance: f64,
    /// Two click engagements closer than this (seconds) form a double click
    pub double_click_window_s: f64,
    /// Minimum gap (seconds) between right-click detections
    pub right_click_cooldown_s: f64,
    /// Index tip above this normalized height scrolls up
    pub scroll_up_below: f64,
    /// Index tip below this normalized height scrolls down
    pub scroll_down_above: f64,
    /// Scroll amount issued per qualifying frame
    pub scroll_amount: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_distance: 0.05,
            scroll_pinch_distance: 0.08,
            right_click_distance: 0.05,
            double_click_window_s: 0.3,
            right_click_cooldown_s: 0.03,
            scroll_up_below: 0.4,
            scroll_down_above: 0.6,
            scroll_amount: 50,
        }
    }
}

/// One speed tier of the adaptive interpolation stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedTier {
    /// Lowest speed (pixels per second) at which this tier applies
    pub min_speed: f64,
    /// Interpolation factor toward the raw target
    pub factor: f64,
}

impl SpeedTier {
    pub const fn new(min_speed: f64, factor: f64) -> Self {
        Self { min_speed, factor }
    }
}

/// Cursor smoothing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmoothingConfig {
    /// Number of points averaged by the moving-average stage
    pub history_capacity: usize,
    /// Fixed per-frame time budget used to turn distance into speed
    pub frame_budget_s: f64,
    /// Interpolation factor used below the first tier
    pub rest_factor: f64,
    /// Tiers in ascending `min_speed` order
    pub speed_tiers: Vec<SpeedTier>,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            history_capacity: 5,
            frame_budget_s: 0.033,
            rest_factor: 0.0,
            speed_tiers: vec![
                SpeedTier::new(3.0, 0.05),
                SpeedTier::new(5.0, 0.2),
                SpeedTier::new(50.0, 0.5),
            ],
        }
    }
}

/// Landmark detector thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionConfig {
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.6,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Preview window and overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Key that ends the session
    pub exit_key: char,
    /// Pixel position of gesture labels on the preview frame
    pub label_origin: (i32, i32),
    pub window_title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            exit_key: 'd',
            label_origin: (50, 100),
            window_title: "AI Air Mouse Controller".to_string(),
        }
    }
}

/// Pointer output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointerConfig {
    /// Duration handed to each cursor move
    pub move_duration_s: f64,
    /// Screen size override; the pointer sink's own size is used when unset
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            move_duration_s: 0.01,
            screen_width: None,
            screen_height: None,
        }
    }
}

impl AirMouseConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject threshold combinations the engine cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        let g = &self.gestures;
        for (name, value) in [
            ("clickDistance", g.click_distance),
            ("scrollPinchDistance", g.scroll_pinch_distance),
            ("rightClickDistance", g.right_click_distance),
            ("doubleClickWindowS", g.double_click_window_s),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if g.right_click_cooldown_s < 0.0 {
            return Err(ConfigError::Invalid("rightClickCooldownS must not be negative".to_string()));
        }
        if g.scroll_up_below > g.scroll_down_above {
            return Err(ConfigError::Invalid(format!(
                "scrollUpBelow ({}) must not exceed scrollDownAbove ({})",
                g.scroll_up_below, g.scroll_down_above
            )));
        }

        let s = &self.smoothing;
        if s.history_capacity == 0 {
            return Err(ConfigError::Invalid("historyCapacity must be at least 1".to_string()));
        }
        if !(s.frame_budget_s > 0.0) {
            return Err(ConfigError::Invalid("frameBudgetS must be positive".to_string()));
        }
        if s.speed_tiers.is_empty() {
            return Err(ConfigError::Invalid("speedTiers must not be empty".to_string()));
        }
        for factor in std::iter::once(s.rest_factor).chain(s.speed_tiers.iter().map(|t| t.factor)) {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ConfigError::Invalid(format!(
                    "interpolation factors must be within [0, 1], got {}",
                    factor
                )));
            }
        }
        if s.speed_tiers.windows(2).any(|w| w[0].min_speed >= w[1].min_speed) {
            return Err(ConfigError::Invalid(
                "speedTiers must be sorted by strictly increasing minSpeed".to_string(),
            ));
        }

        let d = &self.detection;
        for (name, value) in [
            ("minDetectionConfidence", d.min_detection_confidence),
            ("minTrackingConfidence", d.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{} must be within [0, 1], got {}", name, value)));
            }
        }

        if self.pointer.move_duration_s < 0.0 {
            return Err(ConfigError::Invalid("moveDurationS must not be negative".to_string()));
        }

        Ok(())
    }
}
