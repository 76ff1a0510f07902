//! Hand landmark types
//!
//! Landmarks follow the MediaPipe hand model: 21 keypoints per hand with
//! coordinates normalized to the frame (0.0 to 1.0 on each axis).

use serde::{Deserialize, Serialize};

pub const THUMB_TIP: usize = 4;
pub const INDEX_FINGER_TIP: usize = 8;
pub const MIDDLE_FINGER_TIP: usize = 12;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand
pub const LANDMARK_COUNT: usize = 21;

/// A normalized 2D keypoint on a detected hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate (0.0 to 1.0, relative to frame width)
    pub x: f64,
    /// Y coordinate (0.0 to 1.0, relative to frame height)
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two landmarks in normalized units
pub fn distance(a: Landmark, b: Landmark) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// One detected hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    /// Detector confidence (0.0 to 1.0)
    #[serde(default = "default_score")]
    pub score: f64,
    /// All 21 landmarks, indexed by the constants in this module
    #[serde(with = "landmark_pairs")]
    pub landmarks: [Landmark; LANDMARK_COUNT],
}

fn default_score() -> f64 {
    1.0
}

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self {
            score: 1.0,
            landmarks,
        }
    }

    pub fn index_tip(&self) -> Landmark {
        self.landmarks[INDEX_FINGER_TIP]
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.landmarks[THUMB_TIP]
    }

    pub fn middle_tip(&self) -> Landmark {
        self.landmarks[MIDDLE_FINGER_TIP]
    }

    pub fn pinky_tip(&self) -> Landmark {
        self.landmarks[PINKY_TIP]
    }

    /// Distance from the thumb tip to another landmark
    pub fn thumb_distance(&self, landmark: usize) -> f64 {
        distance(self.landmarks[landmark], self.thumb_tip())
    }
}

/// Landmarks are stored in traces as `[x, y]` pairs to keep files compact.
mod landmark_pairs {
    use super::{Landmark, LANDMARK_COUNT};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(landmarks: &[Landmark; LANDMARK_COUNT], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(landmarks.iter().map(|l| [l.x, l.y]))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[Landmark; LANDMARK_COUNT], D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        if pairs.len() != LANDMARK_COUNT {
            return Err(D::Error::invalid_length(
                pairs.len(),
                &"21 landmark pairs",
            ));
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (slot, [x, y]) in landmarks.iter_mut().zip(pairs) {
            *slot = Landmark::new(x, y);
        }
        Ok(landmarks)
    }
}
