//! Climber body proportions.
//!
//! Segment lengths and torso dimensions are fractions of the frame height,
//! so a pose scales with the image it is drawn over. Defaults match the
//! proportions the annotation frontend ships with.

use serde::{Deserialize, Serialize};

/// Body proportions as fractions of frame height.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClimberModel {
    pub torso_height: f32,
    pub torso_width: f32,
    pub upper_arm: f32,
    pub forearm: f32,
    pub thigh: f32,
    pub shin: f32,
}

impl Default for ClimberModel {
    fn default() -> Self {
        Self {
            torso_height: 0.30,
            torso_width: 0.15,
            upper_arm: 0.25,
            forearm: 0.25,
            thigh: 0.30,
            shin: 0.25,
        }
    }
}

impl ClimberModel {
    /// Convert fractions into pixel lengths for a frame of `frame_height`
    /// pixels.
    pub fn scaled(&self, frame_height: f32) -> ScaledModel {
        ScaledModel {
            torso_height: self.torso_height * frame_height,
            torso_width: self.torso_width * frame_height,
            upper_arm: self.upper_arm * frame_height,
            forearm: self.forearm * frame_height,
            thigh: self.thigh * frame_height,
            shin: self.shin * frame_height,
        }
    }
}

/// Pixel-space body dimensions for one target frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScaledModel {
    pub torso_height: f32,
    pub torso_width: f32,
    pub upper_arm: f32,
    pub forearm: f32,
    pub thigh: f32,
    pub shin: f32,
}

impl ScaledModel {
    /// (first, second) segment lengths for an arm chain.
    #[inline]
    pub fn arm_segments(&self) -> (f32, f32) {
        (self.upper_arm, self.forearm)
    }

    /// (first, second) segment lengths for a leg chain.
    #[inline]
    pub fn leg_segments(&self) -> (f32, f32) {
        (self.thigh, self.shin)
    }
}
