//! Hold data model: annotated points on a route image.

use serde::{Deserialize, Serialize};

/// Stable hold identifier. Allocated monotonically by the annotation layer;
/// never reused after deletion within a session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HoldId(pub u32);

/// Role of a hold in the route annotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldType {
    StartHand,
    StartFoot,
    FinishHold,
    ClimbingHold,
}

/// A tagged point on the route. Position is normalized to [0,1] x [0,1]
/// relative to the source image, so annotations are resolution-independent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hold {
    pub id: HoldId,
    #[serde(rename = "xNorm")]
    pub x_norm: f32,
    #[serde(rename = "yNorm")]
    pub y_norm: f32,
    #[serde(rename = "type")]
    pub kind: HoldType,
}

impl Hold {
    pub fn new(id: HoldId, x_norm: f32, y_norm: f32, kind: HoldType) -> Self {
        Self {
            id,
            x_norm,
            y_norm,
            kind,
        }
    }
}
