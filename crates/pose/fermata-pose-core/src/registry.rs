//! Hold registry: resolves hold ids to pixel positions in a target frame.
//!
//! Built once per frame (O(n)), queried up to four times (O(1) amortized).

use hashbrown::HashMap;

use crate::geom::Point;
use crate::hold::{Hold, HoldId};
use crate::state::ClimberState;

/// Id -> pixel-position index for one coordinate frame.
#[derive(Clone, Debug)]
pub struct HoldRegistry {
    by_id: HashMap<HoldId, Point>,
    width: f32,
    height: f32,
}

impl HoldRegistry {
    /// Index `holds` against a frame of `width` x `height` pixels.
    /// Normalized coordinates scale as (x_norm * width, y_norm * height).
    pub fn new(holds: &[Hold], width: f32, height: f32) -> Self {
        let mut by_id = HashMap::with_capacity(holds.len());
        for h in holds {
            by_id.insert(h.id, Point::new(h.x_norm * width, h.y_norm * height));
        }
        Self {
            by_id,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Pixel position of a hold, or `None` if the id is absent.
    #[inline]
    pub fn resolve(&self, id: HoldId) -> Option<Point> {
        self.by_id.get(&id).copied()
    }

    /// Resolve each limb of a state in canonical limb order. Unassigned
    /// limbs and dangling references both come back as `None` ("not
    /// currently placed"), never an error.
    pub fn limb_targets(&self, state: &ClimberState) -> [Option<Point>; 4] {
        let mut targets = [None; 4];
        for (limb, hold) in state.assignments() {
            targets[limb.index()] = hold.and_then(|id| self.resolve(id));
        }
        targets
    }
}
