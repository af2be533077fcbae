//! Route annotation transitions.
//!
//! An explicit value type over `{holds, selected, start, finish}` with the
//! transition set the annotation UI drives: add, select/deselect, assign
//! type, assign limb, remove, reset. The caller owns the snapshot; there is
//! no ambient state. This layer also enforces the at-most-one-finish-hold
//! invariant the pose core relies on.

use serde::{Deserialize, Serialize};

use crate::hold::{Hold, HoldId, HoldType};
use crate::state::{ClimberState, Limb};

/// Annotation snapshot for one route.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteAnnotation {
    holds: Vec<Hold>,
    selected: Option<HoldId>,
    start: ClimberState,
    finish: Option<HoldId>,
    next_id: u32,
}

impl RouteAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn holds(&self) -> &[Hold] {
        &self.holds
    }

    #[inline]
    pub fn selected(&self) -> Option<HoldId> {
        self.selected
    }

    #[inline]
    pub fn start_state(&self) -> ClimberState {
        self.start
    }

    #[inline]
    pub fn finish_hold(&self) -> Option<HoldId> {
        self.finish
    }

    /// Place a new generic hold at a normalized position and select it.
    /// Ids are allocated monotonically and never reused in a session, so
    /// stale references elsewhere can be detected instead of aliased.
    pub fn add_hold(&mut self, x_norm: f32, y_norm: f32) -> HoldId {
        let id = HoldId(self.next_id);
        self.next_id += 1;
        self.holds
            .push(Hold::new(id, x_norm, y_norm, HoldType::ClimbingHold));
        self.selected = Some(id);
        id
    }

    /// Select a hold; selecting the currently selected hold deselects it.
    pub fn toggle_select(&mut self, id: Option<HoldId>) {
        self.selected = if self.selected == id { None } else { id };
    }

    /// Retype the selected hold and clear the selection. Assigning
    /// `FinishHold` demotes any previous finish hold to a generic one so at
    /// most one finish hold exists at a time.
    pub fn assign_type(&mut self, kind: HoldType) {
        let selected = match self.selected {
            Some(id) => id,
            None => return,
        };
        if kind == HoldType::FinishHold {
            if let Some(prev) = self.finish {
                if prev != selected {
                    if let Some(h) = self.holds.iter_mut().find(|h| h.id == prev) {
                        h.kind = HoldType::ClimbingHold;
                    }
                }
            }
            self.finish = Some(selected);
        }
        if let Some(h) = self.holds.iter_mut().find(|h| h.id == selected) {
            h.kind = kind;
        }
        self.selected = None;
    }

    /// Point a start-state limb at the selected hold and clear the
    /// selection. A still-generic hold picks up the matching start type; a
    /// hold can serve as both a start hand and a start foot, so an already
    /// typed hold keeps its type.
    pub fn assign_limb(&mut self, limb: Limb) {
        let selected = match self.selected {
            Some(id) => id,
            None => return,
        };
        self.start.set(limb, Some(selected));
        if let Some(h) = self.holds.iter_mut().find(|h| h.id == selected) {
            if h.kind == HoldType::ClimbingHold {
                h.kind = if limb.is_hand() {
                    HoldType::StartHand
                } else {
                    HoldType::StartFoot
                };
            }
        }
        self.selected = None;
    }

    /// Remove the selected hold, clearing every reference to it (start
    /// limbs, finish marker, selection). The id is not reused.
    pub fn remove_selected(&mut self) {
        let selected = match self.selected {
            Some(id) => id,
            None => return,
        };
        self.holds.retain(|h| h.id != selected);
        for limb in Limb::ALL {
            if self.start.get(limb) == Some(selected) {
                self.start.set(limb, None);
            }
        }
        if self.finish == Some(selected) {
            self.finish = None;
        }
        self.selected = None;
    }

    /// Return to the empty annotation, including the id counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
