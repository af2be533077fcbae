//! Climber state: which limb occupies which hold.

use serde::{Deserialize, Serialize};

use crate::hold::HoldId;

/// One of the climber's four limbs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Limb {
    #[serde(rename = "RH")]
    RightHand,
    #[serde(rename = "LH")]
    LeftHand,
    #[serde(rename = "RF")]
    RightFoot,
    #[serde(rename = "LF")]
    LeftFoot,
}

impl Limb {
    /// Canonical ordering used everywhere a limb array is indexed.
    pub const ALL: [Limb; 4] = [
        Limb::RightHand,
        Limb::LeftHand,
        Limb::RightFoot,
        Limb::LeftFoot,
    ];

    #[inline]
    pub fn is_hand(self) -> bool {
        matches!(self, Limb::RightHand | Limb::LeftHand)
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Limb::RightHand => 0,
            Limb::LeftHand => 1,
            Limb::RightFoot => 2,
            Limb::LeftFoot => 3,
        }
    }
}

/// A single body configuration: each limb optionally references a hold.
/// References are weak; a dangling id is resolved as "unassigned", never an
/// error (the registry does the defensive lookup).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClimberState {
    #[serde(rename = "RH")]
    pub right_hand: Option<HoldId>,
    #[serde(rename = "LH")]
    pub left_hand: Option<HoldId>,
    #[serde(rename = "RF")]
    pub right_foot: Option<HoldId>,
    #[serde(rename = "LF")]
    pub left_foot: Option<HoldId>,
}

impl ClimberState {
    #[inline]
    pub fn get(&self, limb: Limb) -> Option<HoldId> {
        match limb {
            Limb::RightHand => self.right_hand,
            Limb::LeftHand => self.left_hand,
            Limb::RightFoot => self.right_foot,
            Limb::LeftFoot => self.left_foot,
        }
    }

    #[inline]
    pub fn set(&mut self, limb: Limb, hold: Option<HoldId>) {
        match limb {
            Limb::RightHand => self.right_hand = hold,
            Limb::LeftHand => self.left_hand = hold,
            Limb::RightFoot => self.right_foot = hold,
            Limb::LeftFoot => self.left_foot = hold,
        }
    }

    /// Iterate assignments in canonical limb order.
    pub fn assignments(&self) -> impl Iterator<Item = (Limb, Option<HoldId>)> + '_ {
        Limb::ALL.iter().map(move |l| (*l, self.get(*l)))
    }

    /// Number of limbs currently on a hold (dangling ids still count here;
    /// they drop out at registry resolution).
    pub fn assigned_count(&self) -> usize {
        self.assignments().filter(|(_, h)| h.is_some()).count()
    }
}

/// Ordered sequence of climber states, produced by the external move
/// planner and consumed by index, in order, without mutation.
pub type BetaSequence = Vec<ClimberState>;
