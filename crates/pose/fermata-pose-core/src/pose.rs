//! Pose synthesis: climber state + resolved holds -> named joint set.
//!
//! The torso floats above the centroid of the active contact points; each
//! limb with a resolved target becomes a 3-joint chain (shoulder/hip ->
//! elbow/knee -> hand/foot) solved with FABRIK. Limbs without a target are
//! omitted from the output entirely. Synthesis is a pure function of its
//! inputs and never fails: every input combination, including all limbs
//! unassigned, degrades to a defined renderable pose.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::climber::ScaledModel;
use crate::fabrik::solve_chain;
use crate::geom::{centroid, Point};
use crate::registry::HoldRegistry;
use crate::state::{ClimberState, Limb};

/// Fixed FABRIK iteration budget per limb solve. Ten full passes bring the
/// segment-length residual under ~1% even for folded configurations with
/// the target deep inside reach; the solver's finishing half-pass puts the
/// hand or foot on the target regardless.
pub const IK_ITERATIONS: usize = 10;

/// How strongly the elbow/knee seed leans toward image-down (+y). A bend
/// heuristic for a plausible silhouette, not a constraint the solver keeps.
const SEED_DOWN_BIAS: f32 = 0.75;

/// Fixed joint vocabulary of a synthesized skeleton.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum JointId {
    #[serde(rename = "shoulderR")]
    ShoulderR,
    #[serde(rename = "shoulderL")]
    ShoulderL,
    #[serde(rename = "hipR")]
    HipR,
    #[serde(rename = "hipL")]
    HipL,
    #[serde(rename = "elbowR")]
    ElbowR,
    #[serde(rename = "elbowL")]
    ElbowL,
    #[serde(rename = "handR")]
    HandR,
    #[serde(rename = "handL")]
    HandL,
    #[serde(rename = "kneeR")]
    KneeR,
    #[serde(rename = "kneeL")]
    KneeL,
    #[serde(rename = "footR")]
    FootR,
    #[serde(rename = "footL")]
    FootL,
}

impl JointId {
    /// The four torso corners, in draw order (shoulders then hips).
    pub const TORSO: [JointId; 4] = [
        JointId::ShoulderR,
        JointId::ShoulderL,
        JointId::HipL,
        JointId::HipR,
    ];

    /// (proximal, mid, end) joint names for a limb's chain.
    pub fn chain_for(limb: Limb) -> [JointId; 3] {
        match limb {
            Limb::RightHand => [JointId::ShoulderR, JointId::ElbowR, JointId::HandR],
            Limb::LeftHand => [JointId::ShoulderL, JointId::ElbowL, JointId::HandL],
            Limb::RightFoot => [JointId::HipR, JointId::KneeR, JointId::FootR],
            Limb::LeftFoot => [JointId::HipL, JointId::KneeL, JointId::FootL],
        }
    }
}

/// Joint name -> pixel position. Recomputed per frame, never persisted.
/// Missing entries mean "do not draw this segment", not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointPositions {
    joints: HashMap<JointId, Point>,
}

impl JointPositions {
    #[inline]
    pub fn get(&self, id: JointId) -> Option<Point> {
        self.joints.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: JointId) -> bool {
        self.joints.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JointId, Point)> + '_ {
        self.joints.iter().map(|(id, p)| (*id, *p))
    }

    /// All three chain joints of a limb, if that limb was active.
    pub fn limb_chain(&self, limb: Limb) -> Option<[Point; 3]> {
        let [a, b, c] = JointId::chain_for(limb);
        Some([self.get(a)?, self.get(b)?, self.get(c)?])
    }

    #[inline]
    fn insert(&mut self, id: JointId, p: Point) {
        self.joints.insert(id, p);
    }
}

/// Synthesize the full joint set for one climber state.
pub fn synthesize_pose(
    state: &ClimberState,
    registry: &HoldRegistry,
    model: &ScaledModel,
) -> JointPositions {
    let targets = registry.limb_targets(state);
    let contacts: Vec<Point> = targets.iter().flatten().copied().collect();

    // Torso center: centroid of contacts lifted by half the torso height,
    // or the frame center when nothing is placed.
    let core = match centroid(&contacts) {
        Some(c) => Point::new(c.x, c.y - model.torso_height / 2.0),
        None => Point::new(registry.width() / 2.0, registry.height() / 2.0),
    };

    let half_w = model.torso_width / 2.0;
    let shoulder_r = Point::new(core.x + half_w, core.y);
    let shoulder_l = Point::new(core.x - half_w, core.y);
    let hip_r = Point::new(core.x + half_w, core.y + model.torso_height);
    let hip_l = Point::new(core.x - half_w, core.y + model.torso_height);

    let mut joints = JointPositions::default();
    joints.insert(JointId::ShoulderR, shoulder_r);
    joints.insert(JointId::ShoulderL, shoulder_l);
    joints.insert(JointId::HipR, hip_r);
    joints.insert(JointId::HipL, hip_l);

    for limb in Limb::ALL {
        let target = match targets[limb.index()] {
            Some(t) => t,
            None => continue,
        };
        let [_, mid_id, end_id] = JointId::chain_for(limb);
        let proximal = match limb {
            Limb::RightHand => shoulder_r,
            Limb::LeftHand => shoulder_l,
            Limb::RightFoot => hip_r,
            Limb::LeftFoot => hip_l,
        };
        let (len1, len2) = if limb.is_hand() {
            model.arm_segments()
        } else {
            model.leg_segments()
        };

        let solved = solve_limb(proximal, target, len1, len2);
        joints.insert(mid_id, solved[1]);
        joints.insert(end_id, solved[2]);
    }

    joints
}

/// Seed and solve one 2-segment limb chain. The mid joint is seeded exactly
/// `len1` from the proximal joint along a down-biased direction, so the
/// chain the solver derives its lengths from carries the model's segment
/// lengths while still encoding the bend heuristic.
fn solve_limb(proximal: Point, target: Point, len1: f32, len2: f32) -> Vec<Point> {
    let down = Point::new(0.0, 1.0);
    let toward = (target - proximal).normalized_or(down);
    let seed_dir = (toward + down * SEED_DOWN_BIAS).normalized_or(down);

    let mid = proximal + seed_dir * len1;
    let end_dir = (target - mid).normalized_or(seed_dir);
    let end = mid + end_dir * len2;

    solve_chain(&[proximal, mid, end], target, IK_ITERATIONS)
}
