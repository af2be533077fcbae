//! FABRIK (Forward And Backward Reaching Inverse Kinematics) chain solver.
//!
//! Model:
//! - The seed chain supplies both the segment lengths (pairwise distances)
//!   and the starting joint placements for iteration.
//! - Unreachable targets take a separate straight-line stretch path; the
//!   iterative solve only runs when the target is within total reach.
//! - A fixed iteration count keeps solves deterministic; there is no
//!   convergence-threshold early exit.
//! - A reachable solve finishes on a forward half-pass that pins the end
//!   effector to the target and re-places the interior joints from it, so
//!   the end lands on the target exactly. Any unconverged residual moves
//!   into the root segment and shrinks with the iteration count.
//!
//! This module is pure geometry: no holds, limbs, or rendering.

use crate::geom::Point;

/// Direction used when two adjacent joints coincide and no direction can be
/// recovered from the chain itself.
const FALLBACK_DIR: Point = Point::new(0.0, 1.0);

/// Solve joint positions for a chain of fixed-length segments.
///
/// `seed` is the initial chain pose, root first. Segment lengths are taken
/// from the seed's pairwise distances. The root stays pinned at `seed[0]`;
/// the end effector lands exactly on `target` when the chain can reach it,
/// and the chain stretches straight toward `target` when it cannot.
/// Interior segment lengths are invariant in the output; the root segment
/// carries whatever error the iteration budget left. Chains with fewer
/// than two joints are returned as-is.
pub fn solve_chain(seed: &[Point], target: Point, iterations: usize) -> Vec<Point> {
    if seed.len() < 2 {
        return seed.to_vec();
    }

    let root = seed[0];
    let lengths: Vec<f32> = seed.windows(2).map(|w| w[0].distance(w[1])).collect();
    let total_reach: f32 = lengths.iter().sum();

    let to_target = (target - root).normalized_or(FALLBACK_DIR);

    if root.distance(target) > total_reach {
        // Out of reach: place every joint on the root->target ray,
        // proportionally by segment length. Not a degenerate iteration of
        // the reachable case.
        let mut joints = Vec::with_capacity(seed.len());
        let mut travelled = 0.0;
        joints.push(root);
        for len in &lengths {
            travelled += len;
            joints.push(root + to_target * travelled);
        }
        return joints;
    }

    let mut joints = seed.to_vec();
    let last = joints.len() - 1;

    for _ in 0..iterations {
        // Forward pass: pin the end effector to the target, walk back to
        // the root re-placing each joint at its segment length.
        joints[last] = target;
        for i in (0..last).rev() {
            let dir = (joints[i] - joints[i + 1]).normalized_or(to_target);
            joints[i] = joints[i + 1] + dir * lengths[i];
        }

        // Backward pass: pin the root, walk forward the same way.
        joints[0] = root;
        for i in 0..last {
            let dir = (joints[i + 1] - joints[i]).normalized_or(to_target);
            joints[i + 1] = joints[i] + dir * lengths[i];
        }
    }

    // Finishing half-pass: the end effector must sit on a reachable target,
    // not merely near it. Re-place the interior joints from the pinned end;
    // the root stays where it is and its segment absorbs the residual.
    joints[last] = target;
    for i in (1..last).rev() {
        let dir = (joints[i] - joints[i + 1]).normalized_or(to_target);
        joints[i] = joints[i + 1] + dir * lengths[i];
    }

    joints
}
