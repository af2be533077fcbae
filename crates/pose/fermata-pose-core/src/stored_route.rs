//! Stored-route JSON loader.
//!
//! Parses the annotation export the move planner consumes:
//! `{ "holds": [{id, xNorm, yNorm, type}], "start": {RH,LH,RF,LF}, "finish": id }`
//! and validates referential integrity before anything reaches the pose
//! core (coordinates in [0,1], start/finish ids present, at most one
//! finish-typed hold, no duplicate ids).

use serde::Deserialize;
use thiserror::Error;

use crate::hold::{Hold, HoldId, HoldType};
use crate::state::ClimberState;

#[derive(Debug, Error)]
pub enum RouteDataError {
    #[error("route JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate hold id {0:?}")]
    DuplicateHold(HoldId),
    #[error("hold {0:?} position ({1}, {2}) outside normalized [0,1] range")]
    PositionOutOfRange(HoldId, f32, f32),
    #[error("{0} references unknown hold id {1:?}")]
    UnknownReference(&'static str, HoldId),
    #[error("more than one finish hold ({0:?} and {1:?})")]
    MultipleFinishHolds(HoldId, HoldId),
}

/// A loaded, validated route: holds, start configuration, finish hold.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteData {
    pub holds: Vec<Hold>,
    pub start: ClimberState,
    pub finish: HoldId,
}

/// Parse and validate a stored route.
pub fn parse_route_json(s: &str) -> Result<RouteData, RouteDataError> {
    let raw: StoredRoute = serde_json::from_str(s)?;
    let data = RouteData {
        holds: raw.holds,
        start: raw.start,
        finish: raw.finish,
    };
    validate(&data)?;
    Ok(data)
}

fn validate(data: &RouteData) -> Result<(), RouteDataError> {
    let mut finish_typed: Option<HoldId> = None;
    for (i, h) in data.holds.iter().enumerate() {
        if data.holds[..i].iter().any(|other| other.id == h.id) {
            return Err(RouteDataError::DuplicateHold(h.id));
        }
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        if !in_range(h.x_norm) || !in_range(h.y_norm) {
            return Err(RouteDataError::PositionOutOfRange(h.id, h.x_norm, h.y_norm));
        }
        if h.kind == HoldType::FinishHold {
            if let Some(prev) = finish_typed {
                return Err(RouteDataError::MultipleFinishHolds(prev, h.id));
            }
            finish_typed = Some(h.id);
        }
    }

    let exists = |id: HoldId| data.holds.iter().any(|h| h.id == id);
    for (limb, hold) in data.start.assignments() {
        if let Some(id) = hold {
            if !exists(id) {
                let name = match limb {
                    crate::state::Limb::RightHand => "start.RH",
                    crate::state::Limb::LeftHand => "start.LH",
                    crate::state::Limb::RightFoot => "start.RF",
                    crate::state::Limb::LeftFoot => "start.LF",
                };
                return Err(RouteDataError::UnknownReference(name, id));
            }
        }
    }
    if !exists(data.finish) {
        return Err(RouteDataError::UnknownReference("finish", data.finish));
    }
    Ok(())
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredRoute {
    holds: Vec<Hold>,
    start: ClimberState,
    finish: HoldId,
}
