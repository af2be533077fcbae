//! Fermata Pose Core (engine-agnostic)
//!
//! Computational core for visualizing climbing beta: hold data model,
//! hold registry (normalized -> pixel resolution), FABRIK IK solver,
//! climber body model, pose synthesis, route-annotation transitions,
//! and the stored-route JSON loader. No I/O and no rendering here;
//! adapters draw the joint sets this crate produces.

pub mod climber;
pub mod fabrik;
pub mod geom;
pub mod hold;
pub mod pose;
pub mod registry;
pub mod route;
pub mod state;
pub mod stored_route;

// Re-exports for consumers (renderers, planners)
pub use climber::{ClimberModel, ScaledModel};
pub use fabrik::solve_chain;
pub use geom::Point;
pub use hold::{Hold, HoldId, HoldType};
pub use pose::{synthesize_pose, JointId, JointPositions};
pub use registry::HoldRegistry;
pub use route::RouteAnnotation;
pub use state::{BetaSequence, ClimberState, Limb};
pub use stored_route::{parse_route_json, RouteData, RouteDataError};
