//! Sequence renderer: one raster frame per climber state.
//!
//! Per state, in order: clear to the background, draw every hold as a
//! type-colored marker, synthesize the pose and stroke the skeleton (closed
//! torso quadrilateral, open 2-segment limb polylines), then overlay the
//! step label. Frames are independent; the only shared state is the reused
//! surface, which is fully cleared first.

use log::debug;
use serde::{Deserialize, Serialize};

use fermata_pose_core::{
    synthesize_pose, BetaSequence, ClimberModel, ClimberState, Hold, HoldRegistry, HoldType,
    JointId, Limb, Point,
};

use crate::color::Color;
use crate::surface::Surface;

/// Step label numbering convention. Caller-selectable, but fixed for the
/// duration of one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLabeling {
    ZeroBased,
    #[default]
    OneBased,
}

impl StepLabeling {
    /// Label text for the state at `index` in the sequence.
    pub fn label(self, index: usize) -> String {
        match self {
            StepLabeling::ZeroBased => format!("Step {index}"),
            StepLabeling::OneBased => format!("Step {}", index + 1),
        }
    }
}

/// Renderer knobs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Hold marker radius in pixels.
    pub hold_radius: f32,
    /// Skeleton stroke width in pixels.
    pub stroke_width: f32,
    pub labeling: StepLabeling,
    pub climber: ClimberModel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hold_radius: 12.0,
            stroke_width: 4.0,
            labeling: StepLabeling::default(),
            climber: ClimberModel::default(),
        }
    }
}

fn hold_color(kind: HoldType) -> Color {
    match kind {
        HoldType::StartHand => Color::START_HAND,
        HoldType::StartFoot => Color::START_FOOT,
        HoldType::FinishHold => Color::FINISH_HOLD,
        HoldType::ClimbingHold => Color::CLIMBING_HOLD,
    }
}

/// Stateless frame compositor over any [`Surface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceRenderer {
    pub options: RenderOptions,
}

impl SequenceRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Compose one frame for `state` at sequence position `index`.
    pub fn render_state<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        holds: &[Hold],
        state: &ClimberState,
        index: usize,
    ) {
        let width = surface.width() as f32;
        let height = surface.height() as f32;
        let registry = HoldRegistry::new(holds, width, height);

        surface.clear();
        self.draw_holds(surface, holds, &registry);
        self.draw_skeleton(surface, state, &registry);
        surface.draw_label(
            Point::new(15.0, 15.0),
            &self.options.labeling.label(index),
            Color::LABEL,
        );
    }

    fn draw_holds<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        holds: &[Hold],
        registry: &HoldRegistry,
    ) {
        for hold in holds {
            if let Some(pos) = registry.resolve(hold.id) {
                surface.fill_circle(pos, self.options.hold_radius, hold_color(hold.kind));
            }
        }
    }

    fn draw_skeleton<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        state: &ClimberState,
        registry: &HoldRegistry,
    ) {
        let model = self.options.climber.scaled(registry.height());
        let joints = synthesize_pose(state, registry, &model);

        let torso: Vec<Point> = JointId::TORSO
            .iter()
            .filter_map(|id| joints.get(*id))
            .collect();
        surface.stroke_polygon(&torso, self.options.stroke_width, Color::SKELETON);

        // Inactive limbs have no chain and are simply not drawn.
        for limb in Limb::ALL {
            if let Some(chain) = joints.limb_chain(limb) {
                surface.stroke_polyline(&chain, self.options.stroke_width, Color::SKELETON);
            }
        }
    }

    /// Render every state of a sequence, handing the surface to `sink`
    /// after each frame (display, encode, paginate, ...). The sink returns
    /// `false` to stop between frames; no partial frame is ever observable.
    pub fn render_sequence<S, F>(
        &self,
        surface: &mut S,
        holds: &[Hold],
        sequence: &BetaSequence,
        mut sink: F,
    ) where
        S: Surface,
        F: FnMut(usize, &S) -> bool,
    {
        for (index, state) in sequence.iter().enumerate() {
            debug!(
                "rendering beta frame {index}/{total} ({assigned} limbs placed)",
                total = sequence.len(),
                assigned = state.assigned_count()
            );
            self.render_state(surface, holds, state, index);
            if !sink(index, surface) {
                break;
            }
        }
    }
}
