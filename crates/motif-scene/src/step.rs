use serde::{Deserialize, Serialize};

use crate::object::ObjectId;
use motif_core::{Color, Duration, Easing, MotifResult, Point2D};

/// The named transition an animation step performs on its targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepKind {
    /// Reveal: opacity 0 → 1, target becomes visible at start.
    FadeIn,
    /// Conceal: opacity → 0, target hidden at completion.
    FadeOut,
    /// Staged reveal of text/strokes. Same timing semantics as FadeIn;
    /// the distinct kind tells a real back-end to draw progressively.
    Write,
    /// Move the target's center to an absolute position.
    MoveTo(Point2D),
    /// Shift the target's center by a delta.
    MoveBy(Point2D),
    /// Multiply the target's current scale by a factor.
    ScaleBy(f64),
    /// Rotate to an absolute angle in degrees.
    RotateTo(f64),
    /// Interpolate the target's stroke color.
    ColorTo(Color),
    /// Morph the source into another registered object: the source takes on
    /// the destination's pose and style, then the destination becomes
    /// visible and the source is hidden at completion.
    TransformInto(ObjectId),
    /// Zero-effect entry that only advances the clock.
    Wait,
}

impl StepKind {
    /// Human-readable verb, used in logs and warnings.
    pub fn verb(&self) -> &'static str {
        match self {
            StepKind::FadeIn => "fade in",
            StepKind::FadeOut => "fade out",
            StepKind::Write => "write",
            StepKind::MoveTo(_) => "move to",
            StepKind::MoveBy(_) => "move by",
            StepKind::ScaleBy(_) => "scale by",
            StepKind::RotateTo(_) => "rotate to",
            StepKind::ColorTo(_) => "recolor",
            StepKind::TransformInto(_) => "transform into",
            StepKind::Wait => "wait",
        }
    }
}

/// An atomic, named transition applied to one or more objects over a
/// duration with an easing function. Ordering (sequential index or
/// concurrency group) is assigned by the timeline at schedule time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub targets: Vec<ObjectId>,
    pub kind: StepKind,
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationStep {
    /// Create a step. The duration is validated here, before the step can
    /// reach a timeline: negative or non-finite seconds are rejected with
    /// `InvalidDuration`.
    pub fn new(
        kind: StepKind,
        targets: impl IntoIterator<Item = ObjectId>,
        seconds: f64,
    ) -> MotifResult<Self> {
        Ok(Self {
            targets: targets.into_iter().collect(),
            kind,
            duration: Duration::try_from_seconds(seconds)?,
            easing: Easing::default(),
        })
    }

    /// A wait step: no targets, clock advance only.
    pub fn wait(seconds: f64) -> MotifResult<Self> {
        Self::new(StepKind::Wait, [], seconds)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rejects_negative_duration() {
        let err = AnimationStep::new(StepKind::FadeIn, [ObjectId::new("a")], -1.0).unwrap_err();
        assert!(matches!(err, motif_core::MotifError::InvalidDuration(_)));
    }

    #[test]
    fn test_step_rejects_non_finite_duration() {
        assert!(AnimationStep::new(StepKind::Wait, [], f64::NAN).is_err());
        assert!(AnimationStep::new(StepKind::Wait, [], f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let step = AnimationStep::new(StepKind::FadeIn, [ObjectId::new("a")], 0.0).unwrap();
        assert!(step.duration.is_zero());
    }

    #[test]
    fn test_wait_has_no_targets() {
        let step = AnimationStep::wait(2.0).unwrap();
        assert!(step.targets.is_empty());
        assert_eq!(step.kind, StepKind::Wait);
    }
}
