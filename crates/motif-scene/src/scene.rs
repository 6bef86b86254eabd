//! A scene: a named registry of objects plus the timeline that animates
//! them, with a fixed logical frame (14.22 x 8 units, y up).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::RenderBackend;
use crate::registry::Registry;
use crate::timeline::{Timeline, TimelineWarning};
use motif_core::{Color, Duration, MotifResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub background: Color,
    /// Object states as authored. `run` always starts from this registry,
    /// so replaying a scene is bit-identical to its first run.
    initial: Registry,
    registry: Registry,
    timeline: Timeline,
}

/// Outcome of one scene run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneReport {
    pub run_id: Uuid,
    pub scene: String,
    pub frames: u64,
    pub duration: Duration,
    pub warnings: Vec<TimelineWarning>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BACKGROUND,
            initial: Registry::new(),
            registry: Registry::new(),
            timeline: Timeline::new(),
        }
    }

    /// Assemble a scene from an authored registry and timeline. The
    /// registry is captured as the replay baseline.
    pub fn from_parts(
        name: impl Into<String>,
        background: Color,
        registry: Registry,
        timeline: Timeline,
    ) -> Self {
        Self {
            name: name.into(),
            background,
            initial: registry.clone(),
            registry,
            timeline,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn total_duration(&self) -> Duration {
        self.timeline.total_duration()
    }

    /// Play the timeline to completion against the back-end, one frame per
    /// 1/fps tick, starting from the authored object states. The run is
    /// fully deterministic: same scene, same fps, same frames.
    pub fn run(&mut self, backend: &mut dyn RenderBackend, fps: f64) -> MotifResult<SceneReport> {
        let run_id = Uuid::new_v4();
        self.registry = self.initial.clone();
        self.timeline.reset();

        tracing::info!(
            scene = %self.name,
            duration = %self.total_duration(),
            "running scene"
        );

        let dt = Duration::from_seconds(1.0 / fps);
        // Frame zero shows the authored state before anything animates.
        backend.submit_frame(&self.registry.snapshot())?;
        let mut frames: u64 = 1;
        while !self.timeline.is_complete() {
            self.timeline.advance(&mut self.registry, dt);
            backend.submit_frame(&self.registry.snapshot())?;
            frames += 1;
        }

        for warning in self.timeline.warnings() {
            tracing::warn!(
                scene = %self.name,
                object = %warning.object,
                "step skipped during run: {}",
                warning.reason
            );
        }

        Ok(SceneReport {
            run_id,
            scene: self.name.clone(),
            frames,
            duration: self.timeline.total_duration(),
            warnings: self.timeline.warnings().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::object::{ObjectId, ShapeKind, VisualObject};
    use crate::step::{AnimationStep, StepKind};
    use motif_core::Point2D;

    fn two_step_scene() -> Scene {
        let mut registry = Registry::new();
        let a = registry.register(VisualObject::shape("a", ShapeKind::Circle { radius: 1.0 }));
        let mut timeline = Timeline::new();
        timeline.schedule(AnimationStep::new(StepKind::FadeIn, [a.clone()], 1.0).unwrap());
        timeline.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(2.0, 1.0)), [a], 1.0).unwrap(),
        );
        Scene::from_parts("test", Color::BACKGROUND, registry, timeline)
    }

    #[test]
    fn test_run_covers_total_duration() {
        let mut scene = two_step_scene();
        let mut backend = HeadlessBackend::new();
        let report = scene.run(&mut backend, 30.0).unwrap();
        // 2 seconds at 30 fps, plus the authored-state frame.
        assert_eq!(report.frames, 61);
        assert_eq!(backend.frames(), 61);
        assert!((report.duration.as_seconds() - 2.0).abs() < 1e-9);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let mut scene = two_step_scene();
        let mut backend = HeadlessBackend::new();
        scene.run(&mut backend, 30.0).unwrap();
        let first = scene.registry().snapshot();
        scene.run(&mut backend, 30.0).unwrap();
        let second = scene.registry().snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_reports_skipped_steps() {
        let mut timeline = Timeline::new();
        timeline.schedule(
            AnimationStep::new(StepKind::FadeIn, [ObjectId::new("ghost")], 1.0).unwrap(),
        );
        let mut scene = Scene::from_parts("ghosts", Color::BACKGROUND, Registry::new(), timeline);
        let mut backend = HeadlessBackend::new();
        let report = scene.run(&mut backend, 30.0).unwrap();
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_scene_round_trips_through_json() {
        let scene = two_step_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, scene.name);
        assert_eq!(back.registry().len(), scene.registry().len());
    }

    #[test]
    fn test_empty_scene_renders_one_frame() {
        let mut scene = Scene::new("blank");
        let mut backend = HeadlessBackend::new();
        let report = scene.run(&mut backend, 30.0).unwrap();
        assert_eq!(report.frames, 2);
    }
}
