//! Fluent scene authoring.
//!
//! `SceneBuilder` is how scenes are written: register objects (text extents
//! and image assets come from the back-end), position them with layout
//! constraints and arrangements, schedule animation verbs, then `build` a
//! validated `Scene`.

use std::path::Path;

use crate::asset::AssetCatalog;
use crate::backend::RenderBackend;
use crate::layout::{self, LayoutConstraint};
use crate::object::{ObjectContent, ObjectId, ShapeKind, TextStyle, VisualObject};
use crate::registry::Registry;
use crate::scene::Scene;
use crate::step::{AnimationStep, StepKind};
use crate::timeline::Timeline;
use crate::validate;
use motif_core::{Color, MotifError, MotifResult, Point2D, PlaybackConfig};

pub struct SceneBuilder<'a> {
    name: String,
    backend: &'a mut dyn RenderBackend,
    config: PlaybackConfig,
    background: Color,
    registry: Registry,
    timeline: Timeline,
    assets: AssetCatalog,
    constraints: Vec<(ObjectId, LayoutConstraint)>,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(name: impl Into<String>, backend: &'a mut dyn RenderBackend) -> Self {
        let config = PlaybackConfig::default();
        let background = config.background;
        Self {
            name: name.into(),
            backend,
            config,
            background,
            registry: Registry::new(),
            timeline: Timeline::new(),
            assets: AssetCatalog::new(),
            constraints: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: PlaybackConfig) -> Self {
        self.background = config.background;
        self.config = config;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Assets loaded through `image` so far.
    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    /// Register a pre-built object. Duplicate ids are authoring errors.
    pub fn object(&mut self, object: VisualObject) -> MotifResult<ObjectId> {
        if self.registry.contains(&object.id) {
            return Err(MotifError::Validation(format!(
                "duplicate object id '{}'",
                object.id
            )));
        }
        Ok(self.registry.register(object))
    }

    /// Register a text block. Its extent comes from the back-end's text
    /// measurement, so layout sees real geometry.
    pub fn text(
        &mut self,
        id: impl Into<ObjectId>,
        content: impl Into<String>,
        style: TextStyle,
    ) -> MotifResult<ObjectId> {
        let text = content.into();
        let extent = self.backend.measure_text(&text, &style);
        self.object(VisualObject::new(
            id,
            ObjectContent::Text { text, style },
            extent,
        ))
    }

    /// Register a typeset formula. Measured like text; a real back-end
    /// substitutes proper math layout.
    pub fn formula(
        &mut self,
        id: impl Into<ObjectId>,
        source: impl Into<String>,
        style: TextStyle,
    ) -> MotifResult<ObjectId> {
        let tex = source.into();
        let extent = self.backend.measure_text(&tex, &style);
        self.object(VisualObject::new(
            id,
            ObjectContent::Formula { tex, style },
            extent,
        ))
    }

    pub fn shape(&mut self, id: impl Into<ObjectId>, kind: ShapeKind) -> MotifResult<ObjectId> {
        self.object(VisualObject::shape(id, kind))
    }

    /// Register an image backed by an external file. The back-end loads the
    /// asset; a missing file is fatal because layout needs its extent.
    pub fn image(
        &mut self,
        id: impl Into<ObjectId>,
        path: impl AsRef<Path>,
    ) -> MotifResult<ObjectId> {
        let asset = self.backend.load_asset(path.as_ref())?;
        let extent = asset.extent;
        let asset_id = asset.id.clone();
        self.assets.register(asset);
        self.object(VisualObject::new(
            id,
            ObjectContent::Image { asset_id },
            extent,
        ))
    }

    /// Mutate a registered object in place (position, style, visibility).
    pub fn update(
        &mut self,
        id: &ObjectId,
        f: impl FnOnce(&mut VisualObject),
    ) -> MotifResult<()> {
        self.registry.update(id, f)
    }

    pub fn move_to(&mut self, id: &ObjectId, x: f64, y: f64) -> MotifResult<()> {
        self.registry
            .update(id, |obj| obj.pose.position = Point2D::new(x, y))
    }

    /// Position an object by a layout constraint, resolved immediately
    /// against current registry state. The constraint is also recorded so
    /// `build` can validate the constraint graph as a whole.
    pub fn constrain(&mut self, id: &ObjectId, constraint: LayoutConstraint) -> MotifResult<()> {
        let position = layout::resolve(&constraint, &self.registry, &self.config, id)?;
        self.registry
            .update(id, |obj| obj.pose.position = position)?;
        self.constraints.push((id.clone(), constraint));
        Ok(())
    }

    pub fn row(&mut self, ids: &[ObjectId], buffer: f64) -> MotifResult<()> {
        layout::arrange_row(&mut self.registry, ids, buffer)
    }

    pub fn column(&mut self, ids: &[ObjectId], buffer: f64) -> MotifResult<()> {
        layout::arrange_column(&mut self.registry, ids, buffer)
    }

    pub fn circle(
        &mut self,
        ids: &[ObjectId],
        center: Point2D,
        radius: f64,
    ) -> MotifResult<()> {
        layout::place_in_circle(&mut self.registry, ids, center, radius)
    }

    pub fn spiral(
        &mut self,
        ids: &[ObjectId],
        center: Point2D,
        r0: f64,
        dr: f64,
        dtheta: f64,
    ) -> MotifResult<()> {
        layout::place_in_spiral(&mut self.registry, ids, center, r0, dr, dtheta)
    }

    /// Schedule a step as its own sequential group.
    pub fn play(&mut self, kind: StepKind, targets: &[ObjectId], seconds: f64) -> MotifResult<()> {
        let step = AnimationStep::new(kind, targets.iter().cloned(), seconds)?;
        self.timeline.schedule(step);
        Ok(())
    }

    /// Schedule a step to run simultaneously with the previous one.
    pub fn also(&mut self, kind: StepKind, targets: &[ObjectId], seconds: f64) -> MotifResult<()> {
        let step = AnimationStep::new(kind, targets.iter().cloned(), seconds)?;
        self.timeline.schedule_with_last(step);
        Ok(())
    }

    /// Schedule a set of steps as one parallel group.
    pub fn group(&mut self, steps: Vec<AnimationStep>) {
        self.timeline.play_group(steps);
    }

    /// Schedule an already-built step as its own group.
    pub fn step(&mut self, step: AnimationStep) {
        self.timeline.schedule(step);
    }

    /// Hold the current state for a span of the clock.
    pub fn wait(&mut self, seconds: f64) -> MotifResult<()> {
        self.timeline.schedule(AnimationStep::wait(seconds)?);
        Ok(())
    }

    /// Validate and assemble the scene. Validation errors (unresolvable
    /// constraints) fail the build; warnings (dangling step targets, which
    /// the scheduler tolerates) are logged and kept in the scene's run
    /// reports.
    pub fn build(self) -> MotifResult<Scene> {
        let issues = validate::validate(&self.registry, &self.timeline, &self.constraints);
        for issue in issues.iter().filter(|i| i.severity == validate::Severity::Warning) {
            tracing::warn!(scene = %self.name, "{issue}");
        }
        if validate::has_errors(&issues) {
            let summary = issues
                .iter()
                .filter(|i| i.severity == validate::Severity::Error)
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(MotifError::Validation(summary));
        }
        Ok(Scene::from_parts(
            self.name,
            self.background,
            self.registry,
            self.timeline,
        ))
    }
}
