//! The timeline scheduler.
//!
//! A timeline is a sequential list of parallel groups: every step in a group
//! shares one start time; a group starts only after the previous group has
//! completed. The caller drives a logical clock through `advance`; there is
//! no thread and no wall clock anywhere in the engine.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectId, Style, VisualObject};
use crate::registry::Registry;
use crate::step::{AnimationStep, StepKind};
use motif_core::{Duration, Timestamp, Transform2D};

/// Lifecycle of a single scheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepState {
    Pending,
    Running,
    Completed,
    /// Target was gone at start time; the step was dropped with a warning.
    Skipped,
}

/// Lifecycle of the whole timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineStatus {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// A non-fatal problem recorded while scheduling or running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineWarning {
    pub group: usize,
    pub step: usize,
    pub object: ObjectId,
    pub reason: String,
}

/// One object-state delta delivered to the caller for a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub id: ObjectId,
    pub pose: Transform2D,
    pub style: Style,
    pub visible: bool,
}

/// Pose + style + visibility of one object, as captured or interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ObjectState {
    pose: Transform2D,
    style: Style,
    visible: bool,
}

impl ObjectState {
    fn of(obj: &VisualObject) -> Self {
        Self {
            pose: obj.pose,
            style: obj.style.clone(),
            visible: obj.visible,
        }
    }

    fn lerp(&self, other: &ObjectState, t: f64) -> ObjectState {
        ObjectState {
            pose: self.pose.lerp(&other.pose, t),
            style: self.style.lerp(&other.style, t),
            // Visibility is not interpolated: the end value applies only
            // once the step reaches its final state.
            visible: if t >= 1.0 {
                other.visible
            } else {
                self.visible
            },
        }
    }
}

/// Per-target interpolation endpoints, captured when the step starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RunningTarget {
    id: ObjectId,
    /// State exactly as found at start time, used by `abort` to snap back.
    original: ObjectState,
    start: ObjectState,
    end: ObjectState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ScheduledStep {
    step: AnimationStep,
    state: StepState,
    targets: Vec<RunningTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Group {
    steps: Vec<ScheduledStep>,
}

impl Group {
    /// A group ends at start + max member duration.
    fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| s.step.duration)
            .fold(Duration::zero(), |acc, d| if d > acc { d } else { acc })
    }
}

/// Ordered sequence of animation steps and groups, advanced on a logical
/// clock. Ungrouped steps execute strictly after the prior step/group
/// completes; grouped steps share a common start time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    groups: Vec<Group>,
    clock: Timestamp,
    status: TimelineStatus,
    /// Index of the first group that has not completed.
    current: usize,
    current_started: bool,
    /// Start time of the current group on the logical clock.
    group_start: Timestamp,
    warnings: Vec<TimelineWarning>,
}

impl Default for TimelineStatus {
    fn default() -> Self {
        TimelineStatus::Idle
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step as its own sequential group. Returns its position
    /// (group index) in the timeline.
    pub fn schedule(&mut self, step: AnimationStep) -> usize {
        self.groups.push(Group { steps: vec![ScheduledStep {
            step,
            state: StepState::Pending,
            targets: Vec::new(),
        }] });
        self.groups.len() - 1
    }

    /// Append a step to the last group so it starts simultaneously with the
    /// group's other members. Creates a first group when the timeline is
    /// empty. Returns the group index.
    pub fn schedule_with_last(&mut self, step: AnimationStep) -> usize {
        if self.groups.is_empty() {
            return self.schedule(step);
        }
        let idx = self.groups.len() - 1;
        self.groups[idx].steps.push(ScheduledStep {
            step,
            state: StepState::Pending,
            targets: Vec::new(),
        });
        idx
    }

    /// Append a whole set of steps as one parallel group.
    pub fn play_group(&mut self, steps: Vec<AnimationStep>) -> usize {
        let group = Group {
            steps: steps
                .into_iter()
                .map(|step| ScheduledStep {
                    step,
                    state: StepState::Pending,
                    targets: Vec::new(),
                })
                .collect(),
        };
        self.groups.push(group);
        self.groups.len() - 1
    }

    /// Current logical clock. Monotonically non-decreasing.
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    pub fn status(&self) -> TimelineStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == TimelineStatus::Completed
    }

    /// Total scheduled duration: the sum over groups of each group's max
    /// member duration. Parallel steps do not add to the total.
    pub fn total_duration(&self) -> Duration {
        self.groups
            .iter()
            .fold(Duration::zero(), |acc, g| acc + g.duration())
    }

    pub fn warnings(&self) -> &[TimelineWarning] {
        &self.warnings
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// All scheduled steps in timeline order, for inspection and
    /// validation.
    pub fn steps(&self) -> impl Iterator<Item = &AnimationStep> {
        self.groups.iter().flat_map(|g| g.steps.iter().map(|s| &s.step))
    }

    /// Discard all runtime state so the same timeline can be replayed.
    pub fn reset(&mut self) {
        self.clock = Timestamp::zero();
        self.status = TimelineStatus::Idle;
        self.current = 0;
        self.current_started = false;
        self.group_start = Timestamp::zero();
        self.warnings.clear();
        for group in &mut self.groups {
            for step in &mut group.steps {
                step.state = StepState::Pending;
                step.targets.clear();
            }
        }
    }

    /// Advance the logical clock by `delta`, returning the object-state
    /// changes for this tick. Changes are also applied to the registry:
    /// interpolated states while a step runs, exact end states on
    /// completion. A step whose target is gone at start time is skipped
    /// with a recorded warning and the timeline still completes.
    pub fn advance(&mut self, registry: &mut Registry, delta: Duration) -> Vec<StateChange> {
        let mut changes = Vec::new();
        if matches!(
            self.status,
            TimelineStatus::Completed | TimelineStatus::Aborted
        ) {
            return changes;
        }

        let new_clock = self.clock + delta;
        self.status = TimelineStatus::Running;

        loop {
            if self.current >= self.groups.len() {
                self.status = TimelineStatus::Completed;
                break;
            }

            let group_duration = self.groups[self.current].duration();

            // Targets are captured only once the clock moves past the
            // group's start, never while it sits exactly on the boundary.
            // An object removed between two ticks that meet at the
            // boundary is still found missing at start time and skipped
            // with a warning. Zero-duration groups fire the moment the
            // clock reaches them.
            if new_clock <= self.group_start && !group_duration.is_zero() {
                break;
            }

            if !self.current_started {
                self.start_group(registry);
            }

            let group_end = self.group_start + group_duration;
            if new_clock >= group_end {
                self.finalize_group(registry, &mut changes);
                self.group_start = group_end;
                self.current += 1;
                self.current_started = false;
                continue;
            }

            let elapsed = self.group_start.duration_to(&new_clock);
            self.tick_group(registry, elapsed, &mut changes);
            break;
        }

        self.clock = new_clock;
        changes
    }

    /// Abort the timeline mid-run. Completed steps' effects remain applied;
    /// every currently running step's targets snap back to their pre-step
    /// state (partial interpolation is discarded).
    pub fn abort(&mut self, registry: &mut Registry) {
        if self.current_started && self.current < self.groups.len() {
            for scheduled in &mut self.groups[self.current].steps {
                if scheduled.state != StepState::Running {
                    continue;
                }
                for target in &scheduled.targets {
                    let _ = registry.update(&target.id, |obj| {
                        obj.pose = target.original.pose;
                        obj.style = target.original.style.clone();
                        obj.visible = target.original.visible;
                    });
                }
            }
        }
        self.status = TimelineStatus::Aborted;
    }

    /// Transition every step in the current group to Running, capturing
    /// interpolation endpoints. Steps with missing targets are skipped.
    fn start_group(&mut self, registry: &Registry) {
        let group_idx = self.current;
        for (step_idx, scheduled) in self.groups[group_idx].steps.iter_mut().enumerate() {
            match capture_targets(&scheduled.step, registry) {
                Ok(targets) => {
                    scheduled.targets = targets;
                    scheduled.state = StepState::Running;
                }
                Err(reason) => {
                    tracing::warn!(
                        group = group_idx,
                        step = step_idx,
                        "skipping {} step: {}",
                        scheduled.step.kind.verb(),
                        reason.1
                    );
                    self.warnings.push(TimelineWarning {
                        group: group_idx,
                        step: step_idx,
                        object: reason.0,
                        reason: reason.1,
                    });
                    scheduled.state = StepState::Skipped;
                }
            }
        }
        self.current_started = true;
    }

    /// Apply interpolated states for a group mid-flight. Steps shorter than
    /// the group's longest member complete early at their own duration.
    fn tick_group(&mut self, registry: &mut Registry, elapsed: Duration, out: &mut Vec<StateChange>) {
        for scheduled in &mut self.groups[self.current].steps {
            if scheduled.state != StepState::Running {
                continue;
            }
            let raw = if scheduled.step.duration.is_zero() {
                1.0
            } else {
                (elapsed.as_seconds() / scheduled.step.duration.as_seconds()).min(1.0)
            };
            let done = raw >= 1.0;
            // Easing shapes the path; the endpoints are exact.
            let t = if done {
                1.0
            } else {
                scheduled.step.easing.apply(raw)
            };
            for target in &scheduled.targets {
                let state = target.start.lerp(&target.end, t);
                apply_state(registry, &target.id, &state, out);
            }
            if done {
                scheduled.state = StepState::Completed;
            }
        }
    }

    /// Apply exact end states for every still-running step and mark the
    /// group completed.
    fn finalize_group(&mut self, registry: &mut Registry, out: &mut Vec<StateChange>) {
        for scheduled in &mut self.groups[self.current].steps {
            if scheduled.state != StepState::Running {
                continue;
            }
            for target in &scheduled.targets {
                apply_state(registry, &target.id, &target.end, out);
            }
            scheduled.state = StepState::Completed;
        }
    }
}

fn apply_state(
    registry: &mut Registry,
    id: &ObjectId,
    state: &ObjectState,
    out: &mut Vec<StateChange>,
) {
    // The object can vanish mid-step; losing the update is the documented
    // non-fatal path.
    let applied = registry.update(id, |obj| {
        obj.pose = state.pose;
        obj.style = state.style.clone();
        obj.visible = state.visible;
    });
    if applied.is_ok() {
        out.push(StateChange {
            id: id.clone(),
            pose: state.pose,
            style: state.style.clone(),
            visible: state.visible,
        });
    }
}

/// Compute the interpolation endpoints for a step from current registry
/// state. A missing target (or missing morph destination) yields the
/// offending id and a reason; the scheduler turns that into a skip.
fn capture_targets(
    step: &AnimationStep,
    registry: &Registry,
) -> Result<Vec<RunningTarget>, (ObjectId, String)> {
    let mut targets = Vec::with_capacity(step.targets.len());

    for id in &step.targets {
        let obj = match registry.get(id) {
            Ok(obj) => obj,
            Err(_) => {
                return Err((
                    id.clone(),
                    format!("target '{}' is not registered", id),
                ))
            }
        };
        let original = ObjectState::of(obj);
        let (start, end) = endpoints(&step.kind, &original, registry)
            .map_err(|reason| (id.clone(), reason))?;
        targets.push(RunningTarget {
            id: id.clone(),
            original,
            start,
            end,
        });
    }

    // A morph also owns revealing its destination at completion.
    if let StepKind::TransformInto(dest) = &step.kind {
        let obj = registry
            .get(dest)
            .map_err(|_| (dest.clone(), format!("morph destination '{}' is not registered", dest)))?;
        let original = ObjectState::of(obj);
        let mut end = original.clone();
        end.visible = true;
        targets.push(RunningTarget {
            id: dest.clone(),
            start: original.clone(),
            original,
            end,
        });
    }

    Ok(targets)
}

/// Start/end interpolation states for one target under a step kind.
fn endpoints(
    kind: &StepKind,
    current: &ObjectState,
    registry: &Registry,
) -> Result<(ObjectState, ObjectState), String> {
    let mut start = current.clone();
    let mut end = current.clone();

    match kind {
        StepKind::FadeIn | StepKind::Write => {
            start.visible = true;
            start.pose.opacity = 0.0;
            end.visible = true;
            end.pose.opacity = 1.0;
        }
        StepKind::FadeOut => {
            end.pose.opacity = 0.0;
            end.visible = false;
        }
        StepKind::MoveTo(p) => {
            end.pose.position = *p;
        }
        StepKind::MoveBy(d) => {
            end.pose.position = current.pose.position + *d;
        }
        StepKind::ScaleBy(f) => {
            end.pose.scale = current.pose.scale * *f;
        }
        StepKind::RotateTo(a) => {
            end.pose.rotation = *a;
        }
        StepKind::ColorTo(c) => {
            end.style.color = *c;
        }
        StepKind::TransformInto(dest) => {
            let dest_obj = registry
                .get(dest)
                .map_err(|_| format!("morph destination '{}' is not registered", dest))?;
            start.visible = true;
            end.pose = dest_obj.pose;
            end.style = dest_obj.style.clone();
            end.visible = false;
        }
        StepKind::Wait => {}
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ShapeKind, VisualObject};
    use motif_core::Point2D;

    fn dot(id: &str) -> VisualObject {
        VisualObject::shape(id, ShapeKind::Dot { radius: 0.1 })
    }

    fn secs(s: f64) -> Duration {
        Duration::from_seconds(s)
    }

    #[test]
    fn test_sequential_groups_complete_at_sum_of_durations() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [a.clone()], 1.0).unwrap());
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(2.0, 0.0)), [a.clone()], 2.0)
                .unwrap(),
        );
        tl.schedule(AnimationStep::wait(0.5).unwrap());
        assert!((tl.total_duration().as_seconds() - 3.5).abs() < 1e-9);

        // Step just short of the total: still running.
        tl.advance(&mut reg, secs(3.4));
        assert!(!tl.is_complete());
        tl.advance(&mut reg, secs(0.1));
        assert!(tl.is_complete());
        assert!((tl.clock().as_seconds() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_steps_do_not_extend_duration() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let b = reg.register(dot("b"));
        let c = reg.register(dot("c"));
        let mut tl = Timeline::new();
        tl.play_group(vec![
            AnimationStep::new(StepKind::FadeIn, [a], 2.0).unwrap(),
            AnimationStep::new(StepKind::FadeIn, [b], 1.0).unwrap(),
            AnimationStep::new(StepKind::FadeIn, [c], 0.5).unwrap(),
        ]);
        // Group end = start + max member duration.
        assert!((tl.total_duration().as_seconds() - 2.0).abs() < 1e-9);
        tl.advance(&mut reg, secs(2.0));
        assert!(tl.is_complete());
    }

    #[test]
    fn test_fade_in_interpolates_opacity() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::FadeIn, [a.clone()], 1.0)
                .unwrap()
                .with_easing(motif_core::Easing::Linear),
        );

        tl.advance(&mut reg, secs(0.5));
        let obj = reg.get(&a).unwrap();
        assert!(obj.visible);
        assert!((obj.pose.opacity - 0.5).abs() < 1e-9);

        tl.advance(&mut reg, secs(0.5));
        let obj = reg.get(&a).unwrap();
        assert!((obj.pose.opacity - 1.0).abs() < 1e-9);
        assert!(tl.is_complete());
    }

    #[test]
    fn test_fade_out_hides_at_completion() {
        let mut reg = Registry::new();
        let mut obj = dot("a");
        obj.visible = true;
        let a = reg.register(obj);
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeOut, [a.clone()], 1.0).unwrap());

        tl.advance(&mut reg, secs(0.5));
        assert!(reg.get(&a).unwrap().visible, "still visible mid-fade");
        tl.advance(&mut reg, secs(0.5));
        assert!(!reg.get(&a).unwrap().visible);
    }

    #[test]
    fn test_move_to_exact_endpoint() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(3.0, -1.0)), [a.clone()], 1.0)
                .unwrap(),
        );
        tl.advance(&mut reg, secs(2.0));
        let obj = reg.get(&a).unwrap();
        assert_eq!(obj.pose.position, Point2D::new(3.0, -1.0));
    }

    #[test]
    fn test_scale_by_multiplies_current_scale() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a").scaled(2.0));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::ScaleBy(3.0), [a.clone()], 1.0).unwrap());
        tl.advance(&mut reg, secs(1.0));
        let obj = reg.get(&a).unwrap();
        assert!((obj.pose.scale.x - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_target_skipped_timeline_completes() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [a.clone()], 1.0).unwrap());
        tl.schedule(
            AnimationStep::new(StepKind::FadeIn, [ObjectId::new("gone")], 1.0).unwrap(),
        );
        tl.schedule(AnimationStep::wait(1.0).unwrap());

        reg.remove(&ObjectId::new("gone"));
        tl.advance(&mut reg, secs(3.0));
        assert!(tl.is_complete());
        assert_eq!(tl.warnings().len(), 1);
        assert_eq!(tl.warnings()[0].object, ObjectId::new("gone"));
    }

    #[test]
    fn test_target_removed_before_its_group_starts() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let b = reg.register(dot("b"));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [a], 1.0).unwrap());
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [b.clone()], 1.0).unwrap());

        // Run through the first group, then drop b before its step starts.
        tl.advance(&mut reg, secs(1.0));
        reg.remove(&b);
        tl.advance(&mut reg, secs(1.0));
        assert!(tl.is_complete());
        assert_eq!(tl.warnings().len(), 1);
    }

    #[test]
    fn test_transform_into_swaps_visibility() {
        let mut reg = Registry::new();
        let mut src = dot("src");
        src.visible = true;
        let src = reg.register(src);
        let dst = reg.register(dot("dst").at(2.0, 2.0));

        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::TransformInto(dst.clone()), [src.clone()], 1.0).unwrap(),
        );
        tl.advance(&mut reg, secs(1.0));

        let src_obj = reg.get(&src).unwrap();
        let dst_obj = reg.get(&dst).unwrap();
        assert!(!src_obj.visible, "source hidden after morph");
        assert!(dst_obj.visible, "destination revealed after morph");
        assert_eq!(src_obj.pose.position, Point2D::new(2.0, 2.0));
    }

    #[test]
    fn test_abort_snaps_running_step_to_pre_state() {
        let mut reg = Registry::new();
        let mut obj = dot("a");
        obj.visible = true;
        let a = reg.register(obj);
        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(4.0, 0.0)), [a.clone()], 2.0)
                .unwrap(),
        );

        tl.advance(&mut reg, secs(1.0));
        assert!(reg.get(&a).unwrap().pose.position.x > 0.0);
        tl.abort(&mut reg);
        assert_eq!(tl.status(), TimelineStatus::Aborted);
        // Partial interpolation discarded: back at the pre-step position.
        assert!((reg.get(&a).unwrap().pose.position.x).abs() < 1e-9);
        // Aborted timelines do not advance further.
        assert!(tl.advance(&mut reg, secs(1.0)).is_empty());
    }

    #[test]
    fn test_abort_keeps_completed_effects() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(1.0, 0.0)), [a.clone()], 1.0)
                .unwrap(),
        );
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(5.0, 0.0)), [a.clone()], 1.0)
                .unwrap(),
        );

        tl.advance(&mut reg, secs(1.5));
        tl.abort(&mut reg);
        // First step completed at x=1; the running second step snapped back.
        assert!((reg.get(&a).unwrap().pose.position.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut reg = Registry::new();
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::wait(1.0).unwrap());
        let mut last = tl.clock();
        for _ in 0..10 {
            tl.advance(&mut reg, secs(0.2));
            assert!(tl.clock() >= last);
            last = tl.clock();
        }
    }

    #[test]
    fn test_empty_timeline_completes_immediately() {
        let mut reg = Registry::new();
        let mut tl = Timeline::new();
        assert!(tl.advance(&mut reg, secs(0.1)).is_empty());
        assert!(tl.is_complete());
    }

    #[test]
    fn test_zero_duration_step_applies_end_state() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(
            AnimationStep::new(StepKind::MoveTo(Point2D::new(2.0, 2.0)), [a.clone()], 0.0)
                .unwrap(),
        );
        tl.advance(&mut reg, secs(0.0));
        assert!(tl.is_complete());
        assert_eq!(reg.get(&a).unwrap().pose.position, Point2D::new(2.0, 2.0));
    }

    #[test]
    fn test_schedule_with_last_joins_group() {
        let mut tl = Timeline::new();
        let a = AnimationStep::wait(1.0).unwrap();
        let b = AnimationStep::wait(2.0).unwrap();
        let first = tl.schedule(a);
        let second = tl.schedule_with_last(b);
        assert_eq!(first, second);
        assert_eq!(tl.group_count(), 1);
        assert!((tl.total_duration().as_seconds() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_allows_replay() {
        let mut reg = Registry::new();
        let a = reg.register(dot("a"));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [a], 1.0).unwrap());
        tl.advance(&mut reg, secs(1.0));
        assert!(tl.is_complete());

        tl.reset();
        assert_eq!(tl.status(), TimelineStatus::Idle);
        assert!((tl.clock().as_seconds()).abs() < 1e-9);
        tl.advance(&mut reg, secs(1.0));
        assert!(tl.is_complete());
    }
}
