//! Static scene validation.
//!
//! Catches authoring mistakes before a scene runs: steps that point at
//! unregistered objects, constraints that anchor on missing objects, and
//! constraint graphs that loop. Dangling step targets are warnings because
//! the scheduler tolerates them at runtime; cyclic or dangling constraints
//! are errors because layout cannot resolve them at all.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutConstraint;
use crate::object::ObjectId;
use crate::registry::Registry;
use crate::step::StepKind;
use crate::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Check a scene's parts against each other. Returns every issue found;
/// an empty list means the scene is clean.
pub fn validate(
    registry: &Registry,
    timeline: &Timeline,
    constraints: &[(ObjectId, LayoutConstraint)],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_step_targets(registry, timeline, &mut issues);
    check_constraint_anchors(registry, constraints, &mut issues);
    check_constraint_cycles(constraints, &mut issues);
    issues
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

fn check_step_targets(registry: &Registry, timeline: &Timeline, issues: &mut Vec<ValidationIssue>) {
    for (idx, step) in timeline.steps().enumerate() {
        for target in &step.targets {
            if !registry.contains(target) {
                issues.push(ValidationIssue::warning(format!(
                    "step {idx} ({}) targets unregistered object '{target}'",
                    step.kind.verb()
                )));
            }
        }
        if let StepKind::TransformInto(dest) = &step.kind {
            if !registry.contains(dest) {
                issues.push(ValidationIssue::warning(format!(
                    "step {idx} morphs into unregistered object '{dest}'"
                )));
            }
        }
    }
}

fn check_constraint_anchors(
    registry: &Registry,
    constraints: &[(ObjectId, LayoutConstraint)],
    issues: &mut Vec<ValidationIssue>,
) {
    for (subject, constraint) in constraints {
        if !registry.contains(subject) {
            issues.push(ValidationIssue::error(format!(
                "constraint placed on unregistered object '{subject}'"
            )));
        }
        if let Some(anchor) = constraint.anchor_id() {
            if !registry.contains(anchor) {
                issues.push(ValidationIssue::error(format!(
                    "constraint on '{subject}' anchors on unregistered object '{anchor}'"
                )));
            }
        }
    }
}

/// Detect loops in the subject -> anchor dependency graph with an iterative
/// three-color DFS. A cycle means no resolution order exists.
fn check_constraint_cycles(
    constraints: &[(ObjectId, LayoutConstraint)],
    issues: &mut Vec<ValidationIssue>,
) {
    let mut edges: HashMap<&ObjectId, Vec<&ObjectId>> = HashMap::new();
    for (subject, constraint) in constraints {
        if let Some(anchor) = constraint.anchor_id() {
            edges.entry(subject).or_default().push(anchor);
        }
    }

    let mut done: HashSet<&ObjectId> = HashSet::new();
    for start in edges.keys() {
        if done.contains(*start) {
            continue;
        }
        let mut on_path: HashSet<&ObjectId> = HashSet::new();
        let mut stack: Vec<(&ObjectId, usize)> = vec![(*start, 0)];
        on_path.insert(*start);
        while let Some((node, next)) = stack.pop() {
            let deps = edges.get(node).map(Vec::as_slice).unwrap_or(&[]);
            if next < deps.len() {
                stack.push((node, next + 1));
                let dep = deps[next];
                if on_path.contains(dep) {
                    issues.push(ValidationIssue::error(format!(
                        "constraint cycle through '{dep}'"
                    )));
                    return;
                }
                if !done.contains(dep) {
                    on_path.insert(dep);
                    stack.push((dep, 0));
                }
            } else {
                on_path.remove(node);
                done.insert(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Anchor;
    use crate::object::{ShapeKind, VisualObject};
    use crate::step::AnimationStep;

    fn constraint_on(anchor: &str) -> LayoutConstraint {
        LayoutConstraint::NextTo {
            anchor: ObjectId::new(anchor),
            edge: Anchor::Right,
            buffer: 0.5,
        }
    }

    #[test]
    fn test_clean_scene_has_no_issues() {
        let mut reg = Registry::new();
        let a = reg.register(VisualObject::shape("a", ShapeKind::Dot { radius: 0.1 }));
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [a], 1.0).unwrap());
        assert!(validate(&reg, &tl, &[]).is_empty());
    }

    #[test]
    fn test_dangling_step_target_is_warning() {
        let reg = Registry::new();
        let mut tl = Timeline::new();
        tl.schedule(AnimationStep::new(StepKind::FadeIn, [ObjectId::new("ghost")], 1.0).unwrap());
        let issues = validate(&reg, &tl, &[]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!has_errors(&issues));
    }

    #[test]
    fn test_dangling_anchor_is_error() {
        let mut reg = Registry::new();
        reg.register(VisualObject::shape("a", ShapeKind::Dot { radius: 0.1 }));
        let constraints = vec![(ObjectId::new("a"), constraint_on("nowhere"))];
        let issues = validate(&reg, &Timeline::new(), &constraints);
        assert!(has_errors(&issues));
    }

    #[test]
    fn test_constraint_cycle_detected() {
        let mut reg = Registry::new();
        for id in ["a", "b", "c"] {
            reg.register(VisualObject::shape(id, ShapeKind::Dot { radius: 0.1 }));
        }
        let constraints = vec![
            (ObjectId::new("a"), constraint_on("b")),
            (ObjectId::new("b"), constraint_on("c")),
            (ObjectId::new("c"), constraint_on("a")),
        ];
        let issues = validate(&reg, &Timeline::new(), &constraints);
        assert!(issues.iter().any(|i| i.message.contains("cycle")));
    }

    #[test]
    fn test_chain_without_cycle_is_fine() {
        let mut reg = Registry::new();
        for id in ["a", "b", "c"] {
            reg.register(VisualObject::shape(id, ShapeKind::Dot { radius: 0.1 }));
        }
        let constraints = vec![
            (ObjectId::new("b"), constraint_on("a")),
            (ObjectId::new("c"), constraint_on("b")),
        ];
        assert!(validate(&reg, &Timeline::new(), &constraints).is_empty());
    }
}
