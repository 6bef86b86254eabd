//! The layout resolver.
//!
//! Computes absolute placement of an object from relative constraints:
//! anchor-relative offsets, viewport edge alignment, and deterministic
//! arrangements (row, column, circle, spiral). This is a pure fold over
//! already-placed objects, not a general constraint solver.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::object::ObjectId;
use crate::registry::Registry;
use motif_core::{MotifError, MotifResult, PlaybackConfig, Point2D};

/// A direction or corner used for anchoring. The y axis points up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Center,
}

impl Anchor {
    fn horizontal(&self) -> i8 {
        match self {
            Anchor::Left | Anchor::UpLeft | Anchor::DownLeft => -1,
            Anchor::Right | Anchor::UpRight | Anchor::DownRight => 1,
            _ => 0,
        }
    }

    fn vertical(&self) -> i8 {
        match self {
            Anchor::Up | Anchor::UpLeft | Anchor::UpRight => 1,
            Anchor::Down | Anchor::DownLeft | Anchor::DownRight => -1,
            _ => 0,
        }
    }
}

/// A relative placement rule for one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutConstraint {
    /// Place the subject adjacent to another object's edge, separated by a
    /// buffer. `NextTo { anchor: "circle", edge: Right, buffer: 0.5 }`.
    NextTo {
        anchor: ObjectId,
        edge: Anchor,
        buffer: f64,
    },
    /// Place the subject at a fixed offset from another object's center.
    AtOffset { anchor: ObjectId, offset: Point2D },
    /// Align the subject against an edge (or corner) of the viewport frame.
    /// The coordinate along the untouched axis is preserved.
    ToEdge { edge: Anchor, margin: f64 },
    /// Absolute placement in scene units.
    At(Point2D),
}

impl LayoutConstraint {
    /// The object this constraint depends on, if any.
    pub fn anchor_id(&self) -> Option<&ObjectId> {
        match self {
            LayoutConstraint::NextTo { anchor, .. } | LayoutConstraint::AtOffset { anchor, .. } => {
                Some(anchor)
            }
            _ => None,
        }
    }
}

/// Resolve a constraint on `subject` into an absolute position. The subject
/// and any anchor must already be registered (anchors carry the extents the
/// math needs); an unknown anchor is a `DanglingReference`.
pub fn resolve(
    constraint: &LayoutConstraint,
    registry: &Registry,
    config: &PlaybackConfig,
    subject: &ObjectId,
) -> MotifResult<Point2D> {
    let own = registry.get(subject)?;
    let own_extent = own.scaled_extent();
    let current = own.pose.position;

    match constraint {
        LayoutConstraint::At(p) => Ok(*p),

        LayoutConstraint::AtOffset { anchor, offset } => {
            let anchor_obj = registry
                .get(anchor)
                .map_err(|_| MotifError::dangling(&anchor.0, "constraint AtOffset"))?;
            Ok(anchor_obj.pose.position + *offset)
        }

        LayoutConstraint::NextTo {
            anchor,
            edge,
            buffer,
        } => {
            let anchor_obj = registry
                .get(anchor)
                .map_err(|_| MotifError::dangling(&anchor.0, "constraint NextTo"))?;
            let bounds = anchor_obj.bounds();
            let mut pos = bounds.center;
            match edge.horizontal() {
                -1 => pos.x = bounds.left() - buffer - own_extent.width / 2.0,
                1 => pos.x = bounds.right() + buffer + own_extent.width / 2.0,
                _ => {}
            }
            match edge.vertical() {
                -1 => pos.y = bounds.bottom() - buffer - own_extent.height / 2.0,
                1 => pos.y = bounds.top() + buffer + own_extent.height / 2.0,
                _ => {}
            }
            Ok(pos)
        }

        LayoutConstraint::ToEdge { edge, margin } => {
            let mut pos = current;
            match edge.horizontal() {
                -1 => pos.x = -config.half_width() + margin + own_extent.width / 2.0,
                1 => pos.x = config.half_width() - margin - own_extent.width / 2.0,
                _ => {}
            }
            match edge.vertical() {
                -1 => pos.y = -config.half_height() + margin + own_extent.height / 2.0,
                1 => pos.y = config.half_height() - margin - own_extent.height / 2.0,
                _ => {}
            }
            if *edge == Anchor::Center {
                pos = Point2D::zero();
            }
            Ok(pos)
        }
    }
}

/// Arrange objects left-to-right: each object's x is the previous object's x
/// plus the previous extent plus the buffer; y is aligned to the first
/// object. The first object stays where it is.
pub fn arrange_row(registry: &mut Registry, ids: &[ObjectId], buffer: f64) -> MotifResult<()> {
    arrange_along(registry, ids, buffer, true)
}

/// Arrange objects top-to-bottom, analogous to [`arrange_row`].
pub fn arrange_column(registry: &mut Registry, ids: &[ObjectId], buffer: f64) -> MotifResult<()> {
    arrange_along(registry, ids, buffer, false)
}

fn arrange_along(
    registry: &mut Registry,
    ids: &[ObjectId],
    buffer: f64,
    horizontal: bool,
) -> MotifResult<()> {
    let Some(first) = ids.first() else {
        return Ok(());
    };
    let first_obj = registry
        .get(first)
        .map_err(|_| MotifError::dangling(&first.0, "arrangement"))?;
    let mut cursor = first_obj.pose.position;
    let mut prev_extent = first_obj.scaled_extent();

    for id in &ids[1..] {
        if horizontal {
            cursor.x += prev_extent.width + buffer;
        } else {
            cursor.y -= prev_extent.height + buffer;
        }
        let obj = registry
            .get_mut(id)
            .map_err(|_| MotifError::dangling(&id.0, "arrangement"))?;
        obj.pose.position = cursor;
        prev_extent = obj.scaled_extent();
    }
    Ok(())
}

/// Positions for n objects on a circle: `angle(i) = i * 2π/n`.
/// n = 0 yields no placements; n = 1 places at angle 0.
pub fn arrange_circle(center: Point2D, radius: f64, n: usize) -> Vec<Point2D> {
    if n == 0 {
        return Vec::new();
    }
    let step = TAU / n as f64;
    (0..n)
        .map(|i| center.on_circle(radius, i as f64 * step))
        .collect()
}

/// Positions for n objects on an open spiral:
/// `radius(i) = r0 + i*dr`, `angle(i) = i*dtheta`.
pub fn arrange_spiral(
    center: Point2D,
    r0: f64,
    dr: f64,
    dtheta: f64,
    n: usize,
) -> Vec<Point2D> {
    (0..n)
        .map(|i| center.on_circle(r0 + i as f64 * dr, i as f64 * dtheta))
        .collect()
}

/// Apply a circular arrangement to registered objects.
pub fn place_in_circle(
    registry: &mut Registry,
    ids: &[ObjectId],
    center: Point2D,
    radius: f64,
) -> MotifResult<()> {
    let positions = arrange_circle(center, radius, ids.len());
    place_at(registry, ids, &positions)
}

/// Apply a spiral arrangement to registered objects.
pub fn place_in_spiral(
    registry: &mut Registry,
    ids: &[ObjectId],
    center: Point2D,
    r0: f64,
    dr: f64,
    dtheta: f64,
) -> MotifResult<()> {
    let positions = arrange_spiral(center, r0, dr, dtheta, ids.len());
    place_at(registry, ids, &positions)
}

fn place_at(registry: &mut Registry, ids: &[ObjectId], positions: &[Point2D]) -> MotifResult<()> {
    for (id, pos) in ids.iter().zip(positions) {
        registry
            .update(id, |o| o.pose.position = *pos)
            .map_err(|_| MotifError::dangling(&id.0, "arrangement"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ShapeKind, VisualObject};

    fn rect(id: &str, width: f64, height: f64) -> VisualObject {
        VisualObject::shape(id, ShapeKind::Rect { width, height })
    }

    fn config() -> PlaybackConfig {
        PlaybackConfig::default()
    }

    #[test]
    fn test_row_arrangement_example() {
        // Widths [2, 3, 1], buffer 1, starting at x = 0:
        // each x = previous x + previous width + buffer -> 0, 3, 7.
        let mut reg = Registry::new();
        let ids: Vec<ObjectId> = [("a", 2.0), ("b", 3.0), ("c", 1.0)]
            .iter()
            .map(|(id, w)| reg.register(rect(id, *w, 1.0)))
            .collect();
        arrange_row(&mut reg, &ids, 1.0).unwrap();
        let xs: Vec<f64> = ids
            .iter()
            .map(|id| reg.get(id).unwrap().pose.position.x)
            .collect();
        assert!((xs[0] - 0.0).abs() < 1e-9);
        assert!((xs[1] - 3.0).abs() < 1e-9);
        assert!((xs[2] - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_column_stacks_downward() {
        let mut reg = Registry::new();
        let ids: Vec<ObjectId> = [("a", 1.0), ("b", 1.0)]
            .iter()
            .map(|(id, w)| reg.register(rect(id, *w, 2.0)))
            .collect();
        arrange_column(&mut reg, &ids, 0.5).unwrap();
        let b = reg.get(&ids[1]).unwrap();
        assert!((b.pose.position.y - -2.5).abs() < 1e-9);
    }

    #[test]
    fn test_arrangement_missing_object_is_dangling() {
        let mut reg = Registry::new();
        let a = reg.register(rect("a", 1.0, 1.0));
        let ghost = ObjectId::new("ghost");
        let err = arrange_row(&mut reg, &[a, ghost], 1.0).unwrap_err();
        assert!(matches!(err, MotifError::DanglingReference { .. }));
    }

    #[test]
    fn test_circle_all_points_at_radius() {
        let center = Point2D::new(0.5, -0.5);
        for n in 1..=17 {
            let points = arrange_circle(center, 2.0, n);
            assert_eq!(points.len(), n);
            for p in &points {
                assert!(
                    (p.distance(&center) - 2.0).abs() < 1e-9,
                    "point {:?} not at radius 2 for n={}",
                    p,
                    n
                );
            }
        }
    }

    #[test]
    fn test_circle_edge_cases() {
        assert!(arrange_circle(Point2D::zero(), 2.0, 0).is_empty());
        let single = arrange_circle(Point2D::zero(), 2.0, 1);
        // n = 1 places at angle 0: directly right of center.
        assert!((single[0].x - 2.0).abs() < 1e-9);
        assert!(single[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_spiral_radius_increment_exact() {
        let center = Point2D::zero();
        let points = arrange_spiral(center, 0.3, 0.3, 0.3, 20);
        for i in 0..points.len() - 1 {
            let r0 = points[i].distance(&center);
            let r1 = points[i + 1].distance(&center);
            assert!(
                ((r1 - r0) - 0.3).abs() < 1e-9,
                "radius step {} -> {} not exactly 0.3",
                r0,
                r1
            );
        }
    }

    #[test]
    fn test_next_to_right() {
        let mut reg = Registry::new();
        let anchor = reg.register(rect("anchor", 2.0, 2.0).at(1.0, 0.0));
        let subject = reg.register(rect("subject", 1.0, 1.0));
        let constraint = LayoutConstraint::NextTo {
            anchor,
            edge: Anchor::Right,
            buffer: 0.5,
        };
        let pos = resolve(&constraint, &reg, &config(), &subject).unwrap();
        // anchor right edge at 2.0, buffer 0.5, half own width 0.5.
        assert!((pos.x - 3.0).abs() < 1e-9);
        assert!(pos.y.abs() < 1e-9);
    }

    #[test]
    fn test_next_to_corner() {
        let mut reg = Registry::new();
        let anchor = reg.register(rect("anchor", 2.0, 2.0));
        let subject = reg.register(rect("subject", 1.0, 1.0));
        let constraint = LayoutConstraint::NextTo {
            anchor,
            edge: Anchor::UpRight,
            buffer: 0.0,
        };
        let pos = resolve(&constraint, &reg, &config(), &subject).unwrap();
        assert!((pos.x - 1.5).abs() < 1e-9);
        assert!((pos.y - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_to_edge_up_preserves_x() {
        let mut reg = Registry::new();
        let subject = reg.register(rect("subject", 2.0, 1.0).at(3.0, 0.0));
        let constraint = LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        };
        let cfg = config();
        let pos = resolve(&constraint, &reg, &cfg, &subject).unwrap();
        assert!((pos.x - 3.0).abs() < 1e-9);
        assert!((pos.y - (cfg.half_height() - 0.5 - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_to_edge_corner() {
        let mut reg = Registry::new();
        let subject = reg.register(rect("subject", 2.0, 2.0));
        let cfg = config();
        let pos = resolve(
            &LayoutConstraint::ToEdge {
                edge: Anchor::DownLeft,
                margin: 0.0,
            },
            &reg,
            &cfg,
            &subject,
        )
        .unwrap();
        assert!((pos.x - (-cfg.half_width() + 1.0)).abs() < 1e-9);
        assert!((pos.y - (-cfg.half_height() + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_anchor() {
        let mut reg = Registry::new();
        let subject = reg.register(rect("subject", 1.0, 1.0));
        let constraint = LayoutConstraint::NextTo {
            anchor: ObjectId::new("ghost"),
            edge: Anchor::Right,
            buffer: 0.0,
        };
        let err = resolve(&constraint, &reg, &config(), &subject).unwrap_err();
        assert!(matches!(err, MotifError::DanglingReference { .. }));
    }

    #[test]
    fn test_at_offset() {
        let mut reg = Registry::new();
        let anchor = reg.register(rect("anchor", 1.0, 1.0).at(2.0, 1.0));
        let subject = reg.register(rect("subject", 1.0, 1.0));
        let pos = resolve(
            &LayoutConstraint::AtOffset {
                anchor,
                offset: Point2D::new(0.0, -1.5),
            },
            &reg,
            &config(),
            &subject,
        )
        .unwrap();
        assert!((pos.x - 2.0).abs() < 1e-9);
        assert!((pos.y - -0.5).abs() < 1e-9);
    }
}
