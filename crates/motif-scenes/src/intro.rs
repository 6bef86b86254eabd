//! The opening scenes: π introduced, its digits arranged in a ring that
//! collapses into a circle, and the circumference unfolded against three
//! diameters.

use motif_core::{Color, MotifResult, PlaybackConfig, Point2D};
use motif_scene::{
    Anchor, AnimationStep, LayoutConstraint, ObjectId, RenderBackend, Scene, SceneBuilder,
    ShapeKind, StepKind, Style, TextStyle,
};

use crate::digits::PI_RING;
use crate::styles;

const RING_RADIUS: f64 = 2.0;

pub fn pi_intro(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-intro", backend).with_config(config.clone());

    // Phase 1: the central symbol and the intro line.
    let pi = b.formula("pi-symbol", r"\pi", TextStyle::new(1.2, Color::BLUE))?;
    let intro = b.text(
        "intro-text",
        "The most fundamental mathematical constants,\nwe encounter early in our life.",
        styles::body(),
    )?;
    b.constrain(
        &intro,
        LayoutConstraint::ToEdge {
            edge: Anchor::UpLeft,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::Write, &[pi.clone()], 1.0)?;
    b.also(StepKind::Write, &[intro.clone()], 1.0)?;
    b.play(StepKind::ScaleBy(3.0), &[pi.clone()], 2.0)?;
    b.wait(1.0)?;

    // A ring of digits, faded in with a stagger.
    let digits = ring_digits(&mut b)?;
    let stagger = 3.0 / digits.len() as f64;
    for digit in &digits {
        b.play(StepKind::FadeIn, std::slice::from_ref(digit), stagger)?;
    }
    b.wait(1.0)?;

    // Phase 2: the digits become the circle they trace.
    let circle = b.shape("circle", ShapeKind::Circle { radius: RING_RADIUS })?;
    b.update(&circle, |obj| obj.style = Style::stroke(Color::BLUE))?;
    let mut morphs = Vec::with_capacity(digits.len());
    for digit in &digits {
        morphs.push(AnimationStep::new(
            StepKind::TransformInto(circle.clone()),
            [digit.clone()],
            2.0,
        )?);
    }
    b.group(morphs);
    b.wait(1.0)?;
    b.play(StepKind::FadeOut, &[pi, intro], 1.0)?;
    b.wait(1.0)?;

    // Phase 3: diameter and labels.
    let diameter = b.shape(
        "diameter",
        ShapeKind::Line {
            from: Point2D::new(-RING_RADIUS, 0.0),
            to: Point2D::new(RING_RADIUS, 0.0),
        },
    )?;
    b.update(&diameter, |obj| obj.style = Style::stroke(Color::YELLOW))?;
    let ratio = b.formula("ratio", r"\pi = \frac{C}{d} \approx 3.14", styles::formula())?;
    b.constrain(
        &ratio,
        LayoutConstraint::ToEdge {
            edge: Anchor::Left,
            margin: 0.5,
        },
    )?;
    let d_label = b.formula("d-label", "d", styles::formula())?;
    b.constrain(
        &d_label,
        LayoutConstraint::NextTo {
            anchor: diameter.clone(),
            edge: Anchor::Down,
            buffer: 0.25,
        },
    )?;
    let c_label = b.formula("c-label", "C", styles::formula())?;
    b.constrain(
        &c_label,
        LayoutConstraint::NextTo {
            anchor: circle.clone(),
            edge: Anchor::Right,
            buffer: 0.25,
        },
    )?;
    b.play(StepKind::Write, &[circle.clone(), diameter], 1.0)?;
    b.play(StepKind::Write, &[ratio, d_label], 1.0)?;
    b.play(StepKind::Write, &[c_label], 1.0)?;

    // Phase 4: the circumference unfolds into a line below the circle, and
    // three diameters (plus the ~0.14d leftover) tile it.
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let unfold_left = -RING_RADIUS;
    let baseline_y = -2.5;
    let unfolded = b.shape(
        "unfolded",
        ShapeKind::Line {
            from: Point2D::new(unfold_left, baseline_y),
            to: Point2D::new(unfold_left + circumference, baseline_y),
        },
    )?;
    b.update(&unfolded, |obj| obj.style = Style::stroke(Color::BLUE))?;
    let unfold_title = b.text("unfold-title", "Unfolding the circumference", styles::body())?;
    b.constrain(
        &unfold_title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::TransformInto(unfolded.clone()), &[circle], 3.0)?;
    b.also(StepKind::Write, &[unfold_title], 3.0)?;

    let d = 2.0 * RING_RADIUS;
    for i in 0..3 {
        let x0 = unfold_left + i as f64 * d;
        let segment = b.shape(
            format!("segment-{i}"),
            ShapeKind::Line {
                from: Point2D::new(x0, baseline_y),
                to: Point2D::new(x0 + d, baseline_y),
            },
        )?;
        b.update(&segment, |obj| obj.style = Style::stroke(Color::YELLOW))?;
        let brace = b.shape(format!("brace-{i}"), ShapeKind::Brace { width: d })?;
        b.update(&brace, |obj| obj.style = Style::stroke(Color::RED))?;
        b.constrain(
            &brace,
            LayoutConstraint::NextTo {
                anchor: segment.clone(),
                edge: Anchor::Down,
                buffer: 0.5,
            },
        )?;
        let label = b.formula(format!("segment-label-{i}"), "d", styles::formula())?;
        b.constrain(
            &label,
            LayoutConstraint::NextTo {
                anchor: brace.clone(),
                edge: Anchor::Down,
                buffer: 0.25,
            },
        )?;
        b.play(StepKind::Write, &[segment], 1.0)?;
        b.also(StepKind::FadeIn, &[brace], 1.0)?;
        b.also(StepKind::Write, &[label], 1.0)?;
    }

    let leftover_start = unfold_left + 3.0 * d;
    let leftover = b.shape(
        "leftover",
        ShapeKind::Line {
            from: Point2D::new(leftover_start, baseline_y),
            to: Point2D::new(unfold_left + circumference, baseline_y),
        },
    )?;
    b.update(&leftover, |obj| obj.style = Style::stroke(Color::BLUE))?;
    let leftover_brace = b.shape(
        "leftover-brace",
        ShapeKind::Brace {
            width: circumference - 3.0 * d,
        },
    )?;
    b.update(&leftover_brace, |obj| obj.style = Style::stroke(Color::RED))?;
    b.constrain(
        &leftover_brace,
        LayoutConstraint::NextTo {
            anchor: leftover.clone(),
            edge: Anchor::Down,
            buffer: 0.25,
        },
    )?;
    let leftover_label = b.formula("leftover-label", r"\approx 0.14 d", styles::formula())?;
    b.constrain(
        &leftover_label,
        LayoutConstraint::NextTo {
            anchor: leftover.clone(),
            edge: Anchor::Up,
            buffer: 0.25,
        },
    )?;
    b.play(StepKind::Write, &[leftover], 1.0)?;
    b.also(StepKind::Write, &[leftover_label], 1.0)?;
    b.also(StepKind::FadeIn, &[leftover_brace], 1.0)?;
    b.wait(2.0)?;

    b.build()
}

pub fn pi_in_nature(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-in-nature", backend).with_config(config.clone());
    let quote = b.text("quote", "\"Found Everywhere in Nature\"", styles::heading(Color::WHITE))?;
    b.constrain(
        &quote,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::FadeIn, &[quote], 0.5)?;
    b.wait(2.0)?;
    b.build()
}

/// One object per character of the ring, placed around a circle of
/// `RING_RADIUS` in registration order.
fn ring_digits(b: &mut SceneBuilder<'_>) -> MotifResult<Vec<ObjectId>> {
    let style = TextStyle::new(0.4, Color::WHITE);
    let mut ids = Vec::with_capacity(PI_RING.len());
    for (i, ch) in PI_RING.chars().enumerate() {
        let id = b.formula(format!("digit-{i}"), ch.to_string(), style.clone())?;
        ids.push(id);
    }
    b.circle(&ids, Point2D::zero(), RING_RADIUS)?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_scene::HeadlessBackend;

    #[test]
    fn test_pi_intro_builds() {
        let mut backend = HeadlessBackend::new();
        let scene = pi_intro(&PlaybackConfig::default(), &mut backend).unwrap();
        assert!(scene.total_duration().as_seconds() > 10.0);
        assert!(scene.registry().len() > PI_RING.len());
    }

    #[test]
    fn test_digit_ring_sits_on_the_circle() {
        let mut backend = HeadlessBackend::new();
        let scene = pi_intro(&PlaybackConfig::default(), &mut backend).unwrap();
        let digit = scene
            .registry()
            .get(&ObjectId::new("digit-5"))
            .unwrap();
        let r = digit.pose.position.distance(&Point2D::zero());
        assert!((r - RING_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_pi_in_nature_builds() {
        let mut backend = HeadlessBackend::new();
        let scene = pi_in_nature(&PlaybackConfig::default(), &mut backend).unwrap();
        assert!(scene.total_duration().as_seconds() > 2.0);
    }
}
