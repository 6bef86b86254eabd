//! How different audiences treat π: engineers round it, mathematicians
//! chase every digit.

use motif_core::{Color, MotifResult, PlaybackConfig};
use motif_scene::{
    Anchor, LayoutConstraint, RenderBackend, Scene, SceneBuilder, StepKind,
};

use crate::digits::PI_PRECISE;
use crate::styles;

pub fn engineers(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("engineers", backend).with_config(config.clone());

    let portrait = b.image("engineer", "engineer.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::Left,
            margin: 0.5,
        },
    )?;
    let title = b.text("title", "Engineers", styles::title(Color::BLUE))?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let approx = b.formula(
        "approx",
        r"\pi \approx 3.14 \text{ or } \pi \approx 3",
        styles::formula(),
    )?;
    b.constrain(
        &approx,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Right,
            buffer: 1.0,
        },
    )?;
    let quip = b.text(
        "quip",
        "\"To the naked eye, it would still look perfect\"",
        styles::body(),
    )?;
    b.constrain(
        &quip,
        LayoutConstraint::NextTo {
            anchor: approx.clone(),
            edge: Anchor::Down,
            buffer: 1.0,
        },
    )?;

    b.play(StepKind::FadeIn, &[portrait], 1.0)?;
    b.also(StepKind::Write, &[title], 1.0)?;
    b.also(StepKind::FadeIn, &[approx], 1.0)?;
    b.also(StepKind::Write, &[quip], 1.0)?;
    b.build()
}

pub fn mathematicians(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("mathematicians", backend).with_config(config.clone());

    let portrait = b.image("mathematician", "mathematician.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::DownRight,
            margin: 0.3,
        },
    )?;
    let title = b.text("title", "\"Mathematicians\"", styles::title(Color::WHITE))?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;

    // The digit block stacks left of the portrait.
    let mut lines = Vec::with_capacity(PI_PRECISE.len());
    for (i, line) in PI_PRECISE.iter().enumerate() {
        lines.push(b.text(format!("digits-{i}"), *line, styles::body())?);
    }
    b.column(&lines, 0.2)?;
    for line in &lines {
        b.update(line, |obj| {
            obj.pose.position.x -= 2.0;
            obj.pose.position.y -= 1.0;
        })?;
    }
    let infinite = b.text("infinite", "Infinite Precision", styles::heading(Color::BLUE))?;
    b.constrain(
        &infinite,
        LayoutConstraint::NextTo {
            anchor: lines[0].clone(),
            edge: Anchor::Up,
            buffer: 0.5,
        },
    )?;

    b.play(StepKind::FadeIn, &[portrait], 1.0)?;
    b.also(StepKind::FadeIn, &[title], 1.0)?;
    b.also(StepKind::Write, &[infinite], 1.0)?;
    b.also(StepKind::Write, &lines, 1.0)?;
    b.build()
}
