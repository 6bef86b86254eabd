//! The history of computing π: three eras, from polygon bounds to the
//! Chudnovsky brothers.

use std::f64::consts::PI;

use motif_core::{Color, MotifResult, PlaybackConfig, Point2D};
use motif_scene::{
    Anchor, AnimationStep, LayoutConstraint, ObjectId, RenderBackend, Scene, SceneBuilder,
    ShapeKind, StepKind, Style,
};

use crate::digits::{PI_100, PI_39, PI_BY_YEAR};
use crate::styles;

/// The three-era timeline, each era highlighted in turn.
pub fn pi_timelines(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-timelines", backend).with_config(config.clone());

    let spine = b.shape(
        "spine",
        ShapeKind::Line {
            from: Point2D::new(-6.0, 3.0),
            to: Point2D::new(-6.0, -3.0),
        },
    )?;
    b.play(StepKind::Write, &[spine.clone()], 1.0)?;

    let mut dots = Vec::new();
    for (i, y) in [1.0, -1.0].into_iter().enumerate() {
        let dot = b.shape(format!("divider-{i}"), ShapeKind::Dot { radius: 0.08 })?;
        b.update(&dot, |obj| obj.style = Style::filled(Color::BLUE, 1.0))?;
        b.move_to(&dot, -6.0, y)?;
        dots.push(dot);
    }
    b.play(StepKind::Write, &dots, 1.0)?;

    let eras = [
        "The Geometric Era (250 BCE - 1630 CE)",
        "The Infinite Series Era (1600s - 1980s)",
        "The Modern Algorithm Era (1980 - Present)",
    ];
    let segment_y = [2.0, 0.0, -2.0];
    let mut labels = Vec::new();
    for (i, (text, y)) in eras.into_iter().zip(segment_y).enumerate() {
        let segment = b.shape(
            format!("segment-{i}"),
            ShapeKind::Line {
                from: Point2D::new(-6.0, y + 1.0),
                to: Point2D::new(-6.0, y - 1.0),
            },
        )?;
        b.move_to(&segment, -6.0, y)?;
        let label = b.text(format!("era-{i}"), text, styles::small())?;
        b.constrain(
            &label,
            LayoutConstraint::NextTo {
                anchor: segment,
                edge: Anchor::Right,
                buffer: 0.5,
            },
        )?;
        labels.push(label);
    }
    b.play(StepKind::Write, &labels, 1.0)?;
    b.wait(1.0)?;

    // Pull each era label to center stage while the rest fades, then put
    // everything back.
    for i in 0..labels.len() {
        let current = labels[i].clone();
        let home = b.registry().get(&current)?.pose.position;
        let mut others: Vec<ObjectId> = labels
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, id)| id.clone())
            .collect();
        others.push(spine.clone());
        others.extend(dots.iter().cloned());

        b.play(StepKind::MoveTo(Point2D::zero()), &[current.clone()], 1.5)?;
        b.also(StepKind::ScaleBy(2.0), &[current.clone()], 1.5)?;
        b.also(StepKind::FadeOut, &others, 1.5)?;
        b.wait(2.0)?;
        b.play(StepKind::MoveTo(home), &[current.clone()], 1.0)?;
        b.also(StepKind::ScaleBy(0.5), &[current], 1.0)?;
        b.also(StepKind::FadeIn, &others, 1.0)?;
        b.wait(1.0)?;
    }
    b.build()
}

pub fn archimedes(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("archimedes", backend).with_config(config.clone());
    let portrait = b.image("portrait", "archimedes.png")?;
    b.move_to(&portrait, -2.5, 0.0)?;
    let caption = b.text("caption", "Archimedes\n(250 BCE)", styles::body())?;
    b.constrain(
        &caption,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Right,
            buffer: 1.0,
        },
    )?;
    b.play(StepKind::FadeIn, &[portrait], 1.0)?;
    b.also(StepKind::Write, &[caption], 1.0)?;
    b.build()
}

const POLYGON_SIDES: [u32; 5] = [6, 12, 24, 48, 96];
const POLYGON_RADIUS: f64 = 2.0;

/// The doubling polygon construction: 6 -> 12 -> 24 -> 48 -> 96 sides,
/// squeezing π between inscribed and circumscribed perimeters.
pub fn archimedes_polygons(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("archimedes-polygons", backend).with_config(config.clone());

    // Progression tokens across the top, revealed as the sides double.
    let mut tokens = Vec::new();
    for (i, n) in POLYGON_SIDES.into_iter().enumerate() {
        if i > 0 {
            tokens.push(b.formula(format!("arrow-{i}"), r"\rightarrow", styles::formula())?);
        }
        tokens.push(b.formula(format!("count-{n}"), n.to_string(), styles::formula())?);
    }
    b.row(&tokens, 0.3)?;
    for token in &tokens {
        b.update(token, |obj| {
            obj.pose.position.x -= 4.0;
            obj.pose.position.y = 3.4;
        })?;
    }
    b.play(StepKind::Write, &tokens[..1], 1.0)?;

    let circle = b.shape("circle", ShapeKind::Circle { radius: POLYGON_RADIUS })?;
    b.update(&circle, |obj| obj.style = Style::stroke(Color::BLUE))?;
    b.play(StepKind::Write, &[circle.clone()], 1.0)?;

    // Polygon pairs for every side count, registered up front; the first is
    // drawn and each successor arrives by morph.
    let mut pairs = Vec::new();
    for n in POLYGON_SIDES {
        let inner = b.shape(
            format!("inscribed-{n}"),
            ShapeKind::RegularPolygon {
                sides: n,
                radius: POLYGON_RADIUS,
            },
        )?;
        let outer = b.shape(
            format!("circumscribed-{n}"),
            ShapeKind::RegularPolygon {
                sides: n,
                radius: POLYGON_RADIUS / (PI / n as f64).cos(),
            },
        )?;
        pairs.push((inner, outer));
    }
    b.play(StepKind::Write, &[pairs[0].0.clone(), pairs[0].1.clone()], 1.0)?;
    for (i, window) in pairs.windows(2).enumerate() {
        let (prev_in, prev_out) = &window[0];
        let (next_in, next_out) = &window[1];
        let reveal = &tokens[2 * i + 1..2 * i + 3];
        b.group(vec![
            AnimationStep::new(StepKind::TransformInto(next_in.clone()), [prev_in.clone()], 1.5)?,
            AnimationStep::new(StepKind::TransformInto(next_out.clone()), [prev_out.clone()], 1.5)?,
            AnimationStep::new(StepKind::Write, reveal.to_vec(), 1.5)?,
        ]);
    }

    // Zoom, then the bounds.
    let final_pair = pairs.last().cloned();
    if let Some((inner, outer)) = final_pair {
        b.play(StepKind::ScaleBy(2.5), &[circle.clone(), inner, outer], 1.0)?;
    }
    let bounds = b.formula("bounds", r"\frac{223}{71} < \pi < \frac{22}{7}", styles::formula())?;
    b.constrain(
        &bounds,
        LayoutConstraint::ToEdge {
            edge: Anchor::Down,
            margin: 0.5,
        },
    )?;
    let numeric = b.formula("numeric-bounds", r"3.1408 < \pi < 3.1429", styles::formula())?;
    b.play(StepKind::Write, &[bounds.clone(), numeric.clone()], 1.0)?;
    b.wait(2.0)?;
    let mut outro = tokens.clone();
    outro.push(bounds);
    outro.push(numeric);
    b.play(StepKind::FadeOut, &outro, 1.0)?;
    b.wait(1.0)?;

    // Where the method topped out.
    let coda = b.text(
        "coda",
        "By 1630, this method could determine pi to 39 decimal places",
        styles::body(),
    )?;
    b.constrain(
        &coda,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let digits = b.formula("digits-39", format!(r"\pi = {PI_39}"), styles::formula())?;
    let frame = surrounding_rect(&mut b, "digits-frame", &digits)?;
    let punchline = b.text("punchline", "Millions of sides!", styles::body())?;
    b.constrain(
        &punchline,
        LayoutConstraint::ToEdge {
            edge: Anchor::Down,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::Write, &[coda], 1.0)?;
    b.play(StepKind::Write, &[digits], 1.0)?;
    b.also(StepKind::Write, &[frame], 1.0)?;
    b.play(StepKind::Write, &[punchline], 1.0)?;
    b.wait(2.0)?;
    b.build()
}

pub fn newton_quarter_circle(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("newton-quarter-circle", backend).with_config(config.clone());

    let portrait = b.image("portrait", "newton.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::Right,
            margin: 0.5,
        },
    )?;
    let caption = b.text("caption", "Newton (1630s)", styles::small())?;
    b.constrain(
        &caption,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    b.play(StepKind::FadeIn, &[portrait], 1.0)?;
    b.also(StepKind::Write, &[caption], 1.0)?;
    b.wait(1.0)?;

    // Unit circle + axes + first-quadrant quarter, off to the left.
    let figure_center = Point2D::new(-2.0, 1.0);
    let axes = b.shape(
        "axes",
        ShapeKind::Axes {
            x_length: 3.0,
            y_length: 3.0,
        },
    )?;
    let unit_circle = b.shape("unit-circle", ShapeKind::Circle { radius: 1.0 })?;
    let quarter = b.shape(
        "quarter",
        ShapeKind::Sector {
            radius: 1.0,
            start_angle: 0.0,
            angle: PI / 2.0,
        },
    )?;
    b.update(&quarter, |obj| obj.style = Style::filled(Color::BLUE, 0.5))?;
    for id in [&axes, &unit_circle, &quarter] {
        b.move_to(id, figure_center.x, figure_center.y)?;
    }

    let area_label = b.text("area-label", "Area of Quarter Circle", styles::body())?;
    b.constrain(
        &area_label,
        LayoutConstraint::NextTo {
            anchor: axes.clone(),
            edge: Anchor::Up,
            buffer: 0.4,
        },
    )?;
    let integral = b.formula(
        "integral",
        r"\int_0^1 \sqrt{1-x^2}\,dx = \frac{\pi}{4}",
        styles::formula(),
    )?;
    b.constrain(
        &integral,
        LayoutConstraint::NextTo {
            anchor: axes.clone(),
            edge: Anchor::Down,
            buffer: 0.4,
        },
    )?;
    b.play(StepKind::Write, &[area_label], 1.0)?;
    b.also(StepKind::Write, &[axes, unit_circle, quarter], 1.0)?;
    b.also(StepKind::Write, &[integral.clone()], 1.0)?;
    b.wait(1.0)?;

    let method = b.text("method", "Binomial Expansion", styles::heading(Color::BLUE))?;
    b.constrain(
        &method,
        LayoutConstraint::NextTo {
            anchor: integral,
            edge: Anchor::Down,
            buffer: 0.4,
        },
    )?;
    let expansion = b.formula(
        "expansion",
        r"\sqrt{1-x^2} = 1 - \frac{1}{2}x^2 - \frac{1}{8}x^4 - \cdots",
        styles::formula(),
    )?;
    b.constrain(
        &expansion,
        LayoutConstraint::NextTo {
            anchor: method.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    b.play(StepKind::Write, &[method], 1.0)?;
    b.also(StepKind::Write, &[expansion], 1.0)?;
    b.wait(1.0)?;
    b.build()
}

pub fn machins_formula(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("machins-formula", backend).with_config(config.clone());

    let portrait = b.image("portrait", "machin.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::Right,
            margin: 0.5,
        },
    )?;
    let caption = b.text("caption", "John Machin (1706)", styles::body())?;
    b.constrain(
        &caption,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    let intro = b.text(
        "intro",
        "In 1706, John Machin introduced Machin's Formula",
        styles::body(),
    )?;
    b.move_to(&intro, 0.0, 3.0)?;
    b.play(StepKind::FadeIn, &[portrait], 1.0)?;
    b.also(StepKind::Write, &[caption, intro], 1.0)?;
    b.wait(1.0)?;

    let formula_title = b.text("formula-title", "Machin's Formula", styles::heading(Color::BLUE))?;
    b.move_to(&formula_title, -2.0, 1.0)?;
    let formula = b.formula(
        "formula",
        r"\frac{\pi}{4} = 4\tan^{-1} \frac{1}{5} - \tan^{-1} \frac{1}{239}",
        styles::formula(),
    )?;
    b.constrain(
        &formula,
        LayoutConstraint::NextTo {
            anchor: formula_title.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    b.play(StepKind::Write, &[formula_title, formula], 1.0)?;
    b.wait(2.0)?;

    // The 100-digit milestone, boxed.
    let mut digit_lines = Vec::new();
    for (i, line) in PI_100.iter().enumerate() {
        digit_lines.push(b.text(format!("digits-{i}"), *line, styles::small())?);
    }
    b.column(&digit_lines, 0.2)?;
    for id in &digit_lines {
        b.update(id, |obj| {
            obj.pose.position.x -= 2.5;
            obj.pose.position.y -= 2.5;
        })?;
    }
    let milestone = b.text("milestone", "100 Digits of pi!", styles::heading(Color::BLUE))?;
    b.constrain(
        &milestone,
        LayoutConstraint::NextTo {
            anchor: digit_lines[0].clone(),
            edge: Anchor::Up,
            buffer: 0.4,
        },
    )?;
    let frame = surrounding_rect(&mut b, "digits-frame", &digit_lines[0])?;
    b.play(StepKind::Write, &[milestone], 1.0)?;
    b.play(StepKind::Write, &digit_lines, 3.0)?;
    b.play(StepKind::Write, &[frame], 1.0)?;
    b.wait(3.0)?;
    b.build()
}

/// Partial sums of the arctan Maclaurin series closing in on the curve.
pub fn arctan_series(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("arctan-series", backend).with_config(config.clone());

    let title = b.formula("title", r"\textbf{Series of } \arctan(x)", styles::heading(Color::WHITE))?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let series = b.formula(
        "series",
        r"\arctan(x) = x - \frac{x^3}{3} + \frac{x^5}{5} - \frac{x^7}{7} + \dots",
        styles::formula(),
    )?;
    b.constrain(
        &series,
        LayoutConstraint::ToEdge {
            edge: Anchor::Down,
            margin: 0.5,
        },
    )?;
    let axes = b.shape(
        "axes",
        ShapeKind::Axes {
            x_length: 9.0,
            y_length: 5.0,
        },
    )?;
    let target = b.formula("target-label", r"y = \arctan(x)", styles::small())?;
    b.update(&target, |obj| {
        obj.style.color = Color::BLUE;
        obj.pose.position = Point2D::new(3.0, 2.0);
    })?;

    // One curve per partial sum, each a shade closer to the target.
    let colors = [Color::YELLOW, Color::GREEN, Color::ORANGE, Color::RED];
    let mut curves = Vec::new();
    for (i, color) in colors.into_iter().enumerate() {
        let order = 2 * i + 1;
        let curve = b.shape(
            format!("partial-{order}"),
            ShapeKind::Arc {
                radius: 4.0,
                start_angle: PI + 0.6,
                angle: -1.2,
            },
        )?;
        b.update(&curve, |obj| {
            obj.style = Style::stroke(color);
            obj.pose.position.y = -0.2 * (colors.len() - i) as f64;
        })?;
        curves.push(curve);
    }

    let mut everything = vec![title, series, axes, target];
    everything.extend(curves);
    b.play(StepKind::FadeIn, &everything, 1.0)?;
    b.wait(2.0)?;
    b.build()
}

pub fn ramanujan(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("ramanujan", backend).with_config(config.clone());

    let portrait = b.image("portrait", "ramanujan.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::Right,
            margin: 0.5,
        },
    )?;
    let title = b.text(
        "title",
        "The Ramanujan's miraculous formula",
        styles::heading(Color::BLUE),
    )?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let formula = b.formula(
        "formula",
        r"\frac{1}{\pi} = \frac{2\sqrt{2}}{9801} \sum_{n=0}^{\infty} \frac{(4n)! (1103 + 26390n)}{(n!)^4 396^{4n}}",
        styles::formula(),
    )?;
    b.move_to(&formula, -1.5, 0.0)?;
    let payoff = b.text(
        "payoff",
        "Each term adds 8 decimal places!\nOlder formulas (Machin) require about 20 terms for the same",
        styles::small(),
    )?;
    b.constrain(
        &payoff,
        LayoutConstraint::NextTo {
            anchor: formula.clone(),
            edge: Anchor::Down,
            buffer: 1.0,
        },
    )?;

    b.play(StepKind::FadeIn, &[portrait, formula], 1.0)?;
    b.also(StepKind::Write, &[title], 1.0)?;
    b.wait(1.0)?;
    b.play(StepKind::Write, &[payoff], 1.0)?;
    b.wait(1.0)?;
    b.build()
}

pub fn chudnovsky(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("chudnovsky", backend).with_config(config.clone());

    let portrait = b.image("portrait", "chudnovsky.png")?;
    b.constrain(
        &portrait,
        LayoutConstraint::ToEdge {
            edge: Anchor::Left,
            margin: 1.0,
        },
    )?;
    let caption = b.text("caption", "David and Gregory Chudnovsky", styles::small())?;
    b.constrain(
        &caption,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    let headline = b.text(
        "headline",
        "In 1989, Chudnovsky brothers modified the series even further!",
        styles::heading(Color::BLUE),
    )?;
    b.constrain(
        &headline,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let formula = b.formula(
        "formula",
        r"\frac{1}{\pi} = 12 \sum_{n=0}^{\infty} \frac{(-1)^n (6n)! (13591409 + 545140134n)}{(3n)! (n!)^3 640320^{3n + 3/2}}",
        styles::formula(),
    )?;
    b.constrain(
        &formula,
        LayoutConstraint::NextTo {
            anchor: portrait.clone(),
            edge: Anchor::Right,
            buffer: 0.5,
        },
    )?;
    let payoff = b.text("payoff", "Each term adds 15 decimal places!", styles::small())?;
    b.update(&payoff, |obj| obj.style.color = Color::BLUE)?;
    b.constrain(
        &payoff,
        LayoutConstraint::NextTo {
            anchor: formula.clone(),
            edge: Anchor::Down,
            buffer: 1.0,
        },
    )?;

    b.play(StepKind::Write, &[headline, caption], 1.0)?;
    b.also(StepKind::FadeIn, &[portrait, formula], 1.0)?;
    b.wait(1.0)?;
    b.play(StepKind::Write, &[payoff], 1.0)?;
    b.wait(1.0)?;
    b.build()
}

/// The three breakthroughs behind the modern era.
pub fn pi_breakthroughs(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-breakthroughs", backend).with_config(config.clone());

    let intro = b.text(
        "intro",
        "The modern era began around 1980 when mathematicians\nutilized three major breakthroughs:",
        styles::body(),
    )?;
    b.constrain(
        &intro,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::Write, &[intro.clone()], 1.0)?;
    b.wait(1.0)?;

    let items = [
        "1. FFT Multiplication Algorithm",
        "2. High-Performance Algorithms",
        "3. Supercomputer Advancement",
    ];
    let mut item_ids = Vec::new();
    for (i, text) in items.into_iter().enumerate() {
        item_ids.push(b.text(format!("item-{i}"), text, styles::body())?);
    }
    b.column(&item_ids, 0.5)?;
    for id in &item_ids {
        b.update(id, |obj| obj.pose.position.y += 1.0)?;
    }

    let fft_images = [
        b.image("fft-plot", "fft.png")?,
        b.image("fft-diagram", "fft2.jpg")?,
    ];
    b.move_to(&fft_images[0], -2.0, -2.5)?;
    b.constrain(
        &fft_images[1],
        LayoutConstraint::NextTo {
            anchor: fft_images[0].clone(),
            edge: Anchor::Right,
            buffer: 1.5,
        },
    )?;
    let supercomputers = [
        b.image("super-1", "super1.png")?,
        b.image("super-2", "super2.jpg")?,
        b.image("super-3", "super3.jpg")?,
    ];
    b.row(&supercomputers, 0.5)?;
    for id in &supercomputers {
        b.update(id, |obj| {
            obj.pose.position.x -= 4.0;
            obj.pose.position.y = -2.8;
        })?;
    }

    for (i, item) in item_ids.iter().enumerate() {
        b.play(StepKind::FadeIn, &[item.clone()], 1.0)?;
        b.play(StepKind::ColorTo(Color::BLUE), &[item.clone()], 0.5)?;
        b.also(StepKind::ScaleBy(1.2), &[item.clone()], 0.5)?;
        if i == 0 {
            b.play(StepKind::FadeIn, &fft_images, 1.0)?;
            b.wait(2.0)?;
            b.play(StepKind::FadeOut, &fft_images, 1.0)?;
        }
        b.wait(2.0)?;
    }
    b.play(StepKind::FadeIn, &supercomputers, 1.0)?;
    b.wait(2.0)?;
    b.build()
}

/// A red dot travels a 250 BCE - 2025 number line while the known digits
/// of π grow alongside.
pub fn timeline_evolution(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("timeline-evolution", backend).with_config(config.clone());

    const LINE_LENGTH: f64 = 12.0;
    const YEAR_MIN: f64 = -250.0;
    const YEAR_MAX: f64 = 2025.0;
    let year_to_x = |year: f64| (year - YEAR_MIN) / (YEAR_MAX - YEAR_MIN) * LINE_LENGTH - LINE_LENGTH / 2.0;

    let title = b.text("title", "Time Progression: 250 BCE to Present", styles::heading(Color::WHITE))?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    let line = b.shape(
        "timeline",
        ShapeKind::NumberLine {
            from: YEAR_MIN,
            to: YEAR_MAX,
            length: LINE_LENGTH,
        },
    )?;
    b.move_to(&line, 0.0, -1.5)?;
    b.play(StepKind::Write, &[title], 1.0)?;
    b.play(StepKind::Write, &[line.clone()], 1.0)?;
    b.wait(1.0)?;

    let marker = b.shape("marker", ShapeKind::Dot { radius: 0.1 })?;
    b.update(&marker, |obj| obj.style = Style::filled(Color::RED, 1.0))?;
    b.move_to(&marker, year_to_x(PI_BY_YEAR[0].0 as f64), -1.5)?;

    // One label per epoch; the visible one morphs into the next.
    let mut year_labels = Vec::new();
    let mut digit_labels = Vec::new();
    for (i, (year, digits)) in PI_BY_YEAR.into_iter().enumerate() {
        let year_label = b.text(format!("year-{i}"), year.to_string(), styles::small())?;
        b.move_to(&year_label, year_to_x(year as f64), -1.0)?;
        year_labels.push(year_label);
        let digit_label = b.formula(
            format!("pi-{i}"),
            format!(r"\pi = {digits}\ldots"),
            styles::small(),
        )?;
        b.constrain(
            &digit_label,
            LayoutConstraint::ToEdge {
                edge: Anchor::Left,
                margin: 0.5,
            },
        )?;
        digit_labels.push(digit_label);
    }
    b.play(StepKind::FadeIn, &[marker.clone(), year_labels[0].clone()], 1.0)?;
    b.wait(1.0)?;
    b.play(StepKind::Write, &digit_labels[..1], 1.0)?;

    for i in 1..PI_BY_YEAR.len() {
        let (year, _) = PI_BY_YEAR[i];
        b.play(
            StepKind::MoveTo(Point2D::new(year_to_x(year as f64), -1.5)),
            &[marker.clone()],
            2.0,
        )?;
        b.also(
            StepKind::TransformInto(year_labels[i].clone()),
            &year_labels[i - 1..i],
            2.0,
        )?;
        b.also(
            StepKind::TransformInto(digit_labels[i].clone()),
            &digit_labels[i - 1..i],
            2.0,
        )?;
        b.wait(1.0)?;
    }
    b.wait(2.0)?;
    b.build()
}

/// Six milestones on a diagonal timeline, bottom-left to top-right.
pub fn sloped_timeline(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("sloped-timeline", backend).with_config(config.clone());

    let title = b.text(
        "title",
        "The History of pi spans over 4000 years",
        styles::heading(Color::WHITE),
    )?;
    b.constrain(
        &title,
        LayoutConstraint::ToEdge {
            edge: Anchor::Up,
            margin: 0.5,
        },
    )?;
    b.play(StepKind::Write, &[title], 1.0)?;

    let start = Point2D::new(-4.5, -2.0);
    let end = Point2D::new(4.5, 2.0);
    let spine = b.shape(
        "spine",
        ShapeKind::Line {
            from: start,
            to: end,
        },
    )?;
    b.play(StepKind::Write, &[spine.clone()], 1.0)?;

    let events = [
        ("250 BCE", "Archimedes", "Polygon Approximation"),
        ("1600s", "Isaac Newton", "Calculus-Based Computation"),
        ("1706", "John Machin", "Machin's Formula"),
        ("1910s", "Ramanujan", "Rapidly Converging Series"),
        ("1980s", "Chudnovsky Bros", "Fastest pi Algorithm"),
        ("2022", "Google", "100 Trillion Digits Computed"),
    ];
    let n = events.len();
    for (i, (year, _name, fact)) in events.into_iter().enumerate() {
        let t = i as f64 / (n - 1) as f64;
        let pos = start.lerp(&end, t);
        let marker = b.shape(format!("marker-{i}"), ShapeKind::Dot { radius: 0.08 })?;
        b.update(&marker, |obj| obj.style = Style::filled(Color::RED, 1.0))?;
        b.move_to(&marker, pos.x, pos.y)?;

        // Alternate labels above/below the slope so neighbors do not clash.
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let year_label = b.text(format!("year-{i}"), year, styles::small())?;
        b.move_to(&year_label, pos.x - side * 1.2, pos.y)?;
        let fact_label = b.text(format!("fact-{i}"), fact, styles::small())?;
        b.move_to(&fact_label, pos.x, pos.y + side * 0.5)?;

        b.play(StepKind::FadeIn, &[marker], 1.0)?;
        b.also(StepKind::Write, &[year_label, fact_label], 1.0)?;
        b.wait(0.5)?;
    }
    b.wait(3.0)?;
    b.build()
}

/// A stroked rectangle slightly larger than the target's extent, centered
/// on it.
fn surrounding_rect(
    b: &mut SceneBuilder<'_>,
    id: &str,
    around: &ObjectId,
) -> MotifResult<ObjectId> {
    let (center, extent) = {
        let obj = b.registry().get(around)?;
        (obj.pose.position, obj.scaled_extent())
    };
    let frame = b.shape(
        id,
        ShapeKind::Rect {
            width: extent.width + 0.4,
            height: extent.height + 0.4,
        },
    )?;
    b.update(&frame, |obj| obj.style = Style::stroke(Color::YELLOW))?;
    b.move_to(&frame, center.x, center.y)?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_scene::HeadlessBackend;

    #[test]
    fn test_all_history_scenes_build() {
        let config = PlaybackConfig::default();
        let scenes: [(&str, fn(&PlaybackConfig, &mut dyn RenderBackend) -> MotifResult<Scene>); 11] = [
            ("pi-timelines", pi_timelines),
            ("archimedes", archimedes),
            ("archimedes-polygons", archimedes_polygons),
            ("newton-quarter-circle", newton_quarter_circle),
            ("machins-formula", machins_formula),
            ("arctan-series", arctan_series),
            ("ramanujan", ramanujan),
            ("chudnovsky", chudnovsky),
            ("pi-breakthroughs", pi_breakthroughs),
            ("timeline-evolution", timeline_evolution),
            ("sloped-timeline", sloped_timeline),
        ];
        for (name, f) in scenes {
            let mut backend = HeadlessBackend::new();
            let scene = f(&config, &mut backend).unwrap();
            assert_eq!(scene.name, name);
            assert!(scene.total_duration().as_seconds() >= 1.0, "{name} too short");
        }
    }

    #[test]
    fn test_polygon_progression_registers_all_pairs() {
        let mut backend = HeadlessBackend::new();
        let scene = archimedes_polygons(&PlaybackConfig::default(), &mut backend).unwrap();
        for n in POLYGON_SIDES {
            assert!(scene
                .registry()
                .contains(&ObjectId::new(format!("inscribed-{n}"))));
            assert!(scene
                .registry()
                .contains(&ObjectId::new(format!("circumscribed-{n}"))));
        }
    }

    #[test]
    fn test_evolution_marker_ends_at_the_right() {
        let mut backend = HeadlessBackend::new();
        let mut scene = timeline_evolution(&PlaybackConfig::default(), &mut backend).unwrap();
        let mut run_backend = HeadlessBackend::new();
        scene.run(&mut run_backend, 30.0).unwrap();
        let marker = scene.registry().get(&ObjectId::new("marker")).unwrap();
        assert!((marker.pose.position.x - 6.0).abs() < 1e-9);
    }
}
