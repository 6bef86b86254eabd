//! Closing scenes: where π computation goes next, and the Pi Day send-off.

use motif_core::{Color, MotifResult, PlaybackConfig, Point2D};
use motif_scene::{
    Anchor, LayoutConstraint, ObjectId, RenderBackend, Scene, SceneBuilder, ShapeKind, StepKind,
    TextStyle,
};

use crate::digits::{PI_100, PI_SPIRAL};
use crate::mu_bot::MuBotPrefab;
use crate::styles;

/// The bot asks how far we can go; the answer is a different question.
pub fn future_of_pi(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("future-of-pi", backend).with_config(config.clone());

    let title = b.text("title", "The Future of pi computation", styles::title(Color::WHITE))?;
    b.move_to(&title, 0.0, 3.0)?;
    b.play(StepKind::Write, &[title.clone()], 1.0)?;

    let bot = MuBotPrefab::new("bot").build(&mut b)?;
    b.play(StepKind::FadeIn, &bot.parts, 1.0)?;

    let thoughts = [
        ("thought-1", "How far can we go ?"),
        ("thought-2", "Researchers have shifted focus\nto a new challenge!"),
        ("thought-3", "Computing individual digits"),
    ];
    let mut ids = Vec::new();
    for (id, text) in thoughts {
        let obj = b.text(id, text, styles::body())?;
        b.move_to(&obj, bot.cloud_center.x, bot.cloud_center.y)?;
        ids.push(obj);
    }
    b.play(StepKind::Write, &ids[..1], 1.0)?;
    b.play(StepKind::TransformInto(ids[1].clone()), &ids[..1], 1.0)?;
    b.wait(2.0)?;
    b.play(StepKind::TransformInto(ids[2].clone()), &ids[1..2], 1.0)?;
    b.wait(1.0)?;
    b.play(StepKind::FadeOut, &[ids[2].clone(), title], 1.0)?;

    // And the honest coda: nobody needs the trillions.
    let coda_1 = b.text("coda-1", "We don't actually need trillion digits!", styles::body())?;
    b.move_to(&coda_1, bot.cloud_center.x, bot.cloud_center.y)?;
    let coda_2 = b.text(
        "coda-2",
        "10 decimal digits are enough for\nscientific and engineering purposes",
        styles::body(),
    )?;
    b.move_to(&coda_2, bot.cloud_center.x, bot.cloud_center.y)?;
    b.play(StepKind::Write, &[coda_1.clone()], 1.0)?;
    b.wait(1.0)?;
    b.play(StepKind::TransformInto(coda_2), &[coda_1], 1.0)?;
    b.wait(1.0)?;
    b.build()
}

/// The BBP digit-extraction formula and its discoverers.
pub fn bbp_algorithm(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("bbp-algorithm", backend).with_config(config.clone());

    let title = b.text("title", "The BBP Algorithm", styles::title(Color::WHITE))?;
    b.move_to(&title, 0.0, 3.0)?;
    let formula = b.formula(
        "formula",
        r"\pi = \sum_{k=0}^{\infty} \frac{1}{16^k} \left( \frac{4}{8k+1} - \frac{2}{8k+4} - \frac{1}{8k+5} - \frac{1}{8k+6} \right)",
        styles::formula(),
    )?;
    b.constrain(
        &formula,
        LayoutConstraint::NextTo {
            anchor: title.clone(),
            edge: Anchor::Down,
            buffer: 0.5,
        },
    )?;
    b.play(StepKind::Write, &[title, formula], 1.0)?;
    b.wait(1.0)?;

    let plouffe = b.image("plouffe", "bbp.jpg")?;
    b.move_to(&plouffe, -2.5, -1.5)?;
    let plouffe_caption = b.text("plouffe-caption", "Simon Plouffe", styles::small())?;
    b.constrain(
        &plouffe_caption,
        LayoutConstraint::NextTo {
            anchor: plouffe.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    let bailey = b.image("bailey", "bbp2.jpg")?;
    b.constrain(
        &bailey,
        LayoutConstraint::NextTo {
            anchor: plouffe.clone(),
            edge: Anchor::Right,
            buffer: 2.0,
        },
    )?;
    let bailey_caption = b.text("bailey-caption", "David H. Bailey", styles::small())?;
    b.constrain(
        &bailey_caption,
        LayoutConstraint::NextTo {
            anchor: bailey.clone(),
            edge: Anchor::Down,
            buffer: 0.3,
        },
    )?;
    b.play(StepKind::FadeIn, &[plouffe, bailey], 1.0)?;
    b.also(StepKind::Write, &[plouffe_caption, bailey_caption], 1.0)?;
    b.wait(2.0)?;
    b.build()
}

/// Why anyone bothers: three reasons, revealed and emphasized in turn.
pub fn why_compute_pi(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("why-compute-pi", backend).with_config(config.clone());

    let title = b.text(
        "title",
        "Why Do We Compute pi to Trillions of Digits?",
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
    b.wait(1.0)?;

    let reasons = [
        "1. Testing Computers and Algorithms",
        "2. The Unsolved Mysteries of pi",
        "3. The Competitive and Cultural Appeal",
    ];
    let mut ids = Vec::new();
    for (i, text) in reasons.into_iter().enumerate() {
        ids.push(b.text(format!("reason-{i}"), text, styles::body())?);
    }
    b.column(&ids, 0.5)?;
    for id in &ids {
        b.update(id, |obj| obj.pose.position.y += 1.0)?;
    }
    for id in &ids {
        b.play(StepKind::FadeIn, &[id.clone()], 1.0)?;
        b.play(StepKind::ColorTo(Color::BLUE), &[id.clone()], 0.5)?;
        b.also(StepKind::ScaleBy(1.2), &[id.clone()], 0.5)?;
    }
    b.wait(2.0)?;
    b.build()
}

/// Everything at once: the symbol, the digits, the timeline, the names,
/// and the Pi Day message.
pub fn pi_finale(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-finale", backend).with_config(config.clone());

    let pi = b.formula("pi-symbol", r"\pi", TextStyle::new(2.4, Color::YELLOW))?;
    b.play(StepKind::Write, &[pi.clone()], 1.0)?;
    b.wait(1.0)?;

    let mut digit_lines = Vec::new();
    for (i, line) in PI_100.iter().enumerate() {
        digit_lines.push(b.text(format!("digits-{i}"), *line, styles::body())?);
    }
    b.column(&digit_lines, 0.3)?;
    for id in &digit_lines {
        b.update(id, |obj| obj.pose.position.y -= 1.5)?;
    }
    b.play(StepKind::Write, &digit_lines, 2.0)?;
    b.wait(1.0)?;

    let timeline = b.shape(
        "timeline",
        ShapeKind::NumberLine {
            from: -2000.0,
            to: 2025.0,
            length: 10.0,
        },
    )?;
    b.move_to(&timeline, 0.0, 2.0)?;
    b.play(StepKind::Write, &[timeline], 1.0)?;
    b.wait(1.0)?;

    // The names drift in at half opacity.
    let names = [
        ("archimedes", "Archimedes", Point2D::new(-3.0, 1.5)),
        ("ramanujan", "Ramanujan", Point2D::new(3.0, 1.5)),
        ("chudnovsky", "Chudnovsky", Point2D::new(0.0, 3.0)),
    ];
    let mut name_ids = Vec::new();
    for (id, text, pos) in names {
        let obj = b.text(id, text, styles::small())?;
        b.update(&obj, |o| {
            o.pose.position = pos;
            o.pose.opacity = 0.5;
        })?;
        name_ids.push(obj);
    }
    b.play(StepKind::FadeIn, &name_ids, 2.0)?;
    b.wait(1.0)?;

    let happy = b.text("happy-pi", "Happy pi Day!", styles::title(Color::ORANGE))?;
    b.move_to(&happy, 0.0, -2.0)?;
    b.play(StepKind::TransformInto(happy.clone()), &[pi.clone()], 1.0)?;
    b.wait(1.0)?;

    let closing = b.text(
        "closing",
        "Thank you for watching!\nCheck out sources in the description.",
        styles::body(),
    )?;
    b.move_to(&closing, 0.0, -3.0)?;
    b.play(StepKind::Write, &[closing.clone()], 1.0)?;
    b.wait(2.0)?;

    let mut everything: Vec<ObjectId> = vec![pi, happy, closing];
    everything.extend(digit_lines);
    everything.extend(name_ids);
    everything.push(ObjectId::new("timeline"));
    b.play(StepKind::FadeOut, &everything, 1.0)?;
    b.build()
}

/// The digits of π wound outward along an Archimedean spiral.
pub fn pi_spiral(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-spiral", backend).with_config(config.clone());

    let pi = b.formula("pi-symbol", r"\pi", TextStyle::new(1.2, Color::BLUE))?;
    b.play(StepKind::Write, &[pi.clone()], 1.0)?;
    b.also(StepKind::ScaleBy(3.0), &[pi], 1.0)?;
    b.wait(1.0)?;

    let style = TextStyle::new(0.35, Color::WHITE);
    let mut digits = Vec::with_capacity(PI_SPIRAL.len());
    for (i, ch) in PI_SPIRAL.chars().enumerate() {
        digits.push(b.formula(format!("digit-{i}"), ch.to_string(), style.clone())?);
    }
    b.spiral(&digits, Point2D::zero(), 0.3, 0.3, 0.3)?;

    let stagger = 3.0 / digits.len() as f64;
    for digit in &digits {
        b.play(StepKind::FadeIn, std::slice::from_ref(digit), stagger)?;
    }
    b.wait(1.0)?;

    let happy = b.text("happy-pi", "Happy pi Day!", styles::title(Color::ORANGE))?;
    b.move_to(&happy, 0.0, -2.0)?;
    b.play(StepKind::FadeIn, &[happy], 1.0)?;
    b.wait(1.0)?;
    b.build()
}

/// The poster frame: one image per great phase of computing π, arranged
/// in a row, each captioned by its formula. A still composition, so the
/// objects are visible from the first frame and the timeline is a hold.
pub fn pi_thumbnail(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-thumbnail", backend).with_config(config.clone());

    let phases = [
        ("phase-geometry", "phase1.png", r"\pi = \frac{C}{d}", 0.0),
        (
            "phase-series",
            "phase2.png",
            r"\frac{\pi}{4} = 4\tan^{-1} \frac{1}{5} - \tan^{-1} \frac{1}{239}",
            -0.5,
        ),
        (
            "phase-hypergeometric",
            "phase4.png",
            r"\frac{1}{\pi} = \frac{2\sqrt{2}}{9801} \sum_{n=0}^{\infty} \frac{(4n)! (1103 + 26390n)}{(n!)^4 396^{4n}}",
            -1.0,
        ),
    ];

    let mut images = Vec::new();
    for (id, file, _, _) in &phases {
        let img = b.image(*id, file)?;
        b.update(&img, |o| {
            o.pose.scale = Point2D::new(0.63, 0.63);
            o.visible = true;
        })?;
        images.push(img);
    }
    b.move_to(&images[0], -4.5, -1.5)?;
    b.row(&images, 0.9)?;

    for ((_, _, tex, nudge), img) in phases.iter().zip(&images) {
        let formula = b.formula(format!("{img}-formula"), *tex, styles::formula())?;
        b.constrain(
            &formula,
            LayoutConstraint::NextTo {
                anchor: img.clone(),
                edge: Anchor::Up,
                buffer: 0.3,
            },
        )?;
        b.update(&formula, |o| {
            o.pose.position.x += *nudge;
            o.visible = true;
        })?;
    }

    b.wait(1.0)?;
    b.build()
}

/// Two seconds of background, used as a breather between chapters.
pub fn blank(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("blank", backend).with_config(config.clone());
    b.wait(2.0)?;
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_scene::HeadlessBackend;

    #[test]
    fn test_finale_scenes_build() {
        let config = PlaybackConfig::default();
        let scenes: [fn(&PlaybackConfig, &mut dyn RenderBackend) -> MotifResult<Scene>; 7] = [
            future_of_pi,
            bbp_algorithm,
            why_compute_pi,
            pi_finale,
            pi_spiral,
            pi_thumbnail,
            blank,
        ];
        for f in scenes {
            let mut backend = HeadlessBackend::new();
            f(&config, &mut backend).unwrap();
        }
    }

    #[test]
    fn test_spiral_radii_grow_linearly() {
        let mut backend = HeadlessBackend::new();
        let scene = pi_spiral(&PlaybackConfig::default(), &mut backend).unwrap();
        let radius = |i: usize| {
            scene
                .registry()
                .get(&ObjectId::new(format!("digit-{i}")))
                .unwrap()
                .pose
                .position
                .distance(&Point2D::zero())
        };
        let d1 = radius(1) - radius(0);
        let d2 = radius(7) - radius(6);
        assert!((d1 - 0.3).abs() < 1e-9);
        assert!((d2 - d1).abs() < 1e-9);
    }

    #[test]
    fn test_thumbnail_phases_run_left_to_right() {
        let mut backend = HeadlessBackend::new();
        let scene = pi_thumbnail(&PlaybackConfig::default(), &mut backend).unwrap();
        let pos = |id: &str| {
            scene
                .registry()
                .get(&ObjectId::new(id))
                .unwrap()
                .pose
                .position
        };
        let geometry = pos("phase-geometry");
        let series = pos("phase-series");
        let hyper = pos("phase-hypergeometric");
        assert!(geometry.x < series.x && series.x < hyper.x);
        assert!((geometry.y - series.y).abs() < 1e-9);
        // Each caption sits above its image.
        assert!(pos("phase-geometry-formula").y > geometry.y);
        assert!(pos("phase-hypergeometric-formula").y > hyper.y);
        assert!(scene
            .registry()
            .get(&ObjectId::new("phase-geometry"))
            .unwrap()
            .visible);
    }

    #[test]
    fn test_blank_is_just_a_pause() {
        let mut backend = HeadlessBackend::new();
        let scene = blank(&PlaybackConfig::default(), &mut backend).unwrap();
        assert_eq!(scene.registry().len(), 0);
        assert!((scene.total_duration().as_seconds() - 2.0).abs() < 1e-9);
    }
}
