//! How π is actually computed: the escalating formulas, and what a record
//! run costs.

use motif_core::{Color, MotifResult, PlaybackConfig};
use motif_scene::{
    Anchor, LayoutConstraint, RenderBackend, Scene, SceneBuilder, StepKind,
};

use crate::digits::PI_WALL;
use crate::styles;

/// Four increasingly uncanny formulas, each paired with an illustration.
pub fn pi_uncanny(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-uncanny", backend).with_config(config.clone());

    let phases = [
        (r"\pi = 4 \sum_{k=0}^{\infty} \frac{(-1)^k}{2k+1}", "Phase_1.png"),
        (r"\pi = 4 \int_{0}^{1} \sqrt{1 - x^2} dx", "Phase_2.png"),
        (
            r"\frac{1}{\pi} = \frac{2\sqrt{2}}{9801} \sum_{n=0}^{\infty} \frac{(4n)! (1103 + 26390n)}{(n!)^4 396^{4n}}",
            "Phase_3.png",
        ),
        (
            r"\frac{1}{\pi} = 12 \sum_{n=0}^{\infty} \frac{(-1)^n (6n)! (13591409 + 545140134n)}{(3n)! (n!)^3 640320^{3n + 3/2}}",
            "Phase_4.png",
        ),
    ];

    for (i, (tex, file)) in phases.into_iter().enumerate() {
        let image = b.image(format!("phase-image-{i}"), file)?;
        b.move_to(&image, 0.0, -1.0)?;
        let formula = b.formula(format!("phase-formula-{i}"), tex, styles::formula())?;
        b.constrain(
            &formula,
            LayoutConstraint::NextTo {
                anchor: image.clone(),
                edge: Anchor::Up,
                buffer: 0.3,
            },
        )?;
        b.play(StepKind::FadeIn, &[image.clone()], 1.0)?;
        b.also(StepKind::Write, &[formula.clone()], 1.0)?;
        b.wait(2.0)?;
        b.play(StepKind::FadeOut, &[image, formula], 1.0)?;
    }
    b.wait(3.0)?;
    b.build()
}

/// The Chudnovsky formula, then Google's 100-trillion-digit run.
pub fn pi_computation(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("pi-computation", backend).with_config(config.clone());

    let title = b.text("title", "The Chudnovsky Formula", styles::heading(Color::BLUE))?;
    b.move_to(&title, 0.0, 1.0)?;
    let formula = b.formula(
        "chudnovsky",
        r"\frac{1}{\pi} = 12 \sum_{n=0}^{\infty} \frac{(-1)^n (6n)! (13591409 + 545140134n)}{(3n)! (n!)^3 640320^{3n + 3/2}}",
        styles::formula(),
    )?;
    b.play(StepKind::Write, &[title.clone(), formula.clone()], 1.0)?;
    b.wait(2.0)?;
    b.play(StepKind::FadeOut, &[formula, title], 1.0)?;

    let record = b.image("google-record", "google.png")?;
    b.move_to(&record, 0.0, 2.0)?;
    b.play(StepKind::FadeIn, &[record.clone()], 1.0)?;
    b.wait(1.0)?;

    let stats = [
        "- 100 Trillion Digits",
        "- 157 days of computation!",
        "- 82k TB storage",
        "- 200,000 dollars!",
    ];
    let mut stat_ids = Vec::with_capacity(stats.len());
    for (i, line) in stats.into_iter().enumerate() {
        stat_ids.push(b.text(format!("stat-{i}"), line, styles::body())?);
    }
    b.column(&stat_ids, 0.3)?;
    for id in &stat_ids {
        b.update(id, |obj| {
            obj.pose.position.x += 1.0;
            obj.pose.position.y -= 1.5;
        })?;
    }
    b.play(StepKind::FadeIn, &stat_ids[..1], 1.0)?;

    // The digit wall under the headline number.
    let mut wall = Vec::with_capacity(PI_WALL.len());
    for (i, line) in PI_WALL.iter().enumerate() {
        wall.push(b.text(format!("wall-{i}"), *line, styles::small())?);
    }
    b.column(&wall, 0.3)?;
    for id in &wall {
        b.update(id, |obj| obj.pose.position.y -= 2.0)?;
    }
    b.play(StepKind::Write, &wall, 5.0)?;
    b.wait(3.0)?;
    b.play(StepKind::FadeOut, &wall, 1.0)?;

    b.play(StepKind::FadeIn, &stat_ids[1..], 1.0)?;
    b.wait(2.0)?;
    b.build()
}
