//! The thinking bot: a μ-symbol mascot with a thought cloud. The prefab
//! returns a fresh object subtree each call, so two scenes never alias the
//! same objects.

use motif_core::{Color, MotifResult, PlaybackConfig, Point2D};
use motif_scene::{
    ObjectId, RenderBackend, Scene, SceneBuilder, ShapeKind, StepKind, Style, TextStyle,
};

use crate::styles;

/// Handles to the parts of one assembled bot.
pub struct MuBot {
    /// Every visual part, in paint order: body, eyes, mouth, thought trail.
    pub parts: Vec<ObjectId>,
    pub cloud: ObjectId,
    pub cloud_center: Point2D,
}

/// Builds the bot's object subtree into a scene. All ids are prefixed so
/// several bots can coexist in one registry.
pub struct MuBotPrefab {
    prefix: String,
    origin: Point2D,
}

impl MuBotPrefab {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            // Lower-left of the frame, like every appearance in the film.
            origin: Point2D::new(-4.5, -1.5),
        }
    }

    pub fn at(mut self, origin: Point2D) -> Self {
        self.origin = origin;
        self
    }

    pub fn build(self, b: &mut SceneBuilder<'_>) -> MotifResult<MuBot> {
        let o = self.origin;
        let id = |part: &str| format!("{}-{part}", self.prefix);
        let mut parts = Vec::new();

        let body = b.formula(id("body"), r"\mu", TextStyle::new(3.0, Color::BLUE))?;
        b.move_to(&body, o.x, o.y)?;
        parts.push(body);

        for (side, dx) in [("left", -0.25), ("right", 0.35)] {
            let white = b.shape(
                id(&format!("eye-{side}")),
                ShapeKind::Ellipse {
                    width: 0.3,
                    height: 0.4,
                },
            )?;
            b.update(&white, |obj| obj.style = Style::filled(Color::WHITE, 1.0))?;
            b.move_to(&white, o.x + dx, o.y + 0.6)?;
            parts.push(white);

            let pupil = b.shape(id(&format!("pupil-{side}")), ShapeKind::Dot { radius: 0.1 })?;
            b.update(&pupil, |obj| obj.style = Style::filled(Color::BLACK, 1.0))?;
            b.move_to(&pupil, o.x + dx, o.y + 0.6)?;
            parts.push(pupil);

            let glint = b.shape(id(&format!("glint-{side}")), ShapeKind::Dot { radius: 0.03 })?;
            b.update(&glint, |obj| obj.style = Style::filled(Color::WHITE, 0.8))?;
            b.move_to(&glint, o.x + dx, o.y + 0.6)?;
            parts.push(glint);
        }

        let mouth = b.shape(
            id("mouth"),
            ShapeKind::Line {
                from: Point2D::new(-0.18, 0.0),
                to: Point2D::new(0.18, 0.0),
            },
        )?;
        b.update(&mouth, |obj| obj.style = Style::stroke(Color::WHITE))?;
        b.move_to(&mouth, o.x, o.y + 0.1)?;
        parts.push(mouth);

        // The thought trail: three growing dots leading up-right to the cloud.
        for (i, (dx, dy, r)) in [(1.4, 1.4, 0.08), (1.8, 1.8, 0.12), (2.2, 2.2, 0.16)]
            .into_iter()
            .enumerate()
        {
            let dot = b.shape(id(&format!("thought-dot-{i}")), ShapeKind::Dot { radius: r })?;
            b.update(&dot, |obj| obj.style = Style::filled(Color::WHITE, 1.0))?;
            b.move_to(&dot, o.x + dx, o.y + dy)?;
            parts.push(dot);
        }

        let cloud_center = Point2D::new(o.x + 5.0, o.y + 3.0);
        let cloud = b.shape(
            id("cloud"),
            ShapeKind::RoundedRect {
                width: 7.5,
                height: 2.5,
                corner_radius: 0.3,
            },
        )?;
        b.update(&cloud, |obj| obj.style = Style::filled(Color::WHITE, 0.2))?;
        b.move_to(&cloud, cloud_center.x, cloud_center.y)?;
        parts.push(cloud.clone());

        Ok(MuBot {
            parts,
            cloud,
            cloud_center,
        })
    }
}

/// Fade the whole bot in as one parallel group.
fn enter(b: &mut SceneBuilder<'_>, bot: &MuBot) -> MotifResult<()> {
    b.play(StepKind::FadeIn, &bot.parts, 1.0)
}

/// Register a thought line centered in the cloud.
fn thought(
    b: &mut SceneBuilder<'_>,
    bot: &MuBot,
    id: &str,
    text: &str,
) -> MotifResult<ObjectId> {
    let obj = b.text(id, text, styles::body())?;
    b.move_to(&obj, bot.cloud_center.x, bot.cloud_center.y)?;
    Ok(obj)
}

/// Write the first thought, then morph through the rest in order.
fn think_through(
    b: &mut SceneBuilder<'_>,
    bot: &MuBot,
    thoughts: &[(&str, &str)],
    pause: f64,
) -> MotifResult<()> {
    let mut ids = Vec::with_capacity(thoughts.len());
    for (id, text) in thoughts {
        ids.push(thought(b, bot, id, text)?);
    }
    b.play(StepKind::Write, &ids[..1], 1.0)?;
    for pair in ids.windows(2) {
        b.play(
            StepKind::TransformInto(pair[1].clone()),
            &pair[..1],
            1.0,
        )?;
        b.wait(pause)?;
    }
    Ok(())
}

/// The bot objects to physical measurement as a way of computing π.
pub fn bot_measurement(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("bot-measurement", backend).with_config(config.clone());
    let bot = MuBotPrefab::new("bot").build(&mut b)?;
    enter(&mut b, &bot)?;
    think_through(
        &mut b,
        &bot,
        &[
            ("thought-1", "That's not how we compute PI"),
            ("thought-2", "Physical measurements always\nlead to an error!"),
        ],
        2.0,
    )?;
    b.build()
}

/// The bot wonders why π's computation keeps escalating.
pub fn bot_why_digits(
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("bot-why-digits", backend).with_config(config.clone());
    let bot = MuBotPrefab::new("bot").build(&mut b)?;
    enter(&mut b, &bot)?;
    think_through(
        &mut b,
        &bot,
        &[
            ("thought-1", "Why ??"),
            ("thought-2", "Why PI get so ridiculously\ncomplicated?"),
            ("thought-3", "Precision"),
            ("thought-4", "Why more and more digits?"),
        ],
        1.0,
    )?;
    b.wait(1.0)?;
    b.build()
}

/// The bot signs off.
pub fn bot_end(config: &PlaybackConfig, backend: &mut dyn RenderBackend) -> MotifResult<Scene> {
    let mut b = SceneBuilder::new("bot-end", backend).with_config(config.clone());
    let bot = MuBotPrefab::new("bot").build(&mut b)?;
    enter(&mut b, &bot)?;
    b.wait(2.0)?;
    think_through(
        &mut b,
        &bot,
        &[
            ("thought-1", "More curious?"),
            ("thought-2", "Check out books and links!"),
        ],
        2.0,
    )?;
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_scene::HeadlessBackend;

    #[test]
    fn test_prefab_parts_are_prefixed_and_fresh() {
        let mut backend = HeadlessBackend::new();
        let mut b = SceneBuilder::new("two-bots", &mut backend);
        let first = MuBotPrefab::new("alpha").build(&mut b).unwrap();
        let second = MuBotPrefab::new("beta")
            .at(Point2D::new(2.0, 0.0))
            .build(&mut b)
            .unwrap();
        assert_eq!(first.parts.len(), second.parts.len());
        for (a, z) in first.parts.iter().zip(second.parts.iter()) {
            assert_ne!(a, z, "prefabs must not alias objects across builds");
        }
    }

    #[test]
    fn test_bot_scenes_build() {
        let config = PlaybackConfig::default();
        for f in [bot_measurement, bot_why_digits, bot_end] {
            let mut backend = HeadlessBackend::new();
            let scene = f(&config, &mut backend).unwrap();
            assert!(scene.total_duration().as_seconds() > 3.0);
        }
    }

    #[test]
    fn test_thoughts_sit_in_the_cloud() {
        let mut backend = HeadlessBackend::new();
        let scene = bot_measurement(&PlaybackConfig::default(), &mut backend).unwrap();
        let cloud = scene.registry().get(&ObjectId::new("bot-cloud")).unwrap();
        let thought = scene.registry().get(&ObjectId::new("thought-1")).unwrap();
        assert_eq!(cloud.pose.position, thought.pose.position);
    }
}
