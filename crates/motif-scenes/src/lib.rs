//! The π video, scene by scene.
//!
//! Each scene is a plain function that authors its objects and timeline
//! through a [`SceneBuilder`] and returns a validated [`Scene`]. The
//! catalog in [`all_scenes`] lists them in film order.

use motif_core::{MotifError, MotifResult, PlaybackConfig};
use motif_scene::{RenderBackend, Scene};

pub mod audiences;
pub mod computation;
pub mod digits;
pub mod finale;
pub mod history;
pub mod intro;
pub mod mu_bot;

mod styles;

pub use mu_bot::{MuBot, MuBotPrefab};

/// A scene constructor: builds against a playback config and whatever
/// back-end supplies text metrics and assets.
pub type SceneFn = fn(&PlaybackConfig, &mut dyn RenderBackend) -> MotifResult<Scene>;

/// Every scene of the film, in order.
pub fn all_scenes() -> Vec<(&'static str, SceneFn)> {
    vec![
        ("pi-intro", intro::pi_intro as SceneFn),
        ("pi-in-nature", intro::pi_in_nature),
        ("engineers", audiences::engineers),
        ("mathematicians", audiences::mathematicians),
        ("bot-measurement", mu_bot::bot_measurement),
        ("pi-uncanny", computation::pi_uncanny),
        ("pi-computation", computation::pi_computation),
        ("bot-why-digits", mu_bot::bot_why_digits),
        ("pi-timelines", history::pi_timelines),
        ("archimedes", history::archimedes),
        ("archimedes-polygons", history::archimedes_polygons),
        ("newton-quarter-circle", history::newton_quarter_circle),
        ("machins-formula", history::machins_formula),
        ("arctan-series", history::arctan_series),
        ("ramanujan", history::ramanujan),
        ("chudnovsky", history::chudnovsky),
        ("pi-breakthroughs", history::pi_breakthroughs),
        ("timeline-evolution", history::timeline_evolution),
        ("sloped-timeline", history::sloped_timeline),
        ("future-of-pi", finale::future_of_pi),
        ("bbp-algorithm", finale::bbp_algorithm),
        ("why-compute-pi", finale::why_compute_pi),
        ("pi-finale", finale::pi_finale),
        ("pi-spiral", finale::pi_spiral),
        ("bot-end", mu_bot::bot_end),
        ("blank", finale::blank),
        ("pi-thumbnail", finale::pi_thumbnail),
    ]
}

/// Build one scene from the catalog by name.
pub fn build_scene(
    name: &str,
    config: &PlaybackConfig,
    backend: &mut dyn RenderBackend,
) -> MotifResult<Scene> {
    let build = all_scenes()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| f)
        .ok_or_else(|| MotifError::NotFound(format!("no scene named '{name}'")))?;
    build(config, backend)
}
