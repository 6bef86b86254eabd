use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use motif_core::PlaybackConfig;
use motif_scene::HeadlessBackend;
use motif_scenes::{all_scenes, build_scene};

#[derive(Parser)]
#[command(
    name = "motif",
    version,
    about = "Motif — a declarative scene timeline engine",
    long_about = "Motif drives animated scenes on a logical clock: objects in a registry,\nlayout by constraint, timelines of parallel step groups. This CLI builds\nand plays the bundled scene catalog against a headless back-end."
)]
struct Cli {
    /// Path to a playback config TOML (frame size, fps, background)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the scenes in the catalog
    List,

    /// Build scene(s) and report validation problems
    Validate {
        /// Scene name; validates the whole catalog when omitted
        scene: Option<String>,
    },

    /// Build a scene and play it against the headless back-end
    Play {
        /// Scene name from the catalog
        scene: String,

        /// Frames per second for the run
        #[arg(long)]
        fps: Option<f64>,

        /// Fail on missing asset files instead of using placeholders
        #[arg(long)]
        strict_assets: bool,
    },

    /// Serialize a built scene to JSON
    Dump {
        /// Scene name from the catalog
        scene: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print engine and catalog info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            for (name, _) in all_scenes() {
                println!("{name}");
            }
        }

        Commands::Validate { scene } => {
            let names: Vec<&str> = match &scene {
                Some(name) => vec![name.as_str()],
                None => all_scenes().into_iter().map(|(n, _)| n).collect(),
            };
            let mut failed = 0usize;
            for name in names {
                let mut backend = HeadlessBackend::new();
                match build_scene(name, &config, &mut backend) {
                    Ok(scene) => {
                        println!(
                            "ok       {name} ({} objects, {})",
                            scene.registry().len(),
                            scene.total_duration()
                        );
                    }
                    Err(e) => {
                        failed += 1;
                        println!("invalid  {name}: {e}");
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} scene(s) failed validation");
            }
        }

        Commands::Play {
            scene,
            fps,
            strict_assets,
        } => {
            let fps = fps.unwrap_or(config.fps);
            let mut backend = HeadlessBackend::new();
            if strict_assets {
                backend = backend.with_strict_assets();
            }
            let mut scene = build_scene(&scene, &config, &mut backend)
                .with_context(|| "failed to build scene")?;
            let report = scene.run(&mut backend, fps)?;
            println!("scene:    {}", report.scene);
            println!("run:      {}", report.run_id);
            println!("duration: {}", report.duration);
            println!("frames:   {} @ {fps} fps", report.frames);
            if report.warnings.is_empty() {
                println!("warnings: none");
            } else {
                println!("warnings:");
                for w in &report.warnings {
                    println!("  group {} step {} ({}): {}", w.group, w.step, w.object, w.reason);
                }
            }
        }

        Commands::Dump { scene, output } => {
            let mut backend = HeadlessBackend::new();
            let scene = build_scene(&scene, &config, &mut backend)
                .with_context(|| "failed to build scene")?;
            let json = serde_json::to_string_pretty(&scene)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Info => {
            println!("motif {}", env!("CARGO_PKG_VERSION"));
            println!(
                "frame:  {:.2} x {:.2} scene units @ {} fps",
                config.frame_width, config.frame_height, config.fps
            );
            println!("scenes: {}", all_scenes().len());
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<PlaybackConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading playback config");
            PlaybackConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(PlaybackConfig::default()),
    }
}
