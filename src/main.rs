//! Toroid Rocket headless driver
//!
//! Runs the simulation without a renderer, flying a scripted pilot, and
//! reports what happened. Useful for balance checks against a tuning file.

use std::path::PathBuf;

use clap::Parser;
use toroid_rocket::consts::{FRAME_DT, WORLD_HEIGHT, WORLD_WIDTH};
use toroid_rocket::sim::{Action, ActionSet, GameEvent, GameScene, WorldSize};
use toroid_rocket::{SimError, Tuning};

#[derive(Parser, Debug)]
#[command(name = "toroid-rocket")]
#[command(about = "Fly a scripted rocket through the asteroid field without a renderer")]
struct Options {
    /// Tuning JSON file; built-in defaults when omitted
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Seed for the asteroid field
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Print the final scene as JSON
    #[arg(long)]
    dump: bool,
}

/// Scripted pilot: sweep the arena in a slow spiral, firing constantly
fn pilot(frame: u64) -> ActionSet {
    let fire = ActionSet::of(&[Action::Fire]);
    match frame % 180 {
        0..40 => fire.with(Action::ThrustForward),
        40..70 => fire.with(Action::RotateRight),
        70..120 => fire,
        120..140 => fire.with(Action::ThrustReverse).with(Action::RotateLeft),
        _ => ActionSet::none(),
    }
}

fn run(options: &Options) -> Result<(), SimError> {
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let world = WorldSize::new(WORLD_WIDTH, WORLD_HEIGHT)?;
    let mut scene = GameScene::with_seed(&tuning, world, options.seed)?;

    let mut shots = 0u64;
    let mut kills = 0u64;
    let mut bumps = 0u64;

    for frame in 0..options.frames {
        let input = pilot(frame);
        for event in scene.update(FRAME_DT, &input, world)? {
            match event {
                GameEvent::ShotFired { .. } => shots += 1,
                GameEvent::AsteroidDestroyed { asteroid, .. } => {
                    kills += 1;
                    log::info!("Frame {}: asteroid {} destroyed", frame, asteroid);
                }
                GameEvent::CraftCollision { asteroid } => {
                    bumps += 1;
                    log::debug!("Frame {}: rocket touching asteroid {}", frame, asteroid);
                }
                GameEvent::ReloadStarted | GameEvent::Reloaded => {
                    log::debug!("Frame {}: {:?}", frame, event);
                }
            }
        }

        if frame % 60 == 0 {
            let rocket = &scene.rocket;
            log::info!(
                "Frame {}: pos=({:.1}, {:.1}) speed={:.2} {} asteroids={}",
                frame,
                rocket.body.pos.x,
                rocket.body.pos.y,
                rocket.body.speed,
                rocket.hud_label(),
                scene.active_asteroids()
            );
        }

        if scene.active_asteroids() == 0 {
            log::info!("Field cleared at frame {}", frame);
            break;
        }
    }

    println!(
        "frames={} shots={} asteroids_destroyed={} craft_contact_frames={} asteroids_left={}",
        scene.frame_count,
        shots,
        kills,
        bumps,
        scene.active_asteroids()
    );

    if options.dump {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Toroid Rocket (headless) starting...");

    let options = Options::parse();

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
