use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use vertigo_engine::collision::collides;
use vertigo_engine::logging::{init_logging, LoggingConfig};
use vertigo_engine::render::{ModelStats, StagingModel};
use vertigo_engine::{NdCoords, Shape, Viewport};

/// Headless demo settings.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub viewport: Viewport,
    /// Number of simulated frames.
    pub frames: u32,
    /// Seconds per frame.
    pub dt: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frames: 240,
            dt: 1.0 / 60.0,
        }
    }
}

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    pub frames: u32,
    pub contacts_begun: u32,
    pub contacts_ended: u32,
    pub uploads: u32,
    pub draws: u32,
    pub releases: u32,
}

struct Actor {
    name: &'static str,
    shape: Shape,
    stats: Rc<RefCell<ModelStats>>,
}

impl Actor {
    fn new(name: &'static str, shape: Shape) -> Self {
        let model = StagingModel::new();
        let stats = model.stats();
        Self { name, shape: shape.with_model(Box::new(model)), stats }
    }
}

/// Per-second rates.
const SPIN: f32 = 1.5;
const ORBIT: f32 = 0.6;
const PULSE: f32 = 2.0;
const BALL_SPEED: f32 = 0.8;
const BALL_LIMIT: f32 = 0.9;

fn build_scene(viewport: Viewport) -> Result<Vec<Actor>> {
    let spinner = Shape::triangle(
        NdCoords::new(-0.15, 0.0),
        NdCoords::new(0.15, 0.0),
        NdCoords::new(0.0, 0.25),
    );
    let orbiter = Shape::rect_centered(NdCoords::new(0.6, 0.0), 0.2, 0.1);
    let ball = Shape::circle(NdCoords::new(-BALL_LIMIT, 0.1), 0.08, 24).context("building the ball")?;

    // Square on screen regardless of aspect ratio.
    let side = 0.12;
    let pointer = Shape::rect_centered(NdCoords::new(-0.5, -0.6), side, viewport.ndc_x_to_ndc_y(side));

    Ok(vec![
        Actor::new("spinner", spinner),
        Actor::new("orbiter", orbiter),
        Actor::new("ball", ball),
        Actor::new("pointer", pointer),
    ])
}

/// Turns `pointer` so its +X side faces `target`.
fn aim(pointer: &mut Shape, target: NdCoords, viewport: Viewport) {
    let from = pointer.center().to_pixels(viewport);
    let to = target.to_pixels(viewport);
    // Pixel Y grows downward, and positive rotations are clockwise.
    let angle = (to.y - from.y).atan2(to.x - from.x);
    pointer.set_local_angle(angle);
}

/// Runs the demo loop and closes every shape on the way out.
pub fn run(config: &StudioConfig) -> Result<SessionReport> {
    ensure!(config.viewport.is_valid(), "invalid viewport {:?}", config.viewport);
    ensure!(config.dt.is_finite() && config.dt > 0.0, "frame time must be positive, got {}", config.dt);

    let vp = config.viewport;
    let mut actors = build_scene(vp)?;
    let mut contact = vec![false; actors.len() * actors.len()];
    let mut report = SessionReport::default();
    let mut ball_dir = 1.0_f32;

    for frame in 0..config.frames {
        let dt = config.dt;

        // ── update ────────────────────────────────────────────────────────
        actors[0].shape.rotate_local(SPIN * dt);
        actors[1].shape.rotate_axis(ORBIT * dt, vp);
        actors[1].shape.set_scale(1.0 + 0.25 * (frame as f32 * dt * PULSE).sin());

        let ball = &mut actors[2].shape;
        ball.shift(ball_dir * BALL_SPEED * dt, 0.0);
        if ball.center().x.abs() >= BALL_LIMIT {
            ball_dir = -ball_dir;
        }
        let ball_center = ball.center();
        aim(&mut actors[3].shape, ball_center, vp);

        // ── draw ──────────────────────────────────────────────────────────
        for actor in &mut actors {
            actor.shape.draw(vp);
        }

        // ── contacts ──────────────────────────────────────────────────────
        for i in 0..actors.len() {
            for j in i + 1..actors.len() {
                let hit = collides(&actors[i].shape, &actors[j].shape, vp);
                let was = &mut contact[i * actors.len() + j];
                if hit && !*was {
                    report.contacts_begun += 1;
                    log::info!("frame {frame}: {} touches {}", actors[i].name, actors[j].name);
                } else if !hit && *was {
                    report.contacts_ended += 1;
                    log::info!("frame {frame}: {} leaves {}", actors[i].name, actors[j].name);
                }
                *was = hit;
            }
        }

        report.frames += 1;
    }

    for actor in &mut actors {
        actor.shape.close();
        let stats = actor.stats.borrow();
        log::debug!("{}: {} uploads, {} draws", actor.name, stats.uploads, stats.draws);
        report.uploads += stats.uploads;
        report.draws += stats.draws;
        report.releases += stats.releases;
    }

    Ok(report)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         VERTIGO STUDIO  (headless)     ║");
    println!("  ║   shapes · transforms · SAT contacts   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = StudioConfig::default();
    let report = run(&config)?;

    println!("  frames    {}", report.frames);
    println!("  contacts  {} begun / {} ended", report.contacts_begun, report.contacts_ended);
    println!("  uploads   {}   draws {}", report.uploads, report.draws);
    println!();

    Ok(())
}
