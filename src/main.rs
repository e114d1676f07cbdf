use anyhow::Context;
use clap::{Parser, ValueEnum};
use gravity_turn::{
    rest_on_surface, InputSampler, Key, Phase, RigidPose, Simulation, SimulationConfig, SoleAnchor,
    TurnSide,
};
use std::path::PathBuf;

const CUBE_TOP_Y: f64 = 2.0;

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Left,
    Right,
}

/// Walks a character across a cube top and over its edge, logging the root pose.
#[derive(Parser)]
#[command(name = "gravity-turn-sim")]
struct Args {
    /// TOML file with simulation tunables
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    #[arg(long, value_enum)]
    side: Option<Side>,

    #[arg(long)]
    distance: Option<f64>,

    /// Frame at which the corner turn is armed
    #[arg(long, default_value_t = 30)]
    corner_at: u32,

    /// Frame at which to about face
    #[arg(long)]
    about_face_at: Option<u32>,

    #[arg(long, default_value_t = 30)]
    report_every: u32,
}

struct App {
    sim: Simulation,
    input: InputSampler,
    args: Args,
}

impl App {
    fn new(args: Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulationConfig::default(),
        };
        if let Some(side) = args.side {
            config.initial_side = match side {
                Side::Left => TurnSide::Left,
                Side::Right => TurnSide::Right,
            };
        }
        if let Some(distance) = args.distance {
            config.distance = distance;
        }

        let anchor = SoleAnchor::new(config.sole_height).offset(config.character_scale);
        let start = rest_on_surface(&RigidPose::IDENTITY, anchor, CUBE_TOP_Y);
        let sim = Simulation::new(config, start);

        let mut input = InputSampler::new();
        input.on_key(Key::W, true);

        Ok(Self { sim, input, args })
    }

    fn script(&mut self, frame: u32) {
        if frame == self.args.corner_at {
            self.input.on_key(Key::C, true);
            self.input.on_key(Key::C, false);
        }
        if Some(frame) == self.args.about_face_at {
            self.input.on_key(Key::T, true);
            self.input.on_key(Key::T, false);
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let mut last_phase = None;
        for frame in 0..self.args.frames {
            self.script(frame);
            let report = self
                .sim
                .update(self.input.sample(), self.args.dt)
                .with_context(|| format!("frame {frame}"))?;

            if let Some(transition) = report.transition {
                log::info!(
                    "frame {frame}: clip {:?} -> {:?} ({}s)",
                    transition.from,
                    transition.to,
                    transition.fade
                );
            }
            if last_phase != Some(report.phase) || frame % self.args.report_every.max(1) == 0 {
                log::info!(
                    "frame {frame}: {:?} position={:.4} up={:.4} anchor={:.4}",
                    report.phase,
                    report.pose.position,
                    report.pose.up(),
                    self.sim.anchor_world()
                );
            }
            if last_phase == Some(Phase::CornerTurn) && report.phase != Phase::CornerTurn {
                log::info!("frame {frame}: left the corner turn");
            }
            last_phase = Some(report.phase);
        }

        let pose = self.sim.pose();
        println!(
            "final position={:.6} forward={:.6} up={:.6} anchor={:.6}",
            pose.position,
            pose.forward(),
            pose.up(),
            self.sim.anchor_world()
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut app = App::new(args)?;
    app.run()
}
