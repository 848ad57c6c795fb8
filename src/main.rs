//! Fuel cell CLI - readouts and 3D scene export.
//!
//! Stands in for the interactive front end: collects the operating controls,
//! prints the proxy readouts and writes scene payloads for a renderer.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use fuelcell::animation::FrameSequence;
use fuelcell::controls::{range, Controls};
use fuelcell::export::{scene_to_json, write_frames_jsonl, write_scene_json, write_scene_obj};
use fuelcell::reaction::ReactionModel;
use fuelcell::scene::{CellPart, SceneBuilder, TEACHING_HINTS};

/// PEM hydrogen fuel cell virtual lab.
#[derive(Parser)]
#[command(name = "fuelcell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reaction rate, current density and power.
    Readout {
        #[command(flatten)]
        controls: ControlArgs,
    },

    /// Build the 3D scene at one animation phase and export it.
    Scene {
        #[command(flatten)]
        controls: ControlArgs,

        /// Animation phase (wrapped into [0, 1)).
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        phase: f32,

        /// Export format.
        #[arg(short, long, default_value = "json")]
        format: SceneFormat,

        /// Output file. JSON goes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Export one full animation cycle as JSON Lines.
    Animate {
        #[command(flatten)]
        controls: ControlArgs,

        /// Number of frames in the cycle.
        #[arg(long, default_value = "60")]
        frames: usize,

        /// Output file.
        #[arg(short, long, default_value = "./output/frames.jsonl")]
        output: PathBuf,
    },

    /// Describe the cell parts, control ranges and teaching hints.
    Info,
}

/// Operating controls shared by every command.
#[derive(Args)]
struct ControlArgs {
    /// JSON file with controls; explicit flags override its values.
    #[arg(long = "controls", value_name = "FILE")]
    controls_file: Option<PathBuf>,

    /// Hydrogen concentration (relative, 0.1-2.0).
    #[arg(long)]
    hydrogen: Option<f32>,

    /// Oxygen concentration (relative, 0.1-2.0).
    #[arg(long)]
    oxygen: Option<f32>,

    /// Temperature in °C (20-120).
    #[arg(long)]
    temperature: Option<i32>,

    /// Cell voltage in volts (0.5-1.2).
    #[arg(long)]
    voltage: Option<f32>,

    /// Pressure in atm (0.5-3.0).
    #[arg(long)]
    pressure: Option<f32>,

    /// Animation speed (1-10).
    #[arg(long)]
    speed: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SceneFormat {
    /// Full scene payload (meshes, lines, labels, particles).
    Json,
    /// Cell boxes and wire as Wavefront OBJ.
    Obj,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Readout { controls } => {
            run_readout(resolve_controls(&controls));
        }
        Commands::Scene {
            controls,
            phase,
            format,
            output,
            pretty,
        } => {
            run_scene(resolve_controls(&controls), phase, format, output, pretty);
        }
        Commands::Animate {
            controls,
            frames,
            output,
        } => {
            run_animate(resolve_controls(&controls), frames, output);
        }
        Commands::Info => {
            run_info();
        }
    }
}

/// Merges the controls file and flags, then clamps with a warning.
fn resolve_controls(args: &ControlArgs) -> Controls {
    let mut controls = match &args.controls_file {
        Some(path) => Controls::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error reading controls from {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        None => Controls::default(),
    };

    if let Some(v) = args.hydrogen {
        controls.hydrogen_level = v;
    }
    if let Some(v) = args.oxygen {
        controls.oxygen_level = v;
    }
    if let Some(v) = args.temperature {
        controls.temperature_c = v;
    }
    if let Some(v) = args.voltage {
        controls.voltage = v;
    }
    if let Some(v) = args.pressure {
        controls.pressure_atm = v;
    }
    if let Some(v) = args.speed {
        controls.animation_speed = v;
    }

    if !controls.is_within_ranges() {
        let clamped = controls.clamped();
        log::warn!("controls out of range, clamped: {:?} -> {:?}", controls, clamped);
        controls = clamped;
    }
    log::debug!("controls: {:?}", controls);
    controls
}

fn run_readout(controls: Controls) {
    let readouts = ReactionModel::default().compute(&controls);

    println!("Fuel Cell - Current & Power (proxy)");
    println!("===================================");
    println!("Hydrogen:    {:.1}", controls.hydrogen_level);
    println!("Oxygen:      {:.1}", controls.oxygen_level);
    println!("Temperature: {} °C", controls.temperature_c);
    println!("Voltage:     {:.2} V", controls.voltage);
    println!("Pressure:    {:.1} atm", controls.pressure_atm);
    println!();
    println!("{}", readouts);
}

fn run_scene(
    controls: Controls,
    phase: f32,
    format: SceneFormat,
    output: Option<PathBuf>,
    pretty: bool,
) {
    let start = Instant::now();
    let scene = SceneBuilder::new().build(&controls, phase);
    log::info!(
        "built scene at phase {:.3} (seed {}) in {:.2?}",
        scene.phase,
        scene.seed,
        start.elapsed()
    );

    match (format, output) {
        (SceneFormat::Json, None) => {
            let text = scene_to_json(&scene, pretty).unwrap_or_else(|e| {
                eprintln!("Error serializing scene: {}", e);
                std::process::exit(1);
            });
            println!("{}", text);
        }
        (SceneFormat::Json, Some(path)) => {
            write_scene_json(&scene, &path, pretty).unwrap_or_else(|e| {
                eprintln!("Error exporting JSON: {}", e);
                std::process::exit(1);
            });
            log::info!("exported scene: {}", path.display());
        }
        (SceneFormat::Obj, output) => {
            let path = output.unwrap_or_else(|| PathBuf::from("./output/fuel_cell.obj"));
            write_scene_obj(&scene, &path).unwrap_or_else(|e| {
                eprintln!("Error exporting OBJ: {}", e);
                std::process::exit(1);
            });
            log::info!("exported geometry: {}", path.display());
        }
    }
}

fn run_animate(controls: Controls, frames: usize, output: PathBuf) {
    if frames == 0 {
        eprintln!("Error: Frame count must be at least 1");
        std::process::exit(1);
    }

    let start = Instant::now();
    let builder = SceneBuilder::new();
    let sequence = FrameSequence::new(&builder, controls, frames);

    let written = write_frames_jsonl(sequence, &output).unwrap_or_else(|e| {
        eprintln!("Error exporting frames: {}", e);
        std::process::exit(1);
    });

    log::info!(
        "exported {} frames to {} in {:.2?}",
        written,
        output.display(),
        start.elapsed()
    );
}

fn run_info() {
    println!("Fuel Cell - Parts");
    println!("=================");
    for part in CellPart::all() {
        let b = part.bounds();
        println!(
            "{:<24} x [{:>5.2}, {:>5.2}]  {}",
            part.name(),
            b.min.x,
            b.max.x,
            part.color().name
        );
        println!("  {}", part.description());
    }
    println!();

    println!("Controls");
    println!("========");
    for r in range::ALL {
        println!(
            "  {:<36} {:>6} - {:<6} step {:<5} default {}",
            r.label, r.min, r.max, r.step, r.default
        );
    }
    println!();

    println!("Hints");
    println!("=====");
    for hint in TEACHING_HINTS {
        println!("  - {}", hint);
    }
}
