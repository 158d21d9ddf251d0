//! Command-line front end: decide, plot and train the built-in neurons (or
//! one loaded from JSON) without a browser.
//!
//!   cargo run -- inspect --values 0.9,0.2,0.7,0.4
//!   cargo run -- plot --preset neuron2 --x 1 --y 4 --out slice.png
//!   cargo run -- train --epochs 300
//!
//! Set `RUST_LOG=debug` to see per-epoch losses.

use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_neuron::boundary::{AxisPair, Slice, SliceView, TraceConfig, DEFAULT_RESOLUTION};
use ferrite_neuron::decision::{DecisionChain, Level};
use ferrite_neuron::plot;
use ferrite_neuron::train::{accuracy, synthetic_examples};
use ferrite_neuron::{presets, Neuron, NeuronConfig, Result};

#[derive(Parser)]
#[command(name = "ferrite-neuron", about = "Poke at a single sigmoid neuron")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the decision for an input vector and a text plot of the slice.
    Inspect {
        #[command(flatten)]
        slice: SliceArgs,
        /// Grid cells per side of the text plot.
        #[arg(long, default_value_t = 32)]
        resolution: usize,
        /// Inputs of the first-stage neuron when inspecting neuron2;
        /// defaults to 0.5 each.
        #[arg(long, value_delimiter = ',')]
        gate_values: Option<Vec<f64>>,
    },
    /// Render the slice to a PNG.
    Plot {
        #[command(flatten)]
        slice: SliceArgs,
        #[arg(long, default_value = "boundary.png")]
        out: String,
        #[arg(long, default_value_t = 500)]
        size: u32,
        #[arg(long, default_value_t = 40)]
        padding: u32,
        #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
        resolution: usize,
    },
    /// Train a blank neuron on examples labeled by the chosen one.
    Train {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, default_value_t = 200)]
        samples: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 0.1)]
        learning_rate: f64,
        #[arg(long, default_value_t = 100)]
        epochs: usize,
        /// Write the trained neuron's config here.
        #[arg(long)]
        save: Option<String>,
    },
    /// Write the chosen neuron's config as JSON.
    Export {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        out: String,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Built-in neuron: neuron1 or neuron2.
    #[arg(long, default_value = presets::MEETING_HOST)]
    preset: String,
    /// Load the neuron from a JSON config instead of a preset.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Args)]
struct SliceArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Input index on the horizontal axis.
    #[arg(long)]
    x: Option<usize>,
    /// Input index on the vertical axis.
    #[arg(long)]
    y: Option<usize>,
    /// Comma-separated input values in [0, 1]; defaults to 0.5 each.
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<f64>>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Inspect { slice, resolution, gate_values } => {
            let neuron = load(&slice.source)?;
            let slice = build_slice(&neuron, &slice)?;
            inspect(&neuron, &slice, resolution, gate_values)
        }
        Command::Plot { slice, out, size, padding, resolution } => {
            let neuron = load(&slice.source)?;
            let slice = build_slice(&neuron, &slice)?;
            let view = SliceView::render(&neuron, &slice, resolution, &TraceConfig::default())?;
            plot::png::save(&view, &out, size, padding)?;
            println!("wrote {out}");
            Ok(())
        }
        Command::Train { source, samples, seed, learning_rate, epochs, save } => {
            let reference = load(&source)?;
            train(&reference, samples, seed, learning_rate, epochs, save.as_deref())
        }
        Command::Export { source, out } => {
            load(&source)?.config().save_json(&out)?;
            println!("wrote {out}");
            Ok(())
        }
    }
}

fn load(source: &SourceArgs) -> Result<Neuron> {
    if let Some(path) = &source.config {
        info!("loading neuron config from {path}");
        return Ok(Neuron::new(NeuronConfig::load_json(path)?));
    }
    presets::load(&source.preset)
}

fn build_slice(neuron: &Neuron, args: &SliceArgs) -> Result<Slice> {
    let dims = neuron.dimensions();
    let default = match presets::default_axes(neuron.name()) {
        Some(axes) => axes,
        None => AxisPair::new(0, 1, dims)?,
    };
    let axes = AxisPair::new(
        args.x.unwrap_or(default.x()),
        args.y.unwrap_or(default.y()),
        dims,
    )?;
    let values = args.values.clone().unwrap_or_else(|| presets::default_inputs(neuron));
    Slice::new(neuron, axes, values)
}

fn inspect(
    neuron: &Neuron,
    slice: &Slice,
    resolution: usize,
    gate_values: Option<Vec<f64>>,
) -> Result<()> {
    let decision = neuron.decide(slice.fixed_inputs())?;

    if let Some(chain) = DecisionChain::gating(neuron.name()) {
        let first = chain.first();
        let inputs = gate_values.unwrap_or_else(|| presets::default_inputs(first));
        let gate = first.decide(&inputs)?;
        println!("gate: {} => {}", first.label(), gate.outcome);
        if !gate.positive {
            println!(
                "(inactive: answer only applies once the first decision is {})",
                first.yes_label()
            );
        }
        println!();
    }

    println!("{}", neuron.label());
    for (input, value) in neuron.inputs().iter().zip(slice.fixed_inputs()) {
        println!(
            "  {} {:<26} {:>5.2}  {}",
            input.icon,
            input.name,
            value,
            Level::from_value(*value)
        );
    }
    println!();
    println!(
        "=> {} ({}, output {:.4}, {}%)",
        decision.outcome, decision.confidence, decision.output, decision.percent
    );
    println!();

    let view = SliceView::render(neuron, slice, resolution, &TraceConfig::default())?;
    let axes = slice.axes();
    println!(
        "x: {}  y: {}",
        neuron.inputs()[axes.x()].name,
        neuron.inputs()[axes.y()].name
    );
    println!("{}", plot::ascii::render(&view));
    if !view.trace.has_boundary() {
        println!("(boundary lies outside this slice)");
    }
    Ok(())
}

fn train(
    reference: &Neuron,
    samples: usize,
    seed: u64,
    learning_rate: f64,
    epochs: usize,
    save: Option<&str>,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let examples = synthetic_examples(reference, samples, &mut rng);

    let mut blank = reference.config();
    blank.name = format!("{}-student", reference.name());
    blank.bias = 0.0;
    for input in &mut blank.inputs {
        input.weight = 0.0;
    }
    let mut student = Neuron::new(blank);

    let history = student.train(&examples, learning_rate, epochs)?;
    let every = (epochs / 10).max(1);
    for (epoch, loss) in history.iter().enumerate() {
        if epoch % every == 0 || epoch + 1 == epochs {
            println!("Epoch {:>5}: loss = {:.6}", epoch + 1, loss);
        }
    }

    println!();
    println!("{:<28} {:>10} {:>10}", "input", "reference", "learned");
    for ((input, learned), reference_w) in student.inputs().iter()
        .zip(student.weights())
        .zip(reference.weights())
    {
        println!("{:<28} {:>10.3} {:>10.3}", input.name, reference_w, learned);
    }
    println!("{:<28} {:>10.3} {:>10.3}", "bias", reference.bias(), student.bias());
    println!("accuracy on training set: {:.1}%", accuracy(&student, &examples)? * 100.0);

    if let Some(path) = save {
        student.config().save_json(path)?;
        println!("wrote {path}");
    }
    Ok(())
}
