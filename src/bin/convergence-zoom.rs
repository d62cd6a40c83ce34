use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use convergence_zoom::{
    AnimationPlan, EpsilonList, ExportThreading, FrameIndex, FrameRange, PlanParams, Preset,
    ZoomError,
};

#[derive(Parser, Debug)]
#[command(name = "convergence-zoom", version)]
struct Cli {
    /// Log to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the animation and print its summary as JSON.
    Plan(PlanArgs),
    /// Print the state of a single frame as JSON.
    Frame(FrameArgs),
    /// Print the states of a frame range as JSON lines.
    Frames(FramesArgs),
    /// Run one threshold search and print the result as JSON.
    Threshold(ThresholdArgs),
}

#[derive(Args, Debug)]
struct SequenceArgs {
    /// Built-in sequence to analyse.
    #[arg(long, value_enum, default_value_t = SequenceChoice::Cusp)]
    sequence: SequenceChoice,

    /// Distance from the origin used by the `constant` sequence.
    #[arg(long, default_value_t = 10.0)]
    distance: f64,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Strictly decreasing epsilons as a JSON array, e.g. '[0.25, 0.05]'. Defaults per sequence.
    #[arg(long)]
    epsilons: Option<EpsilonList>,

    /// Consecutive in-ball samples required to accept a threshold. Defaults per sequence.
    #[arg(long)]
    acc: Option<u64>,

    /// Plan parameters JSON; missing fields keep their defaults.
    #[arg(long)]
    params: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the total frame count.
    #[arg(long)]
    end: Option<u64>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames evaluated per chunk.
    #[arg(long, default_value_t = 256)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct ThresholdArgs {
    #[command(flatten)]
    seq: SequenceArgs,

    /// Ball radius.
    #[arg(long)]
    epsilon: f64,

    /// Consecutive in-ball samples required. Defaults per sequence.
    #[arg(long)]
    acc: Option<u64>,

    /// Maximum probed index.
    #[arg(long, default_value_t = convergence_zoom::DEFAULT_SEARCH_CAP)]
    search_cap: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SequenceChoice {
    Harmonic,
    Cusp,
    Spiral,
    Constant,
}

impl SequenceArgs {
    fn preset(&self) -> Preset {
        match self.sequence {
            SequenceChoice::Harmonic => Preset::Harmonic,
            SequenceChoice::Cusp => Preset::Cusp,
            SequenceChoice::Spiral => Preset::Spiral,
            SequenceChoice::Constant => Preset::Constant {
                distance: self.distance,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Threshold(args) => cmd_threshold(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_plan(args: &PlanArgs) -> anyhow::Result<AnimationPlan> {
    let preset = args.seq.preset();
    let params = match &args.params {
        Some(path) => PlanParams::from_path(path)?,
        None => PlanParams::default(),
    };
    let epsilons = match &args.epsilons {
        Some(eps) => eps.as_slice().to_vec(),
        None => preset.suggested_epsilons(),
    };
    let acc = args.acc.unwrap_or_else(|| preset.suggested_acc());

    let plan = convergence_zoom::plan_animation(&preset, &epsilons, acc, &params)
        .with_context(|| format!("plan animation for {preset:?}"))?;
    Ok(plan)
}

fn write_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("serialize JSON")?;
    writeln!(out).context("write stdout")?;
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let plan = build_plan(&args)?;
    write_json(&plan.summary())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let plan = build_plan(&args.plan)?;
    write_json(&plan.state_at(FrameIndex(args.frame)))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let plan = build_plan(&args.plan)?;
    let end = args.end.unwrap_or_else(|| plan.total_frames());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let threading = ExportThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    plan.export_states(range, &threading, |chunk| {
        for state in &chunk {
            serde_json::to_writer(&mut out, state)
                .map_err(|e| ZoomError::serde(format!("serialize frame state: {e}")))?;
            writeln!(out).map_err(|e| ZoomError::Other(e.into()))?;
        }
        Ok(())
    })?;
    out.flush().context("flush output")?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_threshold(args: ThresholdArgs) -> anyhow::Result<()> {
    let preset = args.seq.preset();
    let acc = args.acc.unwrap_or_else(|| preset.suggested_acc());
    let threshold =
        convergence_zoom::find_threshold(&preset, args.epsilon, acc, args.search_cap)?;
    write_json(&serde_json::json!({
        "epsilon": args.epsilon,
        "acc": acc,
        "search_cap": args.search_cap,
        "threshold": threshold,
    }))
}
