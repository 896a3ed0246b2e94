use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sortviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a full trace and write it as JSON.
    Trace(TraceArgs),
    /// Print a single step of a trace as text.
    Frame(FrameArgs),
    /// Print algorithm metadata (complexity, category).
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Step index (0-based).
    #[arg(long)]
    step: usize,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Algorithm to describe (all when omitted).
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmChoice>,
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Algorithm to run.
    #[arg(long, value_enum)]
    algorithm: AlgorithmChoice,

    /// Comma- or space-separated values (1-500), e.g. "5,3,4,1".
    #[arg(long, conflicts_with = "random")]
    values: Option<String>,

    /// Generate a random sequence of this length instead.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

impl From<AlgorithmChoice> for sortviz::Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Bubble => Self::Bubble,
            AlgorithmChoice::Selection => Self::Selection,
            AlgorithmChoice::Insertion => Self::Insertion,
            AlgorithmChoice::Merge => Self::Merge,
            AlgorithmChoice::Quick => Self::Quick,
            AlgorithmChoice::Heap => Self::Heap,
            AlgorithmChoice::Radix => Self::Radix,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn build_sequence(input: &InputArgs) -> anyhow::Result<Vec<sortviz::Element>> {
    if let Some(len) = input.random {
        return Ok(sortviz::generate_random_sequence(len, input.seed));
    }

    let raw = input
        .values
        .as_deref()
        .context("either --values or --random is required")?;
    let values = sortviz::parse_values(raw).context("parse --values")?;
    Ok(sortviz::sequence_from_values(&values))
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let sequence = build_sequence(&args.input)?;
    let trace = sortviz::generate_trace(args.input.algorithm.into(), &sequence);

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&path)
                .with_context(|| format!("create trace file '{}'", path.display()))?;
            let w = BufWriter::new(f);
            if args.pretty {
                serde_json::to_writer_pretty(w, &trace)?;
            } else {
                serde_json::to_writer(w, &trace)?;
            }
            eprintln!("wrote {} ({} steps)", path.display(), trace.len());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            if args.pretty {
                serde_json::to_writer_pretty(&mut w, &trace)?;
            } else {
                serde_json::to_writer(&mut w, &trace)?;
            }
            writeln!(w)?;
        }
    }

    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let sequence = build_sequence(&args.input)?;
    let trace = sortviz::generate_trace(args.input.algorithm.into(), &sequence);

    let step = trace
        .get(args.step)
        .with_context(|| format!("step {} out of range (trace has {})", args.step, trace.len()))?;

    println!("step {}/{}: {}", args.step, trace.len() - 1, step.description);
    for (i, el) in step.elements.iter().enumerate() {
        let marker = match el.state {
            sortviz::ElementState::Default => ' ',
            sortviz::ElementState::Comparing => '?',
            sortviz::ElementState::Swapping => 'x',
            sortviz::ElementState::Sorted => '*',
        };
        println!("  [{i:>3}] {:>5} {marker} (id {})", el.value, el.id.0);
    }

    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let algorithms: Vec<sortviz::Algorithm> = match args.algorithm {
        Some(choice) => vec![choice.into()],
        None => sortviz::Algorithm::ALL.to_vec(),
    };

    for algo in algorithms {
        let info = algo.info();
        println!("{} ({})", info.name, algo.selector());
        println!("  {}", info.description);
        println!(
            "  time: best {}, average {}, worst {}",
            info.time.best, info.time.average, info.time.worst
        );
        println!("  space: {}", info.space);
        println!("  category: {:?}", info.category);
        println!();
    }

    Ok(())
}
