use std::{
    io::{self, Stdout},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use sort_visualiser_core::{
    AlgorithmVariant, AppConfig, ChartHistory, HighlightSet, ImmediateScheduler, NullChart,
    NullRenderer, PacedScheduler, RenderAdapter, RunController, Sequence, SortVizError,
    TerminalRenderer, Value,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> sort_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_animated(args).await,
        Commands::List => {
            for variant in AlgorithmVariant::ALL {
                println!("{variant}");
            }
            Ok(())
        }
        Commands::Compare { size, seed, config } => {
            run_compare(size, seed, config.as_deref()).await
        }
    }
}

async fn run_animated(args: RunArgs) -> sort_visualiser_core::Result<()> {
    let config = resolve_config(&args)?;
    tracing::info!(?config, "resolved configuration");

    let mut rng = seeded_rng(args.seed);
    let screen = if args.no_render {
        Screen::Hidden
    } else {
        Screen::Bars(TerminalRenderer::new(io::stdout()))
    };

    let controller = RunController::new(
        PacedScheduler,
        screen,
        ChartHistory::new(),
        Sequence::default(),
    )
    .with_value_range(config.sequence.value_range());
    controller.set_delay(config.animation.delay());
    controller.set_visual_parity(config.animation.visual_parity);

    controller.regenerate(config.sequence.size, &mut rng)?;
    if args.shuffle {
        controller.shuffle(&mut rng)?;
    }

    let report = controller.start_run(config.algorithm).await?;
    if !args.no_render {
        println!();
    }
    println!("Algorithm: {}", report.algorithm);
    println!("Runtime: {}", report.runtime_label());
    println!("Steps: {}", report.total_steps);

    if let Some(path) = &args.chart_out {
        controller.with_collaborators(|_, chart| chart.export_json(path))??;
        tracing::info!(path = %path.display(), "wrote chart history");
    }

    Ok(())
}

async fn run_compare(
    size: Option<usize>,
    seed: Option<u64>,
    config: Option<&Path>,
) -> sort_visualiser_core::Result<()> {
    let mut config = match config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(size) = size {
        config.sequence.size = size;
    }
    config.validate()?;

    let input: Vec<Value> = Sequence::random(
        config.sequence.size,
        config.sequence.value_range(),
        &mut seeded_rng(seed),
    )?
    .into_values();

    let controller = RunController::new(
        ImmediateScheduler,
        NullRenderer,
        NullChart,
        Sequence::default(),
    );

    println!("{:<10} {:>10} {:>12}", "algorithm", "steps", "runtime");
    for variant in AlgorithmVariant::ALL {
        controller.load(input.clone())?;
        match controller.start_run(variant).await {
            Ok(report) => println!(
                "{:<10} {:>10} {:>12}",
                variant.name(),
                report.total_steps,
                report.runtime_label()
            ),
            Err(err @ (SortVizError::NegativeValue { .. } | SortVizError::ValueTooLarge { .. })) => {
                println!("{:<10} skipped: {err}", variant.name());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn resolve_config(args: &RunArgs) -> sort_visualiser_core::Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(size) = args.size {
        config.sequence.size = size;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.animation.delay_ms = delay_ms;
    }
    if args.visual_parity {
        config.animation.visual_parity = true;
    }

    config.validate()?;
    Ok(config)
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Where frames go during an animated run.
enum Screen {
    Bars(TerminalRenderer<Stdout>),
    Hidden,
}

impl RenderAdapter for Screen {
    fn render(&mut self, snapshot: &[Value], highlight: HighlightSet) {
        match self {
            Self::Bars(bars) => bars.render(snapshot, highlight),
            Self::Hidden => {}
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step sorting algorithm visualiser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate one sorting algorithm in the terminal.
    Run(RunArgs),
    /// List the available algorithms.
    List,
    /// Run every algorithm over the same input without delay and compare.
    Compare {
        /// Number of values to sort.
        #[arg(short, long)]
        size: Option<usize>,
        /// Seed for the random input.
        #[arg(long)]
        seed: Option<u64>,
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Algorithm to animate (bubble, selection, insertion, merge, quick, heap, counting, radix).
    #[arg(short, long)]
    algorithm: Option<AlgorithmVariant>,
    /// Number of values to sort.
    #[arg(short, long)]
    size: Option<usize>,
    /// Pause after every counted mutation, in milliseconds.
    #[arg(short, long)]
    delay_ms: Option<u64>,
    /// Seed for the random input.
    #[arg(long)]
    seed: Option<u64>,
    /// JSON configuration file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the chart history as JSON once the run finishes.
    #[arg(long)]
    chart_out: Option<PathBuf>,
    /// Skip drawing bars.
    #[arg(long)]
    no_render: bool,
    /// Shuffle the generated values once more before sorting.
    #[arg(long)]
    shuffle: bool,
    /// Animate counting and radix sort as well.
    #[arg(long)]
    visual_parity: bool,
}
