use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "morphdeck", version, about = "Synthesize slide transition timelines")]
struct Cli {
    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize the animation timeline for a deck.
    Synth(SynthArgs),
    /// Validate a deck without synthesizing.
    Validate(ValidateArgs),
    /// Print the shared-element links at each slide boundary.
    Links(LinksArgs),
}

#[derive(Parser, Debug)]
struct SynthArgs {
    /// Input slides JSON (array of slides).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output timeline JSON; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Synthesis options JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the complete slide transition length in seconds.
    #[arg(long)]
    transition: Option<f64>,

    /// Pretty-print the output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input slides JSON (array of slides).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct LinksArgs {
    /// Input slides JSON (array of slides).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Synthesis options JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);
    match cli.cmd {
        Command::Synth(args) => cmd_synth(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Links(args) => cmd_links(args),
    }
}

fn init_logging(level: &str, json: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if json {
        tracing::subscriber::set_global_default(builder.json().finish()).ok();
    } else {
        tracing::subscriber::set_global_default(builder.with_target(true).finish()).ok();
    }
}

fn read_slides(path: &Path) -> anyhow::Result<Vec<morphdeck::Slide>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read slides '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse slides '{}'", path.display()))
}

fn read_opts(path: Option<&Path>) -> anyhow::Result<morphdeck::SynthesisOpts> {
    let Some(path) = path else {
        return Ok(morphdeck::SynthesisOpts::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_synth(args: SynthArgs) -> anyhow::Result<()> {
    let slides = read_slides(&args.in_path)?;
    let mut opts = read_opts(args.config.as_deref())?;
    if let Some(sec) = args.transition {
        opts.timings.complete_slide_transition_sec = sec;
    }

    let timeline = morphdeck::synthesize(&slides, &opts)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&timeline)?
    } else {
        serde_json::to_string(&timeline)?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json + "\n")
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} items, {:.3}s)",
                out.display(),
                timeline.items.len(),
                timeline.total_duration
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write timeline to stdout")?;
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let slides = read_slides(&args.in_path)?;
    morphdeck::validate_slides(&slides)?;
    let shapes: usize = slides.iter().map(|s| s.shapes.len()).sum();
    println!("ok: {} slides, {} shapes", slides.len(), shapes);
    Ok(())
}

fn cmd_links(args: LinksArgs) -> anyhow::Result<()> {
    let slides = read_slides(&args.in_path)?;
    let opts = read_opts(args.config.as_deref())?;
    opts.validate()?;
    morphdeck::validate_slides(&slides)?;

    let staged = morphdeck::stage_slides(&slides, &morphdeck::EstimatedTextMeasure::default());
    let mut ids = morphdeck::SharedIdAllocator::default();
    let mut stdout = std::io::stdout().lock();
    for pair in staged.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let links = morphdeck::match_shared_elements(
            prev,
            next,
            opts.stage,
            opts.min_match_score,
            &mut ids,
        );
        writeln!(stdout, "slide {} -> {}: {} links", prev.index, next.index, links.len())?;
        for link in links {
            writeln!(
                stdout,
                "  {} -> {}  score {:.4}",
                prev.shapes[link.from].shape.id(),
                next.shapes[link.to].shape.id(),
                link.score
            )?;
        }
    }
    Ok(())
}
