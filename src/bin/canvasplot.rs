use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "canvasplot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service.
    Serve(ServeArgs),
    /// Reconstruct a serialized grid file into a PNG.
    Plot(PlotArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// JSON config file; omitted fields take their defaults.
    #[arg(long, env = "CANVASPLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file).
    #[arg(long, env = "CANVASPLOT_BIND")]
    bind: Option<SocketAddr>,

    /// Payload directory (overrides the config file).
    #[arg(long, env = "CANVASPLOT_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlotArgs {
    /// Input file holding the serialized grid.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Intensity mapping.
    #[arg(long, value_enum, default_value_t = ScalingChoice::Clamp)]
    scaling: ScalingChoice,

    /// Nearest-neighbour upscale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScalingChoice {
    Clamp,
    Auto,
}

impl From<ScalingChoice> for canvasplot::Scaling {
    fn from(c: ScalingChoice) -> Self {
        match c {
            ScalingChoice::Clamp => canvasplot::Scaling::Clamp,
            ScalingChoice::Auto => canvasplot::Scaling::Auto,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args),
        Command::Plot(args) => cmd_plot(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => canvasplot::ServiceConfig::from_json_file(path)?,
        None => canvasplot::ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    rt.block_on(canvasplot::server::serve(config))?;
    Ok(())
}

fn cmd_plot(args: PlotArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read grid '{}'", args.in_path.display()))?;

    let settings = canvasplot::RenderSettings {
        scaling: args.scaling.into(),
        scale: args.scale,
    };
    let png = canvasplot::reconstruct(&text, &settings)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(&args.out, &png.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({}x{})", args.out.display(), png.width, png.height);
    Ok(())
}
