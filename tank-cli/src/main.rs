use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tank",
    version,
    about = "Composite a top and a bottom image into one \"tank\" PNG"
)]
struct Cli {
    /// Path to top image.
    #[arg(short, long)]
    top: Option<PathBuf>,

    /// Path to bottom image.
    #[arg(short, long)]
    bottom: Option<PathBuf>,

    /// Path to output image (`.png` is appended when missing).
    #[arg(short, long, default_value = tank::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Darken and merge rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Log pipeline details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Option<tank::MakeConfig> {
        let threading = tank::Threading {
            parallel: self.parallel,
            threads: self.threads,
        };
        let cfg = tank::MakeConfig::new(self.top?, self.bottom?, self.output);
        Some(cfg.with_threading(threading))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let Some(cfg) = cli.into_config() else {
        println!("missing required arguments: --top, --bottom");
        return Ok(());
    };

    match tank::make_with_config(&cfg) {
        Ok(()) => println!("Output image saved to {}", cfg.output.display()),
        Err(err) => {
            tracing::debug!(error = ?err, "composite failed");
            println!("{err}");
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))
}
