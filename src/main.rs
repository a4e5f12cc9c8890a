//! `whitebg` CLI - flatten a transparent icon onto white.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whitebg::{Compositor, Config, Mode};

/// Flatten a transparent icon onto an opaque white background.
#[derive(Parser, Debug)]
#[command(name = "whitebg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PNG path. Defaults to `<input stem>-<mode suffix>.png` next to the input.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// How transparent and foreground pixels are resolved.
    #[arg(short, long, value_enum, default_value_t = ModeArg::Composite)]
    mode: ModeArg,

    /// Alpha at or below which pixels stay white (opaque: 0, filtered: 128).
    #[arg(short, long, value_name = "INT")]
    alpha_threshold: Option<u8>,

    /// In filtered mode, drop pixels whose R, G and B all exceed this value.
    #[arg(short, long, default_value = "200", value_name = "INT")]
    white_threshold: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Alpha-blend over white.
    Composite,
    /// Copy every pixel with alpha above the threshold.
    Opaque,
    /// Copy visible pixels that are not near-white.
    Filtered,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Composite => Self::Composite,
            ModeArg::Opaque => Self::Opaque,
            ModeArg::Filtered => Self::Filtered,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("whitebg={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = Config {
        mode: args.mode.into(),
        alpha_threshold: args.alpha_threshold,
        white_threshold: args.white_threshold,
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, config.mode));

    let compositor = Compositor::new(config).context("Invalid options")?;

    compositor
        .process(&args.input, &output)
        .context("Failed to flatten icon")?;

    println!(
        "Created white-background icon: {} -> {}",
        args.input.display(),
        output.display()
    );

    Ok(())
}

/// `dir/icon.png` -> `dir/icon-pure-white.png` for [`Mode::Filtered`].
fn default_output(input: &Path, mode: Mode) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "icon".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}-{}.png", mode.output_suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_names() {
        let input = Path::new("assets/linker.png");

        assert_eq!(
            default_output(input, Mode::Composite),
            PathBuf::from("assets/linker-white.png")
        );
        assert_eq!(
            default_output(input, Mode::Filtered),
            PathBuf::from("assets/linker-pure-white.png")
        );
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["whitebg", "in.png", "-m", "filtered", "-a", "100"]).unwrap();

        assert!(args.output.is_none());
        assert_eq!(Mode::from(args.mode), Mode::Filtered);
        assert_eq!(args.alpha_threshold, Some(100));
        assert_eq!(args.white_threshold, 200);
    }

    #[test]
    fn test_args_reject_out_of_range_threshold() {
        assert!(Args::try_parse_from(["whitebg", "in.png", "-w", "300"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
