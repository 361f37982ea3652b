use clap::{ArgAction, ArgGroup, Parser};
use log::{error, warn, LevelFilter};
use pixedit::{codec, PixelBuffer, Result, Script};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pixedit",
    version,
    about = "Draw on, fill and transform raster images from an edit script"
)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "new", "info"])))]
struct Args {
    /// Image to edit (format detected from content)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Start from a transparent canvas of WxH pixels (e.g. 640x480)
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    new: Option<(i32, i32)>,

    /// JSON edit script to apply
    #[arg(long, short)]
    script: Option<PathBuf>,

    /// Where to write the result (format from the extension)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print size, color type and format of an image and exit
    #[arg(long)]
    info: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

/// Parse WxH format (e.g., 1920x1080)
fn parse_size(s: &str) -> std::result::Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("bad height {h:?}: {e}"))?;
    if w < 0 || h < 0 {
        return Err(format!("size must not be negative, got {s:?}"));
    }
    Ok((w, h))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.info {
        let info = codec::info(path)?;
        println!("{}: {info}", path.display());
        return Ok(());
    }

    let mut buffer = match (&args.input, args.new) {
        (Some(path), _) => codec::load(path)?,
        (None, Some((width, height))) => PixelBuffer::with_size(width, height)?,
        (None, None) => PixelBuffer::new(),
    };

    if let Some(path) = &args.script {
        Script::load(path)?.apply(&mut buffer)?;
    }

    match &args.output {
        Some(path) => codec::save(&buffer, path)?,
        None => warn!("no --output given, the edited image is discarded"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
