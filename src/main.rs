//! Segmino
//!
//! Prints a number as seven-segment ASCII art.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use segmino::app::Config;
use segmino::core::{BlockChar, Digits};
use segmino::render::{SevenSegment, Snapshot};

use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Debug, Default)]
struct Args {
    /// Number to display (from config if not specified)
    number: Option<String>,
    /// Block character override
    block: Option<String>,
    /// Use the full block glyph
    full_block: bool,
    /// Config file (default location if not specified)
    config: Option<PathBuf>,
    /// Output a JSON snapshot instead of text
    json: bool,
    /// Show help
    help: bool,
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut args = Args::default();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            },
            "-b" | "--block" => {
                i += 1;
                let value = argv.get(i).ok_or("--block requires a character")?;
                args.block = Some(value.clone());
            },
            "-F" | "--full-block" => {
                args.full_block = true;
            },
            "-c" | "--config" => {
                i += 1;
                let value = argv.get(i).ok_or("--config requires a path")?;
                args.config = Some(PathBuf::from(value));
            },
            "-j" | "--json" => {
                args.json = true;
            },
            other => {
                // Negative numbers look like flags; let the digit parser reject them
                let numeric = other.strip_prefix('-').unwrap_or(other);
                if other.starts_with('-') && !numeric.chars().all(|c| c.is_ascii_digit()) {
                    return Err(format!("unknown option: {}", other));
                }
                if args.number.is_some() {
                    return Err(format!("unexpected argument: {}", other));
                }
                args.number = Some(other.to_string());
            },
        }
        i += 1;
    }

    Ok(args)
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the rendering
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'segmino --help' for more information.");
            return ExitCode::FAILURE;
        },
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    debug!(?config, "loaded config");

    let display = select_display(args, &config)?;

    let digits = match &args.number {
        Some(text) => Digits::parse(text)?,
        None => Digits::from_unsigned(config.number),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let snapshot = Snapshot::capture(&display, &digits);
        writeln!(out, "{}", snapshot.to_json()?)?;
    } else {
        writeln!(out, "{}", display.render_digits(&digits))?;
    }
    out.flush()?;

    Ok(())
}

/// Pick the renderer: command-line flags win over the config file
fn select_display(
    args: &Args,
    config: &Config,
) -> Result<SevenSegment, Box<dyn std::error::Error>> {
    if args.full_block {
        Ok(SevenSegment::full_block())
    } else if let Some(block) = &args.block {
        Ok(SevenSegment::new(parse_block(block)?))
    } else {
        Ok(config.display()?)
    }
}

fn parse_block(text: &str) -> Result<BlockChar, Box<dyn std::error::Error>> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(BlockChar::new(c)?),
        _ => Err(format!("block must be a single character: {:?}", text).into()),
    }
}

fn print_help() {
    println!("Segmino - seven-segment ASCII art numbers");
    println!();
    println!("Usage: segmino [OPTIONS] [NUMBER]");
    println!();
    println!("Options:");
    println!("  -b, --block <CHAR>   Character for lit segments (default: #)");
    println!("  -F, --full-block     Use the full block character");
    println!("  -c, --config <PATH>  Read configuration from a JSON file");
    println!("  -j, --json           Output a JSON snapshot");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Without NUMBER, prints the configured number (default: 1234567890).");
    println!();
    println!("Examples:");
    println!("  segmino 42");
    println!("  segmino --full-block 2024");
    println!("  RUST_LOG=debug segmino --json 7");
}
