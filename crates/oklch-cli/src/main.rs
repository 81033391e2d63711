use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use oklch_core::{ColorMatch, OklchColor, RgbColor, format_oklch, scan, to_oklch, try_parse_oklch};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "oklch")]
#[command(version, about = "Find, convert and canonicalize CSS oklch() colors", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every oklch() literal in a stylesheet
    Scan {
        /// Input file (stdin when absent)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Emit one JSON object per literal
        #[arg(long)]
        json: bool,
    },

    /// Convert a literal to 8-bit sRGB
    ToRgb {
        /// Literal such as "oklch(70% 0.1 200)"
        #[arg(value_name = "LITERAL")]
        literal: String,
    },

    /// Convert 8-bit sRGB channels to a canonical literal
    FromRgb {
        #[arg(value_name = "R")]
        r: u8,
        #[arg(value_name = "G")]
        g: u8,
        #[arg(value_name = "B")]
        b: u8,

        /// Opacity in [0, 1]
        #[arg(long, value_name = "A", default_value = "1.0")]
        alpha: f64,
    },

    /// Re-emit a literal in canonical form
    Format {
        #[arg(value_name = "LITERAL")]
        literal: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan { input, json } => cmd_scan(input, json),
        Commands::ToRgb { literal } => cmd_to_rgb(&literal),
        Commands::FromRgb { r, g, b, alpha } => cmd_from_rgb(r, g, b, alpha),
        Commands::Format { literal } => cmd_format(&literal),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_scan(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("reading stdin")?,
    };
    log::info!(
        "scanning {} ({} bytes)",
        input.as_ref().map_or("<stdin>".into(), |p| p.display().to_string()),
        text.len()
    );

    let mut out = io::stdout().lock();
    let mut count = 0usize;
    for m in scan(&text) {
        let line = if json {
            serde_json::to_string(&ScanRecord::new(&text, &m))?
        } else {
            scan_line(&text, &m)
        };
        writeln!(out, "{}", line)?;
        count += 1;
    }
    log::info!("{} literals", count);
    Ok(())
}

fn cmd_to_rgb(literal: &str) -> Result<()> {
    let color = try_parse_oklch(literal)?;
    if !color.is_in_srgb_gamut() {
        log::warn!("{} is outside sRGB, channels were clipped", format_oklch(color));
    }
    let rgb = color.to_rgb();
    println!("{}", css_rgb(rgb));
    println!("{}", rgb.to_hex());
    Ok(())
}

fn cmd_from_rgb(r: u8, g: u8, b: u8, alpha: f64) -> Result<()> {
    anyhow::ensure!((0.0..=1.0).contains(&alpha), "alpha {} is not in [0, 1]", alpha);
    println!("{}", format_oklch(to_oklch(RgbColor::with_alpha(r, g, b, alpha))));
    Ok(())
}

fn cmd_format(literal: &str) -> Result<()> {
    let color: OklchColor = literal.parse()?;
    println!("{}", color);
    Ok(())
}

/// One line of `--json` scan output
#[derive(Debug, Serialize)]
struct ScanRecord<'t> {
    start: usize,
    end: usize,
    literal: &'t str,
    color: OklchColor,
    hex: String,
}

impl<'t> ScanRecord<'t> {
    fn new(text: &'t str, m: &ColorMatch) -> Self {
        Self {
            start: m.span.start,
            end: m.span.end,
            literal: m.span.slice(text).unwrap_or_default(),
            color: m.color,
            hex: m.color.to_rgb().to_hex(),
        }
    }
}

fn scan_line(text: &str, m: &ColorMatch) -> String {
    format!(
        "{}..{}  {}  -> {}",
        m.span.start,
        m.span.end,
        m.span.slice(text).unwrap_or_default(),
        m.color.to_rgb().to_hex()
    )
}

/// CSS Color 4 space-separated `rgb()`
fn css_rgb(rgb: RgbColor) -> String {
    format!("rgb({} {} {} / {})", rgb.r, rgb.g, rgb.b, rgb.alpha)
}
