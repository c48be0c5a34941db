#![deny(unsafe_code)]
//! CLI binary for the colorlab color engine.
//!
//! Subcommands:
//! - `inspect <color>`: every derivation for one color
//! - `convert <color> --to <space>`: one color-space representation
//! - `scheme <color> <scheme>`: a ramp or harmonic scheme
//! - `contrast <a> <b>`: WCAG contrast ratio and readability verdict
//! - `simulate <color>`: color vision deficiency simulation
//! - `random`: deterministic random colors
//! - `list`: available spaces, schemes and deficiencies

mod error;

use clap::{ArgAction, Parser, Subcommand};
use colorlab_core::{
    blindness, contrast_ratio, is_readable, parse, random_colors, Color, ColorReport, ColorSpace,
    CssNames, Deficiency, Level, ReadabilityOptions, Scheme, Size,
};
use error::CliError;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorlab", about = "Color conversion, palettes, contrast and vision simulation")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every representation, palette and metric for a color.
    Inspect {
        /// Any accepted color string (hex, rgb(), hsl(), CSS name).
        color: String,
    },
    /// Convert a color into another color space.
    Convert {
        color: String,

        /// Target space (rgb, hsl, hsv, cmyk, cielab, cielch).
        #[arg(short, long)]
        to: String,
    },
    /// Generate a ramp or harmonic scheme from a color.
    Scheme {
        color: String,

        /// Scheme name (shades, tints, tones, complementary, hue, alternative,
        /// triadic, square, split-complementary).
        scheme: String,
    },
    /// Compute the WCAG contrast ratio between two colors.
    Contrast {
        foreground: String,
        background: String,

        /// Conformance level (AA or AAA).
        #[arg(short, long, default_value = "AA")]
        level: String,

        /// Text size (small or large).
        #[arg(short, long, default_value = "small")]
        size: String,
    },
    /// Simulate how a color looks with a color vision deficiency.
    Simulate {
        color: String,

        /// Only this deficiency (protanopia, deuteranopia, tritanopia,
        /// achromatopsia). All four when omitted.
        #[arg(short, long)]
        deficiency: Option<String>,
    },
    /// Print deterministic random colors.
    Random {
        /// Number of colors.
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List available color spaces, schemes and deficiencies.
    List,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn hex_list(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| c.to_hex()).collect()
}

fn print_report(report: &ColorReport) {
    println!("{} ({})", report.hex, report.name);
    for space in ColorSpace::ALL {
        println!("  {:<7} {}", space.name(), space.convert(report.hex));
    }
    for scheme in Scheme::ALL {
        let hexes: Vec<String> = report.scheme(scheme).iter().map(|s| s.hex.to_hex()).collect();
        println!("  {:<20} {}", scheme.name(), hexes.join(" "));
    }
    for deficiency in Deficiency::ALL {
        println!(
            "  {:<14} {}",
            deficiency.name(),
            report.blindness.get(deficiency)
        );
    }
    for (label, result) in [("on white", report.contrast.white), ("on black", report.contrast.black)] {
        println!(
            "  {label}: {:.2}:1 (AA small {}, AA large {})",
            result.score,
            verdict(result.small),
            verdict(result.large)
        );
    }
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Inspect { color } => {
            let color = parse(&color)?;
            let report = ColorReport::build(color, &CssNames);
            if cli.json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }
        Command::Convert { color, to } => {
            let color = parse(&color)?;
            let space: ColorSpace = to.parse()?;
            let repr = space.convert(color);
            debug!(%color, %space, "converted");
            if cli.json {
                print_json(&repr)?;
            } else {
                println!("{repr}");
            }
        }
        Command::Scheme { color, scheme } => {
            let color = parse(&color)?;
            let scheme: Scheme = scheme.parse()?;
            let hexes = hex_list(&scheme.generate(color));
            if cli.json {
                print_json(&serde_json::json!({
                    "color": color,
                    "scheme": scheme,
                    "colors": hexes,
                }))?;
            } else {
                for hex in hexes {
                    println!("{hex}");
                }
            }
        }
        Command::Contrast {
            foreground,
            background,
            level,
            size,
        } => {
            let fg = parse(&foreground)?;
            let bg = parse(&background)?;
            let options = ReadabilityOptions::new(level.parse::<Level>()?, size.parse::<Size>()?);
            let ratio = contrast_ratio(fg, bg);
            let readable = is_readable(fg, bg, options);
            if cli.json {
                print_json(&serde_json::json!({
                    "foreground": fg,
                    "background": bg,
                    "ratio": ratio,
                    "level": options.level,
                    "size": options.size,
                    "readable": readable,
                }))?;
            } else {
                println!(
                    "{ratio:.2}:1 {} {} {}",
                    options.level,
                    options.size,
                    verdict(readable)
                );
            }
        }
        Command::Simulate { color, deficiency } => {
            let color = parse(&color)?;
            match deficiency {
                Some(name) => {
                    let deficiency: Deficiency = name.parse()?;
                    let simulated = deficiency.simulate(color);
                    if cli.json {
                        print_json(&serde_json::json!({
                            "color": color,
                            "deficiency": deficiency,
                            "simulated": simulated,
                        }))?;
                    } else {
                        println!("{simulated}");
                    }
                }
                None => {
                    let all = blindness(color);
                    if cli.json {
                        print_json(&all)?;
                    } else {
                        for deficiency in Deficiency::ALL {
                            println!("{:<14} {}", deficiency.name(), all.get(deficiency));
                        }
                    }
                }
            }
        }
        Command::Random { count, seed } => {
            info!(count, seed, "sampling random colors");
            let hexes = hex_list(&random_colors(seed, count));
            if cli.json {
                print_json(&hexes)?;
            } else {
                for hex in hexes {
                    println!("{hex}");
                }
            }
        }
        Command::List => {
            let spaces: Vec<&str> = ColorSpace::ALL.iter().map(|s| s.name()).collect();
            let schemes: Vec<&str> = Scheme::ALL.iter().map(|s| s.name()).collect();
            let deficiencies: Vec<&str> = Deficiency::ALL.iter().map(|d| d.name()).collect();
            if cli.json {
                print_json(&serde_json::json!({
                    "spaces": spaces,
                    "schemes": schemes,
                    "deficiencies": deficiencies,
                }))?;
            } else {
                println!("Spaces:");
                println!("  {}", spaces.join(", "));
                println!("Schemes:");
                println!("  {}", schemes.join(", "));
                println!("Deficiencies:");
                println!("  {}", deficiencies.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
