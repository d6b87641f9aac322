//! `ringcode`: encode messages into parachute-style binary ring patterns.
//!
//! **Usage:**
//! ```text
//! ringcode bits --message mighty
//! ringcode min-digits --message "thếgiới" --unicode
//! ringcode arcs 0101
//! ringcode plan --config pattern.json
//! ringcode render --output parachute.svg
//! ```
//!
//! Without `--config`, `plan` and `render` use the Perseverance preset.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use ringcode::logging::init_logging;
use ringcode::{
    compute_arcs, compute_min_digit_width, compute_ring_bits, plan_pattern, render_pattern,
    CodecMode, PatternConfig, RingSpec, SvgSurface,
};

/// Encode messages into concentric binary ring patterns.
#[derive(Parser)]
#[command(name = "ringcode", version, about)]
struct Cli {
    /// Log pipeline details (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append log output to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the binary digit string of one ring.
    Bits(RingArgs),

    /// Print the minimum digits per character a message needs.
    MinDigits {
        #[arg(long, default_value = "")]
        message: String,

        /// Encode code points instead of alphabet positions.
        #[arg(long)]
        unicode: bool,
    },

    /// Print the arcs of a binary digit string as JSON.
    Arcs {
        /// A string of 0s and 1s.
        bits: String,
    },

    /// Print the full render plan as JSON.
    Plan {
        /// Pattern configuration (JSON). Defaults to the Perseverance preset.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render the pattern to an SVG file.
    Render {
        /// Pattern configuration (JSON). Defaults to the Perseverance preset.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Parameters of a single ring, mirroring `RingSpec`.
#[derive(Args)]
struct RingArgs {
    #[arg(long, default_value = "")]
    message: String,

    /// Encode code points instead of alphabet positions.
    #[arg(long)]
    unicode: bool,

    /// Number of character slots.
    #[arg(long, default_value_t = 8)]
    chars: usize,

    /// Binary digits per character.
    #[arg(long, default_value_t = 7)]
    digits: usize,

    /// Filler digits after each character.
    #[arg(long, default_value_t = 3)]
    padding: usize,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    char_offset: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    digit_offset: i64,
}

impl From<RingArgs> for RingSpec {
    fn from(args: RingArgs) -> Self {
        RingSpec::new(
            args.message,
            CodecMode::from_is_unicode(args.unicode),
            args.chars,
            args.digits,
            args.padding,
            args.char_offset,
            args.digit_offset,
        )
    }
}

fn load_config(path: Option<&Path>) -> Result<PatternConfig> {
    match path {
        Some(path) => PatternConfig::from_json_file(path)
            .with_context(|| format!("failed to load pattern config {}", path.display())),
        None => Ok(PatternConfig::perseverance()),
    }
}

/// Executes one parsed subcommand, writing its output to `out`.
fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Bits(args) => {
            let spec = RingSpec::from(args);
            writeln!(out, "{}", compute_ring_bits(&spec)?)?;
        }
        Command::MinDigits { message, unicode } => {
            let mode = CodecMode::from_is_unicode(unicode);
            writeln!(out, "{}", compute_min_digit_width(&message, mode))?;
        }
        Command::Arcs { bits } => {
            let arcs = compute_arcs(&bits)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&arcs)?)?;
        }
        Command::Plan { config } => {
            let plan = plan_pattern(&load_config(config.as_deref())?)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
        }
        Command::Render { config, output } => {
            let config = load_config(config.as_deref())?;
            let plan = plan_pattern(&config)?;

            let mut svg = SvgSurface::new(config.canvas_width, config.canvas_height);
            render_pattern(&plan, &mut svg);
            svg.save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            writeln!(
                out,
                "{} {} ({} rings, {} arcs)",
                "wrote".green().bold(),
                output.display(),
                plan.rings.len(),
                plan.total_arcs()
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logging(level, cli.log_file.as_deref()).context("failed to initialise logging")?;

    run(cli.command, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringcode::{ArcSpan, PatternPlan};

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_bits_defaults_match_empty_ring() {
        let cli = Cli::try_parse_from(["ringcode", "bits"]).unwrap();
        match cli.command {
            Command::Bits(args) => assert_eq!(RingSpec::from(args), RingSpec::empty()),
            _ => panic!("expected the bits subcommand"),
        }
    }

    #[test]
    fn test_bits_accepts_negative_offsets() {
        let cli = Cli::try_parse_from([
            "ringcode",
            "bits",
            "--message",
            "things",
            "--char-offset",
            "-2",
            "--digit-offset=-5",
        ])
        .unwrap();
        let Command::Bits(args) = cli.command else {
            panic!("expected the bits subcommand");
        };
        let spec = RingSpec::from(args);
        assert_eq!(spec.char_offset, -2);
        assert_eq!(spec.digit_offset, -5);
        assert_eq!(spec.message, "things");
    }

    #[test]
    fn test_bits_prints_single_char_ring() {
        let out = run_args(&["ringcode", "bits", "--message", "c", "--chars", "1"]).unwrap();
        assert_eq!(out, "0000011000\n");
    }

    #[test]
    fn test_bits_reports_too_narrow_width() {
        let result = run_args(&["ringcode", "bits", "--message", "mighty", "--digits", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_digits_in_unicode_mode() {
        let out = run_args(&["ringcode", "min-digits", "--message", "세계", "--unicode"]).unwrap();
        assert_eq!(out, "16\n");
    }

    #[test]
    fn test_arcs_prints_json_pairs() {
        let out = run_args(&["ringcode", "arcs", "1111"]).unwrap();
        let arcs: Vec<ArcSpan> = serde_json::from_str(&out).unwrap();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].start, 0.0);

        assert!(run_args(&["ringcode", "arcs", "01x1"]).is_err());
    }

    #[test]
    fn test_plan_defaults_to_perseverance() {
        let out = run_args(&["ringcode", "plan"]).unwrap();
        let plan: PatternPlan = serde_json::from_str(&out).unwrap();
        assert_eq!(plan.rings.len(), 3);
        assert_eq!(plan.total_arcs(), 28);
    }

    #[test]
    fn test_missing_config_file_names_the_path() {
        let err = load_config(Some(Path::new("/definitely/not/here/pattern.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here/pattern.json"));
        assert_eq!(load_config(None).unwrap(), PatternConfig::perseverance());
    }

    #[test]
    fn test_render_requires_output_and_writes_svg() {
        assert!(Cli::try_parse_from(["ringcode", "render"]).is_err());

        let path = std::env::temp_dir().join(format!("ringcode_cli_{}.svg", std::process::id()));
        let out = run_args(&["ringcode", "render", "--output", path.to_str().unwrap()]).unwrap();
        assert!(out.contains("3 rings, 28 arcs"));

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 28);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_verbose_flag_counts_and_is_global() {
        let cli = Cli::try_parse_from(["ringcode", "arcs", "01", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
